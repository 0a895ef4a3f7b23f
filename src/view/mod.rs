//! Rendering.
//!
//! Draw order: background surface, progress bar, nav bar, page, hints,
//! rocket, then whichever overlays are open (terminal below the modals).

pub mod contact_form;
pub mod journey_modal;
pub mod page;
pub mod rocket;
pub mod status_bar;
pub mod terminal_panel;
pub mod theme;
pub mod wrap;

use crate::app::App;
use crate::fx::Background;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = app.theme();

    match app.surface() {
        Some(surface) => surface.blit(frame.buffer_mut(), area),
        None => frame.render_widget(Block::default().style(Style::default().bg(theme.page_bg)), area),
    }
    if area.height == 0 || area.width == 0 {
        return;
    }

    let progress = app.scroll().eased_progress();
    status_bar::render_progress(frame, Rect { height: 1, ..area }, progress, theme);
    if area.height > 1 {
        let nav = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        status_bar::render_nav(frame, nav, app.active_section(), theme);
    }

    let page_area = app.page_area().intersection(area);
    page::render(frame, page_area, app.page(), app.scroll().offset());

    if area.height > 2 {
        let hints = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        status_bar::render_hints(frame, hints, theme);
    }

    if matches!(app.animation().background(), Background::Starfield(_)) {
        rocket::render(frame, area, page_area, progress * 100.0, theme);
    }

    if app.terminal().is_open() {
        terminal_panel::render(
            frame,
            page_area,
            app.terminal(),
            &app.config().terminal.prompt,
            theme,
        );
    }
    if app.contact().is_open() {
        contact_form::render(frame, area, app.contact(), theme);
    }
    if app.journey().is_open() {
        journey_modal::render(frame, area, app.journey(), theme);
    }
}
