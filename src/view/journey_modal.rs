//! "Journey Through Time" modal.
//!
//! Header with unlock count, a progress gauge, the timeline of stops and the
//! details of the current stop. A small popup announces newly unlocked
//! stops while the notice is pending.

use super::theme::Theme;
use super::wrap::wrap_words;
use crate::journey::{JourneyNavigator, ACHIEVEMENT_TITLE};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};
use ratatui::Frame;

const MODAL_WIDTH: u16 = 90;
const MODAL_HEIGHT: u16 = 30;

pub fn modal_area(area: Rect) -> Rect {
    let width = MODAL_WIDTH.min(area.width.saturating_sub(4)).max(area.width.min(10));
    let height = MODAL_HEIGHT.min(area.height.saturating_sub(2)).max(area.height.min(8));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

pub fn render(frame: &mut Frame, area: Rect, journey: &JourneyNavigator, theme: &Theme) {
    let modal = modal_area(area);
    frame.render_widget(Clear, modal);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_alt))
        .title(Span::styled(" Journey Through Time ", theme.heading_style()))
        .title(
            Line::styled(
                format!(" {}/{} Unlocked ", journey.visited_count(), journey.len()),
                Style::default().fg(theme.warning),
            )
            .right_aligned(),
        )
        .title_bottom(
            Line::styled(
                " ←/→ travel · 1-6 jump · Home/End · Esc close ",
                theme.muted_style(),
            )
            .centered(),
        )
        .style(Style::default().bg(theme.panel_bg));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let Some(stop) = journey.current_stop() else {
        return;
    };
    let accent = rgb(stop.color);

    let [gauge_area, timeline_area, details_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(theme.progress_track))
        .ratio(journey.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, gauge_area);

    // Timeline: one marker per stop, visited ones lit
    let mut markers = Vec::new();
    let mut years = Vec::new();
    for (i, s) in journey.stops().iter().enumerate() {
        let lit = journey.is_visited(i);
        let style = if i == journey.current() {
            Style::default()
                .fg(rgb(s.color))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if lit {
            Style::default().fg(rgb(s.color))
        } else {
            Style::default().fg(theme.placeholder)
        };
        let glyph = if lit { "●" } else { "○" };
        let cell = format!(" {} {} ", i + 1, glyph);
        let cell_width = unicode_width::UnicodeWidthStr::width(cell.as_str()).max(s.year.len());
        markers.push(Span::styled(format!("{cell:<cell_width$}"), style));
        markers.push(Span::raw(" "));
        let year = if lit { s.year } else { "????" };
        years.push(Span::styled(
            format!("{year:<cell_width$}"),
            if lit { theme.muted_style() } else { style },
        ));
        years.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(vec![Line::from(markers), Line::from(years)]),
        timeline_area,
    );

    let width = details_area.width.saturating_sub(2) as usize;
    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(stop.year, Style::default().fg(accent)),
            Span::styled("  ", theme.muted_style()),
            Span::styled(stop.title, theme.heading_style()),
        ]),
        Line::styled(stop.subtitle, Style::default().fg(accent)),
        Line::default(),
    ];
    for row in wrap_words(stop.description, width) {
        lines.push(Line::styled(row, theme.text_style()));
    }
    lines.push(Line::default());
    lines.push(Line::styled("Achievements", theme.heading_style()));
    for achievement in stop.achievements {
        lines.push(Line::from(vec![
            Span::styled("  ★ ", Style::default().fg(theme.warning)),
            Span::styled(*achievement, theme.text_style()),
        ]));
    }
    if let Some(stack) = stop.tech_stack {
        lines.push(Line::default());
        lines.push(Line::styled("Tech Stack", theme.heading_style()));
        let tags: Vec<Span> = stack
            .iter()
            .flat_map(|t| [Span::styled(format!("[{t}]"), Style::default().fg(accent)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(tags));
    }
    frame.render_widget(Paragraph::new(lines), details_area.inner(ratatui::layout::Margin::new(1, 0)));

    let position = format!("Stop {} of {}", journey.current() + 1, journey.len());
    frame.render_widget(
        Paragraph::new(Line::styled(position, theme.muted_style()).centered()),
        footer_area,
    );

    if let Some(title) = journey.achievement() {
        render_achievement(frame, modal, title, accent, theme);
    }
}

fn render_achievement(frame: &mut Frame, modal: Rect, title: &str, accent: Color, theme: &Theme) {
    let width = (title.len().max(ACHIEVEMENT_TITLE.len()) as u16 + 8).min(modal.width);
    let height = 4.min(modal.height);
    let popup = Rect {
        x: modal.x + modal.width.saturating_sub(width) / 2,
        y: modal.y + 1,
        width,
        height,
    };
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(theme.panel_bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                format!("🏆 {ACHIEVEMENT_TITLE}"),
                Style::default()
                    .fg(theme.warning)
                    .add_modifier(Modifier::BOLD),
            )
            .centered(),
            Line::styled(title.to_string(), theme.text_style()).centered(),
        ]),
        inner,
    );
}
