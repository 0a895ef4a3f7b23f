//! Scroll-linked rocket drawn over the starfield.

use super::theme::Theme;
use crate::fx::starfield::{milestone_for, rocket_position};
use crate::fx::{px_to_cell, CELL_HEIGHT_PX};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const ROCKET: &str = "🚀";

/// Cell the rocket occupies at `progress` (0..100).
///
/// Positioned in `screen`, the same geometry the starfield emits exhaust
/// in, then kept inside the rows of `bounds`.
pub fn rocket_cell(screen: Rect, bounds: Rect, progress: f64) -> Option<(u16, u16)> {
    if screen.height == 0 || bounds.width == 0 || bounds.height == 0 {
        return None;
    }
    let height_px = screen.height as f64 * CELL_HEIGHT_PX;
    let (x, y) = rocket_position(progress.clamp(0.0, 100.0), height_px);
    let (col, row) = px_to_cell(x, y)?;
    let col = screen.x + col;
    if col < bounds.x || col >= bounds.right() {
        return None;
    }
    let row = (screen.y + row).clamp(bounds.y, bounds.bottom() - 1);
    Some((col, row))
}

pub fn render(frame: &mut Frame, screen: Rect, area: Rect, progress: f64, theme: &Theme) {
    let Some((x, y)) = rocket_cell(screen, area, progress) else {
        return;
    };
    let mut spans = vec![Span::raw(ROCKET)];
    if let Some(milestone) = milestone_for(progress) {
        spans.push(Span::styled(
            format!(" {} ", milestone.year),
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(milestone.label, theme.muted_style()));
    }
    let label = Rect {
        x,
        y,
        width: area.right().saturating_sub(x),
        height: 1,
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), label);
}
