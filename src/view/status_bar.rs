//! Progress bar, navigation bar and key-hint line.

use super::theme::Theme;
use crate::content::{Section, NAV_ITEMS, PERSONAL};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Filled columns of a bar `width` wide at `progress` (0.0..=1.0).
pub fn progress_columns(progress: f64, width: u16) -> u16 {
    ((progress.clamp(0.0, 1.0) * width as f64).round() as u16).min(width)
}

/// One-row scroll progress bar.
pub fn render_progress(frame: &mut Frame, area: Rect, progress: f64, theme: &Theme) {
    let filled = progress_columns(progress, area.width) as usize;
    let rest = area.width as usize - filled;
    let line = Line::from(vec![
        Span::styled("▀".repeat(filled), Style::default().fg(theme.progress_fg)),
        Span::styled("▀".repeat(rest), Style::default().fg(theme.progress_track)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Name on the left, numbered sections after it. `active` is highlighted.
pub fn render_nav(frame: &mut Frame, area: Rect, active: Option<Section>, theme: &Theme) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", PERSONAL.name),
            theme.heading_style(),
        ),
        Span::styled("│", theme.border_style()),
    ];
    for (i, section) in NAV_ITEMS.iter().enumerate() {
        let style = if Some(*section) == active {
            Style::default()
                .fg(theme.nav_active_fg)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            theme.muted_style()
        };
        spans.push(Span::styled(format!(" {}", i + 1), theme.accent_style()));
        spans.push(Span::styled(format!(" {} ", section.title()), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.nav_bg)),
        area,
    );
}

pub fn render_hints(frame: &mut Frame, area: Rect, theme: &Theme) {
    let keys = [
        ("↑↓/PgUp/PgDn", "scroll"),
        ("1-6", "jump"),
        ("t", "terminal"),
        ("j", "journey"),
        ("c", "contact"),
        ("r", "resume"),
        ("q", "quit"),
    ];
    let mut spans = Vec::new();
    for (key, action) in keys {
        spans.push(Span::styled(format!(" {key}"), theme.accent_style()));
        spans.push(Span::styled(format!(" {action} "), theme.muted_style()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.nav_bg)),
        area,
    );
}
