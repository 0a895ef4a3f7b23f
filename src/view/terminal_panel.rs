//! Floating terminal panel.

use super::theme::Theme;
use crate::shell::commands::{WELCOME_ART, WELCOME_HINT, WELCOME_MESSAGE};
use crate::shell::matrix::MatrixRain;
use crate::shell::Interpreter;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const PANEL_WIDTH: u16 = 84;
const PANEL_HEIGHT: u16 = 22;
const TITLE: &str = " terminal ";

/// Where the panel sits inside `area`: bottom right, a single row when
/// minimized.
pub fn panel_area(area: Rect, minimized: bool) -> Rect {
    let width = PANEL_WIDTH.min(area.width.saturating_sub(2)).max(1).min(area.width);
    let height = if minimized {
        3.min(area.height)
    } else {
        PANEL_HEIGHT.min(area.height.saturating_sub(2)).max(3).min(area.height)
    };
    Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(height),
        width,
        height,
    }
}

/// Rows available for scrollback and input inside the panel.
pub fn inner_rows(area: Rect) -> u16 {
    panel_area(area, false).height.saturating_sub(2)
}

pub fn render(frame: &mut Frame, area: Rect, interp: &Interpreter, prompt: &str, theme: &Theme) {
    let panel = panel_area(area, interp.is_minimized());
    frame.render_widget(Clear, panel);

    let hint = if interp.is_minimized() {
        " F2 restore · Esc close "
    } else {
        " F2 minimize · Esc close "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(TITLE, theme.heading_style()))
        .title_bottom(Line::styled(hint, theme.muted_style()).right_aligned())
        .style(Style::default().bg(theme.terminal_bg));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    if interp.is_minimized() || inner.height == 0 {
        return;
    }

    if let Some(rain) = interp.matrix_rain() {
        draw_rain(frame.buffer_mut(), inner, rain, theme);
        return;
    }

    let lines = transcript(interp, prompt, theme);
    // Keep the input row in view
    let skip = lines.len().saturating_sub(inner.height as usize);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(visible), inner);
}

fn prompt_spans(prompt: &str, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            prompt.to_string(),
            Style::default()
                .fg(theme.terminal_prompt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("$ ", theme.muted_style()),
    ]
}

/// Every row of the panel's text, oldest first, ending with the input line.
pub fn transcript(interp: &Interpreter, prompt: &str, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if interp.scrollback().is_empty() {
        let art = Style::default().fg(theme.terminal_art);
        for row in WELCOME_ART.lines() {
            lines.push(Line::styled(row.to_string(), art));
        }
        lines.push(Line::default());
        lines.push(Line::styled(WELCOME_MESSAGE, theme.text_style()));
        lines.push(Line::styled(WELCOME_HINT, theme.muted_style()));
        lines.push(Line::default());
    }

    for entry in interp.scrollback() {
        let mut command = prompt_spans(prompt, theme);
        command.push(Span::styled(entry.command.clone(), theme.text_style()));
        lines.push(Line::from(command));

        let style = if entry.is_error {
            Style::default().fg(theme.terminal_error)
        } else if entry.body.is_art() {
            Style::default().fg(theme.terminal_art)
        } else {
            Style::default().fg(theme.terminal_output)
        };
        for row in entry.body.text().lines() {
            lines.push(Line::styled(row.to_string(), style));
        }
        lines.push(Line::default());
    }

    let mut input = prompt_spans(prompt, theme);
    input.push(Span::styled(interp.input().to_string(), theme.text_style()));
    input.push(Span::styled(
        "█",
        Style::default().fg(theme.terminal_prompt),
    ));
    lines.push(Line::from(input));
    lines
}

fn draw_rain(buf: &mut Buffer, area: Rect, rain: &MatrixRain, theme: &Theme) {
    let columns = rain.columns();
    if columns.is_empty() || area.width == 0 {
        return;
    }
    for (i, column) in columns.iter().enumerate() {
        let x = area.x + (i as u32 * area.width as u32 / columns.len() as u32) as u16;
        for (j, glyph) in column.glyphs.iter().enumerate() {
            let row = column.offset as i32 - j as i32;
            if row < 0 || row >= area.height as i32 {
                continue;
            }
            let color = if j == 0 {
                theme.matrix_head
            } else {
                theme.matrix_fg
            };
            if let Some(cell) = buf.cell_mut((x, area.y + row as u16)) {
                cell.set_char(*glyph).set_fg(color);
            }
        }
    }
}
