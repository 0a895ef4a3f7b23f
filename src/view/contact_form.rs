use super::theme::Theme;
use crate::app::contact_form::{ContactForm, Field, SubmitStatus, SUCCESS_MESSAGE};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const FORM_WIDTH: u16 = 64;
/// Title row + four bordered fields + status row + borders
const FORM_HEIGHT: u16 = 2 + 1 + 4 * 3 + 2;

pub fn form_area(area: Rect) -> Rect {
    let width = FORM_WIDTH.min(area.width);
    let height = FORM_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

pub fn render(frame: &mut Frame, area: Rect, form: &ContactForm, theme: &Theme) {
    let popup = form_area(area);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(" Send a Message ", theme.heading_style()))
        .title_bottom(
            Line::styled(" Tab next · Ctrl+S send · Esc close ", theme.muted_style())
                .centered(),
        )
        .style(Style::default().bg(theme.panel_bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut y = inner.y;
    for field in Field::ALL {
        if y + 3 > inner.bottom() {
            break;
        }
        let focused = form.focus() == field;
        let value = form.value(field);
        let field_area = Rect::new(inner.x, y, inner.width, 3);
        let border = if focused {
            Style::default().fg(theme.input_focus_border)
        } else {
            theme.border_style()
        };
        let content = if value.is_empty() {
            Line::styled(field.placeholder(), Style::default().fg(theme.placeholder))
        } else {
            // Show the tail so the cursor end stays visible
            let room = field_area.width.saturating_sub(3) as usize;
            let chars: Vec<char> = value.chars().collect();
            let start = chars.len().saturating_sub(room);
            let visible: String = chars[start..].iter().collect();
            let mut spans = vec![Span::styled(visible, theme.text_style())];
            if focused {
                spans.push(Span::styled("█", Style::default().fg(theme.accent)));
            }
            Line::from(spans)
        };
        let label_style = if focused {
            theme.accent_style().add_modifier(Modifier::BOLD)
        } else {
            theme.muted_style()
        };
        frame.render_widget(
            Paragraph::new(content).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(Span::styled(format!(" {} ", field.label()), label_style))
                    .style(Style::default().bg(theme.input_bg)),
            ),
            field_area,
        );
        y += 3;
    }

    let status = match form.status() {
        SubmitStatus::Idle => None,
        SubmitStatus::Success => Some(Line::styled(
            SUCCESS_MESSAGE,
            Style::default().fg(theme.success),
        )),
        SubmitStatus::Error(msg) => Some(Line::styled(
            msg.clone(),
            Style::default().fg(theme.error),
        )),
    };
    if let Some(line) = status {
        if y < inner.bottom() {
            let status_area = Rect::new(inner.x, y, inner.width, inner.bottom() - y);
            frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), status_area);
        }
    }
}
