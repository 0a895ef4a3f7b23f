use ratatui::style::{Color, Modifier, Style};

/// Colors used across the page and its overlays.
#[derive(Debug, Clone)]
pub struct Theme {
    pub page_bg: Color,
    pub panel_bg: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub heading: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,

    pub nav_bg: Color,
    pub nav_active_fg: Color,
    pub progress_fg: Color,
    pub progress_track: Color,

    pub terminal_bg: Color,
    pub terminal_prompt: Color,
    pub terminal_output: Color,
    pub terminal_error: Color,
    pub terminal_art: Color,
    pub matrix_fg: Color,
    pub matrix_head: Color,

    pub input_bg: Color,
    pub input_focus_border: Color,
    pub placeholder: Color,
}

impl Theme {
    /// The single dark look the page ships with.
    pub fn dark() -> Self {
        Self {
            page_bg: Color::Rgb(0x0a, 0x0a, 0x0f),
            panel_bg: Color::Rgb(0x0d, 0x0d, 0x12),
            border: Color::Rgb(0x1e, 0x1e, 0x2e),
            text: Color::Rgb(0xe4, 0xe4, 0xe7),
            muted: Color::Rgb(0xa1, 0xa1, 0xaa),
            heading: Color::Rgb(0xfa, 0xfa, 0xfa),
            accent: Color::Rgb(0x3b, 0x82, 0xf6),
            accent_alt: Color::Rgb(0x8b, 0x5c, 0xf6),
            success: Color::Rgb(0x22, 0xc5, 0x5e),
            error: Color::Rgb(0xef, 0x44, 0x44),
            warning: Color::Rgb(0xf5, 0x9e, 0x0b),

            nav_bg: Color::Rgb(0x0d, 0x0d, 0x12),
            nav_active_fg: Color::Rgb(0x3b, 0x82, 0xf6),
            progress_fg: Color::Rgb(0x8b, 0x5c, 0xf6),
            progress_track: Color::Rgb(0x1e, 0x1e, 0x2e),

            terminal_bg: Color::Rgb(0x0d, 0x0d, 0x12),
            terminal_prompt: Color::Rgb(0x22, 0xc5, 0x5e),
            terminal_output: Color::Rgb(0xa1, 0xa1, 0xaa),
            terminal_error: Color::Rgb(0xef, 0x44, 0x44),
            terminal_art: Color::Rgb(0x06, 0xb6, 0xd4),
            matrix_fg: Color::Rgb(0x16, 0xa3, 0x4a),
            matrix_head: Color::Rgb(0xbb, 0xf7, 0xd0),

            input_bg: Color::Rgb(0x12, 0x12, 0x1a),
            input_focus_border: Color::Rgb(0x3b, 0x82, 0xf6),
            placeholder: Color::Rgb(0x52, 0x52, 0x5b),
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
