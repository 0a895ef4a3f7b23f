//! The scrolling page: all sections laid out as styled rows.
//!
//! The layout is rebuilt whenever the width changes. Section offsets come
//! from the same pass that produces the rows, so navigation and the active
//! nav item always match what is drawn.

use super::theme::Theme;
use super::wrap::wrap_words;
use crate::content::{
    Section, ACHIEVEMENTS, BLOG_POSTS, EDUCATION, EXPERIENCES, PERSONAL, PROJECTS, SKILLS, SOCIAL,
    STATS, TESTIMONIALS,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const MAX_TEXT_WIDTH: u16 = 96;
const MARGIN: u16 = 2;

#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    pub section_tops: Vec<(Section, u16)>,
    pub width: u16,
}

impl PageLayout {
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    pub fn section_top(&self, section: Section) -> Option<u16> {
        self.section_tops
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, top)| *top)
    }
}

struct Builder<'a> {
    theme: &'a Theme,
    text_width: usize,
    layout: PageLayout,
}

impl<'a> Builder<'a> {
    fn begin(&mut self, section: Section) {
        let top = self.layout.height();
        self.layout.section_tops.push((section, top));
    }

    fn blank(&mut self) {
        self.layout.lines.push(Line::default());
    }

    fn line(&mut self, line: Line<'static>) {
        self.layout.lines.push(line);
    }

    fn heading(&mut self, number: usize, title: &str) {
        self.line(Line::from(vec![
            Span::styled(format!("{number:02}. "), self.theme.accent_style()),
            Span::styled(title.to_string(), self.theme.heading_style()),
        ]));
        self.line(Line::styled(
            "─".repeat(self.text_width.min(40)),
            self.theme.border_style(),
        ));
        self.blank();
    }

    fn wrapped(&mut self, text: &str, style: Style, indent: usize) {
        let pad = " ".repeat(indent);
        for row in wrap_words(text, self.text_width.saturating_sub(indent)) {
            self.line(Line::styled(format!("{pad}{row}"), style));
        }
    }

    fn bullet(&mut self, text: &str, style: Style) {
        let rows = wrap_words(text, self.text_width.saturating_sub(4));
        for (i, row) in rows.into_iter().enumerate() {
            let marker = if i == 0 { "  • " } else { "    " };
            self.line(Line::from(vec![
                Span::styled(marker, self.theme.accent_style()),
                Span::styled(row, style),
            ]));
        }
    }

    /// Bracketed tags, flowed across as many rows as needed.
    fn tags(&mut self, tags: &[&str], style: Style) {
        let joined: Vec<String> = tags.iter().map(|t| format!("[{t}]")).collect();
        let mut spans = Vec::new();
        let mut used = 0;
        for tag in joined {
            let w = unicode_width::UnicodeWidthStr::width(tag.as_str()) + 1;
            if used + w > self.text_width && !spans.is_empty() {
                self.line(Line::from(std::mem::take(&mut spans)));
                used = 0;
            }
            spans.push(Span::styled(tag, style));
            spans.push(Span::raw(" "));
            used += w;
        }
        if !spans.is_empty() {
            self.line(Line::from(spans));
        }
    }
}

/// Lay out every section for a page `width` columns wide.
pub fn build(width: u16, year: i32, theme: &Theme) -> PageLayout {
    let text_width = width
        .saturating_sub(MARGIN * 2)
        .min(MAX_TEXT_WIDTH)
        .max(1) as usize;
    let mut b = Builder {
        theme,
        text_width,
        layout: PageLayout {
            width,
            ..Default::default()
        },
    };
    let muted = theme.muted_style();
    let text = theme.text_style();
    let accent = theme.accent_style();
    let alt = Style::default().fg(theme.accent_alt);

    b.begin(Section::Hero);
    b.blank();
    b.line(Line::styled(PERSONAL.name, theme.heading_style()));
    b.line(Line::styled(
        PERSONAL.title,
        accent.add_modifier(Modifier::BOLD),
    ));
    b.blank();
    b.wrapped(PERSONAL.tagline, text, 0);
    b.line(Line::styled(format!("⌖ {}", PERSONAL.location), muted));
    b.blank();
    b.tags(PERSONAL.focus_areas, alt);
    b.blank();
    let stats: Vec<Span> = STATS
        .iter()
        .flat_map(|stat| {
            [
                Span::styled(stat.value, accent.add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}   ", stat.label), muted),
            ]
        })
        .collect();
    b.line(Line::from(stats));
    b.blank();
    b.wrapped(
        "Press t for the terminal, j for the journey, c to get in touch.",
        muted,
        0,
    );
    b.blank();

    b.begin(Section::About);
    b.heading(1, "About Me");
    for paragraph in PERSONAL.about {
        b.wrapped(paragraph, text, 0);
        b.blank();
    }
    b.line(Line::styled("Education", theme.heading_style()));
    for edu in EDUCATION {
        b.bullet(
            &format!("{} - {} ({})", edu.institution, edu.degree, edu.year),
            text,
        );
    }
    b.blank();
    b.line(Line::styled("Achievements", theme.heading_style()));
    for achievement in ACHIEVEMENTS {
        b.bullet(
            &format!(
                "{} ({}): {}",
                achievement.title, achievement.year, achievement.description
            ),
            text,
        );
    }
    b.blank();

    b.begin(Section::Experience);
    b.heading(2, "Experience");
    for exp in EXPERIENCES {
        b.line(Line::from(vec![
            Span::styled(exp.role, theme.heading_style()),
            Span::styled(" @ ", muted),
            Span::styled(exp.company, accent),
        ]));
        b.line(Line::styled(
            format!("{} · {}", exp.period, exp.location),
            muted,
        ));
        b.wrapped(exp.company_description, alt, 0);
        for highlight in exp.highlights {
            b.bullet(highlight, text);
        }
        b.tags(exp.tech, muted);
        b.blank();
    }

    b.begin(Section::Projects);
    b.heading(3, "Projects");
    for project in PROJECTS {
        b.line(Line::styled(project.title, theme.heading_style()));
        b.wrapped(project.description, text, 0);
        b.wrapped(project.long_description, muted, 2);
        let metrics: Vec<Span> = project
            .metrics
            .iter()
            .flat_map(|m| {
                [
                    Span::styled(m.value, accent.add_modifier(Modifier::BOLD)),
                    Span::styled(format!(" {}   ", m.label), muted),
                ]
            })
            .collect();
        if !metrics.is_empty() {
            b.line(Line::from(metrics));
        }
        b.tags(project.tech, alt);
        if let Some(link) = project.link {
            b.line(Line::styled(format!("→ {link}"), accent));
        }
        b.blank();
    }

    b.begin(Section::Skills);
    b.heading(4, "Skills");
    for group in SKILLS {
        b.line(Line::styled(group.title, theme.heading_style()));
        b.tags(group.items, text);
        b.blank();
    }

    b.begin(Section::Testimonials);
    b.heading(5, "Testimonials");
    for testimonial in TESTIMONIALS {
        b.wrapped(&format!("\"{}\"", testimonial.quote), text, 2);
        b.line(Line::from(vec![
            Span::styled(format!("  - {}", testimonial.name), accent),
            Span::styled(
                format!(", {} · {}", testimonial.role, testimonial.company),
                muted,
            ),
        ]));
        b.line(Line::styled(
            format!("    {}", testimonial.relationship),
            Style::default()
                .fg(theme.placeholder)
                .add_modifier(Modifier::ITALIC),
        ));
        b.blank();
    }

    b.begin(Section::Blog);
    b.heading(6, "Writing");
    for post in BLOG_POSTS {
        b.wrapped(post.title, theme.heading_style(), 0);
        b.line(Line::styled(
            format!("{} · {}", post.date, post.read_time),
            muted,
        ));
        b.wrapped(post.description, text, 0);
        b.tags(post.tags, alt);
        b.line(Line::styled(format!("→ {}", post.link), accent));
        b.blank();
    }

    b.begin(Section::Contact);
    b.heading(7, "Get In Touch");
    b.wrapped(
        "Have a project in mind or want to discuss opportunities? Press c to send a message.",
        text,
        0,
    );
    b.blank();
    for (label, value) in [
        ("Email", PERSONAL.email),
        ("Phone", PERSONAL.phone),
        ("Location", PERSONAL.location),
        ("Website", PERSONAL.website),
    ] {
        b.line(Line::from(vec![
            Span::styled(format!("{label:<10}"), muted),
            Span::styled(value, text),
        ]));
    }
    b.blank();
    for social in SOCIAL {
        b.line(Line::from(vec![
            Span::styled(format!("{:<14}", social.label), accent),
            Span::styled(social.url, muted),
        ]));
    }
    b.blank();

    b.begin(Section::Footer);
    b.line(Line::styled(
        "─".repeat(text_width),
        theme.border_style(),
    ));
    b.line(Line::styled(footer_text(year), muted));
    b.blank();

    b.layout
}

pub fn footer_text(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", PERSONAL.name)
}

/// Draw the visible slice of the page into `area`.
pub fn render(frame: &mut Frame, area: Rect, layout: &PageLayout, offset: u16) {
    let inner = Rect {
        x: area.x + MARGIN.min(area.width),
        y: area.y,
        width: area.width.saturating_sub(MARGIN * 2),
        height: area.height,
    };
    let paragraph = Paragraph::new(layout.lines.clone()).scroll((offset, 0));
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(layout: &PageLayout) -> Vec<String> {
        layout
            .lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_sections_in_page_order() {
        let layout = build(80, 2026, &Theme::dark());
        let order: Vec<Section> = layout.section_tops.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Section::ALL);
        assert!(layout
            .section_tops
            .windows(2)
            .all(|w| w[0].1 < w[1].1));
    }

    #[test]
    fn test_footer_shows_year() {
        let layout = build(80, 2031, &Theme::dark());
        let footer = layout.section_top(Section::Footer).unwrap() as usize;
        let rows = text_of(&layout);
        assert!(rows[footer..]
            .iter()
            .any(|row| row.contains("© 2031 Pratik Desai. All rights reserved.")));
    }

    #[test]
    fn test_narrow_width_grows_page() {
        let wide = build(120, 2026, &Theme::dark());
        let narrow = build(40, 2026, &Theme::dark());
        assert!(narrow.height() > wide.height());
        assert!(narrow.section_top(Section::Contact) > wide.section_top(Section::Contact));
    }
}
