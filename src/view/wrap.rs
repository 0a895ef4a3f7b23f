//! Word wrapping for page prose.
//!
//! Breaks on whitespace, measuring display width, so the page layout and
//! the section offsets derived from it always agree on row counts.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` into rows no wider than `width` columns.
///
/// Always returns at least one row. A word wider than `width` is split
/// at the column limit.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Hard split; always take at least one char per row
        for c in word.chars() {
            let c_width = c.width().unwrap_or(0);
            if current_width + c_width > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += c_width;
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}
