//! Rasterizes `Surface` calls onto terminal cells.
//!
//! Each cell is `CELL_WIDTH_PX` x `CELL_HEIGHT_PX` virtual pixels. Fills and
//! gradients blend into a per-cell background color; circles smaller than a
//! cell become glyphs. The layers persist between frames so a throttled
//! frame can re-blit the previous picture.

use super::surface::{sample_gradient, ColorStop, Rgba, Surface};
use super::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

impl Rgb {
    fn from_rgba(c: Rgba) -> Self {
        Self {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
        }
    }

    fn blend(self, over: Rgba) -> Self {
        let a = over.a.clamp(0.0, 1.0);
        let mix = |under: f64, top: u8| under + (top as f64 - under) * a;
        Self {
            r: mix(self.r, over.r),
            g: mix(self.g, over.g),
            b: mix(self.b, over.b),
        }
    }

    fn to_color(self) -> Color {
        let q = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Color::Rgb(q(self.r), q(self.g), q(self.b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glyph {
    symbol: char,
    color: Rgba,
}

/// Glyph for a circle of the given pixel radius.
pub fn glyph_for_radius(radius: f64) -> char {
    if radius < 1.0 {
        '·'
    } else if radius < 2.0 {
        '•'
    } else {
        '●'
    }
}

#[derive(Debug, Clone)]
pub struct CellSurface {
    cols: u16,
    rows: u16,
    base: Rgb,
    background: Vec<Rgb>,
    glyphs: Vec<Option<Glyph>>,
}

impl CellSurface {
    /// A surface covering `cols` x `rows` cells. None when either is zero.
    pub fn new(cols: u16, rows: u16, base: Rgba) -> Option<Self> {
        if cols == 0 || rows == 0 {
            return None;
        }
        let len = cols as usize * rows as usize;
        let base = Rgb::from_rgba(base);
        Some(Self {
            cols,
            rows,
            base,
            background: vec![base; len],
            glyphs: vec![None; len],
        })
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    fn index(&self, col: i64, row: i64) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    fn cell_of(x: f64, y: f64) -> (i64, i64) {
        (
            (x / CELL_WIDTH_PX).floor() as i64,
            (y / CELL_HEIGHT_PX).floor() as i64,
        )
    }

    fn cell_center(col: i64, row: i64) -> (f64, f64) {
        (
            (col as f64 + 0.5) * CELL_WIDTH_PX,
            (row as f64 + 0.5) * CELL_HEIGHT_PX,
        )
    }

    fn blend_cell(&mut self, col: i64, row: i64, color: Rgba) {
        if let Some(i) = self.index(col, row) {
            self.background[i] = self.background[i].blend(color);
        }
    }

    /// Background color of a cell, for tests and debugging.
    pub fn background_at(&self, col: u16, row: u16) -> Option<Color> {
        self.index(col as i64, row as i64)
            .map(|i| self.background[i].to_color())
    }

    pub fn glyph_at(&self, col: u16, row: u16) -> Option<char> {
        self.index(col as i64, row as i64)
            .and_then(|i| self.glyphs[i])
            .map(|g| g.symbol)
    }

    /// Copy the picture into `buf` at `area`'s origin, clipped to both.
    pub fn blit(&self, buf: &mut Buffer, area: Rect) {
        let area = area.intersection(buf.area);
        let cols = area.width.min(self.cols);
        let rows = area.height.min(self.rows);
        for row in 0..rows {
            for col in 0..cols {
                let i = row as usize * self.cols as usize + col as usize;
                let bg = self.background[i];
                let cell = &mut buf[(area.x + col, area.y + row)];
                cell.set_bg(bg.to_color());
                match self.glyphs[i] {
                    Some(glyph) => {
                        cell.set_char(glyph.symbol);
                        cell.set_fg(bg.blend(glyph.color).to_color());
                    }
                    None => {
                        cell.set_char(' ');
                    }
                }
            }
        }
    }
}

impl Surface for CellSurface {
    fn size(&self) -> (f64, f64) {
        (
            self.cols as f64 * CELL_WIDTH_PX,
            self.rows as f64 * CELL_HEIGHT_PX,
        )
    }

    fn clear(&mut self) {
        let base = self.base;
        self.background.iter_mut().for_each(|c| *c = base);
        self.glyphs.iter_mut().for_each(|g| *g = None);
    }

    fn fill_vertical_gradient(&mut self, stops: &[ColorStop]) {
        let (_, height) = self.size();
        for row in 0..self.rows as i64 {
            let (_, cy) = Self::cell_center(0, row);
            let color = sample_gradient(stops, cy / height);
            for col in 0..self.cols as i64 {
                self.blend_cell(col, row, color);
            }
        }
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        if radius * 2.0 >= CELL_WIDTH_PX {
            let (c0, r0) = Self::cell_of(x - radius, y - radius);
            let (c1, r1) = Self::cell_of(x + radius, y + radius);
            let (c1, r1) = (c1.min(self.cols as i64 - 1), r1.min(self.rows as i64 - 1));
            for row in r0.max(0)..=r1 {
                for col in c0.max(0)..=c1 {
                    let (cx, cy) = Self::cell_center(col, row);
                    if (cx - x).hypot(cy - y) <= radius {
                        self.blend_cell(col, row, color);
                    }
                }
            }
            return;
        }

        let (col, row) = Self::cell_of(x, y);
        let Some(i) = self.index(col, row) else {
            return;
        };
        let glyph = Glyph {
            symbol: glyph_for_radius(radius),
            color,
        };
        // Brightest point in the cell wins.
        match self.glyphs[i] {
            Some(existing) if existing.color.a >= glyph.color.a => {}
            _ => self.glyphs[i] = Some(glyph),
        }
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba) {
        let (c0, r0) = Self::cell_of(x0, y0);
        let (c1, r1) = Self::cell_of(x1, y1);
        let steps = (c1 - c0).abs().max((r1 - r0).abs());
        if steps == 0 {
            self.blend_cell(c0, r0, color);
            return;
        }
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let col = (c0 as f64 + (c1 - c0) as f64 * t).round() as i64;
            let row = (r0 as f64 + (r1 - r0) as f64 * t).round() as i64;
            self.blend_cell(col, row, color);
        }
    }

    fn radial_gradient(&mut self, cx: f64, cy: f64, radius: f64, stops: &[ColorStop]) {
        if radius <= 0.0 {
            return;
        }
        let (c0, r0) = Self::cell_of(cx - radius, cy - radius);
        let (c1, r1) = Self::cell_of(cx + radius, cy + radius);
        let c0 = c0.max(0);
        let r0 = r0.max(0);
        let c1 = c1.min(self.cols as i64 - 1);
        let r1 = r1.min(self.rows as i64 - 1);
        for row in r0..=r1 {
            for col in c0..=c1 {
                let (x, y) = Self::cell_center(col, row);
                let t = (x - cx).hypot(y - cy) / radius;
                if t <= 1.0 {
                    self.blend_cell(col, row, sample_gradient(stops, t));
                }
            }
        }
    }
}
