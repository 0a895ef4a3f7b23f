//! Drawing surface abstraction.
//!
//! The simulations paint in virtual pixels through `Surface`. The terminal
//! implementation lives in `cell_surface`; `RecordingSurface` captures the
//! calls so tests can assert on what was drawn.

/// Straight (non-premultiplied) color with a fractional alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn scale_alpha(self, factor: f64) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// Component-wise linear interpolation, alpha included.
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// One stop of a gradient, `offset` in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Sample a gradient at `t`. Stops must be sorted by offset.
pub fn sample_gradient(stops: &[ColorStop], t: f64) -> Rgba {
    let Some(first) = stops.first() else {
        return Rgba::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t <= hi.offset {
            let span = hi.offset - lo.offset;
            if span <= f64::EPSILON {
                return hi.color;
            }
            return lo.color.lerp(hi.color, (t - lo.offset) / span);
        }
    }
    stops[stops.len() - 1].color
}

/// A 2D canvas in virtual pixels.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);

    fn clear(&mut self);

    /// Fill the whole surface with a top-to-bottom gradient.
    fn fill_vertical_gradient(&mut self, stops: &[ColorStop]);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba);

    /// Blend a radial gradient centred on (`cx`, `cy`) out to `radius`.
    fn radial_gradient(&mut self, cx: f64, cy: f64, radius: f64, stops: &[ColorStop]);
}

/// A recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    VerticalGradient(Vec<ColorStop>),
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Rgba,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Rgba,
    },
    RadialGradient {
        cx: f64,
        cy: f64,
        radius: f64,
        stops: Vec<ColorStop>,
    },
}

/// Surface that keeps a log of every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn circles(&self) -> impl Iterator<Item = (f64, f64, f64, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Circle {
                x,
                y,
                radius,
                color,
            } => Some((x, y, radius, color)),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }

    pub fn radial_gradients(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::RadialGradient { cx, cy, radius, .. } => Some((*cx, *cy, *radius)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_vertical_gradient(&mut self, stops: &[ColorStop]) {
        self.ops.push(DrawOp::VerticalGradient(stops.to_vec()));
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba) {
        self.ops.push(DrawOp::Line {
            from: (x0, y0),
            to: (x1, y1),
            color,
        });
    }

    fn radial_gradient(&mut self, cx: f64, cy: f64, radius: f64, stops: &[ColorStop]) {
        self.ops.push(DrawOp::RadialGradient {
            cx,
            cy,
            radius,
            stops: stops.to_vec(),
        });
    }
}
