//! Twinkling starfield with nebula washes and the rocket exhaust trail.
//!
//! Everything here is in viewport coordinates: stars drift down and wrap
//! to the top, the rocket climbs as the page scrolls.

use super::particles::population;
use super::surface::{ColorStop, Rgba, Surface};
use rand::Rng;

/// Horizontal position of the rocket, in pixels from the left edge.
pub const ROCKET_X: f64 = 60.0;

const DRIFT_FACTOR: f64 = 0.5;
const EXHAUST_LIFE: u32 = 30;
const EXHAUST_GRAVITY: f64 = 0.1;
const EXHAUST_OFFSET_Y: f64 = 40.0;
const EMISSION_CHANCE: f64 = 0.5;

const BACKGROUND: [ColorStop; 3] = [
    ColorStop::new(0.0, Rgba::opaque(0x0a, 0x0a, 0x0f)),
    ColorStop::new(0.5, Rgba::opaque(0x0d, 0x0d, 0x15)),
    ColorStop::new(1.0, Rgba::opaque(0x0a, 0x0a, 0x0f)),
];

const NEBULA_BLUE: [ColorStop; 3] = [
    ColorStop::new(0.0, Rgba::new(59, 130, 246, 0.05)),
    ColorStop::new(0.5, Rgba::new(139, 92, 246, 0.03)),
    ColorStop::new(1.0, Rgba::TRANSPARENT),
];

const NEBULA_PURPLE: [ColorStop; 3] = [
    ColorStop::new(0.0, Rgba::new(139, 92, 246, 0.04)),
    ColorStop::new(0.5, Rgba::new(59, 130, 246, 0.02)),
    ColorStop::new(1.0, Rgba::TRANSPARENT),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub speed: f64,
}

impl Star {
    /// Brightness multiplier at `t_ms`, in `0.4..=1.0`.
    pub fn twinkle(&self, t_ms: f64) -> f64 {
        (t_ms * 0.001 * self.speed + self.x).sin() * 0.3 + 0.7
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExhaustParticle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub life: u32,
    pub max_life: u32,
}

impl ExhaustParticle {
    fn alpha(&self) -> f64 {
        self.life as f64 / self.max_life as f64
    }
}

/// A labelled band of scroll progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub start: u8,
    pub end: u8,
    pub label: &'static str,
    pub year: &'static str,
}

pub const MILESTONES: [Milestone; 6] = [
    Milestone { start: 0, end: 15, label: "Starting Point", year: "2015" },
    Milestone { start: 15, end: 30, label: "CDAC Transition", year: "2017" },
    Milestone { start: 30, end: 45, label: "First Tech Role", year: "2018" },
    Milestone { start: 45, end: 60, label: "Startup Journey", year: "2019" },
    Milestone { start: 60, end: 80, label: "Enterprise Scale", year: "2021" },
    Milestone { start: 80, end: 100, label: "Current Chapter", year: "2023" },
];

/// Band containing `progress` (0..100). Bands are half-open, so 100 has none.
pub fn milestone_for(progress: f64) -> Option<&'static Milestone> {
    MILESTONES
        .iter()
        .find(|m| progress >= m.start as f64 && progress < m.end as f64)
}

/// Rocket position for a scroll progress of 0..100 in a viewport `height` tall.
pub fn rocket_position(progress: f64, height: f64) -> (f64, f64) {
    (ROCKET_X, height - progress / 100.0 * height)
}

#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    exhaust: Vec<ExhaustParticle>,
    width: f64,
    height: f64,
    area_per_star: f64,
    progress: f64,
}

impl Starfield {
    pub fn new(area_per_star: f64) -> Self {
        Self {
            stars: Vec::new(),
            exhaust: Vec::new(),
            width: 0.0,
            height: 0.0,
            area_per_star,
            progress: 0.0,
        }
    }

    pub fn populate(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let count = population(self.width, self.height, self.area_per_star);

        self.stars.clear();
        self.stars.reserve(count);
        for _ in 0..count {
            self.stars.push(Star {
                x: rng.gen_range(0.0..1.0) * self.width,
                y: rng.gen_range(0.0..1.0) * self.height,
                size: rng.gen_range(0.5..2.5),
                opacity: rng.gen_range(0.2..1.0),
                speed: rng.gen_range(0.1..0.6),
            });
        }
        tracing::debug!(
            "Starfield {}x{} populated with {} stars",
            self.width,
            self.height,
            count
        );
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub fn exhaust(&self) -> &[ExhaustParticle] {
        &self.exhaust
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Feed a new scroll progress (0..100). Each change may puff exhaust
    /// out of the rocket.
    pub fn set_progress(&mut self, progress: f64, rng: &mut impl Rng) {
        let progress = progress.clamp(0.0, 100.0);
        if progress == self.progress {
            return;
        }
        self.progress = progress;

        if rng.gen_bool(EMISSION_CHANCE) {
            self.emit_exhaust(rng);
        }
    }

    fn emit_exhaust(&mut self, rng: &mut impl Rng) {
        let (x, y) = rocket_position(self.progress, self.height);
        self.exhaust.push(ExhaustParticle {
            x: x + rng.gen_range(-5.0..5.0),
            y: y + EXHAUST_OFFSET_Y,
            vx: rng.gen_range(-1.0..1.0),
            vy: rng.gen_range(1.0..4.0),
            size: rng.gen_range(4.0..12.0),
            life: EXHAUST_LIFE,
            max_life: EXHAUST_LIFE,
        });
    }

    /// Draw one frame at `t_ms` and advance the simulation.
    ///
    /// Stars are drawn where they are, then drift; exhaust moves first and
    /// is drawn at its new position.
    pub fn frame(&mut self, surface: &mut dyn Surface, t_ms: f64, rng: &mut impl Rng) {
        let (width, height) = (self.width, self.height);

        surface.clear();
        surface.fill_vertical_gradient(&BACKGROUND);

        for star in &mut self.stars {
            let alpha = star.opacity * star.twinkle(t_ms);
            surface.fill_circle(
                star.x,
                star.y,
                star.size,
                Rgba::new(255, 255, 255, alpha),
            );

            star.y += star.speed * DRIFT_FACTOR;
            if star.y > height {
                star.y = -star.size;
                star.x = rng.gen_range(0.0..1.0) * width;
            }
        }

        surface.radial_gradient(width * 0.2, height * 0.3, 300.0, &NEBULA_BLUE);
        surface.radial_gradient(width * 0.8, height * 0.6, 400.0, &NEBULA_PURPLE);

        self.exhaust.retain(|p| p.life > 0);
        for p in &mut self.exhaust {
            p.x += p.vx;
            p.y += p.vy;
            p.life -= 1;
            p.vy += EXHAUST_GRAVITY;

            let alpha = p.alpha();
            surface.radial_gradient(
                p.x,
                p.y,
                p.size,
                &[
                    ColorStop::new(0.0, Rgba::new(255, 150, 50, alpha * 0.8)),
                    ColorStop::new(0.5, Rgba::new(255, 100, 50, alpha * 0.4)),
                    ColorStop::new(1.0, Rgba::new(255, 50, 50, 0.0)),
                ],
            );
        }
    }
}
