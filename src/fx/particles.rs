//! Pointer-attracted particle field.
//!
//! Particles live in page coordinates: the field spans the viewport width
//! and the full content height, and painting subtracts the scroll offset.

use super::surface::{ColorStop, Rgba, Surface};
use rand::Rng;

pub const MOUSE_RADIUS: f64 = 200.0;
pub const CONNECTION_DISTANCE: f64 = 150.0;
pub const GLOW_RADIUS: f64 = 150.0;

const ATTRACTION: f64 = 0.02;
const DAMPING: f64 = 0.99;
const CONNECTION_ALPHA: f64 = 0.3;
const CONNECTION_COLOR: Rgba = Rgba::new(59, 130, 246, 1.0);
const GLOW_COLOR: Rgba = Rgba::new(59, 130, 246, 0.1);

/// Content height has to move by more than this before the field is rebuilt.
pub const REMEASURE_THRESHOLD_PX: f64 = 100.0;

pub const PALETTE: [Rgba; 4] = [
    Rgba::new(59, 130, 246, 0.6),
    Rgba::new(139, 92, 246, 0.6),
    Rgba::new(96, 165, 250, 0.5),
    Rgba::new(167, 139, 250, 0.5),
];

/// Number of points for a `width` x `height` area at `area_per_point` px² each.
pub fn population(width: f64, height: f64, area_per_point: f64) -> usize {
    if width <= 0.0 || height <= 0.0 || area_per_point <= 0.0 {
        return 0;
    }
    (width * height / area_per_point).floor() as usize
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub color: Rgba,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    pointer: Option<(f64, f64)>,
    area_per_particle: f64,
}

impl ParticleField {
    pub fn new(area_per_particle: f64) -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            pointer: None,
            area_per_particle,
        }
    }

    /// Replace the whole population for a field of the given size.
    pub fn populate(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let count = population(self.width, self.height, self.area_per_particle);

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                x: rng.gen_range(0.0..1.0) * self.width,
                y: rng.gen_range(0.0..1.0) * self.height,
                vx: rng.gen_range(-0.25..0.25),
                vy: rng.gen_range(-0.25..0.25),
                size: rng.gen_range(1.0..3.0),
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
            });
        }
        tracing::debug!(
            "Particle field {}x{} populated with {} particles",
            self.width,
            self.height,
            count
        );
    }

    /// True when a content height change is large enough to rebuild.
    pub fn needs_remeasure(&self, content_height: f64) -> bool {
        (content_height - self.height).abs() > REMEASURE_THRESHOLD_PX
    }

    /// Pointer position in page coordinates.
    pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        let pointer = self.pointer;

        for p in &mut self.particles {
            if let Some((mx, my)) = pointer {
                let dx = mx - p.x;
                let dy = my - p.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance > 0.0 && distance < MOUSE_RADIUS {
                    let force = (MOUSE_RADIUS - distance) / MOUSE_RADIUS;
                    p.vx += dx / distance * force * ATTRACTION;
                    p.vy += dy / distance * force * ATTRACTION;
                }
            }

            p.x += p.vx;
            p.y += p.vy;

            p.vx *= DAMPING;
            p.vy *= DAMPING;

            if p.x < 0.0 || p.x > width {
                p.vx = -p.vx;
                p.x = p.x.clamp(0.0, width);
            }
            if p.y < 0.0 || p.y > height {
                p.vy = -p.vy;
                p.y = p.y.clamp(0.0, height);
            }
        }
    }

    /// Paint the slice of the field visible at `scroll_y`.
    pub fn paint(&self, surface: &mut dyn Surface, scroll_y: f64) {
        surface.clear();

        for (i, p) in self.particles.iter().enumerate() {
            surface.fill_circle(p.x, p.y - scroll_y, p.size, p.color);

            for other in &self.particles[i + 1..] {
                let dx = p.x - other.x;
                let dy = p.y - other.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < CONNECTION_DISTANCE {
                    let opacity = (1.0 - distance / CONNECTION_DISTANCE) * CONNECTION_ALPHA;
                    surface.stroke_line(
                        p.x,
                        p.y - scroll_y,
                        other.x,
                        other.y - scroll_y,
                        CONNECTION_COLOR.with_alpha(opacity),
                    );
                }
            }
        }

        if let Some((mx, my)) = self.pointer {
            surface.radial_gradient(
                mx,
                my - scroll_y,
                GLOW_RADIUS,
                &[
                    ColorStop::new(0.0, GLOW_COLOR),
                    ColorStop::new(1.0, Rgba::TRANSPARENT),
                ],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::surface::{DrawOp, RecordingSurface};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field_with(particles: Vec<Particle>, width: f64, height: f64) -> ParticleField {
        let mut field = ParticleField::new(15_000.0);
        field.width = width;
        field.height = height;
        field.particles = particles;
        field
    }

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: 2.0,
            color: PALETTE[0],
        }
    }

    #[test]
    fn test_population_for_common_viewports() {
        assert_eq!(population(1920.0, 1080.0, 15_000.0), 138);
        assert_eq!(population(1920.0, 1080.0, 3_000.0), 691);
        assert_eq!(population(0.0, 1080.0, 15_000.0), 0);
        assert_eq!(population(1920.0, 0.0, 3_000.0), 0);
    }

    #[test]
    fn test_populate_replaces_the_batch() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = ParticleField::new(15_000.0);
        field.populate(1920.0, 1080.0, &mut rng);
        assert_eq!(field.particles().len(), 138);

        field.populate(800.0, 600.0, &mut rng);
        assert_eq!(field.particles().len(), 32);
        for p in field.particles() {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!((1.0..3.0).contains(&p.size));
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_no_attraction_without_pointer() {
        let mut field = field_with(vec![still(100.0, 100.0)], 400.0, 400.0);
        field.step();
        assert_eq!(field.particles()[0].x, 100.0);
        assert_eq!(field.particles()[0].vx, 0.0);
    }

    #[test]
    fn test_pointer_attracts_within_radius() {
        let mut field = field_with(vec![still(100.0, 100.0)], 400.0, 400.0);
        field.set_pointer(Some((200.0, 100.0)));
        field.step();

        let p = field.particles()[0];
        // force (200-100)/200 * 0.02 = 0.01, integrated then damped
        assert!((p.x - 100.01).abs() < 1e-9);
        assert!((p.vx - 0.01 * DAMPING).abs() < 1e-9);
        assert_eq!(p.vy, 0.0);
    }

    #[test]
    fn test_pointer_on_particle_applies_no_force() {
        let mut field = field_with(vec![still(50.0, 50.0)], 400.0, 400.0);
        field.set_pointer(Some((50.0, 50.0)));
        field.step();
        let p = field.particles()[0];
        assert!(p.x.is_finite() && p.vx == 0.0);
    }

    #[test]
    fn test_pointer_outside_radius_is_ignored() {
        let mut field = field_with(vec![still(0.0, 0.0)], 400.0, 400.0);
        field.set_pointer(Some((300.0, 0.0)));
        field.step();
        assert_eq!(field.particles()[0].vx, 0.0);
    }

    #[test]
    fn test_edge_reflects_and_clamps() {
        let mut p = still(399.5, 10.0);
        p.vx = 1.0;
        let mut field = field_with(vec![p], 400.0, 400.0);
        field.step();

        let p = field.particles()[0];
        assert_eq!(p.x, 400.0);
        assert!(p.vx < 0.0);
    }

    #[test]
    fn test_connections_only_below_distance() {
        let field = field_with(
            vec![still(0.0, 0.0), still(100.0, 0.0), still(400.0, 0.0)],
            500.0,
            500.0,
        );
        let mut surface = RecordingSurface::new(500.0, 500.0);
        field.paint(&mut surface, 0.0);

        assert_eq!(surface.line_count(), 1);
        let line_alpha = surface
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Line { color, .. } => Some(color.a),
                _ => None,
            })
            .unwrap();
        assert!((line_alpha - (1.0 - 100.0 / 150.0) * 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_paint_offsets_by_scroll_and_draws_glow() {
        let mut field = field_with(vec![still(10.0, 900.0)], 500.0, 2000.0);
        field.set_pointer(Some((20.0, 950.0)));
        let mut surface = RecordingSurface::new(500.0, 500.0);
        field.paint(&mut surface, 800.0);

        assert_eq!(surface.ops[0], DrawOp::Clear);
        let (_, y, _, _) = surface.circles().next().unwrap();
        assert_eq!(y, 100.0);
        let glows: Vec<_> = surface.radial_gradients().collect();
        assert_eq!(glows, vec![(20.0, 150.0, GLOW_RADIUS)]);
    }

    #[test]
    fn test_remeasure_threshold() {
        let field = field_with(Vec::new(), 500.0, 1000.0);
        assert!(!field.needs_remeasure(1100.0));
        assert!(field.needs_remeasure(1100.5));
        assert!(field.needs_remeasure(850.0));
    }

    proptest! {
        #[test]
        fn prop_population_is_floor_of_area(w in 0u32..4000, h in 0u32..4000, k in 1u32..20_000) {
            let expected = (w as u64 * h as u64 / k as u64) as usize;
            prop_assert_eq!(population(w as f64, h as f64, k as f64), expected);
        }

        #[test]
        fn prop_particles_stay_inside_field(seed in any::<u64>(), mx in -100.0f64..900.0, my in -100.0f64..700.0) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut field = ParticleField::new(3_000.0);
            field.populate(800.0, 600.0, &mut rng);
            for p in field.particles_mut() {
                p.vx *= 40.0;
                p.vy *= 40.0;
            }
            field.set_pointer(Some((mx, my)));
            for _ in 0..50 {
                field.step();
                for p in field.particles() {
                    prop_assert!((0.0..=800.0).contains(&p.x));
                    prop_assert!((0.0..=600.0).contains(&p.y));
                }
            }
        }
    }
}
