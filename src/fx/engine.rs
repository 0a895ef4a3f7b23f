//! The background animation loop.
//!
//! Owns whichever simulation is configured and advances it once per tick.
//! The loop runs between `mount` and `unmount` while the viewport is
//! non-empty. A tick without a surface does nothing at all.

use super::frame_clock::FrameThrottle;
use super::particles::ParticleField;
use super::starfield::Starfield;
use super::surface::Surface;
use crate::config::{AnimationConfig, BackgroundKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Background {
    Starfield(Starfield),
    Particles(ParticleField),
    None,
}

#[derive(Debug)]
pub struct AnimationLoop {
    background: Background,
    throttle: FrameThrottle,
    rng: StdRng,
    mounted: bool,
    viewport: (f64, f64),
    content_height: f64,
    scroll_y: f64,
    started: Option<Instant>,
}

impl AnimationLoop {
    pub fn new(kind: BackgroundKind, config: &AnimationConfig) -> Self {
        Self::with_rng(kind, config, StdRng::from_entropy())
    }

    /// Deterministic loop for tests.
    pub fn seeded(kind: BackgroundKind, config: &AnimationConfig, seed: u64) -> Self {
        Self::with_rng(kind, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(kind: BackgroundKind, config: &AnimationConfig, rng: StdRng) -> Self {
        let background = match kind {
            BackgroundKind::Starfield => Background::Starfield(Starfield::new(config.star_area_px)),
            BackgroundKind::Particles => {
                Background::Particles(ParticleField::new(config.particle_area_px))
            }
            BackgroundKind::None => Background::None,
        };
        Self {
            background,
            throttle: FrameThrottle::new(config.target_fps),
            rng,
            mounted: false,
            viewport: (0.0, 0.0),
            content_height: 0.0,
            scroll_y: 0.0,
            started: None,
        }
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn is_running(&self) -> bool {
        self.mounted
            && self.viewport.0 > 0.0
            && self.viewport.1 > 0.0
            && !matches!(self.background, Background::None)
    }

    /// Start animating in a viewport of `width` x `height` pixels.
    pub fn mount(&mut self, width: f64, height: f64, now: Instant) {
        self.mounted = true;
        self.started = Some(now);
        self.throttle.reset();
        self.resize(width, height);
        tracing::debug!("Animation loop mounted at {}x{}", width, height);
    }

    /// Stop animating and drop the simulation state.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.started = None;
        self.repopulate(0.0, 0.0);
        tracing::debug!("Animation loop unmounted");
    }

    /// Viewport changed. A (0, 0) viewport stops the loop until the next
    /// non-empty resize.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = (width.max(0.0), height.max(0.0));
        if !self.mounted {
            return;
        }
        let (w, h) = self.field_dimensions();
        self.repopulate(w, h);
    }

    /// Total page height in pixels; the particle field spans it.
    pub fn set_content_height(&mut self, height: f64) {
        self.content_height = height.max(0.0);
        if !self.mounted {
            return;
        }
        if let Background::Particles(field) = &self.background {
            let (_, target) = self.field_dimensions();
            if field.needs_remeasure(target) {
                let (w, h) = self.field_dimensions();
                self.repopulate(w, h);
            }
        }
    }

    /// Pointer moved to (`x`, `y`) in viewport pixels.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        let page_y = y + self.scroll_y;
        if let Background::Particles(field) = &mut self.background {
            field.set_pointer(Some((x, page_y)));
        }
    }

    /// Page scrolled to `scroll_y` pixels, `progress` percent of the way down.
    pub fn set_scroll(&mut self, scroll_y: f64, progress: f64) {
        self.scroll_y = scroll_y.max(0.0);
        if let Background::Starfield(stars) = &mut self.background {
            stars.set_progress(progress, &mut self.rng);
        }
    }

    /// Advance and paint one frame. Returns true if the surface was drawn.
    pub fn tick(&mut self, now: Instant, surface: Option<&mut dyn Surface>) -> bool {
        let Some(surface) = surface else {
            return false;
        };
        if !self.is_running() {
            return false;
        }

        match &mut self.background {
            Background::Starfield(stars) => {
                if !self.throttle.should_render(now) {
                    return false;
                }
                let t_ms = self
                    .started
                    .map(|start| now.saturating_duration_since(start).as_secs_f64() * 1000.0)
                    .unwrap_or(0.0);
                stars.frame(surface, t_ms, &mut self.rng);
            }
            Background::Particles(field) => {
                field.step();
                field.paint(surface, self.scroll_y);
            }
            Background::None => return false,
        }
        true
    }

    fn field_dimensions(&self) -> (f64, f64) {
        let (w, h) = self.viewport;
        match self.background {
            Background::Particles(_) if w > 0.0 && h > 0.0 => (w, h.max(self.content_height)),
            _ => (w, h),
        }
    }

    fn repopulate(&mut self, width: f64, height: f64) {
        match &mut self.background {
            Background::Starfield(stars) => stars.populate(width, height, &mut self.rng),
            Background::Particles(field) => field.populate(width, height, &mut self.rng),
            Background::None => {}
        }
    }
}
