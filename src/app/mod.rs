//! Application state and input routing.
//!
//! `App` owns the page, the background animation and the three overlays.
//! Events are routed to the topmost overlay first: journey, then contact
//! form, then terminal. Whatever they leave unhandled reaches the page.

pub mod contact_form;
pub mod scroll;

use crate::config::Config;
use crate::content::{Section, NAV_ITEMS};
use crate::fx::{cell_center_px, cells_to_px, AnimationLoop, CellSurface, Rgba, Surface};
use crate::journey::JourneyNavigator;
use crate::services::contact::ContactSubmitter;
use crate::services::launcher::{open_or_log, ResourceOpener};
use crate::services::time_source::SharedTimeSource;
use crate::shell::Interpreter;
use crate::view::page::{self, PageLayout};
use crate::view::theme::Theme;
use crate::view::{self, terminal_panel};
use contact_form::{ContactForm, SubmitStatus};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;
use scroll::ScrollState;
use std::sync::Arc;
use std::time::Instant;

/// Rows scrolled per mouse wheel notch.
pub const WHEEL_ROWS: i32 = 3;

const PAGE_BG: Rgba = Rgba::opaque(0x0a, 0x0a, 0x0f);

pub struct App {
    config: Config,
    theme: Theme,
    time: SharedTimeSource,
    opener: Arc<dyn ResourceOpener>,
    terminal: Interpreter,
    journey: JourneyNavigator,
    contact: ContactForm,
    scroll: ScrollState,
    page: PageLayout,
    animation: AnimationLoop,
    surface: Option<CellSurface>,
    size: (u16, u16),
    last_tick: Instant,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: Config,
        time: SharedTimeSource,
        opener: Arc<dyn ResourceOpener>,
        submitter: Arc<dyn ContactSubmitter>,
        width: u16,
        height: u16,
    ) -> Self {
        let animation = AnimationLoop::new(config.background, &config.animation);
        Self::with_animation(config, time, opener, submitter, animation, width, height)
    }

    /// Build with a prepared animation loop (seeded in tests).
    pub fn with_animation(
        config: Config,
        time: SharedTimeSource,
        opener: Arc<dyn ResourceOpener>,
        submitter: Arc<dyn ContactSubmitter>,
        mut animation: AnimationLoop,
        width: u16,
        height: u16,
    ) -> Self {
        let now = time.now();
        let (w_px, h_px) = cells_to_px(width, height);
        animation.mount(w_px, h_px, now);

        let mut terminal = Interpreter::new(
            config.links.resume_url.clone(),
            opener.clone(),
            time.clone(),
        );
        if config.terminal.open_on_start {
            terminal.open();
        }

        let mut app = Self {
            theme: Theme::dark(),
            journey: JourneyNavigator::new(time.clone()),
            contact: ContactForm::new(submitter, time.clone()),
            terminal,
            scroll: ScrollState::new(),
            page: PageLayout::default(),
            animation,
            surface: None,
            size: (0, 0),
            last_tick: now,
            should_quit: false,
            config,
            time,
            opener,
        };
        app.resize(width, height);
        app
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn terminal(&self) -> &Interpreter {
        &self.terminal
    }

    pub fn journey(&self) -> &JourneyNavigator {
        &self.journey
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn page(&self) -> &PageLayout {
        &self.page
    }

    pub fn animation(&self) -> &AnimationLoop {
        &self.animation
    }

    pub fn surface(&self) -> Option<&CellSurface> {
        self.surface.as_ref()
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Stop the background and close the overlays before the terminal is
    /// handed back.
    pub fn shutdown(&mut self) {
        self.animation.unmount();
        self.surface = None;
        self.terminal.close();
        self.journey.close();
        self.contact.close();
        tracing::debug!("App shut down");
    }

    pub fn current_year(&self) -> i32 {
        self.time.current_year()
    }

    pub fn active_section(&self) -> Option<Section> {
        scroll::active_section(&self.page.section_tops, self.scroll.offset())
    }

    /// Full screen area.
    pub fn screen(&self) -> Rect {
        Rect::new(0, 0, self.size.0, self.size.1)
    }

    /// Rows between the nav bar and the hint line.
    pub fn page_area(&self) -> Rect {
        let (w, h) = self.size;
        Rect::new(0, 2.min(h), w, h.saturating_sub(3))
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        tracing::debug!("Resize to {}x{}", width, height);
        let width_changed = self.size.0 != width;
        self.size = (width, height);

        if width_changed || self.page.lines.is_empty() {
            let year = self.time.current_year();
            self.page = page::build(width, year, &self.theme);
        }
        self.scroll
            .set_extent(self.page.height(), self.page_area().height);

        let (w_px, h_px) = cells_to_px(width, height);
        self.animation.resize(w_px, h_px);
        let (_, content_px) = cells_to_px(width, self.page.height());
        self.animation.set_content_height(content_px);
        self.surface = CellSurface::new(width, height, PAGE_BG);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(w, h) => self.resize(w, h),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        tracing::trace!("Key: {:?} {:?}", key.code, key.modifiers);
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        // Modal overlays swallow everything while open
        if self.journey.is_open() {
            self.journey.handle_key(key);
            return;
        }
        if self.contact.is_open() {
            self.contact.handle_key(key);
            return;
        }
        if self.terminal.is_open() && self.terminal.handle_key(key) {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('t') => self.terminal.toggle(),
            KeyCode::Char('j') => self.journey.open(),
            KeyCode::Char('c') => self.contact.open(),
            KeyCode::Char('r') => {
                open_or_log(self.opener.as_ref(), &self.config.links.resume_url);
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.scroll_to_section(NAV_ITEMS[index]);
            }
            KeyCode::Up => self.scroll.scroll_by(-1),
            KeyCode::Down => self.scroll.scroll_by(1),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll.page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.scroll.to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll.to_bottom(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        tracing::trace!("Mouse: {:?} at ({}, {})", mouse.kind, mouse.column, mouse.row);
        let modal = self.journey.is_open() || self.contact.is_open();
        match mouse.kind {
            MouseEventKind::ScrollUp if !modal => self.scroll.scroll_by(-WHEEL_ROWS),
            MouseEventKind::ScrollDown if !modal => self.scroll.scroll_by(WHEEL_ROWS),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let (x, y) = cell_center_px(mouse.column, mouse.row);
                self.animation.set_pointer(x, y);
            }
            _ => {}
        }
    }

    pub fn scroll_to_section(&mut self, section: Section) {
        if let Some(top) = self.page.section_top(section) {
            self.scroll.scroll_to(top);
        }
    }

    /// Advance timers, the progress spring and the background.
    ///
    /// Returns true when something on screen changed.
    pub fn tick(&mut self) -> bool {
        let now = self.time.now();
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        let before = self.overlay_signature();
        let rows = terminal_panel::inner_rows(self.page_area());
        self.terminal.tick(rows);
        self.journey.tick();
        self.contact.tick();

        let eased_before = self.scroll.eased_progress();
        self.scroll.tick(dt);
        let eased = self.scroll.eased_progress();

        let (_, scroll_px) = cells_to_px(0, self.scroll.offset());
        self.animation.set_scroll(scroll_px, eased * 100.0);
        let drew = self
            .animation
            .tick(now, self.surface.as_mut().map(|s| s as &mut dyn Surface));

        drew || eased != eased_before || before != self.overlay_signature()
    }

    fn overlay_signature(&self) -> (bool, bool, bool) {
        (
            self.terminal.matrix_active(),
            self.journey.achievement().is_some(),
            *self.contact.status() == SubmitStatus::Idle,
        )
    }

    pub fn render(&self, frame: &mut Frame) {
        view::render(frame, self);
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("size", &self.size)
            .field("scroll", &self.scroll.offset())
            .field("terminal_open", &self.terminal.is_open())
            .field("journey_open", &self.journey.is_open())
            .field("contact_open", &self.contact.is_open())
            .finish()
    }
}
