//! Drives a full `App` on a ratatui `TestBackend`.
//!
//! Time is a logical clock, links go to a recording opener and contact
//! submissions go to a scripted submitter, so every test is deterministic.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use folio::app::App;
use folio::config::{BackgroundKind, Config};
use folio::services::contact::{ContactMessage, ContactSubmitter, SubmitError};
use folio::services::launcher::ResourceOpener;
use folio::services::time_source::TestTimeSource;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records every URL instead of launching a browser.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl ResourceOpener for RecordingOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Accepts messages unless told to fail.
#[derive(Debug, Default)]
pub struct ScriptedSubmitter {
    sent: Mutex<Vec<ContactMessage>>,
    failure: Mutex<Option<SubmitError>>,
}

impl ScriptedSubmitter {
    pub fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail_with(&self, error: SubmitError) {
        *self.failure.lock().unwrap() = Some(error);
    }
}

impl ContactSubmitter for ScriptedSubmitter {
    fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

pub struct PortfolioTestHarness {
    app: App,
    terminal: Terminal<TestBackend>,
    time: Arc<TestTimeSource>,
    opener: Arc<RecordingOpener>,
    submitter: Arc<ScriptedSubmitter>,
}

impl PortfolioTestHarness {
    /// Harness without a background, so screens only hold page text.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let config = Config {
            background: BackgroundKind::None,
            ..Config::default()
        };
        Self::with_config(width, height, config)
    }

    pub fn with_config(width: u16, height: u16, config: Config) -> Result<Self> {
        let time = TestTimeSource::shared();
        let opener = Arc::new(RecordingOpener::default());
        let submitter = Arc::new(ScriptedSubmitter::default());
        let app = App::new(
            config,
            time.clone(),
            opener.clone(),
            submitter.clone(),
            width,
            height,
        );
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            app,
            terminal,
            time,
            opener,
            submitter,
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn time(&self) -> &TestTimeSource {
        &self.time
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.opener.opened()
    }

    pub fn submitter(&self) -> &ScriptedSubmitter {
        &self.submitter
    }

    pub fn should_quit(&self) -> bool {
        self.app.should_quit()
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        self.app.handle_key(KeyEvent::new(code, modifiers));
        self.app.tick();
        Ok(())
    }

    pub fn press(&mut self, code: KeyCode) -> Result<()> {
        self.send_key(code, KeyModifiers::NONE)
    }

    pub fn type_text(&mut self, text: &str) -> Result<()> {
        for c in text.chars() {
            self.send_key(KeyCode::Char(c), KeyModifiers::NONE)?;
        }
        Ok(())
    }

    pub fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) -> Result<()> {
        self.app.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.app.tick();
        Ok(())
    }

    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.terminal.backend_mut().resize(width, height);
        self.app.resize(width, height);
        Ok(())
    }

    /// Move the logical clock forward in frame-sized steps, ticking each time.
    pub fn advance_time(&mut self, duration: Duration) {
        let step = Duration::from_millis(16);
        let mut remaining = duration;
        while remaining > Duration::ZERO {
            let d = remaining.min(step);
            self.time.advance(d);
            self.app.tick();
            remaining -= d;
        }
    }

    pub fn render(&mut self) -> Result<()> {
        let app = &self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn get_screen_row(&self, row: u16) -> String {
        let buf = self.buffer();
        (0..buf.area.width)
            .map(|x| buf[(x, row)].symbol())
            .collect()
    }

    pub fn screen_to_string(&self) -> String {
        (0..self.buffer().area.height)
            .map(|row| self.get_screen_row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// First (column, row) where `text` starts on a single row.
    pub fn find_text(&self, text: &str) -> Option<(u16, u16)> {
        (0..self.buffer().area.height).find_map(|row| {
            let line = self.get_screen_row(row);
            line.find(text)
                .map(|byte| (line[..byte].chars().count() as u16, row))
        })
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{text}'\nScreen:\n{screen}"
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain '{text}'\nScreen:\n{screen}"
        );
    }
}
