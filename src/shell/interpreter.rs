//! Command terminal state and line interpreter.
//!
//! Input is normalized (trimmed, lowercased) and matched against the static
//! table. Output accumulates in a scrollback until `clear`. Recall walks
//! submitted commands from most recent to oldest.

use super::commands::{self, CommandOutput, CLEAR, MATRIX, MATRIX_MESSAGE, RESUME};
use super::matrix::MatrixRain;
use crate::services::launcher::{open_or_log, ResourceOpener};
use crate::services::time_source::SharedTimeSource;
use crate::services::timer::Deadline;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;

pub const MATRIX_DURATION: Duration = Duration::from_secs(5);
const RAIN_STEP: Duration = Duration::from_millis(80);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryBody {
    /// Canned output from the command table
    Output(CommandOutput),
    /// Generated text (matrix notice, not-found error)
    Message(String),
}

impl EntryBody {
    pub fn text(&self) -> &str {
        match self {
            EntryBody::Output(output) => output.as_str(),
            EntryBody::Message(msg) => msg,
        }
    }

    pub fn is_art(&self) -> bool {
        matches!(self, EntryBody::Output(CommandOutput::Art(_)))
    }
}

/// One executed command and what it printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollbackEntry {
    /// Input exactly as typed
    pub command: String,
    pub body: EntryBody,
    pub is_error: bool,
}

#[derive(Debug)]
pub struct Interpreter {
    open: bool,
    minimized: bool,
    input: String,
    scrollback: Vec<ScrollbackEntry>,
    history: Vec<String>,
    /// Steps back from the newest history entry; None when not recalling.
    recall_index: Option<usize>,
    matrix_deadline: Deadline,
    rain_step: Deadline,
    rain: Option<MatrixRain>,
    resume_url: String,
    opener: Arc<dyn ResourceOpener>,
    time: SharedTimeSource,
    rng: StdRng,
}

impl Interpreter {
    pub fn new(
        resume_url: impl Into<String>,
        opener: Arc<dyn ResourceOpener>,
        time: SharedTimeSource,
    ) -> Self {
        Self {
            open: false,
            minimized: false,
            input: String::new(),
            scrollback: Vec::new(),
            history: Vec::new(),
            recall_index: None,
            matrix_deadline: Deadline::new(),
            rain_step: Deadline::new(),
            rain: None,
            resume_url: resume_url.into(),
            opener,
            time,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn open(&mut self) {
        self.open = true;
        self.minimized = false;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn scrollback(&self) -> &[ScrollbackEntry] {
        &self.scrollback
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn matrix_active(&self) -> bool {
        self.rain.is_some()
    }

    pub fn matrix_rain(&self) -> Option<&MatrixRain> {
        self.rain.as_ref()
    }

    /// Run the current input line and clear it.
    pub fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        self.execute(&line);
    }

    /// Interpret one line of input.
    pub fn execute(&mut self, raw: &str) {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return;
        }

        self.history.push(normalized.clone());
        self.recall_index = None;

        match normalized.as_str() {
            CLEAR => {
                self.scrollback.clear();
                return;
            }
            MATRIX => {
                self.start_matrix();
                self.scrollback.push(ScrollbackEntry {
                    command: raw.to_string(),
                    body: EntryBody::Message(MATRIX_MESSAGE.to_string()),
                    is_error: false,
                });
                return;
            }
            RESUME => {
                open_or_log(self.opener.as_ref(), &self.resume_url);
            }
            _ => {}
        }

        let entry = match commands::lookup(&normalized) {
            Some(command) => ScrollbackEntry {
                command: raw.to_string(),
                body: EntryBody::Output(command.output),
                is_error: false,
            },
            None => {
                tracing::debug!("Unknown terminal command: {:?}", raw);
                ScrollbackEntry {
                    command: raw.to_string(),
                    body: EntryBody::Message(commands::not_found_message(raw)),
                    is_error: true,
                }
            }
        };
        self.scrollback.push(entry);
    }

    fn start_matrix(&mut self) {
        let now = self.time.now();
        self.rain = Some(MatrixRain::generate(&mut self.rng));
        self.matrix_deadline.schedule(now, MATRIX_DURATION);
        self.rain_step.schedule(now, RAIN_STEP);
    }

    /// Step toward older commands, stopping at the oldest.
    pub fn recall_up(&mut self) {
        let len = self.history.len();
        if len == 0 {
            return;
        }
        let next = match self.recall_index {
            None => 0,
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
        };
        self.recall_index = Some(next);
        self.input = self.history[len - 1 - next].clone();
    }

    /// Step toward newer commands; past the newest the input is cleared.
    pub fn recall_down(&mut self) {
        match self.recall_index {
            Some(i) if i > 0 => {
                let next = i - 1;
                self.recall_index = Some(next);
                self.input = self.history[self.history.len() - 1 - next].clone();
            }
            _ => {
                self.recall_index = None;
                self.input.clear();
            }
        }
    }

    /// Expire the matrix rain and animate it while it lasts.
    pub fn tick(&mut self, screen_rows: u16) {
        let now = self.time.now();
        if self.matrix_deadline.take_expired(now) {
            self.rain = None;
            self.rain_step.cancel();
            return;
        }
        if self.rain_step.take_expired(now) {
            if let Some(rain) = &mut self.rain {
                rain.advance(screen_rows);
            }
            self.rain_step.schedule(now, RAIN_STEP);
        }
    }

    /// Keys while the panel has focus. Returns true when consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.open {
            return false;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.close(),
            // Ctrl+M only arrives as itself with keyboard enhancement; F2 always does
            (KeyCode::Char('m'), KeyModifiers::CONTROL) | (KeyCode::F(2), _) => {
                self.toggle_minimized()
            }
            _ if self.minimized => return false,
            (KeyCode::Enter, _) => self.submit(),
            (KeyCode::Up, _) => self.recall_up(),
            (KeyCode::Down, _) => self.recall_down(),
            (KeyCode::Backspace, _) => self.backspace(),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.input.clear(),
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => self.scrollback.clear(),
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => self.insert_char(c),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::time_source::TestTimeSource;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
    }

    impl ResourceOpener for RecordingOpener {
        fn open(&self, url: &str) -> std::io::Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn interpreter() -> (Interpreter, Arc<TestTimeSource>, Arc<RecordingOpener>) {
        let time = TestTimeSource::shared();
        let opener = Arc::new(RecordingOpener::default());
        let interp = Interpreter::new(
            "https://example.com/resume.pdf",
            opener.clone(),
            time.clone(),
        );
        (interp, time, opener)
    }

    #[test]
    fn test_case_and_whitespace_are_ignored() {
        let (mut a, _, _) = interpreter();
        let (mut b, _, _) = interpreter();
        a.execute("  HeLp ");
        b.execute("help");
        assert_eq!(a.scrollback()[0].body, b.scrollback()[0].body);
        assert_eq!(a.scrollback()[0].command, "  HeLp ");
        assert_eq!(a.history(), ["help"]);
    }

    #[test]
    fn test_blank_input_changes_nothing() {
        let (mut interp, _, _) = interpreter();
        interp.execute("about");
        interp.recall_up();
        interp.execute("   \t ");
        assert_eq!(interp.scrollback().len(), 1);
        assert_eq!(interp.history().len(), 1);
        assert_eq!(interp.input(), "about");
    }

    #[test]
    fn test_clear_empties_scrollback_without_an_entry() {
        let (mut interp, _, _) = interpreter();
        interp.execute("about");
        interp.execute("skills");
        interp.execute("CLEAR");
        assert!(interp.scrollback().is_empty());
        assert_eq!(interp.history().last().map(String::as_str), Some("clear"));
    }

    #[test]
    fn test_unknown_command_is_one_error_entry() {
        let (mut interp, _, _) = interpreter();
        interp.execute("Sudo rm");
        let entries = interp.scrollback();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_error);
        assert!(entries[0].body.text().contains("Command not found: Sudo rm"));
        assert!(entries[0].body.text().contains("Type 'help'"));
    }

    #[test]
    fn test_repeated_command_appends_independent_entries() {
        let (mut interp, _, _) = interpreter();
        interp.execute("about");
        interp.execute("about");
        let entries = interp.scrollback();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].body, entries[1].body);
        assert_eq!(interp.history(), ["about", "about"]);
    }

    #[test]
    fn test_f2_toggles_minimized() {
        let (mut interp, _, _) = interpreter();
        interp.open();
        assert!(interp.handle_key(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)));
        assert!(interp.is_minimized());
        assert!(interp.handle_key(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)));
        assert!(!interp.is_minimized());
    }

    #[test]
    fn test_carriage_return_submits_rather_than_minimizing() {
        // Without keyboard enhancement Ctrl+M is reported as a bare Enter
        let (mut interp, _, _) = interpreter();
        interp.open();
        interp.set_input("about");
        interp.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(!interp.is_minimized());
        assert_eq!(interp.history(), ["about"]);
    }

    #[test]
    fn test_recall_walks_back_and_stops_at_oldest() {
        let (mut interp, _, _) = interpreter();
        for cmd in ["a", "b", "c"] {
            interp.execute(cmd);
        }
        let mut seen = Vec::new();
        for _ in 0..4 {
            interp.recall_up();
            seen.push(interp.input().to_string());
        }
        assert_eq!(seen, ["c", "b", "a", "a"]);
    }

    #[test]
    fn test_recall_down_past_newest_clears_input() {
        let (mut interp, _, _) = interpreter();
        for cmd in ["a", "b", "c"] {
            interp.execute(cmd);
        }
        interp.recall_up();
        interp.recall_up();
        interp.recall_down();
        assert_eq!(interp.input(), "c");
        interp.recall_down();
        assert_eq!(interp.input(), "");
        interp.recall_up();
        assert_eq!(interp.input(), "c");
    }

    #[test]
    fn test_recall_with_empty_history_is_a_no_op() {
        let (mut interp, _, _) = interpreter();
        interp.set_input("draft");
        interp.recall_up();
        assert_eq!(interp.input(), "draft");
    }

    #[test]
    fn test_execute_resets_recall_cursor() {
        let (mut interp, _, _) = interpreter();
        interp.execute("a");
        interp.execute("b");
        interp.recall_up();
        interp.recall_up();
        interp.execute("c");
        interp.recall_up();
        assert_eq!(interp.input(), "c");
    }

    #[test]
    fn test_matrix_runs_for_five_seconds() {
        let (mut interp, time, _) = interpreter();
        interp.execute("matrix");
        assert!(interp.matrix_active());
        assert_eq!(interp.scrollback()[0].body.text(), MATRIX_MESSAGE);

        time.advance(Duration::from_millis(4_999));
        interp.tick(24);
        assert!(interp.matrix_active());

        time.advance(Duration::from_millis(1));
        interp.tick(24);
        assert!(!interp.matrix_active());
    }

    #[test]
    fn test_resume_opens_link_and_prints() {
        let (mut interp, _, opener) = interpreter();
        interp.execute("Resume");
        assert_eq!(
            opener.opened.lock().unwrap().as_slice(),
            ["https://example.com/resume.pdf"]
        );
        assert!(interp.scrollback()[0].body.text().contains("RESUME"));
        assert!(!interp.scrollback()[0].is_error);
    }

    #[test]
    fn test_keys_type_and_submit() {
        let (mut interp, _, _) = interpreter();
        assert!(!interp.handle_key(KeyEvent::from(KeyCode::Char('x'))));

        interp.open();
        for c in "exp".chars() {
            assert!(interp.handle_key(KeyEvent::from(KeyCode::Char(c))));
        }
        interp.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(interp.input(), "");
        assert_eq!(interp.scrollback().len(), 1);

        interp.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(!interp.is_open());
    }
}
