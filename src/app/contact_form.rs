//! Contact form overlay state.
//!
//! Four text fields with a focus cursor. Submission is validated locally,
//! then handed to a [`ContactSubmitter`]. The outcome stays visible for
//! [`STATUS_DURATION`].

use crate::services::contact::{ContactMessage, ContactSubmitter};
use crate::services::time_source::SharedTimeSource;
use crate::services::timer::Deadline;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

pub const STATUS_DURATION: Duration = Duration::from_secs(5);
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Subject => "Project Inquiry",
            Field::Message => "Tell me about your project...",
        }
    }

    fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error(String),
}

#[derive(Debug)]
pub struct ContactForm {
    open: bool,
    message: ContactMessage,
    focus: Field,
    status: SubmitStatus,
    status_deadline: Deadline,
    submitter: Arc<dyn ContactSubmitter>,
    time: SharedTimeSource,
}

impl ContactForm {
    pub fn new(submitter: Arc<dyn ContactSubmitter>, time: SharedTimeSource) -> Self {
        Self {
            open: false,
            message: ContactMessage::default(),
            focus: Field::Name,
            status: SubmitStatus::Idle,
            status_deadline: Deadline::new(),
            submitter,
            time,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.focus = Field::Name;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.message.name,
            Field::Email => &self.message.email,
            Field::Subject => &self.message.subject,
            Field::Message => &self.message.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.message.name,
            Field::Email => &mut self.message.email,
            Field::Subject => &mut self.message.subject,
            Field::Message => &mut self.message.message,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn insert_char(&mut self, c: char) {
        let focus = self.focus;
        self.value_mut(focus).push(c);
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    /// Validate and send. A failed send keeps the typed fields.
    pub fn submit(&mut self) {
        let result = self
            .message
            .validate()
            .and_then(|()| self.submitter.submit(&self.message));
        self.status = match result {
            Ok(()) => {
                tracing::info!("Contact message sent");
                self.message = ContactMessage::default();
                self.focus = Field::Name;
                SubmitStatus::Success
            }
            Err(err) => {
                tracing::warn!("Contact submission failed: {}", err);
                SubmitStatus::Error(err.user_message())
            }
        };
        self.status_deadline
            .schedule(self.time.now(), STATUS_DURATION);
    }

    pub fn tick(&mut self) {
        if self.status_deadline.take_expired(self.time.now()) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Keys while the form is open. Returns true when consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.open {
            return false;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.close(),
            (KeyCode::Tab, _) => self.focus_next(),
            (KeyCode::BackTab, _) => self.focus_previous(),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => self.submit(),
            (KeyCode::Enter, _) if self.focus == Field::Message => self.submit(),
            (KeyCode::Enter, _) => self.focus_next(),
            (KeyCode::Backspace, _) => self.backspace(),
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => self.insert_char(c),
            _ => return false,
        }
        true
    }
}
