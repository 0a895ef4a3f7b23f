//! Contact form delivery.
//!
//! The form processor is an external collaborator: we post the fields and
//! report a binary outcome. Nothing is retried.

use std::time::Duration;

const FORM_ENDPOINT_BASE: &str = "https://formspree.io/f";
const DEFAULT_FAILURE: &str = "Failed to send message";

/// One message as typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Local checks done before anything leaves the machine.
    pub fn validate(&self) -> Result<(), SubmitError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(SubmitError::Validation(format!("Please fill in your {label}")));
            }
        }
        if !self.email.contains('@') {
            return Err(SubmitError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }
        Ok(())
    }

    fn as_form(&self) -> [(&str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}

/// Why a submission failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Rejected locally before sending
    Validation(String),
    /// The endpoint couldn't be reached
    Network(String),
    /// The endpoint answered with a non-success status
    Rejected(String),
}

impl SubmitError {
    /// Message shown inline under the form.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(msg) | SubmitError::Rejected(msg) => msg.clone(),
            SubmitError::Network(_) => {
                "Failed to send message. Please try emailing directly.".to_string()
            }
        }
    }
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Validation(msg) => write!(f, "Validation error: {msg}"),
            SubmitError::Network(msg) => write!(f, "Network error: {msg}"),
            SubmitError::Rejected(msg) => write!(f, "Rejected: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Sends a contact message somewhere.
pub trait ContactSubmitter: std::fmt::Debug {
    fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Posts the form to a hosted form processor.
#[derive(Debug, Clone)]
pub struct FormspreeSubmitter {
    endpoint: String,
    timeout: Duration,
}

impl FormspreeSubmitter {
    pub fn new(form_id: &str, timeout: Duration) -> Self {
        Self::with_endpoint(format!("{FORM_ENDPOINT_BASE}/{form_id}"), timeout)
    }

    /// Post to an arbitrary endpoint URL.
    pub(crate) fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ContactSubmitter for FormspreeSubmitter {
    fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        message.validate()?;

        let result = ureq::post(&self.endpoint)
            .set("Accept", "application/json")
            .timeout(self.timeout)
            .send_form(&message.as_form());

        match result {
            Ok(response) => {
                tracing::info!("Contact message delivered (status {})", response.status());
                Ok(())
            }
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                tracing::warn!("Contact endpoint rejected message with status {}", code);
                Err(SubmitError::Rejected(rejection_message(&body)))
            }
            Err(ureq::Error::Transport(transport)) => {
                tracing::warn!("Contact endpoint unreachable: {}", transport);
                Err(SubmitError::Network(transport.to_string()))
            }
        }
    }
}

/// Pull the endpoint's `error` field out of a JSON body.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| DEFAULT_FAILURE.to_string())
}
