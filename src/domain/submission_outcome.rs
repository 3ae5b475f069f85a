use strum::Display;

use crate::domain::ValidationError;

/// How a dispatched submission ended.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SubmissionOutcome {
    Success,
    /// Rejected by the server. `None` when the JSON error body carried no
    /// `errors` list.
    ServerError(Option<Vec<String>>),
    NetworkError,
    /// Rejected by the server with a body that was not JSON.
    ParseError,
}

/// The user-facing alert of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification(String);

const MISSING_FIELDS: &str = "Please fill in all fields.";
const INVALID_EMAIL: &str = "Please enter a valid email address.";
const THANK_YOU: &str = "Thank you for your message! I'll get back to you soon.";
const GENERIC_FAILURE: &str = "There was an error sending your message. Please try again.";
const CONNECTIVITY_FAILURE: &str =
    "There was an error sending your message. Please check your connection and try again.";

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl AsRef<str> for Notification {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&ValidationError> for Notification {
    fn from(error: &ValidationError) -> Self {
        match error {
            ValidationError::MissingFields(_) => Self::new(MISSING_FIELDS),
            ValidationError::InvalidEmail(_) => Self::new(INVALID_EMAIL),
        }
    }
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }

    pub fn notification(&self) -> Notification {
        let message = match self {
            SubmissionOutcome::Success => THANK_YOU.to_string(),
            SubmissionOutcome::ServerError(None) => format!("Error: {GENERIC_FAILURE}"),
            SubmissionOutcome::ServerError(Some(messages)) => {
                format!("Error: {}", messages.join(", "))
            }
            SubmissionOutcome::ParseError => GENERIC_FAILURE.to_string(),
            SubmissionOutcome::NetworkError => CONNECTIVITY_FAILURE.to_string(),
        };
        Notification(message)
    }
}
