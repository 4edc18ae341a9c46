use serde::{Deserialize, Serialize};

pub const SUCCESS_TEXT: &str = "Thank you! I will get back to you as soon as possible.";
pub const FAILURE_TEXT: &str = "Something went wrong. Please try again.";
pub const INVALID_EMAIL_TEXT: &str = "Invalid email format";

pub const NAME_KEY: &str = "name";
pub const EMAIL_KEY: &str = "email";
pub const MESSAGE_KEY: &str = "message";

/// One configured form field, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub key: String,
    /// Label shown above the input.
    pub span: String,
    pub placeholder: String,
}

impl FieldDescriptor {
    pub fn new(key: &str, span: &str, placeholder: &str) -> Self {
        Self {
            key: key.to_string(),
            span: span.to_string(),
            placeholder: placeholder.to_string(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self.key.as_str() {
            EMAIL_KEY => FieldKind::Email,
            MESSAGE_KEY => FieldKind::Message,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    /// Rendered as a multiline text area.
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn success() -> Self {
        Self {
            kind: StatusKind::Success,
            text: SUCCESS_TEXT.to_string(),
        }
    }

    pub fn error() -> Self {
        Self {
            kind: StatusKind::Error,
            text: FAILURE_TEXT.to_string(),
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.text.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// Transient: only held inside `submit` while the state lock is held, so
    /// callers never observe it.
    Validating,
    Sending,
    Succeeded,
    Failed,
}

/// Template parameters handed to the email service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub to_name: String,
    pub reply_to: String,
    pub to_email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    InvalidEmail,
    /// A send was already outstanding; nothing happened.
    AlreadySending,
    Sent,
    Failed,
}
