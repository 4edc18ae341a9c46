pub mod contact;
pub mod form;
pub mod validator;

pub use crate::domain::model::{EmailPayload, FieldDescriptor, Status, SubmissionPhase, SubmitOutcome};
pub use crate::domain::ports::EmailSender;
pub use crate::utils::error::Result;
