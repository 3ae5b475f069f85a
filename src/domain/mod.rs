mod contact_email;
mod contact_submission;
mod submission_outcome;
mod submission_target;

pub use contact_email::ContactEmail;
pub use contact_submission::{ContactFields, ContactSubmission, ValidationError};
pub use submission_outcome::{Notification, SubmissionOutcome};
pub use submission_target::{SubmissionTarget, TargetError};
