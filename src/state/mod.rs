pub mod form;
pub mod rotation;
pub mod scroll;
pub mod submission;

pub use form::{DemoRequest, DemoRequestPayload, Field};
pub use rotation::RotationState;
pub use scroll::ScrollState;
pub use submission::{Outcome, Submission, SubmissionStatus, Ticket};
