//! Use cases.

pub mod form;
pub mod journey;
pub mod payment;
pub mod share;
pub mod submission;

pub use form::{FormError, FormSession};
pub use journey::{LoadTimeline, TimelineError};
pub use payment::CheckPaymentStatus;
pub use share::BuildShareResult;
pub use submission::SubmissionSequencer;
