//! Submission use cases.
//!
//! This module exposes the submission sequencer.

mod context;
pub mod sequencer;

pub use sequencer::SubmissionSequencer;
