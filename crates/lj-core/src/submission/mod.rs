//! Submission domain module.
//!
//! This module defines the pure state machine that persists the journey
//! and then each memory, strictly in order.

pub mod state_machine;

pub use state_machine::{
    SubmissionAction, SubmissionError, SubmissionEvent, SubmissionState, SubmissionStateMachine,
};
