//! Love Journey Application Orchestration Layer
//!
//! This crate contains the use cases that drive the core state machines
//! against the ports: submission sequencing, the form session facade, the
//! read-side timeline, payment status checks and share result composition.

pub mod usecases;

pub use usecases::{
    BuildShareResult, CheckPaymentStatus, FormError, FormSession, LoadTimeline,
    SubmissionSequencer, TimelineError,
};
