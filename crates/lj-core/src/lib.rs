//! # lj-core
//!
//! Core domain models and business logic for Love Journey.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the multi-step wizard, the memory collection editor, the submission state
//! machine and the read-side timeline model. Network, filesystem and QR
//! rendering live behind the traits in [`ports`].

pub mod config;
pub mod ids;
pub mod journey;
pub mod payment;
pub mod plan;
pub mod ports;
pub mod submission;
pub mod timeline;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{JourneyId, MemoryId};
pub use journey::{
    CoupleDraft, MemoryCollection, MemoryDraft, PhotoRef, ResultRoute, ShareLink,
    SubmissionResult,
};
pub use plan::{CompletionRule, PlanConfig, PlanKind};
pub use submission::{SubmissionError, SubmissionState, SubmissionStateMachine};
pub use wizard::{
    CollectionError, EditorMode, Field, FieldError, MemoryCollectionEditor, StepValidation,
    WizardController, WizardStep,
};
