//! Wizard domain module.
//!
//! This module defines the multi-step form: step/field types, pure step
//! validation, the memory collection editor and the controller that owns
//! the drafts and gates navigation.

mod controller;
mod editor;
mod error;
mod field;
mod validation;

pub use controller::WizardController;
pub use editor::{CommitOutcome, EditorMode, MemoryCollectionEditor};
pub use error::{CollectionError, WizardError};
pub use field::{Entity, Field, FieldError, FieldValue, WizardStep, TOTAL_STEPS};
pub use validation::{validate_step, StepValidation};
