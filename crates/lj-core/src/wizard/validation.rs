use std::collections::BTreeMap;

use serde::Serialize;

use crate::journey::CoupleDraft;
use crate::plan::PlanConfig;
use crate::wizard::{Field, FieldError, MemoryCollectionEditor, WizardStep};

/// Result of validating one step.
///
/// `is_valid` always reflects true completeness; which errors are shown is
/// decided by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepValidation {
    pub errors: BTreeMap<Field, FieldError>,
    pub is_valid: bool,
}

impl StepValidation {
    fn from_errors(errors: BTreeMap<Field, FieldError>) -> Self {
        let is_valid = errors.is_empty();
        Self { errors, is_valid }
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }
}

fn require(errors: &mut BTreeMap<Field, FieldError>, field: Field, filled: bool) {
    if !filled {
        errors.insert(field, FieldError::Required);
    }
}

/// Pure validation of `step` against the drafts.
pub fn validate_step(
    step: WizardStep,
    couple: &CoupleDraft,
    editor: &MemoryCollectionEditor,
    plan: &PlanConfig,
) -> StepValidation {
    let mut errors = BTreeMap::new();
    match step {
        WizardStep::Names => {
            require(&mut errors, Field::Partner1, !couple.partner1.is_empty());
            require(&mut errors, Field::Partner2, !couple.partner2.is_empty());
        }
        WizardStep::Title => {
            require(&mut errors, Field::JourneyTitle, couple.has_title());
        }
        WizardStep::Instructions => {}
        WizardStep::Memories if editor.is_open() => {
            let draft = editor.draft();
            require(&mut errors, Field::MemoryDate, !draft.date.is_empty());
            require(&mut errors, Field::MemoryTitle, !draft.title.is_empty());
            require(
                &mut errors,
                Field::MemoryDescription,
                !draft.description.is_empty(),
            );
            require(&mut errors, Field::MemoryPhoto, draft.photo.is_some());
        }
        WizardStep::Memories => {
            return StepValidation {
                errors,
                is_valid: plan.is_complete(editor.collection().len()),
            };
        }
    }
    StepValidation::from_errors(errors)
}
