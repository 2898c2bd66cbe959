use serde::{Deserialize, Serialize};

use crate::wizard::{Field, WizardStep};

/// Collection-level errors raised by the memory editor.
///
/// Cleared on the next successful collection mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum CollectionError {
    #[error("Todos os campos da lembrança são obrigatórios")]
    IncompleteMemory,
    #[error("Limite de {capacity} lembranças atingido")]
    CapacityExceeded { capacity: usize },
    #[error("Nenhuma lembrança em edição")]
    NoOpenDraft,
}

/// Errors returned by wizard operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("drafts are locked while a submission is in flight")]
    Locked,
    #[error("field {field:?} cannot be edited on step {step:?}")]
    FieldNotOnStep { field: Field, step: WizardStep },
    #[error("no field named {name:?} on step {step:?}")]
    UnknownField { name: String, step: WizardStep },
    #[error("value kind does not match field {0:?}")]
    ValueKindMismatch(Field),
    #[error("operation requires the memory step, current step is {0:?}")]
    NotOnMemoryStep(WizardStep),
    #[error(transparent)]
    Collection(#[from] CollectionError),
}
