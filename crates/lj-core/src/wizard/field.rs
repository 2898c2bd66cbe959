use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::journey::PhotoRef;

pub const TOTAL_STEPS: usize = 4;

/// Wizard step.
///
/// 向导步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    /// Partner names.
    Names,
    /// Journey title.
    Title,
    /// Instructions before adding memories; never blocks.
    Instructions,
    /// Memory collection (terminal step).
    Memories,
}

impl WizardStep {
    pub const ALL: [WizardStep; TOTAL_STEPS] = [
        WizardStep::Names,
        WizardStep::Title,
        WizardStep::Instructions,
        WizardStep::Memories,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_terminal(self) -> bool {
        self == WizardStep::Memories
    }

    /// Entity receiving field edits on this step.
    pub fn entity(self) -> Entity {
        if self.is_terminal() {
            Entity::Memory
        } else {
            Entity::Couple
        }
    }
}

/// Draft an edit is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Couple,
    Memory,
}

/// Every editable field of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Partner1,
    Partner2,
    JourneyTitle,
    MemoryDate,
    MemoryTitle,
    MemoryDescription,
    MemoryPhoto,
}

impl Field {
    pub const MEMORY_FIELDS: [Field; 4] = [
        Field::MemoryDate,
        Field::MemoryTitle,
        Field::MemoryDescription,
        Field::MemoryPhoto,
    ];

    pub fn entity(self) -> Entity {
        match self {
            Field::Partner1 | Field::Partner2 | Field::JourneyTitle => Entity::Couple,
            _ => Entity::Memory,
        }
    }

    /// Form name of the field as submitted by the page.
    pub fn name(self) -> &'static str {
        match self {
            Field::Partner1 => "partner1",
            Field::Partner2 => "partner2",
            Field::JourneyTitle | Field::MemoryTitle => "title",
            Field::MemoryDate => "date",
            Field::MemoryDescription => "description",
            Field::MemoryPhoto => "photo",
        }
    }

    /// Resolves a form field name against the step it was edited on.
    ///
    /// `title` names the journey title before the memory step and the memory
    /// title on it.
    pub fn resolve(name: &str, step: WizardStep) -> Option<Field> {
        let field = match (name, step.entity()) {
            ("partner1", Entity::Couple) => Field::Partner1,
            ("partner2", Entity::Couple) => Field::Partner2,
            ("title", Entity::Couple) => Field::JourneyTitle,
            ("title", Entity::Memory) => Field::MemoryTitle,
            ("date", Entity::Memory) => Field::MemoryDate,
            ("description", Entity::Memory) => Field::MemoryDescription,
            ("photo", Entity::Memory) => Field::MemoryPhoto,
            _ => return None,
        };
        Some(field)
    }
}

/// New value for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Date(Option<NaiveDate>),
    Photo(Option<PhotoRef>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Per-field validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FieldError {
    #[error("Campo obrigatório")]
    Required,
}

impl FieldError {
    pub fn message(&self) -> String {
        self.to_string()
    }
}
