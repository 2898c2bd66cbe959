//! Plan configuration.
//!
//! One configurable wizard replaces the per-plan page copies: each plan only
//! differs by required memory count, capacity, completion rule and whether
//! field errors wait for user interaction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the collection size is compared against the required count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionRule {
    Exact,
    AtLeast,
}

impl CompletionRule {
    pub fn is_met(self, count: usize, required: usize) -> bool {
        match self {
            CompletionRule::Exact => count == required,
            CompletionRule::AtLeast => count >= required,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Free,
    Premium,
    Legacy,
}

impl FromStr for PlanKind {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(PlanKind::Free),
            "premium" => Ok(PlanKind::Premium),
            "legacy" => Ok(PlanKind::Legacy),
            other => Err(UnknownPlan(other.to_string())),
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlanKind::Free => "free",
            PlanKind::Premium => "premium",
            PlanKind::Legacy => "legacy",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan: {0}")]
pub struct UnknownPlan(pub String);

/// Wizard parameters for one plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub kind: PlanKind,
    pub required_memory_count: usize,
    pub capacity: usize,
    pub completion: CompletionRule,
    pub touch_tracking: bool,
    pub is_paid: bool,
}

impl PlanConfig {
    pub fn free() -> Self {
        Self {
            kind: PlanKind::Free,
            required_memory_count: 3,
            capacity: 3,
            completion: CompletionRule::Exact,
            touch_tracking: true,
            is_paid: false,
        }
    }

    pub fn premium() -> Self {
        Self {
            kind: PlanKind::Premium,
            required_memory_count: 10,
            capacity: 10,
            completion: CompletionRule::Exact,
            touch_tracking: true,
            is_paid: true,
        }
    }

    /// Original single-page form: at least 3 memories, errors shown eagerly.
    pub fn legacy() -> Self {
        Self {
            kind: PlanKind::Legacy,
            required_memory_count: 3,
            capacity: 10,
            completion: CompletionRule::AtLeast,
            touch_tracking: false,
            is_paid: false,
        }
    }

    pub fn for_kind(kind: PlanKind) -> Self {
        match kind {
            PlanKind::Free => Self::free(),
            PlanKind::Premium => Self::premium(),
            PlanKind::Legacy => Self::legacy(),
        }
    }

    pub fn is_complete(&self, memory_count: usize) -> bool {
        self.completion
            .is_met(memory_count, self.required_memory_count)
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self::free()
    }
}
