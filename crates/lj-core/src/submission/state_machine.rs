//! Submission state machine.
//!
//! Defines a pure state transition function for the submission sequence:
//! `Idle → CreatingParent → CreatingChildren(0..N) → Succeeded`, with
//! `Failed` reachable from any non-idle state.

use serde::{Deserialize, Serialize};

use crate::ids::JourneyId;
use crate::plan::CompletionRule;

/// Submission flow state.
///
/// 提交流程状态。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    /// Nothing sent yet.
    Idle,
    /// Creating the journey record.
    CreatingParent { total: usize },
    /// Creating memory `next` of `total`; earlier ones are persisted.
    CreatingChildren {
        journey_id: JourneyId,
        next: usize,
        total: usize,
    },
    /// Every record persisted.
    Succeeded { journey_id: JourneyId },
    /// Stopped. `orphaned_journey` is set when the parent was already created.
    Failed {
        error: SubmissionError,
        orphaned_journey: Option<JourneyId>,
    },
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            SubmissionState::CreatingParent { .. } | SubmissionState::CreatingChildren { .. }
        )
    }
}

/// Events that drive the submission flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionEvent {
    /// User asks to finish. Carries the collection size to re-check.
    Submit {
        memory_count: usize,
        required: usize,
        rule: CompletionRule,
    },
    ParentCreated { journey_id: JourneyId },
    ParentFailed,
    ChildCreated { index: usize },
    ChildFailed { index: usize },
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionAction {
    /// Create the journey record from the couple draft.
    CreateParent,
    /// Create memory `index` under `journey_id`.
    CreateChild { index: usize, journey_id: JourneyId },
    /// Compose share link and QR code.
    ComposeResult { journey_id: JourneyId },
}

/// Submission errors, displayed as the general error banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum SubmissionError {
    #[error("{}", not_enough_message(.required, .rule))]
    NotEnoughMemories {
        required: usize,
        rule: CompletionRule,
    },
    #[error("Ocorreu um erro ao salvar sua jornada. Por favor, tente novamente.")]
    JourneyCreationFailed,
    #[error("Ocorreu um erro ao salvar uma memória. Por favor, tente novamente.")]
    MemoryCreationFailed { index: usize },
    #[error("Sua jornada já está sendo enviada.")]
    AlreadyInFlight,
}

fn not_enough_message(required: &usize, rule: &CompletionRule) -> String {
    match rule {
        CompletionRule::Exact => format!("Adicione {required} lembranças antes de finalizar."),
        CompletionRule::AtLeast => {
            format!("Adicione pelo menos {required} lembranças antes de finalizar.")
        }
    }
}

/// Pure submission state machine.
///
/// 纯状态机：不包含副作用。
pub struct SubmissionStateMachine;

impl SubmissionStateMachine {
    pub fn transition(
        state: SubmissionState,
        event: SubmissionEvent,
    ) -> (SubmissionState, Vec<SubmissionAction>) {
        match (state, event) {
            (
                SubmissionState::Idle | SubmissionState::Failed { .. },
                SubmissionEvent::Submit {
                    memory_count,
                    required,
                    rule,
                },
            ) => {
                if !rule.is_met(memory_count, required) {
                    return (
                        SubmissionState::Failed {
                            error: SubmissionError::NotEnoughMemories { required, rule },
                            orphaned_journey: None,
                        },
                        Vec::new(),
                    );
                }
                (
                    SubmissionState::CreatingParent {
                        total: memory_count,
                    },
                    vec![SubmissionAction::CreateParent],
                )
            }
            (
                SubmissionState::CreatingParent { total },
                SubmissionEvent::ParentCreated { journey_id },
            ) => {
                if total == 0 {
                    return (
                        SubmissionState::Succeeded {
                            journey_id: journey_id.clone(),
                        },
                        vec![SubmissionAction::ComposeResult { journey_id }],
                    );
                }
                (
                    SubmissionState::CreatingChildren {
                        journey_id: journey_id.clone(),
                        next: 0,
                        total,
                    },
                    vec![SubmissionAction::CreateChild {
                        index: 0,
                        journey_id,
                    }],
                )
            }
            (SubmissionState::CreatingParent { .. }, SubmissionEvent::ParentFailed) => (
                SubmissionState::Failed {
                    error: SubmissionError::JourneyCreationFailed,
                    orphaned_journey: None,
                },
                Vec::new(),
            ),
            (
                SubmissionState::CreatingChildren {
                    journey_id,
                    next,
                    total,
                },
                SubmissionEvent::ChildCreated { index },
            ) if index == next => {
                let following = next + 1;
                if following < total {
                    (
                        SubmissionState::CreatingChildren {
                            journey_id: journey_id.clone(),
                            next: following,
                            total,
                        },
                        vec![SubmissionAction::CreateChild {
                            index: following,
                            journey_id,
                        }],
                    )
                } else {
                    (
                        SubmissionState::Succeeded {
                            journey_id: journey_id.clone(),
                        },
                        vec![SubmissionAction::ComposeResult { journey_id }],
                    )
                }
            }
            (
                SubmissionState::CreatingChildren {
                    journey_id, next, ..
                },
                SubmissionEvent::ChildFailed { index },
            ) if index == next => (
                SubmissionState::Failed {
                    error: SubmissionError::MemoryCreationFailed { index },
                    orphaned_journey: Some(journey_id),
                },
                Vec::new(),
            ),
            (state, _event) => (state, Vec::new()),
        }
    }
}
