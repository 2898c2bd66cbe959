//! Submission sequencer.
//!
//! Drives [`SubmissionStateMachine`] against the journey API: the parent
//! record first, then every memory strictly one after another, then the
//! share result. Stops at the first failure without compensating.

use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};

use lj_core::journey::{CoupleDraft, MemoryCollection, SubmissionResult};
use lj_core::ports::JourneyApiPort;
use lj_core::submission::{
    SubmissionAction, SubmissionError, SubmissionEvent, SubmissionState, SubmissionStateMachine,
};
use lj_core::PlanConfig;

use crate::usecases::share::BuildShareResult;
use crate::usecases::submission::context::SubmissionContext;

/// Orchestrator that persists a finished wizard.
pub struct SubmissionSequencer {
    context: Arc<SubmissionContext>,
    journey_api: Arc<dyn JourneyApiPort>,
    build_share_result: Arc<BuildShareResult>,
    plan: PlanConfig,
}

impl SubmissionSequencer {
    pub fn new(
        journey_api: Arc<dyn JourneyApiPort>,
        build_share_result: Arc<BuildShareResult>,
        plan: PlanConfig,
    ) -> Self {
        Self {
            context: SubmissionContext::new().arc(),
            journey_api,
            build_share_result,
            plan,
        }
    }

    pub fn plan(&self) -> &PlanConfig {
        &self.plan
    }

    pub async fn state(&self) -> SubmissionState {
        self.context.get_state().await
    }

    pub fn is_in_flight(&self) -> bool {
        self.context.is_in_flight()
    }

    /// Persists the couple and every memory, in collection order.
    ///
    /// Memory `k` is only sent after memory `k - 1` was acknowledged; on the
    /// first failure nothing further is sent and already created records stay.
    pub async fn submit(
        &self,
        couple: &CoupleDraft,
        memories: &MemoryCollection,
    ) -> Result<SubmissionResult, SubmissionError> {
        let Some(_in_flight) = self.context.try_begin() else {
            warn!("submission rejected: another submission is in flight");
            return Err(SubmissionError::AlreadyInFlight);
        };

        let span = info_span!(
            "usecase.submission_sequencer.submit",
            memories = memories.len(),
            plan = %self.plan.kind
        );
        async {
            let mut current = self.context.get_state().await;
            if let SubmissionState::Succeeded { journey_id } = &current {
                // Already persisted; only the share result is recomposed.
                info!(journey_id = %journey_id, "submission already succeeded");
                return Ok(self.build_share_result.execute(journey_id));
            }
            if current.is_in_flight() {
                // The flag is free but the state is mid-sequence: the previous
                // submit future was dropped before reaching a terminal state.
                warn!(state = ?current, "previous submission was cancelled, restarting");
                current = SubmissionState::Idle;
                self.context.set_state(current.clone()).await;
            }

            let mut composed = None;
            let mut pending_events = vec![SubmissionEvent::Submit {
                memory_count: memories.len(),
                required: self.plan.required_memory_count,
                rule: self.plan.completion,
            }];

            while let Some(event) = pending_events.pop() {
                let from = current.clone();
                let event_name = format!("{:?}", event);
                let (next, actions) = SubmissionStateMachine::transition(current, event);
                info!(from = ?from, to = ?next, event = %event_name, "submission state transition");
                self.context.set_state(next.clone()).await;
                current = next;

                for action in actions {
                    debug!(?action, "submission executing action");
                    match self.execute_action(action, couple, memories).await {
                        ActionOutcome::Event(event) => pending_events.push(event),
                        ActionOutcome::Composed(result) => composed = Some(result),
                    }
                }
            }

            match current {
                SubmissionState::Succeeded { journey_id } => Ok(composed
                    .unwrap_or_else(|| self.build_share_result.execute(&journey_id))),
                SubmissionState::Failed {
                    error,
                    orphaned_journey,
                } => {
                    if let Some(journey_id) = orphaned_journey {
                        warn!(
                            journey_id = %journey_id,
                            "journey left partially persisted after memory failure"
                        );
                    }
                    Err(error)
                }
                other => {
                    error!(state = ?other, "submission stopped in a non-terminal state");
                    Err(SubmissionError::JourneyCreationFailed)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn execute_action(
        &self,
        action: SubmissionAction,
        couple: &CoupleDraft,
        memories: &MemoryCollection,
    ) -> ActionOutcome {
        match action {
            SubmissionAction::CreateParent => match self.journey_api.create_journey(couple).await {
                Ok(journey_id) => {
                    debug!(journey_id = %journey_id, "submission action CreateParent completed");
                    ActionOutcome::Event(SubmissionEvent::ParentCreated { journey_id })
                }
                Err(err) => {
                    error!(action = "CreateParent", error = %err, "journey creation failed");
                    ActionOutcome::Event(SubmissionEvent::ParentFailed)
                }
            },
            SubmissionAction::CreateChild { index, journey_id } => {
                let Some(memory) = memories.as_slice().get(index) else {
                    error!(index, "memory index out of range");
                    return ActionOutcome::Event(SubmissionEvent::ChildFailed { index });
                };
                match self.journey_api.create_memory(&journey_id, memory).await {
                    Ok(()) => {
                        debug!(
                            index,
                            memory_id = %memory.id,
                            "submission action CreateChild completed"
                        );
                        ActionOutcome::Event(SubmissionEvent::ChildCreated { index })
                    }
                    Err(err) => {
                        error!(
                            action = "CreateChild",
                            index,
                            journey_id = %journey_id,
                            error = %err,
                            "memory creation failed"
                        );
                        ActionOutcome::Event(SubmissionEvent::ChildFailed { index })
                    }
                }
            }
            SubmissionAction::ComposeResult { journey_id } => {
                ActionOutcome::Composed(self.build_share_result.execute(&journey_id))
            }
        }
    }
}

enum ActionOutcome {
    Event(SubmissionEvent),
    Composed(SubmissionResult),
}
