use std::sync::Arc;

use tracing::{info, warn};

use lj_core::journey::SubmissionResult;
use lj_core::submission::SubmissionError;
use lj_core::wizard::{WizardController, WizardError};

use crate::usecases::submission::SubmissionSequencer;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// One user's pass through the wizard, from the first step to the result page.
pub struct FormSession {
    wizard: WizardController,
    sequencer: Arc<SubmissionSequencer>,
    result: Option<SubmissionResult>,
}

impl FormSession {
    pub fn new(sequencer: Arc<SubmissionSequencer>) -> Self {
        let plan = *sequencer.plan();
        Self {
            wizard: WizardController::new(plan),
            sequencer,
            result: None,
        }
    }

    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut WizardController {
        &mut self.wizard
    }

    /// Set once the submission succeeded.
    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    /// Locks the drafts, persists them and unlocks again.
    ///
    /// On failure the wizard keeps its step and collection and shows the
    /// error as the general banner, so the user can retry from the same screen.
    pub async fn finish(&mut self) -> Result<SubmissionResult, FormError> {
        let (couple, memories) = self.wizard.begin_submission()?;

        match self.sequencer.submit(&couple, &memories).await {
            Ok(result) => {
                info!(
                    journey_id = %result.journey_id,
                    link = %result.shareable_link,
                    "journey submitted"
                );
                self.wizard.end_submission(None);
                self.result = Some(result.clone());
                Ok(result)
            }
            Err(err) => {
                warn!(error = %err, "journey submission failed");
                self.wizard.end_submission(Some(err.to_string()));
                Err(err.into())
            }
        }
    }
}
