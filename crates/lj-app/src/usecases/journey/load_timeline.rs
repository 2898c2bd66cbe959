use std::sync::Arc;

use tracing::{error, info_span, Instrument};

use lj_core::ports::{ApiError, JourneyApiPort};
use lj_core::timeline::Timeline;
use lj_core::JourneyId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimelineError {
    #[error("Linha do tempo não encontrada.")]
    NotFound,
    #[error("Erro ao carregar a história. Por favor, tente novamente.")]
    Unavailable,
}

/// Loads a persisted journey for the public timeline page, memories sorted by date.
pub struct LoadTimeline {
    journey_api: Arc<dyn JourneyApiPort>,
}

impl LoadTimeline {
    pub fn new(journey_api: Arc<dyn JourneyApiPort>) -> Self {
        Self { journey_api }
    }

    pub async fn execute(&self, journey_id: &JourneyId) -> Result<Timeline, TimelineError> {
        if journey_id.is_empty() {
            return Err(TimelineError::NotFound);
        }

        let span = info_span!("usecase.load_timeline.execute", journey_id = %journey_id);
        async {
            match self.journey_api.get_journey(journey_id).await {
                Ok(timeline) => Ok(timeline.sorted()),
                Err(ApiError::NotFound) => Err(TimelineError::NotFound),
                Err(err) => {
                    error!(error = %err, "failed to load timeline");
                    Err(TimelineError::Unavailable)
                }
            }
        }
        .instrument(span)
        .await
    }
}
