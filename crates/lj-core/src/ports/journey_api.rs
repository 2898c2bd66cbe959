use async_trait::async_trait;

use crate::ids::JourneyId;
use crate::journey::{CoupleDraft, MemoryDraft};
use crate::ports::ApiError;
use crate::timeline::Timeline;

/// Backend journey endpoints (`POST /journey`, `POST /memories`, `GET /journey/:id`).
#[async_trait]
pub trait JourneyApiPort: Send + Sync {
    /// Creates the parent record and returns its backend id.
    async fn create_journey(&self, couple: &CoupleDraft) -> Result<JourneyId, ApiError>;

    /// Creates one memory as a multipart payload attached to `journey_id`.
    async fn create_memory(
        &self,
        journey_id: &JourneyId,
        memory: &MemoryDraft,
    ) -> Result<(), ApiError>;

    /// Loads a journey with its memories. Absent journeys are `ApiError::NotFound`.
    async fn get_journey(&self, journey_id: &JourneyId) -> Result<Timeline, ApiError>;
}

#[cfg(test)]
mockall::mock! {
    pub JourneyApi {}

    #[async_trait]
    impl JourneyApiPort for JourneyApi {
        async fn create_journey(&self, couple: &CoupleDraft) -> Result<JourneyId, ApiError>;
        async fn create_memory(
            &self,
            journey_id: &JourneyId,
            memory: &MemoryDraft,
        ) -> Result<(), ApiError>;
        async fn get_journey(&self, journey_id: &JourneyId) -> Result<Timeline, ApiError>;
    }
}
