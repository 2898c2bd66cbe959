use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use lj_core::journey::{CoupleDraft, MemoryDraft};
use lj_core::payment::PaymentStatus;
use lj_core::ports::{ApiError, JourneyApiPort, PaymentGatewayPort};
use lj_core::timeline::Timeline;
use lj_core::JourneyId;

use super::dto::{
    CreateJourneyRequest, CreatedJourney, JourneyResponse, PaymentStatusResponse,
};

/// HTTP adapter for the journey backend.
///
/// 后端 HTTP 客户端，同时实现旅程与支付端口。
pub struct HttpJourneyApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpJourneyApi {
    /// `timeout` of zero leaves the client without a request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = check_status(response).await?;
        response.json::<T>().await.map_err(map_reqwest_error)
    }
}

#[async_trait]
impl JourneyApiPort for HttpJourneyApi {
    async fn create_journey(&self, couple: &CoupleDraft) -> Result<JourneyId, ApiError> {
        let response = self
            .client
            .post(self.url("/journey"))
            .json(&CreateJourneyRequest::from(couple))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let created: CreatedJourney = Self::read_json(response).await?;
        let journey_id = JourneyId::from_string(created.id.into_string());
        debug!(journey_id = %journey_id, "journey created");
        Ok(journey_id)
    }

    async fn create_memory(
        &self,
        journey_id: &JourneyId,
        memory: &MemoryDraft,
    ) -> Result<(), ApiError> {
        let mut form = Form::new()
            .text("date", memory.date.clone())
            .text("title", memory.title.clone())
            .text("description", memory.description.clone())
            .text("journeyId", journey_id.to_string());

        if let Some(photo) = &memory.photo {
            let part = Part::bytes(photo.bytes.to_vec())
                .file_name(photo.file_name.clone())
                .mime_str(&photo.mime_type)
                .map_err(|e| ApiError::Transport(format!("invalid photo mime type: {e}")))?;
            form = form.part("photo", part);
        }

        let response = self
            .client
            .post(self.url("/memories"))
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        check_status(response).await?;
        debug!(journey_id = %journey_id, memory_id = %memory.id, "memory created");
        Ok(())
    }

    async fn get_journey(&self, journey_id: &JourneyId) -> Result<Timeline, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/journey/{journey_id}")))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // A `null` body is how the backend reports an unknown id.
        let journey: Option<JourneyResponse> = Self::read_json(response).await?;
        journey.map(Timeline::from).ok_or(ApiError::NotFound)
    }
}

#[async_trait]
impl PaymentGatewayPort for HttpJourneyApi {
    async fn payment_status(&self, journey_id: &JourneyId) -> Result<PaymentStatus, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/payment/{journey_id}/status")))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body: PaymentStatusResponse = Self::read_json(response).await?;
        Ok(PaymentStatus::parse(&body.status))
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "backend returned error status");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

fn map_reqwest_error(error: reqwest::Error) -> ApiError {
    if error.is_decode() {
        ApiError::Decode(error.to_string())
    } else if error.is_timeout() {
        ApiError::Transport(format!("request timed out: {error}"))
    } else {
        ApiError::Transport(error.to_string())
    }
}
