use async_trait::async_trait;

use crate::ids::JourneyId;
use crate::payment::PaymentStatus;
use crate::ports::ApiError;

/// `GET /payment/:id/status`.
#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    async fn payment_status(&self, journey_id: &JourneyId) -> Result<PaymentStatus, ApiError>;
}
