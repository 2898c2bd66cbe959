use std::sync::Arc;

use tracing::{error, info, info_span, Instrument};

use lj_core::payment::{resolve_payment_route, PaymentError, PaymentPage, PaymentRoute};
use lj_core::ports::PaymentGatewayPort;
use lj_core::JourneyId;

/// Backs the success and pending pages the payment gateway redirects to.
pub struct CheckPaymentStatus {
    gateway: Arc<dyn PaymentGatewayPort>,
}

impl CheckPaymentStatus {
    pub fn new(gateway: Arc<dyn PaymentGatewayPort>) -> Self {
        Self { gateway }
    }

    /// `external_reference` is the journey id carried by the redirect, if any.
    pub async fn execute(
        &self,
        page: PaymentPage,
        external_reference: Option<&str>,
    ) -> PaymentRoute {
        let Some(journey_id) = external_reference
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(JourneyId::from)
        else {
            return PaymentRoute::Blocked(PaymentError::NoJourneyReference);
        };

        let span = info_span!(
            "usecase.check_payment_status.execute",
            page = ?page,
            journey_id = %journey_id
        );
        async {
            match self.gateway.payment_status(&journey_id).await {
                Ok(status) => {
                    let route = resolve_payment_route(page, &journey_id, &status);
                    info!(?status, ?route, "payment status resolved");
                    route
                }
                Err(err) => {
                    error!(error = %err, "payment status check failed");
                    PaymentRoute::Blocked(PaymentError::CheckFailed)
                }
            }
        }
        .instrument(span)
        .await
    }
}
