//! Payment status model.
//!
//! The payment gateway redirects back to a success or pending page with the
//! journey id as external reference; both pages poll the backend and decide
//! where to go next.

use serde::{Deserialize, Serialize};

use crate::ids::JourneyId;
use crate::journey::ResultRoute;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Approved,
    Pending,
    Other(String),
}

impl PaymentStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "approved" => PaymentStatus::Approved,
            "pending" => PaymentStatus::Pending,
            other => PaymentStatus::Other(other.to_string()),
        }
    }
}

/// Page the user landed on after the gateway redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPage {
    Success,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum PaymentError {
    #[error("No journey ID found in the URL.")]
    NoJourneyReference,
    #[error("Pagamento ainda não aprovado. Tente novamente mais tarde.")]
    NotApprovedYet,
    #[error("O pagamento falhou. Por favor, tente novamente.")]
    Failed,
    #[error("Ocorreu um erro ao verificar o status do pagamento.")]
    CheckFailed,
}

/// Where the payment pages send the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentRoute {
    /// Approved: go to the QR code page.
    Proceed(ResultRoute),
    /// Still pending: stay and offer a refresh.
    StayPending,
    /// Show the error with a retry affordance.
    Blocked(PaymentError),
}

/// Decides the next route from the reported status.
pub fn resolve_payment_route(
    page: PaymentPage,
    journey_id: &JourneyId,
    status: &PaymentStatus,
) -> PaymentRoute {
    match (status, page) {
        (PaymentStatus::Approved, _) => {
            PaymentRoute::Proceed(ResultRoute::QrCode(journey_id.clone()))
        }
        (PaymentStatus::Pending, PaymentPage::Pending) => PaymentRoute::StayPending,
        (PaymentStatus::Pending, PaymentPage::Success) => {
            PaymentRoute::Blocked(PaymentError::NotApprovedYet)
        }
        (PaymentStatus::Other(_), PaymentPage::Success) => {
            PaymentRoute::Blocked(PaymentError::NotApprovedYet)
        }
        (PaymentStatus::Other(_), PaymentPage::Pending) => {
            PaymentRoute::Blocked(PaymentError::Failed)
        }
    }
}
