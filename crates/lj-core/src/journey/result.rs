use serde::{Deserialize, Serialize};

use crate::ids::JourneyId;
use crate::journey::{ResultRoute, ShareLink};

/// Outcome of a successful submission, used purely for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub journey_id: JourneyId,
    pub shareable_link: ShareLink,
    /// `None` when QR rendering failed; the link stays usable.
    pub qr_image_data_uri: Option<String>,
}

/// Shown next to the link when the QR image could not be produced.
pub const QR_CODE_ERROR_MESSAGE: &str =
    "Ocorreu um erro ao gerar o código QR. Por favor, tente novamente.";

impl SubmissionResult {
    /// Banner text for the result page, if any.
    pub fn qr_error_message(&self) -> Option<&'static str> {
        self.qr_image_data_uri
            .is_none()
            .then_some(QR_CODE_ERROR_MESSAGE)
    }

    pub fn route(&self) -> ResultRoute {
        ResultRoute::QrCode(self.journey_id.clone())
    }
}
