use std::sync::Arc;

use tracing::{info_span, warn};

use lj_core::journey::{ShareLink, SubmissionResult};
use lj_core::ports::QrCodePort;
use lj_core::JourneyId;

/// Composes the shareable link and its QR image for a persisted journey.
///
/// A QR rendering failure never hides the link: the result carries no image
/// and the page shows the QR error banner instead.
pub struct BuildShareResult {
    qr_code: Arc<dyn QrCodePort>,
    public_origin: String,
}

impl BuildShareResult {
    pub fn new(qr_code: Arc<dyn QrCodePort>, public_origin: impl Into<String>) -> Self {
        Self {
            qr_code,
            public_origin: public_origin.into(),
        }
    }

    pub fn public_origin(&self) -> &str {
        &self.public_origin
    }

    pub fn execute(&self, journey_id: &JourneyId) -> SubmissionResult {
        let _span = info_span!("usecase.build_share_result.execute", journey_id = %journey_id)
            .entered();

        let shareable_link = ShareLink::for_journey(&self.public_origin, journey_id);
        let qr_image_data_uri = match self.qr_code.render_data_uri(shareable_link.as_str()) {
            Ok(uri) => Some(uri),
            Err(err) => {
                warn!(error = %err, link = %shareable_link, "qr code rendering failed");
                None
            }
        };

        SubmissionResult {
            journey_id: journey_id.clone(),
            shareable_link,
            qr_image_data_uri,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lj_core::ports::QrCodeError;

    mockall::mock! {
        pub QrCode {}

        impl QrCodePort for QrCode {
            fn render_data_uri(&self, url: &str) -> Result<String, QrCodeError>;
        }
    }

    #[test]
    fn builds_link_and_qr_for_journey() {
        let mut qr = MockQrCode::new();
        qr.expect_render_data_uri()
            .withf(|url| url == "https://lj.app/journey/j-1")
            .times(1)
            .returning(|_| Ok("data:image/png;base64,AAAA".to_string()));

        let usecase = BuildShareResult::new(Arc::new(qr), "https://lj.app");
        let result = usecase.execute(&JourneyId::from("j-1"));

        assert_eq!(result.shareable_link.as_str(), "https://lj.app/journey/j-1");
        assert_eq!(
            result.qr_image_data_uri.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert!(result.qr_error_message().is_none());
    }

    #[test]
    fn qr_failure_keeps_link() {
        let mut qr = MockQrCode::new();
        qr.expect_render_data_uri()
            .returning(|_| Err(QrCodeError::Render("boom".to_string())));

        let usecase = BuildShareResult::new(Arc::new(qr), "https://lj.app/");
        let result = usecase.execute(&JourneyId::from("j-2"));

        assert_eq!(result.shareable_link.as_str(), "https://lj.app/journey/j-2");
        assert!(result.qr_image_data_uri.is_none());
        assert!(result.qr_error_message().is_some());
    }
}
