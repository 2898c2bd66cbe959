use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::JourneyId;

/// File name offered when the share QR code is downloaded.
pub const QR_CODE_FILE_NAME: &str = "love_journey_qr_code.png";

/// Public link to a rendered timeline: `<origin>/journey/<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareLink(String);

impl ShareLink {
    pub fn for_journey(origin: &str, journey_id: &JourneyId) -> Self {
        let origin = origin.trim_end_matches('/');
        Self(format!("{origin}{}", ResultRoute::Journey(journey_id.clone()).path()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deterministic navigation targets keyed by journey id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultRoute {
    /// Page showing the share link and QR code.
    QrCode(JourneyId),
    /// Rendered timeline page.
    Journey(JourneyId),
}

impl ResultRoute {
    pub fn path(&self) -> String {
        match self {
            ResultRoute::QrCode(id) => format!("/qr-code/{id}"),
            ResultRoute::Journey(id) => format!("/journey/{id}"),
        }
    }
}
