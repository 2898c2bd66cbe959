use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Journey identifier assigned by the backend when the parent record is created.
///
/// Never generated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JourneyId(String);

impl_id!(JourneyId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journey_id_displays_raw_value() {
        let id: JourneyId = "65a1f0c2".into();
        assert_eq!(id.to_string(), "65a1f0c2");
        assert_eq!(id.as_str(), "65a1f0c2");
    }

    #[test]
    fn journey_id_serializes_as_plain_string() {
        let id = JourneyId::from_string("abc".to_string());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
