//! Wire shapes of the backend API.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use lj_core::journey::CoupleDraft;
use lj_core::timeline::{Timeline, TimelineMemory};
use lj_core::JourneyId;

/// Identifiers come back as strings or integers depending on the backend store.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum WireId {
    Text(String),
    Number(i64),
}

impl WireId {
    pub(crate) fn into_string(self) -> String {
        match self {
            WireId::Text(s) => s,
            WireId::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateJourneyRequest<'a> {
    pub partner1: &'a str,
    pub partner2: &'a str,
    pub title: &'a str,
    pub is_paid: bool,
}

impl<'a> From<&'a CoupleDraft> for CreateJourneyRequest<'a> {
    fn from(couple: &'a CoupleDraft) -> Self {
        Self {
            partner1: &couple.partner1,
            partner2: &couple.partner2,
            title: &couple.title,
            is_paid: couple.is_paid,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedJourney {
    pub id: WireId,
}

/// Node-style serialized buffer: `{ "type": "Buffer", "data": [..] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct PhotoBuffer {
    #[serde(default)]
    pub data: Vec<u8>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MemoryResponse {
    pub id: WireId,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photo: Option<PhotoBuffer>,
    #[serde(default)]
    pub photo_mime_type: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JourneyResponse {
    pub id: WireId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub partner1: String,
    #[serde(default)]
    pub partner2: String,
    #[serde(default)]
    pub memories: Vec<MemoryResponse>,
}

impl From<JourneyResponse> for Timeline {
    fn from(value: JourneyResponse) -> Self {
        Timeline {
            id: JourneyId::from_string(value.id.into_string()),
            title: value.title,
            partner1: value.partner1,
            partner2: value.partner2,
            memories: value.memories.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<MemoryResponse> for TimelineMemory {
    fn from(value: MemoryResponse) -> Self {
        TimelineMemory {
            id: value.id.into_string(),
            date: value.date,
            title: value.title,
            description: value.description,
            photo: value
                .photo
                .filter(|p| !p.data.is_empty())
                .map(|p| Bytes::from(p.data)),
            photo_mime_type: value.photo_mime_type,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaymentStatusResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journey_response_maps_buffer_photo_and_numeric_ids() {
        let raw = r#"{
            "id": 7,
            "title": "Nós",
            "partner1": "Alice",
            "partner2": "Bruno",
            "memories": [{
                "id": "m-1",
                "date": "2021-02-14",
                "title": "Primeiro encontro",
                "description": "Café",
                "photo": { "type": "Buffer", "data": [1, 2, 3] },
                "photoMimeType": "image/png"
            }]
        }"#;

        let timeline: Timeline = serde_json::from_str::<JourneyResponse>(raw)
            .unwrap()
            .into();

        assert_eq!(timeline.id.as_str(), "7");
        assert_eq!(timeline.memories.len(), 1);
        let memory = &timeline.memories[0];
        assert_eq!(memory.photo.as_deref(), Some(&[1u8, 2, 3][..]));
        assert_eq!(memory.photo_mime_type, "image/png");
    }

    #[test]
    fn create_request_is_camel_case() {
        let couple = CoupleDraft {
            partner1: "Alice".to_string(),
            partner2: "Bruno".to_string(),
            title: "Nós".to_string(),
            is_paid: true,
        };
        let json = serde_json::to_value(CreateJourneyRequest::from(&couple)).unwrap();
        assert_eq!(json["isPaid"], serde_json::json!(true));
        assert_eq!(json["partner1"], serde_json::json!("Alice"));
    }
}
