//! Read-side timeline model.
//!
//! A persisted journey as returned by the backend, plus the read-time
//! transforms used to render it (date ordering, long-form dates, photo
//! data URIs).

mod date;

pub use date::{format_long_date, parse_memory_date};

use base64::Engine;
use bytes::Bytes;
use serde::Serialize;

use crate::ids::JourneyId;

/// A persisted memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMemory {
    pub id: String,
    pub date: String,
    pub title: String,
    pub description: String,
    #[serde(skip)]
    pub photo: Option<Bytes>,
    pub photo_mime_type: String,
}

impl TimelineMemory {
    /// `data:<mime>;base64,<payload>` for direct display, when a photo is attached.
    pub fn photo_data_uri(&self) -> Option<String> {
        let photo = self.photo.as_ref().filter(|p| !p.is_empty())?;
        let mime = if self.photo_mime_type.is_empty() {
            "application/octet-stream"
        } else {
            &self.photo_mime_type
        };
        let encoded = base64::engine::general_purpose::STANDARD.encode(photo);
        Some(format!("data:{mime};base64,{encoded}"))
    }
}

/// A persisted journey with its memories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub id: JourneyId,
    pub title: String,
    pub partner1: String,
    pub partner2: String,
    pub memories: Vec<TimelineMemory>,
}

impl Timeline {
    /// Sorts memories by date ascending. Stable; unparseable dates go last.
    ///
    /// Stored order is untouched on the backend; this only affects display.
    pub fn sort_by_date(&mut self) {
        self.memories
            .sort_by_key(|m| parse_memory_date(&m.date).map_or((1, None), |d| (0, Some(d))));
    }

    pub fn sorted(mut self) -> Self {
        self.sort_by_date();
        self
    }

    /// "Alice e Bruno".
    pub fn couple_line(&self) -> String {
        format!("{} e {}", self.partner1, self.partner2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory(id: &str, date: &str) -> TimelineMemory {
        TimelineMemory {
            id: id.into(),
            date: date.into(),
            title: id.into(),
            description: String::new(),
            photo: None,
            photo_mime_type: String::new(),
        }
    }

    #[test]
    fn sort_orders_mixed_formats_and_keeps_unparseable_last() {
        let timeline = Timeline {
            id: "j".into(),
            title: "t".into(),
            partner1: "A".into(),
            partner2: "B".into(),
            memories: vec![
                memory("c", "2023-03-01T00:00:00.000Z"),
                memory("x", "sem data"),
                memory("a", "14/02/2021"),
                memory("b", "2022-07-30"),
            ],
        }
        .sorted();

        let ids: Vec<_> = timeline.memories.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "x"]);
    }

    #[test]
    fn photo_data_uri_uses_mime_type() {
        let mut m = memory("a", "2020-01-01");
        m.photo = Some(Bytes::from_static(b"hi"));
        m.photo_mime_type = "image/png".into();
        assert_eq!(m.photo_data_uri().unwrap(), "data:image/png;base64,aGk=");

        m.photo = None;
        assert!(m.photo_data_uri().is_none());
    }

    #[test]
    fn couple_line_joins_with_e() {
        let timeline = Timeline {
            id: "j".into(),
            title: "t".into(),
            partner1: "Alice".into(),
            partner2: "Bruno".into(),
            memories: Vec::new(),
        };
        assert_eq!(timeline.couple_line(), "Alice e Bruno");
    }
}
