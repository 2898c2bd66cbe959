use bytes::Bytes;
use chrono::NaiveDate;

use crate::ids::MemoryId;

/// Display format of memory dates (`dd/MM/yyyy`).
pub const MEMORY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Reference to a photo chosen for a memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl PhotoRef {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// A memory entry being edited or already committed to the collection.
///
/// An entry is complete iff date, title, description and photo are all set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDraft {
    pub id: MemoryId,
    pub date: String,
    pub title: String,
    pub description: String,
    pub photo: Option<PhotoRef>,
    pub photo_mime_type: String,
}

impl MemoryDraft {
    /// Empty draft with a freshly generated id.
    pub fn empty() -> Self {
        Self {
            id: MemoryId::generate(),
            date: String::new(),
            title: String::new(),
            description: String::new(),
            photo: None,
            photo_mime_type: String::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.date.is_empty()
            && !self.title.is_empty()
            && !self.description.is_empty()
            && self.photo.is_some()
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date
            .map(|d| d.format(MEMORY_DATE_FORMAT).to_string())
            .unwrap_or_default();
    }

    /// Parsed value of the display date, if any.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, MEMORY_DATE_FORMAT).ok()
    }

    pub fn set_photo(&mut self, photo: Option<PhotoRef>) {
        self.photo_mime_type = photo
            .as_ref()
            .map(|p| p.mime_type.clone())
            .unwrap_or_default();
        self.photo = photo;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> PhotoRef {
        PhotoRef::new("praia.jpg", "image/jpeg", Bytes::from_static(b"\xff\xd8"))
    }

    #[test]
    fn empty_draft_is_incomplete() {
        assert!(!MemoryDraft::empty().is_complete());
    }

    #[test]
    fn draft_with_all_fields_is_complete() {
        let mut draft = MemoryDraft::empty();
        draft.set_date(NaiveDate::from_ymd_opt(2021, 2, 14));
        draft.title = "Primeiro beijo".into();
        draft.description = "No parque".into();
        draft.set_photo(Some(photo()));
        assert!(draft.is_complete());
        assert_eq!(draft.date, "14/02/2021");
        assert_eq!(draft.photo_mime_type, "image/jpeg");
    }

    #[test]
    fn clearing_photo_clears_mime_type() {
        let mut draft = MemoryDraft::empty();
        draft.set_photo(Some(photo()));
        draft.set_photo(None);
        assert!(draft.photo.is_none());
        assert!(draft.photo_mime_type.is_empty());
    }

    #[test]
    fn parsed_date_round_trips_display_format() {
        let mut draft = MemoryDraft::empty();
        draft.set_date(NaiveDate::from_ymd_opt(2019, 12, 1));
        assert_eq!(draft.parsed_date(), NaiveDate::from_ymd_opt(2019, 12, 1));
        draft.set_date(None);
        assert_eq!(draft.parsed_date(), None);
    }
}
