use serde::{Deserialize, Serialize};

/// Couple data collected on the first wizard steps.
///
/// 情侣基本信息（前两个步骤）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoupleDraft {
    pub partner1: String,
    pub partner2: String,
    pub title: String,
    pub is_paid: bool,
}

impl CoupleDraft {
    pub fn new(is_paid: bool) -> Self {
        Self {
            is_paid,
            ..Self::default()
        }
    }

    pub fn has_names(&self) -> bool {
        !self.partner1.is_empty() && !self.partner2.is_empty()
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn couple_draft_serializes_with_backend_field_names() {
        let draft = CoupleDraft {
            partner1: "Alice".into(),
            partner2: "Bruno".into(),
            title: "Nossa História".into(),
            is_paid: true,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["partner1"], "Alice");
        assert_eq!(json["isPaid"], true);
    }

    #[test]
    fn has_names_requires_both_partners() {
        let mut draft = CoupleDraft::new(false);
        draft.partner1 = "Alice".into();
        assert!(!draft.has_names());
        draft.partner2 = "Bruno".into();
        assert!(draft.has_names());
    }
}
