use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Client-generated token identifying a memory draft inside the collection.
///
/// 客户端生成的回忆条目标识。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryId(String);

impl_id!(MemoryId);

impl MemoryId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_memory_ids_are_unique() {
        let a = MemoryId::generate();
        let b = MemoryId::generate();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }
}
