use crate::ids::MemoryId;
use crate::journey::MemoryDraft;
use crate::wizard::CollectionError;

/// Ordered, capacity-bounded list of committed memories.
///
/// Insertion order is preserved; edits replace entries in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCollection {
    entries: Vec<MemoryDraft>,
    capacity: usize,
}

impl MemoryCollection {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn get(&self, id: &MemoryId) -> Option<&MemoryDraft> {
        self.entries.iter().find(|m| &m.id == id)
    }

    pub fn contains(&self, id: &MemoryId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MemoryDraft> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[MemoryDraft] {
        &self.entries
    }

    /// Appends a new entry at the end.
    pub fn push(&mut self, memory: MemoryDraft) -> Result<(), CollectionError> {
        if self.is_full() {
            return Err(CollectionError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.entries.push(memory);
        Ok(())
    }

    /// Replaces the entry sharing `memory.id`, keeping its position.
    ///
    /// Returns the memory back when no entry matches.
    pub fn replace(&mut self, memory: MemoryDraft) -> Result<(), MemoryDraft> {
        match self.entries.iter_mut().find(|m| m.id == memory.id) {
            Some(slot) => {
                *slot = memory;
                Ok(())
            }
            None => Err(memory),
        }
    }

    pub fn remove(&mut self, id: &MemoryId) -> Option<MemoryDraft> {
        let index = self.entries.iter().position(|m| &m.id == id)?;
        Some(self.entries.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> MemoryDraft {
        let mut draft = MemoryDraft::empty();
        draft.title = title.into();
        draft
    }

    #[test]
    fn push_rejects_entries_beyond_capacity() {
        let mut collection = MemoryCollection::with_capacity(1);
        collection.push(titled("a")).unwrap();
        let err = collection.push(titled("b")).unwrap_err();
        assert_eq!(err, CollectionError::CapacityExceeded { capacity: 1 });
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn replace_keeps_original_position() {
        let mut collection = MemoryCollection::with_capacity(3);
        let first = titled("a");
        let second = titled("b");
        collection.push(first.clone()).unwrap();
        collection.push(second.clone()).unwrap();

        let mut edited = first.clone();
        edited.title = "a2".into();
        collection.replace(edited).unwrap();

        let titles: Vec<_> = collection.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["a2", "b"]);
    }

    #[test]
    fn replace_unknown_id_returns_memory() {
        let mut collection = MemoryCollection::with_capacity(3);
        let stray = titled("x");
        let returned = collection.replace(stray.clone()).unwrap_err();
        assert_eq!(returned, stray);
        assert!(collection.is_empty());
    }

    #[test]
    fn remove_drops_matching_entry_only() {
        let mut collection = MemoryCollection::with_capacity(3);
        let a = titled("a");
        let b = titled("b");
        collection.push(a.clone()).unwrap();
        collection.push(b.clone()).unwrap();

        assert_eq!(collection.remove(&a.id).map(|m| m.title), Some("a".into()));
        assert!(collection.remove(&a.id).is_none());
        assert!(collection.contains(&b.id));
    }
}
