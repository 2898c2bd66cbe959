use crate::ids::MemoryId;
use crate::journey::{MemoryCollection, MemoryDraft};
use crate::wizard::CollectionError;

/// Sub-form visibility of the memory editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Closed,
    Creating,
    /// Editing a committed entry; it stays in the collection until re-saved.
    Editing(MemoryId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Created,
    Updated,
}

/// CRUD sub-flow over the memory collection of the final wizard step.
#[derive(Debug, Clone)]
pub struct MemoryCollectionEditor {
    draft: MemoryDraft,
    collection: MemoryCollection,
    mode: EditorMode,
    error: Option<CollectionError>,
}

impl MemoryCollectionEditor {
    pub fn new(capacity: usize) -> Self {
        Self {
            draft: MemoryDraft::empty(),
            collection: MemoryCollection::with_capacity(capacity),
            mode: EditorMode::Closed,
            error: None,
        }
    }

    pub fn draft(&self) -> &MemoryDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut MemoryDraft {
        &mut self.draft
    }

    pub fn collection(&self) -> &MemoryCollection {
        &self.collection
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditorMode::Closed
    }

    pub fn error(&self) -> Option<&CollectionError> {
        self.error.as_ref()
    }

    /// Whether the "add memory" affordance should be offered.
    pub fn can_add(&self) -> bool {
        !self.collection.is_full()
    }

    /// Committed entries minus the one currently loaded for editing.
    pub fn visible_entries(&self) -> impl Iterator<Item = &MemoryDraft> {
        let editing = match &self.mode {
            EditorMode::Editing(id) => Some(id.clone()),
            _ => None,
        };
        self.collection
            .iter()
            .filter(move |m| editing.as_ref() != Some(&m.id))
    }

    pub fn open_for_create(&mut self) -> Result<(), CollectionError> {
        if self.collection.is_full() {
            let err = CollectionError::CapacityExceeded {
                capacity: self.collection.capacity(),
            };
            self.error = Some(err.clone());
            return Err(err);
        }
        self.draft = MemoryDraft::empty();
        self.mode = EditorMode::Creating;
        Ok(())
    }

    /// Loads a committed entry into the draft slot. Unknown ids are ignored.
    pub fn open_for_edit(&mut self, id: &MemoryId) -> bool {
        let Some(memory) = self.collection.get(id) else {
            return false;
        };
        self.draft = memory.clone();
        self.mode = EditorMode::Editing(id.clone());
        true
    }

    pub fn commit(&mut self) -> Result<CommitOutcome, CollectionError> {
        if !self.is_open() {
            return Err(CollectionError::NoOpenDraft);
        }
        if !self.draft.is_complete() {
            self.error = Some(CollectionError::IncompleteMemory);
            return Err(CollectionError::IncompleteMemory);
        }

        let is_edit = self.collection.contains(&self.draft.id);
        if !is_edit && self.collection.is_full() {
            let err = CollectionError::CapacityExceeded {
                capacity: self.collection.capacity(),
            };
            self.error = Some(err.clone());
            return Err(err);
        }

        let draft = std::mem::replace(&mut self.draft, MemoryDraft::empty());
        let outcome = if is_edit {
            // presence checked above, replace cannot miss
            let _ = self.collection.replace(draft);
            CommitOutcome::Updated
        } else {
            self.collection.push(draft)?;
            CommitOutcome::Created
        };

        self.mode = EditorMode::Closed;
        self.error = None;
        Ok(outcome)
    }

    pub fn cancel(&mut self) {
        self.draft = MemoryDraft::empty();
        self.mode = EditorMode::Closed;
        self.error = None;
    }

    pub fn remove(&mut self, id: &MemoryId) -> Option<MemoryDraft> {
        let removed = self.collection.remove(id)?;
        if self.mode == EditorMode::Editing(id.clone()) {
            self.mode = EditorMode::Creating;
        }
        self.error = None;
        Some(removed)
    }
}
