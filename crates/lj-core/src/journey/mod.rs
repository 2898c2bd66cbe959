//! Journey domain module.
//!
//! Drafts edited by the wizard, the bounded memory collection and the
//! share result produced once submission succeeds.

mod collection;
mod couple;
mod link;
mod memory;
mod result;

pub use collection::MemoryCollection;
pub use couple::CoupleDraft;
pub use link::{ResultRoute, ShareLink, QR_CODE_FILE_NAME};
pub use memory::{MemoryDraft, PhotoRef, MEMORY_DATE_FORMAT};
pub use result::{SubmissionResult, QR_CODE_ERROR_MESSAGE};
