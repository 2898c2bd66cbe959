//! ID type wrappers for type safety.

mod id_macro;
pub mod journey_id;
pub mod memory_id;

pub use journey_id::JourneyId;
pub use memory_id::MemoryId;
