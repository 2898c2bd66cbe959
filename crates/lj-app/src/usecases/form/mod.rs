//! Form session facade.
//!
//! Couples the wizard state with the submission sequencer.

mod session;

pub use session::{FormError, FormSession};
