//! Bounded generate → validate → repair loop and its fallback template.

mod fallback;
mod repairer;
mod state;

pub use fallback::fallback_template;
pub use repairer::{RepairOutcome, Repairer};
pub use state::RepairState;
