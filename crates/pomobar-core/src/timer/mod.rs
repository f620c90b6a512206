mod engine;
mod phase;

pub use engine::{format_mmss, PhaseTimer, READY_LABEL};
pub use phase::Phase;
