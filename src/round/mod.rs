//! The round engine: cell selection, the multi-player answer cycle,
//! resolution and turn advancement.
//!
//! The engine is a pure state machine. Commands go in one at a time,
//! `Effects` come out; timers and audio live outside.

mod effect;
mod engine;
mod state;

pub use effect::{Announcement, Cue, Effect, Effects};
pub use engine::{EnginePhase, RoundEngine};
pub use state::{Outcome, Round, RoundStage};
