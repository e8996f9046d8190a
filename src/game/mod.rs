//! Game session and the snapshots it publishes.
//!
//! A `GameSession` owns one game from setup to final standings. Every
//! command returns a [`Transition`]: the effects to carry out and a fresh
//! [`Snapshot`] to render.

mod session;
mod snapshot;

pub use session::{GameSession, Transition};
pub use snapshot::{CellView, ColumnView, GamePhase, PlayerView, RoundView, Snapshot};
