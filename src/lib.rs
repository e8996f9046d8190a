//! # trivia-board
//!
//! A category-board trivia game engine for 2-6 players.
//!
//! Players take turns picking a cell (category × point value) from the
//! board. The picker answers a four-option question first; wrong answers,
//! timeouts and passes hand the question to the next player until someone
//! is right or everyone has tried. One Bonus (double value) and one Forced
//! (no pass for the picker) cell hide in every column.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: `RoundEngine` is a state machine. Commands go in,
//!    `Effects` come out; timers and audio are carried out by the driver.
//!
//! 2. **Fail fast on content**: a board is built from a fully valid pool
//!    or not at all. Rejected commands never mutate anything.
//!
//! 3. **Deterministic setup**: one `u64` seed reproduces the board and its
//!    special cells.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, errors, commands
//! - `content`: categories, questions, point values, content pool
//! - `board`: board construction and special-cell assignment
//! - `scoring`: award/penalty rules and the score book
//! - `round`: the round engine and its effects
//! - `game`: game session and snapshots
//! - `clock`: tokio countdown and announcement timers
//! - `logging`: structured JSON log lines

pub mod board;
pub mod clock;
pub mod content;
pub mod core;
pub mod game;
pub mod logging;
pub mod round;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandRecord, GameConfig, GameError, GameRng, PlayerId, PlayerMap, Rejection,
    TimingConfig,
};

pub use crate::content::{Category, CategoryId, ContentPool, PointValue, Question};

pub use crate::board::{Board, BoardBuilder, BoardColumn, Cell, CellId, CellKind, SpecialCellAssigner};

pub use crate::scoring::{AttemptKind, Award, PlayerRecord, ScoreBook, ScoringRules, Standing};

pub use crate::round::{
    Announcement, Cue, Effect, Effects, EnginePhase, Outcome, Round, RoundEngine, RoundStage,
};

pub use crate::game::{GamePhase, GameSession, Snapshot, Transition};

pub use crate::clock::{Clock, ClockEvent, Countdown};
