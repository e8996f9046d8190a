//! Core types: seats, randomness, configuration, errors, commands.

pub mod command;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use command::{Command, CommandRecord};
pub use config::{GameConfig, TimingConfig};
pub use error::{GameError, Rejection};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
