//! The game board.
//!
//! - `BoardBuilder`: picks categories and one question per cell
//! - `SpecialCellAssigner`: marks one Bonus and one Forced cell per column
//! - `Board`: columns of cells, each cell closing once played

mod builder;
mod cell;
mod layout;
mod special;

pub use builder::BoardBuilder;
pub use cell::{Cell, CellId, CellKind};
pub use layout::{Board, BoardColumn};
pub use special::SpecialCellAssigner;
