//! Error types.
//!
//! Content errors (`InsufficientContent`, `IncompleteCategory`, ...) are
//! reported once at setup and block the game from starting. `IllegalState`
//! marks a command issued in a state that forbids it; the command is
//! rejected before anything is mutated.

use thiserror::Error;

use crate::content::{CategoryId, PointValue};

/// Why a command was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no game has been configured")]
    GameNotStarted,
    #[error("a game is already in progress")]
    GameAlreadyStarted,
    #[error("the game is complete")]
    GameComplete,
    #[error("a round is already in progress")]
    RoundInProgress,
    #[error("no round is in progress")]
    NoActiveRound,
    #[error("no such cell on the board")]
    UnknownCell,
    #[error("cell has already been played")]
    CellClosed,
    #[error("an announcement is still showing")]
    AnnouncementActive,
    #[error("no announcement is showing")]
    NotAnnouncing,
    #[error("the round has not been resolved")]
    NotResolved,
    #[error("the round has already been resolved")]
    RoundResolved,
    #[error("the picker may not pass on a forced cell")]
    PassForbidden,
    #[error("answer is not one of the options")]
    UnknownOption,
    #[error("option was already eliminated")]
    OptionEliminated,
}

/// All errors surfaced by the engine.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("need {required} usable categories, content pool has {available}")]
    InsufficientContent { available: usize, required: usize },

    #[error("category `{category}` has no question worth {value}")]
    IncompleteCategory { category: CategoryId, value: PointValue },

    #[error("question `{question}` in category `{category}` is malformed: {reason}")]
    MalformedQuestion {
        category: CategoryId,
        question: String,
        reason: &'static str,
    },

    #[error("category `{0}` appears more than once")]
    DuplicateCategory(CategoryId),

    #[error("{0} is not a board value (expected 100, 200, 300, 400 or 500)")]
    InvalidPointValue(u32),

    #[error("could not parse content: {0}")]
    ContentParse(#[from] serde_json::Error),

    #[error("{count} players given, need between {min} and {max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("illegal state: {0}")]
    IllegalState(#[from] Rejection),
}

impl GameError {
    /// The rejection behind an `IllegalState` error, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            GameError::IllegalState(rejection) => Some(*rejection),
            _ => None,
        }
    }

    /// Content errors block game start and are never auto-corrected.
    #[must_use]
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            GameError::InsufficientContent { .. }
                | GameError::IncompleteCategory { .. }
                | GameError::MalformedQuestion { .. }
                | GameError::DuplicateCategory(_)
                | GameError::InvalidPointValue(_)
                | GameError::ContentParse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_conversion() {
        let err: GameError = Rejection::CellClosed.into();
        assert_eq!(err.rejection(), Some(Rejection::CellClosed));
        assert!(!err.is_content_error());
        assert_eq!(err.to_string(), "illegal state: cell has already been played");
    }

    #[test]
    fn test_content_error_messages() {
        let err = GameError::IncompleteCategory {
            category: CategoryId::new("science"),
            value: PointValue::P300,
        };
        assert!(err.is_content_error());
        assert_eq!(err.to_string(), "category `science` has no question worth 300");

        let err = GameError::InsufficientContent { available: 4, required: 6 };
        assert_eq!(err.to_string(), "need 6 usable categories, content pool has 4");
    }
}
