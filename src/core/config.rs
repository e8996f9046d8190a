//! Game configuration.
//!
//! Defaults reproduce the standard game: a 6-column board, 2-6 players,
//! 40 seconds per attempt. Every field is optional when deserializing, so a
//! config file only needs to name what it changes.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::scoring::ScoringRules;

/// Countdown and announcement timing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Seconds each answering player gets.
    pub answer_seconds: u32,

    /// Pause before a bonus cell's question is shown.
    pub bonus_announcement_ms: u64,

    /// Pause before a forced cell's question is shown.
    pub forced_announcement_ms: u64,

    /// A tick cue sounds each second once this few seconds remain.
    pub tick_cue_seconds: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            answer_seconds: 40,
            bonus_announcement_ms: 2_500,
            forced_announcement_ms: 4_000,
            tick_cue_seconds: 10,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Categories on the board.
    pub board_size: usize,

    pub min_players: usize,
    pub max_players: usize,

    pub timing: TimingConfig,
    pub scoring: ScoringRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 6,
            min_players: 2,
            max_players: 6,
            timing: TimingConfig::default(),
            scoring: ScoringRules::default(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    #[must_use]
    pub fn with_answer_seconds(mut self, seconds: u32) -> Self {
        self.timing.answer_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: &str| Err(GameError::InvalidConfig(msg.to_string()));

        if self.board_size == 0 {
            return invalid("board_size must be at least 1");
        }
        if self.min_players < 2 {
            return invalid("min_players must be at least 2");
        }
        if self.min_players > self.max_players {
            return invalid("min_players exceeds max_players");
        }
        if self.max_players > 255 {
            return invalid("at most 255 players supported");
        }
        if self.timing.answer_seconds == 0 {
            return invalid("answer_seconds must be at least 1");
        }
        if self.scoring.speed_bonus_min_remaining > self.timing.answer_seconds {
            return invalid("speed bonus threshold exceeds answer_seconds");
        }
        Ok(())
    }

    /// Check a player count against the configured bounds.
    pub fn check_player_count(&self, count: usize) -> Result<(), GameError> {
        if (self.min_players..=self.max_players).contains(&count) {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerCount {
                count,
                min: self.min_players,
                max: self.max_players,
            })
        }
    }
}
