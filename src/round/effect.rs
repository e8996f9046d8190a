//! Effects: what the outside world must do after a transition.
//!
//! The engine never touches timers or audio itself. Each transition
//! returns the effects it implies and the driver carries them out.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::scoring::{AttemptKind, Award};

/// Pause shown before a special cell's question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Announcement {
    Bonus,
    Forced,
}

/// Audio cue to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cue {
    Correct,
    Wrong,
    Bonus,
    Forced,
    /// Countdown is nearly out.
    Tick,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    /// Show an announcement; deliver `FinishAnnouncement` after `duration_ms`.
    Announce {
        announcement: Announcement,
        duration_ms: u64,
    },
    /// Start (or restart) the one-second countdown. Ticks from any other
    /// epoch must be dropped.
    StartCountdown { epoch: u32 },
    /// Cancel the countdown.
    StopCountdown,
    Cue { cue: Cue },
    AttemptFailed {
        player: PlayerId,
        kind: AttemptKind,
        penalty: i64,
    },
    AnswerCorrect { player: PlayerId, award: Award },
    /// Every player attempted; the answer is revealed unscored.
    RoundFailed,
    TurnAdvanced { picker: PlayerId },
    GameComplete,
}

impl Effect {
    #[must_use]
    pub const fn cue(cue: Cue) -> Self {
        Effect::Cue { cue }
    }
}

/// Effects of one transition, in the order they must be carried out.
pub type Effects = SmallVec<[Effect; 4]>;
