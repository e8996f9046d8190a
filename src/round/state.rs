//! Round state: one in-progress question from selection to acknowledgement.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect::Announcement;
use crate::board::{Cell, CellId, CellKind};
use crate::core::PlayerId;
use crate::scoring::Award;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Open,
    Correct,
    Failed,
}

/// Sub-phase of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundStage {
    /// Special-cell pause: no input, no countdown.
    Announcing(Announcement),
    /// Question shown, countdown running, answers accepted.
    Accepting,
    /// Answer revealed, waiting for acknowledgement.
    Revealed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub(crate) cell: CellId,
    pub(crate) kind: CellKind,
    pub(crate) effective_value: i64,
    /// Starts at the picker and cycles through every seat.
    pub(crate) answering_order: SmallVec<[PlayerId; 6]>,
    pub(crate) current: usize,
    pub(crate) attempted: SmallVec<[PlayerId; 6]>,
    pub(crate) eliminated: SmallVec<[String; 4]>,
    pub(crate) remaining_seconds: u32,
    pub(crate) outcome: Outcome,
    pub(crate) stage: RoundStage,
    pub(crate) award: Option<Award>,
    pub(crate) epoch: u32,
}

impl Round {
    pub(crate) fn new(cell: &Cell, picker: PlayerId, player_count: usize, answer_seconds: u32) -> Self {
        let stage = match cell.kind {
            CellKind::Bonus => RoundStage::Announcing(Announcement::Bonus),
            CellKind::Forced => RoundStage::Announcing(Announcement::Forced),
            CellKind::Normal => RoundStage::Accepting,
        };

        Self {
            cell: cell.id,
            kind: cell.kind,
            effective_value: cell.effective_value(),
            answering_order: PlayerId::cycle_from(picker, player_count).collect(),
            current: 0,
            attempted: SmallVec::new(),
            eliminated: SmallVec::new(),
            remaining_seconds: answer_seconds,
            outcome: Outcome::Open,
            stage,
            award: None,
            epoch: 0,
        }
    }

    #[must_use]
    pub fn cell(&self) -> CellId {
        self.cell
    }

    #[must_use]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    #[must_use]
    pub fn effective_value(&self) -> i64 {
        self.effective_value
    }

    /// The player who picked the cell.
    #[must_use]
    pub fn picker(&self) -> PlayerId {
        self.answering_order[0]
    }

    /// The player currently holding the question.
    #[must_use]
    pub fn answering(&self) -> PlayerId {
        self.answering_order[self.current]
    }

    #[must_use]
    pub fn answering_order(&self) -> &[PlayerId] {
        &self.answering_order
    }

    #[must_use]
    pub fn attempted(&self) -> &[PlayerId] {
        &self.attempted
    }

    #[must_use]
    pub fn eliminated_options(&self) -> &[String] {
        &self.eliminated
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn stage(&self) -> RoundStage {
        self.stage
    }

    /// Score breakdown once answered correctly.
    #[must_use]
    pub fn award(&self) -> Option<Award> {
        self.award
    }

    /// Epoch of the countdown currently driving this round.
    #[must_use]
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    #[must_use]
    pub fn is_accepting(&self) -> bool {
        self.stage == RoundStage::Accepting
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.stage == RoundStage::Revealed
    }

    /// True while the picker holds a forced cell.
    #[must_use]
    pub fn is_forced_on_picker(&self) -> bool {
        self.kind == CellKind::Forced && self.current == 0
    }

    /// Whether a voluntary pass is currently allowed.
    #[must_use]
    pub fn pass_allowed(&self) -> bool {
        self.is_accepting() && !self.is_forced_on_picker()
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.attempted.len() >= self.answering_order.len()
    }
}
