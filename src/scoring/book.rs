//! Per-player score ledger.
//!
//! Mutated only by the round engine's resolution steps. Each mutation
//! updates score and streak together, so no attempt is ever half-applied.

use serde::{Deserialize, Serialize};

use super::rules::{Award, ScoringRules};
use crate::core::{PlayerId, PlayerMap};

/// One player's ledger entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub display_name: String,
    /// May go negative.
    pub score: i64,
    /// Consecutive correct answers.
    pub streak: u32,
}

/// A row of the final standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    /// 1-based position; tied scores are numbered in seat order.
    pub rank: usize,
    pub player: PlayerId,
    pub name: String,
    pub score: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBook {
    records: PlayerMap<PlayerRecord>,
}

impl ScoreBook {
    /// Create a ledger with one zeroed record per name, in seat order.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let records = names
            .into_iter()
            .enumerate()
            .map(|(seat, name)| PlayerRecord {
                id: PlayerId::new(seat as u8),
                display_name: name.into(),
                score: 0,
                streak: 0,
            })
            .collect();

        Self {
            records: PlayerMap::from_vec(records),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.records.player_count()
    }

    #[must_use]
    pub fn record(&self, player: PlayerId) -> &PlayerRecord {
        &self.records[player]
    }

    pub fn records(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.records.values()
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> i64 {
        self.records[player].score
    }

    #[must_use]
    pub fn streak(&self, player: PlayerId) -> u32 {
        self.records[player].streak
    }

    /// Credit a correct answer: bump the streak, then score with it.
    pub(crate) fn credit_correct(
        &mut self,
        player: PlayerId,
        effective_value: i64,
        remaining_seconds: u32,
        rules: &ScoringRules,
    ) -> Award {
        let record = &mut self.records[player];
        let streak_after = record.streak + 1;
        let award = rules.award(effective_value, remaining_seconds, streak_after);

        record.streak = streak_after;
        record.score += award.earned;
        award
    }

    /// Charge a failed attempt. The streak resets even when the penalty is 0.
    pub(crate) fn charge_failure(&mut self, player: PlayerId, penalty: i64) {
        let record = &mut self.records[player];
        record.streak = 0;
        record.score -= penalty;
    }

    /// Ranked by score descending, ties broken by seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        let mut ordered: Vec<&PlayerRecord> = self.records.values().collect();
        // Stable sort keeps seat order among equal scores.
        ordered.sort_by(|a, b| b.score.cmp(&a.score));

        ordered
            .into_iter()
            .enumerate()
            .map(|(position, record)| Standing {
                rank: position + 1,
                player: record.id,
                name: record.display_name.clone(),
                score: record.score,
            })
            .collect()
    }
}
