//! Scoring and penalty arithmetic.
//!
//! All arithmetic is integer. Percentages are applied as
//! `x * percent / 100` on non-negative values, which floors exactly.

use serde::{Deserialize, Serialize};

/// How an attempt failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttemptKind {
    /// Submitted an option that was not the correct answer.
    WrongAnswer,
    /// The countdown ran out.
    Timeout,
    /// Declined to answer.
    Pass,
}

/// Breakdown of a correct answer's score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub effective_value: i64,
    pub is_speed_bonus: bool,
    pub speed_bonus_points: i64,
    pub is_streak_bonus: bool,
    pub earned: i64,
}

/// Tunable scoring parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Speed bonus applies while at least this many seconds remain.
    pub speed_bonus_min_remaining: u32,

    /// Speed bonus as a percentage of the effective value.
    pub speed_bonus_percent: u32,

    /// Streak length (after the current answer) that activates the multiplier.
    pub streak_threshold: u32,

    /// Streak multiplier as a percentage (150 = x1.5).
    pub streak_multiplier_percent: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            speed_bonus_min_remaining: 30,
            speed_bonus_percent: 20,
            streak_threshold: 3,
            streak_multiplier_percent: 150,
        }
    }
}

impl ScoringRules {
    /// Score a correct answer.
    ///
    /// `streak_after` is the answering player's streak including this answer.
    #[must_use]
    pub fn award(&self, effective_value: i64, remaining_seconds: u32, streak_after: u32) -> Award {
        let is_speed_bonus = remaining_seconds >= self.speed_bonus_min_remaining;
        let speed_bonus_points = if is_speed_bonus {
            percent_of(effective_value, self.speed_bonus_percent)
        } else {
            0
        };

        let base = effective_value + speed_bonus_points;
        let is_streak_bonus = streak_after >= self.streak_threshold;
        let earned = if is_streak_bonus {
            percent_of(base, self.streak_multiplier_percent)
        } else {
            base
        };

        Award {
            effective_value,
            is_speed_bonus,
            speed_bonus_points,
            is_streak_bonus,
            earned,
        }
    }

    /// Points charged for a failed attempt.
    ///
    /// Wrong answers and timeouts always cost half the effective value. A
    /// pass is free unless it is the picker declining a forced cell.
    #[must_use]
    pub fn penalty(&self, effective_value: i64, kind: AttemptKind, forced_picker: bool) -> i64 {
        match kind {
            AttemptKind::WrongAnswer | AttemptKind::Timeout => effective_value / 2,
            AttemptKind::Pass if forced_picker => effective_value / 2,
            AttemptKind::Pass => 0,
        }
    }
}

fn percent_of(value: i64, percent: u32) -> i64 {
    value * i64::from(percent) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_award() {
        let award = ScoringRules::default().award(300, 12, 1);
        assert!(!award.is_speed_bonus);
        assert!(!award.is_streak_bonus);
        assert_eq!(award.speed_bonus_points, 0);
        assert_eq!(award.earned, 300);
    }

    #[test]
    fn test_speed_bonus_boundary() {
        let rules = ScoringRules::default();
        assert_eq!(rules.award(500, 30, 1).speed_bonus_points, 100);
        assert_eq!(rules.award(500, 29, 1).speed_bonus_points, 0);
    }

    #[test]
    fn test_streak_and_speed_combined() {
        let award = ScoringRules::default().award(200, 35, 3);
        assert!(award.is_speed_bonus);
        assert!(award.is_streak_bonus);
        assert_eq!(award.speed_bonus_points, 40);
        assert_eq!(award.earned, 360);
    }

    #[test]
    fn test_streak_floors() {
        // (100 + 20) * 1.5 = 180; 300 * 1.5 = 450
        let rules = ScoringRules::default();
        assert_eq!(rules.award(100, 40, 4).earned, 180);
        assert_eq!(rules.award(300, 0, 3).earned, 450);
    }

    #[test]
    fn test_penalties() {
        let rules = ScoringRules::default();
        assert_eq!(rules.penalty(600, AttemptKind::WrongAnswer, false), 300);
        assert_eq!(rules.penalty(400, AttemptKind::Timeout, true), 200);
        assert_eq!(rules.penalty(400, AttemptKind::Timeout, false), 200);
        assert_eq!(rules.penalty(400, AttemptKind::Pass, false), 0);
        assert_eq!(rules.penalty(400, AttemptKind::Pass, true), 200);
    }
}
