//! The round engine state machine.
//!
//! ```text
//! Idle --select--> Presenting --correct / all failed--> Resolved --ack--> Idle
//!                  (Announcing -> Accepting)                         \--> Complete
//! ```
//!
//! Every operation validates its precondition first and only then
//! mutates, so a rejected command leaves the board, the round and the
//! score book exactly as they were.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use super::effect::{Announcement, Cue, Effect, Effects};
use super::state::{Outcome, Round, RoundStage};
use crate::board::{Board, CellId};
use crate::core::{Command, GameConfig, GameError, PlayerId, Rejection, TimingConfig};
use crate::scoring::{AttemptKind, ScoreBook, ScoringRules};

/// Coarse engine state, as seen by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnginePhase {
    Idle,
    Announcing(Announcement),
    Accepting,
    ResolvedCorrect,
    ResolvedFailed,
    Complete,
}

#[derive(Clone, Debug)]
pub struct RoundEngine {
    board: Board,
    scores: ScoreBook,
    rules: ScoringRules,
    timing: TimingConfig,
    picker: PlayerId,
    round: Option<Round>,
    complete: bool,
    acknowledged: u32,
    next_epoch: u32,
}

impl RoundEngine {
    /// Start a game on a prepared board. Seat 0 picks first.
    ///
    /// The config must be valid and the score book must seat a player
    /// count within its bounds.
    pub fn new(board: Board, scores: ScoreBook, config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        config.check_player_count(scores.player_count())?;
        let complete = board.is_complete();
        Ok(Self {
            board,
            scores,
            rules: config.scoring.clone(),
            timing: config.timing.clone(),
            picker: PlayerId::new(0),
            round: None,
            complete,
            acknowledged: 0,
            next_epoch: 0,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreBook {
        &self.scores
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Whose turn it is to choose a cell.
    #[must_use]
    pub fn picker(&self) -> PlayerId {
        self.picker
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of resolved cells acknowledged so far.
    #[must_use]
    pub fn acknowledged(&self) -> u32 {
        self.acknowledged
    }

    /// The answering player during a round, otherwise the picker.
    #[must_use]
    pub fn current_actor(&self) -> PlayerId {
        self.round.as_ref().map_or(self.picker, Round::answering)
    }

    #[must_use]
    pub fn phase(&self) -> EnginePhase {
        if self.complete {
            return EnginePhase::Complete;
        }
        match &self.round {
            None => EnginePhase::Idle,
            Some(round) => match (round.stage, round.outcome) {
                (RoundStage::Announcing(a), _) => EnginePhase::Announcing(a),
                (RoundStage::Accepting, _) => EnginePhase::Accepting,
                (RoundStage::Revealed, Outcome::Correct) => EnginePhase::ResolvedCorrect,
                (RoundStage::Revealed, _) => EnginePhase::ResolvedFailed,
            },
        }
    }

    /// Apply any command.
    pub fn apply(&mut self, command: &Command) -> Result<Effects, GameError> {
        match command {
            Command::SelectCell { cell } => self.select_cell(*cell),
            Command::FinishAnnouncement => self.finish_announcement(),
            Command::Tick => self.tick(),
            Command::SubmitAnswer { option } => self.submit_answer(option),
            Command::Pass => self.pass(),
            Command::Acknowledge => self.acknowledge(),
        }
    }

    /// The picker opens a cell.
    pub fn select_cell(&mut self, id: CellId) -> Result<Effects, GameError> {
        if self.complete {
            return Err(Rejection::GameComplete.into());
        }
        if self.round.is_some() {
            return Err(Rejection::RoundInProgress.into());
        }
        let cell = self.board.cell(id).ok_or(Rejection::UnknownCell)?;
        if cell.is_closed() {
            return Err(Rejection::CellClosed.into());
        }

        let mut round = Round::new(
            cell,
            self.picker,
            self.scores.player_count(),
            self.timing.answer_seconds,
        );

        let effects = match round.stage {
            RoundStage::Announcing(Announcement::Bonus) => smallvec![
                Effect::cue(Cue::Bonus),
                Effect::Announce {
                    announcement: Announcement::Bonus,
                    duration_ms: self.timing.bonus_announcement_ms,
                },
            ],
            RoundStage::Announcing(Announcement::Forced) => smallvec![
                Effect::cue(Cue::Forced),
                Effect::Announce {
                    announcement: Announcement::Forced,
                    duration_ms: self.timing.forced_announcement_ms,
                },
            ],
            RoundStage::Accepting | RoundStage::Revealed => {
                round.epoch = bump(&mut self.next_epoch);
                smallvec![Effect::StartCountdown { epoch: round.epoch }]
            }
        };

        self.round = Some(round);
        Ok(effects)
    }

    /// An announcement pause has elapsed: show the question, start the clock.
    pub fn finish_announcement(&mut self) -> Result<Effects, GameError> {
        let round = self.active_round_mut()?;
        if !matches!(round.stage, RoundStage::Announcing(_)) {
            return Err(Rejection::NotAnnouncing.into());
        }

        let epoch = bump(&mut self.next_epoch);
        let round = self.active_round_mut()?;
        round.stage = RoundStage::Accepting;
        round.epoch = epoch;
        Ok(smallvec![Effect::StartCountdown { epoch }])
    }

    /// One second elapsed. At zero the current player times out.
    pub fn tick(&mut self) -> Result<Effects, GameError> {
        self.check_accepting()?;

        let tick_cue_seconds = self.timing.tick_cue_seconds;
        let round = self.active_round_mut()?;
        round.remaining_seconds = round.remaining_seconds.saturating_sub(1);
        let remaining = round.remaining_seconds;

        if remaining == 0 {
            return self.fail_attempt(AttemptKind::Timeout);
        }
        if remaining <= tick_cue_seconds {
            return Ok(smallvec![Effect::cue(Cue::Tick)]);
        }
        Ok(Effects::new())
    }

    /// The answering player picks an option.
    pub fn submit_answer(&mut self, option: &str) -> Result<Effects, GameError> {
        self.check_accepting()?;

        let Self {
            board,
            scores,
            rules,
            round,
            ..
        } = self;
        let round = round.as_mut().ok_or(Rejection::NoActiveRound)?;
        let question = &board.cell(round.cell).ok_or(Rejection::UnknownCell)?.question;

        if !question.has_option(option) {
            return Err(Rejection::UnknownOption.into());
        }
        if round.eliminated.iter().any(|o| o == option) {
            return Err(Rejection::OptionEliminated.into());
        }

        if question.is_correct(option) {
            let player = round.answering();
            let award =
                scores.credit_correct(player, round.effective_value, round.remaining_seconds, rules);
            round.outcome = Outcome::Correct;
            round.stage = RoundStage::Revealed;
            round.award = Some(award);

            return Ok(smallvec![
                Effect::StopCountdown,
                Effect::cue(Cue::Correct),
                Effect::AnswerCorrect { player, award },
            ]);
        }

        round.eliminated.push(option.to_string());
        self.fail_attempt(AttemptKind::WrongAnswer)
    }

    /// Voluntary pass. Rejected for the picker on a forced cell.
    pub fn pass(&mut self) -> Result<Effects, GameError> {
        self.check_accepting()?;
        if self.round.as_ref().is_some_and(Round::is_forced_on_picker) {
            return Err(Rejection::PassForbidden.into());
        }
        self.fail_attempt(AttemptKind::Pass)
    }

    /// Close the resolved cell and hand the pick to the next seat.
    pub fn acknowledge(&mut self) -> Result<Effects, GameError> {
        let round = self.active_round_mut()?;
        if !round.is_resolved() {
            return Err(Rejection::NotResolved.into());
        }
        let cell = round.cell;

        self.round = None;
        self.board.close(cell);
        self.picker = self.picker.next(self.scores.player_count());
        self.acknowledged += 1;

        let mut effects: Effects = smallvec![
            Effect::StopCountdown,
            Effect::TurnAdvanced {
                picker: self.picker
            },
        ];
        if self.board.is_complete() {
            self.complete = true;
            effects.push(Effect::GameComplete);
        }
        Ok(effects)
    }

    /// Commands valid in the current state.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        if self.complete {
            return Vec::new();
        }
        let Some(round) = &self.round else {
            return self
                .board
                .open_cells()
                .map(|cell| Command::SelectCell { cell })
                .collect();
        };

        match round.stage {
            RoundStage::Announcing(_) => vec![Command::FinishAnnouncement],
            RoundStage::Revealed => vec![Command::Acknowledge],
            RoundStage::Accepting => {
                let mut commands = vec![Command::Tick];
                if round.pass_allowed() {
                    commands.push(Command::Pass);
                }
                if let Some(cell) = self.board.cell(round.cell) {
                    commands.extend(
                        cell.question
                            .options
                            .iter()
                            .filter(|o| !round.eliminated.contains(*o))
                            .map(|o| Command::submit(o.clone())),
                    );
                }
                commands
            }
        }
    }

    // === Internals ===

    fn active_round_mut(&mut self) -> Result<&mut Round, GameError> {
        if self.complete {
            return Err(Rejection::GameComplete.into());
        }
        self.round
            .as_mut()
            .ok_or_else(|| Rejection::NoActiveRound.into())
    }

    fn check_accepting(&self) -> Result<(), GameError> {
        if self.complete {
            return Err(Rejection::GameComplete.into());
        }
        let round = self.round.as_ref().ok_or(Rejection::NoActiveRound)?;
        match round.stage {
            RoundStage::Accepting => Ok(()),
            RoundStage::Announcing(_) => Err(Rejection::AnnouncementActive.into()),
            RoundStage::Revealed => Err(Rejection::RoundResolved.into()),
        }
    }

    /// Charge the answering player, then rotate or fail the round.
    fn fail_attempt(&mut self, kind: AttemptKind) -> Result<Effects, GameError> {
        let Self {
            scores,
            rules,
            timing,
            round,
            next_epoch,
            ..
        } = self;
        let round = round.as_mut().ok_or(Rejection::NoActiveRound)?;

        let player = round.answering();
        let penalty = rules.penalty(round.effective_value, kind, round.is_forced_on_picker());
        scores.charge_failure(player, penalty);
        round.attempted.push(player);

        let failed = Effect::AttemptFailed {
            player,
            kind,
            penalty,
        };

        if round.is_exhausted() {
            round.outcome = Outcome::Failed;
            round.stage = RoundStage::Revealed;
            return Ok(smallvec![
                Effect::StopCountdown,
                Effect::cue(Cue::Wrong),
                failed,
                Effect::RoundFailed,
            ]);
        }

        round.current = (round.current + 1) % round.answering_order.len();
        round.remaining_seconds = timing.answer_seconds;
        round.epoch = bump(next_epoch);
        Ok(smallvec![
            Effect::cue(Cue::Wrong),
            failed,
            Effect::StartCountdown { epoch: round.epoch },
        ])
    }
}

fn bump(counter: &mut u32) -> u32 {
    *counter = counter.wrapping_add(1);
    *counter
}
