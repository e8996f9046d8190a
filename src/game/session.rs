//! Game session: setup, command dispatch, history and logging.

use im::Vector;
use serde_json::json;

use super::snapshot::{GamePhase, Snapshot};
use crate::board::{BoardBuilder, SpecialCellAssigner};
use crate::content::{CategoryId, ContentPool, PointValue};
use crate::core::{Command, CommandRecord, GameConfig, GameError, GameRng, Rejection};
use crate::logging::{self, Level};
use crate::round::{Effect, Effects, RoundEngine};
use crate::scoring::{ScoreBook, Standing};

/// Result of one applied command.
#[derive(Clone, Debug)]
pub struct Transition {
    /// Effects for the driver to carry out, in order.
    pub effects: Effects,
    /// State after the command.
    pub snapshot: Snapshot,
}

/// One game from setup to final standings.
///
/// Wraps a [`RoundEngine`] once a game is configured and records every
/// applied command. Rejected commands leave the session untouched.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    seed: u64,
    engine: Option<RoundEngine>,
    history: Vector<CommandRecord>,
    next_sequence: u32,
}

impl GameSession {
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            engine: None,
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed used by the next `configure_game`.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        match &self.engine {
            None => GamePhase::Setup,
            Some(engine) if engine.is_complete() => GamePhase::Complete,
            Some(_) => GamePhase::Playing,
        }
    }

    #[must_use]
    pub fn engine(&self) -> Option<&RoundEngine> {
        self.engine.as_ref()
    }

    /// Every applied command, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Start a game.
    ///
    /// Names are trimmed; blank names become `Player N`. The board and
    /// its special cells are drawn from independent streams of the
    /// session seed.
    pub fn configure_game<S: AsRef<str>>(
        &mut self,
        names: &[S],
        pool: &ContentPool,
    ) -> Result<Snapshot, GameError> {
        let result = self.try_configure(names, pool);
        match &result {
            Ok(_) => {
                let players: Vec<&str> = self
                    .engine
                    .iter()
                    .flat_map(|e| e.scores().records())
                    .map(|r| r.display_name.as_str())
                    .collect();
                logging::emit(
                    Level::Info,
                    "game_configured",
                    Some(1),
                    json!({
                        "seed": self.seed,
                        "players": players,
                        "categories": self.config.board_size,
                    }),
                );
            }
            Err(err) => logging::emit(
                Level::Warn,
                "command_rejected",
                None,
                json!({ "command": "configureGame", "reason": err.to_string() }),
            ),
        }
        result
    }

    fn try_configure<S: AsRef<str>>(
        &mut self,
        names: &[S],
        pool: &ContentPool,
    ) -> Result<Snapshot, GameError> {
        if self.engine.is_some() {
            return Err(Rejection::GameAlreadyStarted.into());
        }
        self.config.validate()?;
        self.config.check_player_count(names.len())?;

        let root = GameRng::new(self.seed);
        let mut board = BoardBuilder::new(self.config.board_size)
            .build(pool, &mut root.for_context("board"))?;
        SpecialCellAssigner::assign(&mut board, &mut root.for_context("special-cells"))?;

        let scores = ScoreBook::new(display_names(names));
        let engine = RoundEngine::new(board, scores, &self.config)?;
        let snapshot = Snapshot::capture(&engine, self.config.scoring.streak_threshold);

        self.engine = Some(engine);
        self.history = Vector::new();
        self.next_sequence = 0;
        Ok(snapshot)
    }

    /// Back to setup from any phase.
    pub fn reset(&mut self) -> Snapshot {
        let previous = self.phase();
        self.engine = None;
        self.history = Vector::new();
        self.next_sequence = 0;
        logging::emit(
            Level::Info,
            "game_reset",
            None,
            json!({ "from": previous }),
        );
        Snapshot::setup()
    }

    /// Current state for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        match &self.engine {
            None => Snapshot::setup(),
            Some(engine) => Snapshot::capture(engine, self.config.scoring.streak_threshold),
        }
    }

    /// Final ranking. Available at any point after setup.
    pub fn standings(&self) -> Result<Vec<Standing>, GameError> {
        let engine = self.engine.as_ref().ok_or(Rejection::GameNotStarted)?;
        Ok(engine.scores().standings())
    }

    /// Commands valid right now; empty outside play.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        self.engine
            .as_ref()
            .map(RoundEngine::legal_commands)
            .unwrap_or_default()
    }

    // === Player-facing commands ===

    /// Pick the cell worth `value` in the column of `category`.
    pub fn select_cell(
        &mut self,
        category: &CategoryId,
        value: PointValue,
    ) -> Result<Transition, GameError> {
        let located = match self.engine.as_ref() {
            None => Err(GameError::from(Rejection::GameNotStarted)),
            Some(engine) => engine
                .board()
                .locate(category, value)
                .ok_or_else(|| Rejection::UnknownCell.into()),
        };
        match located {
            Ok(cell) => self.apply(Command::SelectCell { cell }),
            Err(err) => {
                self.log_rejection(
                    &json!({ "type": "selectCell", "category": category, "value": value }),
                    &err,
                );
                Err(err)
            }
        }
    }

    pub fn finish_announcement(&mut self) -> Result<Transition, GameError> {
        self.apply(Command::FinishAnnouncement)
    }

    pub fn tick(&mut self) -> Result<Transition, GameError> {
        self.apply(Command::Tick)
    }

    pub fn submit_answer(&mut self, option: impl Into<String>) -> Result<Transition, GameError> {
        self.apply(Command::submit(option))
    }

    pub fn pass(&mut self) -> Result<Transition, GameError> {
        self.apply(Command::Pass)
    }

    pub fn acknowledge(&mut self) -> Result<Transition, GameError> {
        self.apply(Command::Acknowledge)
    }

    /// Apply any command, recording it on success.
    pub fn apply(&mut self, command: Command) -> Result<Transition, GameError> {
        let Some(engine) = self.engine.as_mut() else {
            let err = GameError::from(Rejection::GameNotStarted);
            self.log_rejection(&json!(command), &err);
            return Err(err);
        };

        let actor = engine.current_actor();
        let turn = engine.acknowledged() + 1;

        let effects = match engine.apply(&command) {
            Ok(effects) => effects,
            Err(err) => {
                self.log_rejection(&json!(command), &err);
                return Err(err);
            }
        };

        let sequence = self.next_sequence;
        self.next_sequence = if matches!(command, Command::Acknowledge) {
            0
        } else {
            sequence + 1
        };

        // Ticks are frequent; keep them out of the info stream.
        let level = if matches!(command, Command::Tick) {
            Level::Debug
        } else {
            Level::Info
        };
        logging::emit(
            level,
            "command_applied",
            Some(turn),
            json!({
                "actor": actor,
                "sequence": sequence,
                "command": command,
                "effects": effects.as_slice(),
            }),
        );
        self.history
            .push_back(CommandRecord::new(actor, command, turn, sequence));

        if effects.contains(&Effect::GameComplete) {
            logging::emit(
                Level::Info,
                "game_complete",
                Some(turn),
                json!({ "standings": engine.scores().standings() }),
            );
        }

        Ok(Transition {
            effects,
            snapshot: Snapshot::capture(engine, self.config.scoring.streak_threshold),
        })
    }

    fn log_rejection(&self, command: &serde_json::Value, err: &GameError) {
        let turn = self.engine.as_ref().map(|e| e.acknowledged() + 1);
        logging::emit(
            Level::Warn,
            "command_rejected",
            turn,
            json!({ "command": command, "reason": err.to_string() }),
        );
    }
}

/// Trimmed names; blank ones become `Player N` (1-based seat).
fn display_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(seat, name)| {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                format!("Player {}", seat + 1)
            } else {
                trimmed.to_string()
            }
        })
        .collect()
}
