//! State snapshots published to the presentation layer.

use serde::Serialize;

use crate::board::CellKind;
use crate::content::{CategoryId, PointValue};
use crate::core::PlayerId;
use crate::round::{EnginePhase, Outcome, RoundEngine, RoundStage};
use crate::scoring::{Award, Standing};

/// Overall game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    Setup,
    Playing,
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
    pub streak: u32,
    /// Streak is long enough for the multiplier.
    pub on_streak: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub value: PointValue,
    pub kind: CellKind,
    pub closed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub category_id: CategoryId,
    pub title: String,
    pub cells: Vec<CellView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub category_id: CategoryId,
    pub category_title: String,
    pub value: PointValue,
    pub kind: CellKind,
    pub effective_value: i64,
    pub prompt: String,
    pub options: Vec<String>,
    pub picker: PlayerId,
    pub answering: PlayerId,
    pub attempted: Vec<PlayerId>,
    pub remaining_seconds: u32,
    pub eliminated_options: Vec<String>,
    pub outcome: Outcome,
    pub stage: RoundStage,
    pub pass_allowed: bool,
    /// Only present once the round is resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award: Option<Award>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub phase: GamePhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_phase: Option<EnginePhase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picker: Option<PlayerId>,
    /// 1-based; one turn per played cell.
    pub turn: u32,
    pub players: Vec<PlayerView>,
    pub board: Vec<ColumnView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standings: Option<Vec<Standing>>,
}

impl Snapshot {
    /// Snapshot before any game is configured.
    #[must_use]
    pub fn setup() -> Self {
        Self {
            phase: GamePhase::Setup,
            engine_phase: None,
            picker: None,
            turn: 0,
            players: Vec::new(),
            board: Vec::new(),
            round: None,
            standings: None,
        }
    }

    /// Capture a running or finished game.
    #[must_use]
    pub fn capture(engine: &RoundEngine, streak_threshold: u32) -> Self {
        let complete = engine.is_complete();

        let players = engine
            .scores()
            .records()
            .map(|r| PlayerView {
                id: r.id,
                name: r.display_name.clone(),
                score: r.score,
                streak: r.streak,
                on_streak: r.streak >= streak_threshold,
            })
            .collect();

        let board = engine
            .board()
            .columns()
            .iter()
            .map(|column| ColumnView {
                category_id: column.category_id.clone(),
                title: column.title.clone(),
                cells: column
                    .cells()
                    .iter()
                    .map(|c| CellView {
                        value: c.id.value,
                        kind: c.kind,
                        closed: c.is_closed(),
                    })
                    .collect(),
            })
            .collect();

        let round = engine.round().and_then(|round| {
            let board = engine.board();
            let cell = board.cell(round.cell())?;
            let column = &board.columns()[round.cell().column];
            let resolved = round.is_resolved();

            Some(RoundView {
                category_id: column.category_id.clone(),
                category_title: column.title.clone(),
                value: cell.id.value,
                kind: round.kind(),
                effective_value: round.effective_value(),
                prompt: cell.question.prompt.clone(),
                options: cell.question.options.clone(),
                picker: round.picker(),
                answering: round.answering(),
                attempted: round.attempted().to_vec(),
                remaining_seconds: round.remaining_seconds(),
                eliminated_options: round.eliminated_options().to_vec(),
                outcome: round.outcome(),
                stage: round.stage(),
                pass_allowed: round.pass_allowed(),
                correct_answer: resolved.then(|| cell.question.correct_answer.clone()),
                award: round.award(),
            })
        });

        Self {
            phase: if complete {
                GamePhase::Complete
            } else {
                GamePhase::Playing
            },
            engine_phase: Some(engine.phase()),
            picker: Some(engine.picker()),
            turn: engine.acknowledged() + 1,
            players,
            board,
            round,
            standings: complete.then(|| engine.scores().standings()),
        }
    }
}
