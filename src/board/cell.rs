//! Board cells.

use serde::{Deserialize, Serialize};

use crate::content::{PointValue, Question};

/// What kind of cell this is. Each column has exactly one `Bonus` and one
/// `Forced` cell once special cells are assigned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    #[default]
    Normal,
    /// Effective value doubled.
    Bonus,
    /// The picker may not voluntarily pass.
    Forced,
}

/// Position of a cell: board column plus point value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId {
    pub column: usize,
    pub value: PointValue,
}

impl CellId {
    #[must_use]
    pub const fn new(column: usize, value: PointValue) -> Self {
        Self { column, value }
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column {} / {}", self.column + 1, self.value)
    }
}

/// A board slot bound to one question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub question: Question,
    pub kind: CellKind,
    pub(crate) closed: bool,
}

impl Cell {
    pub(crate) fn new(id: CellId, question: Question) -> Self {
        Self {
            id,
            question,
            kind: CellKind::Normal,
            closed: false,
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Points at stake: doubled on a bonus cell.
    #[must_use]
    pub fn effective_value(&self) -> i64 {
        let face = i64::from(self.id.value.points());
        match self.kind {
            CellKind::Bonus => face * 2,
            CellKind::Normal | CellKind::Forced => face,
        }
    }
}
