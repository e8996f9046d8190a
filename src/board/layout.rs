//! The board: an ordered set of category columns with five cells each.
//!
//! Built once per game. After construction only the special-cell kinds
//! (assigned once, before play) and each cell's `closed` flag change.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellId, CellKind};
use crate::content::{CategoryId, PointValue, Question};
use crate::core::GameError;

/// One category column. `cells[i]` holds `PointValue::ALL[i]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    pub category_id: CategoryId,
    pub title: String,
    cells: Vec<Cell>,
}

impl BoardColumn {
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, value: PointValue) -> &Cell {
        &self.cells[value.index()]
    }

    /// The value of the cell with the given kind, if any.
    #[must_use]
    pub fn value_of(&self, kind: CellKind) -> Option<PointValue> {
        self.cells.iter().find(|c| c.kind == kind).map(|c| c.id.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: Vec<BoardColumn>,
    #[serde(skip)]
    index: FxHashMap<CategoryId, usize>,
}

impl Board {
    /// Assemble a board from `(category, title, one question per value)`.
    ///
    /// Questions must be given in `PointValue::ALL` order.
    pub(crate) fn from_parts(parts: Vec<(CategoryId, String, [Question; 5])>) -> Self {
        let columns: Vec<BoardColumn> = parts
            .into_iter()
            .enumerate()
            .map(|(column, (category_id, title, questions))| BoardColumn {
                category_id,
                title,
                cells: PointValue::ALL
                    .into_iter()
                    .zip(questions)
                    .map(|(value, question)| Cell::new(CellId::new(column, value), question))
                    .collect(),
            })
            .collect();

        let index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.category_id.clone(), i))
            .collect();

        Self { columns, index }
    }

    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total number of cells (`5 x columns`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.columns.len() * PointValue::ALL.len()
    }

    /// Locate a cell by category id and value.
    #[must_use]
    pub fn locate(&self, category: &CategoryId, value: PointValue) -> Option<CellId> {
        self.index.get(category).map(|&column| CellId::new(column, value))
    }

    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.columns.get(id.column).map(|c| c.cell(id.value))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.columns.iter().flat_map(|c| c.cells.iter())
    }

    /// Ids of cells that can still be picked, in board order.
    pub fn open_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells().filter(|c| !c.closed).map(|c| c.id)
    }

    #[must_use]
    pub fn closed_count(&self) -> usize {
        self.cells().filter(|c| c.closed).count()
    }

    /// True once every cell has been played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells().all(|c| c.closed)
    }

    /// Apply one column's special-cell layout, clearing any previous one.
    pub fn mark_special(
        &mut self,
        column: usize,
        bonus: PointValue,
        forced: PointValue,
    ) -> Result<(), GameError> {
        if bonus == forced {
            return Err(GameError::InvalidConfig(
                "bonus and forced cell must differ".to_string(),
            ));
        }
        let column = self.columns.get_mut(column).ok_or_else(|| {
            GameError::InvalidConfig(format!("board has no column {}", column))
        })?;

        for cell in &mut column.cells {
            cell.kind = if cell.id.value == bonus {
                CellKind::Bonus
            } else if cell.id.value == forced {
                CellKind::Forced
            } else {
                CellKind::Normal
            };
        }
        Ok(())
    }

    pub(crate) fn close(&mut self, id: CellId) {
        if let Some(column) = self.columns.get_mut(id.column) {
            column.cells[id.value.index()].closed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;
    use crate::content::fixtures;
    use crate::core::GameRng;

    fn board(columns: usize) -> Board {
        BoardBuilder::new(columns)
            .build(&fixtures::pool(columns, 1), &mut GameRng::new(1))
            .unwrap()
    }

    #[test]
    fn test_shape() {
        let board = board(3);
        assert_eq!(board.column_count(), 3);
        assert_eq!(board.cell_count(), 15);
        for column in board.columns() {
            let values: Vec<_> = column.cells().iter().map(|c| c.id.value).collect();
            assert_eq!(values, PointValue::ALL.to_vec());
        }
    }

    #[test]
    fn test_locate_and_close() {
        let mut board = board(2);
        let category = board.columns()[1].category_id.clone();
        let id = board.locate(&category, PointValue::P400).unwrap();
        assert_eq!(id, CellId::new(1, PointValue::P400));
        assert!(board.locate(&CategoryId::new("nope"), PointValue::P100).is_none());

        board.close(id);
        assert!(board.cell(id).unwrap().is_closed());
        assert_eq!(board.closed_count(), 1);
        assert_eq!(board.open_cells().count(), 9);
        assert!(!board.is_complete());
    }

    #[test]
    fn test_complete_when_all_closed() {
        let mut board = board(1);
        let ids: Vec<_> = board.open_cells().collect();
        for id in ids {
            board.close(id);
        }
        assert!(board.is_complete());
    }

    #[test]
    fn test_mark_special() {
        let mut board = board(1);
        board.mark_special(0, PointValue::P200, PointValue::P500).unwrap();
        let column = &board.columns()[0];
        assert_eq!(column.value_of(CellKind::Bonus), Some(PointValue::P200));
        assert_eq!(column.value_of(CellKind::Forced), Some(PointValue::P500));

        // Re-marking replaces the old layout
        board.mark_special(0, PointValue::P100, PointValue::P200).unwrap();
        let column = &board.columns()[0];
        assert_eq!(column.value_of(CellKind::Bonus), Some(PointValue::P100));
        assert_eq!(column.value_of(CellKind::Forced), Some(PointValue::P200));
        assert_eq!(column.cells().iter().filter(|c| c.kind == CellKind::Normal).count(), 3);

        assert!(board.mark_special(0, PointValue::P300, PointValue::P300).is_err());
        assert!(board.mark_special(4, PointValue::P100, PointValue::P300).is_err());
    }
}
