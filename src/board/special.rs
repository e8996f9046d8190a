//! Special-cell assignment.

use super::layout::Board;
use crate::content::PointValue;
use crate::core::{GameError, GameRng};

/// Marks one Bonus and one distinct Forced cell in every column.
///
/// Runs once, right after the board is built and before any cell can be
/// picked. Draws are independent per column: the bonus value uniformly
/// from all five, the forced value uniformly from the remaining four.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpecialCellAssigner;

impl SpecialCellAssigner {
    pub fn assign(board: &mut Board, rng: &mut GameRng) -> Result<(), GameError> {
        let values = PointValue::ALL;
        for column in 0..board.column_count() {
            let bonus = rng.gen_range_usize(0..values.len());
            // Draw among the other four by skipping over the bonus slot.
            let offset = rng.gen_range_usize(0..values.len() - 1);
            let forced = if offset >= bonus { offset + 1 } else { offset };

            board.mark_special(column, values[bonus], values[forced])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, CellKind};
    use crate::content::fixtures;

    #[test]
    fn test_exactly_one_of_each_per_column() {
        let pool = fixtures::pool(6, 1);
        for seed in 0..50 {
            let mut board = BoardBuilder::new(6).build(&pool, &mut GameRng::new(seed)).unwrap();
            SpecialCellAssigner::assign(&mut board, &mut GameRng::new(seed + 1000)).unwrap();

            for column in board.columns() {
                let bonus = column.cells().iter().filter(|c| c.kind == CellKind::Bonus).count();
                let forced = column.cells().iter().filter(|c| c.kind == CellKind::Forced).count();
                assert_eq!(bonus, 1);
                assert_eq!(forced, 1);
                assert_ne!(column.value_of(CellKind::Bonus), column.value_of(CellKind::Forced));
            }
        }
    }

    #[test]
    fn test_every_value_can_be_special() {
        let pool = fixtures::pool(1, 1);
        let mut seen_bonus = [false; 5];
        let mut seen_forced = [false; 5];

        for seed in 0..200 {
            let mut board = BoardBuilder::new(1).build(&pool, &mut GameRng::new(0)).unwrap();
            SpecialCellAssigner::assign(&mut board, &mut GameRng::new(seed)).unwrap();
            let column = &board.columns()[0];
            if let Some(v) = column.value_of(CellKind::Bonus) {
                seen_bonus[v.index()] = true;
            }
            if let Some(v) = column.value_of(CellKind::Forced) {
                seen_forced[v.index()] = true;
            }
        }

        assert!(seen_bonus.iter().all(|&s| s));
        assert!(seen_forced.iter().all(|&s| s));
    }
}
