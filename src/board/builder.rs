//! Board construction from a content pool.
//!
//! Policy: fail fast. The whole pool is validated before anything is
//! drawn, so whether a board can be built never depends on which
//! categories the shuffle happened to pick. An incomplete category is
//! reported, never replaced or rendered sparse.

use super::layout::Board;
use crate::content::{ContentPool, PointValue, Question};
use crate::core::{GameError, GameRng};

/// Builds a `Board` of a fixed number of categories.
#[derive(Clone, Copy, Debug)]
pub struct BoardBuilder {
    board_size: usize,
}

impl BoardBuilder {
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        Self { board_size }
    }

    /// Select `board_size` categories and one question per value.
    ///
    /// ## Errors
    ///
    /// - `InsufficientContent` if the pool has fewer categories than the board
    /// - `IncompleteCategory` if any pool category lacks a value
    /// - `MalformedQuestion` / `DuplicateCategory` for broken records
    pub fn build(&self, pool: &ContentPool, rng: &mut GameRng) -> Result<Board, GameError> {
        if pool.len() < self.board_size {
            return Err(GameError::InsufficientContent {
                available: pool.len(),
                required: self.board_size,
            });
        }
        pool.validate()?;

        // Unbiased permutation, then keep the first board_size.
        let mut order: Vec<usize> = (0..pool.len()).collect();
        rng.shuffle(&mut order);
        order.truncate(self.board_size);

        let mut parts = Vec::with_capacity(self.board_size);
        for idx in order {
            let category = &pool.categories()[idx];
            let mut picks: Vec<Question> = Vec::with_capacity(PointValue::ALL.len());
            for value in PointValue::ALL {
                let candidates: Vec<&Question> = category.questions_for(value).collect();
                let question = rng.choose(&candidates).ok_or_else(|| {
                    GameError::IncompleteCategory {
                        category: category.id.clone(),
                        value,
                    }
                })?;
                picks.push((*question).clone());
            }

            let questions: [Question; 5] = picks
                .try_into()
                .map_err(|_| GameError::InvalidConfig("board column must hold 5 cells".to_string()))?;
            parts.push((category.id.clone(), category.title.clone(), questions));
        }

        Ok(Board::from_parts(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{fixtures, Category, CategoryId};
    use rustc_hash::FxHashSet;

    #[test]
    fn test_build_selects_distinct_categories() {
        let pool = fixtures::pool(10, 3);
        let board = BoardBuilder::new(6).build(&pool, &mut GameRng::new(5)).unwrap();

        assert_eq!(board.column_count(), 6);
        let ids: FxHashSet<_> = board.columns().iter().map(|c| c.category_id.clone()).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_questions_match_cell_values() {
        let pool = fixtures::pool(6, 4);
        let board = BoardBuilder::new(6).build(&pool, &mut GameRng::new(11)).unwrap();

        for cell in board.cells() {
            assert_eq!(cell.question.value, cell.id.value);
            let column = &board.columns()[cell.id.column];
            assert!(cell.question.id.starts_with(column.category_id.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let pool = fixtures::pool(9, 3);
        let a = BoardBuilder::new(6).build(&pool, &mut GameRng::new(77)).unwrap();
        let b = BoardBuilder::new(6).build(&pool, &mut GameRng::new(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_insufficient_content() {
        let pool = fixtures::pool(5, 1);
        let err = BoardBuilder::new(6).build(&pool, &mut GameRng::new(1)).unwrap_err();
        assert!(matches!(
            err,
            GameError::InsufficientContent { available: 5, required: 6 }
        ));
    }

    #[test]
    fn test_incomplete_category_anywhere_in_pool() {
        let mut categories: Vec<Category> = fixtures::pool(8, 1).categories().to_vec();
        categories[7].questions.retain(|q| q.value != PointValue::P500);
        let pool = ContentPool::new(categories);

        // Fails for every seed, whether or not cat7 would have been drawn.
        for seed in 0..10 {
            match BoardBuilder::new(6).build(&pool, &mut GameRng::new(seed)) {
                Err(GameError::IncompleteCategory { category, value }) => {
                    assert_eq!(category, CategoryId::new("cat7"));
                    assert_eq!(value, PointValue::P500);
                }
                other => panic!("expected IncompleteCategory, got {:?}", other.map(|_| ())),
            }
        }
    }
}
