//! Shared fixtures for integration tests.

#![allow(dead_code)]

use trivia_board::{
    Board, BoardBuilder, Category, CategoryId, CellId, CellKind, ContentPool, GameConfig, GameRng,
    PointValue, Question, RoundEngine, ScoreBook,
};

pub const RIGHT: &str = "right";
pub const WRONG: [&str; 3] = ["wrong-1", "wrong-2", "wrong-3"];

pub fn question(category: usize, value: PointValue, n: usize) -> Question {
    Question {
        id: format!("c{category}-{}-{n}", u32::from(value)),
        value,
        prompt: format!("Category {category}, {value}, question {n}?"),
        correct_answer: RIGHT.to_string(),
        options: vec![
            WRONG[0].to_string(),
            WRONG[1].to_string(),
            RIGHT.to_string(),
            WRONG[2].to_string(),
        ],
    }
}

pub fn category(index: usize, per_value: usize) -> Category {
    Category {
        id: CategoryId::new(format!("c{index}")),
        title: format!("Category {index}"),
        questions: PointValue::ALL
            .iter()
            .flat_map(|&value| (0..per_value).map(move |n| question(index, value, n)))
            .collect(),
    }
}

/// `count` complete categories with `per_value` questions per value.
pub fn pool(count: usize, per_value: usize) -> ContentPool {
    ContentPool::new((0..count).map(|i| category(i, per_value)).collect())
}

pub fn names(count: usize) -> Vec<String> {
    ["A", "B", "C", "D", "E", "F"][..count]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// A board of `columns` columns, each with Bonus at 300 and Forced at 400.
pub fn fixed_board(columns: usize) -> Board {
    let mut board = BoardBuilder::new(columns)
        .build(&pool(columns, 1), &mut GameRng::new(11))
        .expect("fixture pool is complete");
    for column in 0..columns {
        board
            .mark_special(column, PointValue::P300, PointValue::P400)
            .expect("distinct values");
    }
    board
}

/// Engine over [`fixed_board`] with default rules.
pub fn engine(players: usize, columns: usize) -> RoundEngine {
    RoundEngine::new(
        fixed_board(columns),
        ScoreBook::new(names(players)),
        &GameConfig::default(),
    )
    .expect("fixture player count is within bounds")
}

pub fn cell(column: usize, value: PointValue) -> CellId {
    CellId::new(column, value)
}

pub fn count_kind(board: &Board, kind: CellKind) -> usize {
    board.cells().filter(|c| c.kind == kind).count()
}
