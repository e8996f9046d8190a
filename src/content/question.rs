//! Questions, categories and board values.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// One of the five point values on a board column.
///
/// Serialized as the plain number (`100`..`500`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PointValue {
    P100,
    P200,
    P300,
    P400,
    P500,
}

impl PointValue {
    /// All values, lowest first. Column cells are stored in this order.
    pub const ALL: [PointValue; 5] = [
        PointValue::P100,
        PointValue::P200,
        PointValue::P300,
        PointValue::P400,
        PointValue::P500,
    ];

    /// Face value in points.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            PointValue::P100 => 100,
            PointValue::P200 => 200,
            PointValue::P300 => 300,
            PointValue::P400 => 400,
            PointValue::P500 => 500,
        }
    }

    /// Position within a column (0 for 100 through 4 for 500).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_points(points: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.points() == points)
    }
}

impl TryFrom<u32> for PointValue {
    type Error = GameError;

    fn try_from(points: u32) -> Result<Self, Self::Error> {
        Self::from_points(points).ok_or(GameError::InvalidPointValue(points))
    }
}

impl From<PointValue> for u32 {
    fn from(value: PointValue) -> Self {
        value.points()
    }
}

impl std::fmt::Display for PointValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.points())
    }
}

/// Category identifier as supplied by the content source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub value: PointValue,
    #[serde(alias = "q")]
    pub prompt: String,
    #[serde(alias = "a")]
    pub correct_answer: String,
    pub options: Vec<String>,
}

impl Question {
    /// Check the option list: exactly four distinct strings, one of them
    /// the correct answer.
    pub fn validate(&self, category: &CategoryId) -> Result<(), GameError> {
        let malformed = |reason| GameError::MalformedQuestion {
            category: category.clone(),
            question: self.id.clone(),
            reason,
        };

        if self.options.len() != OPTION_COUNT {
            return Err(malformed("expected exactly 4 options"));
        }
        let distinct = self
            .options
            .iter()
            .enumerate()
            .all(|(i, opt)| !self.options[..i].contains(opt));
        if !distinct {
            return Err(malformed("options are not distinct"));
        }
        if !self.has_option(&self.correct_answer) {
            return Err(malformed("correct answer is not among the options"));
        }
        Ok(())
    }

    #[must_use]
    pub fn has_option(&self, text: &str) -> bool {
        self.options.iter().any(|o| o == text)
    }

    #[must_use]
    pub fn is_correct(&self, text: &str) -> bool {
        self.correct_answer == text
    }
}

/// A category record: title plus its question bank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Category {
    /// Questions carrying the given value.
    pub fn questions_for(&self, value: PointValue) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.value == value)
    }

    /// Validate every question and check each board value is covered.
    pub fn validate(&self) -> Result<(), GameError> {
        for question in &self.questions {
            question.validate(&self.id)?;
        }
        for value in PointValue::ALL {
            if self.questions_for(value).next().is_none() {
                return Err(GameError::IncompleteCategory {
                    category: self.id.clone(),
                    value,
                });
            }
        }
        Ok(())
    }
}
