//! Trivia content: categories, questions and point values.
//!
//! Content is acquired by an external collaborator and handed to the
//! engine as a `ContentPool`. The engine never mutates it.

mod pool;
mod question;

pub use pool::ContentPool;
pub use question::{Category, CategoryId, PointValue, Question, OPTION_COUNT};

#[cfg(test)]
pub(crate) use pool::fixtures;
