//! Content pool ingestion.
//!
//! The pool is supplied by an external content source. The engine only
//! reads it; validation happens when a board is built.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::question::{Category, CategoryId};
use crate::core::GameError;

/// Ordered list of categories available for board construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentPool {
    categories: Vec<Category>,
}

impl ContentPool {
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Parse a JSON array of category records.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Validate every category in pool order, stopping at the first error.
    pub fn validate(&self) -> Result<(), GameError> {
        let mut seen = FxHashSet::default();
        for category in &self.categories {
            if !seen.insert(&category.id) {
                return Err(GameError::DuplicateCategory(category.id.clone()));
            }
            category.validate()?;
        }
        Ok(())
    }
}
