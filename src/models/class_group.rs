//! Class group model.

use serde::{Deserialize, Serialize};

/// A cohort of students that attends every subject together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassGroup {
    /// Unique class identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Headcount; rooms must seat at least this many.
    #[serde(default)]
    pub strength: u32,
    /// Batch label (e.g. "2024-28").
    #[serde(default)]
    pub batch: String,
}

impl ClassGroup {
    /// Creates an empty class with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            strength: 0,
            batch: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the headcount.
    pub fn with_strength(mut self, strength: u32) -> Self {
        self.strength = strength;
        self
    }

    /// Sets the batch label.
    pub fn with_batch(mut self, batch: impl Into<String>) -> Self {
        self.batch = batch.into();
        self
    }
}
