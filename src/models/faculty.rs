//! Faculty model.

use serde::{Deserialize, Serialize};

/// A teacher: qualifications, weekly cap and available days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Display name (copied into sessions).
    #[serde(default)]
    pub name: String,
    /// IDs of subjects this person may teach.
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Weekly session cap.
    #[serde(default)]
    pub max_hours_per_week: u32,
    /// Day names on which this person can teach.
    #[serde(default)]
    pub available_days: Vec<String>,
}

impl Faculty {
    /// Creates a faculty member with no qualifications and a zero cap.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subjects: Vec::new(),
            max_hours_per_week: 0,
            available_days: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a qualified subject.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subjects.push(subject_id.into());
        self
    }

    /// Sets the weekly cap.
    pub fn with_max_hours(mut self, max_hours_per_week: u32) -> Self {
        self.max_hours_per_week = max_hours_per_week;
        self
    }

    /// Sets the available days.
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this person may teach `subject_id`.
    #[inline]
    pub fn is_qualified_for(&self, subject_id: &str) -> bool {
        self.subjects.iter().any(|s| s == subject_id)
    }

    /// Whether this person teaches on `day`.
    #[inline]
    pub fn is_available_on(&self, day: &str) -> bool {
        self.available_days.iter().any(|d| d == day)
    }
}
