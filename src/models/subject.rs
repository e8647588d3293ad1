//! Subject model.

use serde::{Deserialize, Serialize};

/// Subject type that restricts placement to laboratories.
pub const LAB_SUBJECT_TYPE: &str = "Lab";

/// A subject taught to every class.
///
/// `semester` and `credits` are carried through for display; allocation
/// only reads `hours_per_week` and `subject_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Catalogue code (e.g. "CS101").
    #[serde(default)]
    pub code: String,
    /// Target sessions per week.
    #[serde(default)]
    pub hours_per_week: u32,
    /// Type tag ("Theory", "Lab", "Practical", ...).
    #[serde(rename = "type", default)]
    pub subject_type: String,
    /// Semester number.
    #[serde(default)]
    pub semester: u32,
    /// Credit count.
    #[serde(default)]
    pub credits: u32,
}

impl Subject {
    /// Creates a theory subject with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            code: String::new(),
            hours_per_week: 0,
            subject_type: "Theory".to_string(),
            semester: 1,
            credits: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the catalogue code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the weekly session target.
    pub fn with_hours(mut self, hours_per_week: u32) -> Self {
        self.hours_per_week = hours_per_week;
        self
    }

    /// Sets the type tag.
    pub fn with_type(mut self, subject_type: impl Into<String>) -> Self {
        self.subject_type = subject_type.into();
        self
    }

    /// Sets semester and credits.
    pub fn with_semester(mut self, semester: u32, credits: u32) -> Self {
        self.semester = semester;
        self.credits = credits;
        self
    }

    /// Whether sessions must be held in a laboratory.
    #[inline]
    pub fn requires_lab(&self) -> bool {
        self.subject_type == LAB_SUBJECT_TYPE
    }
}
