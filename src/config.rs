//! Generation input and options.
//!
//! [`TimetableInput`] is the single value handed to the generator. Every
//! field is optional on the wire and falls back to a documented default,
//! so `{}` is a valid (if empty) request.
//!
//! # JSON Example
//!
//! ```
//! use u_timetable::config::{TimetableInput, WorkloadScope};
//!
//! let input = TimetableInput::from_json_str(r#"{
//!     "semesterName": "Fall 2024",
//!     "classrooms": [{ "id": "R1", "name": "Room 1", "capacity": 40, "type": "Classroom" }],
//!     "classes": [{ "id": "C1", "name": "CSE-A", "strength": 35, "batch": "2024" }],
//!     "options": { "seed": 7, "workloadScope": "perClass" }
//! }"#).unwrap();
//!
//! assert_eq!(input.working_days.len(), 5);
//! assert_eq!(input.max_classes_per_day, 6);
//! assert_eq!(input.options.seed, Some(7));
//! assert_eq!(input.options.workload_scope, WorkloadScope::PerClass);
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{
    default_time_slots, default_working_days, Calendar, ClassGroup, Faculty, Room, Subject,
    TimeSlot,
};

/// Semester label used when the input omits one.
pub const DEFAULT_SEMESTER_NAME: &str = "Generated Semester";

/// Per-day slot cap used when the input omits one.
pub const DEFAULT_MAX_CLASSES_PER_DAY: usize = 6;

/// Everything the generator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimetableInput {
    /// Semester label copied into the result.
    pub semester_name: String,
    /// Ordered day names.
    pub working_days: Vec<String>,
    /// Ordered daily slots.
    pub time_slots: Vec<TimeSlot>,
    /// General rooms (placed first in the merged pool).
    pub classrooms: Vec<Room>,
    /// Laboratories.
    pub laboratories: Vec<Room>,
    /// Class groups, allocated in this order.
    pub classes: Vec<ClassGroup>,
    /// Subjects, allocated in this order for every class.
    pub subjects: Vec<Subject>,
    /// Faculty, searched in this order.
    pub faculty: Vec<Faculty>,
    /// How many leading slots of each day are eligible.
    pub max_classes_per_day: usize,
    /// Engine knobs.
    pub options: GenerationOptions,
}

impl Default for TimetableInput {
    fn default() -> Self {
        Self {
            semester_name: DEFAULT_SEMESTER_NAME.to_string(),
            working_days: default_working_days(),
            time_slots: default_time_slots(),
            classrooms: Vec::new(),
            laboratories: Vec::new(),
            classes: Vec::new(),
            subjects: Vec::new(),
            faculty: Vec::new(),
            max_classes_per_day: DEFAULT_MAX_CLASSES_PER_DAY,
            options: GenerationOptions::default(),
        }
    }
}

impl TimetableInput {
    /// Creates an input with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses input from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses input from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads and parses a JSON input file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// The day × slot grid described by this input.
    pub fn calendar(&self) -> Calendar {
        Calendar::new(self.working_days.clone(), self.time_slots.clone())
    }

    /// Sets the semester label.
    pub fn with_semester(mut self, name: impl Into<String>) -> Self {
        self.semester_name = name.into();
        self
    }

    /// Replaces the calendar.
    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.working_days = calendar.working_days;
        self.time_slots = calendar.time_slots;
        self
    }

    /// Adds a general classroom.
    pub fn with_classroom(mut self, room: Room) -> Self {
        self.classrooms.push(room);
        self
    }

    /// Adds a laboratory.
    pub fn with_laboratory(mut self, room: Room) -> Self {
        self.laboratories.push(room);
        self
    }

    /// Adds a class group.
    pub fn with_class(mut self, class: ClassGroup) -> Self {
        self.classes.push(class);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a faculty member.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculty.push(faculty);
        self
    }

    /// Sets the per-day slot cap.
    pub fn with_max_classes_per_day(mut self, max: usize) -> Self {
        self.max_classes_per_day = max;
        self
    }

    /// Replaces the engine options.
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }
}

/// Scope of a faculty member's weekly cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkloadScope {
    /// One counter per faculty for the whole run.
    #[default]
    Run,
    /// Counters restart at zero for every class group, so the cap applies
    /// to each class separately.
    PerClass,
}

/// How a faculty member is picked among eligible candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacultySelection {
    /// First eligible in input order.
    #[default]
    FirstFit,
    /// Fewest sessions assigned so far; input order on ties.
    LeastLoaded,
}

/// How a room is picked among eligible candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomSelection {
    /// First eligible in pool order.
    #[default]
    FirstFit,
    /// Fewest spare seats for the class; pool order on ties.
    BestFit,
}

/// Engine options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    /// Seed for the cell shuffle. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// Scope of the weekly faculty cap.
    pub workload_scope: WorkloadScope,
    /// Keep a faculty member out of two classes at the same cell.
    pub prevent_faculty_clash: bool,
    /// Faculty pick strategy.
    pub faculty_selection: FacultySelection,
    /// Room pick strategy.
    pub room_selection: RoomSelection,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            seed: None,
            workload_scope: WorkloadScope::Run,
            prevent_faculty_clash: true,
            faculty_selection: FacultySelection::FirstFit,
            room_selection: RoomSelection::FirstFit,
        }
    }
}

impl GenerationOptions {
    /// Compatibility profile: per-class caps,
    /// no faculty clash check, first-fit everywhere.
    pub fn legacy() -> Self {
        Self {
            workload_scope: WorkloadScope::PerClass,
            prevent_faculty_clash: false,
            ..Self::default()
        }
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the workload scope.
    pub fn with_workload_scope(mut self, scope: WorkloadScope) -> Self {
        self.workload_scope = scope;
        self
    }

    /// Enables or disables the cross-class faculty clash check.
    pub fn with_faculty_clash_check(mut self, enabled: bool) -> Self {
        self.prevent_faculty_clash = enabled;
        self
    }

    /// Sets the faculty pick strategy.
    pub fn with_faculty_selection(mut self, selection: FacultySelection) -> Self {
        self.faculty_selection = selection;
        self
    }

    /// Sets the room pick strategy.
    pub fn with_room_selection(mut self, selection: RoomSelection) -> Self {
        self.room_selection = selection;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimetableError;

    #[test]
    fn test_empty_json_uses_defaults() {
        let input = TimetableInput::from_json_str("{}").unwrap();
        assert_eq!(input, TimetableInput::default());
        assert_eq!(input.semester_name, "Generated Semester");
        assert_eq!(input.working_days[4], "Friday");
        assert_eq!(input.time_slots.len(), 6);
        assert_eq!(input.max_classes_per_day, 6);
        assert!(input.options.prevent_faculty_clash);
        assert_eq!(input.options.workload_scope, WorkloadScope::Run);
    }

    #[test]
    fn test_partial_options() {
        let input = TimetableInput::from_json_str(
            r#"{"options":{"facultySelection":"leastLoaded","roomSelection":"bestFit"}}"#,
        )
        .unwrap();
        assert_eq!(input.options.faculty_selection, FacultySelection::LeastLoaded);
        assert_eq!(input.options.room_selection, RoomSelection::BestFit);
        assert_eq!(input.options.seed, None);
        assert!(input.options.prevent_faculty_clash);
    }

    #[test]
    fn test_full_json_input() {
        let input = TimetableInput::from_json_str(
            r#"{
                "semesterName": "Spring",
                "workingDays": ["Mon", "Tue"],
                "timeSlots": [{"start": "08:00", "end": "09:00"}],
                "laboratories": [{"id": "L1", "name": "Lab", "capacity": 20,
                                  "type": "Computer Lab"}],
                "subjects": [{"id": "S1", "name": "OS", "code": "CS301", "hoursPerWeek": 2,
                              "type": "Lab", "semester": 5, "credits": 3}],
                "faculty": [{"id": "F1", "name": "Dr. N", "subjects": ["S1"],
                             "maxHoursPerWeek": 6, "availableDays": ["Mon"]}],
                "maxClassesPerDay": 4
            }"#,
        )
        .unwrap();

        let cal = input.calendar();
        assert_eq!(cal.day_count(), 2);
        assert_eq!(cal.slot_count(), 1);
        assert_eq!(input.laboratories[0].capacity, 20);
        assert!(input.subjects[0].requires_lab());
        assert_eq!(input.faculty[0].max_hours_per_week, 6);
        assert_eq!(input.max_classes_per_day, 4);
    }

    #[test]
    fn test_malformed_json() {
        let err = TimetableInput::from_json_str(r#"{"classes": 3}"#).unwrap_err();
        assert!(matches!(err, TimetableError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = TimetableInput::from_path("/nonexistent/timetable.json").unwrap_err();
        assert!(matches!(err, TimetableError::Io(_)));
    }

    #[test]
    fn test_legacy_options() {
        let opts = GenerationOptions::legacy().with_seed(3);
        assert_eq!(opts.workload_scope, WorkloadScope::PerClass);
        assert!(!opts.prevent_faculty_clash);
        assert_eq!(opts.seed, Some(3));
    }

    #[test]
    fn test_builder() {
        let input = TimetableInput::new()
            .with_semester("Fall")
            .with_classroom(Room::classroom("R1"))
            .with_laboratory(Room::laboratory("L1", "Science Lab"))
            .with_class(ClassGroup::new("C1"))
            .with_subject(Subject::new("S1"))
            .with_faculty(Faculty::new("F1"))
            .with_max_classes_per_day(3)
            .with_seed(11);
        assert_eq!(input.semester_name, "Fall");
        assert_eq!(input.classrooms.len(), 1);
        assert_eq!(input.laboratories.len(), 1);
        assert_eq!(input.max_classes_per_day, 3);
        assert_eq!(input.options.seed, Some(11));
    }
}
