//! Weekly timetable generation for academic institutions.
//!
//! Given rooms, class groups, subjects and faculty, builds a
//! day × slot timetable for every class group with a randomized greedy
//! allocator, then reports utilization and unmet demand.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Room`, `ClassGroup`, `Subject`, `Faculty`,
//!   `Calendar`, `TimeSlot`, `Schedule`, `Session`
//! - **`config`**: `TimetableInput` (JSON request) and `GenerationOptions`
//! - **`selection`**: Pluggable faculty/room selection rules
//! - **`scheduler`**: Room pool, per-class allocator, statistics, and the
//!   `TimetableGenerator` entry point
//! - **`validation`**: Input integrity checks (duplicate IDs, subject refs,
//!   day names, time slots)
//! - **`error`**: Crate error type
//!
//! # Quick Start
//!
//! ```
//! use u_timetable::{TimetableGenerator, TimetableInput};
//!
//! let input = TimetableInput::from_json_str(r#"{
//!     "classrooms": [{ "id": "R1", "name": "Room 1", "capacity": 40, "type": "Classroom" }],
//!     "classes": [{ "id": "C1", "name": "CSE-A", "strength": 30 }],
//!     "subjects": [{ "id": "S1", "name": "Algebra", "code": "MA101", "hoursPerWeek": 3 }],
//!     "faculty": [{
//!         "id": "F1", "name": "Dr. Rao", "subjects": ["S1"], "maxHoursPerWeek": 12,
//!         "availableDays": ["Monday", "Wednesday", "Friday"]
//!     }],
//!     "options": { "seed": 11 }
//! }"#).unwrap();
//!
//! let timetable = TimetableGenerator::new().generate(&input);
//! assert_eq!(timetable.stats.scheduled_sessions, 3);
//! assert!(timetable.is_complete());
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod selection;
pub mod validation;

pub use config::{GenerationOptions, TimetableInput};
pub use error::{Result, TimetableError};
pub use scheduler::{Timetable, TimetableGenerator, TimetableStats};
