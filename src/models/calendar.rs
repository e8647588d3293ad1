//! Calendar grid: working days × time slots.
//!
//! Every class and every room shares the same weekly grid. A cell of the
//! grid is addressed by the position of its day in the calendar and the
//! position of its slot within the day.
//!
//! # Time Model
//! Slots carry wall-clock times (`HH:MM`) for display and validation only.
//! Allocation never looks at the clock values, only at slot positions.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Day names used when the input omits `workingDays`.
pub const DEFAULT_WORKING_DAYS: [&str; 5] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Slot bounds used when the input omits `timeSlots`.
///
/// 09:00–16:00 with a short break at 11:00 and lunch at 13:15.
pub const DEFAULT_TIME_SLOTS: [(&str, &str); 6] = [
    ("09:00", "10:00"),
    ("10:00", "11:00"),
    ("11:15", "12:15"),
    ("12:15", "13:15"),
    ("14:00", "15:00"),
    ("15:00", "16:00"),
];

/// A teaching period `[start, end)` within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Period start (wall clock).
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// Period end (wall clock, exclusive).
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Creates a slot from wall-clock bounds.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parses a slot from `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self {
            start: NaiveTime::parse_from_str(start, hhmm::FORMAT)?,
            end: NaiveTime::parse_from_str(end, hhmm::FORMAT)?,
        })
    }

    /// Length of the slot in minutes (negative for malformed slots).
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether the end lies strictly after the start.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.end > self.start
    }

    /// Whether two slots share any instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format(hhmm::FORMAT),
            self.end.format(hhmm::FORMAT)
        )
    }
}

/// Grid coordinate `(day, slot)`, both as positions in the calendar.
///
/// This is the occupancy key shared by class schedules, rooms and faculty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Index into `Calendar::working_days`.
    pub day: usize,
    /// Index into `Calendar::time_slots`.
    pub slot: usize,
}

impl Cell {
    /// Creates a cell.
    #[inline]
    pub fn new(day: usize, slot: usize) -> Self {
        Self { day, slot }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.day, self.slot)
    }
}

/// The weekly grid shared by every class and room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    /// Ordered day names. Order affects iteration only.
    pub working_days: Vec<String>,
    /// Ordered daily slots.
    pub time_slots: Vec<TimeSlot>,
}

impl Calendar {
    /// Creates a calendar from days and slots.
    ///
    /// Repeated day names collapse into their first occurrence, so a day
    /// name and its index identify the same row.
    pub fn new(working_days: Vec<String>, time_slots: Vec<TimeSlot>) -> Self {
        let mut calendar = Self {
            working_days: Vec::with_capacity(working_days.len()),
            time_slots,
        };
        for day in working_days {
            if calendar.day_index(&day).is_none() {
                calendar.working_days.push(day);
            }
        }
        calendar
    }

    /// Number of working days.
    #[inline]
    pub fn day_count(&self) -> usize {
        self.working_days.len()
    }

    /// Number of slots per day.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.time_slots.len()
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.day_count() * self.slot_count()
    }

    /// Name of the day at `index`.
    pub fn day_name(&self, index: usize) -> Option<&str> {
        self.working_days.get(index).map(String::as_str)
    }

    /// Position of the day named `name`.
    pub fn day_index(&self, name: &str) -> Option<usize> {
        self.working_days.iter().position(|d| d == name)
    }

    /// Cells eligible for placement, day-major.
    ///
    /// Only the first `min(#slots, max_per_day)` slots of each day qualify,
    /// regardless of which of them are already taken.
    pub fn candidate_cells(&self, max_per_day: usize) -> Vec<Cell> {
        let per_day = self.slot_count().min(max_per_day);
        let mut cells = Vec::with_capacity(self.day_count() * per_day);
        for day in 0..self.day_count() {
            for slot in 0..per_day {
                cells.push(Cell::new(day, slot));
            }
        }
        cells
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            working_days: default_working_days(),
            time_slots: default_time_slots(),
        }
    }
}

/// The five weekday names.
pub fn default_working_days() -> Vec<String> {
    DEFAULT_WORKING_DAYS.iter().map(|d| d.to_string()).collect()
}

/// The six default teaching periods.
pub fn default_time_slots() -> Vec<TimeSlot> {
    DEFAULT_TIME_SLOTS
        .iter()
        .filter_map(|(start, end)| TimeSlot::parse(start, end).ok())
        .collect()
}

/// Serde adapter for `HH:MM` wall-clock times.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
