//! Per-class schedule (solution) model.
//!
//! A schedule is a `day × slot` matrix for one class group. Each cell is
//! either free or holds exactly one [`Session`]. Rows follow the calendar's
//! day order; every row is as long as the calendar's slot list, including
//! slots beyond the per-day cap (those simply stay free).
//!
//! # JSON Shape
//! Serialized as an ordered map from day name to slot array, `null` for a
//! free slot:
//!
//! ```json
//! { "Monday": [null, { "subject": "Physics", ... }, null], "Tuesday": [...] }
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Calendar, Cell, ClassGroup, Faculty, Room, Subject};

/// One materialized allocation: subject × faculty × room at a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Subject display name.
    pub subject: String,
    /// Subject catalogue code.
    pub subject_code: String,
    /// Subject ID.
    pub subject_id: String,
    /// Faculty display name.
    pub faculty: String,
    /// Faculty ID.
    pub faculty_id: String,
    /// Room display name.
    pub room: String,
    /// Room ID.
    pub room_id: String,
    /// Subject type tag.
    #[serde(rename = "type")]
    pub session_type: String,
    /// Owning class ID.
    pub class_id: String,
}

impl Session {
    /// Materializes a session from its participants.
    pub fn new(subject: &Subject, faculty: &Faculty, room: &Room, class: &ClassGroup) -> Self {
        Self {
            subject: subject.name.clone(),
            subject_code: subject.code.clone(),
            subject_id: subject.id.clone(),
            faculty: faculty.name.clone(),
            faculty_id: faculty.id.clone(),
            room: room.name.clone(),
            room_id: room.id.clone(),
            session_type: subject.subject_type.clone(),
            class_id: class.id.clone(),
        }
    }
}

/// One day of a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    /// Day name.
    pub day: String,
    /// Slot contents, `None` = free.
    pub slots: Vec<Option<Session>>,
}

/// A class group's weekly matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    rows: Vec<ScheduleRow>,
}

impl Schedule {
    /// Creates an all-free schedule shaped after the calendar.
    pub fn empty(calendar: &Calendar) -> Self {
        let rows = calendar
            .working_days
            .iter()
            .map(|day| ScheduleRow {
                day: day.clone(),
                slots: vec![None; calendar.slot_count()],
            })
            .collect();
        Self { rows }
    }

    /// Session at `cell`, if any.
    pub fn get(&self, cell: Cell) -> Option<&Session> {
        self.rows
            .get(cell.day)
            .and_then(|row| row.slots.get(cell.slot))
            .and_then(Option::as_ref)
    }

    /// Whether `cell` exists and holds no session.
    pub fn is_free(&self, cell: Cell) -> bool {
        matches!(
            self.rows.get(cell.day).and_then(|row| row.slots.get(cell.slot)),
            Some(None)
        )
    }

    /// Places a session into a free cell.
    ///
    /// Returns `false` (and drops the session) if the cell is taken or out
    /// of range. A placed session is never overwritten.
    pub fn place(&mut self, cell: Cell, session: Session) -> bool {
        match self
            .rows
            .get_mut(cell.day)
            .and_then(|row| row.slots.get_mut(cell.slot))
        {
            Some(slot) if slot.is_none() => {
                *slot = Some(session);
                true
            }
            _ => false,
        }
    }

    /// The row for day position `day`.
    pub fn row(&self, day: usize) -> Option<&ScheduleRow> {
        self.rows.get(day)
    }

    /// All rows in calendar order.
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// Iterates occupied cells with their sessions, day-major.
    pub fn sessions(&self) -> impl Iterator<Item = (Cell, &Session)> + '_ {
        self.rows.iter().enumerate().flat_map(|(day, row)| {
            row.slots
                .iter()
                .enumerate()
                .filter_map(move |(slot, s)| s.as_ref().map(|s| (Cell::new(day, slot), s)))
        })
    }

    /// Number of placed sessions.
    pub fn session_count(&self) -> usize {
        self.sessions().count()
    }

    /// Number of sessions of a given subject.
    pub fn sessions_of_subject(&self, subject_id: &str) -> usize {
        self.sessions()
            .filter(|(_, s)| s.subject_id == subject_id)
            .count()
    }
}

impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for row in &self.rows {
            map.serialize_entry(&row.day, &row.slots)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScheduleVisitor;

        impl<'de> Visitor<'de> for ScheduleVisitor {
            type Value = Schedule;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from day name to slot array")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Schedule, A::Error> {
                let mut rows = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((day, slots)) =
                    access.next_entry::<String, Vec<Option<Session>>>()?
                {
                    rows.push(ScheduleRow { day, slots });
                }
                Ok(Schedule { rows })
            }
        }

        deserializer.deserialize_map(ScheduleVisitor)
    }
}
