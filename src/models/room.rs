//! Room model.
//!
//! General classrooms and laboratories share one type: the input keeps
//! them in separate lists, the scheduler merges them into a single pool.
//! The type tag is free text ("Lecture Hall", "Computer Lab", ...); any tag
//! containing `"Lab"` marks a laboratory.

use serde::{Deserialize, Serialize};

use super::Subject;

/// Substring of a room type that marks a laboratory.
pub const LAB_MARKER: &str = "Lab";

/// A teaching room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier across classrooms and laboratories.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Seats.
    #[serde(default)]
    pub capacity: u32,
    /// Free-text type tag.
    #[serde(rename = "type", default)]
    pub room_type: String,
}

impl Room {
    /// Creates a room with the given ID and type tag.
    pub fn new(id: impl Into<String>, room_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
            room_type: room_type.into(),
        }
    }

    /// Creates a general classroom.
    pub fn classroom(id: impl Into<String>) -> Self {
        Self::new(id, "Classroom")
    }

    /// Creates a laboratory of the given kind (e.g. `"Computer Lab"`).
    pub fn laboratory(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::new(id, kind)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seat count.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether this room is a laboratory.
    #[inline]
    pub fn is_lab(&self) -> bool {
        self.room_type.contains(LAB_MARKER)
    }

    /// Whether the room type suits the subject.
    ///
    /// Lab subjects need a laboratory; everything else fits anywhere.
    #[inline]
    pub fn accepts(&self, subject: &Subject) -> bool {
        !subject.requires_lab() || self.is_lab()
    }

    /// Whether a class of `strength` students fits.
    #[inline]
    pub fn fits(&self, strength: u32) -> bool {
        self.capacity >= strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let r = Room::classroom("R101").with_name("Room 101").with_capacity(60);
        assert_eq!(r.id, "R101");
        assert_eq!(r.name, "Room 101");
        assert_eq!(r.capacity, 60);
        assert_eq!(r.room_type, "Classroom");
        assert!(!r.is_lab());
    }

    #[test]
    fn test_lab_marker_is_substring() {
        assert!(Room::laboratory("L1", "Computer Lab").is_lab());
        assert!(Room::laboratory("L2", "Science Lab").is_lab());
        assert!(Room::new("L3", "Language Laboratory").is_lab());
        assert!(!Room::new("R1", "Lecture Hall").is_lab());
        assert!(!Room::new("R2", "lab annex").is_lab()); // Case sensitive
    }

    #[test]
    fn test_accepts_and_fits() {
        let lab_subject = Subject::new("S1").with_type("Lab");
        let theory = Subject::new("S2").with_type("Theory");
        let hall = Room::new("R1", "Lecture Hall").with_capacity(40);
        let lab = Room::laboratory("L1", "Computer Lab").with_capacity(25);

        assert!(!hall.accepts(&lab_subject));
        assert!(hall.accepts(&theory));
        assert!(lab.accepts(&lab_subject));
        assert!(lab.accepts(&theory));

        assert!(hall.fits(40));
        assert!(!lab.fits(26));
    }

    #[test]
    fn test_room_json_shape() {
        let json = r#"{"id":"L201","name":"Computer Lab 1","capacity":30,"type":"Computer Lab"}"#;
        let r: Room = serde_json::from_str(json).unwrap();
        assert!(r.is_lab());
        assert_eq!(r.capacity, 30);
    }
}
