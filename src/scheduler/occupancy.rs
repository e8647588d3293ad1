//! Shared allocation state: room pool, occupancy sets, faculty workload.
//!
//! All three are created empty at the start of a run and only ever grow
//! during allocation. Occupancy is the one structure shared across class
//! groups; it is threaded through the per-class allocator by `&mut`, so
//! every class sees the reservations of the classes before it.

use std::collections::{HashMap, HashSet};

use crate::models::{Cell, Faculty, Room};

/// Cells committed per entity (room or faculty), keyed by entity ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    cells: HashMap<String, HashSet<Cell>>,
}

impl Occupancy {
    /// Creates an empty tracker with no known entities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker with an empty set for each ID.
    ///
    /// Repeated IDs collapse into one shared set.
    pub fn with_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let cells = ids
            .into_iter()
            .map(|id| (id.to_string(), HashSet::new()))
            .collect();
        Self { cells }
    }

    /// Whether `id` has nothing committed at `cell`.
    pub fn is_free(&self, id: &str, cell: Cell) -> bool {
        self.cells.get(id).map_or(true, |set| !set.contains(&cell))
    }

    /// Commits `cell` for `id`.
    ///
    /// Check-and-reserve in one step: returns `false` if the cell was
    /// already taken, in which case nothing changes.
    pub fn reserve(&mut self, id: &str, cell: Cell) -> bool {
        self.cells.entry(id.to_string()).or_default().insert(cell)
    }

    /// Number of cells committed for `id`.
    pub fn used(&self, id: &str) -> usize {
        self.cells.get(id).map_or(0, HashSet::len)
    }

    /// Cells committed across all entities.
    pub fn total_used(&self) -> usize {
        self.cells.values().map(HashSet::len).sum()
    }

    /// Tracked entity IDs (unordered).
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.cells.keys().map(String::as_str)
    }

    /// Committed cells of `id`, sorted.
    pub fn cells_of(&self, id: &str) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self
            .cells
            .get(id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        cells.sort();
        cells
    }
}

/// Sessions assigned per faculty member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workload {
    counts: HashMap<String, u32>,
}

impl Workload {
    /// Creates a workload with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions assigned to `faculty_id`.
    pub fn count(&self, faculty_id: &str) -> u32 {
        self.counts.get(faculty_id).copied().unwrap_or(0)
    }

    /// Records one more session for `faculty_id`.
    pub fn increment(&mut self, faculty_id: &str) {
        *self.counts.entry(faculty_id.to_string()).or_insert(0) += 1;
    }

    /// Whether `faculty` is still strictly below their weekly cap.
    pub fn has_capacity(&self, faculty: &Faculty) -> bool {
        self.count(&faculty.id) < faculty.max_hours_per_week
    }

    /// Resets every counter to zero.
    pub fn reset(&mut self) {
        self.counts.clear();
    }
}

/// All rooms of a run: classrooms first, then laboratories.
#[derive(Debug, Clone, Default)]
pub struct RoomPool {
    rooms: Vec<Room>,
}

impl RoomPool {
    /// Merges both room lists and returns the pool with an empty
    /// occupancy set per room ID.
    ///
    /// IDs are not checked for uniqueness; duplicates share one set.
    pub fn build(classrooms: &[Room], laboratories: &[Room]) -> (Self, Occupancy) {
        let rooms: Vec<Room> = classrooms.iter().chain(laboratories).cloned().collect();
        let occupancy = Occupancy::with_ids(rooms.iter().map(|r| r.id.as_str()));
        (Self { rooms }, occupancy)
    }

    /// Rooms in pool order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms, counting repeated IDs separately.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the pool has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_order_and_occupancy_init() {
        let classrooms = vec![Room::classroom("R1"), Room::classroom("R2")];
        let labs = vec![Room::laboratory("L1", "Computer Lab")];
        let (pool, occ) = RoomPool::build(&classrooms, &labs);

        let ids: Vec<&str> = pool.rooms().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["R1", "R2", "L1"]);
        assert_eq!(pool.len(), 3);
        assert_eq!(occ.ids().count(), 3);
        assert_eq!(occ.total_used(), 0);
    }

    #[test]
    fn test_duplicate_room_ids_share_a_set() {
        let classrooms = vec![Room::classroom("X")];
        let labs = vec![Room::laboratory("X", "Science Lab")];
        let (pool, mut occ) = RoomPool::build(&classrooms, &labs);

        assert_eq!(pool.len(), 2);
        assert_eq!(occ.ids().count(), 1);
        assert!(occ.reserve("X", Cell::new(0, 0)));
        assert!(!occ.is_free("X", Cell::new(0, 0)));
    }

    #[test]
    fn test_reserve_is_check_and_set() {
        let mut occ = Occupancy::new();
        let cell = Cell::new(2, 3);
        assert!(occ.is_free("F1", cell));
        assert!(occ.reserve("F1", cell));
        assert!(!occ.reserve("F1", cell));
        assert!(occ.is_free("F2", cell));
        assert_eq!(occ.used("F1"), 1);
        assert_eq!(occ.used("F2"), 0);

        occ.reserve("F1", Cell::new(0, 1));
        assert_eq!(occ.cells_of("F1"), vec![Cell::new(0, 1), Cell::new(2, 3)]);
        assert_eq!(occ.total_used(), 2);
    }

    #[test]
    fn test_workload_cap() {
        let f = Faculty::new("F1").with_max_hours(2);
        let mut w = Workload::new();
        assert!(w.has_capacity(&f));
        w.increment("F1");
        assert!(w.has_capacity(&f));
        w.increment("F1");
        assert!(!w.has_capacity(&f));
        assert_eq!(w.count("F1"), 2);

        w.reset();
        assert_eq!(w.count("F1"), 0);
        assert!(w.has_capacity(&f));
    }

    #[test]
    fn test_zero_cap_never_has_capacity() {
        let f = Faculty::new("F0");
        assert!(!Workload::new().has_capacity(&f));
    }
}
