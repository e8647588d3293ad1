//! Timetable statistics.
//!
//! Computed once after every class has been allocated.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Room utilization | round(100 × Σ occupied room cells / (#rooms × #days × #slots)) |
//! | Per-room utilization | occupied cells of one room / (#days × #slots) |
//! | Scheduled sessions | Sessions placed across all classes |
//! | Unmet hours | Σ requested − placed over every (class, subject) |
//!
//! The denominator counts every configured slot, including those above the
//! per-day cap, so a cap below the slot count keeps utilization below 100%.

use serde::{Deserialize, Serialize};

use super::occupancy::{Occupancy, RoomPool};
use super::report::AllocationReport;
use crate::models::Calendar;

/// Headline statistics of a generated timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableStats {
    /// Number of class groups in the input.
    pub total_classes: usize,
    /// Number of subjects in the input.
    pub total_subjects: usize,
    /// Number of faculty in the input.
    pub total_faculty: usize,
    /// Room utilization as a whole percentage (0 when there is no capacity).
    pub room_utilization: u32,
    /// Sessions placed.
    pub scheduled_sessions: u32,
    /// Requested sessions that could not be placed.
    pub unmet_hours: u32,
}

/// Occupancy of a single room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUtilization {
    /// Room ID.
    pub room_id: String,
    /// Cells hosting a session.
    pub used: usize,
    /// Cells in the grid.
    pub available: usize,
}

impl RoomUtilization {
    /// Fraction of the grid in use (0.0..=1.0), 0.0 for an empty grid.
    pub fn ratio(&self) -> f64 {
        if self.available == 0 {
            0.0
        } else {
            self.used as f64 / self.available as f64
        }
    }

    /// Whole percentage, rounded like the headline figure.
    pub fn percent(&self) -> u32 {
        utilization_percent(self.used, self.available)
    }
}

impl TimetableStats {
    /// Computes statistics for a finished run.
    ///
    /// # Arguments
    /// * `counts` - `(classes, subjects, faculty)` from the input.
    /// * `pool` - The merged room pool.
    /// * `occupancy` - Room occupancy after the last class.
    /// * `calendar` - The grid.
    /// * `report` - Subject outcomes of the run.
    pub fn calculate(
        counts: (usize, usize, usize),
        pool: &RoomPool,
        occupancy: &Occupancy,
        calendar: &Calendar,
        report: &AllocationReport,
    ) -> Self {
        let (total_classes, total_subjects, total_faculty) = counts;
        let total_used = occupancy.total_used();
        let total_available = pool.len() * calendar.total_cells();

        Self {
            total_classes,
            total_subjects,
            total_faculty,
            room_utilization: utilization_percent(total_used, total_available),
            scheduled_sessions: report.placed(),
            unmet_hours: report.unmet_hours(),
        }
    }

    /// Per-room utilization in pool order.
    pub fn by_room(
        pool: &RoomPool,
        occupancy: &Occupancy,
        calendar: &Calendar,
    ) -> Vec<RoomUtilization> {
        pool.rooms()
            .iter()
            .map(|room| RoomUtilization {
                room_id: room.id.clone(),
                used: occupancy.used(&room.id),
                available: calendar.total_cells(),
            })
            .collect()
    }
}

/// `round(100 × used / available)` with halves rounded up; 0 when
/// `available` is 0.
pub fn utilization_percent(used: usize, available: usize) -> u32 {
    if available == 0 {
        return 0;
    }
    let used = used as u64;
    let available = available as u64;
    ((200 * used + available) / (2 * available)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, Room};
    use crate::scheduler::report::SubjectOutcome;

    #[test]
    fn test_utilization_percent_rounding() {
        assert_eq!(utilization_percent(0, 0), 0);
        assert_eq!(utilization_percent(5, 0), 0);
        assert_eq!(utilization_percent(0, 30), 0);
        assert_eq!(utilization_percent(30, 30), 100);
        assert_eq!(utilization_percent(1, 3), 33);
        assert_eq!(utilization_percent(2, 3), 67);
        assert_eq!(utilization_percent(1, 8), 13); // 12.5 rounds up
        assert_eq!(utilization_percent(1, 200), 1); // 0.5 rounds up
    }

    #[test]
    fn test_stats_basic() {
        let calendar = Calendar::default();
        let (pool, mut occ) = RoomPool::build(
            &[Room::classroom("R1"), Room::classroom("R2")],
            &[Room::laboratory("L1", "Computer Lab")],
        );
        for slot in 0..6 {
            occ.reserve("R1", Cell::new(0, slot));
        }
        occ.reserve("L1", Cell::new(3, 2));

        let mut report = AllocationReport::new();
        let mut o = SubjectOutcome::new("C1", "S1", "CS1", 9);
        o.placed = 7;
        report.extend([o]);

        let stats = TimetableStats::calculate((1, 4, 2), &pool, &occ, &calendar, &report);
        assert_eq!(stats.total_classes, 1);
        assert_eq!(stats.total_subjects, 4);
        assert_eq!(stats.total_faculty, 2);
        // 7 / (3 × 5 × 6) = 7.8%
        assert_eq!(stats.room_utilization, 8);
        assert_eq!(stats.scheduled_sessions, 7);
        assert_eq!(stats.unmet_hours, 2);
    }

    #[test]
    fn test_stats_no_rooms() {
        let calendar = Calendar::default();
        let (pool, occ) = RoomPool::build(&[], &[]);
        let report = AllocationReport::new();
        let stats = TimetableStats::calculate((3, 2, 1), &pool, &occ, &calendar, &report);
        assert_eq!(stats.room_utilization, 0);
        assert_eq!(stats.total_classes, 3);
    }

    #[test]
    fn test_stats_empty_calendar() {
        let calendar = Calendar::new(Vec::new(), Vec::new());
        let (pool, occ) = RoomPool::build(&[Room::classroom("R1")], &[]);
        let report = AllocationReport::new();
        let stats = TimetableStats::calculate((0, 0, 0), &pool, &occ, &calendar, &report);
        assert_eq!(stats.room_utilization, 0);
    }

    #[test]
    fn test_by_room() {
        let calendar = Calendar::default();
        let (pool, mut occ) = RoomPool::build(&[Room::classroom("R1"), Room::classroom("R2")], &[]);
        for day in 0..5 {
            for slot in 0..6 {
                occ.reserve("R2", Cell::new(day, slot));
            }
        }
        let rooms = TimetableStats::by_room(&pool, &occ, &calendar);
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].used, 0);
        assert!((rooms[1].ratio() - 1.0).abs() < 1e-10);
        assert_eq!(rooms[1].available, 30);
        assert_eq!(rooms[1].percent(), 100);
        assert_eq!(rooms[0].percent(), 0);
    }

    #[test]
    fn test_stats_json_shape() {
        let stats = TimetableStats {
            total_classes: 2,
            total_subjects: 5,
            total_faculty: 3,
            room_utilization: 40,
            scheduled_sessions: 24,
            unmet_hours: 0,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalClasses"], 2);
        assert_eq!(json["roomUtilization"], 40);
    }
}
