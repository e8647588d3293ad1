//! Greedy timetable allocation and statistics.
//!
//! # Pipeline
//!
//! 1. **Resource pool**: classrooms and laboratories merged into one
//!    ordered [`RoomPool`], with an empty [`Occupancy`] set per room.
//! 2. **Per-class allocation**: [`ClassAllocator`] fills one class group's
//!    weekly matrix, subject by subject, from a shuffled list of cells.
//!    Room occupancy, faculty occupancy and workload live in
//!    [`AllocationState`] and persist across classes.
//! 3. **Statistics**: [`TimetableStats`] aggregates counts, room
//!    utilization and unmet demand after the last class.
//!
//! [`TimetableGenerator`] runs all three and returns a [`Timetable`].
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

mod allocator;
mod generator;
mod occupancy;
mod report;
mod stats;

pub use allocator::{AllocationState, ClassAllocation, ClassAllocator};
pub use generator::{ClassTimetable, Timetable, TimetableGenerator};
pub use occupancy::{Occupancy, RoomPool, Workload};
pub use report::{AllocationReport, Shortfall, ShortfallReason, SubjectOutcome};
pub use stats::{utilization_percent, RoomUtilization, TimetableStats};
