//! Timetable generation entry point.
//!
//! Runs the three stages in order: build the room pool, allocate each
//! class group against the shared occupancy, aggregate statistics.

use chrono::{DateTime, Utc};
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::allocator::{AllocationState, ClassAllocation, ClassAllocator};
use super::occupancy::RoomPool;
use super::report::{AllocationReport, Shortfall};
use super::stats::{RoomUtilization, TimetableStats};
use crate::config::{TimetableInput, WorkloadScope};
use crate::error::Result;
use crate::models::{Cell, ClassGroup, Faculty, Room, Schedule, Session, TimeSlot};
use crate::selection::Selector;
use crate::validation::validate_input;

/// A class group together with its populated schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassTimetable {
    /// The class group.
    #[serde(flatten)]
    pub class: ClassGroup,
    /// Its weekly matrix.
    pub schedule: Schedule,
}

/// Generated timetable for every class group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    /// Semester label.
    pub semester: String,
    /// Day names, in grid order.
    pub working_days: Vec<String>,
    /// Slots, in grid order.
    pub time_slots: Vec<TimeSlot>,
    /// One entry per class group, in input order.
    pub classes: Vec<ClassTimetable>,
    /// Headline statistics.
    pub stats: TimetableStats,
    /// Per-room occupancy in pool order.
    pub room_usage: Vec<RoomUtilization>,
    /// Unmet demand, in allocation order.
    pub shortfalls: Vec<Shortfall>,
    /// Seed that reproduces this run, if known.
    pub seed: Option<u64>,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Full per-subject outcomes (not serialized).
    #[serde(skip)]
    pub report: AllocationReport,
}

impl Timetable {
    /// The timetable of one class group.
    pub fn class(&self, class_id: &str) -> Option<&ClassTimetable> {
        self.classes.iter().find(|c| c.class.id == class_id)
    }

    /// Every session taught by a faculty member, class by class.
    pub fn sessions_for_faculty(&self, faculty_id: &str) -> Vec<(Cell, &Session)> {
        self.all_sessions()
            .filter(|(_, s)| s.faculty_id == faculty_id)
            .collect()
    }

    /// Every session held in a room, class by class.
    pub fn sessions_in_room(&self, room_id: &str) -> Vec<(Cell, &Session)> {
        self.all_sessions()
            .filter(|(_, s)| s.room_id == room_id)
            .collect()
    }

    /// Sessions across all classes.
    pub fn all_sessions(&self) -> impl Iterator<Item = (Cell, &Session)> + '_ {
        self.classes.iter().flat_map(|c| c.schedule.sessions())
    }

    /// Whether every requested session was placed.
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }
}

/// Generates timetables from [`TimetableInput`].
///
/// # Example
///
/// ```
/// use u_timetable::config::TimetableInput;
/// use u_timetable::models::{ClassGroup, Faculty, Room, Subject};
/// use u_timetable::scheduler::TimetableGenerator;
///
/// let input = TimetableInput::new()
///     .with_classroom(Room::classroom("R1").with_name("Room 1").with_capacity(40))
///     .with_class(ClassGroup::new("C1").with_strength(30))
///     .with_subject(Subject::new("S1").with_name("Algebra").with_hours(2))
///     .with_faculty(
///         Faculty::new("F1")
///             .with_subject("S1")
///             .with_max_hours(10)
///             .with_days(["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]),
///     )
///     .with_seed(42);
///
/// let timetable = TimetableGenerator::new().generate(&input);
/// assert_eq!(timetable.class("C1").unwrap().schedule.session_count(), 2);
/// assert_eq!(timetable.stats.room_utilization, 7); // 2 of 30 cells
/// assert_eq!(timetable.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    faculty_selector: Option<Selector<Faculty>>,
    room_selector: Option<Selector<Room>>,
}

impl TimetableGenerator {
    /// Creates a generator that follows the input's options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the faculty selector named in the options.
    pub fn with_faculty_selector(mut self, selector: Selector<Faculty>) -> Self {
        self.faculty_selector = Some(selector);
        self
    }

    /// Overrides the room selector named in the options.
    pub fn with_room_selector(mut self, selector: Selector<Room>) -> Self {
        self.room_selector = Some(selector);
        self
    }

    /// Generates a timetable. Never fails.
    ///
    /// Uses `options.seed` when set, otherwise a fresh random seed; either
    /// way the seed is reported in the result.
    pub fn generate(&self, input: &TimetableInput) -> Timetable {
        let seed = input.options.seed.unwrap_or_else(rand::random);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut timetable = self.run(input, &mut rng);
        timetable.seed = Some(seed);
        timetable
    }

    /// Generates a timetable drawing cell permutations from `rng`.
    ///
    /// `options.seed` is ignored; the result reports no seed.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        input: &TimetableInput,
        rng: &mut R,
    ) -> Timetable {
        self.run(input, rng)
    }

    /// Validates the input first and refuses to generate on any issue.
    pub fn generate_validated(&self, input: &TimetableInput) -> Result<Timetable> {
        validate_input(input)?;
        Ok(self.generate(input))
    }

    fn run<R: Rng + ?Sized>(&self, input: &TimetableInput, rng: &mut R) -> Timetable {
        info!(
            "Generating timetable '{}': {} class(es), {} subject(s), {} faculty, {} room(s)",
            input.semester_name,
            input.classes.len(),
            input.subjects.len(),
            input.faculty.len(),
            input.classrooms.len() + input.laboratories.len()
        );
        if let Err(issues) = validate_input(input) {
            for issue in &issues {
                warn!("Input issue ({:?}): {}", issue.kind, issue.message);
            }
        }

        let options = &input.options;
        let calendar = input.calendar();
        let (pool, room_occupancy) = RoomPool::build(&input.classrooms, &input.laboratories);

        let faculty_selector = self
            .faculty_selector
            .clone()
            .unwrap_or_else(|| options.faculty_selection.into());
        let room_selector = self
            .room_selector
            .clone()
            .unwrap_or_else(|| options.room_selection.into());

        let allocator = ClassAllocator::new(&calendar, &input.subjects, &input.faculty, &pool)
            .with_max_classes_per_day(input.max_classes_per_day)
            .with_faculty_clash_check(options.prevent_faculty_clash)
            .with_faculty_selector(faculty_selector)
            .with_room_selector(room_selector);

        let mut state = AllocationState::new(room_occupancy);
        let mut report = AllocationReport::new();
        let mut classes = Vec::with_capacity(input.classes.len());

        for class in &input.classes {
            if options.workload_scope == WorkloadScope::PerClass {
                state.workload.reset();
            }
            let ClassAllocation { schedule, outcomes } = allocator.allocate(class, &mut state, rng);
            report.extend(outcomes);
            classes.push(ClassTimetable {
                class: class.clone(),
                schedule,
            });
        }

        let stats = TimetableStats::calculate(
            (input.classes.len(), input.subjects.len(), input.faculty.len()),
            &pool,
            &state.rooms,
            &calendar,
            &report,
        );
        let room_usage = TimetableStats::by_room(&pool, &state.rooms, &calendar);

        let shortfalls = report.shortfalls();
        for shortfall in &shortfalls {
            warn!("Shortfall: {shortfall}");
        }
        info!(
            "Timetable generated: {} session(s), {} unmet, room utilization {}%",
            stats.scheduled_sessions, stats.unmet_hours, stats.room_utilization
        );

        Timetable {
            semester: input.semester_name.clone(),
            working_days: calendar.working_days.clone(),
            time_slots: calendar.time_slots.clone(),
            classes,
            stats,
            room_usage,
            shortfalls,
            seed: None,
            generated_at: Utc::now(),
            report,
        }
    }
}
