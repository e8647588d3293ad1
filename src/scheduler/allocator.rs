//! Per-class greedy allocator.
//!
//! # Algorithm
//!
//! For one class group, subjects are handled one at a time in input order:
//!
//! 1. Collect the faculty qualified for the subject. None → skip it.
//! 2. List the candidate cells: every day × the first
//!    `min(#slots, max_classes_per_day)` slots.
//! 3. Shuffle the candidates uniformly (fresh permutation per subject).
//! 4. Walk the permutation until the weekly target is met. For each cell
//!    that the class has free, pick a faculty member (available that day,
//!    below their cap, and not teaching elsewhere at the cell when clash
//!    checking is on), then a room (type-compatible, free at the cell,
//!    big enough). If either pick fails the cell stays free.
//! 5. Whatever remains unplaced when the permutation runs out is recorded
//!    as a shortfall, never retried.
//!
//! Subjects interact only through cell occupancy; there is no backtracking
//! and no global objective.
//!
//! # Complexity
//! O(s × d × p × (f + r)) per class, where s = subjects, d = days,
//! p = slots per day, f = faculty, r = rooms.

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use super::occupancy::{Occupancy, RoomPool, Workload};
use super::report::SubjectOutcome;
use crate::config::DEFAULT_MAX_CLASSES_PER_DAY;
use crate::models::{Calendar, ClassGroup, Faculty, Room, Schedule, Session, Subject};
use crate::selection::{SelectionContext, Selector};

/// Mutable state of one generation run.
///
/// `rooms` and `faculty` are shared by every class of the run; `workload`
/// is shared or reset per class depending on the workload scope.
#[derive(Debug, Clone, Default)]
pub struct AllocationState {
    /// Room ID → committed cells.
    pub rooms: Occupancy,
    /// Faculty ID → committed cells (only filled with clash checking on).
    pub faculty: Occupancy,
    /// Faculty ID → sessions assigned.
    pub workload: Workload,
}

impl AllocationState {
    /// Creates run state around an initialized room occupancy.
    pub fn new(rooms: Occupancy) -> Self {
        Self {
            rooms,
            faculty: Occupancy::new(),
            workload: Workload::new(),
        }
    }
}

/// Result of allocating one class group.
#[derive(Debug, Clone)]
pub struct ClassAllocation {
    /// The populated weekly matrix.
    pub schedule: Schedule,
    /// One outcome per subject, in subject order.
    pub outcomes: Vec<SubjectOutcome>,
}

/// Greedy allocator for one class group at a time.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_timetable::models::{Calendar, ClassGroup, Faculty, Room, Subject};
/// use u_timetable::scheduler::{AllocationState, ClassAllocator, RoomPool};
///
/// let calendar = Calendar::default();
/// let subjects = vec![Subject::new("S1").with_hours(2)];
/// let faculty = vec![Faculty::new("F1")
///     .with_subject("S1")
///     .with_max_hours(10)
///     .with_days(calendar.working_days.clone())];
/// let (pool, rooms) = RoomPool::build(&[Room::classroom("R1").with_capacity(40)], &[]);
///
/// let allocator = ClassAllocator::new(&calendar, &subjects, &faculty, &pool);
/// let mut state = AllocationState::new(rooms);
/// let mut rng = SmallRng::seed_from_u64(1);
///
/// let class = ClassGroup::new("C1").with_strength(30);
/// let result = allocator.allocate(&class, &mut state, &mut rng);
/// assert_eq!(result.schedule.session_count(), 2);
/// assert!(result.outcomes[0].is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct ClassAllocator<'a> {
    calendar: &'a Calendar,
    subjects: &'a [Subject],
    faculty: &'a [Faculty],
    pool: &'a RoomPool,
    max_classes_per_day: usize,
    prevent_faculty_clash: bool,
    faculty_selector: Selector<Faculty>,
    room_selector: Selector<Room>,
}

impl<'a> ClassAllocator<'a> {
    /// Creates an allocator with first-fit selection, clash checking on,
    /// and the default per-day cap.
    pub fn new(
        calendar: &'a Calendar,
        subjects: &'a [Subject],
        faculty: &'a [Faculty],
        pool: &'a RoomPool,
    ) -> Self {
        Self {
            calendar,
            subjects,
            faculty,
            pool,
            max_classes_per_day: DEFAULT_MAX_CLASSES_PER_DAY,
            prevent_faculty_clash: true,
            faculty_selector: Selector::first_fit(),
            room_selector: Selector::first_fit(),
        }
    }

    /// Sets how many leading slots per day are eligible.
    pub fn with_max_classes_per_day(mut self, max: usize) -> Self {
        self.max_classes_per_day = max;
        self
    }

    /// Enables or disables the cross-class faculty clash check.
    pub fn with_faculty_clash_check(mut self, enabled: bool) -> Self {
        self.prevent_faculty_clash = enabled;
        self
    }

    /// Sets the faculty selector.
    pub fn with_faculty_selector(mut self, selector: Selector<Faculty>) -> Self {
        self.faculty_selector = selector;
        self
    }

    /// Sets the room selector.
    pub fn with_room_selector(mut self, selector: Selector<Room>) -> Self {
        self.room_selector = selector;
        self
    }

    /// Allocates every subject for `class`.
    ///
    /// Never fails: subjects that cannot be fully placed show up in the
    /// returned outcomes with a non-zero shortfall.
    pub fn allocate<R: Rng + ?Sized>(
        &self,
        class: &ClassGroup,
        state: &mut AllocationState,
        rng: &mut R,
    ) -> ClassAllocation {
        let mut schedule = Schedule::empty(self.calendar);
        let outcomes: Vec<SubjectOutcome> = self
            .subjects
            .iter()
            .map(|subject| self.allocate_subject(class, subject, &mut schedule, state, rng))
            .collect();

        debug!(
            "Class '{}': {} session(s) placed across {} subject(s)",
            class.id,
            schedule.session_count(),
            outcomes.len()
        );

        ClassAllocation { schedule, outcomes }
    }

    fn allocate_subject<R: Rng + ?Sized>(
        &self,
        class: &ClassGroup,
        subject: &Subject,
        schedule: &mut Schedule,
        state: &mut AllocationState,
        rng: &mut R,
    ) -> SubjectOutcome {
        let mut outcome =
            SubjectOutcome::new(&class.id, &subject.id, &subject.code, subject.hours_per_week);

        let qualified: Vec<&Faculty> = self
            .faculty
            .iter()
            .filter(|f| f.is_qualified_for(&subject.id))
            .collect();
        outcome.qualified_faculty = qualified.len();
        if qualified.is_empty() {
            debug!(
                "Class '{}': subject '{}' has no qualified faculty, skipped",
                class.id, subject.id
            );
            return outcome;
        }

        let mut cells = self.calendar.candidate_cells(self.max_classes_per_day);
        cells.shuffle(rng);

        for cell in cells {
            if outcome.placed >= outcome.requested {
                break;
            }
            if !schedule.is_free(cell) {
                outcome.skipped_occupied += 1;
                continue;
            }
            let Some(day) = self.calendar.day_name(cell.day) else {
                continue;
            };

            let context = SelectionContext::new(class.strength, &state.workload);

            let eligible_faculty = qualified.iter().copied().filter(|f| {
                f.is_available_on(day)
                    && state.workload.has_capacity(f)
                    && (!self.prevent_faculty_clash || state.faculty.is_free(&f.id, cell))
            });
            let Some(teacher) = self.faculty_selector.select(eligible_faculty, &context) else {
                outcome.skipped_no_faculty += 1;
                continue;
            };

            let eligible_rooms = self.pool.rooms().iter().filter(|r| {
                r.accepts(subject) && state.rooms.is_free(&r.id, cell) && r.fits(class.strength)
            });
            let Some(room) = self.room_selector.select(eligible_rooms, &context) else {
                outcome.skipped_no_room += 1;
                continue;
            };

            schedule.place(cell, Session::new(subject, teacher, room, class));
            state.workload.increment(&teacher.id);
            state.rooms.reserve(&room.id, cell);
            if self.prevent_faculty_clash {
                state.faculty.reserve(&teacher.id, cell);
            }
            outcome.placed += 1;

            trace!(
                "Placed {} for class '{}' at {} slot {}: faculty '{}', room '{}'",
                subject.id,
                class.id,
                day,
                cell.slot,
                teacher.id,
                room.id
            );
        }

        if !outcome.is_complete() {
            debug!(
                "Class '{}': subject '{}' placed {}/{}",
                class.id, subject.id, outcome.placed, outcome.requested
            );
        }
        outcome
    }
}
