// ==========================================
// Property tests for generated timetables
// ==========================================
// Random small institutions; every generated timetable must respect the
// hard constraints regardless of seed or options.
// ==========================================

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use u_timetable::config::{GenerationOptions, WorkloadScope};
use u_timetable::models::{ClassGroup, Faculty, Room, Subject, DEFAULT_WORKING_DAYS};
use u_timetable::{Timetable, TimetableGenerator, TimetableInput};

// ==========================================
// Strategies
// ==========================================

prop_compose! {
    fn arb_room(index: usize)(capacity in 10u32..80, lab in any::<bool>()) -> (bool, Room) {
        let room = if lab {
            Room::laboratory(format!("L{index}"), "Computer Lab")
        } else {
            Room::classroom(format!("R{index}"))
        };
        (lab, room.with_capacity(capacity))
    }
}

prop_compose! {
    fn arb_subject(index: usize)(hours in 0u32..6, lab in prop::bool::weighted(0.25)) -> Subject {
        let subject = Subject::new(format!("S{index}")).with_hours(hours);
        if lab { subject.with_type("Lab") } else { subject }
    }
}

prop_compose! {
    fn arb_faculty(index: usize, subjects: usize)(
        mask in prop::collection::vec(any::<bool>(), subjects),
        days in prop::collection::vec(any::<bool>(), 5),
        max_hours in 0u32..15,
    ) -> Faculty {
        let mut f = Faculty::new(format!("F{index}")).with_max_hours(max_hours);
        for (i, qualified) in mask.iter().enumerate() {
            if *qualified {
                f = f.with_subject(format!("S{i}"));
            }
        }
        f.with_days(
            DEFAULT_WORKING_DAYS
                .iter()
                .zip(&days)
                .filter(|(_, on)| **on)
                .map(|(d, _)| *d),
        )
    }
}

fn arb_input() -> impl Strategy<Value = TimetableInput> {
    (0usize..4, 0usize..5, 1usize..5, 1usize..4)
        .prop_flat_map(|(rooms, subjects, faculty, classes)| {
            (
                (0..rooms).map(arb_room).collect::<Vec<_>>(),
                (0..subjects).map(arb_subject).collect::<Vec<_>>(),
                (0..faculty).map(|i| arb_faculty(i, subjects)).collect::<Vec<_>>(),
                prop::collection::vec(10u32..60, classes),
                1usize..=6,
                any::<u64>(),
                any::<bool>(),
                any::<bool>(),
            )
        })
        .prop_map(
            |(rooms, subjects, faculty, strengths, max_per_day, seed, per_class, clash)| {
                let mut input = TimetableInput::new().with_max_classes_per_day(max_per_day);
                for (lab, room) in rooms {
                    input = if lab {
                        input.with_laboratory(room)
                    } else {
                        input.with_classroom(room)
                    };
                }
                for subject in subjects {
                    input = input.with_subject(subject);
                }
                for f in faculty {
                    input = input.with_faculty(f);
                }
                for (i, strength) in strengths.into_iter().enumerate() {
                    let class = ClassGroup::new(format!("C{i}")).with_strength(strength);
                    input = input.with_class(class);
                }
                let scope = if per_class { WorkloadScope::PerClass } else { WorkloadScope::Run };
                input.with_options(
                    GenerationOptions::default()
                        .with_workload_scope(scope)
                        .with_faculty_clash_check(clash)
                        .with_seed(seed),
                )
            },
        )
}

// ==========================================
// Invariant checks
// ==========================================

fn check_hard_constraints(input: &TimetableInput, tt: &Timetable) -> Result<(), TestCaseError> {
    let subjects: HashMap<&str, &Subject> =
        input.subjects.iter().map(|s| (s.id.as_str(), s)).collect();
    let faculty: HashMap<&str, &Faculty> =
        input.faculty.iter().map(|f| (f.id.as_str(), f)).collect();
    let rooms: HashMap<&str, &Room> = input
        .classrooms
        .iter()
        .chain(&input.laboratories)
        .map(|r| (r.id.as_str(), r))
        .collect();

    let mut room_cells = HashSet::new();
    let mut faculty_cells = HashSet::new();
    let mut run_load: HashMap<&str, u32> = HashMap::new();

    for class in &tt.classes {
        let mut class_load: HashMap<&str, u32> = HashMap::new();
        for (cell, s) in class.schedule.sessions() {
            let subject = subjects[s.subject_id.as_str()];
            let teacher = faculty[s.faculty_id.as_str()];
            let room = rooms[s.room_id.as_str()];
            let day = &tt.working_days[cell.day];

            prop_assert!(cell.slot < input.max_classes_per_day);
            prop_assert!(teacher.is_qualified_for(&subject.id));
            prop_assert!(teacher.is_available_on(day));
            prop_assert!(room.accepts(subject));
            prop_assert!(room.capacity >= class.class.strength);
            prop_assert!(room_cells.insert((room.id.clone(), cell)), "room double-booked");
            if input.options.prevent_faculty_clash {
                prop_assert!(
                    faculty_cells.insert((teacher.id.clone(), cell)),
                    "faculty double-booked"
                );
            }

            *class_load.entry(teacher.id.as_str()).or_default() += 1;
            *run_load.entry(teacher.id.as_str()).or_default() += 1;
        }

        for (id, load) in &class_load {
            prop_assert!(*load <= faculty[id].max_hours_per_week);
        }
        for subject in &input.subjects {
            let placed = class.schedule.sessions_of_subject(&subject.id) as u32;
            prop_assert!(placed <= subject.hours_per_week);
        }
    }

    if input.options.workload_scope == WorkloadScope::Run {
        for (id, load) in &run_load {
            prop_assert!(*load <= faculty[id].max_hours_per_week);
        }
    }

    let per_class: u32 = input.subjects.iter().map(|s| s.hours_per_week).sum();
    let requested = per_class * input.classes.len() as u32;
    prop_assert_eq!(tt.stats.scheduled_sessions + tt.stats.unmet_hours, requested);
    prop_assert!(tt.stats.room_utilization <= 100);
    if rooms.is_empty() || input.subjects.is_empty() {
        prop_assert_eq!(tt.stats.scheduled_sessions, 0);
        prop_assert_eq!(tt.stats.room_utilization, 0);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_hard_constraints_hold(input in arb_input()) {
        let tt = TimetableGenerator::new().generate(&input);
        check_hard_constraints(&input, &tt)?;
    }

    #[test]
    fn prop_same_seed_same_timetable(input in arb_input()) {
        let a = TimetableGenerator::new().generate(&input);
        let b = TimetableGenerator::new().generate(&input);
        prop_assert_eq!(a.classes, b.classes);
        prop_assert_eq!(a.stats, b.stats);
    }
}
