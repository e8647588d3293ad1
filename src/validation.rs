//! Input validation for timetable generation.
//!
//! The generator accepts any input and degrades to partial schedules, so
//! validation is an optional pre-check for callers that prefer to reject
//! suspicious input up front. Detects:
//! - Duplicate IDs (rooms across both lists, subjects, faculty, classes)
//! - Duplicate working-day names
//! - Faculty qualified for subjects that do not exist
//! - Faculty availability naming days outside the calendar
//! - Time slots whose end is not after their start
//! - Time slots that overlap each other

use std::collections::HashSet;

use crate::config::TimetableInput;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// A day name appears twice in the calendar.
    DuplicateDay,
    /// A faculty member lists a subject ID that doesn't exist.
    InvalidSubjectReference,
    /// A faculty member lists a day that isn't a working day.
    UnknownDay,
    /// A slot ends at or before its start.
    MalformedTimeSlot,
    /// Two slots share wall-clock time.
    OverlappingTimeSlots,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a generation request.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(input: &TimetableInput) -> ValidationResult {
    let mut errors = Vec::new();

    check_unique(
        "room",
        input.classrooms.iter().chain(&input.laboratories).map(|r| r.id.as_str()),
        &mut errors,
    );
    check_unique("subject", input.subjects.iter().map(|s| s.id.as_str()), &mut errors);
    check_unique("faculty", input.faculty.iter().map(|f| f.id.as_str()), &mut errors);
    check_unique("class", input.classes.iter().map(|c| c.id.as_str()), &mut errors);

    let mut days = HashSet::new();
    for day in &input.working_days {
        if !days.insert(day.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDay,
                format!("Duplicate working day: {day}"),
            ));
        }
    }

    let subject_ids: HashSet<&str> = input.subjects.iter().map(|s| s.id.as_str()).collect();
    for f in &input.faculty {
        for subject in &f.subjects {
            if !subject_ids.contains(subject.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidSubjectReference,
                    format!("Faculty '{}' references unknown subject '{}'", f.id, subject),
                ));
            }
        }
        for day in &f.available_days {
            if !days.contains(day.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDay,
                    format!("Faculty '{}' lists unknown day '{}'", f.id, day),
                ));
            }
        }
    }

    for (i, slot) in input.time_slots.iter().enumerate() {
        if !slot.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTimeSlot,
                format!("Time slot {i} ({slot}) does not end after it starts"),
            ));
        }
    }

    for (i, a) in input.time_slots.iter().enumerate() {
        for (j, b) in input.time_slots.iter().enumerate().skip(i + 1) {
            if a.is_well_formed() && b.is_well_formed() && a.overlaps(b) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingTimeSlots,
                    format!("Time slots {i} ({a}) and {j} ({b}) overlap"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_unique<'a>(
    entity: &str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
}
