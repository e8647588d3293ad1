//! Per-subject allocation outcomes and shortfall reporting.
//!
//! The allocator never fails; when a subject cannot get all of its weekly
//! sessions it simply places fewer. These types make that gap visible:
//! one [`SubjectOutcome`] per (class, subject) pair, with counters for why
//! candidate cells were passed over.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a subject received fewer sessions than requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShortfallReason {
    /// Nobody is qualified to teach the subject.
    NoQualifiedFaculty,
    /// Qualified faculty were off that day, at their cap, or already
    /// teaching elsewhere at the cell.
    FacultyUnavailable,
    /// No compatible room with enough seats was free.
    RoomsUnavailable,
    /// Every candidate cell was tried or already filled by this class.
    CandidatesExhausted,
}

impl fmt::Display for ShortfallReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoQualifiedFaculty => "no qualified faculty",
            Self::FacultyUnavailable => "faculty unavailable",
            Self::RoomsUnavailable => "no suitable room free",
            Self::CandidatesExhausted => "candidate cells exhausted",
        };
        f.write_str(text)
    }
}

/// What happened to one subject for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectOutcome {
    /// Class group ID.
    pub class_id: String,
    /// Subject ID.
    pub subject_id: String,
    /// Subject code.
    pub subject_code: String,
    /// Requested sessions (`hoursPerWeek`).
    pub requested: u32,
    /// Sessions actually placed.
    pub placed: u32,
    /// Faculty qualified for the subject.
    pub qualified_faculty: usize,
    /// Candidate cells skipped because the class already had a session there.
    pub skipped_occupied: u32,
    /// Candidate cells skipped for lack of an eligible faculty member.
    pub skipped_no_faculty: u32,
    /// Candidate cells skipped for lack of an eligible room.
    pub skipped_no_room: u32,
}

impl SubjectOutcome {
    /// Creates an outcome with nothing placed yet.
    pub fn new(
        class_id: impl Into<String>,
        subject_id: impl Into<String>,
        subject_code: impl Into<String>,
        requested: u32,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            subject_id: subject_id.into(),
            subject_code: subject_code.into(),
            requested,
            placed: 0,
            qualified_faculty: 0,
            skipped_occupied: 0,
            skipped_no_faculty: 0,
            skipped_no_room: 0,
        }
    }

    /// Unmet sessions.
    #[inline]
    pub fn shortfall(&self) -> u32 {
        self.requested.saturating_sub(self.placed)
    }

    /// Whether every requested session was placed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.shortfall() == 0
    }

    /// Dominant cause of the shortfall, or `None` when complete.
    ///
    /// When both faculty and rooms blocked cells, the larger counter wins
    /// (faculty on a tie).
    pub fn reason(&self) -> Option<ShortfallReason> {
        if self.is_complete() {
            return None;
        }
        if self.qualified_faculty == 0 {
            return Some(ShortfallReason::NoQualifiedFaculty);
        }
        let reason = match (self.skipped_no_faculty, self.skipped_no_room) {
            (0, 0) => ShortfallReason::CandidatesExhausted,
            (faculty, room) if faculty >= room => ShortfallReason::FacultyUnavailable,
            _ => ShortfallReason::RoomsUnavailable,
        };
        Some(reason)
    }
}

/// One unmet demand entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortfall {
    /// Class group ID.
    pub class_id: String,
    /// Subject ID.
    pub subject_id: String,
    /// Subject code.
    pub subject_code: String,
    /// Requested sessions.
    pub requested: u32,
    /// Placed sessions.
    pub placed: u32,
    /// Dominant cause.
    pub reason: ShortfallReason,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "class {} / subject {}: {}/{} placed ({})",
            self.class_id, self.subject_id, self.placed, self.requested, self.reason
        )
    }
}

/// All subject outcomes of a run, in allocation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationReport {
    outcomes: Vec<SubjectOutcome>,
}

impl AllocationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends outcomes.
    pub fn extend(&mut self, outcomes: impl IntoIterator<Item = SubjectOutcome>) {
        self.outcomes.extend(outcomes);
    }

    /// Every outcome, complete or not.
    pub fn outcomes(&self) -> &[SubjectOutcome] {
        &self.outcomes
    }

    /// Outcome of one subject for one class.
    pub fn outcome(&self, class_id: &str, subject_id: &str) -> Option<&SubjectOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.class_id == class_id && o.subject_id == subject_id)
    }

    /// Incomplete outcomes as shortfall entries.
    pub fn shortfalls(&self) -> Vec<Shortfall> {
        self.outcomes
            .iter()
            .filter_map(|o| {
                o.reason().map(|reason| Shortfall {
                    class_id: o.class_id.clone(),
                    subject_id: o.subject_id.clone(),
                    subject_code: o.subject_code.clone(),
                    requested: o.requested,
                    placed: o.placed,
                    reason,
                })
            })
            .collect()
    }

    /// Total unmet sessions.
    pub fn unmet_hours(&self) -> u32 {
        self.outcomes.iter().map(SubjectOutcome::shortfall).sum()
    }

    /// Total placed sessions.
    pub fn placed(&self) -> u32 {
        self.outcomes.iter().map(|o| o.placed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(
        requested: u32,
        placed: u32,
        qualified: usize,
        no_fac: u32,
        no_room: u32,
    ) -> SubjectOutcome {
        let mut o = SubjectOutcome::new("C1", "S1", "CS101", requested);
        o.placed = placed;
        o.qualified_faculty = qualified;
        o.skipped_no_faculty = no_fac;
        o.skipped_no_room = no_room;
        o
    }

    #[test]
    fn test_complete_has_no_reason() {
        let o = outcome(3, 3, 1, 5, 5);
        assert!(o.is_complete());
        assert_eq!(o.reason(), None);

        let zero = outcome(0, 0, 0, 0, 0);
        assert_eq!(zero.reason(), None);
    }

    #[test]
    fn test_reason_classification() {
        assert_eq!(outcome(2, 0, 0, 0, 0).reason(), Some(ShortfallReason::NoQualifiedFaculty));
        assert_eq!(outcome(2, 1, 1, 0, 0).reason(), Some(ShortfallReason::CandidatesExhausted));
        assert_eq!(outcome(2, 1, 1, 4, 1).reason(), Some(ShortfallReason::FacultyUnavailable));
        assert_eq!(outcome(2, 1, 1, 2, 2).reason(), Some(ShortfallReason::FacultyUnavailable));
        assert_eq!(outcome(2, 0, 2, 0, 30).reason(), Some(ShortfallReason::RoomsUnavailable));
    }

    #[test]
    fn test_report_aggregates() {
        let mut report = AllocationReport::new();
        report.extend(vec![outcome(3, 3, 1, 0, 0), outcome(4, 1, 1, 0, 7)]);
        let mut other = outcome(2, 0, 0, 0, 0);
        other.subject_id = "S2".into();
        report.extend([other]);

        assert_eq!(report.unmet_hours(), 5);
        assert_eq!(report.placed(), 4);

        let shortfalls = report.shortfalls();
        assert_eq!(shortfalls.len(), 2);
        assert_eq!(shortfalls[0].reason, ShortfallReason::RoomsUnavailable);
        assert_eq!(shortfalls[1].subject_id, "S2");
        assert_eq!(
            shortfalls[1].to_string(),
            "class C1 / subject S2: 0/2 placed (no qualified faculty)"
        );
        assert!(report.outcome("C1", "S2").is_some());
        assert!(report.outcome("C9", "S1").is_none());
    }
}
