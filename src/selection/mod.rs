//! Candidate selection rules.
//!
//! Once the allocator has filtered faculty and rooms down to the eligible
//! ones for a cell, a [`Selector`] picks one. Rules score candidates and
//! the lowest score wins; candidates that tie on every rule keep their
//! input order, so the built-in [`rules::FirstFit`] reproduces plain
//! first-fit selection.
//!
//! # Usage
//!
//! ```
//! use u_timetable::models::Room;
//! use u_timetable::scheduler::Workload;
//! use u_timetable::selection::{rules, SelectionContext, Selector};
//!
//! let rooms = vec![
//!     Room::classroom("R1").with_capacity(120),
//!     Room::classroom("R2").with_capacity(45),
//! ];
//! let workload = Workload::new();
//! let ctx = SelectionContext::new(40, &workload);
//!
//! let best_fit = Selector::new(rules::BestFitCapacity);
//! assert_eq!(best_fit.select(&rooms, &ctx).map(|r| r.id.as_str()), Some("R2"));
//!
//! let first_fit = Selector::<Room>::first_fit();
//! assert_eq!(first_fit.select(&rooms, &ctx).map(|r| r.id.as_str()), Some("R1"));
//! ```

pub mod rules;

use std::cmp::Ordering;
use std::fmt::Debug;
use std::sync::Arc;

use crate::config::{FacultySelection, RoomSelection};
use crate::models::{Faculty, Room};
use crate::scheduler::Workload;

/// Score returned by a selection rule.
///
/// Lower scores = preferred candidate.
pub type RuleScore = f64;

/// Allocation state visible to selection rules.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    /// Headcount of the class being allocated.
    pub class_strength: u32,
    /// Sessions assigned per faculty so far (in the active workload scope).
    pub workload: &'a Workload,
}

impl<'a> SelectionContext<'a> {
    /// Creates a context.
    pub fn new(class_strength: u32, workload: &'a Workload) -> Self {
        Self {
            class_strength,
            workload,
        }
    }
}

/// A rule that scores one kind of candidate.
///
/// # Score Convention
/// **Lower score = preferred.**
pub trait SelectionRule<T>: Send + Sync + Debug {
    /// Rule name (e.g., "FIRST_FIT").
    fn name(&self) -> &'static str;

    /// Scores a candidate in the given context.
    fn evaluate(&self, candidate: &T, context: &SelectionContext<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Picks one candidate out of an eligible set.
///
/// Rules are applied in sequence: a later rule only matters when every
/// earlier rule scores two candidates equally.
pub struct Selector<T> {
    rules: Vec<Arc<dyn SelectionRule<T>>>,
    epsilon: f64,
}

impl<T: 'static> Selector<T> {
    /// Creates a selector driven by one primary rule.
    pub fn new<R: SelectionRule<T> + 'static>(rule: R) -> Self {
        Self {
            rules: vec![Arc::new(rule)],
            epsilon: 1e-9,
        }
    }

    /// Creates a first-fit selector (input order wins).
    pub fn first_fit() -> Self {
        Self::new(rules::FirstFit)
    }

    /// Appends a tie-breaking rule.
    pub fn with_tie_breaker<R: SelectionRule<T> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, primary first.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the preferred candidate, or `None` if there are none.
    ///
    /// Among equally scored candidates the earliest one wins.
    pub fn select<'c, I>(&self, candidates: I, context: &SelectionContext<'_>) -> Option<&'c T>
    where
        I: IntoIterator<Item = &'c T>,
    {
        let mut best: Option<&'c T> = None;
        for candidate in candidates {
            match best {
                Some(current) if self.compare(candidate, current, context) != Ordering::Less => {}
                _ => best = Some(candidate),
            }
        }
        best
    }

    fn compare(&self, a: &T, b: &T, context: &SelectionContext<'_>) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }
        Ordering::Equal
    }
}

impl<T: 'static> Default for Selector<T> {
    fn default() -> Self {
        Self::first_fit()
    }
}

impl<T> Clone for Selector<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            epsilon: self.epsilon,
        }
    }
}

impl<T> Debug for Selector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selector")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl From<FacultySelection> for Selector<Faculty> {
    fn from(selection: FacultySelection) -> Self {
        match selection {
            FacultySelection::FirstFit => Selector::first_fit(),
            FacultySelection::LeastLoaded => Selector::new(rules::LeastLoaded),
        }
    }
}

impl From<RoomSelection> for Selector<Room> {
    fn from(selection: RoomSelection) -> Self {
        match selection {
            RoomSelection::FirstFit => Selector::first_fit(),
            RoomSelection::BestFit => Selector::new(rules::BestFitCapacity),
        }
    }
}
