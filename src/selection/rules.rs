//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for preferred candidates.

use super::{RuleScore, SelectionContext, SelectionRule};
use crate::models::{Faculty, Room};

/// First eligible candidate in input order.
///
/// Scores every candidate equally; the selector's stable tie handling
/// does the rest.
#[derive(Debug, Clone, Copy)]
pub struct FirstFit;

impl<T> SelectionRule<T> for FirstFit {
    fn name(&self) -> &'static str {
        "FIRST_FIT"
    }

    fn evaluate(&self, _candidate: &T, _context: &SelectionContext<'_>) -> RuleScore {
        0.0
    }

    fn description(&self) -> &'static str {
        "First eligible candidate in input order"
    }
}

/// Faculty with the fewest sessions assigned so far.
///
/// Spreads teaching load instead of exhausting the first qualified
/// person before touching the next.
#[derive(Debug, Clone, Copy)]
pub struct LeastLoaded;

impl SelectionRule<Faculty> for LeastLoaded {
    fn name(&self) -> &'static str {
        "LEAST_LOADED"
    }

    fn evaluate(&self, faculty: &Faculty, context: &SelectionContext<'_>) -> RuleScore {
        context.workload.count(&faculty.id) as f64
    }

    fn description(&self) -> &'static str {
        "Fewest sessions assigned"
    }
}

/// Room with the fewest spare seats for the class.
///
/// Keeps large halls free for large classes.
#[derive(Debug, Clone, Copy)]
pub struct BestFitCapacity;

impl SelectionRule<Room> for BestFitCapacity {
    fn name(&self) -> &'static str {
        "BEST_FIT"
    }

    fn evaluate(&self, room: &Room, context: &SelectionContext<'_>) -> RuleScore {
        room.capacity as f64 - context.class_strength as f64
    }

    fn description(&self) -> &'static str {
        "Smallest room that seats the class"
    }
}

/// General rooms before laboratories.
#[derive(Debug, Clone, Copy)]
pub struct LabsLast;

impl SelectionRule<Room> for LabsLast {
    fn name(&self) -> &'static str {
        "LABS_LAST"
    }

    fn evaluate(&self, room: &Room, _context: &SelectionContext<'_>) -> RuleScore {
        if room.is_lab() {
            1.0
        } else {
            0.0
        }
    }
}
