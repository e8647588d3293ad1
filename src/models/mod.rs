//! Timetabling domain models.
//!
//! Provides the input entities consumed by the generator and the
//! per-class schedule it produces.
//!
//! # Domain Mappings
//!
//! | u-timetable | Generic scheduling |
//! |-------------|--------------------|
//! | ClassGroup | Task (one per cohort) |
//! | Subject | Activity demand (sessions per week) |
//! | Faculty | Human resource with skills and calendar |
//! | Room | Primary resource with capacity |
//! | Session | Assignment |
//! | Calendar | Discrete time grid |

mod calendar;
mod class_group;
mod faculty;
mod room;
mod schedule;
mod subject;

pub use calendar::{
    default_time_slots, default_working_days, Calendar, Cell, TimeSlot, DEFAULT_TIME_SLOTS,
    DEFAULT_WORKING_DAYS,
};
pub use class_group::ClassGroup;
pub use faculty::Faculty;
pub use room::{Room, LAB_MARKER};
pub use schedule::{Schedule, ScheduleRow, Session};
pub use subject::{Subject, LAB_SUBJECT_TYPE};
