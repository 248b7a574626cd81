//! Lecturer model.
//!
//! Lecturers are shared resources: scheduling a course consumes hours of
//! the lecturer's daily workload and one of their available timeslots.
//! The scheduler is the only writer; it applies both updates through
//! [`Lecturer::commit_assignment`] when a course is placed.

use serde::{Deserialize, Serialize};

use super::timeslot;

/// A lecturer who can be assigned to courses.
///
/// Courses reference lecturers by `name`, not by `id`. The workload field
/// accumulates the hours assigned during the current scheduling run and is
/// capped by [`crate::constraints::MAX_DAILY_WORKLOAD`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecturer {
    /// Unique lecturer identifier.
    pub id: String,
    /// Lecturer name, the join key used by [`super::Course::lecturer`].
    pub name: String,
    /// Hours of teaching assigned so far.
    pub workload: i64,
    /// Timeslots the lecturer is still free to teach in.
    pub available_timeslots: Vec<String>,
}

impl Lecturer {
    /// Creates a new lecturer with no workload and no availability.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            workload: 0,
            available_timeslots: Vec::new(),
        }
    }

    /// Sets the starting workload in hours.
    pub fn with_workload(mut self, hours: i64) -> Self {
        self.workload = hours;
        self
    }

    /// Adds an available timeslot.
    pub fn with_timeslot(mut self, timeslot: impl Into<String>) -> Self {
        self.available_timeslots.push(timeslot.into());
        self
    }

    /// Sets the full availability list.
    pub fn with_timeslots(mut self, timeslots: Vec<String>) -> Self {
        self.available_timeslots = timeslots;
        self
    }

    /// Whether the lecturer is still free at the given timeslot.
    pub fn is_available_at(&self, timeslot: &str) -> bool {
        self.available_timeslots.iter().any(|t| t == timeslot)
    }

    /// Records a committed assignment: adds the course's hours to the
    /// workload and releases the used timeslot from availability.
    pub fn commit_assignment(&mut self, duration: i64, timeslot: &str) {
        self.workload += duration;
        timeslot::release(&mut self.available_timeslots, timeslot);
    }
}
