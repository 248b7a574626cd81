//! Course model.
//!
//! A course is the unit of scheduling. It names the lecturer who teaches
//! it, lists the student groups it serves, and pins the single weekly
//! timeslot it must occupy.

use serde::{Deserialize, Serialize};

/// A course to be placed on the timetable.
///
/// Courses are immutable once constructed. The lecturer is referenced by
/// name and the student groups by id; both are resolved against the run's
/// resource tables at scheduling time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (natural key), e.g. "CS101".
    pub code: String,
    /// Display name, e.g. "Introduction to Programming".
    pub name: String,
    /// Name of the lecturer who teaches this course.
    pub lecturer: String,
    /// Ids of the student groups that take this course, in priority order.
    pub student_groups: Vec<String>,
    /// Teaching duration in hours.
    pub duration: i64,
    /// Required timeslot, e.g. "Monday 9:00-11:00".
    pub timeslot: String,
}

impl Course {
    /// Creates a new course.
    pub fn new(
        code: impl Into<String>,
        lecturer: impl Into<String>,
        duration: i64,
        timeslot: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            lecturer: lecturer.into(),
            student_groups: Vec::new(),
            duration,
            timeslot: timeslot.into(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a student group id.
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.student_groups.push(group_id.into());
        self
    }

    /// Sets the full student group list.
    pub fn with_groups(mut self, group_ids: Vec<String>) -> Self {
        self.student_groups = group_ids;
        self
    }
}
