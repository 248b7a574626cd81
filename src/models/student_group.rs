//! Student group model.
//!
//! Groups are immutable after construction; the scheduler only reads
//! their size for room capacity checks.

use serde::{Deserialize, Serialize};

/// A cohort of students that takes courses together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentGroup {
    /// Unique group identifier, e.g. "Group A".
    pub id: String,
    /// Number of students in the group.
    pub students: i32,
    /// Codes of the courses this group takes.
    pub courses: Vec<String>,
}

impl StudentGroup {
    /// Creates a new student group.
    pub fn new(id: impl Into<String>, students: i32) -> Self {
        Self {
            id: id.into(),
            students,
            courses: Vec::new(),
        }
    }

    /// Adds a course code.
    pub fn with_course(mut self, code: impl Into<String>) -> Self {
        self.courses.push(code.into());
        self
    }

    /// Sets the full course list.
    pub fn with_courses(mut self, codes: Vec<String>) -> Self {
        self.courses = codes;
        self
    }
}
