//! Hard constraint checks.
//!
//! A candidate assignment is the tuple (course, lecturer, room, student
//! group). It must satisfy four hard constraints, evaluated in a fixed
//! order with short-circuit on the first failure:
//!
//! 1. Room capacity: the group fits in the room.
//! 2. Lecturer workload: the course's hours keep the lecturer within the
//!    daily cap.
//! 3. Room availability: the room is free at the course's timeslot.
//! 4. Lecturer availability: the lecturer is free at the course's timeslot.
//!
//! The check is a pure function of its inputs' current field values. It
//! never mutates resource state; commits happen in the scheduler.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Course, Lecturer, Room, StudentGroup};

/// Daily teaching cap in hours. No assignment may push a lecturer's
/// accumulated workload past this limit.
pub const MAX_DAILY_WORKLOAD: i64 = 6;

/// A hard constraint violation.
///
/// Violations are expected, non-fatal outcomes: the scheduler reports
/// them and moves on to the next candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConstraintViolation {
    /// The student group does not fit in the room.
    #[error("room '{room}' capacity exceeded for group '{group}' ({students} students, capacity {capacity})")]
    RoomCapacityExceeded {
        room: String,
        group: String,
        students: i32,
        capacity: i32,
    },

    /// The assignment would push the lecturer past the daily cap.
    #[error("lecturer '{lecturer}' workload would exceed the daily cap (current {current}, adding {adding})")]
    WorkloadExceeded {
        lecturer: String,
        current: i64,
        adding: i64,
    },

    /// The room is not free at the course's timeslot.
    #[error("room '{room}' not available at '{timeslot}'")]
    RoomUnavailable { room: String, timeslot: String },

    /// The lecturer is not free at the course's timeslot.
    #[error("lecturer '{lecturer}' not available at '{timeslot}'")]
    LecturerUnavailable { lecturer: String, timeslot: String },
}

/// Checks all hard constraints for one candidate assignment.
///
/// Returns the first violation in the fixed evaluation order, or `Ok(())`
/// when the candidate satisfies every constraint.
pub fn check(
    course: &Course,
    lecturer: &Lecturer,
    room: &Room,
    group: &StudentGroup,
) -> Result<(), ConstraintViolation> {
    if group.students > room.capacity {
        return Err(ConstraintViolation::RoomCapacityExceeded {
            room: room.id.clone(),
            group: group.id.clone(),
            students: group.students,
            capacity: room.capacity,
        });
    }

    if lecturer.workload + course.duration > MAX_DAILY_WORKLOAD {
        return Err(ConstraintViolation::WorkloadExceeded {
            lecturer: lecturer.name.clone(),
            current: lecturer.workload,
            adding: course.duration,
        });
    }

    if !room.is_available_at(&course.timeslot) {
        return Err(ConstraintViolation::RoomUnavailable {
            room: room.id.clone(),
            timeslot: course.timeslot.clone(),
        });
    }

    if !lecturer.is_available_at(&course.timeslot) {
        return Err(ConstraintViolation::LecturerUnavailable {
            lecturer: lecturer.name.clone(),
            timeslot: course.timeslot.clone(),
        });
    }

    Ok(())
}
