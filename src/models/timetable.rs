//! Timetable (solution) model.
//!
//! A timetable is the ordered, append-only record of committed
//! assignments. Order is scheduling order: it reflects which course
//! claimed contested resources first.

use serde::{Deserialize, Serialize};

use super::timeslot::split_times;
use super::{Course, Lecturer, Room};

/// One committed assignment: a course placed in a room with its lecturer.
///
/// Slots are immutable snapshots taken at commit time. Start and end are
/// derived by splitting the course's timeslot string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableSlot {
    /// Code of the scheduled course.
    pub course_code: String,
    /// Name of the assigned lecturer.
    pub lecturer: String,
    /// Id of the assigned room.
    pub room: String,
    /// Start of the interval, e.g. "Monday 9:00".
    pub start_time: String,
    /// End of the interval, e.g. "11:00".
    pub end_time: String,
}

impl TimetableSlot {
    /// Creates a slot from a satisfying candidate.
    pub fn new(course: &Course, lecturer: &Lecturer, room: &Room) -> Self {
        let (start_time, end_time) = split_times(&course.timeslot);
        Self {
            course_code: course.code.clone(),
            lecturer: lecturer.name.clone(),
            room: room.id.clone(),
            start_time,
            end_time,
        }
    }
}

/// Append-only accumulator of committed slots.
///
/// Slots are never removed or reordered; the accumulator exists to be
/// serialized at the end of a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    slots: Vec<TimetableSlot>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a committed slot.
    pub fn add_slot(&mut self, slot: TimetableSlot) {
        self.slots.push(slot);
    }

    /// The committed slots, in scheduling order.
    pub fn slots(&self) -> &[TimetableSlot] {
        &self.slots
    }

    /// Number of committed slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether no course has been scheduled.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
