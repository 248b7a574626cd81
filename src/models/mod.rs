//! Timetabling domain models.
//!
//! Plain records with identity and mutable resource state. Courses and
//! student groups are immutable after construction; lecturers and rooms
//! carry the availability and workload state that scheduling consumes.
//! All domain logic lives in [`crate::constraints`] and
//! [`crate::scheduler`].

mod course;
mod lecturer;
mod room;
mod student_group;
pub mod timeslot;
mod timetable;

pub use course::Course;
pub use lecturer::Lecturer;
pub use room::Room;
pub use student_group::StudentGroup;
pub use timetable::{Timetable, TimetableSlot};
