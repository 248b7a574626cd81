//! Built-in seed records and input concatenation.
//!
//! The program ships a small default dataset; records loaded from the
//! input file are appended after it. The resulting order is significant:
//! first-fit scheduling gives earlier records first claim on contested
//! rooms and timeslots, so the concatenation step is explicit rather
//! than hidden in construction.

use crate::models::{Course, Lecturer, Room, StudentGroup};

/// The four entity collections a scheduling run consumes.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub courses: Vec<Course>,
    pub lecturers: Vec<Lecturer>,
    pub rooms: Vec<Room>,
    pub student_groups: Vec<StudentGroup>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in seed records.
    ///
    /// Lecturers start at workload 0: the workload field counts hours
    /// assigned during the current run (see DESIGN.md).
    pub fn seed() -> Self {
        Self {
            courses: vec![
                Course::new("CS101", "Dr. Smith", 2, "Monday 9:00-11:00")
                    .with_name("Introduction to Programming")
                    .with_group("Group A")
                    .with_group("Group B"),
                Course::new("CS201", "Dr. Johnson", 3, "Monday 11:00-14:00")
                    .with_name("Data Structures")
                    .with_group("Group A"),
                Course::new("MATH101", "Prof. Adams", 1, "Tuesday 9:00-10:00")
                    .with_name("Calculus I")
                    .with_group("Group B"),
            ],
            lecturers: vec![
                Lecturer::new("1", "Dr. Smith")
                    .with_timeslot("Monday 9:00-11:00")
                    .with_timeslot("Wednesday 9:00-11:00"),
                Lecturer::new("2", "Dr. Johnson")
                    .with_timeslot("Monday 11:00-14:00")
                    .with_timeslot("Thursday 10:00-13:00"),
                Lecturer::new("3", "Prof. Adams")
                    .with_timeslot("Tuesday 9:00-10:00")
                    .with_timeslot("Thursday 9:00-10:00"),
            ],
            rooms: vec![
                Room::new("Room 101", 50).with_timeslot("Monday 9:00-11:00"),
                Room::new("Room 102", 50).with_timeslot("Monday 11:00-14:00"),
                Room::new("Room 103", 50).with_timeslot("Tuesday 9:00-10:00"),
            ],
            student_groups: vec![
                StudentGroup::new("Group A", 40)
                    .with_course("CS101")
                    .with_course("CS201"),
                StudentGroup::new("Group B", 35)
                    .with_course("CS101")
                    .with_course("MATH101"),
            ],
        }
    }

    /// Appends loaded records after the existing ones, preserving order
    /// within each collection.
    pub fn extend(&mut self, loaded: Dataset) {
        self.courses.extend(loaded.courses);
        self.lecturers.extend(loaded.lecturers);
        self.rooms.extend(loaded.rooms);
        self.student_groups.extend(loaded.student_groups);
    }
}
