//! JSON input adapter.
//!
//! Deserializes the four input collections (`courses`, `lecturers`,
//! `rooms`, `student_groups`) into domain entities. Raw record types
//! mirror the input field names; the course display name may arrive under
//! `title` or `course_name`, and the first non-empty one wins.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::dataset::Dataset;
use crate::error::TimetableError;
use crate::models::{Course, Lecturer, Room, StudentGroup};

#[derive(Debug, Deserialize)]
struct InputFile {
    courses: Vec<CourseRecord>,
    lecturers: Vec<LecturerRecord>,
    rooms: Vec<RoomRecord>,
    student_groups: Vec<StudentGroupRecord>,
}

#[derive(Debug, Deserialize)]
struct CourseRecord {
    course_code: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    course_name: Option<String>,
    lecturer: String,
    student_groups: Vec<String>,
    duration: i64,
    timeslot: String,
}

#[derive(Debug, Deserialize)]
struct LecturerRecord {
    lecturer_id: String,
    name: String,
    workload: i64,
    available_timeslots: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RoomRecord {
    room_id: String,
    capacity: i32,
    available_timeslots: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct StudentGroupRecord {
    group_id: String,
    students: i32,
    courses: Vec<String>,
}

impl From<CourseRecord> for Course {
    fn from(rec: CourseRecord) -> Self {
        let name = rec
            .title
            .filter(|t| !t.is_empty())
            .or(rec.course_name)
            .unwrap_or_default();
        Course::new(rec.course_code, rec.lecturer, rec.duration, rec.timeslot)
            .with_name(name)
            .with_groups(rec.student_groups)
    }
}

impl From<LecturerRecord> for Lecturer {
    fn from(rec: LecturerRecord) -> Self {
        Lecturer::new(rec.lecturer_id, rec.name)
            .with_workload(rec.workload)
            .with_timeslots(rec.available_timeslots)
    }
}

impl From<RoomRecord> for Room {
    fn from(rec: RoomRecord) -> Self {
        Room::new(rec.room_id, rec.capacity).with_timeslots(rec.available_timeslots)
    }
}

impl From<StudentGroupRecord> for StudentGroup {
    fn from(rec: StudentGroupRecord) -> Self {
        StudentGroup::new(rec.group_id, rec.students).with_courses(rec.courses)
    }
}

/// Loads the four input collections from a JSON file.
///
/// # Errors
/// [`TimetableError::ReadInput`] when the file cannot be opened and
/// [`TimetableError::ParseInput`] when it does not match the expected
/// shape. Both are fatal to the run.
pub fn load_input(path: impl AsRef<Path>) -> Result<Dataset, TimetableError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TimetableError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let input: InputFile =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            TimetableError::ParseInput {
                path: path.to_path_buf(),
                source,
            }
        })?;

    Ok(Dataset {
        courses: input.courses.into_iter().map(Course::from).collect(),
        lecturers: input.lecturers.into_iter().map(Lecturer::from).collect(),
        rooms: input.rooms.into_iter().map(Room::from).collect(),
        student_groups: input
            .student_groups
            .into_iter()
            .map(StudentGroup::from)
            .collect(),
    })
}
