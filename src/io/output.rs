//! CSV report adapter.
//!
//! Serializes the timetable as a five-column CSV report: one header row,
//! then one row per committed slot, in accumulator order.

use std::fs;
use std::path::Path;

use crate::error::TimetableError;
use crate::models::Timetable;

/// Column headers of the timetable report.
const HEADERS: [&str; 5] = ["Course", "Lecturer", "Room", "Start Time", "End Time"];

/// Writes the timetable report, creating the parent directory if absent.
///
/// # Errors
/// [`TimetableError::CreateOutputDir`] or [`TimetableError::WriteOutput`]
/// when the destination is not writable. Both are fatal to the run.
pub fn write_csv(timetable: &Timetable, path: impl AsRef<Path>) -> Result<(), TimetableError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| TimetableError::CreateOutputDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    write_rows(timetable, path).map_err(|source| TimetableError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

fn write_rows(timetable: &Timetable, path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADERS)?;
    for slot in timetable.slots() {
        writer.write_record([
            slot.course_code.as_str(),
            slot.lecturer.as_str(),
            slot.room.as_str(),
            slot.start_time.as_str(),
            slot.end_time.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
