//! Crate error type.
//!
//! Only unrecoverable conditions surface here: broken lecturer
//! references and I/O failures. Constraint violations are not errors;
//! they are ordinary scheduling outcomes reported by
//! [`crate::constraints`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a scheduling run.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// A course names a lecturer missing from the lecturer table. The run
    /// cannot produce a correct schedule without it, so no recovery is
    /// attempted.
    #[error("course '{course}' references unknown lecturer '{lecturer}'")]
    UnknownLecturer { course: String, lecturer: String },

    /// The input file could not be opened or read.
    #[error("failed to read input file '{}'", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid JSON or does not match the expected shape.
    #[error("malformed input file '{}'", .path.display())]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory '{}'", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The timetable report could not be written.
    #[error("failed to write timetable to '{}'", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
