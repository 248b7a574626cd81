//! Constraint-based university course timetabler.
//!
//! Assigns courses to timetable slots (room, lecturer, start/end time)
//! subject to hard constraints: room capacity, lecturer daily workload,
//! and room/lecturer timeslot availability. Selection is first-fit: the
//! first candidate satisfying every constraint is committed, and commits
//! immediately update the shared resource tables so later courses observe
//! the claimed capacity. There is no objective function and no
//! backtracking.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Lecturer`, `Room`,
//!   `StudentGroup`, `Timetable`, `TimetableSlot`
//! - **`constraints`**: Hard-constraint checks over candidate assignments
//! - **`scheduler`**: The first-fit engine and resource commit logic
//! - **`dataset`**: Built-in seed records and input concatenation
//! - **`validation`**: Advisory dataset diagnostics (duplicate keys,
//!   dangling references)
//! - **`io`**: JSON input / CSV report adapters
//! - **`error`**: The crate error type
//!
//! # Reference
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod constraints;
pub mod dataset;
pub mod error;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod validation;
