//! I/O adapters.
//!
//! The fixed-interface boundary around the scheduling core: a JSON input
//! loader and a CSV report writer. Failures here are fatal; the core
//! does not attempt partial recovery.

pub mod input;
pub mod output;

pub use input::load_input;
pub use output::write_csv;
