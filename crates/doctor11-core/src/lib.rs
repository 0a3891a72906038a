//! doctor11-core
//!
//! Pure domain types for the Doctor-11 report assistant: anamnesis and
//! status-praesens section keys, report input data and vital signs.
//! No I/O — this is the shared vocabulary of the other crates.

pub mod error;
pub mod models;
