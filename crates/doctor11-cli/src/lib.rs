//! doctor11-cli library root.
//!
//! Re-exports the form controller pieces so integration tests can drive
//! them without going through the command-line layer.

pub mod config;
pub mod form;
pub mod state;
