//! doctor11-report
//!
//! Report text composition and export (plain text, DOCX).

pub mod compose;
pub mod docx;
pub mod error;
pub mod export;
pub mod styles;
pub mod tags;

pub use compose::compose_report;
pub use tags::report_tags;
