pub mod report;
pub mod section;
pub mod vitals;
