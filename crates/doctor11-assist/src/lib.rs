//! doctor11-assist
//!
//! Bedside helpers around the report form: diagnosis suggestion from the
//! present-illness text, vital-sign and laboratory interpretation,
//! toxicology therapy hints and the Glasgow Coma Scale calculator.
//! Threshold and keyword rules only; each function is pure except
//! [`labs::load_lab_values`].

pub mod error;
pub mod gcs;
pub mod labs;
pub mod suggest;
pub mod toxicology;
pub mod vitals;

/// Parse a measurement typed by hand, accepting a decimal comma.
pub(crate) fn parse_measurement(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse().ok()
}
