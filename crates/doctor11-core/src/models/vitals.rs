use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Vital-sign keys in report order.
pub const VITAL_KEYS: [&str; 6] = ["TK", "TF", "SpO2", "TT", "RF", "GCS"];

/// Blood pressure as entered, systolic over diastolic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct BloodPressure {
    pub systolic: String,
    pub diastolic: String,
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic.trim(), self.diastolic.trim())
    }
}

/// Vital signs exactly as typed into the form. Values are display strings,
/// not parsed measurements; interpretation parses them separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Vitals {
    /// TK (mmHg).
    pub blood_pressure: BloodPressure,
    /// TF (/min).
    pub heart_rate: String,
    /// SpO2 (%).
    pub spo2: String,
    /// TT (°C).
    pub temperature: String,
    /// RF (/min).
    pub respiratory_rate: String,
    pub gcs: String,
    /// Free-text summary printed under the values when non-empty.
    pub interpretation: String,
}

impl Vitals {
    /// `(key, raw value)` pairs in [`VITAL_KEYS`] order.
    pub fn entries(&self) -> [(&'static str, String); 6] {
        [
            (VITAL_KEYS[0], self.blood_pressure.to_string()),
            (VITAL_KEYS[1], self.heart_rate.trim().to_string()),
            (VITAL_KEYS[2], self.spo2.trim().to_string()),
            (VITAL_KEYS[3], self.temperature.trim().to_string()),
            (VITAL_KEYS[4], self.respiratory_rate.trim().to_string()),
            (VITAL_KEYS[5], self.gcs.trim().to_string()),
        ]
    }
}
