use serde::{Deserialize, Serialize};
use ts_rs::TS;

use doctor11_core::models::vitals::Vitals;

use crate::parse_measurement;

/// SpO2 below this (in %) is flagged.
pub const SPO2_LOW_BELOW: f64 = 90.0;

/// Heart rate above this (per minute) is flagged.
pub const HEART_RATE_HIGH_ABOVE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalFinding {
    LowSaturation,
    RaisedHeartRate,
}

impl VitalFinding {
    pub fn message(self) -> &'static str {
        match self {
            VitalFinding::LowSaturation => "Saturace nízká",
            VitalFinding::RaisedHeartRate => "Tepová frekvence zvýšená",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsAssessment {
    pub findings: Vec<VitalFinding>,
}

impl VitalsAssessment {
    /// Findings joined with `"; "`, empty when nothing is flagged.
    pub fn summary(&self) -> String {
        self.findings
            .iter()
            .map(|f| f.message())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Whether the field behind `finding` should be highlighted.
    pub fn is_flagged(&self, finding: VitalFinding) -> bool {
        self.findings.contains(&finding)
    }
}

/// Flag low saturation and raised heart rate. Values that do not parse
/// are skipped.
pub fn interpret_vitals(vitals: &Vitals) -> VitalsAssessment {
    let mut findings = Vec::new();
    if parse_measurement(&vitals.spo2).is_some_and(|spo2| spo2 < SPO2_LOW_BELOW) {
        findings.push(VitalFinding::LowSaturation);
    }
    if parse_measurement(&vitals.heart_rate).is_some_and(|hr| hr > HEART_RATE_HIGH_ABOVE) {
        findings.push(VitalFinding::RaisedHeartRate);
    }
    VitalsAssessment { findings }
}
