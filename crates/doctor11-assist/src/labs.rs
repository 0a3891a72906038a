use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::error::AssistError;
use crate::parse_measurement;

/// Reference range for a lab value, shown in the explanations legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRange {
    pub name: &'static str,
    pub unit: &'static str,
    pub low: f64,
    pub high: f64,
}

pub const CRP_RANGE: ReferenceRange = ReferenceRange {
    name: "CRP",
    unit: "mg/L",
    low: 0.0,
    high: 5.0,
};
pub const GLUCOSE_RANGE: ReferenceRange = ReferenceRange {
    name: "Glykémie",
    unit: "mmol/L",
    low: 3.9,
    high: 7.0,
};
pub const LACTATE_RANGE: ReferenceRange = ReferenceRange {
    name: "Laktát",
    unit: "mmol/L",
    low: 0.5,
    high: 2.0,
};
pub const PH_RANGE: ReferenceRange = ReferenceRange {
    name: "pH",
    unit: "",
    low: 7.35,
    high: 7.45,
};

pub const REFERENCE_RANGES: [ReferenceRange; 4] = [CRP_RANGE, GLUCOSE_RANGE, LACTATE_RANGE, PH_RANGE];

/// Lab values as typed or imported; parsing happens during interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct LabValues {
    /// mg/L
    pub crp: String,
    /// mmol/L
    pub glucose: String,
    /// mmol/L
    pub lactate: String,
    pub ph: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LabFinding {
    RaisedCrp,
    Hypoglycaemia,
    Hyperglycaemia,
    LacticAcidosis,
    Acidosis,
    Alkalosis,
}

impl LabFinding {
    pub fn message(self) -> &'static str {
        match self {
            LabFinding::RaisedCrp => "Zvýšené CRP – známka zánětu",
            LabFinding::Hypoglycaemia => "Hypoglykémie",
            LabFinding::Hyperglycaemia => "Hyperglykémie",
            LabFinding::LacticAcidosis => "Laktátová acidóza",
            LabFinding::Acidosis => "Acidóza",
            LabFinding::Alkalosis => "Alkalóza",
        }
    }
}

/// Compare each parsable value against its reference range. Only the
/// upper CRP and lactate bounds are clinically flagged.
pub fn interpret_labs(values: &LabValues) -> Vec<LabFinding> {
    let mut findings = Vec::new();

    if parse_measurement(&values.crp).is_some_and(|crp| crp > CRP_RANGE.high) {
        findings.push(LabFinding::RaisedCrp);
    }
    if let Some(glucose) = parse_measurement(&values.glucose) {
        if glucose < GLUCOSE_RANGE.low {
            findings.push(LabFinding::Hypoglycaemia);
        } else if glucose > GLUCOSE_RANGE.high {
            findings.push(LabFinding::Hyperglycaemia);
        }
    }
    if parse_measurement(&values.lactate).is_some_and(|lactate| lactate > LACTATE_RANGE.high) {
        findings.push(LabFinding::LacticAcidosis);
    }
    if let Some(ph) = parse_measurement(&values.ph) {
        if ph < PH_RANGE.low {
            findings.push(LabFinding::Acidosis);
        } else if ph > PH_RANGE.high {
            findings.push(LabFinding::Alkalosis);
        }
    }

    findings
}

/// Findings joined with `"; "`.
pub fn lab_summary(findings: &[LabFinding]) -> String {
    findings
        .iter()
        .map(|f| f.message())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Import lab values from a file. `.json` files hold one object keyed
/// `CRP`, `Glykémie` (or `Glucose`), `Laktát` and `pH`; anything else is
/// read as CSV with those keys as headers, using the first data row.
/// Missing keys leave the field empty.
pub fn load_lab_values(path: &Path) -> Result<LabValues, AssistError> {
    let contents = std::fs::read_to_string(path).map_err(|source| AssistError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let values = if is_json {
        lab_values_from_json(&contents)?
    } else {
        lab_values_from_csv(contents.as_bytes())?
    };
    tracing::debug!(path = %path.display(), "lab results loaded");
    Ok(values)
}

/// Values may be numbers or strings.
pub fn lab_values_from_json(json: &str) -> Result<LabValues, AssistError> {
    let value: Value = serde_json::from_str(json)?;
    let object = value.as_object().ok_or(AssistError::NotAnObject)?;
    Ok(from_object(object))
}

pub fn lab_values_from_csv(input: impl Read) -> Result<LabValues, AssistError> {
    let mut reader = csv::Reader::from_reader(input);
    let row = reader
        .deserialize::<HashMap<String, String>>()
        .next()
        .ok_or(AssistError::EmptyCsv)??;

    let object: Map<String, Value> = row
        .into_iter()
        .map(|(key, value)| (key.trim().to_string(), Value::String(value)))
        .collect();
    Ok(from_object(&object))
}

fn from_object(object: &Map<String, Value>) -> LabValues {
    LabValues {
        crp: field(object, &["CRP"]),
        glucose: field(object, &["Glykémie", "Glucose"]),
        lactate: field(object, &["Laktát"]),
        ph: field(object, &["pH"]),
    }
}

/// First non-null value among `keys`, as display text.
fn field(object: &Map<String, Value>, keys: &[&str]) -> String {
    match keys.iter().find_map(|key| object.get(*key).filter(|v| !v.is_null())) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
