use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Substances offered in the form's picker. Free text is accepted too.
pub const COMMON_SUBSTANCES: [&str; 5] = ["alkohol", "benzo", "opioid", "CO", "pesticidy"];

/// Estimated alcohol dose above which intoxication is treated as severe.
pub const SEVERE_ALCOHOL_DOSE: f64 = 3.0;

/// General measures suggested for every exposure.
pub const BASE_THERAPY: [&str; 3] = [
    "výplach žaludku (do 1h)",
    "aktivní uhlí 1g/kg",
    "antidota (naloxon, flumazenil, NAC...)",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ExposureRoute {
    #[serde(rename = "per os")]
    Oral,
    #[serde(rename = "inhalace")]
    Inhalation,
    #[serde(rename = "i.v.")]
    Intravenous,
    #[default]
    #[serde(rename = "neznámý")]
    Unknown,
}

/// What the patient was exposed to, as entered on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ToxExposure {
    pub substance: String,
    /// Free text such as "3,5 promile"; the numeric part is extracted.
    pub dose: String,
    /// HH:MM
    pub exposure_time: String,
    pub route: ExposureRoute,
    pub symptoms: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToxAssessment {
    pub findings: Vec<String>,
    pub therapy: Vec<String>,
}

impl ToxAssessment {
    pub fn summary(&self) -> String {
        self.findings.join("; ")
    }

    /// Therapy lines, one per line, ready to append to the therapy field.
    pub fn therapy_text(&self) -> String {
        self.therapy.join("\n")
    }
}

/// Numeric part of a free-text dose: digits and dots, decimal comma allowed.
fn dose_value(dose: &str) -> Option<f64> {
    dose.replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect::<String>()
        .parse()
        .ok()
}

pub fn assess_toxicology(exposure: &ToxExposure) -> ToxAssessment {
    let substance = exposure.substance.trim().to_lowercase();
    let symptoms = exposure.symptoms.to_lowercase();

    let mut assessment = ToxAssessment::default();

    if substance.contains("opioid") && (symptoms.contains("mioz") || symptoms.contains("poruch")) {
        assessment
            .findings
            .push("Podezření na opioidní intoxikaci – zvážit podání Naloxonu".to_string());
        assessment.therapy.push("Naloxon".to_string());
    }

    if substance.contains("alkohol")
        && dose_value(&exposure.dose).is_some_and(|dose| dose > SEVERE_ALCOHOL_DOSE)
    {
        assessment.findings.push(
            "Závažná etanolová intoxikace – monitorace, glukóza, thiamin, hydratace".to_string(),
        );
        assessment
            .therapy
            .push("monitorace, glukóza, thiamin, hydratace".to_string());
    }

    if substance == "co" || substance.starts_with("co ") {
        assessment
            .findings
            .push("Zvážit hyperbarickou komoru, 100% kyslík".to_string());
        assessment
            .therapy
            .push("hyperbarická komora, 100% kyslík".to_string());
    }

    assessment
        .therapy
        .extend(BASE_THERAPY.iter().map(|line| line.to_string()));
    assessment
}

/// Append suggested therapy to what is already in the therapy field,
/// starting on a new line.
pub fn append_therapy(existing: &str, addition: &str) -> String {
    if addition.is_empty() {
        return existing.to_string();
    }
    let mut therapy = existing.to_string();
    if !therapy.is_empty() && !therapy.ends_with('\n') {
        therapy.push('\n');
    }
    therapy.push_str(addition);
    therapy
}
