//! Form controller: turns the filled-in form into a priced, composed report.

use std::collections::BTreeMap;
use std::path::Path;

use doctor11_assist::gcs::GcsComponents;
use doctor11_assist::labs::{interpret_labs, LabFinding, LabValues};
use doctor11_assist::suggest::{suggest_diagnosis, Suggestion};
use doctor11_assist::toxicology::{
    append_therapy, assess_toxicology, ToxAssessment, ToxExposure, COMMON_SUBSTANCES,
};
use doctor11_assist::vitals::{interpret_vitals, VitalsAssessment};
use doctor11_core::models::report::{AnamnesisPlaceholder, ReportData};
use doctor11_core::models::section::{AnamnesisSection, StatusSection};
use doctor11_core::models::vitals::Vitals;
use doctor11_mkn10::DiagnosisCatalog;
use doctor11_pricing::tables::{diagnostic_names, locality_names};
use doctor11_pricing::{calculate_price, LOCALITIES, TREATMENT_COST_MAX, TREATMENT_COST_MIN};
use doctor11_report::{compose_report, report_tags};
use serde::{Deserialize, Serialize};

use crate::config::Doctor11Config;

/// Shown when a code has no description in the catalog.
pub const DESCRIPTION_NOT_FOUND: &str = "Nepodařilo se najít popis diagnózy.";

/// Shown when the catalog failed to load and a code needs resolving.
pub const CATALOG_UNAVAILABLE: &str = "Číselník MKN-10 není k dispozici.";

/// Every field of the form. All of them are optional in the JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub diagnosis: String,
    pub code: String,
    /// Empty selects the first locality of the price table.
    pub locality: String,
    pub base_cost: Option<u64>,
    pub heavy: bool,
    pub diagnostics: Vec<String>,
    pub anamnesis: BTreeMap<AnamnesisSection, String>,
    pub status_praesens: BTreeMap<StatusSection, String>,
    pub vitals: Option<Vitals>,
    /// When set, the GCS vital is the calculator's total.
    pub gcs: Option<GcsComponents>,
    pub labs: Option<LabValues>,
    pub toxicology: Option<ToxExposure>,
    /// Append the suggested toxicology therapy to `therapy`.
    pub add_tox_therapy: bool,
    /// Replace code and diagnosis with the keyword suggestion, if any.
    pub apply_suggestion: bool,
    pub examination: String,
    pub therapy: String,
    pub anamnesis_placeholder: Option<AnamnesisPlaceholder>,
}

impl FormInput {
    pub fn from_file(path: &Path) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read form at {}: {e}", path.display()))?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Values the form falls back to, taken from the config.
#[derive(Debug, Clone, Copy)]
pub struct FormDefaults {
    pub base_cost: u64,
    pub anamnesis_placeholder: AnamnesisPlaceholder,
}

impl From<&Doctor11Config> for FormDefaults {
    fn from(config: &Doctor11Config) -> Self {
        Self {
            base_cost: config.default_base_cost,
            anamnesis_placeholder: config.anamnesis_placeholder,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormOutcome {
    pub report: String,
    pub data: ReportData,
    pub suggestion: Option<Suggestion>,
    pub vitals: Option<VitalsAssessment>,
    pub lab_findings: Vec<LabFinding>,
    pub toxicology: Option<ToxAssessment>,
    /// User-facing messages, e.g. an unresolved code.
    pub notices: Vec<String>,
}

/// Values offered by the form's pickers.
#[derive(Debug, Clone, Serialize)]
pub struct FormChoices {
    pub localities: Vec<&'static str>,
    pub diagnostics: Vec<&'static str>,
    /// `(key, name)` in report order.
    pub anamnesis_sections: Vec<(&'static str, &'static str)>,
    pub substances: Vec<&'static str>,
}

pub fn form_choices() -> FormChoices {
    FormChoices {
        localities: locality_names().collect(),
        diagnostics: diagnostic_names().collect(),
        anamnesis_sections: AnamnesisSection::ALL
            .iter()
            .map(|section| (section.key(), section.name()))
            .collect(),
        substances: COMMON_SUBSTANCES.to_vec(),
    }
}

pub fn process_form(
    form: &FormInput,
    catalog: Option<&DiagnosisCatalog>,
    defaults: &FormDefaults,
) -> eyre::Result<FormOutcome> {
    let mut notices = Vec::new();
    let mut diagnosis = form.diagnosis.trim().to_string();
    let mut code = form.code.trim().to_string();

    let suggestion = form
        .anamnesis
        .get(&AnamnesisSection::PresentIllness)
        .and_then(|text| suggest_diagnosis(text));
    if form.apply_suggestion
        && let Some(s) = suggestion
    {
        code = s.code.to_string();
        diagnosis = s.description.to_string();
    }

    if !code.is_empty() && diagnosis.is_empty() {
        match catalog.map(|c| c.describe(&code)) {
            Some(Some(description)) => diagnosis = description.to_string(),
            Some(None) => {
                tracing::warn!(code = %code, "no description for diagnosis code");
                notices.push(DESCRIPTION_NOT_FOUND.to_string());
            }
            None => notices.push(CATALOG_UNAVAILABLE.to_string()),
        }
    }

    let locality = match form.locality.trim() {
        "" => LOCALITIES[0].0,
        other => other,
    };

    let base_cost = form.base_cost.unwrap_or(defaults.base_cost);
    if !(TREATMENT_COST_MIN..=TREATMENT_COST_MAX).contains(&base_cost) {
        return Err(eyre::eyre!(
            "base treatment cost {base_cost} is outside {TREATMENT_COST_MIN}-{TREATMENT_COST_MAX}"
        ));
    }
    let price = calculate_price(locality, base_cost, form.heavy, &form.diagnostics);

    let (vitals, vitals_assessment) = match (form.vitals.clone(), form.gcs) {
        (None, None) => (None, None),
        (vitals, gcs) => {
            let mut vitals = vitals.unwrap_or_default();
            if let Some(gcs) = gcs {
                vitals.gcs = gcs.checked_total()?.to_string();
            }
            let assessment = interpret_vitals(&vitals);
            if vitals.interpretation.trim().is_empty() {
                vitals.interpretation = assessment.summary();
            }
            (Some(vitals), Some(assessment))
        }
    };

    let lab_findings = form.labs.as_ref().map(interpret_labs).unwrap_or_default();

    let toxicology = form.toxicology.as_ref().map(assess_toxicology);
    let mut therapy = form.therapy.trim().to_string();
    if form.add_tox_therapy
        && let Some(tox) = &toxicology
    {
        therapy = append_therapy(&therapy, &tox.therapy_text());
    }

    let data = ReportData {
        tags: report_tags(&code, &diagnosis, locality),
        diagnosis_text: diagnosis,
        diagnosis_code: code,
        price,
        anamnesis: form.anamnesis.clone(),
        anamnesis_placeholder: form
            .anamnesis_placeholder
            .unwrap_or(defaults.anamnesis_placeholder),
        status_praesens: form.status_praesens.clone(),
        vitals,
        examination: form.examination.clone(),
        therapy,
    };

    Ok(FormOutcome {
        report: compose_report(&data),
        data,
        suggestion,
        vitals: vitals_assessment,
        lab_findings,
        toxicology,
        notices,
    })
}
