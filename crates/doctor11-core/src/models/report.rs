use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::section::{AnamnesisSection, StatusSection};
use super::vitals::Vitals;

/// Text rendered for any empty free-text field.
pub const PLACEHOLDER: &str = "...";

/// How empty anamnesis sections are filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnamnesisPlaceholder {
    /// Every empty section renders as `...`.
    #[default]
    Ellipsis,
    /// Every empty section renders its default sentence.
    SectionDefaults,
}

impl AnamnesisPlaceholder {
    pub fn text_for(self, section: AnamnesisSection) -> &'static str {
        match self {
            AnamnesisPlaceholder::Ellipsis => PLACEHOLDER,
            AnamnesisPlaceholder::SectionDefaults => section.default_text(),
        }
    }
}

/// Everything the report composer needs. Missing sections are simply
/// absent from the maps; the composer still renders every key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ReportData {
    pub diagnosis_text: String,
    pub diagnosis_code: String,
    pub tags: Vec<String>,
    pub price: u64,
    pub anamnesis: BTreeMap<AnamnesisSection, String>,
    pub anamnesis_placeholder: AnamnesisPlaceholder,
    pub status_praesens: BTreeMap<StatusSection, String>,
    pub vitals: Option<Vitals>,
    pub examination: String,
    pub therapy: String,
}

impl ReportData {
    /// Anamnesis text for `section`, or `""` when not filled in.
    pub fn anamnesis_text(&self, section: AnamnesisSection) -> &str {
        self.anamnesis.get(&section).map(String::as_str).unwrap_or_default()
    }

    pub fn status_text(&self, section: StatusSection) -> &str {
        self.status_praesens
            .get(&section)
            .map(String::as_str)
            .unwrap_or_default()
    }
}
