use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Clinical-history categories of the anamnesis block.
///
/// Declaration order is the order the sections are rendered in, so the
/// derived `Ord` also drives `BTreeMap` iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AnamnesisSection {
    #[serde(rename = "OA")]
    Personal,
    #[serde(rename = "RA")]
    Family,
    #[serde(rename = "PA")]
    Occupational,
    #[serde(rename = "SA")]
    Social,
    #[serde(rename = "FA")]
    Pharmacological,
    #[serde(rename = "AA")]
    Allergy,
    #[serde(rename = "EA")]
    Epidemiological,
    #[serde(rename = "NO")]
    PresentIllness,
}

impl AnamnesisSection {
    pub const ALL: [AnamnesisSection; 8] = [
        AnamnesisSection::Personal,
        AnamnesisSection::Family,
        AnamnesisSection::Occupational,
        AnamnesisSection::Social,
        AnamnesisSection::Pharmacological,
        AnamnesisSection::Allergy,
        AnamnesisSection::Epidemiological,
        AnamnesisSection::PresentIllness,
    ];

    /// Short key printed in the report (e.g. "OA").
    pub fn key(self) -> &'static str {
        match self {
            AnamnesisSection::Personal => "OA",
            AnamnesisSection::Family => "RA",
            AnamnesisSection::Occupational => "PA",
            AnamnesisSection::Social => "SA",
            AnamnesisSection::Pharmacological => "FA",
            AnamnesisSection::Allergy => "AA",
            AnamnesisSection::Epidemiological => "EA",
            AnamnesisSection::PresentIllness => "NO",
        }
    }

    /// Full Czech name, as shown in the abbreviations legend.
    pub fn name(self) -> &'static str {
        match self {
            AnamnesisSection::Personal => "osobní anamnéza",
            AnamnesisSection::Family => "rodinná anamnéza",
            AnamnesisSection::Occupational => "pracovní anamnéza",
            AnamnesisSection::Social => "sociální anamnéza",
            AnamnesisSection::Pharmacological => "farmakologická anamnéza",
            AnamnesisSection::Allergy => "alergologická anamnéza",
            AnamnesisSection::Epidemiological => "epidemiologická anamnéza",
            AnamnesisSection::PresentIllness => "nynější onemocnění",
        }
    }

    /// Sentence used for an empty section under
    /// [`AnamnesisPlaceholder::SectionDefaults`](crate::models::report::AnamnesisPlaceholder).
    pub fn default_text(self) -> &'static str {
        match self {
            AnamnesisSection::Personal => "Bez závažné osobní anamnézy.",
            AnamnesisSection::Family => "Rodinná anamnéza bez významných odchylek.",
            AnamnesisSection::Occupational => "Pracovní anamnéza nevýznamná.",
            AnamnesisSection::Social => "Sociální anamnéza standardní.",
            AnamnesisSection::Pharmacological => "Dlouhodobě bez pravidelné medikace.",
            AnamnesisSection::Allergy => "Bez známé alergie.",
            AnamnesisSection::Epidemiological => "Epidemiologická anamnéza negativní.",
            AnamnesisSection::PresentIllness => "Bez aktuálních potíží.",
        }
    }
}

impl fmt::Display for AnamnesisSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AnamnesisSection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| CoreError::UnknownAnamnesisSection(s.to_string()))
    }
}

/// Present-status sections. Vital signs have their own block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StatusSection {
    #[serde(rename = "Subj.")]
    Subjective,
    #[serde(rename = "Obj.")]
    Objective,
}

impl StatusSection {
    pub const ALL: [StatusSection; 2] = [StatusSection::Subjective, StatusSection::Objective];

    pub fn key(self) -> &'static str {
        match self {
            StatusSection::Subjective => "Subj.",
            StatusSection::Objective => "Obj.",
        }
    }
}

impl fmt::Display for StatusSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StatusSection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let key = key.strip_suffix('.').unwrap_or(key);
        Self::ALL
            .into_iter()
            .find(|section| section.key().trim_end_matches('.').eq_ignore_ascii_case(key))
            .ok_or_else(|| CoreError::UnknownStatusSection(s.to_string()))
    }
}
