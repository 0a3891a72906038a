//! Fixed-template report text.
//!
//! The layout never branches on content except for the optional vitals
//! block: every anamnesis and status key is printed even when empty, in
//! the fixed key order, so two calls with the same data produce the same
//! bytes.

use doctor11_core::models::report::{ReportData, PLACEHOLDER};
use doctor11_core::models::section::{AnamnesisSection, StatusSection};
use doctor11_core::models::vitals::Vitals;

pub const CURRENCY: &str = "Kč";

pub const RECORD_HEADER: &str = "**ZÁZNAM DO DOKUMENTACE**";
pub const ANAMNESIS_HEADER: &str = "**Anamnéza**:";
pub const STATUS_HEADER: &str = "**Status praesens**:";
pub const VITALS_HEADER: &str = "__Vitální funkce__:";

/// Author block closing every report. Not editable.
pub const SIGNATURE: [&str; 3] = [
    "**Zapsal**:",
    "MUDr. asistent – Fero Lakatos",
    "Doctor-11 | Odznak: 97-5799",
];

/// Render the report. Accepts partial or empty data and always returns a
/// complete document.
pub fn compose_report(data: &ReportData) -> String {
    let mut lines = vec![
        format!(
            "🗂 Název dokumentu: {} – MKN-10: {} – Lékařská zpráva",
            data.diagnosis_text.trim(),
            data.diagnosis_code.trim()
        ),
        format!("🏷️ Tagy: {}", hashtags(&data.tags)),
        format!("💰 Cena za výkon: {} {CURRENCY}", data.price),
        String::new(),
        RECORD_HEADER.to_string(),
        String::new(),
        ANAMNESIS_HEADER.to_string(),
    ];

    for section in AnamnesisSection::ALL {
        let fallback = data.anamnesis_placeholder.text_for(section);
        lines.push(format!(
            "{}: {}",
            section.key(),
            or_placeholder(data.anamnesis_text(section), fallback)
        ));
    }

    lines.push(String::new());
    lines.push(STATUS_HEADER.to_string());
    for section in StatusSection::ALL {
        lines.push(format!(
            "{}: {}",
            section.key(),
            or_placeholder(data.status_text(section), PLACEHOLDER)
        ));
    }

    if let Some(vitals) = &data.vitals {
        push_vitals(&mut lines, vitals);
    }

    lines.push(String::new());
    lines.push(format!(
        "**Vyšetření**: {}",
        or_placeholder(&data.examination, PLACEHOLDER)
    ));
    lines.push(format!(
        "**Terapie**: {}",
        or_placeholder(&data.therapy, PLACEHOLDER)
    ));

    lines.push(String::new());
    lines.extend(SIGNATURE.iter().map(|line| line.to_string()));

    lines.join("\n")
}

fn push_vitals(lines: &mut Vec<String>, vitals: &Vitals) {
    lines.push(String::new());
    lines.push(VITALS_HEADER.to_string());
    for (key, value) in vitals.entries() {
        lines.push(format!("{key}: {value}"));
    }
    let interpretation = vitals.interpretation.trim();
    if !interpretation.is_empty() {
        lines.push(interpretation.to_string());
    }
}

fn hashtags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = text.trim();
    if trimmed.is_empty() { placeholder } else { trimmed }
}
