use doctor11_assist::error::AssistError;
use doctor11_assist::gcs::{GcsComponent, GcsComponents};
use doctor11_assist::suggest::suggest_diagnosis;
use doctor11_assist::toxicology::{
    append_therapy, assess_toxicology, ExposureRoute, ToxExposure, BASE_THERAPY,
};
use doctor11_assist::vitals::{interpret_vitals, VitalFinding};
use doctor11_core::models::vitals::Vitals;

#[test]
fn suggestion_first_match_wins() {
    let suggestion = suggest_diagnosis("Náhlá slabost a ztráta řeči, bolest břicha").unwrap();
    assert_eq!(suggestion.code, "I63");
    assert_eq!(suggestion.description, "CMP");
    assert_eq!(suggestion.label(), "Návrh diagnózy: I63 – CMP");
}

#[test]
fn suggestion_needs_every_keyword() {
    assert_eq!(suggest_diagnosis("slabost dolních končetin"), None);
    assert_eq!(suggest_diagnosis("JEDNOSTRANNÁ SLABOST").unwrap().code, "I63");
    assert_eq!(suggest_diagnosis("silná bolest břicha").unwrap().code, "R10");
    assert_eq!(suggest_diagnosis(""), None);
}

#[test]
fn vitals_flag_low_saturation_and_tachycardia() {
    let vitals = Vitals {
        spo2: "88".to_string(),
        heart_rate: "120".to_string(),
        ..Default::default()
    };

    let assessment = interpret_vitals(&vitals);
    assert_eq!(
        assessment.findings,
        [VitalFinding::LowSaturation, VitalFinding::RaisedHeartRate]
    );
    assert_eq!(assessment.summary(), "Saturace nízká; Tepová frekvence zvýšená");
    assert!(assessment.is_flagged(VitalFinding::LowSaturation));
}

#[test]
fn vitals_thresholds_are_strict_and_unparsable_values_are_skipped() {
    let vitals = Vitals {
        spo2: "90".to_string(),
        heart_rate: "100".to_string(),
        ..Default::default()
    };
    assert!(interpret_vitals(&vitals).findings.is_empty());

    let vitals = Vitals {
        spo2: "89,5".to_string(),
        heart_rate: "rychlý".to_string(),
        ..Default::default()
    };
    let assessment = interpret_vitals(&vitals);
    assert_eq!(assessment.findings, [VitalFinding::LowSaturation]);
    assert!(!assessment.is_flagged(VitalFinding::RaisedHeartRate));
}

#[test]
fn default_gcs_is_fifteen() {
    let gcs = GcsComponents::default();
    assert_eq!(gcs.total(), 15);
    assert!(gcs.validate().is_empty());
    assert_eq!(gcs.checked_total().unwrap(), 15);
}

#[test]
fn gcs_reports_out_of_range_components() {
    let gcs = GcsComponents {
        eye: 0,
        verbal: 3,
        motor: 7,
    };

    let violations = gcs.validate();
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].component, GcsComponent::Eye);
    assert_eq!(violations[1].component, GcsComponent::Motor);
    assert_eq!(violations[1].message, "Pohyb score 7 is outside range [1, 6]");
    match gcs.checked_total() {
        Err(AssistError::Gcs(violation)) => assert_eq!(violation.message, violations[0].message),
        other => panic!("expected GCS error, got {other:?}"),
    }
}

#[test]
fn opioid_with_miosis_suggests_naloxone() {
    let assessment = assess_toxicology(&ToxExposure {
        substance: "Opioid".to_string(),
        symptoms: "Mióza? ne, výrazná mioza".to_string(),
        route: ExposureRoute::Intravenous,
        ..Default::default()
    });

    assert_eq!(assessment.therapy[0], "Naloxon");
    assert_eq!(assessment.findings.len(), 1);
    assert_eq!(&assessment.therapy[1..], BASE_THERAPY);
}

#[test]
fn alcohol_dose_is_extracted_from_free_text() {
    let severe = assess_toxicology(&ToxExposure {
        substance: "alkohol".to_string(),
        dose: "3,5 promile".to_string(),
        ..Default::default()
    });
    assert_eq!(severe.therapy[0], "monitorace, glukóza, thiamin, hydratace");

    let mild = assess_toxicology(&ToxExposure {
        substance: "alkohol".to_string(),
        dose: "3".to_string(),
        ..Default::default()
    });
    assert!(mild.findings.is_empty());

    let unknown = assess_toxicology(&ToxExposure {
        substance: "alkohol".to_string(),
        dose: "hodně".to_string(),
        ..Default::default()
    });
    assert!(unknown.findings.is_empty());
}

#[test]
fn carbon_monoxide_matches_whole_word_only() {
    let co = assess_toxicology(&ToxExposure {
        substance: "CO".to_string(),
        ..Default::default()
    });
    assert_eq!(co.summary(), "Zvážit hyperbarickou komoru, 100% kyslík");

    let cocaine = assess_toxicology(&ToxExposure {
        substance: "cocaine".to_string(),
        ..Default::default()
    });
    assert!(cocaine.findings.is_empty());
    assert_eq!(cocaine.therapy, BASE_THERAPY);
}

#[test]
fn therapy_is_appended_on_a_new_line() {
    assert_eq!(append_therapy("", "Naloxon"), "Naloxon");
    assert_eq!(append_therapy("O2", "Naloxon"), "O2\nNaloxon");
    assert_eq!(append_therapy("O2\n", "Naloxon"), "O2\nNaloxon");
    assert_eq!(append_therapy("O2", ""), "O2");
}

#[test]
fn therapy_text_joins_lines() {
    let assessment = assess_toxicology(&ToxExposure::default());
    assert_eq!(assessment.therapy_text(), BASE_THERAPY.join("\n"));
}
