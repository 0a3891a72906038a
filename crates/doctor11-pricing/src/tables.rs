//! Price rule tables. Order matches the order the form offers the choices.

/// Lowest base treatment cost the form accepts.
pub const TREATMENT_COST_MIN: u64 = 1000;

/// Highest base treatment cost the form accepts.
pub const TREATMENT_COST_MAX: u64 = 1500;

/// Base treatment cost preselected in the form.
pub const TREATMENT_COST_DEFAULT: u64 = 1250;

/// Added when the treatment is flagged as heavy (e.g. unconsciousness).
pub const HEAVY_TREATMENT_SURCHARGE: u64 = 2000;

/// Locality categories and their surcharge.
pub const LOCALITIES: &[(&str, u64)] = &[
    ("Nemocnice", 1000),
    ("Město", 1500),
    ("Mimo město", 2000),
    ("Těžko přístupný terén", 4000),
];

/// Diagnostic procedures and their add-on cost.
pub const DIAGNOSTICS: &[(&str, u64)] = &[
    ("RTG", 250),
    ("CT", 500),
    ("MRI", 750),
    ("SONO", 150),
];

/// Surcharge for `locality`, or `None` when the category is unknown.
pub fn locality_surcharge(locality: &str) -> Option<u64> {
    LOCALITIES
        .iter()
        .find(|(name, _)| *name == locality)
        .map(|(_, amount)| *amount)
}

/// Add-on cost for a diagnostic procedure, or `None` when unknown.
pub fn diagnostic_cost(procedure: &str) -> Option<u64> {
    DIAGNOSTICS
        .iter()
        .find(|(name, _)| *name == procedure)
        .map(|(_, amount)| *amount)
}

/// Locality names in form order.
pub fn locality_names() -> impl Iterator<Item = &'static str> {
    LOCALITIES.iter().map(|(name, _)| *name)
}

/// Diagnostic procedure names in form order.
pub fn diagnostic_names() -> impl Iterator<Item = &'static str> {
    DIAGNOSTICS.iter().map(|(name, _)| *name)
}
