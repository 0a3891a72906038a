//! doctor11-pricing
//!
//! Service price calculation. Pure data — no I/O, no state between calls.
//! Unknown localities and diagnostic procedures contribute nothing, so a
//! form that drifts ahead of these tables still gets a price.

pub mod tables;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use tables::{
    DIAGNOSTICS, HEAVY_TREATMENT_SURCHARGE, LOCALITIES, TREATMENT_COST_DEFAULT,
    TREATMENT_COST_MAX, TREATMENT_COST_MIN,
};

/// The form selections that determine the price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingRequest {
    pub locality: String,
    pub base_treatment_cost: u64,
    #[serde(default)]
    pub is_heavy_treatment: bool,
    #[serde(default)]
    pub selected_diagnostics: Vec<String>,
}

impl PricingRequest {
    pub fn price(&self) -> u64 {
        calculate_price(
            &self.locality,
            self.base_treatment_cost,
            self.is_heavy_treatment,
            &self.selected_diagnostics,
        )
    }
}

/// Total price: base cost, locality surcharge, heavy-treatment surcharge
/// and the cost of each distinct diagnostic procedure.
///
/// The base cost is taken as given; range checks belong to the caller.
pub fn calculate_price<I, S>(locality: &str, base_cost: u64, is_heavy: bool, diagnostics: I) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut price = base_cost.saturating_add(tables::locality_surcharge(locality).unwrap_or(0));
    if is_heavy {
        price = price.saturating_add(HEAVY_TREATMENT_SURCHARGE);
    }

    let distinct: BTreeSet<String> = diagnostics
        .into_iter()
        .map(|d| d.as_ref().to_string())
        .collect();

    distinct
        .iter()
        .filter_map(|d| tables::diagnostic_cost(d))
        .fold(price, u64::saturating_add)
}
