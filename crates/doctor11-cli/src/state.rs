use doctor11_mkn10::{CatalogSource, DataLoadError, DiagnosisCatalog};

use crate::config::Doctor11Config;

/// Everything resolved once at startup and handed to the commands.
pub struct AppState {
    pub config: Doctor11Config,
    /// `Err` when the dataset could not be loaded. Pricing and report
    /// composition keep working; code lookups refuse to run.
    pub catalog: Result<DiagnosisCatalog, DataLoadError>,
}

impl AppState {
    /// Load the catalog eagerly, before any lookup can happen.
    pub fn bootstrap(config: Doctor11Config, source: &CatalogSource) -> Self {
        let catalog = doctor11_mkn10::load(source);
        if let Err(e) = &catalog {
            tracing::error!(error = %e, "diagnosis catalog unavailable");
        }
        Self { config, catalog }
    }

    /// The catalog, or the load error for commands that cannot do without it.
    pub fn require_catalog(&self) -> eyre::Result<&DiagnosisCatalog> {
        self.catalog
            .as_ref()
            .map_err(|e| eyre::eyre!("diagnosis catalog unavailable: {e}"))
    }
}
