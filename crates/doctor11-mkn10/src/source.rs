use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::DiagnosisCatalog;
use crate::error::DataLoadError;

/// MKN-10 dataset shipped inside the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../../data/diagnosis_children.json");

/// Timeout for the single blocking fetch of a remote dataset.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

fn default_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT.as_secs()
}

/// Where the catalog dataset comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogSource {
    /// The dataset compiled into the program.
    #[default]
    Bundled,
    /// Local JSON file.
    File { path: PathBuf },
    /// JSON served over HTTP(S), fetched once.
    Remote {
        url: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

/// Load the catalog from `source`.
///
/// A local file that is missing or malformed is a hard error. A remote
/// fetch that fails is logged and yields an empty catalog, so lookups
/// report "not found" instead of failing; callers that want another
/// attempt call [`fetch`] themselves.
pub fn load(source: &CatalogSource) -> Result<DiagnosisCatalog, DataLoadError> {
    match source {
        CatalogSource::Bundled => {
            let catalog = DiagnosisCatalog::from_json(BUNDLED_DATASET)?;
            tracing::debug!(codes = catalog.len(), "bundled catalog loaded");
            Ok(catalog)
        }
        CatalogSource::File { path } => load_file(path),
        CatalogSource::Remote { url, timeout_secs } => {
            match fetch(url, Duration::from_secs(*timeout_secs)) {
                Ok(catalog) => Ok(catalog),
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "catalog fetch failed, continuing without descriptions");
                    Ok(DiagnosisCatalog::empty())
                }
            }
        }
    }
}

pub fn load_file(path: &Path) -> Result<DiagnosisCatalog, DataLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DataLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = DiagnosisCatalog::from_json(&contents)?;
    tracing::info!(path = %path.display(), codes = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// One blocking GET of `url`. Non-2xx statuses, transport errors and
/// malformed bodies all surface as [`DataLoadError`].
pub fn fetch(url: &str, timeout: Duration) -> Result<DiagnosisCatalog, DataLoadError> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into();

    let body = agent
        .get(url)
        .call()
        .and_then(|mut response| response.body_mut().read_to_string())
        .map_err(|e| DataLoadError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    let catalog = DiagnosisCatalog::from_json(&body)?;
    tracing::info!(url = %url, codes = catalog.len(), "catalog fetched");
    Ok(catalog)
}
