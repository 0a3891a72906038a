use std::path::{Path, PathBuf};

use doctor11_core::models::report::AnamnesisPlaceholder;
use doctor11_mkn10::CatalogSource;
use doctor11_pricing::TREATMENT_COST_DEFAULT;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Overrides the configured catalog with a local dataset path.
pub const CATALOG_ENV: &str = "DOCTOR11_CATALOG";

const CONFIG_FILE: &str = "config.json";

fn default_base_cost() -> u64 {
    TREATMENT_COST_DEFAULT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor11Config {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub catalog: CatalogSource,
    /// Base treatment cost used when a form does not set one.
    #[serde(default = "default_base_cost")]
    pub default_base_cost: u64,
    #[serde(default)]
    pub anamnesis_placeholder: AnamnesisPlaceholder,
    pub created_at: jiff::Timestamp,
}

impl Default for Doctor11Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Doctor11Config {
    /// Fresh config using the dataset compiled into the binary.
    pub fn new() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            catalog: CatalogSource::Bundled,
            default_base_cost: TREATMENT_COST_DEFAULT,
            anamnesis_placeholder: AnamnesisPlaceholder::default(),
            created_at: jiff::Timestamp::now(),
        }
    }

    /// Catalog source after applying the [`CATALOG_ENV`] override.
    pub fn resolve_catalog(&self, env_override: Option<PathBuf>) -> CatalogSource {
        match env_override {
            Some(path) => CatalogSource::File { path },
            None => self.catalog.clone(),
        }
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("cz.doctor11"))
}

fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<Doctor11Config> {
    load_config_from(&config_path()?)
}

/// Saved config, or a fresh one when none has been written yet.
pub fn load_or_default() -> eyre::Result<Doctor11Config> {
    if has_config() {
        load_config()
    } else {
        Ok(Doctor11Config::new())
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<Doctor11Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(version) => u32::try_from(version)
            .map_err(|_| eyre::eyre!("config_version {version} is out of range"))?,
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: Doctor11Config = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Doctor-11."
        ));
    }

    // v0 → v1: the flat `data_path` string became a tagged catalog source
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(data_path) = obj.remove("data_path") {
            obj.entry("catalog").or_insert(serde_json::json!({
                "type": "file",
                "path": data_path,
            }));
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (data_path → catalog)");
    }

    Ok(json)
}

pub fn save_config(config: &Doctor11Config) -> eyre::Result<PathBuf> {
    save_config_in(&config_dir()?, config)
}

pub fn save_config_in(dir: &Path, config: &Doctor11Config) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}

pub fn delete_config() -> eyre::Result<()> {
    let path = config_path()?;
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}
