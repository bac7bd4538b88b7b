//! Runtime configuration, read from a JSON file.
//!
//! Lookup order: explicit path → `$WAYPOINT_CONFIG` → `<config dir>/waypoint/config.json`.
//! Every field has a default; a missing default file is not an error.

use crate::destination::providers::{DEFAULT_NOMINATIM_ENDPOINT, DEFAULT_USER_AGENT};
use crate::destination::{
    DestinationResolver, DuplicateEntry, Gazetteer, GazetteerEntry, NominatimProvider,
    WellKnownDestinations,
};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_ENV: &str = "WAYPOINT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<DuplicateEntry> for ConfigError {
    fn from(e: DuplicateEntry) -> Self {
        Self::Invalid(e.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub limit: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_NOMINATIM_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            limit: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bound on one external lookup, in milliseconds.
    pub timeout_ms: u64,
    pub offline: bool,
    pub provider: ProviderConfig,
    /// Replaces the built-in allow-list when present.
    pub well_known: Option<Vec<String>>,
    /// Appended after the built-in gazetteer.
    pub extra_destinations: Vec<GazetteerEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_ms: 2500,
            offline: false,
            provider: ProviderConfig::default(),
            well_known: None,
            extra_destinations: Vec::new(),
        }
    }
}

impl Config {
    /// Resolve the config location and load it.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from a specific file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("waypoint").join("config.json"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeout_ms must be positive".into()));
        }
        if self.provider.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("provider.endpoint is empty".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Assemble the resolver this configuration describes.
    pub fn build_resolver(&self) -> Result<DestinationResolver, ConfigError> {
        let gazetteer = Gazetteer::builtin_with(self.extra_destinations.clone())?;
        let well_known = match &self.well_known {
            Some(names) => WellKnownDestinations::from_names(names),
            None => WellKnownDestinations::builtin(),
        };
        let provider = NominatimProvider::new(
            self.provider.endpoint.clone(),
            self.provider.user_agent.clone(),
            self.provider.limit,
        );

        let mut resolver = DestinationResolver::with_provider(Arc::new(provider))
            .with_gazetteer(Arc::new(gazetteer))
            .with_well_known(Arc::new(well_known));
        resolver.set_offline(self.offline);
        Ok(resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.timeout(), Duration::from_millis(2500));
        assert!(!c.offline);
        assert_eq!(c.provider.limit, 10);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"{ "timeout_ms": 800, "provider": { "limit": 5 } }"#);
        let c = Config::load(Some(&path)).unwrap();
        assert_eq!(c.timeout_ms, 800);
        assert_eq!(c.provider.limit, 5);
        assert_eq!(c.provider.endpoint, DEFAULT_NOMINATIM_ENDPOINT);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "{ not json");
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"{ "timeout_ms": 0 }"#);
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_extra_destinations_and_allow_list() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"{
                "offline": true,
                "well_known": ["Gdańsk"],
                "extra_destinations": [
                    { "name": "Kraków", "parent_region": "Poland", "category": "City" },
                    { "name": "Poland", "parent_region": "Europe", "category": "Country" }
                ]
            }"#,
        );
        let resolver = Config::load_from(&path).unwrap().build_resolver().unwrap();
        assert!(resolver.well_known().is_well_known("gdańsk"));
        assert!(!resolver.well_known().is_well_known("Paris"));

        let list = resolver.resolve("kra", Duration::from_secs(1)).await;
        assert_eq!(list.first().unwrap().title, "Kraków");
        let list = resolver.resolve("pol", Duration::from_secs(1)).await;
        assert_eq!(list.first().unwrap().title, "Poland");
    }

    #[test]
    fn test_duplicate_extra_destination_rejected() {
        let c = Config {
            extra_destinations: vec![serde_json::from_str(
                r#"{ "name": "Chicago", "parent_region": "Illinois, United States", "category": "City" }"#,
            )
            .unwrap()],
            ..Config::default()
        };
        assert!(matches!(c.build_resolver(), Err(ConfigError::Invalid(_))));
    }
}
