use crate::error::QuiverError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_BOARDS_FILE: &str = "my_boards.json";
pub const DEFAULT_CONSTRUCTIONS_FILE: &str = "board_constructions.json";
pub const DEFAULT_SPOTS_FILE: &str = "surf_spots.json";
pub const DEFAULT_BASE_URL: &str = "https://services.surfline.com/kbyg/spots/forecasts";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_SPOT: &str = "linda_mar";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuiverConfig {
    pub catalog: Option<CatalogConfig>,
    pub provider: Option<ProviderConfig>,
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub boards: Option<PathBuf>,
    pub constructions: Option<PathBuf>,
    pub spots: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
    pub days: Option<u32>,
    pub interval_hours: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    pub spot: Option<String>,
    pub export_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPaths {
    pub boards: PathBuf,
    pub constructions: PathBuf,
    pub spots: PathBuf,
}

impl CatalogPaths {
    /// Resolves relative paths against `root`, the directory the config
    /// was loaded from.
    pub fn relative_to(self, root: &Path) -> Self {
        let resolve = |path: PathBuf| {
            if path.is_absolute() {
                path
            } else {
                root.join(path)
            }
        };
        Self {
            boards: resolve(self.boards),
            constructions: resolve(self.constructions),
            spots: resolve(self.spots),
        }
    }
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self {
            boards: PathBuf::from(DEFAULT_BOARDS_FILE),
            constructions: PathBuf::from(DEFAULT_CONSTRUCTIONS_FILE),
            spots: PathBuf::from(DEFAULT_SPOTS_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub days: u32,
    pub interval_hours: u32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
            days: 1,
            interval_hours: 1,
        }
    }
}

impl QuiverConfig {
    pub fn catalog_paths(&self) -> CatalogPaths {
        let defaults = CatalogPaths::default();
        match &self.catalog {
            Some(catalog) => CatalogPaths {
                boards: catalog.boards.clone().unwrap_or(defaults.boards),
                constructions: catalog
                    .constructions
                    .clone()
                    .unwrap_or(defaults.constructions),
                spots: catalog.spots.clone().unwrap_or(defaults.spots),
            },
            None => defaults,
        }
    }

    pub fn provider_settings(&self) -> ProviderSettings {
        let defaults = ProviderSettings::default();
        match &self.provider {
            Some(provider) => ProviderSettings {
                base_url: provider.base_url.clone().unwrap_or(defaults.base_url),
                user_agent: provider.user_agent.clone().unwrap_or(defaults.user_agent),
                timeout_secs: provider.timeout_secs.unwrap_or(defaults.timeout_secs),
                days: provider.days.unwrap_or(defaults.days),
                interval_hours: provider.interval_hours.unwrap_or(defaults.interval_hours),
            },
            None => defaults,
        }
    }

    pub fn default_spot(&self) -> String {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.spot.clone())
            .unwrap_or_else(|| DEFAULT_SPOT.to_string())
    }

    pub fn export_dir(&self) -> PathBuf {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.export_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn validate(&self) -> Result<(), QuiverError> {
        if let Some(catalog) = &self.catalog {
            for (key, path) in [
                ("boards", &catalog.boards),
                ("constructions", &catalog.constructions),
                ("spots", &catalog.spots),
            ] {
                if path
                    .as_ref()
                    .is_some_and(|path| path.as_os_str().is_empty())
                {
                    return Err(QuiverError::ConfigParse(format!(
                        "catalog.{key} must be a non-empty path"
                    )));
                }
            }
        }

        if let Some(provider) = &self.provider {
            if let Some(base_url) = &provider.base_url {
                if base_url.trim().is_empty() {
                    return Err(QuiverError::ConfigParse(
                        "provider.base_url must not be empty".to_string(),
                    ));
                }
                if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                    return Err(QuiverError::ConfigParse(format!(
                        "provider.base_url must be an http(s) URL: {base_url}"
                    )));
                }
            }
            if provider.timeout_secs == Some(0) {
                return Err(QuiverError::ConfigParse(
                    "provider.timeout_secs must be greater than 0".to_string(),
                ));
            }
            if provider.days == Some(0) {
                return Err(QuiverError::ConfigParse(
                    "provider.days must be greater than 0".to_string(),
                ));
            }
            if provider.interval_hours == Some(0) {
                return Err(QuiverError::ConfigParse(
                    "provider.interval_hours must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(spot) = self
            .defaults
            .as_ref()
            .and_then(|defaults| defaults.spot.as_ref())
        {
            if spot.trim().is_empty() {
                return Err(QuiverError::ConfigParse(
                    "defaults.spot must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
