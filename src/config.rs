// src/config.rs

use crate::domain::LatLng;
use crate::errors::ConfigError;
use crate::loader::{DataPaths, DataSource, FsSource, HttpSource};
use crate::session::SessionSettings;
use crate::surface::TileLayer;
use crate::view_model::ViewSettings;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "DIRECTORY_CONFIG";
/// Config file read when `DIRECTORY_CONFIG` is unset and the file exists.
pub const DEFAULT_CONFIG_PATH: &str = "directory.toml";

/// Complete directory configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
}

fn default_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_max_workers() -> usize {
    8
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            max_workers: default_max_workers(),
        }
    }
}

/// Where the datasets live. `source` is either a directory on disk or an
/// `http(s)://` base URL; the two paths are relative to it.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_companies_path")]
    pub companies: String,
    #[serde(default = "default_listings_path")]
    pub listings: String,
}

fn default_source() -> String {
    ".".to_string()
}

fn default_companies_path() -> String {
    DataPaths::default().companies
}

fn default_listings_path() -> String {
    DataPaths::default().listings
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            companies: default_companies_path(),
            listings: default_listings_path(),
        }
    }
}

impl DataConfig {
    pub fn paths(&self) -> DataPaths {
        DataPaths {
            companies: self.companies.clone(),
            listings: self.listings.clone(),
        }
    }

    pub fn data_source(&self) -> Result<Arc<dyn DataSource>, ConfigError> {
        if self.source.starts_with("http://") || self.source.starts_with("https://") {
            let base = Url::parse(&self.source).map_err(|e| self.invalid_source(e))?;
            let source = HttpSource::new(base).map_err(|e| self.invalid_source(e))?;
            Ok(Arc::new(source))
        } else {
            Ok(Arc::new(FsSource::new(&self.source)))
        }
    }

    fn invalid_source(&self, e: impl std::error::Error + Send + Sync + 'static) -> ConfigError {
        ConfigError::DataSource {
            value: self.source.clone(),
            source: Box::new(e),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    /// Initial centre as `[lat, lng]`.
    #[serde(default = "default_center")]
    pub center: [f64; 2],
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: u8,
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_attribution")]
    pub attribution: String,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
}

fn default_center() -> [f64; 2] {
    let center = SessionSettings::default().center;
    [center.lat, center.lng]
}

fn default_zoom() -> u8 {
    SessionSettings::default().zoom
}

fn default_focus_zoom() -> u8 {
    ViewSettings::default().focus_zoom
}

fn default_tile_url() -> String {
    SessionSettings::default().tiles.url_template
}

fn default_attribution() -> String {
    SessionSettings::default().tiles.attribution
}

fn default_max_zoom() -> u8 {
    SessionSettings::default().tiles.max_zoom
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
            focus_zoom: default_focus_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
            max_zoom: default_max_zoom(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl DirectoryConfig {
    pub fn from_toml(path: &str, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(path, &text)
    }

    /// Reads `$DIRECTORY_CONFIG`, else `directory.toml` if present, else
    /// falls back to the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            center: LatLng::new(self.map.center[0], self.map.center[1]),
            zoom: self.map.zoom,
            tiles: TileLayer {
                url_template: self.map.tile_url.clone(),
                attribution: self.map.attribution.clone(),
                max_zoom: self.map.max_zoom,
            },
            view: ViewSettings {
                focus_zoom: self.map.focus_zoom,
            },
            search_quiet: Duration::from_millis(self.search.debounce_ms),
        }
    }
}
