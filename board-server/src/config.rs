//! Application configuration, loaded from a JSON file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::board::{QuadrantConfig, QuadrantConfigError, QuadrantSpec};
use crate::domain::GeoPoint;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid quadrant configuration: {0}")]
    Quadrants(#[from] QuadrantConfigError),
}

/// Per-station overrides keyed by a station-name fragment.
#[derive(Debug, Clone, Deserialize)]
pub struct StationOverride {
    /// Minutes to walk to this station.
    pub walk_time: i64,
}

/// Settings for the e-ink display endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// VBB stop id the display shows.
    pub station_id: String,
    /// Header text.
    pub station_name: String,
    /// Optional TrueType font; the built-in bitmap fonts are used when
    /// absent.
    #[serde(default)]
    pub font_path: Option<PathBuf>,
    /// The four quadrants in display order.
    pub quadrants: Vec<QuadrantSpec>,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Fallback coordinates when a request does not provide any.
    pub location: GeoPoint,

    /// Walk times per station-name fragment.
    #[serde(default)]
    pub stations: BTreeMap<String, StationOverride>,

    #[serde(default = "default_walk_time_buffer")]
    pub walk_time_buffer: i64,

    /// Upstream departures window, in minutes.
    #[serde(default = "default_update_interval_min")]
    pub update_interval_min: u32,

    /// Departures at or below this many minutes away are not shown on the
    /// display.
    #[serde(default = "default_min_departure_time_min")]
    pub min_departure_time_min: i64,

    pub display: DisplayConfig,
}

fn default_port() -> u16 {
    5007
}

fn default_walk_time_buffer() -> i64 {
    2
}

fn default_update_interval_min() -> u32 {
    30
}

fn default_min_departure_time_min() -> i64 {
    5
}

impl AppConfig {
    /// Load and validate configuration from a JSON file.
    ///
    /// Quadrant validation happens here so a bad layout fails at startup,
    /// not on the first display request.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.quadrant_config()?;
        Ok(config)
    }

    /// The validated quadrant layout for the display.
    pub fn quadrant_config(&self) -> Result<QuadrantConfig, QuadrantConfigError> {
        QuadrantConfig::new(self.display.quadrants.clone())
    }

    /// Walk time for a station, matched by configured name fragment.
    pub fn walk_time_for(&self, station_name: &str) -> Option<i64> {
        let lower = station_name.to_lowercase();
        self.stations
            .iter()
            .find(|(fragment, _)| lower.contains(&fragment.to_lowercase()))
            .map(|(_, o)| o.walk_time)
    }
}
