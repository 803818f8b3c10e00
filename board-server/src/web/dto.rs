//! Data transfer objects for web requests and responses.
//!
//! Station fields are camelCase and departure fields snake_case; the web
//! client expects this mixed shape, so it is preserved explicitly rather
//! than normalised.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{cleanse_provenance, transport_kind, walk_thresholds};
use crate::vbb::VbbDeparture;

/// Longest destination name shown in the feed.
const PROVENANCE_MAX_LEN: usize = 28;

/// Query for the stations feed.
#[derive(Debug, Deserialize)]
pub struct StationsQuery {
    /// Latitude; must come with `lon`
    pub lat: Option<f64>,

    /// Longitude; must come with `lat`
    pub lon: Option<f64>,

    /// Bypass the station cache
    #[serde(default)]
    pub refresh: bool,
}

/// Query for the display image.
#[derive(Debug, Deserialize)]
pub struct DisplayQuery {
    /// Override the configured stop id
    pub station: Option<String>,
}

/// The full stations feed.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationView>,
    pub config: FeedConfig,
}

/// Configuration echoed to the web client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedConfig {
    pub walk_time_buffer: i64,
    pub update_interval_min: u32,
    pub min_departure_time_min: i64,
}

/// One station with its departures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationView {
    pub name: String,
    pub distance: Option<i64>,
    pub walk_time: Option<i64>,
    pub departures: Vec<DepartureView>,
    pub time_config: TimeConfig,
}

/// Countdown color thresholds for one station.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeConfig {
    pub buffer: Option<i64>,
    pub yellow_threshold: Option<i64>,
}

impl TimeConfig {
    /// Thresholds from a walk time, or all-null when none is configured.
    pub fn for_walk_time(walk_time: Option<i64>, buffer: i64) -> Self {
        match walk_time {
            Some(walk_time) => {
                let thresholds = walk_thresholds(walk_time, buffer);
                Self {
                    buffer: Some(thresholds.red),
                    yellow_threshold: Some(thresholds.yellow),
                }
            }
            None => Self {
                buffer: None,
                yellow_threshold: None,
            },
        }
    }
}

/// One departure row in the feed.
#[derive(Debug, Serialize)]
pub struct DepartureView {
    pub transport_type: &'static str,
    pub line: String,
    pub when: String,
    pub direction_symbol: String,
    pub provenance: String,
    pub wait_time: i64,
}

impl DepartureView {
    /// Build a feed row from an upstream departure.
    ///
    /// Returns `None` for rows without a line name or departure time.
    /// Unresolvable directions come through as an empty symbol; the feed
    /// still lists the departure.
    pub fn from_departure(
        departure: &VbbDeparture,
        now: DateTime<Utc>,
        walk_time: Option<i64>,
    ) -> Option<Self> {
        let info = departure.to_info()?;
        let direction_symbol = info
            .direction()
            .map(|d| d.glyph().to_string())
            .unwrap_or_default();
        let provenance = departure
            .destination
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .map(|name| cleanse_provenance(name, PROVENANCE_MAX_LEN))
            .unwrap_or_default();
        let product = departure
            .line
            .as_ref()
            .and_then(|l| l.product.as_deref())
            .unwrap_or("");

        Some(Self {
            transport_type: transport_kind(product),
            line: info.line.clone(),
            when: info.when.to_rfc3339(),
            direction_symbol,
            provenance,
            wait_time: info.minutes_until(now) - walk_time.unwrap_or(0),
        })
    }
}

/// Error response for API endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
