//! VBB REST API response DTOs.
//!
//! These map the `v6.vbb.transport.rest` JSON responses. Fields are
//! `Option` liberally: the API omits or nulls fields for departures with
//! no realtime data, and a single malformed departure must not take the
//! whole board down.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

use crate::domain::{DepartureInfo, GeoPoint};

/// A geographic location attached to a stop or station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VbbLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&VbbLocation> for GeoPoint {
    fn from(location: &VbbLocation) -> Self {
        GeoPoint {
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

/// Which transport modes serve a station.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VbbProducts {
    pub suburban: bool,
    pub subway: bool,
    pub tram: bool,
    pub bus: bool,
    pub ferry: bool,
    pub express: bool,
    pub regional: bool,
}

/// A station from the nearby-locations endpoint, or nested in a departure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VbbStation {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<VbbLocation>,
    #[serde(default)]
    pub products: VbbProducts,
    pub distance: Option<i64>,
}

/// The line a departure runs on.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VbbLine {
    pub name: Option<String>,
    pub product: Option<String>,
}

/// One departure row from the departures endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VbbDeparture {
    pub trip_id: Option<String>,
    pub stop: Option<VbbStation>,
    /// Realtime departure; null when the trip is cancelled or unknown.
    pub when: Option<DateTime<FixedOffset>>,
    pub planned_when: Option<DateTime<FixedOffset>>,
    pub delay: Option<i64>,
    pub platform: Option<String>,
    pub direction: Option<String>,
    pub provenance: Option<String>,
    pub line: Option<VbbLine>,
    pub destination: Option<VbbStation>,
}

/// Top-level departures response.
#[derive(Debug, Clone, Deserialize)]
pub struct DeparturesResponse {
    #[serde(default)]
    pub departures: Vec<VbbDeparture>,
}

impl VbbDeparture {
    /// Narrow this row down to what classification needs.
    ///
    /// Returns `None` when the row has no line name or no departure time;
    /// missing coordinates are kept as `None` and dropped later, so the
    /// feed can still report such departures.
    pub fn to_info(&self) -> Option<DepartureInfo> {
        let line = self.line.as_ref()?.name.clone()?;
        let when = self.when?;
        Some(DepartureInfo {
            line,
            stop: self
                .stop
                .as_ref()
                .and_then(|s| s.location.as_ref())
                .map(GeoPoint::from),
            destination: self
                .destination
                .as_ref()
                .and_then(|s| s.location.as_ref())
                .map(GeoPoint::from),
            when: when.with_timezone(&Utc),
        })
    }
}
