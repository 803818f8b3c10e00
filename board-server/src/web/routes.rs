//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Local, Utc};
use tracing::{info, warn};

use crate::board::{DEFAULT_MAX_PER_QUADRANT, classify};
use crate::render::render_board;
use crate::vbb::VbbError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(stations_feed))
        .route("/api/display.png", get(display_png))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Stations feed: nearby stations with their upcoming departures.
///
/// Coordinates come from the query (both `lat` and `lon`, or neither);
/// without them the configured home location is used.
async fn stations_feed(
    State(state): State<AppState>,
    Query(query): Query<StationsQuery>,
) -> Result<Json<StationsResponse>, AppError> {
    let (latitude, longitude) = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        (None, None) => (
            state.config.location.latitude,
            state.config.location.longitude,
        ),
        _ => {
            return Err(AppError::BadRequest {
                message: "lat and lon must be provided together".to_string(),
            });
        }
    };

    let stations = state
        .vbb
        .nearby_stations(latitude, longitude, 20, query.refresh)
        .await?;
    info!(count = stations.len(), refresh = query.refresh, "serving stations feed");

    let now = Utc::now();
    let mut station_views = Vec::with_capacity(stations.len());
    for station in stations.iter() {
        let (Some(id), Some(name)) = (&station.id, &station.name) else {
            continue;
        };

        let walk_time = state.config.walk_time_for(name);
        // One broken station must not empty the whole feed
        let departures = match state
            .vbb
            .departures(id, state.config.update_interval_min, now)
            .await
        {
            Ok(departures) => departures,
            Err(error) => {
                warn!(station = %name, %error, "skipping station after departures fetch failed");
                continue;
            }
        };

        let mut rows: Vec<DepartureView> = departures
            .iter()
            .filter_map(|dep| DepartureView::from_departure(dep, now, walk_time))
            .collect();
        rows.sort_by(|a, b| a.when.cmp(&b.when));

        station_views.push(StationView {
            name: name.clone(),
            distance: station.distance,
            walk_time,
            departures: rows,
            time_config: TimeConfig::for_walk_time(walk_time, state.config.walk_time_buffer),
        });
    }

    Ok(Json(StationsResponse {
        stations: station_views,
        config: FeedConfig {
            walk_time_buffer: state.config.walk_time_buffer,
            update_interval_min: state.config.update_interval_min,
            min_departure_time_min: state.config.min_departure_time_min,
        },
    }))
}

/// Render the e-ink display image for the configured (or requested) stop.
async fn display_png(
    State(state): State<AppState>,
    Query(query): Query<DisplayQuery>,
) -> Result<Response, AppError> {
    let stop_id = query
        .station
        .as_deref()
        .unwrap_or(&state.config.display.station_id);

    let now = Utc::now();
    let departures = state
        .vbb
        .departures(stop_id, state.config.update_interval_min, now)
        .await?;

    let infos: Vec<_> = departures.iter().filter_map(|dep| dep.to_info()).collect();
    let quadrants = classify(
        &infos,
        now,
        &state.quadrants,
        state.config.min_departure_time_min,
        DEFAULT_MAX_PER_QUADRANT,
    );

    let png = render_board(
        &quadrants,
        &state.config.display.station_name,
        Local::now(),
        &state.fonts,
    )
    .map_err(|e| AppError::Internal {
        message: e.to_string(),
    })?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        png,
    )
        .into_response())
}

/// Application-level errors with HTTP mappings.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<VbbError> for AppError {
    fn from(e: VbbError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
