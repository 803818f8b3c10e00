//! Caching layer for VBB API responses.
//!
//! Departures change every minute or two, so they are cached in 30-second
//! time buckets: every caller within the same bucket shares one upstream
//! fetch, and the bucket in the key rolls the cache over without waiting
//! for TTL expiry. Station lookups are far more stable and get a long TTL
//! keyed by rounded coordinates.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache as MokaCache;

use crate::vbb::{VbbClient, VbbDeparture, VbbError, VbbStation};

/// Cache key for nearby-station lookups: coordinates rounded to ~11m.
type StationKey = (i64, i64);

/// Cache key for departures: (stop id, time bucket).
type BoardKey = (String, u64);

type StationEntry = Arc<Vec<VbbStation>>;
type BoardEntry = Arc<Vec<VbbDeparture>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached station lookups.
    pub station_ttl: Duration,

    /// TTL for cached departure boards.
    pub board_ttl: Duration,

    /// Maximum number of cached entries per cache.
    pub max_capacity: u64,

    /// Time bucket size for departures, in seconds.
    pub bucket_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            station_ttl: Duration::from_secs(3600),
            board_ttl: Duration::from_secs(60),
            max_capacity: 1000,
            bucket_secs: 30,
        }
    }
}

fn station_key(latitude: f64, longitude: f64) -> StationKey {
    ((latitude * 1e4).round() as i64, (longitude * 1e4).round() as i64)
}

/// VBB client with caching.
pub struct CachedVbbClient {
    client: VbbClient,
    stations: MokaCache<StationKey, StationEntry>,
    boards: MokaCache<BoardKey, BoardEntry>,
    bucket_secs: u64,
}

impl CachedVbbClient {
    pub fn new(client: VbbClient, config: &CacheConfig) -> Self {
        let stations = MokaCache::builder()
            .time_to_live(config.station_ttl)
            .max_capacity(config.max_capacity)
            .build();
        let boards = MokaCache::builder()
            .time_to_live(config.board_ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            client,
            stations,
            boards,
            bucket_secs: config.bucket_secs,
        }
    }

    fn time_bucket(&self, now: DateTime<Utc>) -> u64 {
        (now.timestamp().max(0) as u64) / self.bucket_secs
    }

    /// Nearby stations, S-Bahn stations first, using the cache unless
    /// `refresh` forces a refetch.
    pub async fn nearby_stations(
        &self,
        latitude: f64,
        longitude: f64,
        results: u32,
        refresh: bool,
    ) -> Result<StationEntry, VbbError> {
        let key = station_key(latitude, longitude);
        if refresh {
            self.stations.invalidate(&key).await;
        } else if let Some(cached) = self.stations.get(&key).await {
            return Ok(cached);
        }

        let mut stations = self.client.nearby_stations(latitude, longitude, results).await?;
        stations.sort_by_key(|station| !station.products.suburban);

        let entry = Arc::new(stations);
        self.stations.insert(key, entry.clone()).await;
        Ok(entry)
    }

    /// Departures for a stop, shared within the current time bucket.
    pub async fn departures(
        &self,
        stop_id: &str,
        duration_mins: u32,
        now: DateTime<Utc>,
    ) -> Result<BoardEntry, VbbError> {
        let key = (stop_id.to_string(), self.time_bucket(now));
        if let Some(cached) = self.boards.get(&key).await {
            return Ok(cached);
        }

        let departures = self.client.departures(stop_id, duration_mins).await?;
        let entry = Arc::new(departures);
        self.boards.insert(key, entry.clone()).await;
        Ok(entry)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &VbbClient {
        &self.client
    }

    pub fn invalidate_all(&self) {
        self.stations.invalidate_all();
        self.boards.invalidate_all();
    }
}
