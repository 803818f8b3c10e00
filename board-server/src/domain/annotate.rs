//! Annotation helpers for the JSON feed.
//!
//! Transport-product naming, Berlin station-name cleansing and walk-time
//! thresholds. These decorate the feed for the web UI; the display core
//! does not use them.

use serde::Serialize;

/// Human-readable transport type for an upstream product code.
pub fn transport_kind(product: &str) -> &'static str {
    match product {
        "suburban" => "S-Bahn",
        "subway" => "U-Bahn",
        "tram" => "Tram",
        "bus" => "Bus",
        // Deutsche Bahn regional trains
        "regional" | "express" => "DB",
        _ => "other",
    }
}

/// Strip Berlin naming noise from a destination/provenance string and cap
/// its length.
///
/// The first group of replacements is mutually exclusive (only the first
/// matching one applies); the rest are applied unconditionally.
pub fn cleanse_provenance(name: &str, max_len: usize) -> String {
    let mut s = name.to_string();
    if s.contains("Hauptbahnhof") {
        s = s.replace("Hauptbahnhof", "HBF");
    } else if s.contains(", Bahnhof") {
        s = s.replace(", Bahnhof", "");
    } else if s.contains("(Berlin)") {
        s = s.replace("(Berlin)", "");
    } else if s.contains("Bhf") {
        s = s.replace("Bhf", "");
    }
    for noise in ["S+U", "(TF)", "S ", "U ", "[Gleis 1-8]"] {
        s = s.replace(noise, "");
    }
    s.chars().take(max_len).collect::<String>().trim().to_string()
}

/// Color thresholds for a departure countdown, derived from walk time.
///
/// Below `red` the rider cannot make it; between `red` and `yellow` it is
/// tight; above `yellow` there is slack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalkThresholds {
    pub red: i64,
    pub yellow: i64,
}

pub fn walk_thresholds(walk_time: i64, buffer: i64) -> WalkThresholds {
    WalkThresholds {
        red: walk_time - buffer,
        yellow: walk_time + buffer,
    }
}
