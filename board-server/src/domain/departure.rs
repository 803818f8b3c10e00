//! The narrow read-only departure view consumed by the board core.
//!
//! The upstream schema carries far more than the board needs; this type
//! exposes exactly the four fields the classifier and renderer read, so the
//! core stays decoupled from the upstream API.

use chrono::{DateTime, Utc};

use super::direction::{Direction, resolve_direction};
use super::geo::{GeoPoint, bearing_to_cardinal, initial_bearing};

/// A single departure, reduced to what the board cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartureInfo {
    /// Line name, e.g. "S8".
    pub line: String,
    /// Location of the stop the departure leaves from.
    pub stop: Option<GeoPoint>,
    /// Location of the trip's final destination.
    pub destination: Option<GeoPoint>,
    /// Departure instant.
    pub when: DateTime<Utc>,
}

impl DepartureInfo {
    /// Whole minutes until departure, floored. Negative for the past.
    pub fn minutes_until(&self, now: DateTime<Utc>) -> i64 {
        (self.when - now).num_seconds().div_euclid(60)
    }

    /// Resolved direction for this departure, or `None` when either
    /// coordinate is missing (the departure is unclassifiable).
    pub fn direction(&self) -> Option<Direction> {
        let stop = self.stop?;
        let destination = self.destination?;
        let bearing = initial_bearing(stop, destination);
        Some(resolve_direction(&self.line, bearing_to_cardinal(bearing)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs_from_now: i64, now: DateTime<Utc>) -> DepartureInfo {
        DepartureInfo {
            line: "S2".to_string(),
            stop: Some(GeoPoint::new(52.55, 13.40)),
            destination: Some(GeoPoint::new(52.60, 13.40)),
            when: now + chrono::Duration::seconds(secs_from_now),
        }
    }

    #[test]
    fn minutes_until_floors() {
        let now = Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap();
        assert_eq!(at(0, now).minutes_until(now), 0);
        assert_eq!(at(59, now).minutes_until(now), 0);
        assert_eq!(at(60, now).minutes_until(now), 1);
        assert_eq!(at(8 * 60 + 30, now).minutes_until(now), 8);
    }

    #[test]
    fn minutes_until_floors_for_the_past() {
        let now = Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap();
        assert_eq!(at(-1, now).minutes_until(now), -1);
        assert_eq!(at(-60, now).minutes_until(now), -1);
        assert_eq!(at(-61, now).minutes_until(now), -2);
    }

    #[test]
    fn direction_from_geometry() {
        let now = Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap();
        // Destination due north of the stop
        assert_eq!(at(600, now).direction(), Some(Direction::North));
    }

    #[test]
    fn direction_applies_line_overrides() {
        let now = Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap();
        let mut dep = at(600, now);
        dep.line = "S41".to_string();
        assert_eq!(dep.direction(), Some(Direction::Clockwise));
    }

    #[test]
    fn direction_is_none_without_coordinates() {
        let now = Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap();
        let mut dep = at(600, now);
        dep.stop = None;
        assert_eq!(dep.direction(), None);

        let mut dep = at(600, now);
        dep.destination = None;
        assert_eq!(dep.direction(), None);
    }
}
