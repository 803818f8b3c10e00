//! Groups departures into the four display quadrants.

use chrono::{DateTime, Utc};

use crate::domain::DepartureInfo;

use super::quadrant::{QUADRANT_COUNT, QuadrantConfig, QuadrantData};

/// How many departures each quadrant shows at most.
pub const DEFAULT_MAX_PER_QUADRANT: usize = 2;

/// Classify departures into the configured quadrants.
///
/// Departures are dropped when they are unclassifiable (missing
/// coordinates), too soon (`minutes_until <= min_lead_mins`), or match no
/// quadrant. A departure goes to the *first* spec, in config order, whose
/// line set and direction both match; overlapping line sets are a
/// configuration responsibility, not validated here.
///
/// Always returns one `QuadrantData` per spec, in spec order, even when
/// nothing matched. Within a quadrant the pairs are sorted ascending by
/// minutes (stable, so ties keep arrival order) and truncated to
/// `max_per_quadrant`.
pub fn classify(
    departures: &[DepartureInfo],
    now: DateTime<Utc>,
    config: &QuadrantConfig,
    min_lead_mins: i64,
    max_per_quadrant: usize,
) -> [QuadrantData; QUADRANT_COUNT] {
    let specs = config.specs();
    let mut groups: [Vec<(i64, String)>; QUADRANT_COUNT] = Default::default();

    for dep in departures {
        let Some(direction) = dep.direction() else {
            continue;
        };

        let minutes = dep.minutes_until(now);
        if minutes <= min_lead_mins {
            continue;
        }

        if let Some(idx) = specs
            .iter()
            .position(|spec| spec.direction == direction && spec.accepts_line(&dep.line))
        {
            groups[idx].push((minutes, dep.line.clone()));
        }
    }

    std::array::from_fn(|i| {
        let mut departures = std::mem::take(&mut groups[i]);
        departures.sort_by_key(|&(minutes, _)| minutes);
        departures.truncate(max_per_quadrant);
        QuadrantData {
            label: specs[i].label.clone(),
            arrow: specs[i].direction,
            departures,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::quadrant::test_spec;
    use crate::domain::{Direction, GeoPoint};
    use chrono::TimeZone;

    const STOP: GeoPoint = GeoPoint {
        latitude: 52.55,
        longitude: 13.40,
    };
    // Due north of STOP
    const NORTH_OF_STOP: GeoPoint = GeoPoint {
        latitude: 52.65,
        longitude: 13.40,
    };
    // Due south of STOP
    const SOUTH_OF_STOP: GeoPoint = GeoPoint {
        latitude: 52.45,
        longitude: 13.40,
    };

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap()
    }

    fn dep(line: &str, minutes: i64, destination: GeoPoint) -> DepartureInfo {
        DepartureInfo {
            line: line.to_string(),
            stop: Some(STOP),
            destination: Some(destination),
            when: now() + chrono::Duration::minutes(minutes),
        }
    }

    fn config() -> QuadrantConfig {
        QuadrantConfig::new(vec![
            test_spec("north", Direction::North, &["S1", "S2"]),
            test_spec("south", Direction::South, &["S2", "S26"]),
            test_spec("nordost", Direction::North, &["S8", "S85"]),
            test_spec("ring", Direction::Clockwise, &["S8", "S85"]),
        ])
        .unwrap()
    }

    #[test]
    fn too_soon_is_dropped_kept_above_threshold() {
        let config = config();
        let deps = vec![dep("S2", 3, NORTH_OF_STOP)];
        let out = classify(&deps, now(), &config, 5, 2);
        assert!(out[0].departures.is_empty());

        let deps = vec![dep("S2", 8, NORTH_OF_STOP)];
        let out = classify(&deps, now(), &config, 5, 2);
        assert_eq!(out[0].departures, vec![(8, "S2".to_string())]);
    }

    #[test]
    fn threshold_is_exclusive() {
        let config = config();
        // Exactly at the threshold is still "too soon".
        let deps = vec![dep("S2", 5, NORTH_OF_STOP)];
        let out = classify(&deps, now(), &config, 5, 2);
        assert!(out[0].departures.is_empty());
    }

    #[test]
    fn sorts_ascending_and_truncates_to_cap() {
        let config = config();
        let deps = vec![
            dep("S2", 12, NORTH_OF_STOP),
            dep("S2", 3, NORTH_OF_STOP),
            dep("S2", 8, NORTH_OF_STOP),
        ];
        let out = classify(&deps, now(), &config, 0, 2);
        assert_eq!(
            out[0].departures,
            vec![(3, "S2".to_string()), (8, "S2".to_string())]
        );
    }

    #[test]
    fn ties_keep_arrival_order() {
        let config = config();
        let deps = vec![
            dep("S2", 7, NORTH_OF_STOP),
            dep("S1", 7, NORTH_OF_STOP),
        ];
        let out = classify(&deps, now(), &config, 0, 2);
        assert_eq!(
            out[0].departures,
            vec![(7, "S2".to_string()), (7, "S1".to_string())]
        );
    }

    #[test]
    fn always_four_outputs_in_spec_order() {
        let config = config();
        let out = classify(&[], now(), &config, 5, 2);
        assert_eq!(out.len(), 4);
        let labels: Vec<&str> = out.iter().map(|q| q.label.as_str()).collect();
        assert_eq!(labels, ["north", "south", "nordost", "ring"]);
        assert!(out.iter().all(|q| q.departures.is_empty()));
        assert_eq!(out[3].arrow, Direction::Clockwise);
    }

    #[test]
    fn first_matching_spec_wins() {
        // S2 northbound matches the "north" spec; the "south" spec also
        // lists S2 but has the wrong direction, and order decides anyway.
        let config = QuadrantConfig::new(vec![
            test_spec("first", Direction::North, &["S2"]),
            test_spec("second", Direction::North, &["S2"]),
            test_spec("third", Direction::South, &["S2"]),
            test_spec("fourth", Direction::Clockwise, &["S41"]),
        ])
        .unwrap();
        let deps = vec![dep("S2", 10, NORTH_OF_STOP)];
        let out = classify(&deps, now(), &config, 5, 2);
        assert_eq!(out[0].departures.len(), 1);
        assert!(out[1].departures.is_empty());
    }

    #[test]
    fn missing_coordinates_are_dropped() {
        let config = config();
        let mut no_dest = dep("S2", 10, NORTH_OF_STOP);
        no_dest.destination = None;
        let mut no_stop = dep("S2", 10, NORTH_OF_STOP);
        no_stop.stop = None;
        let out = classify(&[no_dest, no_stop], now(), &config, 5, 2);
        assert!(out.iter().all(|q| q.departures.is_empty()));
    }

    #[test]
    fn unmatched_line_is_dropped() {
        let config = config();
        let deps = vec![dep("U9", 10, NORTH_OF_STOP)];
        let out = classify(&deps, now(), &config, 5, 2);
        assert!(out.iter().all(|q| q.departures.is_empty()));
    }

    #[test]
    fn direction_overrides_feed_classification() {
        let config = config();
        // S85 heading geometrically south resolves to the clockwise loop,
        // so it lands in the ring quadrant, not the south one.
        let deps = vec![dep("S85", 10, SOUTH_OF_STOP)];
        let out = classify(&deps, now(), &config, 5, 2);
        assert!(out[1].departures.is_empty());
        assert_eq!(out[3].departures, vec![(10, "S85".to_string())]);
    }

    #[test]
    fn full_board_scenario() {
        let config = config();
        let deps = vec![
            dep("S1", 8, NORTH_OF_STOP),
            dep("S2", 11, NORTH_OF_STOP),
            dep("S2", 7, SOUTH_OF_STOP),
            dep("S26", 13, SOUTH_OF_STOP),
            dep("S8", 15, NORTH_OF_STOP),
            dep("S85", 24, NORTH_OF_STOP),
            dep("S85", 13, SOUTH_OF_STOP), // loop override → ring
            dep("S8", 24, SOUTH_OF_STOP),  // loop override → ring
        ];
        let out = classify(&deps, now(), &config, 5, 2);
        assert_eq!(
            out[0].departures,
            vec![(8, "S1".to_string()), (11, "S2".to_string())]
        );
        assert_eq!(
            out[1].departures,
            vec![(7, "S2".to_string()), (13, "S26".to_string())]
        );
        assert_eq!(
            out[2].departures,
            vec![(15, "S8".to_string()), (24, "S85".to_string())]
        );
        assert_eq!(
            out[3].departures,
            vec![(13, "S85".to_string()), (24, "S8".to_string())]
        );
    }
}
