//! Geographic points and bearing math.

use serde::Deserialize;

use super::direction::Direction;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Forward great-circle bearing from `from` to `to`, in degrees in [0, 360).
///
/// The bearing is mathematically indeterminate for coincident points; this
/// implementation returns 0 there (atan2(0, 0) is 0).
pub fn initial_bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lon1 = from.longitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let lon2 = to.longitude.to_radians();
    let d_lon = lon2 - lon1;

    let x = d_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    let degrees = x.atan2(y).to_degrees();
    degrees.rem_euclid(360.0)
}

/// Coarse 4-way cardinal for a compass bearing.
///
/// The circle is divided into four 90°-wide sectors centered on the cardinal
/// directions. Sector boundaries (45°, 135°, 225°, 315°) round to the next
/// sector clockwise: `f64::round` rounds half away from zero, which is
/// round-half-up for the non-negative quotient here.
pub fn bearing_to_cardinal(bearing: f64) -> Direction {
    const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
    let normalized = bearing.rem_euclid(360.0);
    let idx = ((normalized / 90.0).round() as i64).rem_euclid(4) as usize;
    CARDINALS[idx]
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every bearing maps to one of the four cardinals.
        #[test]
        fn cardinal_is_total(b in 0.0f64..360.0) {
            let c = bearing_to_cardinal(b);
            prop_assert!(matches!(
                c,
                Direction::North | Direction::East | Direction::South | Direction::West
            ));
        }

        /// Adding a full turn never changes the cardinal.
        #[test]
        fn cardinal_is_periodic(b in 0.0f64..360.0) {
            prop_assert_eq!(bearing_to_cardinal(b), bearing_to_cardinal(b + 360.0));
        }

        /// Bearings are always normalized into [0, 360).
        #[test]
        fn bearing_in_range(
            lat1 in -80.0f64..80.0,
            lon1 in -180.0f64..180.0,
            lat2 in -80.0f64..80.0,
            lon2 in -180.0f64..180.0,
        ) {
            let b = initial_bearing(GeoPoint::new(lat1, lon1), GeoPoint::new(lat2, lon2));
            prop_assert!((0.0..360.0).contains(&b));
        }
    }
}
