//! Core domain types for the departure board.
//!
//! Everything here is pure computation over in-memory data: geographic
//! bearings, direction resolution, and the narrow departure view the board
//! core consumes.

mod annotate;
mod departure;
mod direction;
mod geo;

pub use annotate::{WalkThresholds, cleanse_provenance, transport_kind, walk_thresholds};
pub use departure::DepartureInfo;
pub use direction::{Direction, InvalidDirection, resolve_direction};
pub use geo::{GeoPoint, bearing_to_cardinal, initial_bearing};
