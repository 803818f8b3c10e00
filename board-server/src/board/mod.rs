//! Departure classification into the four display quadrants.

mod classify;
mod quadrant;

pub use classify::{DEFAULT_MAX_PER_QUADRANT, classify};
pub use quadrant::{
    QUADRANT_COUNT, QuadrantConfig, QuadrantConfigError, QuadrantData, QuadrantSpec,
};
