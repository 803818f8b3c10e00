//! Quadrant configuration and classification output.

use serde::Deserialize;

use crate::domain::Direction;

/// The display always has exactly this many quadrants.
pub const QUADRANT_COUNT: usize = 4;

/// Error returned for a malformed quadrant configuration.
///
/// The display geometry assumes exactly four zones, so this is rejected at
/// construction rather than silently mis-rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuadrantConfigError {
    #[error("expected exactly 4 quadrants, got {0}")]
    WrongCount(usize),

    #[error("duplicate quadrant key: {0}")]
    DuplicateKey(String),
}

/// One display zone: which lines it accepts, in which resolved direction,
/// and how it is labelled.
#[derive(Debug, Clone, Deserialize)]
pub struct QuadrantSpec {
    /// Unique key, used for configuration and diagnostics.
    pub key: String,
    /// Label text drawn next to the arrow.
    pub label: String,
    /// Resolved direction this quadrant shows.
    pub direction: Direction,
    /// Line names accepted by this quadrant.
    pub lines: Vec<String>,
}

impl QuadrantSpec {
    pub fn accepts_line(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

/// A validated set of exactly four quadrant specs, in display order
/// (top-left, top-right, bottom-left, bottom-right).
#[derive(Debug, Clone)]
pub struct QuadrantConfig {
    specs: [QuadrantSpec; QUADRANT_COUNT],
}

impl QuadrantConfig {
    /// Validate and fix the quadrant layout. Fails for anything other than
    /// four specs with unique keys.
    pub fn new(specs: Vec<QuadrantSpec>) -> Result<Self, QuadrantConfigError> {
        let count = specs.len();
        let specs: [QuadrantSpec; QUADRANT_COUNT] = specs
            .try_into()
            .map_err(|_| QuadrantConfigError::WrongCount(count))?;

        for i in 0..QUADRANT_COUNT {
            for j in (i + 1)..QUADRANT_COUNT {
                if specs[i].key == specs[j].key {
                    return Err(QuadrantConfigError::DuplicateKey(specs[i].key.clone()));
                }
            }
        }

        Ok(Self { specs })
    }

    pub fn specs(&self) -> &[QuadrantSpec; QUADRANT_COUNT] {
        &self.specs
    }
}

/// One quadrant's display data: label, arrow, and the soonest departures as
/// (minutes-until, line-name) pairs sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantData {
    pub label: String,
    pub arrow: Direction,
    pub departures: Vec<(i64, String)>,
}

impl QuadrantData {
    /// Empty placeholder used to pad short quadrant lists for rendering.
    pub fn placeholder() -> Self {
        Self {
            label: "—".to_string(),
            arrow: Direction::North,
            departures: Vec::new(),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_spec(key: &str, direction: Direction, lines: &[&str]) -> QuadrantSpec {
    QuadrantSpec {
        key: key.to_string(),
        label: key.to_string(),
        direction,
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}
