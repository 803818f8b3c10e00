//! Directional glyphs and line-specific override rules.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an unknown direction glyph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction glyph: {glyph}")]
pub struct InvalidDirection {
    glyph: String,
}

/// A departure direction as shown on the board.
///
/// The four cardinals come from the geometric bearing; the two loop
/// directions are only ever produced by line-specific overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// The display glyph for this direction.
    pub fn glyph(self) -> &'static str {
        match self {
            Direction::North => "↑",
            Direction::East => "→",
            Direction::South => "↓",
            Direction::West => "←",
            Direction::Clockwise => "↻",
            Direction::CounterClockwise => "↺",
        }
    }

    /// Parse a direction from its display glyph.
    pub fn parse(s: &str) -> Result<Self, InvalidDirection> {
        match s {
            "↑" => Ok(Direction::North),
            "→" => Ok(Direction::East),
            "↓" => Ok(Direction::South),
            "←" => Ok(Direction::West),
            "↻" => Ok(Direction::Clockwise),
            "↺" => Ok(Direction::CounterClockwise),
            other => Err(InvalidDirection {
                glyph: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Direction::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Apply the line-specific direction overrides, first match wins.
///
/// S41 and S42 are the two running directions of the Berlin Ringbahn; their
/// geometric bearing is meaningless mid-loop, so they are pinned to the loop
/// glyphs. S8 and S85 share a loop segment whose bearing is misleading near
/// the junction, and S1 has a platform-numbering quirk at its terminus.
///
/// Total: any line not named here passes the geometric cardinal through.
pub fn resolve_direction(line: &str, cardinal: Direction) -> Direction {
    match line {
        "S41" => Direction::Clockwise,
        "S42" => Direction::CounterClockwise,
        "S8" | "S85" if matches!(cardinal, Direction::East | Direction::South) => {
            Direction::Clockwise
        }
        "S1" if cardinal == Direction::West => Direction::South,
        _ => cardinal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_lines_are_pinned_regardless_of_cardinal() {
        for cardinal in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ] {
            assert_eq!(resolve_direction("S41", cardinal), Direction::Clockwise);
            assert_eq!(
                resolve_direction("S42", cardinal),
                Direction::CounterClockwise
            );
        }
    }

    #[test]
    fn loop_segment_lines_remap_east_and_south() {
        assert_eq!(
            resolve_direction("S8", Direction::East),
            Direction::Clockwise
        );
        assert_eq!(
            resolve_direction("S85", Direction::South),
            Direction::Clockwise
        );
        assert_eq!(
            resolve_direction("S8", Direction::South),
            Direction::Clockwise
        );
        assert_eq!(
            resolve_direction("S85", Direction::East),
            Direction::Clockwise
        );
        // North and west pass through untouched
        assert_eq!(resolve_direction("S8", Direction::North), Direction::North);
        assert_eq!(resolve_direction("S85", Direction::West), Direction::West);
    }

    #[test]
    fn s1_westbound_remaps_to_south() {
        assert_eq!(resolve_direction("S1", Direction::West), Direction::South);
        assert_eq!(resolve_direction("S1", Direction::East), Direction::East);
        assert_eq!(resolve_direction("S1", Direction::North), Direction::North);
    }

    #[test]
    fn unlisted_lines_pass_through() {
        assert_eq!(resolve_direction("S2", Direction::North), Direction::North);
        assert_eq!(resolve_direction("U8", Direction::West), Direction::West);
        assert_eq!(resolve_direction("", Direction::South), Direction::South);
    }

    #[test]
    fn glyph_roundtrip() {
        for d in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
            Direction::Clockwise,
            Direction::CounterClockwise,
        ] {
            assert_eq!(Direction::parse(d.glyph()).unwrap(), d);
        }
    }

    #[test]
    fn parse_rejects_unknown_glyphs() {
        assert!(Direction::parse("N").is_err());
        assert!(Direction::parse("").is_err());
        assert!(Direction::parse("⇑").is_err());
    }

    #[test]
    fn serde_uses_glyphs() {
        let json = serde_json::to_string(&Direction::Clockwise).unwrap();
        assert_eq!(json, "\"↻\"");
        let back: Direction = serde_json::from_str("\"←\"").unwrap();
        assert_eq!(back, Direction::West);
        assert!(serde_json::from_str::<Direction>("\"x\"").is_err());
    }
}
