//! Source-target move tokens.

use crate::square::Square;
use crate::types::TokenError;
use std::fmt;
use std::str::FromStr;

/// A move written as two squares joined by a hyphen, e.g. `e2-e4`.
///
/// A move token says nothing about legality; it only names a source and
/// a target square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveToken {
    pub from: Square,
    pub to: Square,
}

impl MoveToken {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl FromStr for MoveToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TokenError::InvalidMoveToken(s.to_string());
        let (from, to) = s.split_once('-').ok_or_else(bad)?;
        Ok(Self {
            from: from.parse().map_err(|_| bad())?,
            to: to.parse().map_err(|_| bad())?,
        })
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_moves() {
        let mv: MoveToken = "e2-e4".parse().unwrap();
        assert_eq!(mv.from.to_string(), "e2");
        assert_eq!(mv.to.to_string(), "e4");
        assert!("h8-f6".parse::<MoveToken>().is_ok());
    }

    #[test]
    fn rejects_malformed_moves() {
        for bad in ["E2-F4", "E2-F", "e2", "", "e2-e4-e5", "e2_e4", "e2-e9"] {
            assert!(bad.parse::<MoveToken>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn display_round_trips() {
        let mv: MoveToken = "a7-a8".parse().unwrap();
        assert_eq!(mv.to_string(), "a7-a8");
    }
}
