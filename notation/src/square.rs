//! Board squares in algebraic notation.

use crate::types::TokenError;
use std::fmt;
use std::str::FromStr;

/// A square on the 8x8 board, `a1` through `h8`.
///
/// File and rank are held as zero-based indices (`a` = 0, rank `1` = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Build a square from zero-based file and rank indices.
    /// Returns `None` when either index is out of range.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if file > 7 || rank > 7 {
            return None;
        }
        Some(Self { file, rank })
    }

    /// Zero-based file index, `a` = 0 through `h` = 7.
    pub fn file(self) -> u8 {
        self.file
    }

    /// Zero-based rank index, rank `1` = 0 through rank `8` = 7.
    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank) as char
    }

    /// Checkerboard parity. `h1` is light, `a1` is dark.
    pub fn is_light(self) -> bool {
        (self.file + self.rank) % 2 == 1
    }

    /// All 64 squares, `a1` first, walking each rank file-by-file.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Square { file, rank }))
    }

    /// All 64 squares in board-notation order: `a8` first, rank 8 down
    /// to rank 1, files `a` to `h` within each rank.
    pub fn fen_order() -> impl Iterator<Item = Square> {
        (0..8)
            .rev()
            .flat_map(|rank| (0..8).map(move |file| Square { file, rank }))
    }
}

impl FromStr for Square {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => Ok(Self {
                file: file as u8 - b'a',
                rank: rank as u8 - b'1',
            }),
            _ => Err(TokenError::InvalidSquare(s.to_string())),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_squares() {
        let a1: Square = "a1".parse().unwrap();
        assert_eq!((a1.file(), a1.rank()), (0, 0));

        let h8: Square = "h8".parse().unwrap();
        assert_eq!((h8.file(), h8.rank()), (7, 7));

        assert!("e2".parse::<Square>().is_ok());
    }

    #[test]
    fn rejects_malformed_squares() {
        for bad in ["D2", "g9", "a", "", "a12", "i1", "a0", "1a"] {
            assert!(bad.parse::<Square>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn display_round_trips() {
        for square in Square::all() {
            let text = square.to_string();
            assert_eq!(text.parse::<Square>().unwrap(), square);
        }
    }

    #[test]
    fn parity() {
        assert!(!"a1".parse::<Square>().unwrap().is_light());
        assert!("h1".parse::<Square>().unwrap().is_light());
        assert!("a8".parse::<Square>().unwrap().is_light());
        assert!(!"h8".parse::<Square>().unwrap().is_light());
    }

    #[test]
    fn fen_order_starts_at_a8() {
        let mut order = Square::fen_order();
        assert_eq!(order.next().unwrap().to_string(), "a8");
        assert_eq!(order.last().unwrap().to_string(), "h1");
        assert_eq!(Square::fen_order().count(), 64);
    }
}
