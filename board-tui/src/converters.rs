// Conversion utilities between the notation crate's string-rooted types
// and the cozy-chess types the rules collaborator speaks.

use cozy_chess::{File, Rank};

/// Convert a board square to a cozy-chess square.
pub fn to_rules_square(square: notation::Square) -> cozy_chess::Square {
    cozy_chess::Square::new(
        File::index(square.file() as usize),
        Rank::index(square.rank() as usize),
    )
}

/// Convert a cozy-chess square back to a board square.
pub fn from_rules_square(square: cozy_chess::Square) -> Option<notation::Square> {
    notation::Square::new(file_index(square.file()), rank_index(square.rank()))
}

/// Convert a cozy-chess color to the notation color.
pub fn from_rules_color(color: cozy_chess::Color) -> notation::Color {
    match color {
        cozy_chess::Color::White => notation::Color::White,
        cozy_chess::Color::Black => notation::Color::Black,
    }
}

fn file_index(file: File) -> u8 {
    match file {
        File::A => 0,
        File::B => 1,
        File::C => 2,
        File::D => 3,
        File::E => 4,
        File::F => 5,
        File::G => 6,
        File::H => 7,
    }
}

fn rank_index(rank: Rank) -> u8 {
    match rank {
        Rank::First => 0,
        Rank::Second => 1,
        Rank::Third => 2,
        Rank::Fourth => 3,
        Rank::Fifth => 4,
        Rank::Sixth => 5,
        Rank::Seventh => 6,
        Rank::Eighth => 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_round_trip() {
        for square in notation::Square::all() {
            let rules = to_rules_square(square);
            assert_eq!(from_rules_square(rules), Some(square));
        }
    }

    #[test]
    fn named_squares_agree() {
        let e2: notation::Square = "e2".parse().unwrap();
        assert_eq!(
            to_rules_square(e2),
            cozy_chess::Square::new(File::E, Rank::Second)
        );
    }
}
