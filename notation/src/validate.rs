//! Boolean validators over raw notation input.
//!
//! Thin predicates for boundary checks where a caller only needs a
//! yes/no answer; the typed parsers remain the single source of grammar
//! truth. None of these panic.

use crate::fen::parse_fen;
use crate::moves::MoveToken;
use crate::position::Position;
use crate::square::Square;
use crate::types::Piece;

/// True iff `s` matches the square grammar `[a-h][1-8]`.
pub fn is_valid_square(s: &str) -> bool {
    s.parse::<Square>().is_ok()
}

/// True iff `s` matches the piece-token grammar `[wb][KQRNBP]`.
pub fn is_valid_piece_token(s: &str) -> bool {
    s.parse::<Piece>().is_ok()
}

/// True iff `s` is two valid squares joined by a hyphen.
pub fn is_valid_move_token(s: &str) -> bool {
    s.parse::<MoveToken>().is_ok()
}

/// True iff `s` is valid board notation, ignoring trailing metadata.
pub fn is_valid_fen(s: &str) -> bool {
    parse_fen(s).is_ok()
}

/// True iff every pair is a valid square token mapped to a valid piece
/// token.
pub fn is_valid_position_entries<'a, I>(entries: I) -> bool
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    Position::from_entries(entries).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::START_FEN;

    #[test]
    fn square_predicate() {
        assert!(is_valid_square("a1"));
        assert!(is_valid_square("e2"));
        assert!(!is_valid_square("D2"));
        assert!(!is_valid_square("g9"));
        assert!(!is_valid_square("a"));
        assert!(!is_valid_square(""));
    }

    #[test]
    fn piece_predicate() {
        assert!(is_valid_piece_token("bP"));
        assert!(is_valid_piece_token("wK"));
        assert!(!is_valid_piece_token("WR"));
        assert!(!is_valid_piece_token("Wr"));
        assert!(!is_valid_piece_token("a"));
    }

    #[test]
    fn move_predicate() {
        assert!(is_valid_move_token("e2-e4"));
        assert!(is_valid_move_token("h8-f6"));
        assert!(!is_valid_move_token("E2-F4"));
        assert!(!is_valid_move_token("E2-F"));
        assert!(!is_valid_move_token("e2"));
    }

    #[test]
    fn fen_predicate() {
        assert!(is_valid_fen(START_FEN));
        assert!(is_valid_fen("8/8/8/8/8/8/8/8"));
        assert!(is_valid_fen(
            "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R"
        ));
        assert!(is_valid_fen(
            "3r3r/1p4pp/2nb1k2/pP3p2/8/PB2PN2/p4PPP/R4RK1 b - - 0 1"
        ));
        assert!(!is_valid_fen(
            "3r3z/1p4pp/2nb1k2/pP3p2/8/PB2PN2/p4PPP/R4RK1 b - - 0 1"
        ));
        assert!(!is_valid_fen("anbqkbnr/8/8/8/8/8/PPPPPPPP/8"));
        assert!(!is_valid_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/"));
        assert!(!is_valid_fen(""));
    }

    #[test]
    fn position_entries_predicate() {
        assert!(is_valid_position_entries([]));
        assert!(is_valid_position_entries([("e2", "wP")]));
        assert!(is_valid_position_entries([("e2", "wP"), ("d2", "wP")]));
        assert!(!is_valid_position_entries([("e2", "BP")]));
        assert!(!is_valid_position_entries([("y2", "wP")]));
        // board notation is not a position map
        assert!(!is_valid_position_entries([(START_FEN, "wP")]));
    }
}
