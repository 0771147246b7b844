use notation::{format_fen, is_valid_fen, parse_fen, Color, Piece, Position, Role, Square};
use proptest::prelude::*;

fn any_square() -> impl Strategy<Value = Square> {
    (0u8..8, 0u8..8).prop_map(|(file, rank)| {
        Square::new(file, rank).expect("indices are in range by construction")
    })
}

fn any_piece() -> impl Strategy<Value = Piece> {
    (
        prop_oneof![Just(Color::White), Just(Color::Black)],
        prop_oneof![
            Just(Role::Pawn),
            Just(Role::Knight),
            Just(Role::Bishop),
            Just(Role::Rook),
            Just(Role::Queen),
            Just(Role::King),
        ],
    )
        .prop_map(|(color, role)| Piece::new(color, role))
}

fn any_position() -> impl Strategy<Value = Position> {
    prop::collection::btree_map(any_square(), any_piece(), 0..=64)
        .prop_map(|map| map.into_iter().collect())
}

proptest! {
    #[test]
    fn format_then_parse_is_identity(position in any_position()) {
        let fen = format_fen(&position);
        let parsed = parse_fen(&fen).expect("formatted notation must parse");
        prop_assert_eq!(parsed, position);
    }

    #[test]
    fn formatted_output_is_valid_notation(position in any_position()) {
        prop_assert!(is_valid_fen(&format_fen(&position)));
    }

    #[test]
    fn formatted_ranks_are_well_formed(position in any_position()) {
        let fen = format_fen(&position);
        let ranks: Vec<&str> = fen.split('/').collect();
        prop_assert_eq!(ranks.len(), 8);
        for rank in ranks {
            let width: u32 = rank
                .chars()
                .map(|c| c.to_digit(10).unwrap_or(1))
                .sum();
            prop_assert_eq!(width, 8);
            // a single-pass RLE never emits adjacent digits
            let digit_pairs = rank
                .as_bytes()
                .windows(2)
                .any(|w| w[0].is_ascii_digit() && w[1].is_ascii_digit());
            prop_assert!(!digit_pairs);
        }
    }

    #[test]
    fn square_tokens_never_panic(s in "\\PC{0,4}") {
        let _ = notation::is_valid_square(&s);
        let _ = notation::is_valid_piece_token(&s);
        let _ = notation::is_valid_move_token(&s);
        let _ = notation::is_valid_fen(&s);
    }
}
