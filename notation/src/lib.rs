//! Position/notation core for boardtty.
//!
//! This crate owns the board vocabulary: square, piece and move tokens,
//! the square -> piece position map, and the rank-major board notation
//! codec (FEN piece placement). Everything here is pure and synchronous;
//! rules checking, rendering and engine search live in collaborator
//! crates.

pub mod fen;
pub mod moves;
pub mod position;
pub mod square;
pub mod types;
pub mod validate;

pub use fen::{format_fen, parse_fen, FenError, START_FEN};
pub use moves::MoveToken;
pub use position::Position;
pub use square::Square;
pub use types::{Color, Piece, Role, TokenError};
pub use validate::{
    is_valid_fen, is_valid_move_token, is_valid_piece_token, is_valid_position_entries,
    is_valid_square,
};
