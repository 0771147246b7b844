//! Board-notation codec: FEN piece placement to and from [`Position`].
//!
//! Only the placement field is interpreted. Trailing metadata (active
//! color, castling rights, clocks) is tolerated and stripped.

use crate::position::Position;
use crate::square::Square;
use crate::types::Piece;

/// Piece placement of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("expected 8 ranks, found {0}")]
    WrongRankCount(usize),
    #[error("rank {0} does not describe exactly 8 files")]
    BadRankWidth(u8),
    #[error("invalid piece character: {0:?}")]
    InvalidPiece(char),
}

/// Parse the piece placement of a FEN string into a position.
///
/// Walks the 8 `/`-separated ranks from rank 8 down to rank 1; digits
/// 1-8 skip that many files, letters place a piece (uppercase white,
/// lowercase black).
pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let placement = fen.split_whitespace().next().unwrap_or("");
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount(ranks.len()));
    }

    let mut position = Position::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as u8;
        let mut file: u32 = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::InvalidPiece(c));
                }
                file += skip;
            } else {
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece(c))?;
                if file > 7 {
                    return Err(FenError::BadRankWidth(rank + 1));
                }
                let Some(square) = Square::new(file as u8, rank) else {
                    return Err(FenError::BadRankWidth(rank + 1));
                };
                position.insert(square, piece);
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::BadRankWidth(rank + 1));
        }
    }

    Ok(position)
}

/// Format a position as FEN piece placement.
///
/// Empty squares are collapsed with a single run-length pass per rank,
/// so a maximal run always becomes one digit.
pub fn format_fen(position: &Position) -> String {
    let mut fen = String::with_capacity(71);
    let mut empty_run = 0u8;
    let mut current_rank = 7u8;

    for square in Square::fen_order() {
        if square.rank() != current_rank {
            flush_empty_run(&mut fen, &mut empty_run);
            fen.push('/');
            current_rank = square.rank();
        }
        match position.piece_at(square) {
            Some(piece) => {
                flush_empty_run(&mut fen, &mut empty_run);
                fen.push(piece.fen_char());
            }
            None => empty_run += 1,
        }
    }
    flush_empty_run(&mut fen, &mut empty_run);

    fen
}

fn flush_empty_run(fen: &mut String, run: &mut u8) {
    if *run > 0 {
        fen.push((b'0' + *run) as char);
        *run = 0;
    }
}
