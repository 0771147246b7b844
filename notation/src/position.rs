//! The square -> piece mapping representing a board state.

use crate::moves::MoveToken;
use crate::square::Square;
use crate::types::{Color, Piece, Role, TokenError};
use std::collections::BTreeMap;

/// A board position: which piece stands on which square.
///
/// A square absent from the map is empty. The map never ties piece
/// counts to chess legality; that is the rules collaborator's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    squares: BTreeMap<Square, Piece>,
}

impl Position {
    /// A position with no pieces at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard starting arrangement.
    pub fn standard() -> Self {
        let mut squares = BTreeMap::new();
        for square in Square::all() {
            let color = match square.rank() {
                0 | 1 => Color::White,
                6 | 7 => Color::Black,
                _ => continue,
            };
            let role = match square.rank() {
                1 | 6 => Role::Pawn,
                _ => match square.file() {
                    0 | 7 => Role::Rook,
                    1 | 6 => Role::Knight,
                    2 | 5 => Role::Bishop,
                    3 => Role::Queen,
                    _ => Role::King,
                },
            };
            squares.insert(square, Piece::new(color, role));
        }
        Self { squares }
    }

    /// Build a position from untyped square/piece token pairs, e.g. as
    /// read from a JSON object. Fails on the first malformed token.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, TokenError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut squares = BTreeMap::new();
        for (square, piece) in entries {
            squares.insert(square.parse::<Square>()?, piece.parse::<Piece>()?);
        }
        Ok(Self { squares })
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares.get(&square).copied()
    }

    pub fn insert(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares.insert(square, piece)
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares.remove(&square)
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().map(|(&square, &piece)| (square, piece))
    }

    /// Apply an ordered sequence of moves, producing a new position.
    ///
    /// The input position is never mutated. A move whose source square
    /// is empty is skipped silently; a piece already on the target
    /// square is overwritten. Legality is not checked here.
    pub fn apply_moves(&self, moves: &[MoveToken]) -> Position {
        let mut next = self.clone();
        for mv in moves {
            let Some(piece) = next.remove(mv.from) else {
                continue;
            };
            next.insert(mv.to, piece);
        }
        next
    }

    pub fn apply_move(&self, mv: MoveToken) -> Position {
        self.apply_moves(std::slice::from_ref(&mv))
    }
}

impl FromIterator<(Square, Piece)> for Position {
    fn from_iter<I: IntoIterator<Item = (Square, Piece)>>(iter: I) -> Self {
        Self {
            squares: iter.into_iter().collect(),
        }
    }
}
