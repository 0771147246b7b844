//! Canonical piece and color types for the project.

use std::fmt;
use std::str::FromStr;

/// Errors from parsing atomic notation tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("invalid square token: {0:?}")]
    InvalidSquare(String),
    #[error("invalid piece token: {0:?}")]
    InvalidPieceToken(String),
    #[error("invalid move token: {0:?}")]
    InvalidMoveToken(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Role {
    pub fn to_char_upper(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    pub fn to_char_lower(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(Self::Pawn),
            'n' => Some(Self::Knight),
            'b' => Some(Self::Bishop),
            'r' => Some(Self::Rook),
            'q' => Some(Self::Queen),
            'k' => Some(Self::King),
            _ => None,
        }
    }
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// Color tag used in piece tokens: `w` or `b`.
    pub fn tag(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }
}

/// A colored piece, written as a two-character token such as `wK` or `bP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    pub fn new(color: Color, role: Role) -> Self {
        Self { color, role }
    }

    /// Single-letter board-notation form: uppercase for white,
    /// lowercase for black.
    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.role.to_char_upper(),
            Color::Black => self.role.to_char_lower(),
        }
    }

    pub fn from_fen_char(c: char) -> Option<Self> {
        let role = Role::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, role })
    }
}

impl FromStr for Piece {
    type Err = TokenError;

    // Piece tokens are a color tag followed by an uppercase role
    // letter: `wK`, `bP`. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TokenError::InvalidPieceToken(s.to_string());
        let mut chars = s.chars();
        let (tag, role, rest) = (chars.next(), chars.next(), chars.next());
        if rest.is_some() {
            return Err(bad());
        }
        let color = match tag {
            Some('w') => Color::White,
            Some('b') => Color::Black,
            _ => return Err(bad()),
        };
        let role = match role {
            Some(c @ 'A'..='Z') => Role::from_char(c).ok_or_else(bad)?,
            _ => return Err(bad()),
        };
        Ok(Self { color, role })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.tag(), self.role.to_char_upper())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
