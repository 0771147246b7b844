//! Orientation and the draw-order grid handed to renderers.

use notation::Square;
use std::fmt;

/// Which side's back rank is drawn at the bottom. A presentation
/// concern only; game semantics never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    White,
    Black,
}

impl Orientation {
    pub fn flipped(self) -> Self {
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
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One cell of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDescriptor {
    pub square: Square,
    pub is_light: bool,
}

/// The 64 cells in draw order, row-major from the top-left.
///
/// White orientation draws ranks 8 down to 1 top-to-bottom and files
/// `a` to `h` left-to-right; black reverses both axes.
pub fn cell_order(orientation: Orientation) -> Vec<CellDescriptor> {
    let mut cells: Vec<CellDescriptor> = Square::fen_order()
        .map(|square| CellDescriptor {
            square,
            is_light: square.is_light(),
        })
        .collect();
    if orientation == Orientation::Black {
        // reversing both axes of a row-major grid reverses the sequence
        cells.reverse();
    }
    cells
}
