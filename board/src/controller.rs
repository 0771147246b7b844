//! The board-state controller.

use crate::layout::{cell_order, Orientation};
use crate::renderer::Renderer;
use notation::{parse_fen, FenError, MoveToken, Position, Square, TokenError};

/// The ways a caller can hand a new position to the controller.
///
/// A sum type instead of runtime string-vs-map sniffing, so the
/// decode-or-accept branch is exhaustive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionSource {
    /// Board notation, trailing metadata tolerated.
    Fen(String),
    /// An already-typed position map.
    Map(Position),
    /// Untyped square/piece token pairs, e.g. straight out of JSON.
    Entries(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board notation: {0}")]
    InvalidNotation(#[from] FenError),
    #[error("invalid position map: {0}")]
    InvalidPosition(#[from] TokenError),
}

/// Owns the current position, orientation and square size, and drives
/// the renderer collaborator. One value per board; no process globals.
///
/// Construction seeds the standard starting position at white
/// orientation and draws it, so a freshly built controller is already
/// on screen.
pub struct BoardController<R: Renderer> {
    position: Position,
    orientation: Orientation,
    square_size: u16,
    renderer: R,
}

impl<R: Renderer> BoardController<R> {
    pub const DEFAULT_SQUARE_SIZE: u16 = 50;

    pub fn new(renderer: R) -> Self {
        let mut controller = Self {
            position: Position::standard(),
            orientation: Orientation::White,
            square_size: Self::DEFAULT_SQUARE_SIZE,
            renderer,
        };
        controller.renderer.set_square_size(controller.square_size);
        controller.redraw();
        controller
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn square_size(&self) -> u16 {
        self.square_size
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Replace the current position and redraw.
    ///
    /// Invalid input is reported and leaves both the state and the
    /// screen exactly as they were.
    pub fn set_position(&mut self, source: PositionSource) -> Result<(), BoardError> {
        let next = resolve_source(source)
            .inspect_err(|err| tracing::error!("rejected position update: {err}"))?;
        self.position = next;
        self.redraw();
        Ok(())
    }

    /// Toggle the orientation, redraw, and return the new value.
    pub fn flip(&mut self) -> Orientation {
        self.orientation = self.orientation.flipped();
        self.redraw();
        self.orientation
    }

    /// Resize the board. The square size is an eighth of the board
    /// edge; the renderer is told, no redraw is forced.
    pub fn set_board_size(&mut self, edge: u16) {
        self.square_size = edge / 8;
        self.renderer.set_square_size(self.square_size);
    }

    /// Relocate whatever occupies `source` to `target` and redraw.
    ///
    /// Notation-level semantics: an empty source is a silent no-op and
    /// a piece on the target is captured. Legality is the hooks'
    /// concern, upstream of this call.
    pub fn make_move(&mut self, source: Square, target: Square) {
        let mv = MoveToken::new(source, target);
        self.position = self.position.apply_move(mv);
        self.redraw();
    }

    /// String entry point for [`Self::make_move`]. Malformed tokens are
    /// dropped without touching state.
    pub fn make_move_token(&mut self, token: &str) {
        match token.parse::<MoveToken>() {
            Ok(mv) => self.make_move(mv.from, mv.to),
            Err(err) => tracing::warn!("ignoring move: {err}"),
        }
    }

    /// Recompute the grid for the current orientation and hand the
    /// position to the renderer.
    pub fn redraw(&mut self) {
        let cells = cell_order(self.orientation);
        self.renderer.draw(&cells, &self.position);
    }
}

fn resolve_source(source: PositionSource) -> Result<Position, BoardError> {
    match source {
        PositionSource::Fen(fen) => Ok(parse_fen(&fen)?),
        PositionSource::Map(position) => Ok(position),
        PositionSource::Entries(entries) => Ok(Position::from_entries(
            entries.iter().map(|(s, p)| (s.as_str(), p.as_str())),
        )?),
    }
}
