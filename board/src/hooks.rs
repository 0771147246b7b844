//! Interaction hook points consulted by the input adapter.

use crate::layout::Orientation;
use notation::{Piece, Position, Square};

/// Outcome of the drag hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragVerdict {
    Allow,
    Veto,
}

/// Outcome of the drop hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropVerdict {
    Apply,
    Reject,
}

/// Hook points around drags, drops and hovers.
///
/// Every method has a default body spelling out the documented
/// behavior of an absent hook: drags are allowed, drops are applied,
/// hover is ignored. Implement only the points you care about.
pub trait BoardHooks {
    /// A drag started on an occupied square. Returning
    /// [`DragVerdict::Veto`] makes the adapter ignore the matching drop.
    fn on_drag(
        &mut self,
        source: Square,
        piece: Piece,
        position: &Position,
        orientation: Orientation,
    ) -> DragVerdict {
        let _ = (source, piece, position, orientation);
        DragVerdict::Allow
    }

    /// A dragged piece was released over a cell. The move is applied
    /// only on [`DropVerdict::Apply`].
    fn on_drop(
        &mut self,
        source: Square,
        target: Square,
        position: &Position,
        orientation: Orientation,
    ) -> DropVerdict {
        let _ = (source, target, position, orientation);
        DropVerdict::Apply
    }

    /// The pointer entered a cell. Purely observational.
    fn on_mouseover_square(
        &mut self,
        square: Square,
        piece: Option<Piece>,
        position: &Position,
        orientation: Orientation,
    ) {
        let _ = (square, piece, position, orientation);
    }

    /// The pointer left a cell. Purely observational.
    fn on_mouseout_square(
        &mut self,
        square: Square,
        piece: Option<Piece>,
        position: &Position,
        orientation: Orientation,
    ) {
        let _ = (square, piece, position, orientation);
    }
}

/// Hook set with every point left at its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl BoardHooks for NoHooks {}

/// Logs every hook invocation and keeps the default verdicts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHooks;

impl BoardHooks for LoggingHooks {
    fn on_drag(
        &mut self,
        source: Square,
        piece: Piece,
        _position: &Position,
        orientation: Orientation,
    ) -> DragVerdict {
        tracing::debug!("drag {piece} from {source} ({orientation} orientation)");
        DragVerdict::Allow
    }

    fn on_drop(
        &mut self,
        source: Square,
        target: Square,
        _position: &Position,
        _orientation: Orientation,
    ) -> DropVerdict {
        tracing::debug!("drop {source}-{target}");
        DropVerdict::Apply
    }

    fn on_mouseover_square(
        &mut self,
        square: Square,
        piece: Option<Piece>,
        _position: &Position,
        _orientation: Orientation,
    ) {
        tracing::trace!("hover enter {square} ({piece:?})");
    }

    fn on_mouseout_square(
        &mut self,
        square: Square,
        _piece: Option<Piece>,
        _position: &Position,
        _orientation: Orientation,
    ) {
        tracing::trace!("hover leave {square}");
    }
}
