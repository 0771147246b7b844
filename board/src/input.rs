//! Translates pointer events into controller calls.

use crate::controller::BoardController;
use crate::hooks::{BoardHooks, DragVerdict, DropVerdict};
use crate::renderer::Renderer;
use notation::Square;

/// A pointer happening on a board cell, already resolved to a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    DragStart { square: Square },
    Drop { source: Square, target: Square },
    Enter { square: Square },
    Leave { square: Square },
    Click { square: Square },
}

/// Click-move selection phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ClickPhase {
    #[default]
    NoSelection,
    Selected(Square),
}

/// Feeds [`PointerEvent`]s into a [`BoardController`], consulting the
/// hooks along the way.
///
/// Drag/drop and click-move can be driven through the same adapter; the
/// caller decides which events to emit.
pub struct InputAdapter<H: BoardHooks> {
    hooks: H,
    click_phase: ClickPhase,
    drag_vetoed: bool,
}

impl<H: BoardHooks> InputAdapter<H> {
    pub fn new(hooks: H) -> Self {
        Self {
            hooks,
            click_phase: ClickPhase::default(),
            drag_vetoed: false,
        }
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// The square selected by click-move, if any. For highlight
    /// painting.
    pub fn selected(&self) -> Option<Square> {
        match self.click_phase {
            ClickPhase::NoSelection => None,
            ClickPhase::Selected(square) => Some(square),
        }
    }

    pub fn clear_selection(&mut self) {
        self.click_phase = ClickPhase::NoSelection;
    }

    pub fn handle<R: Renderer>(&mut self, board: &mut BoardController<R>, event: PointerEvent) {
        match event {
            PointerEvent::DragStart { square } => {
                let Some(piece) = board.position().piece_at(square) else {
                    // nothing to drag; swallow the matching drop
                    self.drag_vetoed = true;
                    return;
                };
                let verdict =
                    self.hooks
                        .on_drag(square, piece, board.position(), board.orientation());
                self.drag_vetoed = verdict == DragVerdict::Veto;
                if self.drag_vetoed {
                    tracing::debug!("drag from {square} vetoed");
                }
            }
            PointerEvent::Drop { source, target } => {
                if std::mem::take(&mut self.drag_vetoed) {
                    return;
                }
                let verdict =
                    self.hooks
                        .on_drop(source, target, board.position(), board.orientation());
                match verdict {
                    DropVerdict::Apply => board.make_move(source, target),
                    DropVerdict::Reject => tracing::debug!("drop {source}-{target} rejected"),
                }
            }
            PointerEvent::Enter { square } => {
                let piece = board.position().piece_at(square);
                self.hooks.on_mouseover_square(
                    square,
                    piece,
                    board.position(),
                    board.orientation(),
                );
            }
            PointerEvent::Leave { square } => {
                let piece = board.position().piece_at(square);
                self.hooks
                    .on_mouseout_square(square, piece, board.position(), board.orientation());
            }
            PointerEvent::Click { square } => self.handle_click(board, square),
        }
    }

    // Two-phase click-move: first click selects an occupied square, a
    // second click on an empty or enemy-occupied square issues the
    // move, a same-color occupant reselects.
    fn handle_click<R: Renderer>(&mut self, board: &mut BoardController<R>, square: Square) {
        match self.click_phase {
            ClickPhase::NoSelection => {
                if board.position().piece_at(square).is_some() {
                    self.click_phase = ClickPhase::Selected(square);
                }
            }
            ClickPhase::Selected(selected) => {
                let source_color = board.position().piece_at(selected).map(|p| p.color);
                let target_color = board.position().piece_at(square).map(|p| p.color);

                if source_color.is_some() && target_color != source_color {
                    board.make_move(selected, square);
                    self.click_phase = ClickPhase::NoSelection;
                } else if target_color.is_some() {
                    self.click_phase = ClickPhase::Selected(square);
                } else {
                    // selection went stale (source emptied under us)
                    self.click_phase = ClickPhase::NoSelection;
                }
            }
        }
    }
}
