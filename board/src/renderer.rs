//! Drawing surface contract consumed by the controller.

use crate::layout::CellDescriptor;
use notation::Position;

/// A surface that can place piece glyphs on cells.
///
/// The controller computes the cell ordering and hands over the
/// position; how cells become pixels (or terminal characters) is
/// entirely the implementor's business.
pub trait Renderer {
    /// Redraw the whole board. `cells` holds the 64 cells in draw
    /// order, row-major from the top-left.
    fn draw(&mut self, cells: &[CellDescriptor], position: &Position);

    /// The square edge length changed.
    fn set_square_size(&mut self, size: u16);
}

/// Renderer that draws nothing. Useful for headless use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _cells: &[CellDescriptor], _position: &Position) {}

    fn set_square_size(&mut self, _size: u16) {}
}
