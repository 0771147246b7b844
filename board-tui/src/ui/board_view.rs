//! Terminal renderer for the board controller, plus the ratatui widget
//! that paints it.
//!
//! The renderer caches whatever the controller last handed it; the
//! widget reads that cache each frame. Hit-testing reuses the exact
//! geometry of the last render, so a mouse click always lands on the
//! square that was drawn under it.

use board::{CellDescriptor, Renderer};
use notation::{Color as PieceColor, Position, Role, Square};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use std::cell::Cell;

use crate::theme::Theme;

/// Renderer backing the terminal board.
pub struct TuiRenderer {
    cells: Vec<CellDescriptor>,
    position: Position,
    square_size: u16,
    // updated during render so locate() sees the drawn geometry
    viewport: Cell<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Geometry {
    origin_x: u16,
    origin_y: u16,
    cell_w: u16,
    cell_h: u16,
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            position: Position::empty(),
            square_size: 1,
            viewport: Cell::new(Rect::default()),
        }
    }
}

impl Renderer for TuiRenderer {
    fn draw(&mut self, cells: &[CellDescriptor], position: &Position) {
        self.cells = cells.to_vec();
        self.position = position.clone();
    }

    fn set_square_size(&mut self, size: u16) {
        self.square_size = size;
    }
}

// two columns on the left for rank labels, one row at the bottom for
// file labels
const LABEL_COLS: u16 = 2;
const LABEL_ROWS: u16 = 1;

impl TuiRenderer {
    fn set_viewport(&self, area: Rect) {
        self.viewport.set(area);
    }

    /// Grid placement within `area`: cells sized from the configured
    /// square size, shrunk to fit, and centered.
    fn geometry(&self, area: Rect) -> Option<Geometry> {
        let usable_w = area.width.checked_sub(LABEL_COLS)?;
        let usable_h = area.height.checked_sub(LABEL_ROWS)?;
        if usable_w < 8 || usable_h < 8 {
            return None;
        }
        let cell_h = self.square_size.clamp(1, 9).min(usable_h / 8);
        let cell_w = (cell_h * 2 + 1).min(usable_w / 8);
        let origin_x = area.x + LABEL_COLS + (usable_w - cell_w * 8) / 2;
        let origin_y = area.y + (usable_h - cell_h * 8) / 2;
        Some(Geometry {
            origin_x,
            origin_y,
            cell_w,
            cell_h,
        })
    }

    /// The square drawn under a terminal coordinate, if any.
    pub fn locate(&self, column: u16, row: u16) -> Option<Square> {
        let geometry = self.geometry(self.viewport.get())?;
        if self.cells.len() != 64 {
            return None;
        }
        if column < geometry.origin_x || row < geometry.origin_y {
            return None;
        }
        let col = (column - geometry.origin_x) / geometry.cell_w;
        let line = (row - geometry.origin_y) / geometry.cell_h;
        if col > 7 || line > 7 {
            return None;
        }
        Some(self.cells[(line * 8 + col) as usize].square)
    }
}

fn glyph(role: Role) -> &'static str {
    match role {
        Role::King => "\u{265A}",
        Role::Queen => "\u{265B}",
        Role::Rook => "\u{265C}",
        Role::Bishop => "\u{265D}",
        Role::Knight => "\u{265E}",
        Role::Pawn => "\u{265F}",
    }
}

/// One frame of the board: squares, pieces, coordinate labels, and the
/// selection/legal-move overlays.
pub struct BoardView<'a> {
    pub renderer: &'a TuiRenderer,
    pub theme: &'a Theme,
    pub selected: Option<Square>,
    pub highlighted: &'a [Square],
}

impl BoardView<'_> {
    fn background(&self, cell: &CellDescriptor) -> ratatui::style::Color {
        let pick = |pair: (ratatui::style::Color, ratatui::style::Color)| {
            if cell.is_light {
                pair.0
            } else {
                pair.1
            }
        };
        if self.selected == Some(cell.square) {
            pick(self.theme.selected)
        } else if self.highlighted.contains(&cell.square) {
            pick(self.theme.legal_move)
        } else if cell.is_light {
            self.theme.light_square
        } else {
            self.theme.dark_square
        }
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.renderer.set_viewport(area);
        let Some(geometry) = self.renderer.geometry(area) else {
            return;
        };
        if self.renderer.cells.len() != 64 {
            return;
        }

        let label_style = Style::default().fg(self.theme.board_label);
        for (index, cell) in self.renderer.cells.iter().enumerate() {
            let col = (index % 8) as u16;
            let line = (index / 8) as u16;
            let x0 = geometry.origin_x + col * geometry.cell_w;
            let y0 = geometry.origin_y + line * geometry.cell_h;
            let bg = self.background(cell);

            for dy in 0..geometry.cell_h {
                for dx in 0..geometry.cell_w {
                    let (px, py) = (x0 + dx, y0 + dy);
                    if px < area.right() && py < area.bottom() {
                        buf[(px, py)].set_symbol(" ").set_bg(bg);
                    }
                }
            }

            if let Some(piece) = self.renderer.position.piece_at(cell.square) {
                let fg = match piece.color {
                    PieceColor::White => self.theme.white_piece,
                    PieceColor::Black => self.theme.black_piece,
                };
                let px = x0 + geometry.cell_w / 2;
                let py = y0 + geometry.cell_h / 2;
                if px < area.right() && py < area.bottom() {
                    buf[(px, py)]
                        .set_symbol(glyph(piece.role))
                        .set_style(Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD));
                }
            }

            // rank label to the left of the first column
            if col == 0 && geometry.origin_x >= area.x + LABEL_COLS {
                let py = y0 + geometry.cell_h / 2;
                if py < area.bottom() {
                    buf[(geometry.origin_x - LABEL_COLS, py)]
                        .set_char(cell.square.rank_char())
                        .set_style(label_style);
                }
            }

            // file label under the last line
            if line == 7 {
                let px = x0 + geometry.cell_w / 2;
                let py = geometry.origin_y + 8 * geometry.cell_h;
                if px < area.right() && py < area.bottom() {
                    buf[(px, py)]
                        .set_char(cell.square.file_char())
                        .set_style(label_style);
                }
            }
        }
    }
}
