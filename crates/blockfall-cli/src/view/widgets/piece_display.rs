use blockfall_engine::{PieceDraw, PieceRotation};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::{BlockDisplay, CellView};

/// Preview of a piece in its spawn orientation.
#[derive(Debug, Default)]
pub struct PieceDisplay<'a> {
    piece: Option<PieceDraw>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub fn new() -> Self {
        Self {
            piece: None,
            block: None,
        }
    }

    pub fn piece(self, piece: PieceDraw) -> Self {
        Self {
            piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        4 * BlockDisplay::WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 * BlockDisplay::HEIGHT + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let Some(piece) = self.piece else {
            return;
        };
        let shape = piece.kind.shape(PieceRotation::default());
        let (cols, rows) = (u16::from(shape.width()), u16::from(shape.height()));
        let piece_area = area.centered(
            Constraint::Length(cols * BlockDisplay::WIDTH),
            Constraint::Length(rows * BlockDisplay::HEIGHT),
        );

        let col_constraints = (0..cols).map(|_| Constraint::Length(BlockDisplay::WIDTH));
        let row_constraints = (0..rows).map(|_| Constraint::Length(BlockDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let occupied = BlockDisplay::from_cell(CellView::Block(piece.color), false);
        let empty = BlockDisplay::from_cell(CellView::Empty, false);
        for (y, grid_row) in (0..).zip(piece_area.layout_vec(&vertical)) {
            for (x, grid_cell) in (0..).zip(grid_row.layout_vec(&horizontal)) {
                let display = if shape.is_occupied(y, x) {
                    &occupied
                } else {
                    &empty
                };
                Widget::render(display, grid_cell, buf);
            }
        }
    }
}
