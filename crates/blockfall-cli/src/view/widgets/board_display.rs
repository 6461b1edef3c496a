use std::iter;

use blockfall_engine::{Board, Piece};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::{BlockDisplay, CellView};

/// Board grid with locked blocks, the active piece and its ghost.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    ghost: Option<Piece>,
    active_piece: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            ghost: None,
            active_piece: None,
            block: None,
        }
    }

    pub fn ghost(self, piece: Piece) -> Self {
        Self {
            ghost: Some(piece),
            ..self
        }
    }

    pub fn active_piece(self, piece: Piece) -> Self {
        Self {
            active_piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn columns(&self) -> u16 {
        u16::try_from(self.board.width()).unwrap_or(u16::MAX)
    }

    fn rows(&self) -> u16 {
        u16::try_from(self.board.height()).unwrap_or(u16::MAX)
    }

    pub fn width(&self) -> u16 {
        self.columns() * BlockDisplay::WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        self.rows() * BlockDisplay::HEIGHT + super::block_vertical_margin(self.block.as_ref())
    }

    /// Row-major view of every square, top row first.
    ///
    /// The active piece is drawn over the ghost, and only cells inside the
    /// board are shown.
    pub fn cell_views(&self) -> Vec<CellView> {
        let width = self.board.width();
        let mut cells: Vec<CellView> = self
            .board
            .rows()
            .flatten()
            .map(|cell| cell.map_or(CellView::Empty, CellView::Block))
            .collect();

        let mut paint = |piece: Piece, view: CellView| {
            for (row, col) in piece.cells() {
                if self.board.cell(row, col).is_some()
                    && let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col))
                {
                    cells[row * width + col] = view;
                }
            }
        };
        if let Some(ghost) = self.ghost {
            paint(ghost, CellView::Ghost);
        }
        if let Some(piece) = self.active_piece {
            paint(piece, CellView::Block(piece.color()));
        }
        cells
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..self.columns()).map(|_| Constraint::Length(BlockDisplay::WIDTH));
        let row_constraints = (0..self.rows()).map(|_| Constraint::Length(BlockDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout_vec(&vertical)
            .into_iter()
            .flat_map(|row| row.layout_vec(&horizontal));

        for (grid_cell, view) in iter::zip(grid_cells, self.cell_views()) {
            Widget::render(&BlockDisplay::from_cell(view, true), grid_cell, buf);
        }
    }
}
