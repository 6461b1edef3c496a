use blockfall_engine::BlockColor;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::view::widgets::style;

/// What one board square shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Empty,
    /// Landing position of the active piece.
    Ghost,
    Block(BlockColor),
}

/// One board square, two terminal columns wide.
#[derive(Debug)]
pub struct BlockDisplay {
    style: Style,
    symbol: &'static str,
}

impl BlockDisplay {
    pub const WIDTH: u16 = 2;
    pub const HEIGHT: u16 = 1;

    pub fn from_cell(cell: CellView, show_dots: bool) -> Self {
        let (style, symbol) = match cell {
            CellView::Empty if show_dots => (style::EMPTY_DOT, "."),
            CellView::Empty => (style::EMPTY, ""),
            CellView::Ghost => (style::GHOST, "[]"),
            CellView::Block(color) => (style::block(color), ""),
        };
        Self { style, symbol }
    }
}

impl Widget for &BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Paragraph fills the whole area, not just the cells under the symbol.
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
