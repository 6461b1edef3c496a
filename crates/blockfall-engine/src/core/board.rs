use super::{
    block::{BlockColor, Cell},
    piece::{Piece, PieceKind},
};

/// Fixed-size grid of cells, stored row-major in a flat arena.
///
/// Row 0 is the top of the visible board and row `height - 1` the bottom.
/// Coordinates are signed so that pieces partially above the board (negative
/// rows) and candidate moves off either side can be checked without
/// overflow; anything outside `[0, height) × [0, width)` is treated as out of
/// bounds rather than panicking.
///
/// # Example
///
/// ```
/// use blockfall_engine::{BlockColor, Board};
///
/// let mut board = Board::new(4, 4);
/// board.commit([(3, 0), (3, 1), (3, 2), (3, 3)], BlockColor::Cyan);
///
/// assert_eq!(board.find_full_rows(), vec![3]);
/// assert_eq!(board.clear_full_rows(), 1);
/// assert_eq!(board.occupied_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0, "board width must be positive");
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.height)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.width)?;
        Some(row * self.width + col)
    }

    fn row_cells(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.width..][..self.width]
    }

    /// Returns the cell at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Checks whether `(row, col)` holds a locked block.
    ///
    /// Out-of-bounds coordinates report `false`.
    #[must_use]
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.cell(row, col), Some(Some(_)))
    }

    /// Checks whether the piece overlaps a wall, the floor or a locked block.
    ///
    /// Every cell must have a column in `[0, width)` and a row below `height`.
    /// Cells above the board (negative rows) skip the occupancy lookup.
    #[must_use]
    pub fn is_colliding(&self, piece: Piece) -> bool {
        piece.cells().any(|(row, col)| {
            let col_in_range = usize::try_from(col).is_ok_and(|c| c < self.width);
            let below_floor = usize::try_from(row).is_ok_and(|r| r >= self.height);
            !col_in_range || below_floor || self.is_occupied(row, col)
        })
    }

    /// Marks the given cells as occupied with `color`.
    ///
    /// Cells above the board, outside it, or already occupied are left untouched.
    pub fn commit<I>(&mut self, cells: I, color: BlockColor)
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        for (row, col) in cells {
            if let Some(i) = self.index(row, col)
                && self.cells[i].is_none()
            {
                self.cells[i] = Some(color);
            }
        }
    }

    /// Checks whether every column of `row` is occupied.
    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.height && self.row_cells(row).iter().all(Option::is_some)
    }

    /// Returns the indices of all full rows, bottom row first.
    #[must_use]
    pub fn find_full_rows(&self) -> Vec<usize> {
        (0..self.height)
            .rev()
            .filter(|&row| self.is_row_full(row))
            .collect()
    }

    /// Removes the listed rows and lets everything above fall into the gap.
    ///
    /// Each surviving row moves down by the number of removed rows beneath it
    /// and the vacated rows at the top become empty. Duplicate and
    /// out-of-range indices are ignored.
    ///
    /// # Returns
    ///
    /// The number of rows actually removed.
    pub fn compact_rows(&mut self, rows: &[usize]) -> usize {
        let mut removed = vec![false; self.height];
        for &row in rows {
            if row < self.height {
                removed[row] = true;
            }
        }

        let width = self.width;
        let mut count = 0;
        for row in (0..self.height).rev() {
            if removed[row] {
                count += 1;
                continue;
            }
            if count > 0 {
                let src = row * width;
                self.cells.copy_within(src..src + width, src + count * width);
            }
        }
        self.cells[..count * width].fill(None);
        count
    }

    /// Clears every full row and returns how many were cleared.
    pub fn clear_full_rows(&mut self) -> usize {
        let full_rows = self.find_full_rows();
        self.compact_rows(&full_rows)
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Builds a board from ASCII art, one line per row, top row first.
    ///
    /// `.` is an empty cell; a piece letter (`I O T J L S Z`) is a cell in
    /// that piece's default colour. Blank lines are skipped, and when fewer
    /// rows than `height` are given they are aligned to the bottom.
    ///
    /// # Panics
    ///
    /// Panics if a row has a different number of cells than `width`, if there
    /// are more rows than `height`, or on an unknown character.
    #[must_use]
    pub fn from_ascii(width: usize, height: usize, art: &str) -> Self {
        let mut board = Self::new(width, height);
        let lines: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert!(
            lines.len() <= height,
            "Expected at most {height} rows, got {}",
            lines.len()
        );

        let top = height - lines.len();
        for (y, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            assert_eq!(
                chars.len(),
                width,
                "Each row must have exactly {width} cells, got {} at row {y}",
                chars.len(),
            );
            for (x, &ch) in chars.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = PieceKind::from_char(ch)
                    .unwrap_or_else(|| panic!("Unknown cell character {ch:?} at row {y}"));
                board.cells[(top + y) * width + x] = Some(kind.default_color());
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use crate::core::piece::PiecePosition;

    use super::*;

    fn row_colors(board: &Board, row: usize) -> Vec<Cell> {
        board.row_cells(row).to_vec()
    }

    #[test]
    fn test_initial_board_is_empty() {
        let board = Board::new(10, 20);
        assert_eq!(board.width(), 10);
        assert_eq!(board.height(), 20);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.rows().count(), 20);
        assert!(board.rows().all(|row| row.len() == 10));
    }

    #[test]
    fn test_out_of_bounds_queries() {
        let board = Board::from_ascii(10, 20, "IIIIIIIIII");
        assert!(board.is_occupied(19, 0));
        assert!(!board.is_occupied(19, -1));
        assert!(!board.is_occupied(19, 10));
        assert!(!board.is_occupied(20, 0));
        assert!(!board.is_occupied(-1, 0));
        assert_eq!(board.cell(-1, 0), None);
        assert_eq!(board.cell(0, 0), Some(None));
        assert_eq!(board.cell(19, 9), Some(Some(BlockColor::Cyan)));
    }

    #[test]
    fn test_commit_ignores_rows_above_board() {
        let mut board = Board::new(10, 20);
        board.commit([(-2, 4), (-1, 4), (0, 4), (1, 4)], BlockColor::Red);
        assert_eq!(board.occupied_count(), 2);
        assert_eq!(board.cell(0, 4), Some(Some(BlockColor::Red)));
        assert_eq!(board.cell(1, 4), Some(Some(BlockColor::Red)));
    }

    #[test]
    fn test_commit_does_not_overwrite_occupied_cells() {
        let mut board = Board::new(10, 20);
        board.commit([(19, 0)], BlockColor::Blue);
        board.commit([(19, 0), (19, 1)], BlockColor::Green);
        assert_eq!(board.cell(19, 0), Some(Some(BlockColor::Blue)));
        assert_eq!(board.cell(19, 1), Some(Some(BlockColor::Green)));
    }

    #[test]
    fn test_is_colliding() {
        let board = Board::from_ascii(
            10,
            20,
            "
            ..........
            OO........
            ",
        );
        let o_at = |row, col| {
            Piece::new(
                PieceKind::O,
                BlockColor::Yellow,
                PiecePosition::new(row, col),
            )
        };

        assert!(!board.is_colliding(o_at(17, 0)));
        // overlaps the locked O block
        assert!(board.is_colliding(o_at(18, 0)));
        // through the floor
        assert!(board.is_colliding(o_at(19, 4)));
        // walls
        assert!(board.is_colliding(o_at(0, -1)));
        assert!(board.is_colliding(o_at(0, 9)));
        assert!(!board.is_colliding(o_at(0, 8)));
        // above the board is allowed, but the walls still apply
        assert!(!board.is_colliding(o_at(-2, 4)));
        assert!(board.is_colliding(o_at(-2, 9)));
    }

    #[test]
    fn test_find_full_rows_bottom_to_top() {
        let board = Board::from_ascii(
            4,
            6,
            "
            IIII
            T.TT
            JJJJ
            LLLL
            ",
        );
        assert_eq!(board.find_full_rows(), vec![5, 4, 2]);
        assert!(!board.is_row_full(3));
        assert!(!board.is_row_full(6));
    }

    #[test]
    fn test_clear_lines_with_partial_lines() {
        let mut board = Board::from_ascii(10, 20, "IIIIIIIII.");
        assert!(board.find_full_rows().is_empty());
        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board.occupied_count(), 9);
    }

    #[test]
    fn test_compact_single_row_shifts_rows_above() {
        let mut board = Board::from_ascii(
            4,
            5,
            "
            T...
            .S..
            IIII
            ",
        );
        let before_row_3 = row_colors(&board, 3);
        let before_row_2 = row_colors(&board, 2);

        assert_eq!(board.compact_rows(&[4]), 1);
        assert_eq!(row_colors(&board, 4), before_row_3);
        assert_eq!(row_colors(&board, 3), before_row_2);
        assert_eq!(row_colors(&board, 0), vec![None; 4]);
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_compact_non_adjacent_rows() {
        let mut board = Board::from_ascii(
            4,
            6,
            "
            Z...
            IIII
            .O..
            LLLL
            ..J.
            ",
        );
        let cleared = board.clear_full_rows();
        assert_eq!(cleared, 2);

        let expected = Board::from_ascii(
            4,
            6,
            "
            Z...
            .O..
            ..J.
            ",
        );
        assert_eq!(board, expected);
    }

    #[test]
    fn test_compact_ignores_duplicates_and_out_of_range() {
        let mut board = Board::from_ascii(
            4,
            4,
            "
            T...
            IIII
            ",
        );
        assert_eq!(board.compact_rows(&[3, 3, 9]), 1);
        assert_eq!(board.cell(3, 0), Some(Some(BlockColor::Magenta)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_clear_removes_exactly_full_row_cells() {
        let mut board = Board::from_ascii(
            5,
            8,
            "
            ....T
            IIIII
            OO.OO
            JJJJJ
            LLLLL
            ",
        );
        let before = board.occupied_count();
        let full_rows = board.find_full_rows();
        assert_eq!(full_rows, vec![7, 6, 4]);

        let cleared = board.compact_rows(&full_rows);
        assert_eq!(cleared, 3);
        assert_eq!(board.occupied_count(), before - cleared * board.width());
        // vacated rows at the top are empty
        for row in 0..3 {
            assert_eq!(row_colors(&board, row), vec![None; 5]);
        }
        // "OO.OO" had two cleared rows below it, "....T" had three
        assert_eq!(board.cell(7, 2), Some(None));
        assert_eq!(board.cell(7, 0), Some(Some(BlockColor::Yellow)));
        assert_eq!(board.cell(6, 4), Some(Some(BlockColor::Magenta)));
    }

    #[test]
    fn test_clear_lines_all_filled() {
        let mut board = Board::from_ascii(4, 4, "IIII\nOOOO\nTTTT\nJJJJ");
        assert_eq!(board.clear_full_rows(), 4);
        assert_eq!(board, Board::new(4, 4));
    }

    #[test]
    fn test_clear_empties_board() {
        let mut board = Board::from_ascii(4, 4, "I...\nOOOO");
        board.clear();
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    #[should_panic(expected = "board width must be positive")]
    fn test_zero_width_board_is_rejected() {
        let _ = Board::new(0, 20);
    }

    #[test]
    #[should_panic(expected = "Each row must have exactly 4 cells")]
    fn test_from_ascii_rejects_wrong_width() {
        let _ = Board::from_ascii(4, 4, "III");
    }
}
