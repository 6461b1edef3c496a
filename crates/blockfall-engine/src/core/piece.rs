use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::block::BlockColor;

/// Number of occupied cells in every piece.
pub const PIECE_CELLS: usize = 4;

/// A falling piece: kind, rotation state, colour and anchor position.
///
/// Pieces are values. Movement and rotation return a new `Piece` so callers can
/// validate a candidate against the board before committing to it.
///
/// # Coordinate System
///
/// - The anchor is the top-left corner of the current rotation's bounding matrix
/// - Rows grow downwards, columns grow rightwards
/// - Coordinates are signed; a piece may sit partially above row 0
///
/// # Example
///
/// ```
/// use blockfall_engine::{Piece, PieceKind};
///
/// let piece = Piece::spawn(PieceKind::T, PieceKind::T.default_color(), 10);
/// let moved = piece.right().rotated_right();
///
/// assert_eq!(moved.position().col(), piece.position().col() + 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    rotation: PieceRotation,
    color: BlockColor,
    position: PiecePosition,
}

impl Piece {
    #[must_use]
    pub fn new(kind: PieceKind, color: BlockColor, position: PiecePosition) -> Self {
        Self {
            kind,
            rotation: PieceRotation::default(),
            color,
            position,
        }
    }

    /// Creates a piece in its spawn orientation at the spawn anchor of a board
    /// `board_width` columns wide.
    #[must_use]
    pub fn spawn(kind: PieceKind, color: BlockColor, board_width: usize) -> Self {
        Self::new(kind, color, PiecePosition::spawn(board_width))
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn rotation(&self) -> PieceRotation {
        self.rotation
    }

    #[must_use]
    pub fn color(&self) -> BlockColor {
        self.color
    }

    #[must_use]
    pub fn position(&self) -> PiecePosition {
        self.position
    }

    #[must_use]
    pub fn shape(&self) -> &'static PieceShape {
        self.kind.shape(self.rotation)
    }

    /// Absolute `(row, col)` of every occupied cell.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        let origin = self.position;
        self.shape()
            .offsets()
            .iter()
            .map(move |&(row, col)| (origin.row + i32::from(row), origin.col + i32::from(col)))
    }

    #[must_use]
    pub fn shifted(&self, rows: i32, cols: i32) -> Self {
        Self {
            position: self.position.offset(rows, cols),
            ..*self
        }
    }

    #[must_use]
    pub fn left(&self) -> Self {
        self.shifted(0, -1)
    }

    #[must_use]
    pub fn right(&self) -> Self {
        self.shifted(0, 1)
    }

    #[must_use]
    pub fn down(&self) -> Self {
        self.shifted(1, 0)
    }

    /// Next rotation state at the same anchor. No wall kicks are attempted.
    #[must_use]
    pub fn rotated_right(&self) -> Self {
        Self {
            rotation: self.rotation.rotated_right(),
            ..*self
        }
    }
}

/// Anchor position of a piece on the board, in signed `(row, col)` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PiecePosition {
    row: i32,
    col: i32,
}

impl PiecePosition {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Spawn anchor: top row, column `(width - 4) / 2`.
    #[must_use]
    pub fn spawn(board_width: usize) -> Self {
        let col = i32::try_from(board_width.saturating_sub(PIECE_CELLS) / 2).unwrap_or(0);
        Self::new(0, col)
    }

    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> i32 {
        self.col
    }

    #[must_use]
    pub const fn offset(self, rows: i32, cols: i32) -> Self {
        Self::new(self.row + rows, self.col + cols)
    }
}

/// Rotation state of a piece.
///
/// - `0`: spawn orientation
/// - `1`: 90° clockwise
/// - `2`: 180°
/// - `3`: 270° clockwise
///
/// Rotation wraps around modulo 4.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRotation(u8);

impl PieceRotation {
    /// Number of rotation states in the table of every piece kind.
    pub const COUNT: usize = 4;

    #[must_use]
    pub fn rotated_right(self) -> Self {
        PieceRotation((self.0 + 1) % 4)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// J-piece.
    J = 3,
    /// L-piece.
    L = 4,
    /// S-piece.
    S = 5,
    /// Z-piece.
    Z = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        Self::I,
        Self::O,
        Self::T,
        Self::J,
        Self::L,
        Self::S,
        Self::Z,
    ];

    /// Colour used for this kind unless colours are randomised.
    #[must_use]
    pub const fn default_color(self) -> BlockColor {
        match self {
            PieceKind::I => BlockColor::Cyan,
            PieceKind::O => BlockColor::Yellow,
            PieceKind::T => BlockColor::Magenta,
            PieceKind::J => BlockColor::Orange,
            PieceKind::L => BlockColor::Blue,
            PieceKind::S => BlockColor::Red,
            PieceKind::Z => BlockColor::Green,
        }
    }

    /// Shape of this kind in the given rotation state.
    #[must_use]
    pub fn shape(self, rotation: PieceRotation) -> &'static PieceShape {
        &PIECE_SHAPES[self as usize][rotation.as_usize()]
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// Parses a piece kind from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Occupied cells of one rotation state, as `(row, col)` offsets inside a
/// `height × width` bounding matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape {
    offsets: [(u8, u8); PIECE_CELLS],
    height: u8,
    width: u8,
}

impl PieceShape {
    /// Builds a shape from a 0/1 matrix listed top row first.
    #[expect(clippy::cast_possible_truncation)]
    const fn from_matrix<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        let mut offsets = [(0, 0); PIECE_CELLS];
        let mut n = 0;
        let mut row = 0;
        while row < R {
            let mut col = 0;
            while col < C {
                if matrix[row][col] != 0 {
                    assert!(n < PIECE_CELLS, "piece matrix has more than four cells");
                    offsets[n] = (row as u8, col as u8);
                    n += 1;
                }
                col += 1;
            }
            row += 1;
        }
        assert!(n == PIECE_CELLS, "piece matrix has fewer than four cells");
        Self {
            offsets,
            height: R as u8,
            width: C as u8,
        }
    }

    /// Turns the bounding matrix 90° clockwise: `(row, col) -> (col, height - 1 - row)`.
    const fn rotated_right(&self) -> Self {
        let mut offsets = self.offsets;
        let mut i = 0;
        while i < PIECE_CELLS {
            let (row, col) = self.offsets[i];
            offsets[i] = (col, self.height - 1 - row);
            i += 1;
        }
        Self {
            offsets,
            height: self.width,
            width: self.height,
        }
    }

    #[must_use]
    pub fn offsets(&self) -> &[(u8, u8); PIECE_CELLS] {
        &self.offsets
    }

    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[must_use]
    pub fn is_occupied(&self, row: u8, col: u8) -> bool {
        self.offsets.contains(&(row, col))
    }
}

const fn rotations(base: PieceShape) -> [PieceShape; PieceRotation::COUNT] {
    let mut states = [base; PieceRotation::COUNT];
    let mut i = 1;
    while i < PieceRotation::COUNT {
        states[i] = states[i - 1].rotated_right();
        i += 1;
    }
    states
}

const PIECE_SHAPES: [[PieceShape; PieceRotation::COUNT]; PieceKind::LEN] = [
    // I-piece
    rotations(PieceShape::from_matrix([[1, 1, 1, 1]])),
    // O-piece
    rotations(PieceShape::from_matrix([[1, 1], [1, 1]])),
    // T-piece
    rotations(PieceShape::from_matrix([[0, 1, 0], [1, 1, 1]])),
    // J-piece
    rotations(PieceShape::from_matrix([[1, 0, 0], [1, 1, 1]])),
    // L-piece
    rotations(PieceShape::from_matrix([[0, 0, 1], [1, 1, 1]])),
    // S-piece
    rotations(PieceShape::from_matrix([[0, 1, 1], [1, 1, 0]])),
    // Z-piece
    rotations(PieceShape::from_matrix([[1, 1, 0], [0, 1, 1]])),
];
