use rand::{Rng, distr::StandardUniform, prelude::Distribution};

/// Colour tag carried by every occupied board cell.
///
/// Pieces take their colour from [`PieceKind::default_color`](super::PieceKind::default_color)
/// unless the game runs with random colours, in which case any of these seven
/// may be drawn for any piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlockColor {
    Cyan = 0,
    Yellow = 1,
    Magenta = 2,
    Orange = 3,
    Blue = 4,
    Red = 5,
    Green = 6,
}

impl BlockColor {
    /// Number of colours (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        Self::Cyan,
        Self::Yellow,
        Self::Magenta,
        Self::Orange,
        Self::Blue,
        Self::Red,
        Self::Green,
    ];
}

impl Distribution<BlockColor> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BlockColor {
        BlockColor::ALL[rng.random_range(0..BlockColor::LEN)]
    }
}

/// A single board cell: `None` when empty, otherwise the colour of the piece
/// that was locked there.
pub type Cell = Option<BlockColor>;
