use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{BlockColor, ColorMode, PieceKind, SeedParseError};

/// A piece chosen by the generator but not yet placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDraw {
    pub kind: PieceKind,
    pub color: BlockColor,
}

/// Supplies pieces uniformly at random from the seven kinds.
///
/// Each draw is independent: the same kind may come up any number of times in
/// a row. In [`ColorMode::Random`] the colour is drawn independently as well.
///
/// # Example
///
/// ```
/// use blockfall_engine::{ColorMode, PieceGenerator, PieceSeed};
///
/// let seed: PieceSeed = "000000000000000000000000000000ff".parse().unwrap();
/// let mut a = PieceGenerator::with_seed(seed, ColorMode::ByKind);
/// let mut b = PieceGenerator::with_seed(seed, ColorMode::ByKind);
///
/// for _ in 0..10 {
///     assert_eq!(a.draw(), b.draw());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: Pcg32,
    color_mode: ColorMode,
}

impl PieceGenerator {
    /// Creates a generator seeded from the thread-local RNG.
    #[must_use]
    pub fn new(color_mode: ColorMode) -> Self {
        Self::with_seed(rand::rng().random(), color_mode)
    }

    /// Like [`Self::new`], but with a specific seed for a reproducible sequence.
    #[must_use]
    pub fn with_seed(seed: PieceSeed, color_mode: ColorMode) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            color_mode,
        }
    }

    /// Draws the next piece kind and its colour.
    pub fn draw(&mut self) -> PieceDraw {
        let kind: PieceKind = self.rng.random();
        let color = match self.color_mode {
            ColorMode::ByKind => kind.default_color(),
            ColorMode::Random => self.rng.random(),
        };
        PieceDraw { kind, color }
    }
}

/// Seed for deterministic piece generation.
///
/// A 128-bit seed, written as 32 hexadecimal characters. Using the same seed
/// produces the same sequence of pieces, which makes games reproducible for
/// debugging and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSeed([u8; 16]);

impl PieceSeed {
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }
}

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for PieceSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(SeedParseError::Length(s.len()));
        }
        let num = u128::from_str_radix(s, 16).map_err(SeedParseError::Hex)?;
        Ok(Self::from_u128(num))
    }
}

impl Serialize for PieceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PieceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}
