use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::SeedParseError;

/// Source of uniformly distributed integers for apple and snake placement.
///
/// [`GameState`](super::GameState) owns its random source, so tests can
/// inject a scripted one and real games can be replayed from a [`GameSeed`].
pub trait RandomSource {
    /// Returns an integer in `min..=max`, both ends included.
    ///
    /// Callers guarantee `min <= max`.
    fn uniform_int(&mut self, min: usize, max: usize) -> usize;
}

/// Seed for deterministic game generation.
///
/// A 128-bit seed initializing the PCG32 generator behind [`SeededRandom`].
/// The same seed always produces the same sequence of snake and apple
/// placements. It is displayed, parsed and serialized as 32 hex digits.
///
/// # Example
///
/// ```
/// use gridsnake_engine::{GameSeed, GameState};
/// use rand::Rng as _;
///
/// let seed: GameSeed = rand::rng().random();
///
/// let first = GameState::with_seed(seed);
/// let second = GameState::with_seed(seed.to_string().parse().unwrap());
///
/// assert_eq!(first.grid(), second.grid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSeed([u8; 16]);

impl GameSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for GameSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(SeedParseError::Length { len: s.len() });
        }
        if let Some(digit) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(SeedParseError::Digit { digit });
        }
        let num =
            u128::from_str_radix(s, 16).map_err(|_| SeedParseError::Length { len: s.len() })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for GameSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `GameSeed` values with `rng.random()`.
impl Distribution<GameSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        GameSeed(seed)
    }
}

/// Default [`RandomSource`]: a PCG32 generator created from a [`GameSeed`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: GameSeed,
    rng: Pcg32,
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl SeededRandom {
    /// Creates a generator with a seed drawn from the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn uniform_int(&mut self, min: usize, max: usize) -> usize {
        self.rng.random_range(min..=max)
    }
}
