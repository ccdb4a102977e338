//! RNG module - injectable piece sources
//!
//! The engine never picks pieces itself; it asks a [`PieceSource`].
//!
//! - [`RandomSource`]: uniform selection over the seven kinds, seeded `StdRng`
//!   so a seed reproduces a game exactly.
//! - [`ScriptedSource`]: replays a fixed sequence, for tests that need exact
//!   board outcomes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Supplies the kind of each newly spawned piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform random piece selection (no bag, repeats allowed).
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
    seed: u64,
}

impl RandomSource {
    /// Create a source with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// Seed this source was created with (for replaying a game)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for RandomSource {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }
}

/// Cycles through a fixed list of kinds forever.
///
/// An empty script yields `I` pieces.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(kinds: &[PieceKind]) -> Self {
        Self {
            kinds: kinds.to_vec(),
            pos: 0,
        }
    }

    /// Script that hands out a single kind every time
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(&[kind])
    }

    /// How many kinds have been handed out so far
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl PieceSource for ScriptedSource {
    fn next_kind(&mut self) -> PieceKind {
        if self.kinds.is_empty() {
            return PieceKind::I;
        }
        let kind = self.kinds[self.pos % self.kinds.len()];
        self.pos += 1;
        kind
    }
}
