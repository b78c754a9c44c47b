//! Bag module - 7-bag random piece generation
//!
//! Each bag holds one of each piece kind in a uniformly shuffled order. Draws
//! take from the bag until it is empty; the next draw refills it with a fresh,
//! independent shuffle. Every run of 7 draws aligned to a refill is therefore
//! a permutation of all kinds.
//!
//! The random source is injected, so a seeded generator gives a reproducible
//! piece sequence.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Number of kinds in one bag
pub const BAG_SIZE: usize = PieceKind::ALL.len();

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceBag<R = StdRng> {
    /// Current cycle in draw order
    bag: [PieceKind; BAG_SIZE],
    /// Index of the next kind to hand out; `BAG_SIZE` means exhausted
    next: usize,
    rng: R,
}

impl PieceBag<StdRng> {
    /// Bag driven by a `StdRng` seeded with `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PieceBag<R> {
    /// Create an empty bag; the first draw triggers the first shuffle
    pub fn new(rng: R) -> Self {
        Self {
            bag: PieceKind::ALL,
            next: BAG_SIZE,
            rng,
        }
    }

    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(&mut self.rng);
        self.next = 0;
    }

    /// Draw the next kind, refilling first if the bag is empty
    pub fn draw(&mut self) -> PieceKind {
        if self.next >= BAG_SIZE {
            self.refill();
        }
        let kind = self.bag[self.next];
        self.next += 1;
        kind
    }

    /// Kinds left in the current cycle, in the order they will be drawn
    pub fn remaining(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.bag[self.next..].iter().copied()
    }

    /// Number of kinds left before the next refill
    pub fn len(&self) -> usize {
        BAG_SIZE - self.next
    }

    pub fn is_empty(&self) -> bool {
        self.next >= BAG_SIZE
    }

    /// Throw away the rest of the current cycle
    ///
    /// The random source keeps its state, so the next cycle is a new draw
    /// rather than a replay.
    pub fn clear(&mut self) {
        self.next = BAG_SIZE;
    }
}

/// Endless stream of kinds
impl<R: Rng> Iterator for PieceBag<R> {
    type Item = PieceKind;

    fn next(&mut self) -> Option<PieceKind> {
        Some(self.draw())
    }
}
