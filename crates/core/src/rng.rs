//! RNG module - 7-bag random piece generation
//!
//! Implements the "bag" randomization technique: each bag is a shuffled
//! permutation of all 7 piece kinds, drawn until empty and then regenerated.
//! Every non-overlapping window of 7 draws therefore contains each kind
//! exactly once, so no kind is starved or over-represented.
//!
//! The generator is seedable so sequences are reproducible in tests.

use crate::types::{PieceKind, NEXT_PREVIEW};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator with a fixed-length preview
#[derive(Debug, Clone)]
pub struct PieceBag {
    /// Current bag of pieces
    bag: [PieceKind; 7],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling
    rng: SimpleRng,
}

impl PieceBag {
    /// Create a new bag generator with the given seed
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    /// Generate a new shuffled bag
    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next piece, refilling the bag when it runs out
    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= 7 {
            self.refill();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Peek at the upcoming pieces without consuming them
    ///
    /// When the preview crosses the bag boundary the next bag is shuffled on
    /// a clone of the RNG state, so the preview is deterministic and matches
    /// what `draw` will later produce, without disturbing the main RNG.
    pub fn peek_preview(&self) -> [PieceKind; NEXT_PREVIEW] {
        let mut out = [PieceKind::I; NEXT_PREVIEW];
        let mut out_i = 0usize;
        let mut idx = self.bag_index;

        while out_i < NEXT_PREVIEW && idx < 7 {
            out[out_i] = self.bag[idx];
            out_i += 1;
            idx += 1;
        }

        if out_i < NEXT_PREVIEW {
            let mut preview_rng = SimpleRng::new(self.rng.state);
            let mut next_bag = PieceKind::ALL;
            preview_rng.shuffle(&mut next_bag);

            let mut nb_i = 0usize;
            while out_i < NEXT_PREVIEW {
                out[out_i] = next_bag[nb_i];
                nb_i += 1;
                out_i += 1;
            }
        }

        out
    }

    /// Remaining pieces in the current bag (for tests)
    #[cfg(test)]
    pub fn current_bag(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }

    /// Current RNG state, usable as a seed for a follow-up game
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}
