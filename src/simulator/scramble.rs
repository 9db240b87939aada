//! Seeded scramble generation.
//!
//! A `ScrambleRng` draws moves from an alphabet with a ChaCha8 stream, so
//! the same seed always produces the same scramble on every platform.
//!
//! ```
//! use cube_sim::profiles::{Cube3x3, Profile};
//! use cube_sim::ScrambleRng;
//!
//! let alphabet = Cube3x3.alphabet();
//! let a = ScrambleRng::new(7).scramble(&alphabet, 20);
//! let b = ScrambleRng::new(7).scramble(&alphabet, 20);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::notation::{Modifier, MoveAlphabet, MoveSequence, MoveToken};

/// Picks random move tokens from an alphabet.
#[derive(Clone, Debug)]
pub struct ScrambleRng {
    inner: ChaCha8Rng,
}

impl ScrambleRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// One random move with a random modifier, or `None` for an empty
    /// alphabet.
    pub fn next_token(&mut self, alphabet: &MoveAlphabet) -> Option<MoveToken> {
        if alphabet.is_empty() {
            return None;
        }
        let definition = alphabet
            .definitions()
            .nth(self.inner.gen_range(0..alphabet.len()))?;
        let modifier = *Modifier::ALL.choose(&mut self.inner)?;
        Some(MoveToken::new(definition.symbol, modifier))
    }

    /// `count` random moves. Shorter only if the alphabet is empty.
    pub fn scramble(&mut self, alphabet: &MoveAlphabet, count: usize) -> MoveSequence {
        (0..count)
            .map_while(|_| self.next_token(alphabet))
            .collect()
    }
}
