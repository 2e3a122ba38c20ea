//! WiringGenerator: random machine components.
//!
//! Uses a seedable ChaCha8 stream by default so that a fixed seed always
//! reproduces the same wiring, or any caller-supplied [`rand::Rng`].

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::source::WiringSource;
use crate::error::RotorCipherError;
use crate::key::Key;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::substitution::SubstitutionMap;
use crate::utils::alphabet::ALPHABET_LEN;

/// Minimum number of plugboard swaps.
const MIN_PLUG_PAIRS: usize = 7;

/// Maximum number of plugboard swaps.
const MAX_PLUG_PAIRS: usize = 9;

/// Random component factory.
///
/// # Examples
///
/// ```
/// use rotor_cipher::random::{WiringGenerator, WiringSource};
///
/// let mut a = WiringGenerator::from_seed(7);
/// let mut b = WiringGenerator::from_seed(7);
/// assert_eq!(a.rotor().unwrap(), b.rotor().unwrap());
/// ```
pub struct WiringGenerator<R: Rng = ChaCha8Rng> {
    rng: R,
}

impl WiringGenerator<ChaCha8Rng> {
    /// Creates a generator with a fixed, deterministic seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> WiringGenerator<R> {
    /// Wraps an existing random number generator.
    pub fn new(rng: R) -> Self {
        WiringGenerator { rng }
    }

    /// Returns the alphabet indices in a uniformly random order.
    fn shuffled_letters(&mut self) -> [usize; ALPHABET_LEN] {
        let mut letters = *SubstitutionMap::identity().mapping();
        letters.shuffle(&mut self.rng);
        letters
    }
}

impl<R: Rng> WiringSource for WiringGenerator<R> {
    /// Uniformly random permutation with a uniformly random notch.
    fn rotor(&mut self) -> Result<Rotor, RotorCipherError> {
        let map = SubstitutionMap::from_indices(self.shuffled_letters())?;
        let notch = self.rng.gen_range(0..ALPHABET_LEN);
        let rotor = Rotor::from_map(map, notch)?;
        debug!(%rotor, "generated rotor");
        Ok(rotor)
    }

    /// Pairs consecutive letters of a shuffled alphabet.
    fn reflector(&mut self) -> Result<Reflector, RotorCipherError> {
        let letters = self.shuffled_letters();
        let mut mapping = [0usize; ALPHABET_LEN];
        for pair in letters.chunks_exact(2) {
            mapping[pair[0]] = pair[1];
            mapping[pair[1]] = pair[0];
        }
        let reflector = Reflector::from_map(SubstitutionMap::from_indices(mapping)?)?;
        debug!(%reflector, "generated reflector");
        Ok(reflector)
    }

    /// Swaps 7 to 9 disjoint random pairs, identity elsewhere.
    fn plugboard(&mut self) -> Result<Plugboard, RotorCipherError> {
        let letters = self.shuffled_letters();
        let num_pairs = self.rng.gen_range(MIN_PLUG_PAIRS..=MAX_PLUG_PAIRS);
        let mut mapping = *SubstitutionMap::identity().mapping();
        for pair in letters.chunks_exact(2).take(num_pairs) {
            mapping.swap(pair[0], pair[1]);
        }
        let plugboard = Plugboard::from_map(SubstitutionMap::from_indices(mapping)?);
        debug!(%plugboard, num_pairs, "generated plugboard");
        Ok(plugboard)
    }

    fn key(&mut self) -> Key {
        let positions: [usize; 3] = std::array::from_fn(|_| self.rng.gen_range(0..ALPHABET_LEN));
        Key::try_from(positions).unwrap_or_default()
    }
}
