//! RNG module - randomness for tile spawning
//!
//! The spawner never calls an ambient RNG. It draws from a [`RandomSource`]
//! owned by the game state, so a game is fully reproducible from its source.
//!
//! Provides a simple LCG for normal play and a scripted source for tests and
//! replays.

/// Source of uniform random numbers
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        self.next_u32() % max
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

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

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // The low bits of a power-of-two LCG have short periods; hand out the
        // high half so `next_range` with small moduli stays well mixed.
        self.state >> 16
    }
}

/// Replays a fixed sequence of values, cycling when it runs out
///
/// ```
/// use tile_2048_core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new(vec![3, 0]);
/// assert_eq!(rng.next_u32(), 3);
/// assert_eq!(rng.next_u32(), 0);
/// assert_eq!(rng.next_u32(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    /// Create a scripted source; an empty script always yields 0
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, pos: 0 }
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            self.pos += 1;
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
