//! RNG module - randomness behind tile spawns
//!
//! The session never owns a global generator. It draws through [`SpawnRng`],
//! which callers inject at construction:
//!
//! - [`SimpleRng`]: seedable LCG for real play
//! - [`ScriptedRng`]: replays a fixed list of draws for deterministic tests

/// Source of uniform draws for tile spawning.
pub trait SpawnRng {
    /// Return an index in `[0, bound)`. `bound` is always non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: SpawnRng + ?Sized> SpawnRng for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<R: SpawnRng + ?Sized> SpawnRng for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Scale the whole word so the result comes from the high bits, which
        // have the longest period in an LCG.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Current generator state (feed back into `new` to resume the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SpawnRng for SimpleRng {
    fn next_index(&mut self, bound: usize) -> usize {
        let max = u32::try_from(bound).unwrap_or(u32::MAX);
        self.next_range(max) as usize
    }
}

/// Replays a fixed sequence of draws, wrapping around at the end.
///
/// Each draw is reduced modulo the requested bound, so a script can be written
/// against the expected number of empty cells without knowing it exactly.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of draws served so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl SpawnRng for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % bound
    }
}
