//! RNG module - injected randomness for piece selection
//!
//! The engine never reaches for an ambient generator. Every `GameState` owns a
//! [`Randomizer`], so a seed (or a scripted source in tests) reproduces the
//! exact piece sequence and therefore the exact transition sequence.

/// Source of uniform integers used by the shape catalog.
pub trait Randomizer {
    /// Random value in `[0, max)`. `max` is never zero.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: Randomizer + ?Sized> Randomizer for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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
}

impl Randomizer for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of a power-of-two LCG are weak; use the high half.
        (self.next_u32() >> 16) % max.max(1)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
