//! Seeded randomness for board fills.
//!
//! A single 32-bit linear congruential generator drives every color draw in
//! the engine. Sessions own their generator and thread it explicitly through
//! fill and refill, never touching ambient randomness, so one seed
//! reproduces an entire game byte for byte. Statistical quality only has to
//! clear the "gem colors look random" bar, which an LCG does.

/// 32-bit LCG with Numerical Recipes constants
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would fix the low bits; remap it
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Advance the generator one step and return the new state
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform draw in `[0, max)`
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Uniform color index in `[0, colors)`
    pub fn next_color(&mut self, colors: u8) -> u8 {
        self.next_range(colors as u32) as u8
    }

    /// Current internal state (for reseeding a replay from mid-game)
    pub fn state(&self) -> u32 {
        self.state
    }
}
