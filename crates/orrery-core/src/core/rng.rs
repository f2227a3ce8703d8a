//! Seeded xorshift64 generator for phase offsets.
//! The same seed always yields the same sequence, so runs are reproducible.

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// A zero seed is remapped to 1 (xorshift never leaves the zero state).
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn step(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform float in [0, 1). Uses the top 24 bits so every value is exact in f32.
    pub fn next_unit(&mut self) -> f32 {
        const MANTISSA_SPAN: f32 = (1u32 << 24) as f32;
        (self.step() >> 40) as f32 / MANTISSA_SPAN
    }

    /// Uniform float in [0, upper). Returns 0 when `upper` is 0.
    pub fn next_below(&mut self, upper: f32) -> f32 {
        let value = self.next_unit() * upper;
        // Rounding can land exactly on the bound for large spans.
        if value >= upper { 0.0 } else { value }
    }
}
