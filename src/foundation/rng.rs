/// Source of palette indices for the noise phase.
///
/// Implementations must return a value in `0..len`; out-of-range values are
/// clamped by the caller. `len` is never zero.
pub trait PaletteSource {
    /// Pick the next index into a palette of `len` entries.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<F> PaletteSource for F
where
    F: FnMut(usize) -> usize,
{
    fn next_index(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Seedable SplitMix64 generator.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Create a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a generator seeded from the thread-local system RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

impl PaletteSource for Rng64 {
    fn next_index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64_01() * len as f64).floor() as usize;
        idx.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
