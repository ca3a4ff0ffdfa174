//! Deterministic RNG — seedable linear-congruential stream in [0, 1).

/// Linear-congruential generator matching the legacy studio client:
/// `state = (state * 9301 + 49297) % 233280`.
///
/// The same seed yields bit-identical sequences on every platform and
/// every run. Waveform squiggles, per-object note picks, and melody
/// generation all draw from independent `Lcg` streams.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

impl Lcg {
    pub fn new(seed: u64) -> Self {
        // Reduce up front so the multiply can never overflow u64.
        Lcg {
            state: seed % MODULUS,
        }
    }

    /// Advance the state and return the next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Uniform index in [0, n). `n` must be non-zero.
    pub fn next_index(&mut self, n: usize) -> usize {
        let idx = (self.next_f64() * n as f64) as usize;
        idx.min(n - 1)
    }
}
