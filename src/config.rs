//! Crate-wide synthesis configuration.

/// Fixed numeric parameters for one pipeline call.
///
/// Passed explicitly into each entry point instead of living as process
/// globals, so hosts can run differing configurations side by side (and
/// tests can use a cheap sample rate).
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Upper bound on enabled objects per compose call.
    pub max_tracks: usize,
    /// Track length in seconds for the multi-object composition path.
    pub default_duration: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig {
            sample_rate: 44100,
            max_tracks: 10,
            default_duration: 8.0,
        }
    }
}
