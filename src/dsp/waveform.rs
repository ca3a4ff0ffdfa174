//! Waveform summarizer — deterministic visualization curves per track.

use crate::model::WaveformPoint;
use crate::rng::Lcg;

/// Default curve resolution.
pub const DEFAULT_POINTS: usize = 256;

/// Produce a reproducible squiggle for client-side rendering.
///
/// The curve is seeded noise under a slow sine swell; it is visually
/// distinct per seed but never audio-accurate.
pub fn summarize(length: usize, seed: u64) -> Vec<WaveformPoint> {
    let mut rng = Lcg::new(seed);
    let denom = length.saturating_sub(1).max(1) as f64;

    (0..length)
        .map(|i| {
            let t = i as f64 / denom;
            let swell = 0.6 + 0.4 * (i as f64 / 12.0).sin();
            let v = (rng.next_f64() - 0.5) * 2.0 * swell;
            WaveformPoint {
                t,
                v: v.clamp(-1.0, 1.0),
            }
        })
        .collect()
}
