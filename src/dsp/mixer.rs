//! Mixer — zero-pads, sums, and peak-normalizes track buffers.

use crate::error::InvalidInput;

/// Normalization target: the loudest mixed sample lands at ±0.8,
/// leaving 20% headroom below full scale.
pub const PEAK_TARGET: f64 = 0.8;

/// Sum an ordered list of tracks into one buffer.
///
/// Shorter tracks are implicitly zero-padded to the longest track's
/// length. The result is peak-normalized to [`PEAK_TARGET`].
pub fn mix(tracks: &[Vec<f64>]) -> Result<Vec<f64>, InvalidInput> {
    if tracks.is_empty() {
        return Err(InvalidInput::NoTracks);
    }

    let max_len = tracks.iter().map(|t| t.len()).max().unwrap_or(0);
    let mut mixed = vec![0.0; max_len];
    for track in tracks {
        for (out, &s) in mixed.iter_mut().zip(track.iter()) {
            *out += s;
        }
    }

    normalize_peak(&mut mixed);
    Ok(mixed)
}

/// Scale the buffer so its peak magnitude reaches [`PEAK_TARGET`].
/// A silent buffer is left untouched (never divides by zero).
pub fn normalize_peak(buffer: &mut [f64]) {
    let peak = buffer.iter().fold(0.0_f64, |m, &s| m.max(s.abs()));
    if peak > 0.0 {
        let gain = PEAK_TARGET / peak;
        for s in buffer.iter_mut() {
            *s *= gain;
        }
    }
}
