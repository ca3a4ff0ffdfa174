//! Track synthesizer — renders one singing object's voice.

use std::f64::consts::PI;

use crate::melody::MAJOR_SCALE;
use crate::model::SingingObject;
use crate::rng::Lcg;

use super::{envelope, oscillator};

/// Seconds per melodic note in the composition path.
const NOTE_DURATION: f64 = 0.5;

/// Tremolo rate in Hz, depth driven by mood brightness.
const TREMOLO_HZ: f64 = 5.0;

// Attack/release shares of a note span.
const ATTACK_SHARE: f64 = 0.1;
const RELEASE_SHARE: f64 = 0.2;

/// Base frequency for a vocal range name; unknown ranges sing alto.
pub fn base_frequency(vocal_range: &str) -> f64 {
    match vocal_range {
        "bass" => 110.0,    // A2
        "tenor" => 196.0,   // G3
        "soprano" => 392.0, // G4
        _ => 262.0,         // C4, alto
    }
}

/// Deterministic per-object seed: the sum of the id's character codes.
/// A weak hash (anagram ids collide), kept for parity with the legacy
/// client's renders.
pub fn object_seed(id: &str) -> u64 {
    id.chars().map(|c| c as u64).sum()
}

/// Render one object's waveform over `duration` seconds.
///
/// The duration is partitioned into contiguous half-second notes, each
/// picking a major-scale degree from the object's seeded stream, rendered
/// as a sine/triangle blend under a trapezoid envelope and the object's
/// mood modulation, then scaled by its volume.
pub fn synth_track(obj: &SingingObject, duration: f64, sample_rate: u32) -> Vec<f64> {
    let sr = sample_rate as f64;
    let num_samples = (duration * sr) as usize;
    let mut audio = vec![0.0; num_samples];

    let base_freq = base_frequency(&obj.vocal_range);
    let mut rng = Lcg::new(object_seed(&obj.id));

    let bright = obj.mood.bright.clamp(0.0, 1.0);
    let happy = obj.mood.happy.clamp(0.0, 1.0);
    let calm = obj.mood.calm.clamp(0.0, 1.0);
    let energy = 0.3 + happy * 0.5;
    let sustain = calm * 0.8 + 0.2;

    let notes_count = (duration / NOTE_DURATION) as usize;
    let attack = (ATTACK_SHARE * NOTE_DURATION * sr) as usize;
    let release = (RELEASE_SHARE * NOTE_DURATION * sr) as usize;

    for note_idx in 0..notes_count {
        let start = (note_idx as f64 * NOTE_DURATION * sr) as usize;
        let end = ((note_idx + 1) as f64 * NOTE_DURATION * sr) as usize;
        let end = end.min(num_samples);
        if start >= end {
            break;
        }
        let len = end - start;

        let semitones = MAJOR_SCALE[rng.next_index(MAJOR_SCALE.len())];
        let freq = base_freq * 2f64.powf(semitones as f64 / 12.0);

        for i in 0..len {
            let t = i as f64 * NOTE_DURATION / len as f64;
            let wave = oscillator::voice_blend(freq, t);
            let env = envelope::trapezoid(i, len, attack, release);
            let tremolo = 1.0 + bright * 0.2 * (2.0 * PI * TREMOLO_HZ * t).sin();
            audio[start + i] += wave * env * tremolo * energy * sustain;
        }
    }

    let volume = obj.volume.clamp(0.0, 1.0);
    for s in audio.iter_mut() {
        *s *= volume;
    }

    audio
}
