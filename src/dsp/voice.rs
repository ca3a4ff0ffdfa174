//! Voice renderer — phoneme-synchronized tone bursts over a melody.

use crate::melody::MelodyNote;
use crate::phoneme::{Phoneme, PhonemeKind};

use super::{envelope, oscillator};

/// Fixed burst amplitude; the final buffer is peak-normalized later.
const BURST_GAIN: f64 = 0.3;
/// Attack length, capped at a quarter of the burst span.
const ATTACK_SECS: f64 = 0.015;
/// Release length, capped at a quarter of the burst span.
const RELEASE_SECS: f64 = 0.08;

/// Render each phoneme as a sine burst at the melody note cycled by the
/// phoneme's emission index (`i % melody.len()`).
///
/// Every phoneme advances the time cursor by its duration, silence
/// included: silence occupies time but renders nothing. Bursts
/// extending past the buffer end are truncated.
pub fn render_phonemes(
    phonemes: &[Phoneme],
    melody: &[MelodyNote],
    seconds: f64,
    sample_rate: u32,
) -> Vec<f64> {
    let sr = sample_rate as f64;
    let num_samples = (seconds * sr) as usize;
    let mut audio = vec![0.0; num_samples];
    if melody.is_empty() {
        return audio;
    }

    let mut cursor = 0.0; // seconds
    for (i, ph) in phonemes.iter().enumerate() {
        let duration = ph.duration_ms / 1000.0;

        if ph.kind != PhonemeKind::Silence {
            let note = &melody[i % melody.len()];
            let start = (cursor * sr) as usize;
            let end = (((cursor + duration) * sr) as usize).min(num_samples);

            if start < end {
                let len = end - start;
                let attack = ((ATTACK_SECS * sr) as usize).min(len / 4);
                let release = ((RELEASE_SECS * sr) as usize).min(len / 4);

                for j in 0..len {
                    let t = j as f64 * duration / len as f64;
                    let tone = oscillator::sine(note.frequency, t);
                    let env = envelope::trapezoid(j, len, attack, release);
                    audio[start + j] += tone * env * BURST_GAIN;
                }
            }
        }

        cursor += duration;
    }

    audio
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::melody;

    fn phoneme(kind: PhonemeKind, duration_ms: f64) -> Phoneme {
        Phoneme {
            grapheme: 'x',
            kind,
            duration_ms,
        }
    }

    fn one_note(frequency: f64) -> Vec<MelodyNote> {
        vec![MelodyNote {
            frequency,
            start: 0.0,
            duration: 0.25,
        }]
    }

    #[test]
    fn buffer_length_matches_request() {
        let audio = render_phonemes(&[], &one_note(440.0), 2.0, 8000);
        assert_eq!(audio.len(), 16000);
    }

    #[test]
    fn silence_occupies_time() {
        // 0.5 s of silence, then a 0.5 s vowel: the first half of the
        // buffer must stay empty, the second half must sing.
        let phonemes = vec![
            phoneme(PhonemeKind::Silence, 500.0),
            phoneme(PhonemeKind::Vowel('A'), 500.0),
        ];
        let audio = render_phonemes(&phonemes, &one_note(440.0), 1.0, 8000);

        assert!(
            audio[..4000].iter().all(|&s| s == 0.0),
            "Silence phoneme should render nothing"
        );
        assert!(
            audio[4000..].iter().any(|s| s.abs() > 0.01),
            "Voiced phoneme should render after the pause"
        );
    }

    #[test]
    fn truncates_past_buffer_end() {
        // A 3 s vowel into a 1 s buffer must not panic and must fill to
        // the end only.
        let phonemes = vec![phoneme(PhonemeKind::Vowel('A'), 3000.0)];
        let audio = render_phonemes(&phonemes, &one_note(220.0), 1.0, 8000);
        assert_eq!(audio.len(), 8000);
    }

    #[test]
    fn cursor_past_end_renders_nothing() {
        let phonemes = vec![
            phoneme(PhonemeKind::Vowel('A'), 2000.0),
            phoneme(PhonemeKind::Vowel('E'), 500.0),
        ];
        // Second phoneme starts past the 1 s buffer; no panic.
        let audio = render_phonemes(&phonemes, &one_note(220.0), 1.0, 8000);
        assert_eq!(audio.len(), 8000);
    }

    #[test]
    fn melody_cycles_by_emission_index() {
        let melody = vec![
            MelodyNote {
                frequency: 220.0,
                start: 0.0,
                duration: 0.25,
            },
            MelodyNote {
                frequency: 880.0,
                start: 0.25,
                duration: 0.25,
            },
        ];
        // Three voiced phonemes over a two-note melody: indices 0, 1, 2
        // map to notes 0, 1, 0.
        let phonemes = vec![
            phoneme(PhonemeKind::Vowel('A'), 250.0),
            phoneme(PhonemeKind::Vowel('E'), 250.0),
            phoneme(PhonemeKind::Vowel('I'), 250.0),
        ];
        let audio = render_phonemes(&phonemes, &melody, 1.0, 8000);

        // Same setup with the melody collapsed to note 0 everywhere:
        // first and third segments must match, second must differ.
        let flat = render_phonemes(&phonemes, &one_note(220.0), 1.0, 8000);
        assert_eq!(audio[..2000], flat[..2000]);
        assert_ne!(audio[2000..4000], flat[2000..4000]);
        assert_eq!(audio[4000..6000], flat[4000..6000]);
    }

    #[test]
    fn amplitude_bounded_by_burst_gain() {
        let phonemes = vec![phoneme(PhonemeKind::Vowel('O'), 1000.0)];
        let audio = render_phonemes(&phonemes, &one_note(440.0), 1.0, 8000);
        for &s in &audio {
            assert!(s.abs() <= BURST_GAIN + 1e-12, "Sample out of range: {s}");
        }
    }

    #[test]
    fn works_with_generated_melody() {
        let melody = melody::generate_melody(120, 2.0, "major", 60);
        let phonemes = vec![
            phoneme(PhonemeKind::Consonant, 37.5),
            phoneme(PhonemeKind::Vowel('A'), 175.0),
            phoneme(PhonemeKind::Silence, 50.0),
        ];
        let audio = render_phonemes(&phonemes, &melody, 2.0, 8000);
        assert!(audio.iter().any(|s| s.abs() > 0.001));
    }
}
