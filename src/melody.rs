//! Melody generator — seeded scale walks at eighth-note spacing.

use crate::rng::Lcg;

/// One melodic note: absolute start offset and length in seconds.
#[derive(Debug, Clone, Copy)]
pub struct MelodyNote {
    pub frequency: f64,
    pub start: f64,
    pub duration: f64,
}

/// Eight-degree major scale in semitones above the root.
pub const MAJOR_SCALE: [i32; 8] = [0, 2, 4, 5, 7, 9, 11, 12];
/// Eight-degree natural minor scale in semitones above the root.
pub const MINOR_SCALE: [i32; 8] = [0, 2, 3, 5, 7, 8, 10, 12];

/// Fixed seed so a given (bpm, seconds, scale) always sings the same
/// melody.
const MELODY_SEED: u64 = 42;

/// Scale intervals by name; unknown names fall back to major.
pub fn scale_intervals(name: &str) -> &'static [i32; 8] {
    match name {
        "minor" => &MINOR_SCALE,
        _ => &MAJOR_SCALE,
    }
}

/// Root MIDI note for a voice preset; unknown presets land on middle C.
pub fn preset_root(preset: &str) -> i32 {
    match preset {
        "soprano-airy" => 67,
        "alto-soft" => 60,
        "tenor-bright" => 55,
        "baritone-warm" => 50,
        _ => 60,
    }
}

/// MIDI note number to frequency, A4 = 440 Hz equal temperament.
pub fn midi_to_freq(note: i32) -> f64 {
    440.0 * 2f64.powf((note - 69) as f64 / 12.0)
}

/// Generate notes at eighth-note (half-beat) spacing covering `seconds`.
/// Always emits at least one note so modulo indexing by the tone renderer
/// is well-defined.
pub fn generate_melody(bpm: u32, seconds: f64, scale: &str, root: i32) -> Vec<MelodyNote> {
    let intervals = scale_intervals(scale);
    let eighth = (60.0 / bpm as f64) / 2.0;
    let total_notes = ((seconds / eighth) as usize).max(1);

    let mut rng = Lcg::new(MELODY_SEED);
    (0..total_notes)
        .map(|i| {
            let interval = intervals[rng.next_index(intervals.len())];
            MelodyNote {
                frequency: midi_to_freq(root + interval),
                start: i as f64 * eighth,
                duration: eighth,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_is_440() {
        assert!((midi_to_freq(69) - 440.0).abs() < 1e-9);
    }

    #[test]
    fn octave_doubles() {
        assert!((midi_to_freq(81) - 880.0).abs() < 1e-6);
    }

    #[test]
    fn note_count_covers_duration() {
        // 120 BPM: eighth = 0.25 s, so 5 s holds 20 notes.
        let melody = generate_melody(120, 5.0, "major", 60);
        assert_eq!(melody.len(), 20);
        let last = melody.last().unwrap();
        assert!((last.start - 4.75).abs() < 1e-9);
        assert!((last.duration - 0.25).abs() < 1e-9);
    }

    #[test]
    fn never_empty() {
        let melody = generate_melody(120, 0.1, "major", 60);
        assert_eq!(melody.len(), 1);
    }

    #[test]
    fn deterministic_per_parameters() {
        let a = generate_melody(100, 8.0, "minor", 55);
        let b = generate_melody(100, 8.0, "minor", 55);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.frequency, y.frequency, "Melody should be seeded");
        }
    }

    #[test]
    fn unknown_scale_is_major() {
        assert_eq!(scale_intervals("dorian"), &MAJOR_SCALE);
        assert_eq!(scale_intervals("minor"), &MINOR_SCALE);
    }

    #[test]
    fn preset_roots() {
        assert_eq!(preset_root("soprano-airy"), 67);
        assert_eq!(preset_root("alto-soft"), 60);
        assert_eq!(preset_root("tenor-bright"), 55);
        assert_eq!(preset_root("baritone-warm"), 50);
        assert_eq!(preset_root("whale-song"), 60);
    }

    #[test]
    fn frequencies_stay_in_scale() {
        let melody = generate_melody(120, 4.0, "major", 60);
        let allowed: Vec<f64> = MAJOR_SCALE.iter().map(|&s| midi_to_freq(60 + s)).collect();
        for note in &melody {
            assert!(
                allowed.iter().any(|&f| (f - note.frequency).abs() < 1e-9),
                "Frequency {} not in the C major table",
                note.frequency
            );
        }
    }
}
