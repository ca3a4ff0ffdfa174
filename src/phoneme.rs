//! Phonemizer — segments lyric text into timed vowel/consonant/silence units.
//!
//! This is deliberately not a linguistic phonemizer: the tone renderer only
//! needs per-character timing classes, so vowels sing, consonants click, and
//! word gaps rest.

use crate::error::InvalidInput;

/// Timing class of one phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonemeKind {
    /// Sung vowel (A, E, I, O, U); carries the uppercased letter.
    Vowel(char),
    /// Any other letter; a short "C" burst.
    Consonant,
    /// Inter-word pause; occupies time but renders nothing.
    Silence,
}

/// A minimal classified unit of lyric text, driving tone timing.
#[derive(Debug, Clone)]
pub struct Phoneme {
    /// Source character this phoneme came from.
    pub grapheme: char,
    pub kind: PhonemeKind,
    /// Length in milliseconds.
    pub duration_ms: f64,
}

// Duration shares of one syllable.
const VOWEL_SHARE: f64 = 0.7;
const CONSONANT_SHARE: f64 = 0.15;
const PAUSE_SHARE: f64 = 0.2;

/// Milliseconds per syllable: half a beat at the given tempo.
pub fn syllable_ms(bpm: u32) -> f64 {
    (60_000.0 / bpm as f64) / 2.0
}

/// Split lyrics into phonemes. Words are whitespace-separated; each word
/// is followed by a silence phoneme. Non-alphabetic characters are
/// skipped outright, not materialized.
pub fn phonemize(text: &str, bpm: u32) -> Result<Vec<Phoneme>, InvalidInput> {
    if text.trim().is_empty() {
        return Err(InvalidInput::EmptyLyrics);
    }

    let syllable = syllable_ms(bpm);
    let mut phonemes = Vec::new();

    for word in text.split_whitespace() {
        for ch in word.chars() {
            let upper = ch.to_ascii_uppercase();
            if matches!(upper, 'A' | 'E' | 'I' | 'O' | 'U') {
                phonemes.push(Phoneme {
                    grapheme: ch,
                    kind: PhonemeKind::Vowel(upper),
                    duration_ms: syllable * VOWEL_SHARE,
                });
            } else if upper.is_alphabetic() {
                phonemes.push(Phoneme {
                    grapheme: ch,
                    kind: PhonemeKind::Consonant,
                    duration_ms: syllable * CONSONANT_SHARE,
                });
            }
        }
        phonemes.push(Phoneme {
            grapheme: ' ',
            kind: PhonemeKind::Silence,
            duration_ms: syllable * PAUSE_SHARE,
        });
    }

    Ok(phonemes)
}
