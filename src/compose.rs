//! Compose operations — the two pure entry points of the studio core.
//!
//! `compose` runs the multi-object path (synthesize → mix → summarize →
//! encode); `compose_singing` runs the lyric path (phonemize → melody →
//! tone render → encode). Both either fully succeed or fail; no partial
//! results.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::config::SynthConfig;
use crate::dsp::{mixer, synth, voice, wav, waveform};
use crate::error::{ComposeError, InvalidInput, SynthesisError};
use crate::melody;
use crate::model::{
    ComposeRequest, SingingObject, SingingRequest, SingingResult, SongResult, SongTrack,
};
use crate::phoneme;

/// Musical keys a composition may land in.
pub const KEYS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

/// Tempo bounds in BPM for the composition path.
pub const TEMPO_MIN: u32 = 100;
pub const TEMPO_MAX: u32 = 160;

/// Valid duration bounds for the lyric path, in seconds.
const MIN_SECONDS: f64 = 1.0;
const MAX_SECONDS: f64 = 60.0;

/// Source of the intentionally non-deterministic style fields (key and
/// tempo). Everything else in the pipeline is seeded, so this lives
/// behind a trait and determinism tests swap in a fixed one.
pub trait StyleSource {
    fn key(&mut self) -> String;
    fn tempo(&mut self) -> u32;
}

/// Default style source backed by the thread-local OS RNG.
#[derive(Debug, Default)]
pub struct RandomStyle;

impl StyleSource for RandomStyle {
    fn key(&mut self) -> String {
        let i = rand::thread_rng().gen_range(0..KEYS.len());
        KEYS[i].to_string()
    }

    fn tempo(&mut self) -> u32 {
        rand::thread_rng().gen_range(TEMPO_MIN..=TEMPO_MAX)
    }
}

/// Waveform seed per track: harmony mode gives every track a distinct
/// squiggle, solo mode reuses the shared one.
fn waveform_seed(harmony_mode: bool, index: usize) -> u64 {
    if harmony_mode {
        42 + index as u64 * 137
    } else {
        42
    }
}

fn song_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("song-{millis}")
}

/// Reject buffers that picked up NaN or infinity during synthesis. The
/// detailed location is logged here; callers get a generic failure.
fn check_finite(buffer: &[f64], stage: &'static str) -> Result<(), SynthesisError> {
    match buffer.iter().position(|s| !s.is_finite()) {
        Some(index) => {
            let err = SynthesisError::NonFiniteSample { stage, index };
            log::error!("synthesis produced bad audio: {err}");
            Err(err)
        }
        None => Ok(()),
    }
}

/// Compose a song from the request's enabled objects.
///
/// Requires at least one enabled object and at most
/// `config.max_tracks`. The title falls back to "Harmony of N Objects"
/// in harmony mode, otherwise to the first enabled object's name. Key
/// and tempo come from `style` and are the only unseeded values in the
/// pipeline.
pub fn compose(
    config: &SynthConfig,
    request: &ComposeRequest,
    style: &mut dyn StyleSource,
) -> Result<SongResult, ComposeError> {
    let enabled: Vec<&SingingObject> = request.objects.iter().filter(|o| o.enabled).collect();
    if enabled.is_empty() {
        return Err(InvalidInput::NoEnabledObjects.into());
    }
    if enabled.len() > config.max_tracks {
        return Err(InvalidInput::TooManyTracks {
            count: enabled.len(),
            max: config.max_tracks,
        }
        .into());
    }

    let mut audio_tracks = Vec::with_capacity(enabled.len());
    let mut song_tracks = Vec::with_capacity(enabled.len());
    for (index, obj) in enabled.iter().enumerate() {
        audio_tracks.push(synth::synth_track(obj, config.default_duration, config.sample_rate));
        song_tracks.push(SongTrack {
            object_id: obj.id.clone(),
            display_name: obj.name.clone(),
            genre: obj.genre.clone(),
            vocal_range: obj.vocal_range.clone(),
            enabled: obj.enabled,
            volume: obj.volume,
            waveform: waveform::summarize(
                waveform::DEFAULT_POINTS,
                waveform_seed(request.harmony_mode, index),
            ),
        });
    }

    let mixed = mixer::mix(&audio_tracks)?;
    check_finite(&mixed, "mix")?;

    let default_title = if request.harmony_mode {
        format!("Harmony of {} Objects", enabled.len())
    } else {
        enabled[0].name.clone()
    };
    let title = request
        .title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(default_title);

    Ok(SongResult {
        id: song_id(),
        title,
        bpm: style.tempo(),
        key: style.key(),
        harmony_mode: request.harmony_mode,
        mixed_audio_url: wav::wav_data_url(&mixed, config.sample_rate),
        tracks: song_tracks,
    })
}

/// Render a singing track from free-text lyrics.
pub fn compose_singing(
    config: &SynthConfig,
    request: &SingingRequest,
) -> Result<SingingResult, ComposeError> {
    let phonemes = phoneme::phonemize(&request.lyrics, request.bpm)?;

    if !(MIN_SECONDS..=MAX_SECONDS).contains(&request.seconds) {
        return Err(InvalidInput::DurationOutOfRange {
            seconds: request.seconds,
        }
        .into());
    }

    let melody = melody::generate_melody(
        request.bpm,
        request.seconds,
        &request.scale,
        melody::preset_root(&request.preset),
    );
    let mut audio = voice::render_phonemes(&phonemes, &melody, request.seconds, config.sample_rate);
    mixer::normalize_peak(&mut audio);
    check_finite(&audio, "singing")?;

    Ok(SingingResult {
        audio_url: wav::wav_data_url(&audio, config.sample_rate),
        duration: request.seconds,
        bpm: request.bpm,
        scale: request.scale.clone(),
        preset: request.preset.clone(),
    })
}
