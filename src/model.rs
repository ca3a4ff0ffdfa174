//! Request/response data model for the studio core.
//!
//! Field names keep the camelCase wire shape of the legacy studio client
//! (`vocalRange`, `mixedAudioUrl`, ...), so existing front-ends can talk
//! to this crate unchanged.

use serde::{Deserialize, Serialize};

fn default_mood_level() -> f64 {
    0.5
}

fn default_volume() -> f64 {
    0.7
}

fn default_enabled() -> bool {
    true
}

fn default_vocal_range() -> String {
    "alto".to_string()
}

fn default_scale() -> String {
    "major".to_string()
}

fn default_preset() -> String {
    "alto-soft".to_string()
}

/// Three independent scalars in [0, 1] modulating synthesis timbre and
/// dynamics. Missing fields fall back to a neutral 0.5.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mood {
    #[serde(default = "default_mood_level")]
    pub bright: f64,
    #[serde(default = "default_mood_level")]
    pub happy: f64,
    #[serde(default = "default_mood_level")]
    pub calm: f64,
}

impl Default for Mood {
    fn default() -> Self {
        Mood {
            bright: 0.5,
            happy: 0.5,
            calm: 0.5,
        }
    }
}

/// One declarative "singing object": immutable input to synthesis,
/// created per request and discarded after the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingingObject {
    /// Stable identity; also seeds the object's melodic pattern.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genre: Option<String>,
    /// Coarse pitch category: bass, tenor, alto, or soprano. Unknown
    /// values fall back to alto at synthesis time.
    #[serde(default = "default_vocal_range")]
    pub vocal_range: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// One visualization sample: normalized time and amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveformPoint {
    /// Normalized time in [0, 1].
    pub t: f64,
    /// Amplitude in [-1, 1].
    pub v: f64,
}

/// Per-track metadata echoed back to the client, plus its squiggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongTrack {
    pub object_id: String,
    pub display_name: String,
    pub genre: Option<String>,
    pub vocal_range: String,
    pub enabled: bool,
    pub volume: f64,
    pub waveform: Vec<WaveformPoint>,
}

/// Output aggregate of the multi-object composition path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongResult {
    pub id: String,
    pub title: String,
    pub bpm: u32,
    pub key: String,
    pub harmony_mode: bool,
    /// `data:audio/wav;base64,` URL of the mixed 16-bit PCM audio.
    pub mixed_audio_url: String,
    pub tracks: Vec<SongTrack>,
}

/// Input to the multi-object composition path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRequest {
    #[serde(default)]
    pub objects: Vec<SingingObject>,
    #[serde(default)]
    pub harmony_mode: bool,
    #[serde(default)]
    pub title: Option<String>,
}

/// Input to the lyric rendering path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingingRequest {
    pub lyrics: String,
    /// Requested output length in seconds; must sit in [1, 60].
    pub seconds: f64,
    pub bpm: u32,
    #[serde(default = "default_scale")]
    pub scale: String,
    #[serde(default = "default_preset")]
    pub preset: String,
}

/// Output of the lyric rendering path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingingResult {
    pub audio_url: String,
    pub duration: f64,
    pub bpm: u32,
    pub scale: String,
    pub preset: String,
}
