//! WAV encoder — 16-bit mono PCM container and base64 data URLs.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encode float samples as a mono 16-bit little-endian PCM WAV buffer.
///
/// Samples are converted via `round(s * 32767)` and are assumed to sit
/// within [-1, 1] already; the mixer guarantees ±0.8. Callers that
/// bypass the mixer must pre-clamp (out-of-range input saturates at the
/// i16 limits here rather than wrapping).
pub fn encode_wav(samples: &[f64], sample_rate: u32) -> Vec<u8> {
    let channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * (bits_per_sample as u32 / 8);
    let block_align = channels * (bits_per_sample / 8);
    let data_size = (samples.len() * 2) as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(44 + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        let pcm = (sample * 32767.0).round() as i16;
        buf.extend_from_slice(&pcm.to_le_bytes());
    }

    buf
}

/// Self-describing embeddable artifact: media-type prefix plus the
/// base64-encoded container bytes.
pub fn wav_data_url(samples: &[f64], sample_rate: u32) -> String {
    let bytes = encode_wav(samples, sample_rate);
    format!("data:audio/wav;base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_header_valid() {
        let wav = encode_wav(&[0.0; 100], 44100);

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");

        let sr = u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]);
        assert_eq!(sr, 44100);

        let ch = u16::from_le_bytes([wav[22], wav[23]]);
        assert_eq!(ch, 1);

        let bits = u16::from_le_bytes([wav[34], wav[35]]);
        assert_eq!(bits, 16);
    }

    #[test]
    fn wav_size_correct() {
        let wav = encode_wav(&[0.0; 22050], 22050);
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size, 44100);
        assert_eq!(wav.len(), 44 + 44100);
    }

    #[test]
    fn roundtrip_within_quantization_error() {
        let samples: Vec<f64> = (0..1000)
            .map(|i| 0.8 * (i as f64 * 0.05).sin())
            .collect();
        let wav = encode_wav(&samples, 8000);

        // Decode: sample count and rate recover exactly, amplitudes
        // within one quantization step.
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]) as usize;
        assert_eq!(data_size / 2, samples.len());
        let sr = u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]);
        assert_eq!(sr, 8000);

        for (i, original) in samples.iter().enumerate() {
            let lo = wav[44 + i * 2];
            let hi = wav[44 + i * 2 + 1];
            let decoded = i16::from_le_bytes([lo, hi]) as f64 / 32767.0;
            assert!(
                (decoded - original).abs() <= 1.0 / 32767.0,
                "Sample {i} off by more than one step: {decoded} vs {original}"
            );
        }
    }

    #[test]
    fn full_scale_endpoints() {
        let wav = encode_wav(&[1.0, -1.0], 8000);
        let hi = i16::from_le_bytes([wav[44], wav[45]]);
        let lo = i16::from_le_bytes([wav[46], wav[47]]);
        assert_eq!(hi, 32767);
        assert_eq!(lo, -32767);
    }

    #[test]
    fn data_url_prefix_and_payload() {
        use base64::Engine as _;
        use base64::engine::general_purpose::STANDARD;

        let url = wav_data_url(&[0.0; 8], 8000);
        let b64 = url
            .strip_prefix("data:audio/wav;base64,")
            .expect("Missing data URL prefix");
        let bytes = STANDARD.decode(b64).expect("Payload should be base64");
        assert_eq!(bytes, encode_wav(&[0.0; 8], 8000));
    }
}
