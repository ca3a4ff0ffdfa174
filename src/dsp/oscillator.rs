//! Oscillators — stateless sine and triangle tone math.
//!
//! Notes here are rendered whole from a per-note time axis, so the
//! oscillators are pure functions of (frequency, time) rather than
//! phase-accumulating streams.

use std::f64::consts::PI;

/// Sine sample at time `t` seconds.
pub fn sine(freq: f64, t: f64) -> f64 {
    (2.0 * PI * freq * t).sin()
}

/// Triangle realized as `(2/π)·asin(sin(2πft))`; phase-aligned with the
/// sine at the same frequency.
pub fn triangle(freq: f64, t: f64) -> f64 {
    (2.0 / PI) * (2.0 * PI * freq * t).sin().asin()
}

/// The studio voice blend: 60% sine, 40% triangle.
pub fn voice_blend(freq: f64, t: f64) -> f64 {
    0.6 * sine(freq, t) + 0.4 * triangle(freq, t)
}
