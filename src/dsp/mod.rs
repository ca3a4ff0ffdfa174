//! DSP — Pure Rust audio synthesis and encoding.
//!
//! Everything here is a synchronous, single-threaded computation over
//! owned buffers: no shared state, no locks, no I/O. Hosts may run
//! independent requests on separate threads with no coordination.

pub mod envelope;
pub mod mixer;
pub mod oscillator;
pub mod synth;
pub mod voice;
pub mod wav;
pub mod waveform;
