//! # audio2hex
//!
//! Converts an audio file (MP3, WAV, ...) into a textual hex sample dump
//! formatted as Verilog literal constants (e.g. `12'h0ab,`) for loading
//! into a hardware simulation testbench memory.
//!
//! **Pipeline:** decode (symphonia) -> downmix to mono -> resample (rubato)
//! -> peak-normalize and quantize -> trim silence -> format hex lines.

pub mod audio;
pub mod config;
pub mod encoder;
pub mod error;

pub use config::{DownmixMode, EncoderConfig};
pub use error::{Error, Result};
