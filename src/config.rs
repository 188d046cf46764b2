//! Encoder configuration
//!
//! All pipeline parameters live in an explicit [`EncoderConfig`] passed into
//! the encoder. There is no process-wide mutable state.

use clap::ValueEnum;

use crate::error::{Error, Result};

/// How stereo input is collapsed to mono.
///
/// `Sum` adds the first two channels sample-wise, which doubles amplitude
/// before peak normalization. This matches the established testbench dumps
/// and is the default; `Average` halves the sum instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DownmixMode {
    Sum,
    Average,
}

/// Sample encoder configuration.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Output sample rate in Hz
    pub target_sample_rate: u32,

    /// Output sample bit width B; samples span [-(2^(B-1)), 2^(B-1)-1]
    pub bit_width: u32,

    /// Headroom fraction applied after peak normalization; the loudest
    /// input sample maps to gain * (2^(B-1)-1) in magnitude
    pub gain: f64,

    /// Sample index (within the trimmed sequence) to begin emission at
    pub start_offset: usize,

    /// Strip leading and trailing runs of exact-zero samples
    pub trim_silence: bool,

    /// Terminate each output line with a comma
    pub trailing_comma: bool,

    /// Stereo downmix mode
    pub downmix: DownmixMode,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            target_sample_rate: 24000,
            bit_width: 12,
            gain: 0.5,
            start_offset: 0,
            trim_silence: true,
            trailing_comma: true,
            downmix: DownmixMode::Sum,
        }
    }
}

impl EncoderConfig {
    /// Validate parameter ranges before running the pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.target_sample_rate == 0 {
            return Err(Error::Config(
                "Target sample rate must be positive".to_string(),
            ));
        }
        if !(2..=32).contains(&self.bit_width) {
            return Err(Error::Config(format!(
                "Bit width must be between 2 and 32, got {}",
                self.bit_width
            )));
        }
        if !self.gain.is_finite() || self.gain <= 0.0 {
            return Err(Error::Config(format!(
                "Gain must be a positive finite number, got {}",
                self.gain
            )));
        }
        Ok(())
    }

    /// Largest representable output value, 2^(B-1)-1.
    pub fn max_out(&self) -> i64 {
        (1i64 << (self.bit_width - 1)) - 1
    }

    /// Smallest representable output value, -(2^(B-1)).
    pub fn min_out(&self) -> i64 {
        -(1i64 << (self.bit_width - 1))
    }
}
