//! Sample encoder pipeline
//!
//! Runs the linear pipeline: decode -> downmix -> resample -> quantize ->
//! trim -> format. The whole buffer is transformed in memory in a single
//! pass; there is no streaming or partial processing.

pub mod format;
pub mod quantize;
pub mod trim;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::audio::{self, decoder::FileDecoder, resampler::Resampler};
use crate::config::EncoderConfig;
use crate::error::Result;

/// Summary of one encoder run.
#[derive(Debug)]
pub struct EncodeSummary {
    /// Frames decoded from the input file
    pub input_frames: usize,
    /// Native sample rate of the input file
    pub native_sample_rate: u32,
    /// Channel count of the input file
    pub channels: u16,
    /// Hex lines written to the output file
    pub emitted_lines: usize,
}

/// Convert an audio file to a hex sample dump.
///
/// The output file is created or fully overwritten. Returns a summary of
/// the run; all errors abort immediately with no partial-success semantics
/// (the output file may exist but incomplete if a write fails mid-run).
pub fn encode_file(input: &Path, output: &Path, config: &EncoderConfig) -> Result<EncodeSummary> {
    config.validate()?;

    let (samples, native_rate, channels) = FileDecoder::decode_file(input)?;
    let input_frames = samples.len() / channels.max(1) as usize;
    info!(
        "Audio input: {} frames at {} Hz ({:.2}s, {} channels)",
        input_frames,
        native_rate,
        input_frames as f64 / native_rate as f64,
        channels
    );

    let mono = audio::downmix(&samples, channels, config.downmix);
    let resampled = Resampler::resample(&mono, native_rate, config.target_sample_rate)?;
    let quantized = quantize::quantize(&resampled, config.bit_width, config.gain)?;

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let emitted = write_hex_lines(&mut writer, &quantized, config)?;
    writer.flush()?;

    info!(
        "Audio output: {} samples at {} Hz ({:.2}s)",
        emitted,
        config.target_sample_rate,
        emitted as f64 / config.target_sample_rate as f64
    );

    Ok(EncodeSummary {
        input_frames,
        native_sample_rate: native_rate,
        channels,
        emitted_lines: emitted,
    })
}

/// Trim, offset, and format a quantized sequence to a writer.
///
/// Returns the number of lines written. A fully-silent sequence (or a start
/// offset past the end) writes nothing, which is a valid empty result.
pub fn write_hex_lines<W: Write>(
    writer: &mut W,
    quantized: &[i64],
    config: &EncoderConfig,
) -> Result<usize> {
    let samples = if config.trim_silence {
        trim::trim_silence(quantized)
    } else {
        quantized
    };

    let mut count = 0;
    for &q in samples.iter().skip(config.start_offset) {
        let line = format::hex_literal(q, config.bit_width, config.trailing_comma);
        writeln!(writer, "{}", line)?;
        count += 1;
    }

    Ok(count)
}
