//! audio2hex - Main entry point
//!
//! Command-line front end for the sample encoder: converts an audio file
//! into a Verilog hex sample dump for testbench memories.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audio2hex::config::{DownmixMode, EncoderConfig};
use audio2hex::encoder;

/// Command-line arguments for audio2hex
#[derive(Parser, Debug)]
#[command(name = "audio2hex")]
#[command(about = "Convert an audio file to a Verilog hex sample dump")]
#[command(version)]
struct Args {
    /// Input audio file (MP3, WAV, ...)
    input: PathBuf,

    /// Output hex text file (overwritten if it exists)
    output: PathBuf,

    /// Target sample rate in Hz
    #[arg(long = "sample-rate", default_value_t = 24000, env = "AUDIO2HEX_SAMPLE_RATE")]
    sample_rate: u32,

    /// Output sample bit width
    #[arg(long = "bits", default_value_t = 12, env = "AUDIO2HEX_BITS")]
    bits: u32,

    /// Headroom gain applied after peak normalization, typically in (0, 1]
    #[arg(long, default_value_t = 0.5)]
    gain: f64,

    /// Sample index to begin emission at
    #[arg(long = "start", default_value_t = 0)]
    start: usize,

    /// Keep leading and trailing zero samples
    #[arg(long = "no-trim")]
    no_trim: bool,

    /// Omit the trailing comma on each output line
    #[arg(long = "no-comma")]
    no_comma: bool,

    /// Stereo downmix mode
    #[arg(long, value_enum, default_value = "sum")]
    downmix: DownmixMode,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "audio2hex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = EncoderConfig {
        target_sample_rate: args.sample_rate,
        bit_width: args.bits,
        gain: args.gain,
        start_offset: args.start,
        trim_silence: !args.no_trim,
        trailing_comma: !args.no_comma,
        downmix: args.downmix,
    };

    info!(
        "Converting {} -> {}",
        args.input.display(),
        args.output.display()
    );

    let summary = encoder::encode_file(&args.input, &args.output, &config)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    info!(
        "Wrote {} lines ({} bit samples at {} Hz)",
        summary.emitted_lines, config.bit_width, config.target_sample_rate
    );

    Ok(())
}
