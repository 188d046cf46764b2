//! Sample rate conversion using rubato
//!
//! Converts the mono buffer to the configured target rate (24 kHz by
//! default) in a single pass over the whole buffer.

use crate::error::{Error, Result};
use rubato::{FastFixedIn, PolynomialDegree, Resampler as RubatoResampler};
use tracing::debug;

/// Audio resampler using rubato for band-limited sample rate conversion.
pub struct Resampler;

impl Resampler {
    /// Resample a mono buffer from `input_rate` to `output_rate`.
    ///
    /// The output length is approximately `input.len() * output_rate /
    /// input_rate`; the exact count depends on the resampler internals.
    ///
    /// # Notes
    /// If the input is already at the target rate, returns a copy without
    /// resampling. An empty input yields an empty output.
    pub fn resample(input: &[f32], input_rate: u32, output_rate: u32) -> Result<Vec<f32>> {
        if input_rate == output_rate {
            debug!("Sample rate already at {}Hz, skipping resample", output_rate);
            return Ok(input.to_vec());
        }

        if input.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Resampling from {}Hz to {}Hz", input_rate, output_rate);

        // Process the whole buffer as one chunk
        let mut resampler = FastFixedIn::<f32>::new(
            output_rate as f64 / input_rate as f64,
            1.0, // max_relative_ratio (no runtime changes)
            PolynomialDegree::Septic,
            input.len(),
            1,
        )
        .map_err(|e| Error::Resample(format!("Failed to create resampler: {}", e)))?;

        let output = resampler
            .process(&[input], None)
            .map_err(|e| Error::Resample(format!("Resampling failed: {}", e)))?
            .into_iter()
            .next()
            .unwrap_or_default();

        debug!(
            "Resampled {} input frames to {} output frames",
            input.len(),
            output.len()
        );

        Ok(output)
    }
}
