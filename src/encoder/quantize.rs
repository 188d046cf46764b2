//! Peak normalization and fixed-point quantization
//!
//! Maps the loudest sample in the buffer to `gain * (2^(B-1)-1)` in
//! magnitude and truncates every scaled sample toward zero, matching the
//! integer conversion of the reference dumps.

use crate::error::{Error, Result};

/// Quantize a normalized f32 buffer to signed B-bit integers.
///
/// Each sample is divided by the buffer's peak absolute amplitude, scaled by
/// `gain * (2^(B-1)-1)`, and truncated toward zero. Results are clamped into
/// `[-(2^(B-1)), 2^(B-1)-1]` so a gain above 1.0 cannot overflow the width.
///
/// # Errors
/// `Error::SilentInput` if the buffer is nonempty and its peak amplitude is
/// exactly zero. An empty buffer quantizes to an empty output.
pub fn quantize(samples: &[f32], bit_width: u32, gain: f64) -> Result<Vec<i64>> {
    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let max_y = samples.iter().fold(0.0f32, |m, s| m.max(s.abs()));
    if max_y == 0.0 {
        return Err(Error::SilentInput);
    }
    let max_y = max_y as f64;

    let max_out = (1i64 << (bit_width - 1)) - 1;
    let min_out = -(1i64 << (bit_width - 1));
    let amplitude = gain * max_out as f64;

    let quantized = samples
        .iter()
        // Divide first so the peak sample normalizes to exactly +/-1.0
        .map(|&s| ((s as f64 / max_y) * amplitude) as i64)
        .map(|q| q.clamp(min_out, max_out))
        .collect();

    Ok(quantized)
}
