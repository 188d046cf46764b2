//! Audio input stages: decode, downmix, resample.

pub mod decoder;
pub mod resampler;

use crate::config::DownmixMode;

/// Collapse interleaved samples to a mono buffer.
///
/// For multi-channel input, combines the first two channels frame-wise and
/// ignores any further channels. Mono input is returned as-is.
///
/// `Sum` mode adds left and right without halving; the doubled amplitude is
/// absorbed by the peak normalization step downstream.
pub fn downmix(samples: &[f32], channels: u16, mode: DownmixMode) -> Vec<f32> {
    if channels <= 1 {
        return samples.to_vec();
    }

    let stride = channels as usize;
    let frames = samples.len() / stride;
    let mut mono = Vec::with_capacity(frames);

    for frame_idx in 0..frames {
        let left = samples[frame_idx * stride];
        let right = samples[frame_idx * stride + 1];
        let combined = match mode {
            DownmixMode::Sum => left + right,
            DownmixMode::Average => (left + right) / 2.0,
        };
        mono.push(combined);
    }

    mono
}
