//! Audio decoder using symphonia
//!
//! Decodes an entire audio file (MP3, WAV, and anything else symphonia can
//! probe with the enabled features) to interleaved f32 PCM samples. The whole
//! file is held in memory; there is no streaming path.

use crate::error::{Error, Result};
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};

/// Whole-file audio decoder.
pub struct FileDecoder;

impl FileDecoder {
    /// Decode an entire audio file to PCM samples.
    ///
    /// # Returns
    /// - `samples`: Interleaved f32 samples in [-1.0, 1.0]
    /// - `sample_rate`: Native sample rate of the file
    /// - `channels`: Number of channels in the source (1=mono, 2=stereo, ...)
    ///
    /// # Errors
    /// - Failed to open file
    /// - Unsupported or unrecognized format
    /// - No decodable audio track
    pub fn decode_file(path: &Path) -> Result<(Vec<f32>, u32, u16)> {
        debug!("Decoding entire file: {}", path.display());

        let file = std::fs::File::open(path)
            .map_err(|e| Error::Decode(format!("Failed to open file {}: {}", path.display(), e)))?;

        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        // Hint the format registry with the file extension
        let mut hint = Hint::new();
        if let Some(extension) = path.extension() {
            if let Some(ext_str) = extension.to_str() {
                hint.with_extension(ext_str);
            }
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| Error::Decode(format!("Failed to probe format: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| Error::Decode("No audio track found".to_string()))?;

        let track_id = track.id;
        let codec_params = track.codec_params.clone();

        let sample_rate = codec_params
            .sample_rate
            .ok_or_else(|| Error::Decode("Sample rate not found".to_string()))?;

        let channels = codec_params
            .channels
            .map(|c| c.count() as u16)
            .ok_or_else(|| Error::Decode("Channel count not found".to_string()))?;

        debug!(
            "Audio format: sample_rate={}, channels={}",
            sample_rate, channels
        );

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| Error::Decode(format!("Failed to create decoder: {}", e)))?;

        let mut samples = Vec::new();
        let mut sample_buf: Option<SampleBuffer<f32>> = None;

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(symphonia::core::errors::Error::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    debug!("Reached end of file");
                    break;
                }
                Err(e) => {
                    warn!("Error reading packet: {}", e);
                    break;
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            match decoder.decode(&packet) {
                Ok(decoded) => {
                    let needed = decoded.capacity() as u64;
                    let recreate = match &sample_buf {
                        Some(buf) => buf.capacity() < decoded.frames() * decoded.spec().channels.count(),
                        None => true,
                    };
                    if recreate {
                        sample_buf = Some(SampleBuffer::new(needed, *decoded.spec()));
                    }
                    if let Some(buf) = sample_buf.as_mut() {
                        buf.copy_interleaved_ref(decoded);
                        samples.extend_from_slice(buf.samples());
                    }
                }
                Err(e) => {
                    // Skip undecodable packets rather than aborting the run
                    warn!("Decode error: {}", e);
                    continue;
                }
            }
        }

        debug!(
            "Decoded {} samples ({} frames)",
            samples.len(),
            samples.len() / channels as usize
        );

        Ok((samples, sample_rate, channels))
    }
}
