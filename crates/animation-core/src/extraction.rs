//! Extraction: image handle and declared delay for every frame.

use crate::assembler::{AssemblyOptions, MAX_FRAME_DELAY_SECS};
use crate::frame_source::{DelayMetadata, FrameSource};

/// A decoded frame paired with its declared delay.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFrame<I> {
    /// Index of the frame in the source.
    pub index: usize,
    pub image: I,
    /// Declared delay in seconds, already floored.
    pub delay_secs: f64,
}

/// Result of reading every frame of a source.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<I> {
    pub frames: Vec<ExtractedFrame<I>>,
    /// Indices whose image could not be decoded.
    pub skipped: Vec<usize>,
}

/// Delay for a frame using the standard 0.1s default and floor.
pub fn delay_for_index<S: FrameSource>(source: &S, index: usize) -> f64 {
    resolve_delay(source.properties_at(index), &AssemblyOptions::default())
}

/// Pick the effective delay (seconds) from a frame's metadata.
///
/// The unclamped value wins unless it is zero or missing, in which case the
/// standard value is used. With neither, `default_delay_secs` applies.
/// The result is never below `min_delay_secs` and never above
/// [`MAX_FRAME_DELAY_SECS`].
pub fn resolve_delay(metadata: Option<DelayMetadata>, options: &AssemblyOptions) -> f64 {
    let declared = metadata.and_then(|meta| {
        usable(meta.unclamped_delay_secs)
            .filter(|secs| *secs != 0.0)
            .or_else(|| usable(meta.standard_delay_secs))
    });

    declared
        .unwrap_or(options.default_delay_secs)
        .max(options.min_delay_secs)
        .min(MAX_FRAME_DELAY_SECS)
}

/// NaN, infinite, and negative delays count as missing.
fn usable(secs: Option<f64>) -> Option<f64> {
    secs.filter(|s| s.is_finite() && *s >= 0.0)
}

/// Read every frame of `source` in index order.
///
/// A frame whose image fails to decode is dropped along with its delay, so
/// images and delays stay paired one-to-one.
pub fn extract_frames<S: FrameSource>(
    source: &S,
    options: &AssemblyOptions,
) -> Extraction<S::Image> {
    let count = source.count();
    let mut frames = Vec::with_capacity(count);
    let mut skipped = Vec::new();

    for index in 0..count {
        let Some(image) = source.image_at(index) else {
            tracing::warn!(index, "Frame failed to decode, skipping");
            skipped.push(index);
            continue;
        };

        frames.push(ExtractedFrame {
            index,
            image,
            delay_secs: resolve_delay(source.properties_at(index), options),
        });
    }

    tracing::debug!(
        declared = count,
        extracted = frames.len(),
        skipped = skipped.len(),
        "Extracted frames"
    );

    Extraction { frames, skipped }
}
