//! Normalization: declared seconds to whole milliseconds.

use crate::extraction::ExtractedFrame;

/// A frame with its delay in integer milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFrame<I> {
    pub index: usize,
    pub image: I,
    pub delay_ms: u64,
}

/// Normalized frames and their summed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<I> {
    pub frames: Vec<NormalizedFrame<I>>,
    pub total_duration_ms: u64,
}

impl<I> Normalized<I> {
    pub fn delays_ms(&self) -> Vec<u64> {
        self.frames.iter().map(|f| f.delay_ms).collect()
    }
}

/// Convert seconds to milliseconds, truncating any fraction.
pub fn delay_secs_to_ms(secs: f64) -> u64 {
    (secs * 1000.0) as u64
}

/// Convert every extracted delay to milliseconds and accumulate the total.
pub fn normalize<I>(frames: Vec<ExtractedFrame<I>>) -> Normalized<I> {
    let mut total_duration_ms = 0u64;
    let frames: Vec<_> = frames
        .into_iter()
        .map(|f| {
            let delay_ms = delay_secs_to_ms(f.delay_secs);
            total_duration_ms = total_duration_ms.saturating_add(delay_ms);
            NormalizedFrame {
                index: f.index,
                image: f.image,
                delay_ms,
            }
        })
        .collect();

    tracing::debug!(
        frames = frames.len(),
        total_duration_ms,
        "Normalized frame delays"
    );

    Normalized {
        frames,
        total_duration_ms,
    }
}
