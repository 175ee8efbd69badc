//! Assembled animation sequence and its serializable summary.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Frames laid out on a fixed tick grid.
///
/// Every entry of `frames` is shown for exactly one tick. A logical frame
/// whose delay spans several ticks appears as consecutive copies.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSequence<I> {
    /// Image handles in playback order, with repetition.
    pub frames: Vec<I>,

    /// Length of one tick (ms). Divides every frame delay.
    pub tick_unit_ms: u64,

    /// Sum of all frame delays (ms).
    pub total_duration_ms: u64,
}

impl<I> AnimationSequence<I> {
    /// A sequence with no frames and zero duration.
    pub fn empty() -> Self {
        Self {
            frames: Vec::new(),
            tick_unit_ms: 1,
            total_duration_ms: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.total_duration_ms as f64 / 1000.0
    }

    /// Total duration.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.total_duration_ms)
    }

    /// How long each entry of `frames` stays on screen.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.tick_unit_ms)
    }

    /// Constant playback rate that reproduces the declared timing.
    pub fn frames_per_second(&self) -> f64 {
        1000.0 / self.tick_unit_ms as f64
    }

    /// The frame visible `elapsed` after playback started, looping forever.
    ///
    /// Returns `None` only for an empty sequence.
    pub fn frame_at(&self, elapsed: Duration) -> Option<&I> {
        if self.frames.is_empty() || self.total_duration_ms == 0 {
            return None;
        }

        let into_loop = elapsed.as_millis() % self.total_duration_ms as u128;
        let tick = (into_loop / self.tick_unit_ms as u128) as usize;
        self.frames.get(tick.min(self.frames.len() - 1))
    }

    pub fn into_frames(self) -> Vec<I> {
        self.frames
    }
}

impl<I> Default for AnimationSequence<I> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Human- and machine-readable description of an assembled animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSummary {
    /// Frames the source declared.
    pub source_frame_count: usize,

    /// Source indices of the frames that made it into the sequence.
    pub frame_indices: Vec<usize>,

    /// Normalized delay of each kept frame (ms).
    pub delays_ms: Vec<u64>,

    /// Copies of each kept frame in the output sequence.
    pub expansion_counts: Vec<u64>,

    pub tick_unit_ms: u64,

    /// Entries in the expanded sequence.
    pub sequence_length: usize,

    pub total_duration_ms: u64,

    pub duration_secs: f64,

    /// Source indices dropped because they failed to decode.
    #[serde(default)]
    pub skipped_frames: Vec<usize>,
}

impl AnimationSummary {
    /// Playback rate at one sequence entry per tick.
    pub fn frames_per_second(&self) -> f64 {
        1000.0 / self.tick_unit_ms as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnimationSequence<char> {
        AnimationSequence {
            frames: vec!['a', 'b', 'b', 'c'],
            tick_unit_ms: 100,
            total_duration_ms: 400,
        }
    }

    #[test]
    fn test_timing_accessors() {
        let sequence = sample();
        assert_eq!(sequence.len(), 4);
        assert!((sequence.duration_secs() - 0.4).abs() < 1e-12);
        assert_eq!(sequence.frame_interval(), Duration::from_millis(100));
        assert!((sequence.frames_per_second() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_frame_at_follows_ticks() {
        let sequence = sample();
        assert_eq!(sequence.frame_at(Duration::ZERO), Some(&'a'));
        assert_eq!(sequence.frame_at(Duration::from_millis(99)), Some(&'a'));
        assert_eq!(sequence.frame_at(Duration::from_millis(100)), Some(&'b'));
        assert_eq!(sequence.frame_at(Duration::from_millis(250)), Some(&'b'));
        assert_eq!(sequence.frame_at(Duration::from_millis(399)), Some(&'c'));
    }

    #[test]
    fn test_frame_at_loops() {
        let sequence = sample();
        assert_eq!(sequence.frame_at(Duration::from_millis(400)), Some(&'a'));
        assert_eq!(sequence.frame_at(Duration::from_millis(1_320)), Some(&'b'));
    }

    #[test]
    fn test_empty_sequence() {
        let sequence: AnimationSequence<char> = AnimationSequence::empty();
        assert!(sequence.is_empty());
        assert_eq!(sequence.duration_secs(), 0.0);
        assert_eq!(sequence.frame_at(Duration::from_secs(1)), None);
    }
}
