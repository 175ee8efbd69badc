//! The animation assembler pipeline.
//!
//! Extraction → Normalization → Quantization & Expansion, run once per call
//! with no state kept between calls.

use gifmake_common::config::AssemblyDefaults;

use crate::extraction::extract_frames;
use crate::frame_source::FrameSource;
use crate::normalize::normalize;
use crate::quantize::{expand, expansion_counts};
use crate::sequence::{AnimationSequence, AnimationSummary};

/// Shortest delay a frame may have. GIF players treat smaller values as
/// "as fast as possible", which is not allowed here.
pub const MIN_FRAME_DELAY_SECS: f64 = 0.1;

/// Delay assumed for a frame that carries no timing metadata.
pub const DEFAULT_FRAME_DELAY_SECS: f64 = 0.1;

/// Longest delay a frame may have: 65535 centiseconds, the largest value a
/// GIF delay field can hold. Longer declared delays are cut down to it.
pub const MAX_FRAME_DELAY_SECS: f64 = 655.35;

/// Delay handling for one assembly run.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyOptions {
    /// Declared delays below this are raised to it (seconds).
    pub min_delay_secs: f64,

    /// Delay used when no metadata is present (seconds).
    pub default_delay_secs: f64,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            min_delay_secs: MIN_FRAME_DELAY_SECS,
            default_delay_secs: DEFAULT_FRAME_DELAY_SECS,
        }
    }
}

impl From<&AssemblyDefaults> for AssemblyOptions {
    fn from(defaults: &AssemblyDefaults) -> Self {
        Self {
            min_delay_secs: defaults.min_delay_secs,
            default_delay_secs: defaults.default_delay_secs,
        }
    }
}

/// An assembled sequence together with its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly<I> {
    pub sequence: AnimationSequence<I>,
    pub summary: AnimationSummary,
}

/// Assemble a fixed-rate animation from `source` using the default 0.1s floor.
pub fn assemble<S: FrameSource>(source: &S) -> AnimationSequence<S::Image> {
    assemble_with(source, &AssemblyOptions::default()).sequence
}

/// Assemble a fixed-rate animation from `source`.
///
/// Frames that fail to decode are left out and listed in the summary.
/// An empty source gives an empty sequence with zero duration.
pub fn assemble_with<S: FrameSource>(
    source: &S,
    options: &AssemblyOptions,
) -> Assembly<S::Image> {
    let source_frame_count = source.count();
    let extraction = extract_frames(source, options);
    let normalized = normalize(extraction.frames);

    let frame_indices: Vec<usize> = normalized.frames.iter().map(|f| f.index).collect();
    let delays_ms = normalized.delays_ms();

    let sequence = expand(normalized);
    let expansion_counts = expansion_counts(&delays_ms, sequence.tick_unit_ms);

    let summary = AnimationSummary {
        source_frame_count,
        frame_indices,
        delays_ms,
        expansion_counts,
        tick_unit_ms: sequence.tick_unit_ms,
        sequence_length: sequence.len(),
        total_duration_ms: sequence.total_duration_ms,
        duration_secs: sequence.duration_secs(),
        skipped_frames: extraction.skipped,
    };

    tracing::info!(
        source_frames = source_frame_count,
        output_frames = summary.sequence_length,
        tick_unit_ms = summary.tick_unit_ms,
        duration_ms = summary.total_duration_ms,
        skipped = summary.skipped_frames.len(),
        "Assembled animation"
    );

    Assembly { sequence, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_source::{DelayMetadata, VecFrameSource};

    #[test]
    fn test_options_from_config_defaults() {
        let options = AssemblyOptions::from(&AssemblyDefaults::default());
        assert_eq!(options, AssemblyOptions::default());
    }

    #[test]
    fn test_summary_matches_sequence() {
        let source = VecFrameSource::with_delays([('a', 0.1), ('b', 0.2), ('c', 0.1)]);
        let assembly = assemble_with(&source, &AssemblyOptions::default());

        let summary = &assembly.summary;
        assert_eq!(summary.source_frame_count, 3);
        assert_eq!(summary.frame_indices, vec![0, 1, 2]);
        assert_eq!(summary.delays_ms, vec![100, 200, 100]);
        assert_eq!(summary.expansion_counts, vec![1, 2, 1]);
        assert_eq!(summary.sequence_length, assembly.sequence.len());
        assert!(summary.skipped_frames.is_empty());
    }

    #[test]
    fn test_skipped_frame_excluded_from_duration() {
        let mut source = VecFrameSource::new();
        source.push('a', Some(DelayMetadata::unclamped(0.2)));
        source.push_undecodable(Some(DelayMetadata::unclamped(0.7)));
        source.push('c', Some(DelayMetadata::unclamped(0.3)));

        let assembly = assemble_with(&source, &AssemblyOptions::default());
        assert_eq!(assembly.summary.skipped_frames, vec![1]);
        assert_eq!(assembly.sequence.total_duration_ms, 500);
        assert_eq!(assembly.sequence.tick_unit_ms, 100);
        assert_eq!(assembly.sequence.frames, vec!['a', 'a', 'c', 'c', 'c']);
    }

    #[test]
    fn test_lower_floor_allows_fast_frames() {
        let source = VecFrameSource::with_delays([('a', 0.02), ('b', 0.05)]);
        let options = AssemblyOptions {
            min_delay_secs: 0.02,
            default_delay_secs: 0.1,
        };
        let sequence = assemble_with(&source, &options).sequence;
        assert_eq!(sequence.tick_unit_ms, 10);
        assert_eq!(sequence.total_duration_ms, 70);
        assert_eq!(sequence.len(), 7);
    }

    #[test]
    fn test_huge_delays_capped_without_overflow() {
        let source = VecFrameSource::with_delays([('a', 1.5e16), ('b', 1.5e16)]);
        let assembly = assemble_with(&source, &AssemblyOptions::default());

        assert_eq!(assembly.summary.delays_ms, vec![655_350, 655_350]);
        assert_eq!(assembly.sequence.tick_unit_ms, 655_350);
        assert_eq!(assembly.sequence.total_duration_ms, 1_310_700);
        assert_eq!(assembly.sequence.frames, vec!['a', 'b']);
    }
}
