//! Quantization and expansion.
//!
//! The tick unit is the greatest common divisor of every frame delay. Each
//! frame is then repeated `delay / tick` times so that a player advancing one
//! frame per tick reproduces the declared timing.

use crate::normalize::Normalized;
use crate::sequence::AnimationSequence;

/// Greatest common divisor of two values (Euclid).
///
/// `gcd_for_pair(a, 0) == a`, and argument order does not matter.
pub fn gcd_for_pair(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = if a < b { (b, a) } else { (a, b) };
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Greatest common divisor of a list, folded left to right.
///
/// An empty list yields 1, as does a list of zeros, so the result is always
/// safe to divide by.
pub fn gcd_for_array(values: &[u64]) -> u64 {
    match values.iter().copied().reduce(gcd_for_pair) {
        None | Some(0) => 1,
        Some(gcd) => gcd,
    }
}

/// Number of copies each delay expands to for the given tick.
pub fn expansion_counts(delays_ms: &[u64], tick_unit_ms: u64) -> Vec<u64> {
    delays_ms.iter().map(|d| d / tick_unit_ms.max(1)).collect()
}

/// Expand normalized frames into a fixed-rate sequence.
pub fn expand<I: Clone>(normalized: Normalized<I>) -> AnimationSequence<I> {
    let tick_unit_ms = gcd_for_array(&normalized.delays_ms());
    let copies: u64 = normalized
        .frames
        .iter()
        .map(|f| f.delay_ms / tick_unit_ms)
        .fold(0, u64::saturating_add);

    let mut frames = Vec::with_capacity(copies as usize);
    for frame in normalized.frames {
        let count = (frame.delay_ms / tick_unit_ms) as usize;
        frames.extend(std::iter::repeat(frame.image).take(count));
    }

    tracing::debug!(
        tick_unit_ms,
        output_frames = frames.len(),
        "Expanded frames to tick grid"
    );

    AnimationSequence {
        frames,
        tick_unit_ms,
        total_duration_ms: normalized.total_duration_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::NormalizedFrame;

    fn normalized(delays: &[u64]) -> Normalized<char> {
        let frames: Vec<_> = delays
            .iter()
            .enumerate()
            .map(|(i, &delay_ms)| NormalizedFrame {
                index: i,
                image: (b'a' + i as u8) as char,
                delay_ms,
            })
            .collect();
        Normalized {
            total_duration_ms: delays.iter().sum(),
            frames,
        }
    }

    #[test]
    fn test_gcd_for_pair() {
        assert_eq!(gcd_for_pair(100, 300), 100);
        assert_eq!(gcd_for_pair(300, 100), 100);
        assert_eq!(gcd_for_pair(120, 200), 40);
        assert_eq!(gcd_for_pair(7, 13), 1);
        assert_eq!(gcd_for_pair(150, 0), 150);
        assert_eq!(gcd_for_pair(0, 150), 150);
    }

    #[test]
    fn test_gcd_for_array() {
        assert_eq!(gcd_for_array(&[]), 1);
        assert_eq!(gcd_for_array(&[170]), 170);
        assert_eq!(gcd_for_array(&[100, 200, 100]), 100);
        assert_eq!(gcd_for_array(&[120, 200, 150]), 10);
        assert_eq!(gcd_for_array(&[0, 0]), 1);
    }

    #[test]
    fn test_expansion_counts() {
        assert_eq!(expansion_counts(&[100, 300], 100), vec![1, 3]);
        assert_eq!(expansion_counts(&[], 1), Vec::<u64>::new());
    }

    #[test]
    fn test_expand_keeps_order() {
        let sequence = expand(normalized(&[100, 200, 100]));
        assert_eq!(sequence.tick_unit_ms, 100);
        assert_eq!(sequence.frames, vec!['a', 'b', 'b', 'c']);
        assert_eq!(sequence.total_duration_ms, 400);
    }

    #[test]
    fn test_expand_coprime_delays() {
        let sequence = expand(normalized(&[110, 130]));
        assert_eq!(sequence.tick_unit_ms, 10);
        assert_eq!(sequence.len(), 24);
        assert_eq!(sequence.frames.iter().filter(|c| **c == 'a').count(), 11);
    }

    #[test]
    fn test_expand_empty() {
        let sequence = expand(normalized(&[]));
        assert_eq!(sequence.tick_unit_ms, 1);
        assert!(sequence.is_empty());
        assert_eq!(sequence.total_duration_ms, 0);
    }
}
