//! GifMake Animation Core — The Animation Assembler
//!
//! Turns a multi-frame image source into a fixed-rate playback sequence:
//! - **Extraction:** Pull each frame's image handle and declared delay
//! - **Normalization:** Convert delays to whole milliseconds with a minimum floor
//! - **Quantization & Expansion:** Find the common tick unit (GCD of all delays)
//!   and repeat each frame `delay / tick` times
//!
//! This crate is pure computation: no I/O, no decoding.
//! Frames come from a [`FrameSource`]; the output is an [`AnimationSequence`].
//!
//! ```text
//! FrameSource ──► extract_frames ──► normalize ──► expand ──► AnimationSequence
//!                 (handle, secs)     (handle, ms)   gcd tick    frames × count
//! ```

pub mod assembler;
pub mod extraction;
pub mod frame_source;
pub mod normalize;
pub mod quantize;
pub mod sequence;

pub use assembler::{assemble, assemble_with, Assembly, AssemblyOptions};
pub use extraction::{delay_for_index, extract_frames};
pub use frame_source::{DelayMetadata, FrameSource, SourceFrame, VecFrameSource};
pub use quantize::{gcd_for_array, gcd_for_pair};
pub use sequence::{AnimationSequence, AnimationSummary};
