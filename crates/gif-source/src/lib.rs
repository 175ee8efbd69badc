//! GifMake GIF Source
//!
//! The frame source collaborator for the animation assembler:
//! - **Decoding:** GIF bytes to full-canvas RGBA frames via the `gif` crate
//! - **Timing metadata:** per-frame unclamped and standard delays
//! - **Loading:** from in-memory data, from a file path, or by asset name
//!
//! Frame images are handed out as `Arc<FrameImage>`, so an expanded
//! sequence holds many references to the same pixels, not copies.

mod canvas;
pub mod loader;
pub mod source;

pub use loader::{
    animation_from_gif_data, animation_from_gif_name, animation_from_gif_path, AssetBundle,
    GifAssembly,
};
pub use source::{FrameImage, GifFrameSource};
