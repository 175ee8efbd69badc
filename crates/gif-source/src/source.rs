//! GIF-backed frame source.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use gifmake_animation_core::{DelayMetadata, FrameSource};
use gifmake_common::error::{GifmakeError, GifmakeResult};

use crate::canvas::Canvas;

/// Delays at or below this many centiseconds get the standard 0.1s clamp,
/// matching how browsers and platform decoders report them.
const STANDARD_CLAMP_CENTIS: u16 = 1;

/// A fully composited RGBA frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

impl FrameImage {
    /// RGBA value at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        let px = self.rgba.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[derive(Debug)]
struct DecodedFrame {
    /// `None` if the frame was unusable.
    image: Option<Arc<FrameImage>>,
    /// Declared delay in hundredths of a second.
    delay_centis: u16,
}

/// Frames of a decoded GIF, ready for assembly.
#[derive(Debug)]
pub struct GifFrameSource {
    width: u16,
    height: u16,
    frames: Vec<DecodedFrame>,
}

impl GifFrameSource {
    /// Decode a GIF held in memory.
    pub fn from_bytes(data: &[u8]) -> GifmakeResult<Self> {
        Self::from_reader(data)
    }

    /// Decode a GIF file.
    pub fn from_path(path: &Path) -> GifmakeResult<Self> {
        if !path.exists() {
            return Err(GifmakeError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let data = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "Read GIF file");
        Self::from_bytes(&data)
    }

    /// Decode a GIF from any reader.
    ///
    /// Fails only if the header cannot be read. Bad frames are kept as
    /// undecodable entries; a decoding error part-way through ends the frame
    /// list there.
    pub fn from_reader<R: Read>(reader: R) -> GifmakeResult<Self> {
        let mut options = gif::DecodeOptions::new();
        options.set_color_output(gif::ColorOutput::RGBA);

        let mut decoder = options
            .read_info(reader)
            .map_err(|e| GifmakeError::source_unavailable(e.to_string()))?;

        let (width, height) = (decoder.width(), decoder.height());
        if width == 0 || height == 0 {
            return Err(GifmakeError::source_unavailable(format!(
                "logical screen is {width}x{height}"
            )));
        }

        let mut canvas = Canvas::new(width, height);
        let mut frames = Vec::new();

        loop {
            let index = frames.len();
            let frame = match decoder.read_next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(index, error = %e, "GIF decoding stopped early");
                    break;
                }
            };

            let image = match canvas.compose(index, frame) {
                Ok(rgba) => Some(Arc::new(FrameImage {
                    width: width as u32,
                    height: height as u32,
                    rgba,
                })),
                Err(e) => {
                    tracing::warn!(error = %e, "Frame unusable");
                    None
                }
            };

            frames.push(DecodedFrame {
                image,
                delay_centis: frame.delay,
            });
        }

        tracing::debug!(width, height, frames = frames.len(), "Decoded GIF");

        Ok(Self {
            width,
            height,
            frames,
        })
    }

    /// Logical screen width.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Logical screen height.
    pub fn height(&self) -> u16 {
        self.height
    }
}

/// Timing metadata for a raw GIF delay.
///
/// Delays are handed on as float seconds and later truncated to whole
/// milliseconds, so some centisecond values come out 1 ms short (201 cs
/// becomes 2009 ms). A short delay like that collapses the tick unit of the
/// whole animation to 1 ms.
fn delay_metadata(delay_centis: u16) -> DelayMetadata {
    let unclamped = delay_centis as f64 / 100.0;
    let standard = if delay_centis <= STANDARD_CLAMP_CENTIS {
        0.1
    } else {
        unclamped
    };
    DelayMetadata::new(Some(unclamped), Some(standard))
}

impl FrameSource for GifFrameSource {
    type Image = Arc<FrameImage>;

    fn count(&self) -> usize {
        self.frames.len()
    }

    fn image_at(&self, index: usize) -> Option<Arc<FrameImage>> {
        self.frames.get(index)?.image.clone()
    }

    fn properties_at(&self, index: usize) -> Option<DelayMetadata> {
        self.frames
            .get(index)
            .map(|frame| delay_metadata(frame.delay_centis))
    }
}
