//! Logical-screen compositing.
//!
//! GIF frames are sub-rectangles drawn over whatever the previous frame left
//! behind. The canvas replays that so each decoded frame is a full image.

use gif::DisposalMethod;
use gifmake_common::error::{GifmakeError, GifmakeResult};

/// What to do to the canvas before the next frame is drawn.
enum PendingDisposal {
    /// Clear a rectangle to transparent.
    Clear(Rect),
    /// Put back the pixels as they were before the last frame.
    Restore(Vec<u8>),
}

#[derive(Debug, Clone, Copy)]
struct Rect {
    left: usize,
    top: usize,
    width: usize,
    height: usize,
}

pub(crate) struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    pending: Option<PendingDisposal>,
}

impl Canvas {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
            pending: None,
        }
    }

    /// Draw an RGBA frame and return the full canvas as it now looks.
    ///
    /// A frame that does not fit the canvas leaves it untouched.
    pub(crate) fn compose(
        &mut self,
        index: usize,
        frame: &gif::Frame<'_>,
    ) -> GifmakeResult<Vec<u8>> {
        self.apply_pending();

        let rect = Rect {
            left: frame.left as usize,
            top: frame.top as usize,
            width: frame.width as usize,
            height: frame.height as usize,
        };

        if rect.left + rect.width > self.width || rect.top + rect.height > self.height {
            return Err(GifmakeError::frame_skipped(
                index,
                format!(
                    "{}x{} at ({}, {}) exceeds {}x{} canvas",
                    rect.width, rect.height, rect.left, rect.top, self.width, self.height
                ),
            ));
        }

        let expected = rect.width * rect.height * 4;
        if frame.buffer.len() != expected {
            return Err(GifmakeError::frame_skipped(
                index,
                format!(
                    "buffer holds {} bytes, expected {expected}",
                    frame.buffer.len()
                ),
            ));
        }

        self.pending = match frame.dispose {
            DisposalMethod::Background => Some(PendingDisposal::Clear(rect)),
            DisposalMethod::Previous => Some(PendingDisposal::Restore(self.pixels.clone())),
            _ => None,
        };

        self.blit(rect, &frame.buffer);
        Ok(self.pixels.clone())
    }

    fn apply_pending(&mut self) {
        match self.pending.take() {
            Some(PendingDisposal::Clear(rect)) => {
                for row in rect.top..rect.top + rect.height {
                    let start = (row * self.width + rect.left) * 4;
                    self.pixels[start..start + rect.width * 4].fill(0);
                }
            }
            Some(PendingDisposal::Restore(pixels)) => self.pixels = pixels,
            None => {}
        }
    }

    /// Copy opaque pixels; fully transparent ones let the canvas show through.
    fn blit(&mut self, rect: Rect, rgba: &[u8]) {
        if rect.width == 0 {
            return;
        }
        for (row, src_row) in rgba.chunks_exact(rect.width * 4).enumerate() {
            let dst_start = ((rect.top + row) * self.width + rect.left) * 4;
            let dst_row = &mut self.pixels[dst_start..dst_start + rect.width * 4];
            for (dst, src) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
                if src[3] != 0 {
                    dst.copy_from_slice(src);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];
    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    fn rgba_frame(
        left: u16,
        top: u16,
        width: u16,
        height: u16,
        color: [u8; 4],
        dispose: DisposalMethod,
    ) -> gif::Frame<'static> {
        gif::Frame {
            left,
            top,
            width,
            height,
            dispose,
            buffer: Cow::Owned(color.repeat(width as usize * height as usize)),
            ..gif::Frame::default()
        }
    }

    fn pixel(rgba: &[u8], canvas_width: usize, x: usize, y: usize) -> [u8; 4] {
        let i = (y * canvas_width + x) * 4;
        [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
    }

    #[test]
    fn test_keep_draws_over_previous() {
        let mut canvas = Canvas::new(2, 2);
        canvas
            .compose(0, &rgba_frame(0, 0, 2, 2, RED, DisposalMethod::Keep))
            .unwrap();
        let out = canvas
            .compose(1, &rgba_frame(1, 1, 1, 1, BLUE, DisposalMethod::Keep))
            .unwrap();

        assert_eq!(pixel(&out, 2, 0, 0), RED);
        assert_eq!(pixel(&out, 2, 1, 1), BLUE);
    }

    #[test]
    fn test_transparent_pixels_show_through() {
        let mut canvas = Canvas::new(2, 1);
        canvas
            .compose(0, &rgba_frame(0, 0, 2, 1, RED, DisposalMethod::Keep))
            .unwrap();
        let out = canvas
            .compose(1, &rgba_frame(0, 0, 2, 1, CLEAR, DisposalMethod::Keep))
            .unwrap();
        assert_eq!(pixel(&out, 2, 1, 0), RED);
    }

    #[test]
    fn test_background_disposal_clears_rect() {
        let mut canvas = Canvas::new(2, 2);
        canvas
            .compose(0, &rgba_frame(0, 0, 1, 1, RED, DisposalMethod::Background))
            .unwrap();
        let out = canvas
            .compose(1, &rgba_frame(1, 1, 1, 1, BLUE, DisposalMethod::Keep))
            .unwrap();
        assert_eq!(pixel(&out, 2, 0, 0), CLEAR);
        assert_eq!(pixel(&out, 2, 1, 1), BLUE);
    }

    #[test]
    fn test_previous_disposal_restores() {
        let mut canvas = Canvas::new(1, 1);
        canvas
            .compose(0, &rgba_frame(0, 0, 1, 1, RED, DisposalMethod::Keep))
            .unwrap();
        let during = canvas
            .compose(1, &rgba_frame(0, 0, 1, 1, BLUE, DisposalMethod::Previous))
            .unwrap();
        assert_eq!(pixel(&during, 1, 0, 0), BLUE);

        let after = canvas
            .compose(2, &rgba_frame(0, 0, 1, 1, CLEAR, DisposalMethod::Keep))
            .unwrap();
        assert_eq!(pixel(&after, 1, 0, 0), RED);
    }

    #[test]
    fn test_out_of_bounds_frame_is_skipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas
            .compose(0, &rgba_frame(0, 0, 4, 4, RED, DisposalMethod::Keep))
            .unwrap();

        let err = canvas
            .compose(1, &rgba_frame(3, 0, 2, 2, BLUE, DisposalMethod::Keep))
            .unwrap_err();
        assert!(matches!(err, GifmakeError::FrameDecodeSkipped { index: 1, .. }));

        let out = canvas
            .compose(2, &rgba_frame(0, 0, 1, 1, CLEAR, DisposalMethod::Keep))
            .unwrap();
        assert_eq!(pixel(&out, 4, 3, 0), RED);
    }

    #[test]
    fn test_short_buffer_is_skipped() {
        let mut canvas = Canvas::new(2, 2);
        let mut frame = rgba_frame(0, 0, 2, 2, RED, DisposalMethod::Keep);
        frame.buffer = Cow::Owned(vec![255; 8]);
        assert!(canvas.compose(0, &frame).is_err());
    }
}
