//! The frame source boundary.
//!
//! A frame source decodes a multi-frame container and hands out per-index
//! image handles plus timing metadata. The assembler only ever reads from it.

/// Per-frame timing metadata, in seconds.
///
/// Either field may be missing. A present-but-zero unclamped delay means
/// "not set" and defers to the standard delay.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DelayMetadata {
    /// Delay exactly as declared by the container.
    pub unclamped_delay_secs: Option<f64>,

    /// Delay after the decoder's own clamping rules.
    pub standard_delay_secs: Option<f64>,
}

impl DelayMetadata {
    pub fn new(unclamped_delay_secs: Option<f64>, standard_delay_secs: Option<f64>) -> Self {
        Self {
            unclamped_delay_secs,
            standard_delay_secs,
        }
    }

    /// Metadata carrying only an unclamped delay.
    pub fn unclamped(secs: f64) -> Self {
        Self::new(Some(secs), None)
    }

    /// Metadata carrying only a standard delay.
    pub fn standard(secs: f64) -> Self {
        Self::new(None, Some(secs))
    }
}

/// A decoded multi-frame image that can be read frame by frame.
///
/// `Image` is the handle placed into the output sequence. Cloning it must
/// copy a reference (e.g. `Arc<T>`), not pixel data.
pub trait FrameSource {
    type Image: Clone;

    /// Number of frames the container declares.
    fn count(&self) -> usize;

    /// Decoded image for a frame, or `None` if that frame failed to decode.
    fn image_at(&self, index: usize) -> Option<Self::Image>;

    /// Timing metadata for a frame, or `None` if the frame has none.
    fn properties_at(&self, index: usize) -> Option<DelayMetadata>;
}

impl<S: FrameSource + ?Sized> FrameSource for &S {
    type Image = S::Image;

    fn count(&self) -> usize {
        (**self).count()
    }

    fn image_at(&self, index: usize) -> Option<Self::Image> {
        (**self).image_at(index)
    }

    fn properties_at(&self, index: usize) -> Option<DelayMetadata> {
        (**self).properties_at(index)
    }
}

/// One entry of a [`VecFrameSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFrame<I> {
    /// `None` marks a frame that could not be decoded.
    pub image: Option<I>,
    pub metadata: Option<DelayMetadata>,
}

impl<I> SourceFrame<I> {
    pub fn new(image: I, metadata: Option<DelayMetadata>) -> Self {
        Self {
            image: Some(image),
            metadata,
        }
    }

    pub fn undecodable(metadata: Option<DelayMetadata>) -> Self {
        Self {
            image: None,
            metadata,
        }
    }
}

/// In-memory frame source over frames that are already decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct VecFrameSource<I> {
    frames: Vec<SourceFrame<I>>,
}

impl<I> Default for VecFrameSource<I> {
    fn default() -> Self {
        Self { frames: Vec::new() }
    }
}

impl<I: Clone> VecFrameSource<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_frames(frames: Vec<SourceFrame<I>>) -> Self {
        Self { frames }
    }

    /// Build a source where every frame decodes and declares an unclamped delay.
    pub fn with_delays(frames: impl IntoIterator<Item = (I, f64)>) -> Self {
        Self {
            frames: frames
                .into_iter()
                .map(|(image, secs)| SourceFrame::new(image, Some(DelayMetadata::unclamped(secs))))
                .collect(),
        }
    }

    pub fn push(&mut self, image: I, metadata: Option<DelayMetadata>) {
        self.frames.push(SourceFrame::new(image, metadata));
    }

    pub fn push_undecodable(&mut self, metadata: Option<DelayMetadata>) {
        self.frames.push(SourceFrame::undecodable(metadata));
    }

    pub fn frames(&self) -> &[SourceFrame<I>] {
        &self.frames
    }
}

impl<I: Clone> FrameSource for VecFrameSource<I> {
    type Image = I;

    fn count(&self) -> usize {
        self.frames.len()
    }

    fn image_at(&self, index: usize) -> Option<I> {
        self.frames.get(index).and_then(|f| f.image.clone())
    }

    fn properties_at(&self, index: usize) -> Option<DelayMetadata> {
        self.frames.get(index).and_then(|f| f.metadata)
    }
}
