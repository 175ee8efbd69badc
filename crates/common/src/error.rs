//! Error types shared across GifMake crates.

use std::path::PathBuf;

/// Top-level error type for GifMake operations.
#[derive(Debug, thiserror::Error)]
pub enum GifmakeError {
    #[error("Frame source unavailable: {message}")]
    SourceUnavailable { message: String },

    #[error("Frame {index} could not be decoded: {message}")]
    FrameDecodeSkipped { index: usize, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Asset '{name}' not found in {dir}")]
    AssetNotFound { name: String, dir: PathBuf },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using GifmakeError.
pub type GifmakeResult<T> = Result<T, GifmakeError>;

impl GifmakeError {
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            message: msg.into(),
        }
    }

    pub fn frame_skipped(index: usize, msg: impl Into<String>) -> Self {
        Self::FrameDecodeSkipped {
            index,
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GifmakeError::source_unavailable("bad header");
        assert_eq!(err.to_string(), "Frame source unavailable: bad header");

        let err = GifmakeError::frame_skipped(2, "rect outside canvas");
        assert_eq!(
            err.to_string(),
            "Frame 2 could not be decoded: rect outside canvas"
        );
    }
}
