//! Error types for codec string derivation (thiserror-based).

use thiserror::Error;

use crate::codec::CodecId;
use crate::color::PixelFormat;

/// Conditions met while deriving a codec string.
///
/// The string builders never surface these to their callers: they log them and
/// emit a shorter string instead. They are returned by the lower-level helpers
/// (feature derivation, name parsing, config loading).
#[derive(Error, Debug)]
pub enum CodecStringError {
    #[error("Insufficient {codec} configuration data: need {needed} bytes, got {got}")]
    InsufficientData {
        codec: CodecId,
        needed: usize,
        got: usize,
    },

    /// Carries the format name, or `"none"` when the stream has no format.
    #[error("Unsupported pixel format: {0}")]
    UnsupportedPixelFormat(String),

    #[error(
        "Unsupported chroma subsampling for {pixel_format}: log2 {log2_chroma_w}x{log2_chroma_h}"
    )]
    UnsupportedChromaSubsampling {
        pixel_format: PixelFormat,
        log2_chroma_w: u8,
        log2_chroma_h: u8,
    },

    #[error("Unknown codec: {0}")]
    UnknownCodec(String),

    #[error("Invalid hex data: {0}")]
    InvalidHex(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type for codec string operations.
pub type CodecStringResult<T> = Result<T, CodecStringError>;
