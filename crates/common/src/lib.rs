//! `wd-common` — Shared types, errors, and configuration for codec string derivation.
//!
//! This crate holds the vocabulary the string builders and the container reader
//! agree on:
//!
//! - **Codecs**: `CodecId`, `MediaType` (demuxer short names, Matroska IDs)
//! - **Color**: `PixelFormat` descriptors, `ChromaLocation`, `ColorRange`, color code points
//! - **Types**: `Rational`, `Resolution`
//! - **Stream**: `StreamParameters`, `VideoFormat` (the per-stream handover record)
//! - **Errors**: `CodecStringError` (thiserror-based)
//! - **Config**: `CodecStringConfig`

pub mod codec;
pub mod color;
pub mod config;
pub mod error;
pub mod stream;
pub mod types;

// Re-export commonly used items at crate root
pub use codec::{CodecId, MediaType};
pub use color::{
    ChromaLocation, ColorPrimaries, ColorRange, MatrixCoefficients, PixelFormat,
    PixelFormatDescriptor, TransferCharacteristics,
};
pub use config::{CodecStringConfig, DEFAULT_CAPACITY, MIN_CAPACITY};
pub use error::{CodecStringError, CodecStringResult};
pub use stream::{parse_hex, StreamParameters, VideoFormat};
pub use types::{Rational, Resolution};
