//! Codec identifiers and media types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::CodecStringError;

/// Media type of an elementary stream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Video,
    Audio,
    Data,
    Subtitle,
    Attachment,
    #[default]
    Unknown,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Data => "data",
            Self::Subtitle => "subtitle",
            Self::Attachment => "attachment",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Codec identifier of an elementary stream.
///
/// Serialized as the demuxer's short codec name (`"h264"`, `"pcm_s16le"`, ...).
/// Deserialization is lenient: names outside this set become [`CodecId::Unknown`].
/// Parsing with [`FromStr`] is strict.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum CodecId {
    H264,
    Hevc,
    Av1,
    Vp8,
    Vp9,
    /// MPEG-4 Part 2 video.
    Mpeg4,
    Flac,
    Mp3,
    Mp2,
    Aac,
    /// MPEG-4 Audio Lossless Coding.
    Mp4Als,
    Ac3,
    Eac3,
    Dts,
    Opus,
    Vorbis,
    PcmMulaw,
    PcmAlaw,
    PcmU8,
    PcmS16Le,
    PcmS16Be,
    PcmS24Le,
    PcmS24Be,
    PcmS32Le,
    PcmS32Be,
    PcmF32Le,
    PcmF32Be,
    #[default]
    Unknown,
}

impl CodecId {
    /// Every identifier, in declaration order.
    pub const ALL: [CodecId; 28] = [
        Self::H264,
        Self::Hevc,
        Self::Av1,
        Self::Vp8,
        Self::Vp9,
        Self::Mpeg4,
        Self::Flac,
        Self::Mp3,
        Self::Mp2,
        Self::Aac,
        Self::Mp4Als,
        Self::Ac3,
        Self::Eac3,
        Self::Dts,
        Self::Opus,
        Self::Vorbis,
        Self::PcmMulaw,
        Self::PcmAlaw,
        Self::PcmU8,
        Self::PcmS16Le,
        Self::PcmS16Be,
        Self::PcmS24Le,
        Self::PcmS24Be,
        Self::PcmS32Le,
        Self::PcmS32Be,
        Self::PcmF32Le,
        Self::PcmF32Be,
        Self::Unknown,
    ];

    /// Short codec name as reported by the demuxer.
    pub fn ffmpeg_name(self) -> &'static str {
        match self {
            Self::H264 => "h264",
            Self::Hevc => "hevc",
            Self::Av1 => "av1",
            Self::Vp8 => "vp8",
            Self::Vp9 => "vp9",
            Self::Mpeg4 => "mpeg4",
            Self::Flac => "flac",
            Self::Mp3 => "mp3",
            Self::Mp2 => "mp2",
            Self::Aac => "aac",
            Self::Mp4Als => "mp4als",
            Self::Ac3 => "ac3",
            Self::Eac3 => "eac3",
            Self::Dts => "dts",
            Self::Opus => "opus",
            Self::Vorbis => "vorbis",
            Self::PcmMulaw => "pcm_mulaw",
            Self::PcmAlaw => "pcm_alaw",
            Self::PcmU8 => "pcm_u8",
            Self::PcmS16Le => "pcm_s16le",
            Self::PcmS16Be => "pcm_s16be",
            Self::PcmS24Le => "pcm_s24le",
            Self::PcmS24Be => "pcm_s24be",
            Self::PcmS32Le => "pcm_s32le",
            Self::PcmS32Be => "pcm_s32be",
            Self::PcmF32Le => "pcm_f32le",
            Self::PcmF32Be => "pcm_f32be",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable name (for display/logging).
    pub fn display_name(self) -> &'static str {
        match self {
            Self::H264 => "H.264/AVC",
            Self::Hevc => "H.265/HEVC",
            Self::Av1 => "AV1",
            Self::Vp8 => "VP8",
            Self::Vp9 => "VP9",
            Self::Mpeg4 => "MPEG-4 Part 2",
            Self::Flac => "FLAC",
            Self::Mp3 => "MP3",
            Self::Mp2 => "MP2",
            Self::Aac => "AAC",
            Self::Mp4Als => "MPEG-4 ALS",
            Self::Ac3 => "AC-3",
            Self::Eac3 => "E-AC-3",
            Self::Dts => "DTS",
            Self::Opus => "Opus",
            Self::Vorbis => "Vorbis",
            Self::PcmMulaw => "PCM mu-law",
            Self::PcmAlaw => "PCM A-law",
            Self::PcmU8 => "PCM unsigned 8-bit",
            Self::PcmS16Le | Self::PcmS16Be => "PCM signed 16-bit",
            Self::PcmS24Le | Self::PcmS24Be => "PCM signed 24-bit",
            Self::PcmS32Le | Self::PcmS32Be => "PCM signed 32-bit",
            Self::PcmF32Le | Self::PcmF32Be => "PCM float 32-bit",
            Self::Unknown => "unknown",
        }
    }

    /// The media type this codec naturally belongs to.
    pub fn media_type(self) -> MediaType {
        match self {
            Self::H264 | Self::Hevc | Self::Av1 | Self::Vp8 | Self::Vp9 | Self::Mpeg4 => {
                MediaType::Video
            }
            Self::Unknown => MediaType::Unknown,
            _ => MediaType::Audio,
        }
    }

    /// Map a Matroska `CodecID` string to a codec identifier.
    ///
    /// Unrecognized IDs map to [`CodecId::Unknown`].
    pub fn from_matroska_codec_id(codec_id: &str) -> Self {
        match codec_id {
            "V_MPEG4/ISO/AVC" => Self::H264,
            "V_MPEGH/ISO/HEVC" => Self::Hevc,
            "V_AV1" => Self::Av1,
            "V_VP8" => Self::Vp8,
            "V_VP9" => Self::Vp9,
            "V_MPEG4/ISO/SP" | "V_MPEG4/ISO/ASP" | "V_MPEG4/ISO/AP" => Self::Mpeg4,
            "A_OPUS" => Self::Opus,
            "A_VORBIS" => Self::Vorbis,
            "A_FLAC" => Self::Flac,
            "A_MPEG/L3" => Self::Mp3,
            "A_MPEG/L2" => Self::Mp2,
            "A_AC3" => Self::Ac3,
            "A_EAC3" => Self::Eac3,
            "A_DTS" => Self::Dts,
            "A_PCM/INT/LIT" => Self::PcmS16Le,
            "A_PCM/INT/BIG" => Self::PcmS16Be,
            "A_PCM/FLOAT/IEEE" => Self::PcmF32Le,
            aac if aac.starts_with("A_AAC") => Self::Aac,
            other => {
                debug!("Unknown Matroska codec ID: {other}");
                Self::Unknown
            }
        }
    }
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ffmpeg_name())
    }
}

impl FromStr for CodecId {
    type Err = CodecStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .filter(|id| *id != Self::Unknown)
            .find(|id| id.ffmpeg_name() == name)
            .ok_or_else(|| CodecStringError::UnknownCodec(s.to_string()))
    }
}

impl From<CodecId> for &'static str {
    fn from(id: CodecId) -> Self {
        id.ffmpeg_name()
    }
}

impl<'de> Deserialize<'de> for CodecId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or_else(|e| {
            debug!("{e}, treating as unknown");
            Self::Unknown
        }))
    }
}
