//! Per-stream parameters handed over by the container reader.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::codec::{CodecId, MediaType};
use crate::color::{
    ChromaLocation, ColorPrimaries, ColorRange, MatrixCoefficients, PixelFormat,
    TransferCharacteristics,
};
use crate::error::{CodecStringError, CodecStringResult};
use crate::types::{Rational, Resolution};

/// Video format metadata tagged on a stream.
///
/// Only VP9 reads it: the other codecs carry everything in their configuration record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoFormat {
    /// Coded frame size, if known.
    pub resolution: Option<Resolution>,
    /// Unrecognized names deserialize to `None`.
    #[serde(deserialize_with = "lenient_pixel_format")]
    pub pixel_format: Option<PixelFormat>,
    pub chroma_location: ChromaLocation,
    pub color_range: ColorRange,
    pub color_primaries: ColorPrimaries,
    pub color_transfer: TransferCharacteristics,
    pub color_matrix: MatrixCoefficients,
    /// Codec profile already known on the stream.
    pub profile: Option<u8>,
    /// Codec level already known on the stream.
    pub level: Option<u8>,
}

impl VideoFormat {
    pub fn new(pixel_format: PixelFormat, resolution: Resolution) -> Self {
        Self {
            pixel_format: Some(pixel_format),
            resolution: Some(resolution),
            ..Default::default()
        }
    }

    /// Luma picture size in samples, 0 when the resolution is unknown.
    pub fn picture_size(&self) -> u64 {
        self.resolution.map(Resolution::pixel_count).unwrap_or(0)
    }
}

fn lenient_pixel_format<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<PixelFormat>, D::Error> {
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.and_then(|name| match name.parse() {
        Ok(fmt) => Some(fmt),
        Err(e) => {
            warn!("{e}, ignoring");
            None
        }
    }))
}

/// Everything the codec string builders need to know about one elementary stream.
///
/// A descriptor without `media_type` takes the media type of its codec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StreamDescriptor")]
pub struct StreamParameters {
    pub index: u32,
    pub media_type: MediaType,
    pub codec_id: CodecId,
    /// Codec configuration record ("extradata"), hex-encoded in serialized form.
    #[serde(serialize_with = "hex_bytes::serialize")]
    pub extradata: Vec<u8>,
    #[serde(flatten)]
    pub format: VideoFormat,
    pub frame_rate: Option<Rational>,
}

/// Serialized form of [`StreamParameters`], with the optional fields still optional.
#[derive(Deserialize)]
struct StreamDescriptor {
    #[serde(default)]
    index: u32,
    media_type: Option<MediaType>,
    codec_id: CodecId,
    #[serde(default, deserialize_with = "hex_bytes::deserialize")]
    extradata: Vec<u8>,
    #[serde(flatten)]
    format: VideoFormat,
    #[serde(default)]
    frame_rate: Option<Rational>,
}

impl From<StreamDescriptor> for StreamParameters {
    fn from(desc: StreamDescriptor) -> Self {
        Self {
            index: desc.index,
            media_type: desc.media_type.unwrap_or_else(|| desc.codec_id.media_type()),
            codec_id: desc.codec_id,
            extradata: desc.extradata,
            format: desc.format,
            frame_rate: desc.frame_rate,
        }
    }
}

impl StreamParameters {
    /// A stream whose media type follows from its codec.
    pub fn new(codec_id: CodecId, extradata: &[u8]) -> Self {
        Self {
            media_type: codec_id.media_type(),
            codec_id,
            extradata: extradata.to_vec(),
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: VideoFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: Rational) -> Self {
        self.frame_rate = Some(frame_rate);
        self
    }

    /// Parse a list of stream descriptors from a JSON array.
    pub fn list_from_json(json: &str) -> CodecStringResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Decode a hex string, tolerating whitespace and an optional `0x` prefix.
pub fn parse_hex(s: &str) -> CodecStringResult<Vec<u8>> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    hex::decode(digits).map_err(|e| CodecStringError::InvalidHex(format!("{s:?}: {e}")))
}

mod hex_bytes {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hex(&s).map_err(de::Error::custom)
    }
}
