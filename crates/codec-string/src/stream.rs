//! Per-stream routing by media type.

use serde::Serialize;
use tracing::debug;
use wd_common::{CodecId, CodecStringConfig, MediaType, StreamParameters};

use crate::audio::set_audio_codec_string;
use crate::output::{CodecString, UNDEFINED};
use crate::video::set_video_codec_string;

/// One row of a stream listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StreamCodecString {
    pub index: u32,
    pub media_type: MediaType,
    pub codec_id: CodecId,
    pub codec_string: CodecString,
}

/// Codec string of one stream.
///
/// Video goes to the video builders, audio to the audio builders. Every other
/// media type yields `"undf"`.
pub fn stream_codec_string(stream: &StreamParameters, config: &CodecStringConfig) -> CodecString {
    let mut out = CodecString::with_capacity(config.capacity);
    match stream.media_type {
        MediaType::Video => {
            let frame_rate = stream.frame_rate.filter(|_| config.vp9_frame_rate_level);
            set_video_codec_string(
                &mut out,
                stream.codec_id,
                &stream.extradata,
                &stream.format,
                frame_rate,
            );
        }
        MediaType::Audio => set_audio_codec_string(&mut out, stream.codec_id, &stream.extradata),
        other => {
            debug!("Stream {}: no codec string for {other} streams", stream.index);
            out.set(UNDEFINED);
        }
    }
    out
}

/// Codec strings for a list of streams, in input order.
pub fn stream_codec_strings(
    streams: &[StreamParameters],
    config: &CodecStringConfig,
) -> Vec<StreamCodecString> {
    streams
        .iter()
        .map(|stream| StreamCodecString {
            index: stream.index,
            media_type: stream.media_type,
            codec_id: stream.codec_id,
            codec_string: stream_codec_string(stream, config),
        })
        .collect()
}
