//! `wd-codec-string` — WebCodecs/MSE codec strings from codec configuration records.
//!
//! Turns the extradata of an elementary stream (avcC, hvcC, av1C, AudioSpecificConfig)
//! or, for VP9, its format metadata into the `codecs` parameter browsers expect:
//! `avc1.64001f`, `hev1.1.6.L93.90`, `av01.0.04M.08`, `vp09.00.40.08.01.02.02.02.00`,
//! `mp4a.40.2`.
//!
//! Builders never fail. Short or malformed records give a shorter string, unknown
//! codecs give `"undf"`, and output never exceeds the [`CodecString`] capacity.

pub mod audio;
pub mod bitreader;
pub mod output;
pub mod stream;
pub mod video;

pub use audio::{audio_codec_string, set_aac_codec_string, set_audio_codec_string};
pub use bitreader::BitReader;
pub use output::{CodecString, UNDEFINED};
pub use stream::{stream_codec_string, stream_codec_strings, StreamCodecString};
pub use video::{set_video_codec_string, video_codec_string};
