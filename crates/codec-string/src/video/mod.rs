//! Video codec strings.
//!
//! One sub-builder per codec family, each independently callable:
//!
//! | Codec | Tag    | Source                              |
//! |-------|--------|-------------------------------------|
//! | H.264 | `avc1` | AVCDecoderConfigurationRecord       |
//! | HEVC  | `hev1` | HEVCDecoderConfigurationRecord      |
//! | AV1   | `av01` | AV1CodecConfigurationRecord         |
//! | VP9   | `vp09` | stream format metadata + frame rate |
//! | VP8   | `vp8`  | fixed                               |

pub mod av1;
pub mod avc;
pub mod hevc;
pub mod vp9;

use wd_common::{CodecId, Rational, VideoFormat};

use crate::output::{CodecString, UNDEFINED};

pub use av1::{set_av1_codec_string, Av1ConfigHeader};
pub use avc::set_avc_codec_string;
pub use hevc::{set_hevc_codec_string, HevcProfileTierLevel};
pub use vp9::{set_vp9_codec_string, VpChromaSubsampling, VpCodecFeatures};

/// Write the codec string of a video stream into `out`.
///
/// `format` and `frame_rate` are only read for VP9.
pub fn set_video_codec_string(
    out: &mut CodecString,
    codec: CodecId,
    extradata: &[u8],
    format: &VideoFormat,
    frame_rate: Option<Rational>,
) {
    match codec {
        CodecId::H264 => set_avc_codec_string(out, extradata),
        CodecId::Hevc => set_hevc_codec_string(out, extradata),
        CodecId::Av1 => set_av1_codec_string(out, extradata),
        CodecId::Vp9 => set_vp9_codec_string(out, format, frame_rate),
        CodecId::Vp8 => out.set("vp8"),
        _ => out.set(UNDEFINED),
    }
}

/// Codec string of a video stream, at the default capacity.
pub fn video_codec_string(
    codec: CodecId,
    extradata: &[u8],
    format: &VideoFormat,
    frame_rate: Option<Rational>,
) -> CodecString {
    let mut out = CodecString::new();
    set_video_codec_string(&mut out, codec, extradata, format, frame_rate);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_common::{PixelFormat, Resolution};

    fn video(codec: CodecId, extradata: &[u8]) -> String {
        video_codec_string(codec, extradata, &VideoFormat::default(), None).into_string()
    }

    #[test]
    fn routes_by_codec() {
        assert_eq!(video(CodecId::H264, &[0x01, 0x64, 0x00, 0x1F]), "avc1.64001f");
        assert_eq!(video(CodecId::Hevc, &[]), "hev1.0.0.L0");
        assert_eq!(video(CodecId::Av1, &[0x81, 0x04, 0x0C, 0x00]), "av01.0.04M.08");
        assert_eq!(video(CodecId::Vp9, &[]), "vp09");
        assert_eq!(video(CodecId::Vp8, &[0x01, 0x02]), "vp8");
    }

    #[test]
    fn unsupported_codecs_are_undefined() {
        for codec in [CodecId::Mpeg4, CodecId::Aac, CodecId::Opus, CodecId::Unknown] {
            assert_eq!(video(codec, &[0x01, 0x64, 0x00, 0x1F]), "undf");
        }
    }

    #[test]
    fn frame_rate_reaches_vp9() {
        let format = VideoFormat::new(PixelFormat::Yuv420p, Resolution::HD);
        let at = |rate| video_codec_string(CodecId::Vp9, &[], &format, rate).into_string();
        assert_eq!(at(None), "vp09.00.40.08.01.02.02.02.00");
        assert_eq!(at(Some(Rational::FPS_60)), "vp09.00.41.08.01.02.02.02.00");
    }

    #[test]
    fn dispatcher_respects_capacity() {
        let mut out = CodecString::with_capacity(8);
        let format = VideoFormat::default();
        set_video_codec_string(&mut out, CodecId::H264, &[0x01, 0x64, 0x00, 0x1F], &format, None);
        assert_eq!(out, "avc1.640");
        assert!(out.is_truncated());

        set_video_codec_string(&mut out, CodecId::Vp8, &[], &format, None);
        assert_eq!(out, "vp8");
        assert!(!out.is_truncated());
    }
}
