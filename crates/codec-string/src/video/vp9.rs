//! `vp09.PP.LL.DD.CC.cp.tc.mc.FF` (VP Codec ISO Media File Format Binding, "Codecs
//! Parameter String").
//!
//! VP9 has no configuration record worth reading here. The features are derived
//! from the stream's format metadata instead, with the level estimated from the
//! picture size and luma sample rate when the stream does not carry one.

use tracing::{trace, warn};
use wd_common::{
    ChromaLocation, CodecId, CodecStringError, CodecStringResult, ColorRange, PixelFormat,
    Rational, VideoFormat,
};

use crate::output::CodecString;

/// Chroma subsampling class of the `vpcC` box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VpChromaSubsampling {
    Yuv420Vertical = 0,
    Yuv420CollocatedWithLuma = 1,
    Yuv422 = 2,
    Yuv444 = 3,
}

impl VpChromaSubsampling {
    pub fn is_420(self) -> bool {
        matches!(self, Self::Yuv420Vertical | Self::Yuv420CollocatedWithLuma)
    }
}

/// Everything the VP9 codec string encodes besides the color code points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VpCodecFeatures {
    pub profile: u8,
    pub level: u8,
    pub bit_depth: u8,
    pub chroma_subsampling: VpChromaSubsampling,
    pub full_range: bool,
}

/// (level, max luma sample rate, max luma picture size), checked in order.
const LEVEL_TABLE: &[(u8, u64, u64)] = &[
    (10, 829_440, 36_864),
    (11, 2_764_800, 73_728),
    (20, 4_608_000, 122_880),
    (21, 9_216_000, 245_760),
    (30, 20_736_000, 552_960),
    (31, 36_864_000, 983_040),
    (40, 83_558_400, 2_228_224),
    (41, 160_432_128, 2_228_224),
    (50, 311_951_360, 8_912_896),
    (51, 588_251_136, 8_912_896),
    (52, 1_176_502_272, 8_912_896),
    (60, 1_176_502_272, 35_651_584),
    (61, 2_353_004_544, 35_651_584),
    (62, 4_706_009_088, 35_651_584),
];

/// Approximate VP9 level for a luma picture size and optional frame rate.
///
/// Without a usable frame rate (`None` or a zero denominator) the sample rate is
/// taken as 0 and only the picture size decides. Returns 0 for an empty picture
/// or one beyond the last level.
pub fn level_for(picture_size: u64, frame_rate: Option<Rational>) -> u8 {
    if picture_size == 0 {
        return 0;
    }

    let sample_rate = match frame_rate {
        Some(rate) if rate.is_valid() => {
            i128::from(picture_size) * i128::from(rate.num) / i128::from(rate.den)
        }
        _ => 0,
    };

    LEVEL_TABLE
        .iter()
        .find(|&&(_, max_rate, max_size)| {
            sample_rate <= i128::from(max_rate) && picture_size <= max_size
        })
        .map(|&(level, _, _)| level)
        .unwrap_or(0)
}

/// Luma bit depth of a pixel format.
pub fn bit_depth(pixel_format: Option<PixelFormat>) -> CodecStringResult<u8> {
    pixel_format
        .map(PixelFormat::bit_depth)
        .ok_or_else(missing_pixel_format)
}

fn missing_pixel_format() -> CodecStringError {
    CodecStringError::UnsupportedPixelFormat("none".to_string())
}

pub fn chroma_subsampling(
    pixel_format: Option<PixelFormat>,
    chroma_location: ChromaLocation,
) -> CodecStringResult<VpChromaSubsampling> {
    let pixel_format = pixel_format.ok_or_else(missing_pixel_format)?;
    let desc = pixel_format.descriptor();
    match (desc.log2_chroma_w, desc.log2_chroma_h) {
        (1, 1) if chroma_location == ChromaLocation::Left => {
            Ok(VpChromaSubsampling::Yuv420Vertical)
        }
        (1, 1) => Ok(VpChromaSubsampling::Yuv420CollocatedWithLuma),
        (1, 0) => Ok(VpChromaSubsampling::Yuv422),
        (0, 0) => Ok(VpChromaSubsampling::Yuv444),
        (log2_chroma_w, log2_chroma_h) => Err(CodecStringError::UnsupportedChromaSubsampling {
            pixel_format,
            log2_chroma_w,
            log2_chroma_h,
        }),
    }
}

/// Profile 0-3 from bit depth and chroma subsampling.
fn infer_profile(bit_depth: u8, subsampling: VpChromaSubsampling) -> u8 {
    match (bit_depth == 8, subsampling.is_420()) {
        (true, true) => 0,
        (true, false) => 1,
        (false, true) => 2,
        (false, false) => 3,
    }
}

/// Derive the VP9 feature set of a stream.
///
/// A profile or level already known on the stream is used verbatim.
pub fn codec_features(
    format: &VideoFormat,
    frame_rate: Option<Rational>,
) -> CodecStringResult<VpCodecFeatures> {
    let bit_depth = bit_depth(format.pixel_format)?;
    let chroma_subsampling = chroma_subsampling(format.pixel_format, format.chroma_location)?;

    let level = format.level.unwrap_or_else(|| {
        let level = level_for(format.picture_size(), frame_rate);
        trace!(
            picture_size = format.picture_size(),
            fps = frame_rate.and_then(Rational::as_f64),
            level,
            "Derived VP9 level"
        );
        level
    });
    let profile = format
        .profile
        .unwrap_or_else(|| infer_profile(bit_depth, chroma_subsampling));

    Ok(VpCodecFeatures {
        profile,
        level,
        bit_depth,
        chroma_subsampling,
        full_range: format.color_range == ColorRange::Full,
    })
}

pub fn set_vp9_codec_string(
    out: &mut CodecString,
    format: &VideoFormat,
    frame_rate: Option<Rational>,
) {
    out.set("vp09");

    let features = match codec_features(format, frame_rate) {
        Ok(features) => features,
        Err(e) => {
            warn!("{}: {e}", CodecId::Vp9.display_name());
            return;
        }
    };
    trace!(?features, "vpcC");

    out.push_fmt(format_args!(
        ".{:02}.{:02}.{:02}.{:02}.{:02}.{:02}.{:02}.{:02}",
        features.profile,
        features.level,
        features.bit_depth,
        features.chroma_subsampling as u8,
        format.color_primaries.0,
        format.color_transfer.0,
        format.color_matrix.0,
        u8::from(features.full_range)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_common::{ColorPrimaries, MatrixCoefficients, Resolution, TransferCharacteristics};

    fn vp9(format: &VideoFormat, frame_rate: Option<Rational>) -> String {
        let mut out = CodecString::new();
        set_vp9_codec_string(&mut out, format, frame_rate);
        out.into_string()
    }

    #[test]
    fn empty_picture_is_level_0() {
        assert_eq!(level_for(0, None), 0);
        assert_eq!(level_for(0, Some(Rational::FPS_60)), 0);
    }

    #[test]
    fn both_table_dimensions_are_enforced() {
        // 36864 samples at 22.5 fps is exactly the level 1 sample rate
        assert_eq!(level_for(36_864, Some(Rational::new(45, 2))), 10);
        assert_eq!(level_for(36_864, Some(Rational::new(829_440, 36_864))), 10);
        assert_eq!(level_for(36_864, Some(Rational::new(829_441, 36_864))), 11);
        assert_eq!(level_for(36_865, None), 11);
    }

    #[test]
    fn picture_size_only_without_frame_rate() {
        assert_eq!(level_for(1920 * 1080, None), 40);
        assert_eq!(level_for(1920 * 1080, Some(Rational::new(30, 0))), 40);
        assert_eq!(level_for(3840 * 2160, None), 50);
        assert_eq!(level_for(7680 * 4320, None), 60);
    }

    #[test]
    fn frame_rate_raises_level() {
        assert_eq!(level_for(1920 * 1080, Some(Rational::FPS_30)), 40);
        assert_eq!(level_for(1920 * 1080, Some(Rational::FPS_60)), 41);
        assert_eq!(level_for(3840 * 2160, Some(Rational::FPS_60)), 51);
        assert_eq!(level_for(3840 * 2160, Some(Rational::new(120, 1))), 52);
        assert_eq!(level_for(7680 * 4320, Some(Rational::new(120, 1))), 62);
    }

    #[test]
    fn beyond_last_level_is_0() {
        assert_eq!(level_for(35_651_585, None), 0);
        assert_eq!(level_for(7680 * 4320, Some(Rational::new(240, 1))), 0);
        let huge = u64::from(u32::MAX) * u64::from(u32::MAX);
        assert_eq!(level_for(huge, Some(Rational::new(i32::MAX, 1))), 0);
    }

    #[test]
    fn subsampling_classes() {
        let loc = ChromaLocation::Unspecified;
        assert_eq!(
            chroma_subsampling(Some(PixelFormat::Yuv420p), ChromaLocation::Left).unwrap(),
            VpChromaSubsampling::Yuv420Vertical
        );
        assert_eq!(
            chroma_subsampling(Some(PixelFormat::Yuv420p), loc).unwrap(),
            VpChromaSubsampling::Yuv420CollocatedWithLuma
        );
        assert_eq!(
            chroma_subsampling(Some(PixelFormat::Yuv420p), ChromaLocation::TopLeft).unwrap(),
            VpChromaSubsampling::Yuv420CollocatedWithLuma
        );
        assert_eq!(
            chroma_subsampling(Some(PixelFormat::Yuv422p10), loc).unwrap(),
            VpChromaSubsampling::Yuv422
        );
        assert_eq!(
            chroma_subsampling(Some(PixelFormat::Gbrp), loc).unwrap(),
            VpChromaSubsampling::Yuv444
        );
    }

    #[test]
    fn unsupported_subsampling() {
        for fmt in [PixelFormat::Yuv440p, PixelFormat::Yuv411p, PixelFormat::Yuv410p] {
            assert!(matches!(
                chroma_subsampling(Some(fmt), ChromaLocation::Left),
                Err(CodecStringError::UnsupportedChromaSubsampling { .. })
            ));
        }
        assert!(matches!(
            chroma_subsampling(None, ChromaLocation::Left),
            Err(CodecStringError::UnsupportedPixelFormat(ref name)) if name == "none"
        ));
    }

    #[test]
    fn profile_inference() {
        let features = |fmt| {
            codec_features(&VideoFormat::new(fmt, Resolution::HD), None)
                .unwrap()
                .profile
        };
        assert_eq!(features(PixelFormat::Yuv420p), 0);
        assert_eq!(features(PixelFormat::Yuv444p), 1);
        assert_eq!(features(PixelFormat::Yuv422p), 1);
        assert_eq!(features(PixelFormat::Yuv420p10), 2);
        assert_eq!(features(PixelFormat::P010), 2);
        assert_eq!(features(PixelFormat::Yuv444p12), 3);
    }

    #[test]
    fn known_profile_and_level_are_kept() {
        let format = VideoFormat {
            profile: Some(1),
            level: Some(31),
            ..VideoFormat::new(PixelFormat::Yuv420p, Resolution::UHD)
        };
        let features = codec_features(&format, Some(Rational::FPS_60)).unwrap();
        assert_eq!(features.profile, 1);
        assert_eq!(features.level, 31);
    }

    #[test]
    fn full_string_8bit_1080p() {
        let format = VideoFormat::new(PixelFormat::Yuv420p, Resolution::HD);
        assert_eq!(vp9(&format, None), "vp09.00.40.08.01.02.02.02.00");
    }

    #[test]
    fn full_string_hdr10_full_range() {
        let format = VideoFormat {
            chroma_location: ChromaLocation::Left,
            color_range: ColorRange::Full,
            color_primaries: ColorPrimaries::BT2020,
            color_transfer: TransferCharacteristics(16),
            color_matrix: MatrixCoefficients(9),
            ..VideoFormat::new(PixelFormat::Yuv420p10, Resolution::UHD)
        };
        assert_eq!(
            vp9(&format, Some(Rational::FPS_60)),
            "vp09.02.51.10.00.09.16.09.01"
        );
    }

    #[test]
    fn unknown_resolution_gives_level_0() {
        let format = VideoFormat {
            pixel_format: Some(PixelFormat::Yuv420p),
            ..Default::default()
        };
        assert_eq!(vp9(&format, Some(Rational::FPS_30)), "vp09.00.00.08.01.02.02.02.00");
    }

    #[test]
    fn unsupported_format_emits_base_only() {
        assert_eq!(vp9(&VideoFormat::default(), None), "vp09");
        let format = VideoFormat::new(PixelFormat::Yuv440p, Resolution::HD);
        assert_eq!(vp9(&format, None), "vp09");
    }
}
