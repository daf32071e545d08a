//! Property tests: capacity bound, determinism, and bit reader saturation over
//! arbitrary records.

use proptest::prelude::*;

use wd_codec_string::audio::set_aac_codec_string;
use wd_codec_string::video::{
    set_av1_codec_string, set_avc_codec_string, set_hevc_codec_string, set_vp9_codec_string,
};
use wd_codec_string::{set_audio_codec_string, set_video_codec_string, BitReader, CodecString};
use wd_common::{
    ChromaLocation, CodecId, ColorRange, PixelFormat, Rational, Resolution, VideoFormat,
};

fn any_codec() -> impl Strategy<Value = CodecId> {
    prop::sample::select(CodecId::ALL.to_vec())
}

fn any_format() -> impl Strategy<Value = VideoFormat> {
    (
        prop::option::of(prop::sample::select(PixelFormat::ALL.to_vec())),
        prop::option::of((0u32..10_000, 0u32..10_000)),
        prop::sample::select(vec![
            ChromaLocation::Unspecified,
            ChromaLocation::Left,
            ChromaLocation::TopLeft,
        ]),
        prop::sample::select(vec![ColorRange::Unspecified, ColorRange::Limited, ColorRange::Full]),
        prop::option::of(any::<u8>()),
        prop::option::of(any::<u8>()),
    )
        .prop_map(|(pixel_format, size, chroma_location, color_range, profile, level)| VideoFormat {
            pixel_format,
            resolution: size.map(|(w, h)| Resolution::new(w, h)),
            chroma_location,
            color_range,
            profile,
            level,
            ..Default::default()
        })
}

fn any_frame_rate() -> impl Strategy<Value = Option<Rational>> {
    prop::option::of((any::<i32>(), any::<i32>()).prop_map(|(num, den)| Rational::new(num, den)))
}

fn build(capacity: usize, f: impl FnOnce(&mut CodecString)) -> CodecString {
    let mut out = CodecString::with_capacity(capacity);
    f(&mut out);
    out
}

/// Run every builder on the same input at the given capacity.
fn all_builders(
    capacity: usize,
    codec: CodecId,
    data: &[u8],
    format: &VideoFormat,
    frame_rate: Option<Rational>,
) -> Vec<CodecString> {
    vec![
        build(capacity, |out| set_avc_codec_string(out, data)),
        build(capacity, |out| set_hevc_codec_string(out, data)),
        build(capacity, |out| set_av1_codec_string(out, data)),
        build(capacity, |out| set_vp9_codec_string(out, format, frame_rate)),
        build(capacity, |out| set_aac_codec_string(out, codec, data)),
        build(capacity, |out| set_audio_codec_string(out, codec, data)),
        build(capacity, |out| {
            set_video_codec_string(out, codec, data, format, frame_rate)
        }),
    ]
}

proptest! {
    #[test]
    fn output_never_exceeds_capacity(
        capacity in 0usize..48,
        codec in any_codec(),
        data in prop::collection::vec(any::<u8>(), 0..64),
        format in any_format(),
        frame_rate in any_frame_rate(),
    ) {
        for out in all_builders(capacity, codec, &data, &format, frame_rate) {
            prop_assert!(out.len() <= capacity, "{out:?}");
            prop_assert!(out.as_str().is_ascii());
        }
    }

    #[test]
    fn default_capacity_is_never_hit(
        codec in any_codec(),
        data in prop::collection::vec(any::<u8>(), 0..64),
        format in any_format(),
        frame_rate in any_frame_rate(),
    ) {
        for out in all_builders(40, codec, &data, &format, frame_rate) {
            prop_assert!(!out.is_truncated(), "{out:?}");
        }
    }

    #[test]
    fn builders_are_deterministic(
        codec in any_codec(),
        data in prop::collection::vec(any::<u8>(), 0..64),
        format in any_format(),
        frame_rate in any_frame_rate(),
    ) {
        let first = all_builders(40, codec, &data, &format, frame_rate);
        let second = all_builders(40, codec, &data, &format, frame_rate);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn truncation_is_a_prefix(
        capacity in 0usize..40,
        data in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut full = CodecString::new();
        set_hevc_codec_string(&mut full, &data);
        let mut cut = CodecString::with_capacity(capacity);
        set_hevc_codec_string(&mut cut, &data);
        prop_assert!(full.as_str().starts_with(cut.as_str()));
    }

    #[test]
    fn hevc_never_ends_in_a_zero_constraint_byte(data in prop::collection::vec(any::<u8>(), 0..32)) {
        let mut out = CodecString::new();
        set_hevc_codec_string(&mut out, &data);
        prop_assert!(!out.as_str().ends_with(".0"), "{out:?}");
    }

    #[test]
    fn pushes_after_a_cut_stay_a_prefix(
        capacity in 0usize..16,
        pieces in prop::collection::vec("\\PC{0,4}", 0..8),
    ) {
        let mut out = CodecString::with_capacity(capacity);
        for piece in &pieces {
            out.push_str(piece);
        }
        let full = pieces.concat();
        prop_assert!(full.starts_with(out.as_str()), "{out:?} vs {full:?}");
        prop_assert!(out.len() <= capacity);
    }

    #[test]
    fn bit_reader_values_fit_width(
        data in prop::collection::vec(any::<u8>(), 0..16),
        widths in prop::collection::vec(1u32..=64, 1..24),
    ) {
        let mut reader = BitReader::new(&data);
        for n in widths {
            let value = reader.read(n);
            if n < 64 {
                prop_assert!(value < (1u64 << n));
            }
        }
    }

    #[test]
    fn bit_reader_reads_zero_past_end(
        data in prop::collection::vec(any::<u8>(), 0..16),
        n in 1u32..=64,
    ) {
        let mut reader = BitReader::new(&data);
        reader.skip(data.len() * 8);
        prop_assert_eq!(reader.bits_left(), 0);
        prop_assert_eq!(reader.read(n), 0);
    }

    #[test]
    fn bit_reader_matches_byte_reads(data in prop::collection::vec(any::<u8>(), 1..16)) {
        let mut reader = BitReader::new(&data);
        for &byte in &data {
            prop_assert_eq!(reader.read_u8(8), byte);
        }
    }
}
