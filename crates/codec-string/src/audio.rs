//! Audio codec strings.
//!
//! Everything but AAC maps to a fixed literal. AAC renders as
//! `mp4a.<object type indication (hex)>.<audio object type (decimal)>`, where the
//! audio object type comes from the AudioSpecificConfig (ISO 14496-3, 1.6.2.1).

use tracing::{debug, trace};
use wd_common::CodecId;

use crate::bitreader::BitReader;
use crate::output::{CodecString, UNDEFINED};

/// MPEG-4 object type indications (ISO 14496-1 registry, mp4ra.org).
///
/// Lookups take the first entry for a codec, so later duplicates never win. The
/// many-to-one entries (AAC and ALS both 0x40, MP3 and MP2 both 0x69) are intended:
/// consumers key on the emitted value, not on codec identity.
const MP4_OBJECT_TYPES: &[(CodecId, u8)] = &[
    (CodecId::Mpeg4, 0x20),
    (CodecId::H264, 0x21),
    (CodecId::Hevc, 0x23),
    (CodecId::Aac, 0x40),
    (CodecId::Mp4Als, 0x40), // 14496-3 ALS
    (CodecId::Aac, 0x66),    // MPEG-2 AAC Main
    (CodecId::Aac, 0x67),    // MPEG-2 AAC Low
    (CodecId::Aac, 0x68),    // MPEG-2 AAC SSR
    (CodecId::Mp3, 0x69),    // 13818-3
    (CodecId::Mp2, 0x69),    // 11172-3
    (CodecId::Mp3, 0x6B),    // 11172-3
    (CodecId::Ac3, 0xA5),
    (CodecId::Eac3, 0xA6),
    (CodecId::Dts, 0xA9),
    (CodecId::Opus, 0xAD),
    (CodecId::Vp9, 0xB1),
    (CodecId::Vorbis, 0xDD), // nonstandard, gpac uses it
];

/// Escape value of the 5-bit audio object type field.
const AOT_ESCAPE: u8 = 31;

/// MPEG-4 object type indication for a codec, if it has one.
pub fn mp4_object_type(codec: CodecId) -> Option<u8> {
    MP4_OBJECT_TYPES
        .iter()
        .find(|(id, _)| *id == codec)
        .map(|&(_, oti)| oti)
}

/// Audio object type from the first bytes of an AudioSpecificConfig.
///
/// Needs at least 2 bytes. The escape value 31 is followed by a 6-bit extension
/// that counts from 32.
pub fn audio_object_type(extradata: &[u8]) -> Option<u8> {
    if extradata.len() < 2 {
        return None;
    }
    let mut reader = BitReader::new(&extradata[..2]);
    let aot = reader.read_u8(5);
    if aot == AOT_ESCAPE {
        Some(32 + reader.read_u8(6))
    } else {
        Some(aot)
    }
}

/// `mp4a[.OO[.A]]` for AAC-family codecs.
pub fn set_aac_codec_string(out: &mut CodecString, codec: CodecId, extradata: &[u8]) {
    out.set("mp4a");

    let Some(oti) = mp4_object_type(codec) else {
        debug!("No MPEG-4 object type for {codec}");
        return;
    };
    out.push_fmt(format_args!(".{oti:02x}"));

    match audio_object_type(extradata) {
        Some(aot) => {
            trace!("AAC: oti=0x{oti:02x}, aot={aot}");
            out.push_fmt(format_args!(".{aot}"));
        }
        None => debug!(
            "AAC: AudioSpecificConfig too short ({} bytes), omitting object type",
            extradata.len()
        ),
    }
}

/// Fixed literal for the non-AAC audio codecs.
fn audio_literal(codec: CodecId) -> &'static str {
    match codec {
        CodecId::Flac => "flac",
        CodecId::Mp3 => "mp3",
        CodecId::Opus => "opus",
        CodecId::Vorbis => "vorbis",
        CodecId::PcmMulaw => "ulaw",
        CodecId::PcmAlaw => "alaw",
        CodecId::PcmU8 => "pcm-u8",
        CodecId::PcmS16Le | CodecId::PcmS16Be => "pcm-s16",
        CodecId::PcmS24Le | CodecId::PcmS24Be => "pcm-s24",
        CodecId::PcmS32Le | CodecId::PcmS32Be => "pcm-s32",
        CodecId::PcmF32Le | CodecId::PcmF32Be => "pcm-f32",
        _ => UNDEFINED,
    }
}

/// Write the codec string of an audio stream into `out`.
pub fn set_audio_codec_string(out: &mut CodecString, codec: CodecId, extradata: &[u8]) {
    match codec {
        CodecId::Aac => set_aac_codec_string(out, codec, extradata),
        other => out.set(audio_literal(other)),
    }
}

/// Codec string of an audio stream, at the default capacity.
pub fn audio_codec_string(codec: CodecId, extradata: &[u8]) -> CodecString {
    let mut out = CodecString::new();
    set_audio_codec_string(&mut out, codec, extradata);
    out
}
