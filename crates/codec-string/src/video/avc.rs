//! `avc1.PPCCLL` from an AVCDecoderConfigurationRecord (ISO 14496-15, 5.3.3.1).

use tracing::{debug, trace};
use wd_common::{CodecId, CodecStringError};

use crate::bitreader::BitReader;
use crate::output::CodecString;

/// configurationVersion + profile + compatibility + level.
const MIN_RECORD_SIZE: usize = 4;

pub fn set_avc_codec_string(out: &mut CodecString, extradata: &[u8]) {
    out.set("avc1");

    if extradata.len() < MIN_RECORD_SIZE {
        if !extradata.is_empty() {
            let err = CodecStringError::InsufficientData {
                codec: CodecId::H264,
                needed: MIN_RECORD_SIZE,
                got: extradata.len(),
            };
            debug!("avcC: {err}");
        }
        return;
    }

    let mut reader = BitReader::new(extradata);
    reader.skip(8); // configurationVersion
    let profile = reader.read_u8(8);
    let profile_compat = reader.read_u8(8);
    let level = reader.read_u8(8);

    trace!("avcC: profile={profile}, compat=0x{profile_compat:02x}, level={level}");

    out.push_fmt(format_args!(".{profile:02x}{profile_compat:02x}{level:02x}"));
}
