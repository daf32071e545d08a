//! `hev1.[A-C]P.CCCC.[LH]LL[.XX]*` from an HEVCDecoderConfigurationRecord
//! (ISO 14496-15, 8.3.3.1.2 and Annex E.3).
//!
//! There is no minimum-size check: the bit reader zero-fills past the end, so a
//! short record renders its missing fields as zeros.

use tracing::trace;

use crate::bitreader::BitReader;
use crate::output::CodecString;

/// general_profile_idc and friends, in record order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HevcProfileTierLevel {
    pub profile_space: u8,
    pub tier_flag: bool,
    pub profile_idc: u8,
    pub profile_compatibility_flags: u32,
    /// 48 bits.
    pub constraint_indicator_flags: u64,
    pub level_idc: u8,
}

impl HevcProfileTierLevel {
    pub fn parse(extradata: &[u8]) -> Self {
        let mut reader = BitReader::new(extradata);
        reader.skip(8); // configurationVersion
        Self {
            profile_space: reader.read_u8(2),
            tier_flag: reader.read_bit(),
            profile_idc: reader.read_u8(5),
            profile_compatibility_flags: reader.read_u32(32),
            constraint_indicator_flags: reader.read(48),
            level_idc: reader.read_u8(8),
        }
    }

    /// "", "A", "B" or "C".
    pub fn profile_space_prefix(&self) -> &'static str {
        match self.profile_space {
            1 => "A",
            2 => "B",
            3 => "C",
            _ => "",
        }
    }

    pub fn tier_letter(&self) -> char {
        if self.tier_flag {
            'H'
        } else {
            'L'
        }
    }

    /// Compatibility flags in the codec-string bit order (flag 0 in the LSB).
    pub fn reversed_compatibility_flags(&self) -> u32 {
        self.profile_compatibility_flags.reverse_bits()
    }

    /// The six constraint bytes, most significant first.
    pub fn constraint_bytes(&self) -> [u8; 6] {
        let be = self.constraint_indicator_flags.to_be_bytes();
        let mut bytes = [0u8; 6];
        bytes.copy_from_slice(&be[2..]);
        bytes
    }
}

pub fn set_hevc_codec_string(out: &mut CodecString, extradata: &[u8]) {
    out.set("hev1");

    let ptl = HevcProfileTierLevel::parse(extradata);
    trace!(?ptl, "hvcC");

    out.push_fmt(format_args!(
        ".{}{}.{:x}.{}{}",
        ptl.profile_space_prefix(),
        ptl.profile_idc,
        ptl.reversed_compatibility_flags(),
        ptl.tier_letter(),
        ptl.level_idc
    ));

    // Only the span from the first to the last nonzero byte is written.
    let bytes = ptl.constraint_bytes();
    let first = bytes.iter().position(|&b| b != 0);
    let last = bytes.iter().rposition(|&b| b != 0);
    if let (Some(first), Some(last)) = (first, last) {
        for byte in &bytes[first..=last] {
            out.push_fmt(format_args!(".{byte:x}"));
        }
    }
}
