//! `av01.P.LLT.DD` from an AV1CodecConfigurationRecord (AV1-ISOBMFF, 2.3.3).
//!
//! Only the mandatory fields are emitted. The optional colour suffix
//! (`.M.CCC.cp.tc.mc.F`) needs the sequence header OBU and is not produced.

use tracing::{debug, trace};
use wd_common::{CodecId, CodecStringError, CodecStringResult};

use crate::bitreader::BitReader;
use crate::output::CodecString;

const MIN_RECORD_SIZE: usize = 4;

/// The only configuration record version defined so far.
const RECORD_VERSION: u8 = 1;

/// Fields of the fixed 4-byte record header.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Av1ConfigHeader {
    pub version: u8,
    pub seq_profile: u8,
    pub seq_level_idx_0: u8,
    pub seq_tier_0: bool,
    pub high_bitdepth: bool,
    pub twelve_bit: bool,
    pub monochrome: bool,
    pub chroma_subsampling_x: bool,
    pub chroma_subsampling_y: bool,
    pub chroma_sample_position: u8,
}

impl Av1ConfigHeader {
    /// Parse the fixed record header. Needs 4 bytes.
    pub fn parse(extradata: &[u8]) -> CodecStringResult<Self> {
        if extradata.len() < MIN_RECORD_SIZE {
            return Err(CodecStringError::InsufficientData {
                codec: CodecId::Av1,
                needed: MIN_RECORD_SIZE,
                got: extradata.len(),
            });
        }
        let mut reader = BitReader::new(&extradata[..MIN_RECORD_SIZE]);
        reader.skip(1); // marker
        Ok(Self {
            version: reader.read_u8(7),
            seq_profile: reader.read_u8(3),
            seq_level_idx_0: reader.read_u8(5),
            seq_tier_0: reader.read_bit(),
            high_bitdepth: reader.read_bit(),
            twelve_bit: reader.read_bit(),
            monochrome: reader.read_bit(),
            chroma_subsampling_x: reader.read_bit(),
            chroma_subsampling_y: reader.read_bit(),
            chroma_sample_position: reader.read_u8(2),
        })
    }

    /// 8, 10 or 12. `twelve_bit` is taken as-is even without `high_bitdepth`.
    pub fn bit_depth(&self) -> u8 {
        8 + 2 * u8::from(self.high_bitdepth) + 2 * u8::from(self.twelve_bit)
    }

    pub fn tier_letter(&self) -> char {
        if self.seq_tier_0 {
            'H'
        } else {
            'M'
        }
    }
}

pub fn set_av1_codec_string(out: &mut CodecString, extradata: &[u8]) {
    out.set("av01");

    if extradata.is_empty() {
        return;
    }
    let header = match Av1ConfigHeader::parse(extradata) {
        Ok(header) => header,
        Err(e) => {
            debug!("av1C: {e}");
            return;
        }
    };
    if header.version != RECORD_VERSION {
        debug!("av1C: unsupported record version {}", header.version);
        return;
    }
    trace!(?header, "av1C");

    out.push_fmt(format_args!(
        ".{}.{:02}{}.{:02}",
        header.seq_profile,
        header.seq_level_idx_0,
        header.tier_letter(),
        header.bit_depth()
    ));
}
