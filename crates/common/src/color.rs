//! Pixel formats, chroma siting, and color description code points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecStringError;

/// Static layout facts about a pixel format.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PixelFormatDescriptor {
    /// Demuxer `pix_fmt` name.
    pub name: &'static str,
    /// Bits per sample of the first (luma or green) component.
    pub depth: u8,
    /// Horizontal chroma subsampling as a right shift of the luma width.
    pub log2_chroma_w: u8,
    /// Vertical chroma subsampling as a right shift of the luma height.
    pub log2_chroma_h: u8,
}

/// Pixel format of a decoded picture, as tagged on the stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum PixelFormat {
    Yuv420p,
    Yuv422p,
    Yuv444p,
    Yuv440p,
    Yuv411p,
    Yuv410p,
    /// Full-range ("JPEG") 4:2:0.
    Yuvj420p,
    Yuvj422p,
    Yuvj444p,
    Yuva420p,
    Yuv420p10,
    Yuv422p10,
    Yuv444p10,
    Yuv440p10,
    Yuv420p12,
    Yuv422p12,
    Yuv444p12,
    /// Y plane + interleaved UV at half resolution.
    Nv12,
    Nv21,
    /// 10-bit NV12 variant (HDR content).
    P010,
    Gray8,
    Gray10,
    Rgb24,
    Bgr24,
    Rgba,
    Bgra,
    Gbrp,
    Gbrp10,
    Gbrp12,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 29] = [
        Self::Yuv420p,
        Self::Yuv422p,
        Self::Yuv444p,
        Self::Yuv440p,
        Self::Yuv411p,
        Self::Yuv410p,
        Self::Yuvj420p,
        Self::Yuvj422p,
        Self::Yuvj444p,
        Self::Yuva420p,
        Self::Yuv420p10,
        Self::Yuv422p10,
        Self::Yuv444p10,
        Self::Yuv440p10,
        Self::Yuv420p12,
        Self::Yuv422p12,
        Self::Yuv444p12,
        Self::Nv12,
        Self::Nv21,
        Self::P010,
        Self::Gray8,
        Self::Gray10,
        Self::Rgb24,
        Self::Bgr24,
        Self::Rgba,
        Self::Bgra,
        Self::Gbrp,
        Self::Gbrp10,
        Self::Gbrp12,
    ];

    pub fn descriptor(self) -> PixelFormatDescriptor {
        let (name, depth, log2_chroma_w, log2_chroma_h) = match self {
            Self::Yuv420p => ("yuv420p", 8, 1, 1),
            Self::Yuv422p => ("yuv422p", 8, 1, 0),
            Self::Yuv444p => ("yuv444p", 8, 0, 0),
            Self::Yuv440p => ("yuv440p", 8, 0, 1),
            Self::Yuv411p => ("yuv411p", 8, 2, 0),
            Self::Yuv410p => ("yuv410p", 8, 2, 2),
            Self::Yuvj420p => ("yuvj420p", 8, 1, 1),
            Self::Yuvj422p => ("yuvj422p", 8, 1, 0),
            Self::Yuvj444p => ("yuvj444p", 8, 0, 0),
            Self::Yuva420p => ("yuva420p", 8, 1, 1),
            Self::Yuv420p10 => ("yuv420p10le", 10, 1, 1),
            Self::Yuv422p10 => ("yuv422p10le", 10, 1, 0),
            Self::Yuv444p10 => ("yuv444p10le", 10, 0, 0),
            Self::Yuv440p10 => ("yuv440p10le", 10, 0, 1),
            Self::Yuv420p12 => ("yuv420p12le", 12, 1, 1),
            Self::Yuv422p12 => ("yuv422p12le", 12, 1, 0),
            Self::Yuv444p12 => ("yuv444p12le", 12, 0, 0),
            Self::Nv12 => ("nv12", 8, 1, 1),
            Self::Nv21 => ("nv21", 8, 1, 1),
            Self::P010 => ("p010le", 10, 1, 1),
            Self::Gray8 => ("gray", 8, 0, 0),
            Self::Gray10 => ("gray10le", 10, 0, 0),
            Self::Rgb24 => ("rgb24", 8, 0, 0),
            Self::Bgr24 => ("bgr24", 8, 0, 0),
            Self::Rgba => ("rgba", 8, 0, 0),
            Self::Bgra => ("bgra", 8, 0, 0),
            Self::Gbrp => ("gbrp", 8, 0, 0),
            Self::Gbrp10 => ("gbrp10le", 10, 0, 0),
            Self::Gbrp12 => ("gbrp12le", 12, 0, 0),
        };
        PixelFormatDescriptor {
            name,
            depth,
            log2_chroma_w,
            log2_chroma_h,
        }
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn bit_depth(self) -> u8 {
        self.descriptor().depth
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = CodecStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|fmt| fmt.name() == name)
            .ok_or_else(|| CodecStringError::UnsupportedPixelFormat(s.trim().to_string()))
    }
}

impl From<PixelFormat> for &'static str {
    fn from(fmt: PixelFormat) -> Self {
        fmt.name()
    }
}

impl TryFrom<String> for PixelFormat {
    type Error = CodecStringError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Location of chroma samples relative to luma.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChromaLocation {
    #[default]
    Unspecified,
    /// MPEG-2/4 4:2:0, H.264 default for 4:2:0.
    Left,
    /// MPEG-1 4:2:0, JPEG 4:2:0, H.263 4:2:0.
    Center,
    /// ITU-R 601, SMPTE 274M 296M S314M(DV 4:1:1), mpeg2 4:2:2.
    TopLeft,
    Top,
    BottomLeft,
    Bottom,
}

/// Sample value range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRange {
    #[default]
    Unspecified,
    /// "MPEG"/tv range (16-235 for 8-bit luma).
    Limited,
    /// "JPEG"/pc range (0-255 for 8-bit).
    Full,
}

macro_rules! code_point {
    ($(#[$meta:meta])* $name:ident { $($(#[$cmeta:meta])* $konst:ident = $value:expr),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u8);

        impl $name {
            $($(#[$cmeta])* pub const $konst: Self = Self($value);)*
        }

        impl Default for $name {
            fn default() -> Self {
                Self(2)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

code_point! {
    /// Color primaries (ISO/IEC 23091-2 `ColourPrimaries`).
    ColorPrimaries {
        BT709 = 1,
        UNSPECIFIED = 2,
        BT470M = 4,
        BT470BG = 5,
        SMPTE170M = 6,
        SMPTE240M = 7,
        FILM = 8,
        BT2020 = 9,
        SMPTE428 = 10,
        SMPTE431 = 11,
        SMPTE432 = 12,
        EBU3213 = 22,
    }
}

code_point! {
    /// Transfer characteristics (ISO/IEC 23091-2 `TransferCharacteristics`).
    TransferCharacteristics {
        BT709 = 1,
        UNSPECIFIED = 2,
        GAMMA22 = 4,
        GAMMA28 = 5,
        SMPTE170M = 6,
        SMPTE240M = 7,
        LINEAR = 8,
        IEC61966_2_1 = 13,
        BT2020_10 = 14,
        BT2020_12 = 15,
        /// PQ (HDR10).
        SMPTE2084 = 16,
        SMPTE428 = 17,
        /// Hybrid log-gamma.
        ARIB_STD_B67 = 18,
    }
}

code_point! {
    /// Matrix coefficients (ISO/IEC 23091-2 `MatrixCoefficients`).
    MatrixCoefficients {
        RGB = 0,
        BT709 = 1,
        UNSPECIFIED = 2,
        FCC = 4,
        BT470BG = 5,
        SMPTE170M = 6,
        SMPTE240M = 7,
        YCGCO = 8,
        BT2020_NCL = 9,
        BT2020_CL = 10,
        ICTCP = 14,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_format_descriptors() {
        let desc = PixelFormat::Yuv420p10.descriptor();
        assert_eq!(desc.depth, 10);
        assert_eq!((desc.log2_chroma_w, desc.log2_chroma_h), (1, 1));
        assert_eq!(PixelFormat::Yuv422p.descriptor().log2_chroma_h, 0);
        assert_eq!(PixelFormat::Gbrp12.bit_depth(), 12);
    }

    #[test]
    fn pixel_format_names_roundtrip() {
        for fmt in PixelFormat::ALL {
            assert_eq!(fmt.name().parse::<PixelFormat>().unwrap(), fmt);
        }
        let err = " yuv420p16le".parse::<PixelFormat>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported pixel format: yuv420p16le");
    }

    #[test]
    fn code_points_default_to_unspecified() {
        assert_eq!(ColorPrimaries::default(), ColorPrimaries::UNSPECIFIED);
        assert_eq!(TransferCharacteristics::default().0, 2);
        assert_eq!(MatrixCoefficients::default(), MatrixCoefficients(2));
        assert_eq!(ColorPrimaries::BT2020.to_string(), "9");
    }

    #[test]
    fn serde_forms() {
        let json = serde_json::to_string(&PixelFormat::P010).unwrap();
        assert_eq!(json, "\"p010le\"");
        let range: ColorRange = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(range, ColorRange::Full);
        let prim: ColorPrimaries = serde_json::from_str("9").unwrap();
        assert_eq!(prim, ColorPrimaries::BT2020);
    }
}
