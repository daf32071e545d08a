//! Core value types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CodecStringError;

/// Rational number for frame rates (e.g., 30000/1001 for 29.97fps).
///
/// A zero denominator means the rate is unknown; nothing here divides by it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    pub num: i32,
    pub den: i32,
}

impl Rational {
    pub const FPS_24: Self = Self { num: 24, den: 1 };
    pub const FPS_25: Self = Self { num: 25, den: 1 };
    pub const FPS_30: Self = Self { num: 30, den: 1 };
    pub const FPS_29_97: Self = Self {
        num: 30000,
        den: 1001,
    };
    pub const FPS_60: Self = Self { num: 60, den: 1 };
    pub const FPS_59_94: Self = Self {
        num: 60000,
        den: 1001,
    };

    pub const fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    /// False when the denominator is zero.
    pub fn is_valid(self) -> bool {
        self.den != 0
    }

    pub fn as_f64(self) -> Option<f64> {
        self.is_valid().then(|| self.num as f64 / self.den as f64)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl FromStr for Rational {
    type Err = CodecStringError;

    /// Parses `"30"`, `"30000/1001"` or `"30000:1001"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CodecStringError::InvalidConfig(format!("invalid rational: {s}"));
        let s = s.trim();
        match s.split_once(['/', ':']) {
            Some((num, den)) => Ok(Self::new(
                num.trim().parse().map_err(|_| invalid())?,
                den.trim().parse().map_err(|_| invalid())?,
            )),
            None => Ok(Self::new(s.parse().map_err(|_| invalid())?, 1)),
        }
    }
}

/// Video/image resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const HD: Self = Self {
        width: 1920,
        height: 1080,
    };
    pub const UHD: Self = Self {
        width: 3840,
        height: 2160,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
