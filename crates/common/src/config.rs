//! Codec string derivation settings.

use serde::{Deserialize, Serialize};

use crate::error::{CodecStringError, CodecStringResult};

/// Output capacity that fits every codec string produced today.
pub const DEFAULT_CAPACITY: usize = 40;

/// Smallest accepted capacity: the 4-character base tag must always fit.
pub const MIN_CAPACITY: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecStringConfig {
    /// Maximum output length in bytes; longer strings are cut.
    pub capacity: usize,
    /// Forward the stream frame rate to VP9 level derivation.
    /// When off, the level is derived from picture size alone.
    pub vp9_frame_rate_level: bool,
}

impl Default for CodecStringConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            vp9_frame_rate_level: true,
        }
    }
}

impl CodecStringConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn validate(&self) -> CodecStringResult<()> {
        if self.capacity < MIN_CAPACITY {
            return Err(CodecStringError::InvalidConfig(format!(
                "capacity {} is below the minimum of {MIN_CAPACITY}",
                self.capacity
            )));
        }
        Ok(())
    }

    /// Load and validate a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CodecStringResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
