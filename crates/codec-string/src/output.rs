//! Bounded codec string buffer.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;
use wd_common::DEFAULT_CAPACITY;

/// Base tag emitted for anything without a builder.
pub const UNDEFINED: &str = "undf";

/// Owned codec string that never grows past its capacity.
///
/// Appends that would overflow are cut at the capacity and the string is marked
/// truncated; writing never fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CodecString {
    buf: String,
    capacity: usize,
    truncated: bool,
}

impl CodecString {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Any capacity is accepted; at most [`DEFAULT_CAPACITY`] bytes are reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            truncated: false,
        }
    }

    /// Replace the contents with `base`.
    pub fn set(&mut self, base: &str) {
        self.buf.clear();
        self.truncated = false;
        self.push_str(base);
    }

    /// Append as much of `s` as fits. Nothing is appended once the string is truncated.
    pub fn push_str(&mut self, s: &str) {
        if self.truncated {
            return;
        }
        let room = self.capacity.saturating_sub(self.buf.len());
        if s.len() <= room {
            self.buf.push_str(s);
            return;
        }

        let mut cut = room;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.buf.push_str(&s[..cut]);
        debug!(
            capacity = self.capacity,
            dropped = s.len() - cut,
            "Codec string truncated at capacity"
        );
        self.truncated = true;
    }

    /// Append formatted text, cut at the capacity like [`CodecString::push_str`].
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) {
        // write_str below never fails, so neither does fmt::write.
        let _ = fmt::Write::write_fmt(self, args);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True if any append was cut short.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Default for CodecString {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for CodecString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl fmt::Display for CodecString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl AsRef<str> for CodecString {
    fn as_ref(&self) -> &str {
        &self.buf
    }
}

impl PartialEq<str> for CodecString {
    fn eq(&self, other: &str) -> bool {
        self.buf == other
    }
}

impl PartialEq<&str> for CodecString {
    fn eq(&self, other: &&str) -> bool {
        self.buf == *other
    }
}

impl From<CodecString> for String {
    fn from(s: CodecString) -> Self {
        s.buf
    }
}

impl Serialize for CodecString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.buf)
    }
}
