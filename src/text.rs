//! Sentinel-terminated input text
//!
//! Positions are 1-indexed throughout the crate: `at(1)` is the first
//! byte and `at(len())` is the sentinel. Position 0 is never a valid
//! character position; edge labels use it only as the empty root label.

use std::fmt;

use thiserror::Error;

/// Sentinel appended when the caller does not pick one.
pub const DEFAULT_SENTINEL: u8 = b'$';

/// Errors raised while preparing text for construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    /// The raw input already contains the sentinel byte.
    #[error("sentinel '{sentinel}' already occurs in the input at position {position}")]
    SentinelInInput {
        /// Sentinel that was requested.
        sentinel: char,
        /// 1-indexed position of the first occurrence.
        position: usize,
    },

    /// A pre-terminated buffer does not end with its sentinel.
    #[error("text does not end with the sentinel '{0}'")]
    MissingSentinel(char),
}

/// Immutable text with exactly one trailing sentinel.
#[derive(Clone, PartialEq, Eq)]
pub struct Text {
    bytes: Vec<u8>,
    sentinel: u8,
}

impl Text {
    /// Append `sentinel` to `input`, rejecting inputs that already contain it.
    pub fn new(input: &[u8], sentinel: u8) -> Result<Self, TextError> {
        if let Some(idx) = input.iter().position(|&b| b == sentinel) {
            return Err(TextError::SentinelInInput {
                sentinel: sentinel as char,
                position: idx + 1,
            });
        }

        let mut bytes = Vec::with_capacity(input.len() + 1);
        bytes.extend_from_slice(input);
        bytes.push(sentinel);
        Ok(Self { bytes, sentinel })
    }

    /// Wrap a buffer whose last byte is already the sentinel.
    pub fn from_terminated(bytes: Vec<u8>) -> Result<Self, TextError> {
        match bytes.split_last() {
            Some((&sentinel, body)) => {
                if let Some(idx) = body.iter().position(|&b| b == sentinel) {
                    return Err(TextError::SentinelInInput {
                        sentinel: sentinel as char,
                        position: idx + 1,
                    });
                }
                Ok(Self { bytes, sentinel })
            }
            None => Err(TextError::MissingSentinel(DEFAULT_SENTINEL as char)),
        }
    }

    /// Byte at 1-indexed position `pos`.
    ///
    /// Panics if `pos` is 0 or past the sentinel, like slice indexing.
    #[inline]
    pub fn at(&self, pos: usize) -> u8 {
        debug_assert!(pos >= 1, "text positions are 1-indexed");
        self.bytes[pos - 1]
    }

    /// Checked variant of [`Text::at`]; `None` past the end of text.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<u8> {
        pos.checked_sub(1).and_then(|idx| self.bytes.get(idx).copied())
    }

    /// Bytes in the inclusive 1-indexed range `[start, end]`.
    ///
    /// An empty slice is returned when `end < start`.
    ///
    /// Panics if `start` is 0 or `end` is past the sentinel, like slice
    /// indexing.
    pub fn slice(&self, start: usize, end: usize) -> &[u8] {
        if end < start {
            return &[];
        }
        &self.bytes[start - 1..end]
    }

    /// Suffix starting at 1-indexed position `pos`, sentinel included.
    ///
    /// `len() + 1` yields the empty suffix. Panics if `pos` is 0 or larger
    /// than that.
    pub fn suffix(&self, pos: usize) -> &[u8] {
        &self.bytes[pos - 1..]
    }

    /// Length including the sentinel (the `m` of the construction).
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; a text holds at least its sentinel.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The terminating sentinel byte.
    #[inline]
    pub fn sentinel(&self) -> u8 {
        self.sentinel
    }

    /// Whole buffer, sentinel included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({:?})", String::from_utf8_lossy(&self.bytes))
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_sentinel_and_indexes_from_one() {
        let text = Text::new(b"abc", b'$').unwrap();
        assert_eq!(text.len(), 4);
        assert_eq!(text.at(1), b'a');
        assert_eq!(text.at(4), b'$');
        assert_eq!(text.get(0), None);
        assert_eq!(text.get(5), None);
        assert_eq!(text.slice(2, 3), b"bc");
        assert_eq!(text.slice(3, 2), b"");
        assert_eq!(text.suffix(3), b"c$");
    }

    #[test]
    #[should_panic]
    fn slice_from_position_zero_panics() {
        let text = Text::new(b"abc", b'$').unwrap();
        let _ = text.slice(0, 2);
    }

    #[test]
    #[should_panic]
    fn suffix_past_the_end_panics() {
        let text = Text::new(b"abc", b'$').unwrap();
        assert_eq!(text.suffix(5), b"");
        let _ = text.suffix(6);
    }

    #[test]
    fn rejects_sentinel_inside_input() {
        let err = Text::new(b"ab$c", b'$').unwrap_err();
        assert_eq!(
            err,
            TextError::SentinelInInput {
                sentinel: '$',
                position: 3
            }
        );
    }

    #[test]
    fn empty_input_is_just_the_sentinel() {
        let text = Text::new(b"", b'#').unwrap();
        assert_eq!(text.len(), 1);
        assert_eq!(text.sentinel(), b'#');
        assert!(!text.is_empty());
    }

    #[test]
    fn pre_terminated_buffers() {
        let text = Text::from_terminated(b"banana$".to_vec()).unwrap();
        assert_eq!(text.sentinel(), b'$');
        assert_eq!(text.len(), 7);

        assert!(Text::from_terminated(Vec::new()).is_err());
        assert!(Text::from_terminated(b"a$a".to_vec()).is_err());
    }
}
