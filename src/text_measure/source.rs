//! Code point streams over the supported input encodings.
//!
//! The scanner never indexes text directly. It asks a [`Source`] to decode
//! the code point at an offset and advances by the reported length, so
//! every offset it produces is in the source's native code units:
//! - `str`: UTF-8 bytes (always valid)
//! - `[u8]`: bytes that may not be valid UTF-8
//! - `[u16]`: UTF-16 code units, possibly with unpaired surrogates

/// A decoded code point, or an encoding error occupying some code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePoint {
    Valid(char),
    /// An ill-formed sequence. `raw` is the first offending code unit.
    Invalid { raw: u32 },
}

impl CodePoint {
    #[inline]
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Valid(c) => Some(c),
            Self::Invalid { .. } => None,
        }
    }
}

/// Text that can be decoded one code point at a time.
pub trait Source {
    /// Length in code units.
    fn len(&self) -> usize;

    /// Decode the code point starting at `offset`.
    ///
    /// Returns the code point and the number of code units it spans (at
    /// least 1), or `None` at or past the end.
    fn decode(&self, offset: usize) -> Option<(CodePoint, usize)>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Source for str {
    #[inline]
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline]
    fn decode(&self, offset: usize) -> Option<(CodePoint, usize)> {
        let c = self.get(offset..)?.chars().next()?;
        Some((CodePoint::Valid(c), c.len_utf8()))
    }
}

impl Source for String {
    #[inline]
    fn len(&self) -> usize {
        String::len(self)
    }

    #[inline]
    fn decode(&self, offset: usize) -> Option<(CodePoint, usize)> {
        self.as_str().decode(offset)
    }
}

impl Source for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn decode(&self, offset: usize) -> Option<(CodePoint, usize)> {
        let rest = self.get(offset..)?;
        let first = *rest.first()?;
        if first < 0x80 {
            return Some((CodePoint::Valid(char::from(first)), 1));
        }

        let window = &rest[..rest.len().min(4)];
        let valid = match std::str::from_utf8(window) {
            Ok(s) => s,
            Err(e) => match std::str::from_utf8(&window[..e.valid_up_to()]) {
                Ok(s) if !s.is_empty() => s,
                // Nothing decodes here: skip the maximal ill-formed prefix.
                _ => {
                    let len = e.error_len().unwrap_or(window.len()).max(1);
                    return Some((CodePoint::Invalid { raw: u32::from(first) }, len));
                }
            },
        };

        let c = valid.chars().next()?;
        Some((CodePoint::Valid(c), c.len_utf8()))
    }
}

impl Source for [u16] {
    #[inline]
    fn len(&self) -> usize {
        <[u16]>::len(self)
    }

    fn decode(&self, offset: usize) -> Option<(CodePoint, usize)> {
        let unit = *self.get(offset)?;
        match unit {
            0xD800..=0xDBFF => match self.get(offset + 1) {
                Some(&low @ 0xDC00..=0xDFFF) => {
                    let scalar = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                    Some(char::from_u32(scalar).map_or(
                        (CodePoint::Invalid { raw: u32::from(unit) }, 1),
                        |c| (CodePoint::Valid(c), 2),
                    ))
                }
                _ => Some((CodePoint::Invalid { raw: u32::from(unit) }, 1)),
            },
            0xDC00..=0xDFFF => Some((CodePoint::Invalid { raw: u32::from(unit) }, 1)),
            _ => char::from_u32(u32::from(unit)).map(|c| (CodePoint::Valid(c), 1)),
        }
    }
}

/// Decode the code point at `offset` and return it as a `char`, if valid.
#[inline]
pub(super) fn char_at<S: Source + ?Sized>(src: &S, offset: usize) -> Option<(char, usize)> {
    let (cp, len) = src.decode(offset)?;
    cp.as_char().map(|c| (c, len))
}
