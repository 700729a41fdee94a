//! ANSI escape sequence recognition.
//!
//! Finds where an escape sequence starting at a given offset ends, so the
//! whole sequence can be measured as one (normally invisible) unit.
//! Handles:
//! - CSI sequences: `ESC [` or `U+009B`, parameters, intermediates, final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` or `U+009D` ... BEL, ST (`ESC \`) or `U+009C`
//! - DCS/SOS/PM/APC sequences: `ESC P`/`ESC X`/`ESC ^`/`ESC _` ... ST
//! - Two-character and nF sequences: `ESC`, intermediates (0x20-0x2F), final (0x30-0x7E)
//!
//! Incomplete or malformed sequences are not matches. The scanner then
//! falls back to measuring `ESC` as an ordinary control character, which
//! guarantees forward progress on any input.

use super::source::{Source, char_at};

const ESC: char = '\x1B';
const BEL: char = '\x07';
const C1_CSI: char = '\u{9B}';
const C1_ST: char = '\u{9C}';
const C1_OSC: char = '\u{9D}';

/// Return the end offset of the escape sequence starting at `start`, if any.
pub fn escape_end<S: Source + ?Sized>(src: &S, start: usize) -> Option<usize> {
    let (first, len) = char_at(src, start)?;
    let next = start + len;

    match first {
        ESC => {}
        C1_CSI => return skip_csi(src, next),
        C1_OSC => return skip_string_terminated(src, next, true),
        _ => return None,
    }

    let (kind, len) = char_at(src, next)?;
    let after = next + len;
    match kind {
        '[' => skip_csi(src, after),
        ']' => skip_string_terminated(src, after, true),
        'P' | 'X' | '^' | '_' => skip_string_terminated(src, after, false),
        '\x20'..='\x2F' => skip_nf(src, after),
        '\x30'..='\x7E' => Some(after),
        _ => None,
    }
}

/// Skip a CSI body. `pos` is just past the introducer.
///
/// Parameter bytes (0x30-0x3F) may not follow intermediate bytes (0x20-0x2F).
fn skip_csi<S: Source + ?Sized>(src: &S, mut pos: usize) -> Option<usize> {
    let mut intermediates = false;
    loop {
        let (c, len) = char_at(src, pos)?;
        pos += len;
        match c {
            '\x30'..='\x3F' if !intermediates => {}
            '\x20'..='\x2F' => intermediates = true,
            '\x40'..='\x7E' => return Some(pos),
            _ => return None,
        }
    }
}

/// Skip a string-terminated body (OSC, DCS, SOS, PM, APC).
///
/// Any control character other than a terminator aborts the sequence, so a
/// scan never runs past the next place another sequence could start.
fn skip_string_terminated<S: Source + ?Sized>(src: &S, mut pos: usize, bel: bool) -> Option<usize> {
    loop {
        let (c, len) = char_at(src, pos)?;
        pos += len;
        match c {
            BEL if bel => return Some(pos),
            C1_ST => return Some(pos),
            ESC => {
                let (c, len) = char_at(src, pos)?;
                return (c == '\\').then_some(pos + len);
            }
            c if c.is_control() => return None,
            _ => {}
        }
    }
}

/// Skip an nF sequence: intermediates, then a final byte.
fn skip_nf<S: Source + ?Sized>(src: &S, mut pos: usize) -> Option<usize> {
    loop {
        let (c, len) = char_at(src, pos)?;
        pos += len;
        match c {
            '\x20'..='\x2F' => {}
            '\x30'..='\x7E' => return Some(pos),
            _ => return None,
        }
    }
}
