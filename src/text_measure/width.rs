//! Code point classification and width lookup.
//!
//! A code point's [`CharClass`] is the set of Unicode properties the cluster
//! builder and the width rules care about. Each property is a sorted range
//! table searched with a binary search; printable ASCII skips the tables.

use std::cmp::Ordering;

use crate::options::Widths;

use super::tables;

/// Zero-width joiner.
pub(crate) const ZWJ: char = '\u{200D}';
/// Variation selector 16 (emoji presentation).
pub(crate) const VS16: char = '\u{FE0F}';
/// Combining enclosing keycap.
pub(crate) const KEYCAP: char = '\u{20E3}';

bitflags::bitflags! {
    /// Width-relevant Unicode properties of a single code point.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharClass: u16 {
        /// General category Cc (C0, DEL, C1).
        const CONTROL             = 1 << 0;
        /// General category M (Mn, Mc, Me), including variation selectors.
        const MARK                = 1 << 1;
        /// East Asian Width F.
        const FULL_WIDTH          = 1 << 2;
        /// East Asian Width W.
        const WIDE                = 1 << 3;
        /// East Asian Width A.
        const AMBIGUOUS           = 1 << 4;
        const EMOJI               = 1 << 5;
        const EMOJI_PRESENTATION  = 1 << 6;
        const EMOJI_MODIFIER_BASE = 1 << 7;
        /// Fitzpatrick skin tone modifiers.
        const EMOJI_MODIFIER      = 1 << 8;
        const REGIONAL_INDICATOR  = 1 << 9;
        /// Tag characters used by subdivision flags.
        const TAG                 = 1 << 10;
        const JOINER              = 1 << 11;
    }
}

#[inline]
fn in_table(table: &[(u32, u32)], cp: u32) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Classify a single code point.
pub fn char_class(c: char) -> CharClass {
    match c {
        '\0'..='\x1F' | '\x7F' => return CharClass::CONTROL,
        // Keycap bases are Emoji but only render as emoji with VS16.
        '#' | '*' | '0'..='9' => return CharClass::EMOJI,
        ' '..='~' => return CharClass::empty(),
        '\u{80}'..='\u{9F}' => return CharClass::CONTROL,
        _ => {}
    }

    let cp = c as u32;
    let mut class = CharClass::empty();

    match cp {
        0x1F1E6..=0x1F1FF => class |= CharClass::REGIONAL_INDICATOR,
        0x1F3FB..=0x1F3FF => class |= CharClass::EMOJI_MODIFIER,
        0xE0020..=0xE007F => class |= CharClass::TAG,
        0x200D => class |= CharClass::JOINER,
        _ => {}
    }

    if in_table(tables::MARK, cp) {
        class |= CharClass::MARK;
    }

    if in_table(tables::FULL_WIDTH, cp) {
        class |= CharClass::FULL_WIDTH;
    } else if in_table(tables::WIDE, cp) {
        class |= CharClass::WIDE;
    } else if in_table(tables::AMBIGUOUS, cp) {
        class |= CharClass::AMBIGUOUS;
    }

    if in_table(tables::EMOJI, cp) {
        class |= CharClass::EMOJI;
        if in_table(tables::EMOJI_PRESENTATION, cp) {
            class |= CharClass::EMOJI_PRESENTATION;
        }
        if in_table(tables::EMOJI_MODIFIER_BASE, cp) {
            class |= CharClass::EMOJI_MODIFIER_BASE;
        }
    }

    class
}

impl CharClass {
    /// Whether the code point attaches to the preceding glyph without
    /// advancing the cursor.
    #[inline]
    pub fn is_zero_width(self) -> bool {
        self.intersects(CharClass::MARK | CharClass::JOINER)
    }
}

/// Display width of a code point measured on its own, outside any cluster.
///
/// Agrees with [`units`](super::units) over a one-code-point input:
/// - control characters and tab: configured control/tab width
/// - combining marks and the zero-width joiner: 0
/// - emoji-presentation characters and emoji modifier bases: configured emoji width
/// - East Asian F / W / A: configured full-width / wide / ambiguous width
/// - everything else, including unassigned and private-use: regular width
pub fn char_width(c: char, widths: &Widths) -> usize {
    if c == '\t' {
        return widths.tab;
    }
    class_width(char_class(c), widths)
}

pub(crate) fn class_width(class: CharClass, widths: &Widths) -> usize {
    if class.contains(CharClass::CONTROL) {
        widths.control
    } else if class.is_zero_width() {
        0
    } else if class.intersects(CharClass::EMOJI_PRESENTATION | CharClass::EMOJI_MODIFIER_BASE) {
        widths.emoji
    } else if class.contains(CharClass::FULL_WIDTH) {
        widths.full_width
    } else if class.contains(CharClass::WIDE) {
        widths.wide
    } else if class.contains(CharClass::AMBIGUOUS) {
        widths.ambiguous
    } else {
        widths.regular
    }
}
