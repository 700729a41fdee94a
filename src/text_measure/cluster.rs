//! Grouping code points into rendered units.
//!
//! A rendered unit is what the terminal draws as one glyph (or nothing, for
//! an escape sequence). The builder walks forward with a cursor and never
//! backtracks:
//!
//! 1. A recognized escape sequence is one unit.
//! 2. A control character (including tab and a lone ESC) is one unit.
//! 3. An emoji element, plus every `ZWJ + element` that follows it, is one
//!    unit. An element is a regional indicator pair, an emoji-presentation
//!    character, a modifier base with its optional skin tone, or a
//!    text-default emoji promoted by VS16 (with an optional keycap).
//! 4. Anything else is one code point.
//!
//! Combining marks, variation selectors and joiners that follow a unit are
//! absorbed into it at zero width.

use crate::options::Widths;
use crate::types::{Unit, UnitKind};

use super::ansi::escape_end;
use super::source::{CodePoint, Source, char_at};
use super::width::{CharClass, KEYCAP, VS16, ZWJ, char_class, class_width};

/// Iterator over the rendered units of a source.
#[derive(Debug)]
pub struct Units<'a, S: ?Sized> {
    src: &'a S,
    widths: &'a Widths,
    pos: usize,
}

/// Split `src` into rendered units, each measured with `widths`.
pub fn units<'a, S: Source + ?Sized>(src: &'a S, widths: &'a Widths) -> Units<'a, S> {
    Units { src, widths, pos: 0 }
}

impl<S: Source + ?Sized> Iterator for Units<'_, S> {
    type Item = Unit;

    fn next(&mut self) -> Option<Unit> {
        let unit = next_unit(self.src, self.pos, self.widths)?;
        self.pos = unit.end;
        Some(unit)
    }
}

/// Build the unit starting at `start`. Always spans at least one code point.
fn next_unit<S: Source + ?Sized>(src: &S, start: usize, widths: &Widths) -> Option<Unit> {
    let (cp, len) = src.decode(start)?;
    let next = start + len;

    let c = match cp {
        CodePoint::Valid(c) => c,
        // Stray C1 bytes in raw byte input are controls; any other
        // ill-formed sequence stands in for one regular character.
        CodePoint::Invalid { raw: 0x80..=0x9F } => {
            return Some(unit(start, next, widths.control, UnitKind::Control));
        }
        CodePoint::Invalid { .. } => {
            return Some(unit(start, next, widths.regular, UnitKind::Plain));
        }
    };

    if matches!(c, '\x1B' | '\u{9B}' | '\u{9D}') {
        if let Some(end) = escape_end(src, start) {
            return Some(unit(start, end, widths.ansi, UnitKind::Escape));
        }
    }

    if c == '\t' {
        return Some(unit(start, next, widths.tab, UnitKind::Control));
    }

    let class = char_class(c);
    if class.contains(CharClass::CONTROL) {
        return Some(unit(start, next, widths.control, UnitKind::Control));
    }

    if let Some(end) = emoji_element_end(src, start) {
        let end = extend_marks(src, chain_joined(src, end));
        return Some(unit(start, end, widths.emoji, UnitKind::Emoji));
    }

    let end = extend_marks(src, next);
    if class.is_zero_width() {
        return Some(unit(start, end, 0, UnitKind::Combining));
    }

    let kind = if end > next {
        UnitKind::Combining
    } else {
        UnitKind::Plain
    };
    Some(unit(start, end, class_width(class, widths), kind))
}

#[inline]
fn unit(start: usize, end: usize, width: usize, kind: UnitKind) -> Unit {
    Unit {
        start,
        end,
        width,
        kind,
    }
}

/// If an emoji element starts at `pos`, return where it ends.
fn emoji_element_end<S: Source + ?Sized>(src: &S, pos: usize) -> Option<usize> {
    let (c, len) = char_at(src, pos)?;
    let class = char_class(c);
    let mut end = pos + len;

    if class.contains(CharClass::REGIONAL_INDICATOR) {
        if let Some((second, len)) = char_at(src, end) {
            if char_class(second).contains(CharClass::REGIONAL_INDICATOR) {
                return Some(end + len);
            }
        }
    }

    let following = char_at(src, end);
    let presented = matches!(following, Some((VS16, _)));
    let is_element = class.intersects(CharClass::EMOJI_PRESENTATION | CharClass::EMOJI_MODIFIER_BASE)
        || (class.contains(CharClass::EMOJI) && presented);
    if !is_element {
        return None;
    }

    if let Some((VS16, len)) = following {
        end += len;
        if let Some((KEYCAP, len)) = char_at(src, end) {
            end += len;
        }
    }

    if class.contains(CharClass::EMOJI_MODIFIER_BASE) {
        if let Some((modifier, len)) = char_at(src, end) {
            if char_class(modifier).contains(CharClass::EMOJI_MODIFIER) {
                end += len;
            }
        }
    }

    // Subdivision flags: black flag + tag letters + cancel tag.
    while let Some((tag, len)) = char_at(src, end) {
        if !char_class(tag).contains(CharClass::TAG) {
            break;
        }
        end += len;
    }

    Some(end)
}

/// Absorb every `ZWJ + element` continuation after `end`.
fn chain_joined<S: Source + ?Sized>(src: &S, mut end: usize) -> usize {
    while let Some((ZWJ, len)) = char_at(src, end) {
        match emoji_element_end(src, end + len) {
            Some(next) => end = next,
            None => break,
        }
    }
    end
}

/// Absorb combining marks, variation selectors and joiners after `end`.
fn extend_marks<S: Source + ?Sized>(src: &S, mut end: usize) -> usize {
    while let Some((c, len)) = char_at(src, end) {
        if !char_class(c).is_zero_width() {
            break;
        }
        end += len;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_measure::char_width;

    fn split(s: &str) -> Vec<(&str, usize, UnitKind)> {
        let widths = Widths::default();
        units(s, &widths)
            .map(|u| (&s[u.start..u.end], u.width, u.kind))
            .collect()
    }

    #[test]
    fn empty() {
        assert!(split("").is_empty());
    }

    #[test]
    fn plain_ascii() {
        assert_eq!(
            split("ab"),
            vec![("a", 1, UnitKind::Plain), ("b", 1, UnitKind::Plain)]
        );
    }

    #[test]
    fn escape_is_one_unit() {
        assert_eq!(
            split("\x1b[31mx"),
            vec![("\x1b[31m", 0, UnitKind::Escape), ("x", 1, UnitKind::Plain)]
        );
    }

    #[test]
    fn malformed_escape_falls_back() {
        assert_eq!(
            split("\x1b[3"),
            vec![
                ("\x1b", 0, UnitKind::Control),
                ("[", 1, UnitKind::Plain),
                ("3", 1, UnitKind::Plain),
            ]
        );
    }

    #[test]
    fn controls_are_single_units() {
        assert_eq!(
            split("\x00\x01"),
            vec![("\x00", 0, UnitKind::Control), ("\x01", 0, UnitKind::Control)]
        );
        assert_eq!(split("\t"), vec![("\t", 0, UnitKind::Control)]);
    }

    #[test]
    fn combining_marks_attach_to_base() {
        assert_eq!(split("x\u{0300}"), vec![("x\u{0300}", 1, UnitKind::Combining)]);
        assert_eq!(
            split("ปฏัก"),
            vec![
                ("ป", 1, UnitKind::Plain),
                ("ฏั", 1, UnitKind::Combining),
                ("ก", 1, UnitKind::Plain),
            ]
        );
    }

    #[test]
    fn leading_marks_are_zero_width() {
        assert_eq!(split("\u{0301}\u{0302}a")[0], ("\u{0301}\u{0302}", 0, UnitKind::Combining));
    }

    #[test]
    fn ideographic_variation_selector() {
        assert_eq!(split("\u{845B}\u{E0100}"), vec![("\u{845B}\u{E0100}", 2, UnitKind::Combining)]);
    }

    #[test]
    fn halfwidth_voiced_mark_is_separate() {
        assert_eq!(
            split("ﾊﾞ"),
            vec![("ﾊ", 1, UnitKind::Plain), ("ﾞ", 1, UnitKind::Plain)]
        );
    }

    #[test]
    fn zwj_family() {
        let family = "👩\u{200D}👩\u{200D}👦\u{200D}👦";
        assert_eq!(split(family), vec![(family, 2, UnitKind::Emoji)]);
    }

    #[test]
    fn zwj_with_vs16_element() {
        let kiss = "👨\u{200D}❤\u{FE0F}\u{200D}💋\u{200D}👨";
        assert_eq!(split(kiss), vec![(kiss, 2, UnitKind::Emoji)]);
    }

    #[test]
    fn skin_tone() {
        assert_eq!(split("👶🏽"), vec![("👶🏽", 2, UnitKind::Emoji)]);
        // Not a modifier base: the skin tone stands alone.
        assert_eq!(
            split("😀🏽"),
            vec![("😀", 2, UnitKind::Emoji), ("🏽", 2, UnitKind::Emoji)]
        );
    }

    #[test]
    fn flags_pair_left_to_right() {
        assert_eq!(
            split("🇺🇸🇧🇷"),
            vec![("🇺🇸", 2, UnitKind::Emoji), ("🇧🇷", 2, UnitKind::Emoji)]
        );
        assert_eq!(split("🇺"), vec![("🇺", 2, UnitKind::Emoji)]);
    }

    #[test]
    fn subdivision_flag() {
        let england = "🏴\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}";
        assert_eq!(split(england), vec![(england, 2, UnitKind::Emoji)]);
    }

    #[test]
    fn keycap() {
        assert_eq!(split("#\u{FE0F}\u{20E3}"), vec![("#\u{FE0F}\u{20E3}", 2, UnitKind::Emoji)]);
        // Without VS16 the keycap is just a combining mark on '1'.
        assert_eq!(split("1\u{20E3}"), vec![("1\u{20E3}", 1, UnitKind::Combining)]);
    }

    #[test]
    fn vs16_promotes_text_emoji() {
        assert_eq!(split("\u{2194}\u{FE0F}"), vec![("\u{2194}\u{FE0F}", 2, UnitKind::Emoji)]);
        assert_eq!(split("\u{2194}"), vec![("\u{2194}", 1, UnitKind::Plain)]);
    }

    #[test]
    fn dangling_zwj_is_absorbed() {
        assert_eq!(split("👶\u{200D}a")[0], ("👶\u{200D}", 2, UnitKind::Emoji));
    }

    #[test]
    fn units_cover_input() {
        let s = "\x1b[1mhé\u{0301}llo 古池や 👩\u{200D}👩\u{200D}👦 🇯🇵\x1b[0m\x07";
        let widths = Widths::default();
        let mut pos = 0;
        for u in units(s, &widths) {
            assert_eq!(u.start, pos);
            assert!(u.end > u.start);
            pos = u.end;
        }
        assert_eq!(pos, s.len());
    }

    #[test]
    fn single_code_point_matches_char_width() {
        let widths = Widths::default();
        for c in [
            'a', '#', '古', 'Ａ', '±', '\u{E000}', '\u{2194}', '\u{261D}', '\u{270C}', '👶', '😀',
            '\u{1F1FA}', '\u{1F3FD}', '\u{0301}', ZWJ, '\x01', '\t', '\u{85}',
        ] {
            let s = c.to_string();
            let unit_width: usize = units(s.as_str(), &widths).map(|u| u.width).sum();
            assert_eq!(unit_width, char_width(c, &widths), "{c:?}");
        }
    }

    #[test]
    fn invalid_bytes() {
        let widths = Widths::default();
        let bytes: &[u8] = &[b'a', 0xFF, 0x85, b'b'];
        let got: Vec<_> = units(bytes, &widths).map(|u| (u.start, u.end, u.width, u.kind)).collect();
        assert_eq!(
            got,
            vec![
                (0, 1, 1, UnitKind::Plain),
                (1, 2, 1, UnitKind::Plain),
                (2, 3, 0, UnitKind::Control),
                (3, 4, 1, UnitKind::Plain),
            ]
        );
    }

    #[test]
    fn lone_surrogate() {
        let widths = Widths::default();
        let units16: &[u16] = &[0x0061, 0xD800, 0x0062];
        let got: Vec<_> = units(units16, &widths).map(|u| (u.start, u.width)).collect();
        assert_eq!(got, vec![(0, 1), (1, 1), (2, 1)]);
    }
}
