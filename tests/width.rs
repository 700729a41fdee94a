//! Width measurement scenarios.

use pretty_assertions::assert_eq;
use spark_text_width::{WidthOptions, string_width, string_width_with};

fn width(s: &str) -> usize {
    string_width(s)
}

// =============================================================================
// Basics
// =============================================================================

#[test]
fn basic_cases() {
    assert_eq!(width("hello"), 5);
    assert_eq!(width("\x1b[31mhello"), 5);
    assert_eq!(width("abcde"), 5);
    assert_eq!(width("古池や"), 6);
    assert_eq!(width("あいうabc"), 9);
    assert_eq!(width("あいう★"), 7);
    assert_eq!(width("±"), 1);
    assert_eq!(width("ノード.js"), 9);
    assert_eq!(width("你好"), 4);
    assert_eq!(width("안녕하세요"), 10);
    assert_eq!(width("A\u{1F200}BC"), 5);
    assert_eq!(width("\x1b[31m\x1b[39m"), 0);
    assert_eq!(width("\u{231A}"), 2);
    assert_eq!(width("\u{2194}\u{FE0F}"), 2);
    assert_eq!(width("\u{1F469}"), 2);
    assert_eq!(width("\u{1F469}\u{1F3FF}"), 2);
    assert_eq!(width("\u{845B}\u{E0100}"), 2);
    assert_eq!(width("ปฏัก"), 3);
    assert_eq!(width("_\u{0E34}"), 1);
}

#[test]
fn hyperlinks_are_invisible() {
    assert_eq!(width("\x1b]8;;https://github.com\x07Click\x1b]8;;\x07"), 5);
    assert_eq!(width("\x1b]8;;https://github.com\x1b\\Click\x1b]8;;\x1b\\"), 5);
}

#[test]
fn empty_string() {
    assert_eq!(width(""), 0);
}

// =============================================================================
// Control characters
// =============================================================================

#[test]
fn control_characters() {
    for c in [0u32, 31, 127, 134, 159] {
        let s = char::from_u32(c).map(String::from).unwrap_or_default();
        assert_eq!(width(&s), 0, "U+{c:04X}");
    }
    assert_eq!(width("\x1b"), 0);
}

#[test]
fn control_width_override() {
    let options = WidthOptions {
        control_width: Some(1),
        ..WidthOptions::default()
    };
    assert_eq!(string_width_with("\x00\x01\x02\x03", &options), 4);
    // Recognized escapes are still escapes.
    assert_eq!(string_width_with("\x1b[31mhi", &options), 2);
    // A lone ESC is a control character.
    assert_eq!(string_width_with("\x1b", &options), 1);
}

#[test]
fn tab_width() {
    assert_eq!(width("a\tb"), 2);
    let options = WidthOptions {
        tab_width: Some(4),
        ..WidthOptions::default()
    };
    assert_eq!(string_width_with("a\tb", &options), 6);
}

#[test]
fn ansi_width_override() {
    let options = WidthOptions {
        ansi_width: Some(1),
        ..WidthOptions::default()
    };
    assert_eq!(string_width_with("\x1b[31mhello\x1b[0m", &options), 7);
}

// =============================================================================
// Combining marks and emoji
// =============================================================================

#[test]
fn combining_characters() {
    assert_eq!(width("x\u{0300}"), 1);
    assert_eq!(width("cafe\u{0301}"), 4);
}

#[test]
fn emoji_characters() {
    assert_eq!(width("👶"), 2);
    assert_eq!(width("👶🏽"), 2);
    assert_eq!(width("👩‍👩‍👦‍👦"), 2);
    assert_eq!(width("👨‍❤️‍💋‍👨"), 2);

    assert_eq!(width(&"👶".repeat(2)), 4);
    assert_eq!(width(&"👶🏽".repeat(2)), 4);
    assert_eq!(width(&"👩‍👩‍👦‍👦".repeat(2)), 4);
    assert_eq!(width(&"👨‍❤️‍💋‍👨".repeat(2)), 4);
}

#[test]
fn flags_and_keycaps() {
    assert_eq!(width("🇺🇸"), 2);
    assert_eq!(width("🇺🇸🇧🇷"), 4);
    assert_eq!(width("#\u{FE0F}\u{20E3}"), 2);
    assert_eq!(width("🏴\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}"), 2);
}

#[test]
fn emoji_width_override() {
    let options = WidthOptions {
        emoji_width: Some(1),
        ..WidthOptions::default()
    };
    assert_eq!(string_width_with("👩‍👩‍👦‍👦👶🏽", &options), 2);
}

// =============================================================================
// Symbols
// =============================================================================

#[test]
fn text_presentation_symbols() {
    let symbols = [
        "…", "\u{2770}", "\u{2771}", "\u{21a9}", "\u{2193}", "\u{21F5}", "\u{2937}", "\u{27A4}",
        "\u{2190}", "\u{21d0}", "\u{2194}", "\u{21d4}", "\u{21ce}", "\u{27f7}", "\u{2192}",
        "\u{21d2}", "\u{21e8}", "\u{2191}", "\u{21C5}", "\u{2197}", "\u{21cb}", "\u{21cc}",
        "\u{21c6}", "\u{21c4}", "\u{2217}", "✔", "\u{2014}", "\u{2022}", "\u{2026}", "\u{2013}",
        "\u{2709}", "\u{2261}", "\u{2691}", "\u{2690}", "\u{22EF}", "\u{226A}", "\u{226B}",
        "\u{270E}", "\u{00a0}", "\u{2009}", "\u{200A}", "\u{274F}", "\u{2750}", "\u{26a0}",
        "\u{200b}",
    ];
    for s in symbols {
        assert_eq!(width(s), 1, "{s:?}");
    }
}

#[test]
fn japanese_half_width() {
    assert_eq!(width("ﾊﾞ"), 2);
    assert_eq!(width("ﾊﾟ"), 2);
}

// =============================================================================
// East Asian width options
// =============================================================================

#[test]
fn ambiguous_as_wide() {
    let options = WidthOptions {
        ambiguous_is_narrow: Some(false),
        ..WidthOptions::default()
    };
    assert_eq!(string_width_with("±★", &options), 4);
    assert_eq!(string_width_with("abc", &options), 3);
    // Private use stays regular.
    assert_eq!(string_width_with("\u{E000}", &options), 1);
}

#[test]
fn wide_width_covers_full_width() {
    let options = WidthOptions {
        wide_width: Some(3),
        ..WidthOptions::default()
    };
    assert_eq!(string_width_with("古", &options), 3);
    assert_eq!(string_width_with("Ａ", &options), 3);
}

#[test]
fn full_width_can_be_set_apart() {
    let options = WidthOptions {
        full_width_width: Some(1),
        ..WidthOptions::default()
    };
    assert_eq!(string_width_with("古Ａ", &options), 3);

    let options = WidthOptions {
        wide_width: Some(4),
        full_width_width: Some(1),
        ..WidthOptions::default()
    };
    assert_eq!(string_width_with("古Ａ", &options), 5);
}

#[test]
fn negative_override_clamps() {
    let options = WidthOptions {
        wide_width: Some(-2),
        ..WidthOptions::default()
    };
    assert_eq!(string_width_with("古池a", &options), 1);
}

// =============================================================================
// Other encodings
// =============================================================================

#[test]
fn utf16_input() {
    let units: Vec<u16> = "\x1b[31m古池や👶".encode_utf16().collect();
    assert_eq!(string_width_with(units.as_slice(), &WidthOptions::default()), 8);

    let lone: &[u16] = &[0xD83D, 0x0061];
    assert_eq!(string_width_with(lone, &WidthOptions::default()), 2);
}

#[test]
fn invalid_utf8_input() {
    let bytes: &[u8] = b"ab\xFF\xFEcd";
    assert_eq!(string_width_with(bytes, &WidthOptions::default()), 6);
    // Stray C1 byte.
    assert_eq!(string_width_with(&b"a\x9bb"[..], &WidthOptions::default()), 2);
}
