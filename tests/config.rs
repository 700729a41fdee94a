//! Loading options from host configuration.

use pretty_assertions::assert_eq;
use serde_json::json;
use spark_text_width::{TruncationOptions, WidthOptions, Widths, measure_and_truncate, string_width_with};

fn widths(value: serde_json::Value) -> Widths {
    serde_json::from_value::<WidthOptions>(value).unwrap().resolve()
}

#[test]
fn empty_object_is_default() {
    assert_eq!(widths(json!({})), Widths::default());
}

#[test]
fn camel_case_names() {
    let w = widths(json!({
        "ansiWidth": 1,
        "controlWidth": 1,
        "ambiguousIsNarrow": false,
        "emojiWidth": 3,
        "wideWidth": 4,
    }));
    assert_eq!(w.ansi, 1);
    assert_eq!(w.control, 1);
    assert_eq!(w.tab, 1);
    assert_eq!(w.ambiguous, 4);
    assert_eq!(w.emoji, 3);
    assert_eq!(w.wide, 4);
    assert_eq!(w.full_width, 4);
}

#[test]
fn width_aliases() {
    let w = widths(json!({ "fullWidth": 3, "narrowWidth": 2 }));
    assert_eq!(w.wide, 3);
    assert_eq!(w.full_width, 3);
    assert_eq!(w.regular, 2);
    assert_eq!(w.ambiguous, 2);

    let options: WidthOptions = serde_json::from_value(json!({ "fullWidth": 3 })).unwrap();
    assert_eq!(string_width_with("古Ａ", &options), 6);

    let w = widths(json!({ "fullWidthWidth": 5, "regularWidth": 0 }));
    assert_eq!(w.full_width, 5);
    assert_eq!(w.regular, 0);
}

#[test]
fn negative_values_clamp() {
    let w = widths(json!({ "tabWidth": -8, "ambiguousWidth": -1 }));
    assert_eq!(w.tab, 0);
    assert_eq!(w.ambiguous, 0);
}

#[test]
fn wrong_type_is_rejected() {
    assert!(serde_json::from_value::<WidthOptions>(json!({ "controlWidth": "wide" })).is_err());
}

#[test]
fn truncation_options() {
    let t: TruncationOptions = serde_json::from_value(json!({ "limit": 3, "ellipsis": "…" })).unwrap();
    assert_eq!(t, TruncationOptions::with_ellipsis(3, "…"));

    let t: TruncationOptions = serde_json::from_value(json!({ "ellipsis": "..." })).unwrap();
    assert_eq!(t.limit, None);

    let t: TruncationOptions = serde_json::from_value(json!({ "limit": 4, "ellipsis": "[more]", "ellipsisWidth": 1 })).unwrap();
    assert_eq!(t.ellipsis_width, Some(1));
}

#[test]
fn serialized_names_round_trip() {
    let options = WidthOptions {
        ambiguous_is_narrow: Some(false),
        full_width_width: Some(3),
        ..WidthOptions::default()
    };
    let value = serde_json::to_value(&options).unwrap();
    assert_eq!(value["ambiguousIsNarrow"], json!(false));
    assert_eq!(value["fullWidthWidth"], json!(3));
    assert_eq!(serde_json::from_value::<WidthOptions>(value).unwrap(), options);
}

#[test]
fn loaded_options_drive_measurement() {
    let truncation: TruncationOptions = serde_json::from_value(json!({ "limit": 4, "ellipsis": "…" })).unwrap();
    let options: WidthOptions = serde_json::from_value(json!({ "ambiguousIsNarrow": false })).unwrap();

    // "…" is ambiguous, so it reserves two columns here.
    let m = measure_and_truncate("hello", &truncation, &options);
    assert_eq!((m.width, m.index, m.truncated, m.ellipsed), (2, 2, true, true));
}
