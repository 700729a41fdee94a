//! # spark-text-width
//!
//! Display width and truncation for fixed-width terminals.
//!
//! Measures how many columns a string occupies once rendered (ANSI escapes,
//! East Asian wide glyphs, emoji sequences and combining marks included)
//! and, given a column limit, finds the exact offset to cut at so the kept
//! prefix plus an optional ellipsis fits.
//!
//! ```
//! use spark_text_width::{TruncationOptions, WidthOptions, measure_and_truncate, string_width};
//!
//! assert_eq!(string_width("\x1b[31mhello"), 5);
//! assert_eq!(string_width("古池や"), 6);
//!
//! let m = measure_and_truncate("hello", &TruncationOptions::with_ellipsis(3, "…"), &WidthOptions::default());
//! assert_eq!(&"hello"[..m.index], "he");
//! assert!(m.ellipsed);
//! ```
//!
//! ## Modules
//!
//! - [`text_measure`] - Escape scanner, cluster builder, width tables, truncation
//! - [`options`] - Truncation and width configuration
//! - [`types`] - Rendered units and measurement results

pub mod options;
pub mod text_measure;
pub mod types;

pub use options::{TruncationOptions, WidthOptions, Widths};
pub use text_measure::{
    CharClass, CodePoint, Source, Units, char_class, char_width, escape_end,
    measure_and_truncate, string_width, string_width_with, truncate, units,
};
pub use types::{Measurement, Unit, UnitKind};
