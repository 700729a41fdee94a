//! Terminal text measurement and truncation.
//!
//! One forward pass over the input, in four stages:
//!
//! ```text
//! source ──► escape scanner ──► cluster builder ──► width classifier ──► accumulator
//!            (ansi.rs)          (cluster.rs)        (width.rs)           (truncate.rs)
//! ```
//!
//! # Capabilities
//!
//! - **Width calculation**: terminal cell width for any Unicode text
//! - **ANSI awareness**: CSI, OSC, DCS and two-character escapes are one invisible unit
//! - **Emoji sequences**: ZWJ families, skin tones, flags and keycaps measured once
//! - **Truncation**: cut points always fall between rendered units, with room
//!   reserved for an ellipsis
//! - **Any encoding**: offsets are reported in the input's own code units
//!
//! # Implementation
//!
//! Widths come from Unicode 17.0 range tables (East Asian Width, general
//! category Mark, emoji properties) searched by binary search.

mod ansi;
mod cluster;
mod source;
mod tables;
mod truncate;
mod width;

pub use ansi::escape_end;
pub use cluster::{Units, units};
pub use source::{CodePoint, Source};
pub use truncate::{measure_and_truncate, string_width, string_width_with, truncate};
pub use width::{CharClass, char_class, char_width};
