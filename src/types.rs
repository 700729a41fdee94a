//! Core types shared by the measurement engine.
//!
//! Everything here is transient: a [`Unit`] or [`Measurement`] is produced
//! by one scan and never outlives it.

// =============================================================================
// Rendered units
// =============================================================================

/// What a rendered unit is, as far as width is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// A recognized ANSI escape sequence (CSI, OSC, DCS, two-character).
    Escape,
    /// A single C0/C1 control character, DEL, tab, or a lone ESC.
    Control,
    /// A base character followed by combining marks, or a run of marks
    /// with no base.
    Combining,
    /// An emoji, possibly spanning many code points (ZWJ, modifiers, flags).
    Emoji,
    /// A single code point with no attached marks.
    Plain,
}

/// One visual glyph (or one invisible escape) of the input.
///
/// `start..end` is in the source's own code units: bytes for `str` and
/// `[u8]`, 16-bit units for `[u16]`. Consecutive units are contiguous and
/// together cover the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub start: usize,
    pub end: usize,
    pub width: usize,
    pub kind: UnitKind,
}

// =============================================================================
// Measurement
// =============================================================================

/// Result of [`measure_and_truncate`](crate::measure_and_truncate).
///
/// - `width`: display width of the kept prefix (the whole input when not truncated)
/// - `index`: end of the kept prefix, in the source's code units
/// - `truncated`: whether the input had to be cut to respect the limit
/// - `ellipsed`: whether the caller should append the ellipsis at `index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measurement {
    pub width: usize,
    pub index: usize,
    pub truncated: bool,
    pub ellipsed: bool,
}
