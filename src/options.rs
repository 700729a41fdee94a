//! Truncation and width configuration.
//!
//! Both option structs deserialize from the camelCase names hosts already
//! use (`limit`, `ellipsis`, `controlWidth`, `ambiguousIsNarrow`, ...), so
//! they can be loaded straight from a JSON or TOML config section.
//!
//! Options are resolved once per call into [`Widths`], a plain struct of
//! non-negative widths that the scanner reads by reference.

use serde::{Deserialize, Serialize};

const DEFAULT_REGULAR_WIDTH: usize = 1;
const DEFAULT_WIDE_WIDTH: usize = 2;
const DEFAULT_EMOJI_WIDTH: usize = 2;

// =============================================================================
// TruncationOptions
// =============================================================================

/// Where to cut and what marker the caller will append.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TruncationOptions {
    /// Maximum display width. `None` never truncates.
    pub limit: Option<usize>,
    /// Marker appended by the caller when the result is ellipsed.
    pub ellipsis: String,
    /// Precomputed width of `ellipsis`. Measured with the same widths when unset.
    pub ellipsis_width: Option<usize>,
}

impl TruncationOptions {
    /// Truncate at `limit` columns with no marker.
    pub fn limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Truncate at `limit` columns, reserving room for `ellipsis`.
    pub fn with_ellipsis(limit: usize, ellipsis: impl Into<String>) -> Self {
        Self {
            limit: Some(limit),
            ellipsis: ellipsis.into(),
            ellipsis_width: None,
        }
    }
}

// =============================================================================
// WidthOptions
// =============================================================================

/// Per-category width overrides. Unset fields take the built-in defaults.
///
/// Overrides are signed so that a bad config value can be reported and
/// clamped instead of rejected; see [`WidthOptions::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidthOptions {
    pub ansi_width: Option<i64>,
    pub control_width: Option<i64>,
    /// Defaults to the resolved control width.
    pub tab_width: Option<i64>,
    /// Defaults to `true`. Ignored when `ambiguous_width` is set.
    pub ambiguous_is_narrow: Option<bool>,
    pub ambiguous_width: Option<i64>,
    pub emoji_width: Option<i64>,
    /// East Asian Fullwidth only. Defaults to the resolved wide width.
    pub full_width_width: Option<i64>,
    #[serde(alias = "narrowWidth")]
    pub regular_width: Option<i64>,
    /// East Asian Wide and Fullwidth.
    #[serde(alias = "fullWidth")]
    pub wide_width: Option<i64>,
}

impl WidthOptions {
    /// Resolve every override into concrete widths.
    ///
    /// Negative values clamp to zero (with a warning) so the accumulator can
    /// never under-count.
    pub fn resolve(&self) -> Widths {
        let control = resolve_width("controlWidth", self.control_width, 0);
        let regular = resolve_width("regularWidth", self.regular_width, DEFAULT_REGULAR_WIDTH);
        let wide = resolve_width("wideWidth", self.wide_width, DEFAULT_WIDE_WIDTH);

        let ambiguous = match self.ambiguous_width {
            Some(_) => resolve_width("ambiguousWidth", self.ambiguous_width, regular),
            None if self.ambiguous_is_narrow.unwrap_or(true) => regular,
            None => wide,
        };

        Widths {
            ansi: resolve_width("ansiWidth", self.ansi_width, 0),
            control,
            tab: resolve_width("tabWidth", self.tab_width, control),
            ambiguous,
            emoji: resolve_width("emojiWidth", self.emoji_width, DEFAULT_EMOJI_WIDTH),
            full_width: resolve_width("fullWidthWidth", self.full_width_width, wide),
            regular,
            wide,
        }
    }
}

fn resolve_width(option: &'static str, value: Option<i64>, default: usize) -> usize {
    match value {
        None => default,
        Some(v) if v < 0 => {
            tracing::warn!(option, value = v, "negative width override clamped to 0");
            0
        }
        Some(v) => usize::try_from(v).unwrap_or(usize::MAX),
    }
}

// =============================================================================
// Widths
// =============================================================================

/// Fully resolved widths, one per unit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Widths {
    pub ansi: usize,
    pub control: usize,
    pub tab: usize,
    pub ambiguous: usize,
    pub emoji: usize,
    pub full_width: usize,
    pub regular: usize,
    pub wide: usize,
}

impl Default for Widths {
    fn default() -> Self {
        WidthOptions::default().resolve()
    }
}
