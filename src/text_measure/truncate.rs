//! Width accumulation and truncation.
//!
//! Sums unit widths left to right. With a limit, two thresholds are
//! tracked in the same pass:
//! - the *cut*: the first unit boundary where the width would exceed
//!   `limit - ellipsis_width`, i.e. where the kept prefix must end so the
//!   ellipsis still fits after it
//! - the *overflow*: the first unit that would exceed `limit` itself,
//!   which proves truncation is needed at all
//!
//! Zero-width units before the cut (escapes, default-width controls) are
//! always kept, so truncating never drops a color code for free.

use std::borrow::Cow;

use crate::options::{TruncationOptions, WidthOptions, Widths};
use crate::types::Measurement;

use super::cluster::units;
use super::source::Source;

/// Measure `input` and, when `truncation.limit` is set, find where to cut it.
///
/// `index` is in `input`'s code units: bytes for `str`/`[u8]`, 16-bit units
/// for `[u16]`. The ellipsis is never inserted here; append
/// `truncation.ellipsis` at `index` when `ellipsed` is true, or use
/// [`truncate`] for `str` input.
pub fn measure_and_truncate<S: Source + ?Sized>(
    input: &S,
    truncation: &TruncationOptions,
    width_options: &WidthOptions,
) -> Measurement {
    let widths = width_options.resolve();

    let Some(limit) = truncation.limit else {
        return Measurement {
            width: measure(input, &widths),
            index: input.len(),
            truncated: false,
            ellipsed: false,
        };
    };

    let ellipsis_width = match truncation.ellipsis_width {
        Some(w) => w,
        None if truncation.ellipsis.is_empty() => 0,
        None => measure(truncation.ellipsis.as_str(), &widths),
    };
    let cut_limit = limit.saturating_sub(ellipsis_width);

    let mut width: usize = 0;
    let mut cut: Option<(usize, usize)> = None;

    for unit in units(input, &widths) {
        let next = width.saturating_add(unit.width);

        if cut.is_none() && next > cut_limit {
            cut = Some((unit.start, width));
        }

        if next > limit {
            let (index, kept) = cut.unwrap_or((unit.start, width));
            let ellipsed = !truncation.ellipsis.is_empty() && limit >= ellipsis_width;
            tracing::trace!(limit, index, width = kept, ellipsed, "truncated");
            return Measurement {
                width: kept,
                index,
                truncated: true,
                ellipsed,
            };
        }

        width = next;
    }

    Measurement {
        width,
        index: input.len(),
        truncated: false,
        ellipsed: false,
    }
}

/// Total width of `input` under resolved widths, saturating at `usize::MAX`.
pub(crate) fn measure<S: Source + ?Sized>(input: &S, widths: &Widths) -> usize {
    units(input, widths).fold(0, |total, u| total.saturating_add(u.width))
}

/// Display width of a string with default options.
///
/// Correctly handles:
/// - ANSI escape sequences (zero-width)
/// - East Asian wide and fullwidth characters (2 cells)
/// - Emoji sequences (ZWJ, skin tones, flags, keycaps = 2 cells)
/// - Combining marks (zero-width)
/// - Control characters (zero-width)
pub fn string_width(s: &str) -> usize {
    if s.is_ascii() && !s.as_bytes().contains(&0x1B) {
        // Printable ASCII is 1 cell, C0 and DEL are 0.
        return s.bytes().filter(|&b| (0x20..0x7F).contains(&b)).count();
    }
    measure(s, &Widths::default())
}

/// Display width of any source under explicit width options.
pub fn string_width_with<S: Source + ?Sized>(input: &S, width_options: &WidthOptions) -> usize {
    measure(input, &width_options.resolve())
}

/// Truncate `text` to the configured limit, appending the ellipsis when it fits.
///
/// Returns `Cow::Borrowed` when nothing had to be cut, or when the cut needs
/// no ellipsis.
pub fn truncate<'a>(
    text: &'a str,
    truncation: &TruncationOptions,
    width_options: &WidthOptions,
) -> Cow<'a, str> {
    let m = measure_and_truncate(text, truncation, width_options);
    let kept = &text[..m.index];

    if !m.ellipsed {
        return Cow::Borrowed(kept);
    }

    let mut result = String::with_capacity(kept.len() + truncation.ellipsis.len());
    result.push_str(kept);
    result.push_str(&truncation.ellipsis);
    Cow::Owned(result)
}
