use std::cmp::{max, min};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of terminal columns `text` occupies.
pub(crate) fn visible_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Split `text` into the widest prefix that fits `width` columns and the rest.
///
/// Always consumes at least one character so wrapping cannot stall on a
/// character wider than the column.
pub(crate) fn split_at_width(text: &str, width: usize) -> (&str, &str) {
    let mut cols = 0usize;
    for (idx, ch) in text.char_indices() {
        let ch_cols = UnicodeWidthChar::width(ch).unwrap_or(0);
        if idx > 0 && cols + ch_cols > width {
            return text.split_at(idx);
        }
        cols += ch_cols;
    }
    (text, "")
}

/// Compute per-column content widths for `headers` over all `rows`.
///
/// Each width starts at `max(min_width, header width)`, grows to the widest
/// cell seen in the column, and is finally clamped to `max_width`. Rows
/// shorter than the header count leave their trailing columns untouched;
/// cells beyond the header count are ignored.
pub(crate) fn compute_widths<H, R, C>(
    headers: &[H],
    rows: &[R],
    min_width: usize,
    max_width: usize,
) -> Vec<usize>
where
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|header| max(min_width, visible_width(header.as_ref())))
        .collect();

    for row in rows {
        for (cell, width) in row.as_ref().iter().zip(widths.iter_mut()) {
            *width = max(*width, visible_width(cell.as_ref()));
        }
    }

    for width in widths.iter_mut() {
        *width = min(*width, max_width);
    }

    widths
}
