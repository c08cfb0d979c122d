//! Column model: converting character offsets into screen columns.
//!
//! A line is a sequence of chars, but the terminal lays it out in cells. Two
//! things make those differ:
//!
//! - **Tabs** jump to the next tab stop, so their width depends on where they
//!   start. A tab at column 0 is 8 cells wide (with the default tab size); a
//!   tab at column 7 is 1 cell wide.
//! - **Wide glyphs** (CJK ideographs, most emoji) occupy two cells.
//!
//! [`advance`] is the single source of truth for this mapping. Every other
//! function here folds it over a prefix, or inverts it for one step.
//!
//! Zero-width and control characters still take one cell: every char the
//! cursor can sit on must have a distinct column.

use unicode_width::UnicodeWidthChar;

/// Tab stop width used when nothing else is configured.
pub const DEFAULT_TAB_SIZE: usize = 8;

/// Number of cells a non-tab char occupies: 2 for wide glyphs, 1 otherwise.
#[inline]
#[must_use]
pub fn display_width(ch: char) -> usize {
    ch.width().map_or(1, |w| w.max(1))
}

/// The column just after `ch` when `ch` starts at `col`.
///
/// A tab advances to the smallest multiple of `tab_size` strictly greater
/// than `col`. A `tab_size` of 0 is treated as 1.
#[inline]
#[must_use]
pub fn advance(col: usize, ch: char, tab_size: usize) -> usize {
    if ch == '\t' {
        let tab = tab_size.max(1);
        (col / tab + 1) * tab
    } else {
        col + display_width(ch)
    }
}

/// Column at which the char at `offset` starts (or the end column when
/// `offset == chars.len()`).
///
/// # Panics
///
/// Panics if `offset > chars.len()`.
#[must_use]
pub fn column_of(chars: &[char], offset: usize, tab_size: usize) -> usize {
    chars[..offset]
        .iter()
        .fold(0, |col, &ch| advance(col, ch, tab_size))
}

/// Step one char back: `col` is the column just after `chars[offset]`, the
/// result is the column where `chars[offset]` starts.
///
/// Tabs have no fixed width, so stepping back over one recomputes from the
/// start of the line. Anything else just subtracts its width.
///
/// # Panics
///
/// Panics if `offset >= chars.len()`.
#[must_use]
pub fn retreat(chars: &[char], offset: usize, col: usize, tab_size: usize) -> usize {
    let ch = chars[offset];
    if ch == '\t' {
        column_of(chars, offset, tab_size)
    } else {
        col - display_width(ch)
    }
}

/// Best-effort placement: the rightmost offset in `0..=limit` whose column
/// does not exceed `target`, together with that column.
///
/// Walks from the start of the line and stops before the first char whose
/// right edge would pass `target`, or at `limit`. A `target` in the middle of
/// a tab or wide glyph lands on the start of that char.
///
/// # Panics
///
/// Panics if `limit > chars.len()`.
#[must_use]
pub fn fit(chars: &[char], limit: usize, target: usize, tab_size: usize) -> (usize, usize) {
    let mut col = 0;
    for (offset, &ch) in chars[..limit].iter().enumerate() {
        let next = advance(col, ch, tab_size);
        if next > target {
            return (offset, col);
        }
        col = next;
    }
    (limit, col)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
