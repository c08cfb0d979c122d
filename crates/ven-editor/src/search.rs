//! Search: regular-expression matching over document lines.
//!
//! A [`Matcher`] compiles its pattern once and can be run any number of times.
//! Each run scans forward line by line from a start line and returns every
//! match span in **char** coordinates, so callers can place highlights with
//! the same offsets the cursor uses.
//!
//! # Windowing
//!
//! Searches are sized for a viewport. Lines before the first hit are skipped
//! and counted in [`SearchResult::first_match_distance`] (how far the caller
//! must scroll). From the first hit on, at most `max_lines` lines are
//! collected, the hit line included. A search can therefore run well past
//! `max_lines` lines of text before it finds anything.
//!
//! Patterns never span lines: each line is matched on its own.

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::document::Document;
use crate::error::Result;
use crate::line::{Line, LineId};
use crate::options::Options;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One match inside a line, in chars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// Char index where the match starts.
    pub offset: usize,
    /// Length of the match in chars.
    pub len: usize,
}

/// All matches on one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineMatches {
    pub line: LineId,
    /// Non-empty, left to right, non-overlapping.
    pub spans: Vec<Span>,
}

/// Outcome of [`Matcher::search`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Lines with at least one match, in document order.
    pub matches: Vec<LineMatches>,
    /// Lines scanned before the first line with a match.
    pub first_match_distance: usize,
}

impl SearchResult {
    /// True when nothing matched.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Total number of spans across all lines.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.iter().map(|m| m.spans.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// A compiled search pattern.
#[derive(Clone, Debug)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile `pattern` with default options (case-sensitive).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPattern`](crate::Error::InvalidPattern) if the pattern
    /// does not parse.
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_options(pattern, &Options::default())
    }

    /// Compile `pattern`, honouring `ignorecase`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPattern`](crate::Error::InvalidPattern) if the pattern
    /// does not parse.
    pub fn with_options(pattern: &str, options: &Options) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(options.ignore_case)
            .build()
            .inspect_err(|e| warn!(pattern, error = %e, "invalid search pattern"))?;
        Ok(Self { regex })
    }

    /// The pattern source as given.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Scan forward from `start` and collect matches within a window of
    /// `max_lines` lines beginning at the first hit.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a line of `doc`.
    #[must_use]
    pub fn search(&self, doc: &Document, start: LineId, max_lines: usize) -> SearchResult {
        let mut result = SearchResult::default();
        if max_lines == 0 {
            return result;
        }

        // Lines taken since the first hit, hit line included.
        let mut window: Option<usize> = None;
        let mut scanned = 0usize;
        let mut next = Some(start);

        while let Some(id) = next {
            if window.is_some_and(|taken| taken >= max_lines) {
                break;
            }
            let line = doc.line(id);
            scanned += 1;

            let spans = self.spans(line);
            if !spans.is_empty() {
                window.get_or_insert(0);
                result.matches.push(LineMatches { line: id, spans });
            }
            match window.as_mut() {
                Some(taken) => *taken += 1,
                None => result.first_match_distance += 1,
            }
            next = line.next();
        }

        debug!(
            pattern = self.pattern(),
            scanned,
            lines = result.matches.len(),
            matches = result.match_count(),
            "search done"
        );
        result
    }

    /// [`search`](Self::search) starting at the cursor's line.
    #[must_use]
    pub fn search_from_current(&self, doc: &Document, max_lines: usize) -> SearchResult {
        self.search(doc, doc.current(), max_lines)
    }

    /// Match one line, translating byte ranges into char ranges.
    fn spans(&self, line: &Line) -> Vec<Span> {
        let text = line.to_string();
        let mut spans = Vec::new();
        let mut byte_pos = 0;
        let mut char_pos = 0;

        for m in self.regex.find_iter(&text) {
            if m.is_empty() {
                continue;
            }
            char_pos += text[byte_pos..m.start()].chars().count();
            let len = m.as_str().chars().count();
            spans.push(Span {
                offset: char_pos,
                len,
            });
            char_pos += len;
            byte_pos = m.end();
        }
        spans
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
