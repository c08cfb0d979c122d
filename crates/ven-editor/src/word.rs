//! Word boundaries: classification and a char walker that crosses lines.
//!
//! A **word** is a maximal run of non-whitespace chars. Everything else,
//! including the break between two lines, is whitespace. Word motions
//! (`w`, `b`, `e`) are built on [`Walker`], which steps through the document
//! one char at a time and counts the line boundaries it crosses so the caller
//! can scroll without knowing anything about rendering.

use crate::document::Document;
use crate::line::LineId;

// ---------------------------------------------------------------------------
// Character classification
// ---------------------------------------------------------------------------

/// Character class for word boundary detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    /// Part of a word.
    Word,
    /// Space, tab, line break, and any other whitespace.
    Blank,
}

/// Classify a char for word motions.
pub(crate) fn classify(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Blank
    } else {
        CharClass::Word
    }
}

pub(crate) fn is_word(ch: char) -> bool {
    classify(ch) == CharClass::Word
}

pub(crate) fn is_blank(ch: char) -> bool {
    classify(ch) == CharClass::Blank
}

// ---------------------------------------------------------------------------
// Walker
// ---------------------------------------------------------------------------

/// A read-only cursor over the document's chars.
///
/// Positions are `(line, offset)` with `offset` in `0..=len`. The slot at
/// `offset == len` is the line break (`'\n'`) on every line but the last,
/// where it is the end of the document.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Walker<'a> {
    doc: &'a Document,
    line: LineId,
    offset: usize,
    lines_moved: isize,
}

impl<'a> Walker<'a> {
    /// Start at the document's cursor.
    pub(crate) const fn at_cursor(doc: &'a Document) -> Self {
        Self {
            doc,
            line: doc.current(),
            offset: doc.char_offset(),
            lines_moved: 0,
        }
    }

    /// The char at the walker: content, `'\n'` at a line break, `None` at the
    /// end of the document.
    pub(crate) fn peek(&self) -> Option<char> {
        let line = self.doc.line(self.line);
        match line.get(self.offset) {
            Some(ch) => Some(ch),
            None => line.next().map(|_| '\n'),
        }
    }

    /// The char before the walker on the same line.
    pub(crate) fn peek_prev_in_line(&self) -> Option<char> {
        let before = self.offset.checked_sub(1)?;
        self.doc.line(self.line).get(before)
    }

    /// The char after the walker on the same line.
    pub(crate) fn peek_next_in_line(&self) -> Option<char> {
        self.doc.line(self.line).get(self.offset + 1)
    }

    /// Step forward one slot. Returns `false` at the end of the document.
    pub(crate) fn forward(&mut self) -> bool {
        let line = self.doc.line(self.line);
        if self.offset < line.len() {
            self.offset += 1;
            return true;
        }
        match line.next() {
            Some(next) => {
                self.line = next;
                self.offset = 0;
                self.lines_moved += 1;
                true
            }
            None => false,
        }
    }

    /// Step back one slot. Returns `false` at the start of the document.
    pub(crate) fn backward(&mut self) -> bool {
        if self.offset > 0 {
            self.offset -= 1;
            return true;
        }
        match self.doc.line(self.line).prev() {
            Some(prev) => {
                self.line = prev;
                self.offset = self.doc.line(prev).len();
                self.lines_moved -= 1;
                true
            }
            None => false,
        }
    }

    /// Where the walk ended: line, offset, and signed lines crossed.
    pub(crate) const fn finish(self) -> (LineId, usize, isize) {
        (self.line, self.offset, self.lines_moved)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
