//! Document: the lines of one file plus the cursor that edits them.
//!
//! A `Document` owns every [`Line`] in an arena and threads them into a
//! doubly-linked chain through [`LineId`] indices. Splitting, merging, and
//! deleting lines relink neighbours in O(1) without moving any text, and no
//! line ever owns another.
//!
//! # Cursor
//!
//! The cursor is a current line plus two coordinates that are always kept in
//! step:
//!
//! - `char_offset`: index into the current line's chars, `0..=len`
//! - `visual_column`: the screen column of that index under the
//!   [column model](crate::column)
//!
//! Every operation that moves one recomputes the other. Operations take an
//! explicit `insert_mode` flag where the mode matters: in insert mode the
//! cursor may sit one past the last char, in normal mode it sits on a char.
//!
//! # Layout
//!
//! The operations are split by concern:
//!
//! - `edit`: insert, delete, split, merge
//! - `motion`: left/right/up/down, line start/end, word motions
//! - `file`: load and save

mod edit;
mod file;
mod motion;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::column::{self, DEFAULT_TAB_SIZE};
use crate::line::{Line, LineId};
use crate::options::Options;

pub use edit::LineRemoval;
pub use motion::WordJump;

/// An editable document.
pub struct Document {
    /// Arena of line records. `None` marks a recycled slot.
    slots: Vec<Option<Line>>,
    /// Recycled slot indices, reused before the arena grows.
    free: Vec<usize>,

    first: LineId,
    last: LineId,
    current: LineId,
    line_count: usize,

    char_offset: usize,
    visual_column: usize,
    tab_size: usize,

    mutated: bool,
    name: Option<PathBuf>,
}

impl Document {
    // -- Construction -------------------------------------------------------

    /// A document holding one empty line and no file name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![Some(Line::new())],
            free: Vec::new(),
            first: LineId(0),
            last: LineId(0),
            current: LineId(0),
            line_count: 1,
            char_offset: 0,
            visual_column: 0,
            tab_size: DEFAULT_TAB_SIZE,
            mutated: false,
            name: None,
        }
    }

    /// A document built from in-memory text.
    ///
    /// `text` is split on `'\n'`. A single trailing newline terminates the
    /// last line rather than starting a new one, so `"a\nb\n"` and `"a\nb"`
    /// both give two lines. The cursor starts at the top and the document is
    /// unmodified.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let body = text.strip_suffix('\n').unwrap_or(text);
        let mut slots: Vec<Option<Line>> = body
            .split('\n')
            .map(|line| Some(Line::from_chars(line.chars().collect())))
            .collect();

        let count = slots.len();
        for (i, slot) in slots.iter_mut().enumerate() {
            if let Some(line) = slot {
                line.prev = i.checked_sub(1).map(LineId);
                line.next = (i + 1 < count).then_some(LineId(i + 1));
            }
        }

        Self {
            slots,
            free: Vec::new(),
            first: LineId(0),
            last: LineId(count - 1),
            current: LineId(0),
            line_count: count,
            char_offset: 0,
            visual_column: 0,
            tab_size: DEFAULT_TAB_SIZE,
            mutated: false,
            name: None,
        }
    }

    // -- Line access --------------------------------------------------------

    /// The line behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` refers to a deleted line.
    #[must_use]
    pub fn line(&self, id: LineId) -> &Line {
        self.slots
            .get(id.0)
            .and_then(Option::as_ref)
            .expect("stale line id")
    }

    fn line_mut(&mut self, id: LineId) -> &mut Line {
        self.slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .expect("stale line id")
    }

    /// The first line.
    #[inline]
    #[must_use]
    pub const fn first(&self) -> LineId {
        self.first
    }

    /// The last line.
    #[inline]
    #[must_use]
    pub const fn last(&self) -> LineId {
        self.last
    }

    /// The line holding the cursor.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> LineId {
        self.current
    }

    /// Shorthand for `self.line(self.current())`.
    #[inline]
    #[must_use]
    pub fn current_line(&self) -> &Line {
        self.line(self.current)
    }

    /// Number of lines. Never zero.
    #[inline]
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line_count
    }

    /// 0-indexed position of the current line, found by walking back to the
    /// top. O(n) in the line number.
    #[must_use]
    pub fn current_line_number(&self) -> usize {
        let mut number = 0;
        let mut id = self.current;
        while let Some(prev) = self.line(id).prev {
            number += 1;
            id = prev;
        }
        number
    }

    /// Iterate lines top to bottom.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            doc: self,
            next: Some(self.first),
        }
    }

    /// The full text, every line followed by `'\n'`.
    #[must_use]
    pub fn contents(&self) -> String {
        let mut text = String::new();
        for (_, line) in self.lines() {
            text.extend(line.chars());
            text.push('\n');
        }
        text
    }

    // -- Cursor -------------------------------------------------------------

    /// Cursor index into the current line's chars.
    #[inline]
    #[must_use]
    pub const fn char_offset(&self) -> usize {
        self.char_offset
    }

    /// Screen column of the cursor within the current line.
    #[inline]
    #[must_use]
    pub const fn visual_column(&self) -> usize {
        self.visual_column
    }

    // -- Metadata -----------------------------------------------------------

    /// Tab stop width used for column computation.
    #[inline]
    #[must_use]
    pub const fn tab_size(&self) -> usize {
        self.tab_size
    }

    /// Change the tab stop width. The cursor keeps its char offset; its
    /// visual column is recomputed.
    pub fn set_tab_size(&mut self, tab_size: usize) {
        self.tab_size = tab_size.max(1);
        self.visual_column =
            column::column_of(self.current_line().chars(), self.char_offset, self.tab_size);
    }

    /// Pick up the options the document cares about.
    pub fn apply_options(&mut self, options: &Options) {
        if options.tab_size != self.tab_size {
            self.set_tab_size(options.tab_size);
        }
    }

    /// True if the content changed since the last successful save.
    #[inline]
    #[must_use]
    pub const fn is_mutated(&self) -> bool {
        self.mutated
    }

    /// True when quitting would lose nothing.
    #[inline]
    #[must_use]
    pub const fn can_safe_quit(&self) -> bool {
        !self.mutated
    }

    /// The associated file path, if any.
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&Path> {
        self.name.as_deref()
    }

    /// Associate the document with a file path.
    pub fn set_name(&mut self, name: impl Into<PathBuf>) {
        self.name = Some(name.into());
    }

    // -- Arena --------------------------------------------------------------

    /// Store an unlinked line and return its id.
    fn alloc(&mut self, line: Line) -> LineId {
        if let Some(index) = self.free.pop() {
            self.slots[index] = Some(line);
            LineId(index)
        } else {
            self.slots.push(Some(line));
            LineId(self.slots.len() - 1)
        }
    }

    /// Drop a line that is no longer linked and recycle its slot.
    fn release(&mut self, id: LineId) -> Line {
        let line = self.slots[id.0].take().expect("stale line id");
        self.free.push(id.0);
        line
    }

    /// Link the unlinked line `new` directly after `at`.
    fn link_after(&mut self, at: LineId, new: LineId) {
        let next = self.line(at).next;
        {
            let line = self.line_mut(new);
            line.prev = Some(at);
            line.next = next;
        }
        self.line_mut(at).next = Some(new);
        match next {
            Some(next) => self.line_mut(next).prev = Some(new),
            None => self.last = new,
        }
        self.line_count += 1;
    }

    /// Take `id` out of the chain, fixing `first`/`last`, and free it.
    ///
    /// The caller must move `current` off `id` first and must not unlink the
    /// only line.
    fn unlink(&mut self, id: LineId) -> Line {
        debug_assert!(self.line_count > 1, "cannot unlink the only line");
        debug_assert!(self.current != id, "cannot unlink the current line");
        let (prev, next) = {
            let line = self.line(id);
            (line.prev, line.next)
        };
        match prev {
            Some(prev) => self.line_mut(prev).next = next,
            None => {
                if let Some(next) = next {
                    self.first = next;
                }
            }
        }
        match next {
            Some(next) => self.line_mut(next).prev = prev,
            None => {
                if let Some(prev) = prev {
                    self.last = prev;
                }
            }
        }
        self.line_count -= 1;
        self.release(id)
    }

    /// Put the cursor on the current line at the rightmost offset whose
    /// column does not pass `target`, bounded by the mode's end of line.
    fn place_cursor(&mut self, target: usize, insert_mode: bool) {
        let line = self.current_line();
        let limit = if insert_mode {
            line.len()
        } else {
            line.len().saturating_sub(1)
        };
        let (offset, col) = column::fit(line.chars(), limit, target, self.tab_size);
        self.char_offset = offset;
        self.visual_column = col;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("lines", &self.line_count)
            .field("current", &self.current)
            .field("char_offset", &self.char_offset)
            .field("visual_column", &self.visual_column)
            .field("mutated", &self.mutated)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Iterator over `(id, line)` pairs from first to last.
pub struct Lines<'a> {
    doc: &'a Document,
    next: Option<LineId>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (LineId, &'a Line);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let line = self.doc.line(id);
        self.next = line.next;
        Some((id, line))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
