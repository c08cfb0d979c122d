//! A single physical line of text.
//!
//! A [`Line`] owns its chars and nothing else. The `next`/`prev` links are
//! plain [`LineId`] indices into the owning document's arena, so a line never
//! keeps its neighbours alive and there are no reference cycles. Only the
//! document rewires links; everyone else just follows them.
//!
//! Lines never contain `'\n'`. The document is the lines joined by newlines.

use std::fmt;

/// Stable handle to a line inside a [`Document`](crate::Document).
///
/// Ids are arena slot indices. A slot is recycled after its line is deleted,
/// so holding an id across a `delete_line` or merge is a contract violation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub(crate) usize);

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line#{}", self.0)
    }
}

/// One line of text plus its position in the document chain.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Line {
    content: Vec<char>,
    pub(crate) next: Option<LineId>,
    pub(crate) prev: Option<LineId>,
}

impl Line {
    /// An empty, unlinked line.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content: Vec::new(),
            next: None,
            prev: None,
        }
    }

    /// An unlinked line holding `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text` contains a newline.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_chars(text.chars().collect())
    }

    pub(crate) fn from_chars(content: Vec<char>) -> Self {
        assert!(
            !content.contains(&'\n'),
            "a line cannot contain a newline"
        );
        Self {
            content,
            next: None,
            prev: None,
        }
    }

    // -- Access -------------------------------------------------------------

    /// The line's chars.
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.content
    }

    /// Number of chars (not bytes, not cells).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The char at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.content.get(index).copied()
    }

    /// The following line in the document, if any.
    #[inline]
    #[must_use]
    pub const fn next(&self) -> Option<LineId> {
        self.next
    }

    /// The preceding line in the document, if any.
    #[inline]
    #[must_use]
    pub const fn prev(&self) -> Option<LineId> {
        self.prev
    }

    /// True when the content is exactly `text`. Used to match typed
    /// commands like `:wq`.
    #[must_use]
    pub fn equals(&self, text: &str) -> bool {
        self.content.iter().copied().eq(text.chars())
    }

    // -- Editing ------------------------------------------------------------

    /// Insert `ch` before `index`, shifting the rest right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()` or `ch` is a newline.
    pub fn insert_at(&mut self, index: usize, ch: char) {
        assert!(ch != '\n', "a line cannot contain a newline");
        assert!(
            index <= self.content.len(),
            "insert index {index} out of bounds (len {})",
            self.content.len()
        );
        self.content.insert(index, ch);
    }

    /// Remove the char at `index`, shifting the rest left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> char {
        assert!(
            index < self.content.len(),
            "remove index {index} out of bounds (len {})",
            self.content.len()
        );
        self.content.remove(index)
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.content.truncate(len);
    }

    pub(crate) fn clear(&mut self) {
        self.content.clear();
    }

    pub(crate) fn split_off(&mut self, at: usize) -> Vec<char> {
        self.content.split_off(at)
    }

    pub(crate) fn append(&mut self, tail: &mut Vec<char>) {
        self.content.append(tail);
    }

    pub(crate) fn take_content(&mut self) -> Vec<char> {
        std::mem::take(&mut self.content)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.content.iter().try_for_each(|ch| fmt::Write::write_char(f, *ch))
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("content", &self.to_string())
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
