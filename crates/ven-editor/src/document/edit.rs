//! Content-changing operations.
//!
//! Every operation here returns the cursor's resulting visual column so the
//! renderer can redraw without asking again. Operations that add or remove
//! a line say so. Paths that change nothing leave the dirty flag alone.

use tracing::trace;

use super::Document;
use crate::column;
use crate::line::Line;

/// Which line `delete_line` took out, so the renderer knows how the
/// viewport shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRemoval {
    /// The document had one line; it was emptied in place.
    Cleared,
    /// The first line was removed; the old second line is now first.
    First,
    /// The last line was removed; the cursor moved up onto the new last line.
    Last,
    /// An interior line was removed; the cursor moved onto the line below.
    Interior,
}

impl Document {
    /// Insert `ch` at the cursor.
    ///
    /// A newline splits the current line at the cursor: everything from the
    /// cursor on moves to a new line below, which becomes current, and the
    /// cursor goes to its start. Returns the new visual column and whether a
    /// line was added.
    pub fn insert(&mut self, ch: char) -> (usize, bool) {
        self.mutated = true;
        if ch == '\n' {
            self.split_line();
            return (self.visual_column, true);
        }
        let offset = self.char_offset;
        self.line_mut(self.current).insert_at(offset, ch);
        self.char_offset += 1;
        self.visual_column = column::advance(self.visual_column, ch, self.tab_size);
        (self.visual_column, false)
    }

    fn split_line(&mut self) {
        let at = self.char_offset;
        let tail = self.line_mut(self.current).split_off(at);
        let new = self.alloc(Line::from_chars(tail));
        self.link_after(self.current, new);
        trace!(?new, at, "split line");
        self.current = new;
        self.char_offset = 0;
        self.visual_column = 0;
    }

    /// Delete the char under the cursor (`x`).
    ///
    /// On the last char of the line the cursor steps back onto the new last
    /// char. Does nothing on an empty line or with the cursor past the end.
    pub fn delete_under_cursor(&mut self) -> usize {
        let len = self.current_line().len();
        if self.char_offset >= len {
            return self.visual_column;
        }
        self.mutated = true;
        if self.char_offset > 0 && self.char_offset == len - 1 {
            self.step_back();
            let offset = self.char_offset;
            self.line_mut(self.current).remove_at(offset + 1);
        } else {
            let offset = self.char_offset;
            self.line_mut(self.current).remove_at(offset);
        }
        self.visual_column
    }

    /// Delete the char before the cursor (`X`). Does nothing at the start of
    /// a line.
    pub fn delete_before_cursor(&mut self) -> usize {
        if self.char_offset == 0 {
            return self.visual_column;
        }
        self.mutated = true;
        self.step_back();
        let offset = self.char_offset;
        self.line_mut(self.current).remove_at(offset);
        self.visual_column
    }

    /// Insert-mode backspace.
    ///
    /// Inside a line this deletes the char before the cursor. At the start of
    /// any line but the first it merges the line into the one above, leaving
    /// the cursor where the two halves meet. Returns the new visual column and
    /// whether a line was removed.
    pub fn backspace(&mut self) -> (usize, bool) {
        if self.char_offset > 0 {
            return (self.delete_before_cursor(), false);
        }
        let Some(prev) = self.current_line().prev else {
            return (self.visual_column, false);
        };

        self.mutated = true;
        let old = self.current;
        self.current = prev;
        self.place_cursor(usize::MAX, true);

        let mut tail = self.line_mut(old).take_content();
        self.line_mut(prev).append(&mut tail);
        self.unlink(old);
        trace!(?old, into = ?prev, "merged line");
        (self.visual_column, true)
    }

    /// Delete the current line (`dd`).
    ///
    /// The cursor moves to the line below (or above, when deleting the last
    /// line) and keeps its visual column as closely as that line allows. The
    /// only line of a document is emptied instead of removed.
    pub fn delete_line(&mut self, insert_mode: bool) -> (usize, LineRemoval) {
        let old = self.current;
        let (prev, next, empty) = {
            let line = self.current_line();
            (line.prev, line.next, line.is_empty())
        };
        if !(prev.is_none() && next.is_none() && empty) {
            self.mutated = true;
        }

        let removal = match (prev, next) {
            (None, None) => {
                self.line_mut(old).clear();
                self.char_offset = 0;
                self.visual_column = 0;
                return (0, LineRemoval::Cleared);
            }
            (None, Some(next)) => {
                self.current = next;
                LineRemoval::First
            }
            (Some(prev), None) => {
                self.current = prev;
                LineRemoval::Last
            }
            (Some(_), Some(next)) => {
                self.current = next;
                LineRemoval::Interior
            }
        };

        self.unlink(old);
        trace!(?old, ?removal, "deleted line");
        self.place_cursor(self.visual_column, insert_mode);
        (self.visual_column, removal)
    }

    /// Delete from the cursor to the end of the line (`D`).
    ///
    /// The cursor stays at its visual column if the shortened line still
    /// reaches it, otherwise it moves to the new end. Does nothing with the
    /// cursor at or past the end.
    pub fn delete_to_end_of_line(&mut self, insert_mode: bool) -> usize {
        if self.char_offset >= self.current_line().len() {
            return self.visual_column;
        }
        self.mutated = true;
        if self.char_offset == 0 {
            self.line_mut(self.current).clear();
            self.visual_column = 0;
            return 0;
        }
        let offset = self.char_offset;
        self.line_mut(self.current).truncate(offset);
        self.place_cursor(self.visual_column, insert_mode);
        self.visual_column
    }

    /// Move the cursor one char back, keeping the column in step.
    /// The caller guarantees `char_offset > 0`.
    pub(super) fn step_back(&mut self) {
        self.char_offset -= 1;
        self.visual_column = column::retreat(
            self.current_line().chars(),
            self.char_offset,
            self.visual_column,
            self.tab_size,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tests::{assert_consistent, texts};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const MIXED: [char; 11] = ['a', '\t', 'b', 'c', ' ', ' ', '\t', '汉', '字', '🦀', '😂'];
    const MIXED_COLUMNS: [usize; 11] = [1, 8, 9, 10, 11, 12, 16, 18, 20, 22, 24];

    fn typed(text: &str) -> Document {
        let mut doc = Document::new();
        for ch in text.chars() {
            doc.insert(ch);
        }
        doc
    }

    fn alphabet_doc() -> Document {
        typed("abcdefghijklmnopqrstuvwxyz")
    }

    // -- insert -------------------------------------------------------------

    #[test]
    fn insert_tracks_columns() {
        let mut doc = Document::new();
        assert!(doc.can_safe_quit());
        for (i, (ch, expected)) in MIXED.iter().zip(MIXED_COLUMNS).enumerate() {
            let (col, added) = doc.insert(*ch);
            assert!(!added);
            assert_eq!(col, expected);
            assert_eq!(doc.char_offset(), i + 1);
        }
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.current_line().chars(), &MIXED);
        assert!(!doc.can_safe_quit());
        assert_consistent(&doc);
    }

    #[test]
    fn left_reverses_insert_columns() {
        let mut doc = Document::new();
        for ch in MIXED {
            doc.insert(ch);
        }
        for i in (0..MIXED.len()).rev() {
            assert_eq!(doc.visual_column(), MIXED_COLUMNS[i]);
            doc.left();
        }
        assert_eq!(doc.visual_column(), 0);
        assert_eq!(doc.left(), None);
    }

    #[test]
    fn insert_newline_adds_line() {
        let mut doc = Document::new();
        for ch in MIXED {
            doc.insert(ch);
        }
        let (col, added) = doc.insert('\n');
        assert!(added);
        assert_eq!(col, 0);
        assert_eq!(doc.char_offset(), 0);
        for ch in MIXED {
            doc.insert(ch);
        }
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line(doc.first()).chars(), &MIXED);
        assert_eq!(doc.line(doc.last()).chars(), &MIXED);
        assert_eq!(doc.current(), doc.last());
        assert_consistent(&doc);
    }

    #[test]
    fn split_in_middle_moves_tail() {
        let mut doc = Document::from_text("hello world");
        for _ in 0..5 {
            doc.right(false);
        }
        doc.insert('\n');
        assert_eq!(texts(&doc), vec!["hello", " world"]);
        assert_eq!(doc.current_line_number(), 1);
        assert_consistent(&doc);
    }

    #[test]
    fn split_at_start_leaves_empty_line_above() {
        let mut doc = Document::from_text("abc");
        doc.insert('\n');
        assert_eq!(texts(&doc), vec!["", "abc"]);
        assert_consistent(&doc);
    }

    #[test]
    fn split_interior_line_relinks() {
        let mut doc = Document::from_text("a\nbc\nd");
        doc.down(false);
        doc.right(false);
        doc.insert('\n');
        assert_eq!(texts(&doc), vec!["a", "b", "c", "d"]);
        assert_eq!(doc.line_count(), 4);
        assert_consistent(&doc);
    }

    // -- delete_under_cursor (x) --------------------------------------------

    #[test]
    fn x_on_empty_line_is_noop() {
        let mut doc = Document::new();
        assert_eq!(doc.delete_under_cursor(), 0);
        assert!(!doc.is_mutated());
    }

    #[test]
    fn x_from_second_to_last_eats_line() {
        let mut doc = alphabet_doc();
        doc.left();
        for size in (0..25).rev() {
            assert_eq!(doc.delete_under_cursor(), size);
            let expected: String = ('a'..='z').take(size + 1).collect();
            assert_eq!(doc.current_line().to_string(), expected);
        }
        assert_eq!(doc.delete_under_cursor(), 0);
        assert!(doc.current_line().is_empty());
        assert_consistent(&doc);
    }

    #[test]
    fn x_in_middle_keeps_cursor() {
        let mut doc = Document::from_text("abc");
        doc.right(false);
        assert_eq!(doc.delete_under_cursor(), 1);
        assert_eq!(doc.char_offset(), 1);
        assert_eq!(doc.current_line().to_string(), "ac");
        assert_consistent(&doc);
    }

    #[test]
    fn x_on_last_char_steps_back_over_wide_glyph() {
        let mut doc = Document::from_text("汉字");
        doc.end_of_line(false);
        assert_eq!(doc.visual_column(), 2);
        assert_eq!(doc.delete_under_cursor(), 0);
        assert_eq!(doc.current_line().to_string(), "汉");
        assert_consistent(&doc);
    }

    #[test]
    fn x_on_single_char_line_keeps_offset_zero() {
        let mut doc = Document::from_text("a");
        assert_eq!(doc.delete_under_cursor(), 0);
        assert!(doc.current_line().is_empty());
        assert_eq!(doc.char_offset(), 0);
    }

    #[test]
    fn x_past_end_is_noop() {
        let mut doc = typed("ab");
        let before = doc.contents();
        assert_eq!(doc.delete_under_cursor(), 2);
        assert_eq!(doc.contents(), before);
    }

    // -- delete_before_cursor (X) -------------------------------------------

    #[test]
    fn big_x_at_start_is_noop() {
        let mut doc = Document::new();
        assert_eq!(doc.delete_before_cursor(), 0);
        assert!(!doc.is_mutated());
    }

    #[test]
    fn big_x_eats_line_backward() {
        let mut doc = alphabet_doc();
        for size in (0..26).rev() {
            assert_eq!(doc.delete_before_cursor(), size);
            let expected: String = ('a'..='z').take(size).collect();
            assert_eq!(doc.current_line().to_string(), expected);
        }
        assert_eq!(doc.delete_under_cursor(), 0);
        assert!(doc.current_line().is_empty());
    }

    #[test]
    fn big_x_after_tab_recomputes_column() {
        let mut doc = typed("a\tb");
        doc.left();
        assert_eq!(doc.visual_column(), 8);
        assert_eq!(doc.delete_before_cursor(), 1);
        assert_eq!(doc.current_line().to_string(), "ab");
        assert_consistent(&doc);
    }

    // -- backspace ----------------------------------------------------------

    #[test]
    fn backspace_at_document_start_is_noop() {
        let mut doc = Document::new();
        assert_eq!(doc.backspace(), (0, false));
        assert!(!doc.is_mutated());
    }

    #[test]
    fn backspace_within_line() {
        let mut doc = alphabet_doc();
        for size in (0..26).rev() {
            assert_eq!(doc.backspace(), (size, false));
            assert_eq!(doc.current_line().len(), size);
        }
    }

    #[test]
    fn backspace_merges_lines() {
        let mut doc = alphabet_doc();
        doc.insert('\n');
        for ch in 'a'..='z' {
            doc.insert(ch);
        }
        for size in (0..26).rev() {
            assert_eq!(doc.backspace(), (size, false));
            assert_eq!(doc.line(doc.last()).len(), size);
        }
        assert_eq!(doc.backspace(), (26, true));
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.char_offset(), 26);
        for size in (0..26).rev() {
            assert_eq!(doc.backspace(), (size, false));
            assert_eq!(doc.line(doc.first()).len(), size);
        }
        assert_consistent(&doc);
    }

    #[test]
    fn backspace_merge_keeps_tail_text() {
        let mut doc = Document::from_text("ab\ncd\nef");
        doc.down(false);
        let (col, deleted) = doc.backspace();
        assert!(deleted);
        assert_eq!(col, 2);
        assert_eq!(texts(&doc), vec!["abcd", "ef"]);
        assert_eq!(doc.current(), doc.first());
        assert_consistent(&doc);
    }

    #[test]
    fn backspace_merge_of_last_line_fixes_last() {
        let mut doc = Document::from_text("x\t\ny");
        doc.jump_to_bottom();
        assert_eq!(doc.backspace(), (8, true));
        assert_eq!(doc.first(), doc.last());
        assert_eq!(doc.current_line().to_string(), "x\ty");
        assert_consistent(&doc);
    }

    // -- delete_line (dd) ---------------------------------------------------

    #[test]
    fn delete_only_line_clears_it() {
        let mut doc = Document::from_text("hello");
        doc.end_of_line(false);
        assert_eq!(doc.delete_line(false), (0, LineRemoval::Cleared));
        assert_eq!(doc.line_count(), 1);
        assert!(doc.current_line().is_empty());
        assert_eq!(doc.char_offset(), 0);
        assert_consistent(&doc);
    }

    #[test]
    fn delete_sole_empty_line_is_noop() {
        let mut doc = Document::new();
        assert_eq!(doc.delete_line(false), (0, LineRemoval::Cleared));
        assert!(!doc.is_mutated());
    }

    #[test]
    fn delete_first_line() {
        let mut doc = Document::from_text("one\ntwo\nthree");
        let second = doc.line(doc.first()).next().unwrap();
        let (_, removal) = doc.delete_line(false);
        assert_eq!(removal, LineRemoval::First);
        assert_eq!(doc.first(), second);
        assert_eq!(doc.current(), second);
        assert_eq!(texts(&doc), vec!["two", "three"]);
        assert_consistent(&doc);
    }

    #[test]
    fn delete_last_line() {
        let mut doc = Document::from_text("one\ntwo\nthree");
        doc.jump_to_bottom();
        let second = doc.line(doc.last()).prev().unwrap();
        let (_, removal) = doc.delete_line(false);
        assert_eq!(removal, LineRemoval::Last);
        assert_eq!(doc.last(), second);
        assert_eq!(doc.current(), second);
        assert_eq!(texts(&doc), vec!["one", "two"]);
        assert_consistent(&doc);
    }

    #[test]
    fn delete_interior_line_moves_down() {
        let mut doc = Document::from_text("one\ntwo\nthree");
        doc.down(false);
        let (_, removal) = doc.delete_line(false);
        assert_eq!(removal, LineRemoval::Interior);
        assert_eq!(doc.current_line().to_string(), "three");
        assert_eq!(doc.line_count(), 2);
        assert_consistent(&doc);
    }

    #[test]
    fn delete_line_keeps_column_best_effort() {
        let mut doc = Document::from_text("abcdef\nxy");
        for _ in 0..4 {
            doc.right(false);
        }
        assert_eq!(doc.delete_line(false), (1, LineRemoval::First));
        assert_eq!(doc.char_offset(), 1);

        let mut doc = Document::from_text("abcdef\nxy");
        for _ in 0..4 {
            doc.right(false);
        }
        assert_eq!(doc.delete_line(true), (2, LineRemoval::First));
    }

    // -- delete_to_end_of_line (D) ------------------------------------------

    #[test]
    fn big_d_at_start_clears() {
        let mut doc = Document::from_text("hello");
        assert_eq!(doc.delete_to_end_of_line(false), 0);
        assert!(doc.current_line().is_empty());
        assert!(doc.is_mutated());
    }

    #[test]
    fn big_d_at_end_is_noop() {
        let mut doc = typed("ab");
        assert_eq!(doc.delete_to_end_of_line(true), 2);
        assert_eq!(doc.current_line().to_string(), "ab");

        let mut doc = Document::new();
        assert_eq!(doc.delete_to_end_of_line(false), 0);
        assert!(!doc.is_mutated());
    }

    #[test]
    fn big_d_normal_mode_lands_on_new_last_char() {
        let mut doc = Document::from_text("hello world");
        for _ in 0..5 {
            doc.right(false);
        }
        assert_eq!(doc.delete_to_end_of_line(false), 4);
        assert_eq!(doc.current_line().to_string(), "hello");
        assert_eq!(doc.char_offset(), 4);
        assert_consistent(&doc);
    }

    #[test]
    fn big_d_insert_mode_stays_put() {
        let mut doc = Document::from_text("汉字汉字");
        doc.right(true);
        doc.right(true);
        assert_eq!(doc.delete_to_end_of_line(true), 4);
        assert_eq!(doc.char_offset(), 2);
        assert_consistent(&doc);
    }

    // -- Properties ---------------------------------------------------------

    proptest! {
        #[test]
        fn split_then_backspace_restores(
            text in "[a-z\t 汉🦀]{0,24}",
            cut in 0usize..32,
        ) {
            let mut doc = Document::from_text(&text);
            let len = doc.current_line().len();
            for _ in 0..cut.min(len) {
                doc.right(true);
            }
            let offset = doc.char_offset();
            let column = doc.visual_column();

            doc.insert('\n');
            prop_assert_eq!(doc.line_count(), 2);
            let (col, deleted) = doc.backspace();

            prop_assert!(deleted);
            prop_assert_eq!(col, column);
            prop_assert_eq!(doc.char_offset(), offset);
            prop_assert_eq!(doc.line_count(), 1);
            prop_assert_eq!(doc.current_line().to_string(), text);
            assert_consistent(&doc);
        }
    }
}
