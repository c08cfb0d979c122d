//! Cursor movement.
//!
//! Horizontal moves return `None` when the cursor is already at the edge,
//! `Some(column)` otherwise. Vertical moves use the best-effort column rule:
//! on the new line the cursor takes the rightmost position whose visual
//! column does not pass the old one, so it sticks to the same screen column
//! across tabs and wide glyphs and settles at the end of shorter lines.

use super::Document;
use crate::column;
use crate::line::LineId;
use crate::word::{Walker, is_blank, is_word};

/// Result of a word motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordJump {
    /// Visual column after the motion.
    pub column: usize,
    /// Line boundaries crossed: positive downward, negative upward.
    pub lines_moved: isize,
}

impl Document {
    // -- Horizontal ---------------------------------------------------------

    /// Move one char left. `None` at the start of the line.
    pub fn left(&mut self) -> Option<usize> {
        if self.char_offset == 0 {
            return None;
        }
        self.step_back();
        Some(self.visual_column)
    }

    /// Move one char right. The cursor stops on the last char in normal
    /// mode, one past it in insert mode; `None` when already there.
    pub fn right(&mut self, insert_mode: bool) -> Option<usize> {
        let line = self.current_line();
        if self.char_offset + 1 >= line.len() + usize::from(insert_mode) {
            return None;
        }
        let ch = line.chars()[self.char_offset];
        self.char_offset += 1;
        self.visual_column = column::advance(self.visual_column, ch, self.tab_size);
        Some(self.visual_column)
    }

    /// Move to column 0 (`0`).
    pub const fn start_of_line(&mut self) -> usize {
        self.char_offset = 0;
        self.visual_column = 0;
        0
    }

    /// Move to the last char, or one past it in insert mode (`$`).
    pub fn end_of_line(&mut self, insert_mode: bool) -> usize {
        self.place_cursor(usize::MAX, insert_mode);
        self.visual_column
    }

    // -- Vertical -----------------------------------------------------------

    /// Move to the line above. `None` on the first line.
    pub fn up(&mut self, insert_mode: bool) -> Option<usize> {
        let prev = self.current_line().prev()?;
        self.current = prev;
        self.place_cursor(self.visual_column, insert_mode);
        Some(self.visual_column)
    }

    /// Move to the line below. `None` on the last line.
    pub fn down(&mut self, insert_mode: bool) -> Option<usize> {
        let next = self.current_line().next()?;
        self.current = next;
        self.place_cursor(self.visual_column, insert_mode);
        Some(self.visual_column)
    }

    /// Move to the start of the first line (`gg`).
    pub fn jump_to_top(&mut self) -> usize {
        self.current = self.first;
        self.start_of_line()
    }

    /// Move to the start of the last line (`G`).
    pub fn jump_to_bottom(&mut self) -> usize {
        self.current = self.last;
        self.start_of_line()
    }

    // -- Words --------------------------------------------------------------

    /// Forward to the start of the next word (`w`). At the end of the
    /// document the cursor stops on the last char.
    pub fn next_word_start(&mut self) -> WordJump {
        let mut walker = Walker::at_cursor(self);
        while walker.peek().is_some_and(is_word) {
            walker.forward();
        }
        while walker.peek().is_some_and(is_blank) {
            walker.forward();
        }
        self.finish_word_motion(walker.finish())
    }

    /// Backward to the start of the previous word (`b`). Stops at the start
    /// of the document.
    pub fn prev_word_start(&mut self) -> WordJump {
        let mut walker = Walker::at_cursor(self);
        if !walker.backward() {
            return WordJump {
                column: self.visual_column,
                lines_moved: 0,
            };
        }
        while walker.peek().is_none_or(is_blank) {
            if !walker.backward() {
                break;
            }
        }
        while walker.peek_prev_in_line().is_some_and(is_word) {
            walker.backward();
        }
        self.finish_word_motion(walker.finish())
    }

    /// Forward to the end of the current or next word (`e`). At the end of
    /// the document the cursor stops on the last char.
    pub fn next_word_end(&mut self) -> WordJump {
        let mut walker = Walker::at_cursor(self);
        if !walker.forward() {
            return WordJump {
                column: self.visual_column,
                lines_moved: 0,
            };
        }
        while walker.peek().is_some_and(is_blank) {
            walker.forward();
        }
        if walker.peek().is_some() {
            while walker.peek_next_in_line().is_some_and(is_word) {
                walker.forward();
            }
        }
        self.finish_word_motion(walker.finish())
    }

    /// Commit a walk: move the cursor there, clamped onto a real char.
    fn finish_word_motion(
        &mut self,
        (line, offset, lines_moved): (LineId, usize, isize),
    ) -> WordJump {
        self.current = line;
        let len = self.current_line().len();
        self.char_offset = offset.min(len.saturating_sub(1));
        self.visual_column =
            column::column_of(self.current_line().chars(), self.char_offset, self.tab_size);
        WordJump {
            column: self.visual_column,
            lines_moved,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
