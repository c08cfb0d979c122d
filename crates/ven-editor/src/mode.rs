//! Modal editing state.
//!
//! | Mode           | Cursor limit         | Purpose                         |
//! |----------------|----------------------|---------------------------------|
//! | `Normal`       | `0..len-1`           | Navigation, editing commands    |
//! | `Insert`       | `0..len`             | Typing text                     |
//! | `Command`      | (in command line)    | `:` commands and `/` search     |
//! | `CommandError` | (in command line)    | Showing a failed command        |
//!
//! Document operations do not look at the mode. They take an
//! `insert_mode: bool`, which the caller gets from [`Mode::is_insert`].

use std::fmt;

/// The current editing mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    /// Typing on the command line.
    Command,
    /// The command line holds an error message; the next key dismisses it.
    CommandError,
}

impl Mode {
    /// Human-readable name for the status line.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Command => "COMMAND",
            Self::CommandError => "ERROR",
        }
    }

    /// The `insert_mode` flag for document operations: the cursor may sit
    /// one past the last char.
    #[inline]
    #[must_use]
    pub const fn is_insert(self) -> bool {
        matches!(self, Self::Insert)
    }

    /// True if keys go to the command line rather than the document.
    #[inline]
    #[must_use]
    pub const fn on_command_line(self) -> bool {
        matches!(self, Self::Command | Self::CommandError)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
