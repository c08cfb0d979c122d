//! # ven-editor
//!
//! The pieces of a modal terminal editor that do not touch the terminal:
//!
//! - **[`column`]**: char offsets to screen columns (tab stops, wide glyphs)
//! - **[`line`]**: `Line`, one line of chars linked to its neighbours by id
//! - **[`document`]**: `Document`, the line chain plus a cursor, with every
//!   edit and motion, load and save
//! - **[`search`]**: `Matcher`, regex search with char offsets and a
//!   viewport-sized window
//! - **[`options`]**: `:set` parsing and the option values
//! - **[`command`]**: parsing the `:`/`/` command line
//! - **[`mode`]**: Normal / Insert / Command
//!
//! Every operation returns what a renderer needs to redraw (the new visual
//! column, whether lines were added or removed). Drawing itself lives
//! elsewhere.
//!
//! The crate logs through `tracing` and installs no subscriber.

pub mod column;
pub mod command;
pub mod document;
pub mod error;
pub mod line;
pub mod mode;
pub mod options;
pub mod search;
mod word;

pub use command::Command;
pub use document::{Document, LineRemoval, Lines, WordJump};
pub use error::{Error, Result};
pub use line::{Line, LineId};
pub use mode::Mode;
pub use options::Options;
pub use search::{LineMatches, Matcher, SearchResult, Span};
