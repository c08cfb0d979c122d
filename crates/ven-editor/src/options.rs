//! Editor options: the `:set` system.
//!
//! [`Options`] holds the values the editing core reads. [`parse_set`] turns
//! the arguments of a `:set` command into [`SetDirective`]s, and
//! [`Options::apply`] executes them.
//!
//! # Supported syntax
//!
//! | Syntax           | Effect                        |
//! |------------------|-------------------------------|
//! | `:set option`    | Enable boolean / show numeric |
//! | `:set nooption`  | Disable boolean               |
//! | `:set option!`   | Toggle boolean                |
//! | `:set option?`   | Query current value           |
//! | `:set option=N`  | Assign numeric value          |
//! | `:set`           | Show changed options          |
//! | `:set all`       | Show all options              |
//!
//! # Option names
//!
//! | Full name    | Abbrev | Type    | Default |
//! |--------------|--------|---------|---------|
//! | `tabstop`    | `ts`   | integer | 8       |
//! | `ignorecase` | `ic`   | bool    | false   |

use crate::column::DEFAULT_TAB_SIZE;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Values configurable through `:set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Tab stop width in cells. Always at least 1.
    pub tab_size: usize,
    /// Match search patterns without regard to case.
    pub ignore_case: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tab_size: DEFAULT_TAB_SIZE,
            ignore_case: false,
        }
    }
}

impl Options {
    /// Execute one directive. Queries and listings return the text to show.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownOption`] for a name that is not an option,
    /// [`Error::InvalidOptionValue`] for a value the option cannot take
    /// (`tabstop` needs a positive integer; booleans cannot be assigned).
    /// Options are unchanged on error.
    pub fn apply(&mut self, directive: &SetDirective) -> Result<Option<String>> {
        match directive {
            SetDirective::On(name) => {
                *self.bool_mut(name)? = true;
                Ok(None)
            }
            SetDirective::Off(name) => {
                *self.bool_mut(name)? = false;
                Ok(None)
            }
            SetDirective::Toggle(name) => {
                let value = self.bool_mut(name)?;
                *value = !*value;
                Ok(None)
            }
            SetDirective::Query(name) => self.show(name).map(Some),
            SetDirective::Assign(name, value) => {
                self.assign(name, value)?;
                Ok(None)
            }
            SetDirective::ShowChanged => {
                let defaults = Self::default();
                let mut shown = Vec::new();
                if self.tab_size != defaults.tab_size {
                    shown.push(format!("tabstop={}", self.tab_size));
                }
                if self.ignore_case != defaults.ignore_case {
                    shown.push(format_bool("ignorecase", self.ignore_case));
                }
                Ok(Some(shown.join("  ")))
            }
            SetDirective::ShowAll => Ok(Some(format!(
                "{}  tabstop={}",
                format_bool("ignorecase", self.ignore_case),
                self.tab_size
            ))),
        }
    }

    /// Parse and apply a whole `:set` argument string. Either every
    /// directive applies or none does.
    ///
    /// # Errors
    ///
    /// The first error from [`apply`](Self::apply).
    pub fn set(&mut self, args: &str) -> Result<Vec<String>> {
        let mut next = *self;
        let mut messages = Vec::new();
        for directive in parse_set(args) {
            if let Some(message) = next.apply(&directive)? {
                messages.push(message);
            }
        }
        *self = next;
        Ok(messages)
    }

    fn bool_mut(&mut self, name: &str) -> Result<&mut bool> {
        match canonical(name) {
            Some("ignorecase") => Ok(&mut self.ignore_case),
            Some(full) => Err(Error::InvalidOptionValue {
                name: full.to_string(),
                value: name.to_string(),
            }),
            None => Err(Error::UnknownOption(name.to_string())),
        }
    }

    fn assign(&mut self, name: &str, value: &str) -> Result<()> {
        let invalid = || Error::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        match canonical(name) {
            Some("tabstop") => {
                let size: usize = value.parse().map_err(|_| invalid())?;
                if size == 0 {
                    return Err(invalid());
                }
                self.tab_size = size;
                Ok(())
            }
            Some(_) => Err(invalid()),
            None => Err(Error::UnknownOption(name.to_string())),
        }
    }

    fn show(&self, name: &str) -> Result<String> {
        match canonical(name) {
            Some("tabstop") => Ok(format!("tabstop={}", self.tab_size)),
            Some("ignorecase") => Ok(format_bool("ignorecase", self.ignore_case)),
            _ => Err(Error::UnknownOption(name.to_string())),
        }
    }
}

/// Full name for a known option or abbreviation.
fn canonical(name: &str) -> Option<&'static str> {
    match name {
        "tabstop" | "ts" => Some("tabstop"),
        "ignorecase" | "ic" => Some("ignorecase"),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// A parsed `:set` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `:set option`
    On(String),
    /// `:set nooption`
    Off(String),
    /// `:set option!`
    Toggle(String),
    /// `:set option?`
    Query(String),
    /// `:set option=value`
    Assign(String, String),
    /// `:set` with no arguments.
    ShowChanged,
    /// `:set all`
    ShowAll,
}

/// Returns `true` if `name` is a known boolean option (full name or abbreviation).
#[must_use]
pub fn is_bool_option(name: &str) -> bool {
    matches!(name, "ignorecase" | "ic")
}

/// Returns `true` if `name` is a known numeric option (full name or abbreviation).
#[must_use]
pub fn is_numeric_option(name: &str) -> bool {
    matches!(name, "tabstop" | "ts")
}

/// Split `:set` arguments on whitespace and parse each one. No arguments
/// means [`SetDirective::ShowChanged`].
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    let args = args.trim();
    if args.is_empty() {
        return vec![SetDirective::ShowChanged];
    }
    args.split_whitespace().map(parse_set_arg).collect()
}

/// Parse a single `:set` argument.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    if arg == "all" {
        return SetDirective::ShowAll;
    }
    if let Some((name, value)) = arg.split_once('=') {
        return SetDirective::Assign(name.to_string(), value.to_string());
    }
    if let Some(name) = arg.strip_suffix('?') {
        return SetDirective::Query(name.to_string());
    }
    if let Some(name) = arg.strip_suffix('!') {
        return SetDirective::Toggle(name.to_string());
    }
    // Only strip "no" when what remains is a boolean option.
    if let Some(name) = arg.strip_prefix("no") {
        if is_bool_option(name) {
            return SetDirective::Off(name.to_string());
        }
    }
    // A bare numeric option shows its value.
    if is_numeric_option(arg) {
        return SetDirective::Query(arg.to_string());
    }
    SetDirective::On(arg.to_string())
}

/// `"name"` when on, `"noname"` when off.
#[must_use]
pub fn format_bool(name: &str, value: bool) -> String {
    if value {
        name.to_string()
    } else {
        format!("no{name}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
