//! Command-line parsing: what the user typed after `:` or `/`.
//!
//! The command line is edited like any other text, so it arrives here as a
//! [`Line`] holding the prompt char followed by the input (`":wq"`,
//! `"/fo+"`). Parsing turns it into a [`Command`]; executing it is up to the
//! caller.
//!
//! | Input         | Command                                  |
//! |---------------|------------------------------------------|
//! | `:w`          | [`Command::Write`]                       |
//! | `:w <path>`   | [`Command::WriteAs`]                     |
//! | `:q`          | [`Command::Quit`] (refused when dirty)   |
//! | `:q!`         | [`Command::ForceQuit`]                   |
//! | `:wq`         | [`Command::WriteQuit`]                   |
//! | `:x`          | [`Command::ExitSave`] (writes if dirty)  |
//! | `:set <args>` | [`Command::Set`]                         |
//! | `/<pattern>`  | [`Command::Search`]                      |

use std::path::PathBuf;

use crate::line::Line;
use crate::options::{SetDirective, parse_set};

/// A parsed command-line command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:w`
    Write,
    /// `:w <path>`
    WriteAs(PathBuf),
    /// `:q`
    Quit,
    /// `:q!`
    ForceQuit,
    /// `:wq`
    WriteQuit,
    /// `:x`
    ExitSave,
    /// `:set ...`
    Set(Vec<SetDirective>),
    /// `/pattern`. The pattern is not compiled yet.
    Search(String),
    /// Anything else, with the full input for the error message.
    Unknown(String),
}

impl Command {
    /// Parse the command line.
    #[must_use]
    pub fn parse(line: &Line) -> Self {
        let fixed = [
            (":w", Self::Write),
            (":q", Self::Quit),
            (":q!", Self::ForceQuit),
            (":wq", Self::WriteQuit),
            (":x", Self::ExitSave),
        ];
        if let Some((_, command)) = fixed.into_iter().find(|(text, _)| line.equals(text)) {
            return command;
        }

        let input = line.to_string();
        if let Some(pattern) = input.strip_prefix('/') {
            return Self::Search(pattern.to_string());
        }
        let Some(body) = input.strip_prefix(':') else {
            return Self::Unknown(input);
        };

        let body = body.trim();
        let (cmd, arg) = body
            .split_once(char::is_whitespace)
            .map_or((body, ""), |(cmd, arg)| (cmd, arg.trim_start()));

        match cmd {
            "w" if !arg.is_empty() => Self::WriteAs(PathBuf::from(arg)),
            "w" => Self::Write,
            "q" if arg.is_empty() => Self::Quit,
            "q!" if arg.is_empty() => Self::ForceQuit,
            "wq" if arg.is_empty() => Self::WriteQuit,
            "x" if arg.is_empty() => Self::ExitSave,
            "set" | "se" => Self::Set(parse_set(arg)),
            _ => Self::Unknown(input),
        }
    }

    /// True if running the command ends the session (when it succeeds).
    #[must_use]
    pub const fn quits(&self) -> bool {
        matches!(
            self,
            Self::Quit | Self::ForceQuit | Self::WriteQuit | Self::ExitSave
        )
    }

    /// True if the command writes the document, given its dirty flag.
    #[must_use]
    pub const fn writes(&self, mutated: bool) -> bool {
        match self {
            Self::Write | Self::WriteAs(_) | Self::WriteQuit => true,
            Self::ExitSave => mutated,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Command {
        Command::parse(&Line::from_text(text))
    }

    // -- Fixed commands -----------------------------------------------------

    #[test]
    fn parse_fixed_commands() {
        assert_eq!(parse(":w"), Command::Write);
        assert_eq!(parse(":q"), Command::Quit);
        assert_eq!(parse(":q!"), Command::ForceQuit);
        assert_eq!(parse(":wq"), Command::WriteQuit);
        assert_eq!(parse(":x"), Command::ExitSave);
    }

    #[test]
    fn parse_tolerates_surrounding_spaces() {
        assert_eq!(parse(": wq "), Command::WriteQuit);
        assert_eq!(parse(":q "), Command::Quit);
    }

    #[test]
    fn parse_write_as() {
        assert_eq!(
            parse(":w notes/todo.txt"),
            Command::WriteAs(PathBuf::from("notes/todo.txt"))
        );
        assert_eq!(
            parse(":w   spaced name.txt"),
            Command::WriteAs(PathBuf::from("spaced name.txt"))
        );
    }

    // -- Search / set -------------------------------------------------------

    #[test]
    fn parse_search() {
        assert_eq!(parse("/fo+"), Command::Search("fo+".into()));
        assert_eq!(parse("/"), Command::Search(String::new()));
        assert_eq!(parse("/形字"), Command::Search("形字".into()));
    }

    #[test]
    fn parse_set_command() {
        assert_eq!(
            parse(":set ts=4 ic"),
            Command::Set(vec![
                SetDirective::Assign("ts".into(), "4".into()),
                SetDirective::On("ic".into()),
            ])
        );
        assert_eq!(parse(":set"), Command::Set(vec![SetDirective::ShowChanged]));
        assert_eq!(parse(":se all"), Command::Set(vec![SetDirective::ShowAll]));
    }

    // -- Unknown ------------------------------------------------------------

    #[test]
    fn parse_unknown() {
        assert_eq!(parse(":wat"), Command::Unknown(":wat".into()));
        assert_eq!(parse(":q now"), Command::Unknown(":q now".into()));
        assert_eq!(parse(":"), Command::Unknown(":".into()));
        assert_eq!(parse("wq"), Command::Unknown("wq".into()));
        assert_eq!(parse(""), Command::Unknown(String::new()));
    }

    // -- Effects ------------------------------------------------------------

    #[test]
    fn quit_and_write_effects() {
        assert!(Command::Quit.quits());
        assert!(!Command::Quit.writes(true));
        assert!(Command::WriteQuit.quits());
        assert!(Command::WriteQuit.writes(false));
        assert!(Command::ExitSave.writes(true));
        assert!(!Command::ExitSave.writes(false));
        assert!(!Command::Write.quits());
        assert!(!Command::Search("x".into()).writes(true));
    }
}
