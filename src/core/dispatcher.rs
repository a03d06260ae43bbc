/// Command dispatcher
///
/// Maps the raw argument list onto one expense operation. Parsing happens
/// before any database work so a usage error never leaves a partial change.

use crate::core::Tracker;
use crate::db::ExpenseInput;
use crate::error::{ExpenseError, Result};
use std::io::{BufRead, Write};

/// Answers accepted by the `clear` prompt. Anything else cancels silently.
const AFFIRMATIVE: &[&str] = &["y"];

pub const CLEAR_PROMPT: &str = "This will remove all expenses. Are you sure? (y/n)";

pub const MISSING_ADD_ARGS: &str = "You must provide an amount and memo.";

const HELP: &str = r#"An expense recording system

Commands:

add AMOUNT MEMO [DATE] - record a new expense
clear - delete all expenses
list - list all expenses
delete NUMBER - remove expense with id NUMBER
search QUERY - list expenses with a matching memo field
"#;

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(ExpenseInput),
    Search(String),
    Delete(Option<String>),
    Clear,
    Help,
}

impl Command {
    /// Parse the arguments that follow the program name
    ///
    /// Only `add` can fail; unknown or missing commands become `Help`.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Help);
        };
        let arg = |i: usize| rest.get(i).map(|s| s.as_ref().to_string());

        let command = match name.as_ref() {
            "list" => Command::List,
            "add" => {
                let (Some(amount), Some(memo)) = (arg(0), arg(1)) else {
                    return Err(ExpenseError::Usage(MISSING_ADD_ARGS.to_string()));
                };
                let mut input = ExpenseInput::new(amount, memo);
                if let Some(date) = arg(2) {
                    input = input.on(date);
                }
                Command::Add(input)
            }
            "search" => Command::Search(arg(0).unwrap_or_default()),
            "delete" => Command::Delete(arg(0)),
            "clear" => Command::Clear,
            _ => Command::Help,
        };

        Ok(command)
    }

    /// Whether running this command touches the database
    pub fn needs_database(&self) -> bool {
        !matches!(self, Command::Help)
    }
}

pub fn print_usage<W: Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "{}", HELP)
}

/// Ask for confirmation and read one line of input
///
/// Returns `true` only for an allow-listed answer. End of input counts as no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> std::io::Result<bool> {
    writeln!(out, "{}", CLEAR_PROMPT)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(AFFIRMATIVE.contains(&answer.trim_end_matches(['\r', '\n'])))
}

/// Routes parsed commands to the tracker
pub struct Dispatcher {
    tracker: Tracker,
}

impl Dispatcher {
    pub fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Run one command, reading confirmation from `input` and printing to `out`
    pub async fn run<R: BufRead, W: Write>(
        &self,
        command: &Command,
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        tracing::debug!(?command, "dispatching");

        match command {
            Command::List => self.tracker.list(out).await,
            Command::Add(expense) => self.tracker.add(expense).await,
            Command::Search(query) => self.tracker.search(query, out).await,
            Command::Delete(id) => self.tracker.delete_one(id.as_deref(), out).await,
            Command::Clear => {
                if confirm(input, out)? {
                    self.tracker.delete_all(out).await?;
                } else {
                    tracing::debug!("clear cancelled");
                }
                Ok(())
            }
            Command::Help => Ok(print_usage(out)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(args: &[&str]) -> Result<Command> {
        Command::parse(args)
    }

    #[test]
    fn test_parse_list_and_clear() {
        assert_eq!(parse(&["list"]).unwrap(), Command::List);
        assert_eq!(parse(&["clear"]).unwrap(), Command::Clear);
    }

    #[test]
    fn test_parse_add() {
        let command = parse(&["add", "14.56", "Pencils"]).unwrap();
        assert_eq!(command, Command::Add(ExpenseInput::new("14.56", "Pencils")));
    }

    #[test]
    fn test_parse_add_with_date() {
        let command = parse(&["add", "3.29", "Coffee", "2024-01-02"]).unwrap();
        assert_eq!(
            command,
            Command::Add(ExpenseInput::new("3.29", "Coffee").on("2024-01-02"))
        );
    }

    #[test]
    fn test_add_keeps_amount_unvalidated() {
        let command = parse(&["add", "lots", "Rent"]).unwrap();
        assert_eq!(command, Command::Add(ExpenseInput::new("lots", "Rent")));
    }

    #[test]
    fn test_add_requires_amount_and_memo() {
        for args in [&["add"][..], &["add", "10.00"][..]] {
            let err = parse(args).unwrap_err();
            assert!(err.is_usage());
            assert_eq!(err.to_string(), MISSING_ADD_ARGS);
        }
    }

    #[test]
    fn test_parse_search_and_delete() {
        assert_eq!(
            parse(&["search", "coffee"]).unwrap(),
            Command::Search("coffee".to_string())
        );
        assert_eq!(parse(&["search"]).unwrap(), Command::Search(String::new()));
        assert_eq!(
            parse(&["delete", "42"]).unwrap(),
            Command::Delete(Some("42".to_string()))
        );
        assert_eq!(parse(&["delete"]).unwrap(), Command::Delete(None));
    }

    #[test]
    fn test_unknown_or_missing_command_is_help() {
        assert_eq!(parse(&[]).unwrap(), Command::Help);
        assert_eq!(parse(&["frobnicate", "x"]).unwrap(), Command::Help);
        assert_eq!(parse(&["LIST"]).unwrap(), Command::Help);
        assert!(!Command::Help.needs_database());
        assert!(Command::List.needs_database());
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut out = Vec::new();
        print_usage(&mut out).unwrap();
        let help = String::from_utf8(out).unwrap();

        for usage in [
            "add AMOUNT MEMO [DATE]",
            "clear",
            "list",
            "delete NUMBER",
            "search QUERY",
        ] {
            assert!(help.contains(usage), "help is missing {}", usage);
        }
    }

    #[test]
    fn test_confirm_accepts_y() {
        let mut out = Vec::new();
        assert!(confirm(&mut Cursor::new("y\n"), &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", CLEAR_PROMPT));
    }

    #[test]
    fn test_confirm_rejects_everything_else() {
        for answer in ["n\n", "yes\n", "Y\n", " y\n", "\n", ""] {
            let mut out = Vec::new();
            assert!(
                !confirm(&mut Cursor::new(answer), &mut out).unwrap(),
                "{:?} should cancel",
                answer
            );
        }
    }

    #[test]
    fn test_confirm_handles_crlf() {
        let mut out = Vec::new();
        assert!(confirm(&mut Cursor::new("y\r\n"), &mut out).unwrap());
    }
}
