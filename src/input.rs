//! Translates terminal input lines into session commands.
//!
//! A line starting with `:` is a meta command (`:conv`, `:from USD`, ...).
//! Any other line is a sequence of keys for the active view.

use lazy_static::lazy_static;
use regex::Regex;

use crate::calculator::Operator;
use crate::error::{Error, Result};
use crate::session::{Command, View};

lazy_static! {
    /// `:name` with an optional single argument.
    static ref META_COMMAND: Regex = Regex::new(r"^:([a-z][a-z-]*)(?:\s+(\S+))?\s*$").unwrap();
}

/// What a single input line asks for.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Command(Command),
    /// Copy the calculator display to the clipboard.
    Copy,
    /// Print the history as JSON.
    ExportHistory,
    /// Print the selectable currency codes.
    ListCurrencies,
    Quit,
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        Self::Command(command)
    }
}

/// Parse one line of input typed while `view` is active.
pub fn parse_line(line: &str, view: View) -> Result<Vec<Action>> {
    let line = line.trim();
    if line.starts_with(':') {
        return parse_meta(line).map(|action| vec![action]);
    }

    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|key| parse_key(key, view).map(Action::from))
        .collect()
}

fn parse_meta(line: &str) -> Result<Action> {
    let caps = META_COMMAND
        .captures(line)
        .ok_or_else(|| Error::unknown_command(line))?;
    let name = &caps[1];
    let arg = caps.get(2).map(|m| m.as_str());

    let action: Action = match (name, arg) {
        ("calc", None) => Command::Navigate(View::Calculator).into(),
        ("conv", None) => Command::Navigate(View::Converter).into(),
        ("hist", None) => Command::Navigate(View::History).into(),
        ("theme", None) => Command::ToggleTheme.into(),
        ("swap", None) => Command::ConverterSwap.into(),
        ("enter", None) => Command::ConverterCommit.into(),
        ("from", Some(code)) => Command::SelectSource(code.to_uppercase()).into(),
        ("to", Some(code)) => Command::SelectTarget(code.to_uppercase()).into(),
        ("recall", Some(index)) => {
            let index = index
                .parse::<usize>()
                .map_err(|_| Error::unknown_command(line))?;
            Command::RecallHistory(index).into()
        }
        ("clear-history", None) => Command::ClearHistory.into(),
        ("history", Some("json")) => Action::ExportHistory,
        ("currencies", None) => Action::ListCurrencies,
        ("copy", None) => Action::Copy,
        ("quit" | "q", None) => Action::Quit,
        _ => return Err(Error::unknown_command(line)),
    };

    Ok(action)
}

fn parse_key(key: char, view: View) -> Result<Command> {
    match view {
        View::Calculator => match key {
            '0'..='9' | '.' => Ok(Command::Digit(key)),
            '=' => Ok(Command::Equals),
            '<' => Ok(Command::Backspace),
            'c' | 'C' => Ok(Command::Clear),
            _ => Operator::from_key(key)
                .map(Command::Operator)
                .ok_or_else(|| Error::unknown_command(key.to_string())),
        },
        View::Converter => match key {
            '0'..='9' | '.' => Ok(Command::ConverterDigit(key)),
            '=' => Ok(Command::ConverterCommit),
            'c' | 'C' => Ok(Command::ConverterClear),
            _ => Err(Error::unknown_command(key.to_string())),
        },
        View::History => Err(Error::unknown_command(key.to_string())),
    }
}
