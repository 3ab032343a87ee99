//! The widget session and its command dispatch table.
//!
//! A [`Session`] owns every piece of widget state. Front-ends translate
//! their input events into [`Command`]s and feed them to
//! [`Session::dispatch`]; rendering only reads from the session.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculator::{Calculator, Evaluation, Operator};
use crate::config::Config;
use crate::converter::Converter;
use crate::error::{Error, Result};
use crate::history::HistoryRecorder;

/// Color scheme of the widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// The tab currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Calculator,
    Converter,
    History,
}

impl View {
    /// Tab order.
    pub const ALL: [View; 3] = [View::Calculator, View::Converter, View::History];

    pub fn title(self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::Converter => "Converter",
            Self::History => "History",
        }
    }
}

/// A logical input event.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Calculator digit or decimal point.
    Digit(char),
    Operator(Operator),
    Equals,
    Backspace,
    /// "AC"
    Clear,
    /// Converter digit or decimal point.
    ConverterDigit(char),
    ConverterClear,
    ConverterSwap,
    SelectSource(String),
    SelectTarget(String),
    ConverterCommit,
    /// Load the history entry at this index (0 is newest) into the calculator.
    RecallHistory(usize),
    ClearHistory,
    ToggleTheme,
    Navigate(View),
}

/// All state of one widget instance.
#[derive(Clone, Debug)]
pub struct Session {
    calculator: Calculator,
    converter: Converter,
    history: HistoryRecorder,
    theme: Theme,
    view: View,
    last_evaluation: Option<Evaluation>,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            calculator: Calculator::new(),
            converter: Converter::new(&config.converter.source, &config.converter.target)?,
            history: HistoryRecorder::with_capacity(config.history_capacity),
            theme: config.theme,
            view: View::default(),
            last_evaluation: None,
        })
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn history(&self) -> &HistoryRecorder {
        &self.history
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The most recent evaluation, until the calculator input changes.
    pub fn last_evaluation(&self) -> Option<&Evaluation> {
        self.last_evaluation.as_ref()
    }

    /// Apply one command.
    ///
    /// Only currency selection and history recall can fail; every other
    /// command normalizes bad input instead.
    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        debug!(?command, "Dispatching command");

        match command {
            Command::Digit(ch) => {
                self.last_evaluation = None;
                self.calculator.press_digit(ch);
            }
            Command::Operator(op) => {
                self.last_evaluation = None;
                self.calculator.press_operator(op);
            }
            Command::Equals => {
                if let Some(evaluation) = self.calculator.equals(&mut self.history) {
                    self.last_evaluation = Some(evaluation);
                }
            }
            Command::Backspace => {
                self.last_evaluation = None;
                self.calculator.backspace();
            }
            Command::Clear => {
                self.last_evaluation = None;
                self.calculator.clear();
            }
            Command::ConverterDigit(ch) => self.converter.press_digit(ch),
            Command::ConverterClear => self.converter.clear(),
            Command::ConverterSwap => self.converter.swap(),
            Command::SelectSource(code) => self.converter.select_source(&code)?,
            Command::SelectTarget(code) => self.converter.select_target(&code)?,
            Command::ConverterCommit => {
                self.converter.commit(&mut self.history);
            }
            Command::RecallHistory(index) => {
                let value = self
                    .history
                    .get(index)
                    .map(|entry| entry.result)
                    .ok_or(Error::HistoryIndex(index))?;
                self.last_evaluation = None;
                self.calculator.load_value(value);
                self.view = View::Calculator;
            }
            Command::ClearHistory => self.history.clear(),
            Command::ToggleTheme => {
                self.theme = self.theme.toggled();
                info!(theme = %self.theme, "Theme changed");
            }
            Command::Navigate(view) => self.view = view,
        }

        Ok(())
    }
}
