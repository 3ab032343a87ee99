//! calcdeck: a single-operator calculator, a static-rate currency converter
//! and a shared calculation history.
//!
//! All state lives in a [`Session`]. Front-ends turn input events into
//! [`Command`]s and hand them to [`Session::dispatch`].
//!
//! ```
//! use calcdeck::{Command, Config, Operator, Session};
//!
//! let mut session = Session::new(&Config::default()).unwrap();
//! for command in [
//!     Command::Digit('5'),
//!     Command::Digit('0'),
//!     Command::Operator(Operator::Add),
//!     Command::Digit('1'),
//!     Command::Digit('0'),
//!     Command::Equals,
//! ] {
//!     session.dispatch(command).unwrap();
//! }
//!
//! assert_eq!(session.calculator().display(), "60");
//! assert_eq!(session.history().get(0).unwrap().expression, "50 + 10");
//! ```

pub mod calculator;
pub mod clipboard;
pub mod config;
pub mod converter;
pub mod error;
pub mod history;
pub mod input;
pub mod logging;
pub mod render;
pub mod session;

pub use calculator::{CalcState, Calculator, Operator};
pub use config::Config;
pub use error::{Error, Result};
pub use history::{HistoryEntry, HistoryRecorder};
pub use session::{Command, Session, Theme, View};
