use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use calcdeck::clipboard::copy_to_clipboard;
use calcdeck::input::{Action, parse_line};
use calcdeck::{Config, Session, Theme, logging, render};

/// Keyboard-driven calculator, currency converter and calculation history.
#[derive(Parser, Debug)]
#[command(name = "calcdeck", version, about)]
struct Args {
    /// Configuration file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Override the configured color theme.
    #[arg(long, value_enum)]
    theme: Option<Theme>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    let mut session = Session::new(&config).context("Failed to start session")?;
    info!(theme = %config.theme, capacity = config.history_capacity, "Session started");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render::render(&session))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;

        let actions = match parse_line(&line, session.view()) {
            Ok(actions) => actions,
            Err(e) => {
                writeln!(stdout, "! {}", e)?;
                continue;
            }
        };

        for action in actions {
            match action {
                Action::Command(command) => {
                    if let Err(e) = session.dispatch(command) {
                        writeln!(stdout, "! {}", e)?;
                    }
                }
                Action::Copy => {
                    let text = session.calculator().display();
                    match copy_to_clipboard(text) {
                        Ok(()) => writeln!(stdout, "Copied {}", text)?,
                        Err(e) => {
                            warn!(error = %e, "Copy failed");
                            writeln!(stdout, "! {}", e)?;
                        }
                    }
                }
                Action::ExportHistory => writeln!(stdout, "{}", session.history().to_json()?)?,
                Action::ListCurrencies => write!(stdout, "{}", render::render_currencies())?,
                Action::Quit => return Ok(()),
            }
        }

        write!(stdout, "{}", render::render(&session))?;
        stdout.flush()?;
    }

    Ok(())
}
