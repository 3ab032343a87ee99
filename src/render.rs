//! Plain-text rendering of the active view.

use std::fmt::Write;

use crate::calculator::CalcState;
use crate::converter;
use crate::session::{Session, View};

const EMPTY_HISTORY: &str = "No history yet";

/// Render the tab bar and the active view.
pub fn render(session: &Session) -> String {
    let mut out = render_header(session);
    out.push('\n');

    let body = match session.view() {
        View::Calculator => render_calculator(session),
        View::Converter => render_converter(session),
        View::History => render_history(session),
    };
    out.push_str(&body);
    out
}

fn render_header(session: &Session) -> String {
    let tabs: Vec<String> = View::ALL
        .into_iter()
        .map(|view| {
            if view == session.view() {
                format!("[{}]", view.title())
            } else {
                format!(" {} ", view.title())
            }
        })
        .collect();

    format!("{}  ({} theme)", tabs.join(" "), session.theme())
}

fn render_calculator(session: &Session) -> String {
    let calculator = session.calculator();
    let mut out = String::new();

    if let Some(evaluation) = session.last_evaluation() {
        let _ = writeln!(out, "  {} =", evaluation.expression);
    } else if calculator.state() == CalcState::OperatorPending
        && let Some(op) = calculator.expression().operator()
    {
        let _ = writeln!(out, "  pending {}", op);
    }

    let _ = writeln!(out, "  {}", calculator.display());
    out
}

fn render_converter(session: &Session) -> String {
    let preview = session.converter().preview();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "  {} {} {}",
        preview.source_code, preview.source_symbol, preview.source_amount
    );
    let _ = writeln!(
        out,
        "  {} {} {}",
        preview.target_code, preview.target_symbol, preview.target_amount
    );
    out
}

fn render_history(session: &Session) -> String {
    let history = session.history();
    if history.is_empty() {
        return format!("  {}\n", EMPTY_HISTORY);
    }

    let mut out = String::new();
    for (index, entry) in history.entries().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {} = {}",
            index,
            entry.expression,
            entry.display_result()
        );
    }
    out
}

/// List every currency the converter accepts, sorted by code.
pub fn render_currencies() -> String {
    let mut out = String::new();
    for currency in converter::codes()
        .into_iter()
        .filter_map(|code| converter::lookup(code).ok())
    {
        let _ = writeln!(out, "  {} {}", currency.code, currency.symbol);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;
    use crate::config::Config;
    use crate::session::Command;

    fn session() -> Session {
        Session::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_header_marks_active_view() {
        let mut session = session();
        assert!(render(&session).starts_with("[Calculator]  Converter   History   (dark theme)"));

        session.dispatch(Command::Navigate(View::History)).unwrap();
        assert!(render(&session).contains("[History]"));
    }

    #[test]
    fn test_calculator_view() {
        let mut session = session();
        session.dispatch(Command::Digit('7')).unwrap();
        session.dispatch(Command::Operator(Operator::Divide)).unwrap();

        let out = render(&session);
        assert!(out.contains("pending ÷"));
        assert!(out.contains("  7÷\n"));

        session.dispatch(Command::Equals).unwrap();
        let out = render(&session);
        assert!(out.contains("7 ÷ 0 ="));
        assert!(out.contains("  Infinity\n"));
    }

    #[test]
    fn test_converter_view() {
        let mut session = session();
        session.dispatch(Command::Navigate(View::Converter)).unwrap();
        for ch in "2000".chars() {
            session.dispatch(Command::ConverterDigit(ch)).unwrap();
        }

        let out = render(&session);
        assert!(out.contains("INR ₹ 2,000"));
        assert!(out.contains("USD $ 22.18"));
    }

    #[test]
    fn test_history_view() {
        let mut session = session();
        session.dispatch(Command::Navigate(View::History)).unwrap();
        assert!(render(&session).contains(EMPTY_HISTORY));

        for command in [
            Command::Digit('1'),
            Command::Operator(Operator::Divide),
            Command::Digit('3'),
            Command::Equals,
        ] {
            session.dispatch(command).unwrap();
        }
        session.dispatch(Command::Navigate(View::History)).unwrap();
        assert!(render(&session).contains(" 0. 1 ÷ 3 = 0.33"));
    }

    #[test]
    fn test_currency_list() {
        let out = render_currencies();
        assert_eq!(out.lines().count(), 52);
        assert!(out.starts_with("  AED "));
        assert!(out.contains("  USD $\n"));
        assert!(out.find("  EUR").unwrap() < out.find("  INR").unwrap());
    }
}
