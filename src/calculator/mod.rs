//! Single-operator calculator.
//!
//! This module provides:
//! - The display buffer the user types into
//! - The pending operator and its operands
//! - Evaluation and result formatting
//!
//! [`Calculator`] ties them together into the entry state machine.

mod buffer;
mod evaluation;
mod expression;

pub use buffer::DisplayBuffer;
pub use evaluation::{Evaluation, evaluate, format_grouped, format_number, format_result};
pub use expression::{ExpressionState, Operator, parse_leading_number};

use tracing::debug;

use crate::history::HistoryRecorder;

/// Where the calculator is in the entry of an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcState {
    /// No operator selected yet.
    Entry,
    /// An operator is selected, right operand digits may follow.
    OperatorPending,
}

/// The calculator: display buffer plus pending expression.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    buffer: DisplayBuffer,
    expression: ExpressionState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        self.buffer.text()
    }

    pub fn expression(&self) -> &ExpressionState {
        &self.expression
    }

    pub fn state(&self) -> CalcState {
        if self.expression.is_pending() {
            CalcState::OperatorPending
        } else {
            CalcState::Entry
        }
    }

    /// Type a digit or decimal point.
    pub fn press_digit(&mut self, ch: char) {
        self.buffer.append_digit_or_point(ch);
    }

    /// Select an operator. A second operator before equals is ignored.
    pub fn press_operator(&mut self, op: Operator) -> bool {
        let accepted = self.expression.begin_operator(op, &mut self.buffer);
        if accepted {
            debug!(operator = %op, buffer = self.buffer.text(), "Operator selected");
        } else {
            debug!(operator = %op, "Operator ignored");
        }
        accepted
    }

    /// Evaluate the pending expression and show the formatted result.
    ///
    /// Without a pending operator nothing happens and `None` is returned.
    pub fn equals(&mut self, history: &mut HistoryRecorder) -> Option<Evaluation> {
        let evaluation = evaluate(&mut self.expression, &mut self.buffer, history)?;
        self.buffer.set_text(evaluation.display.clone());
        Some(evaluation)
    }

    /// Remove the last character, dropping the operator if that was it.
    pub fn backspace(&mut self) {
        if let Some(removed) = self.buffer.backspace()
            && Operator::from_symbol(removed).is_some()
        {
            self.expression.reset();
        }
    }

    /// "AC": back to `"0"` with nothing pending.
    pub fn clear(&mut self) {
        self.buffer.reset();
        self.expression.reset();
    }

    /// Replace the display text wholesale.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer.set_text(text);
    }

    /// Load a previous result as a fresh left-hand value.
    pub fn load_value(&mut self, value: f64) {
        self.clear();
        self.set_text(format_number(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &mut Calculator, history: &mut HistoryRecorder, keys: &str) {
        for ch in keys.chars() {
            match ch {
                '=' => {
                    calc.equals(history);
                }
                '<' => calc.backspace(),
                'c' => calc.clear(),
                _ => match Operator::from_key(ch) {
                    Some(op) => {
                        calc.press_operator(op);
                    }
                    None => calc.press_digit(ch),
                },
            }
        }
    }

    #[test]
    fn test_full_scenario() {
        let mut calc = Calculator::new();
        let mut history = HistoryRecorder::default();

        press(&mut calc, &mut history, "50");
        assert_eq!(calc.display(), "50");

        press(&mut calc, &mut history, "+");
        assert_eq!(calc.display(), "50+");
        assert_eq!(calc.expression().left_operand(), Some(50.0));
        assert_eq!(calc.expression().operator(), Some(Operator::Add));
        assert_eq!(calc.state(), CalcState::OperatorPending);

        press(&mut calc, &mut history, "10");
        assert_eq!(calc.display(), "50+10");

        let result = calc.equals(&mut history).unwrap();
        assert_eq!(result.value, 60.0);
        assert_eq!(calc.display(), "60");
        assert_eq!(calc.state(), CalcState::Entry);

        let front = history.get(0).unwrap();
        assert_eq!(front.expression, "50 + 10");
        assert_eq!(front.result, 60.0);
    }

    #[test]
    fn test_divide_by_implicit_zero() {
        let mut calc = Calculator::new();
        let mut history = HistoryRecorder::default();

        press(&mut calc, &mut history, "7/=");
        assert_eq!(calc.display(), "Infinity");
        assert_eq!(calc.state(), CalcState::Entry);
    }

    #[test]
    fn test_trailing_operator_evaluates_with_zero() {
        let mut calc = Calculator::new();
        let mut history = HistoryRecorder::default();

        press(&mut calc, &mut history, "5+=");
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let mut calc = Calculator::new();
        let mut history = HistoryRecorder::default();

        press(&mut calc, &mut history, "42");
        assert!(calc.equals(&mut history).is_none());
        assert_eq!(calc.display(), "42");
        assert!(history.is_empty());
    }

    #[test]
    fn test_second_operator_has_no_effect() {
        let mut calc = Calculator::new();
        let mut history = HistoryRecorder::default();

        press(&mut calc, &mut history, "9-");
        assert!(!calc.press_operator(Operator::Multiply));
        assert_eq!(calc.display(), "9−");
        assert_eq!(calc.expression().operator(), Some(Operator::Subtract));

        press(&mut calc, &mut history, "4=");
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_backspace_operator_reverts_to_entry() {
        let mut calc = Calculator::new();
        let mut history = HistoryRecorder::default();

        press(&mut calc, &mut history, "12x");
        assert_eq!(calc.state(), CalcState::OperatorPending);

        press(&mut calc, &mut history, "<");
        assert_eq!(calc.display(), "12");
        assert_eq!(calc.state(), CalcState::Entry);
        assert_eq!(calc.expression(), &ExpressionState::new());

        // A different operator can now be chosen
        press(&mut calc, &mut history, "/4=");
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn test_backspace_digit_keeps_operator() {
        let mut calc = Calculator::new();
        let mut history = HistoryRecorder::default();

        press(&mut calc, &mut history, "3+45<");
        assert_eq!(calc.display(), "3+4");
        assert_eq!(calc.state(), CalcState::OperatorPending);
    }

    #[test]
    fn test_clear_from_any_state() {
        let mut calc = Calculator::new();
        let mut history = HistoryRecorder::default();

        press(&mut calc, &mut history, "8*3c");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.state(), CalcState::Entry);
        assert_eq!(calc.expression().left_operand(), None);

        press(&mut calc, &mut history, "c");
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_result_is_next_left_operand() {
        let mut calc = Calculator::new();
        let mut history = HistoryRecorder::default();

        press(&mut calc, &mut history, "2.5*2=");
        assert_eq!(calc.display(), "5");
        press(&mut calc, &mut history, "+1=");
        assert_eq!(calc.display(), "6");
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).unwrap().expression, "5 + 1");
    }

    #[test]
    fn test_negative_result_as_left_operand() {
        let mut calc = Calculator::new();
        let mut history = HistoryRecorder::default();

        press(&mut calc, &mut history, "2-7=");
        assert_eq!(calc.display(), "-5");
        press(&mut calc, &mut history, "x3=");
        assert_eq!(calc.display(), "-15");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        let mut calc = Calculator::new();
        let mut history = HistoryRecorder::default();

        press(&mut calc, &mut history, "1/8=");
        assert_eq!(calc.display(), "0.13");

        press(&mut calc, &mut history, "c5/8=");
        assert_eq!(calc.display(), "0.63");
        assert_eq!(history.get(0).unwrap().display_result(), "0.63");
    }

    #[test]
    fn test_set_text_replaces_display() {
        let mut calc = Calculator::new();
        let mut history = HistoryRecorder::default();

        calc.set_text("12.5");
        assert_eq!(calc.display(), "12.5");
        press(&mut calc, &mut history, "*2=");
        assert_eq!(calc.display(), "25");

        calc.set_text("");
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_load_value_clears_pending_operator() {
        let mut calc = Calculator::new();
        let mut history = HistoryRecorder::default();

        press(&mut calc, &mut history, "4+");
        calc.load_value(1.0 / 3.0);
        assert_eq!(calc.state(), CalcState::Entry);
        assert_eq!(calc.display(), "0.3333333333333333");

        calc.load_value(1e21);
        assert_eq!(calc.display(), "1e+21");
        press(&mut calc, &mut history, "+1=");
        assert_eq!(calc.display(), "1e+21");
    }
}
