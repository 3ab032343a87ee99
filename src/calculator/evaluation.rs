//! Expression evaluation and number formatting.
//!
//! Evaluation computes `left op right` over `f64`, records the calculation
//! in the history and clears the pending expression.

use tracing::debug;

use super::buffer::DisplayBuffer;
use super::expression::ExpressionState;
use crate::history::{HistoryEntry, HistoryRecorder};

/// Outcome of pressing equals with a pending operator.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// `"<left> <op> <right>"` with the operands as parsed numbers.
    pub expression: String,
    /// The raw numeric result.
    pub value: f64,
    /// The result formatted for the display.
    pub display: String,
}

impl Evaluation {
    /// False for division by zero and other non-finite results.
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// Evaluate the pending expression held in `state` against `buffer`.
///
/// Returns `None` when no operator is pending. On success the calculation
/// is recorded in `history`, the expression state is reset and the buffer
/// is left empty for the caller to fill with the formatted result.
pub fn evaluate(
    state: &mut ExpressionState,
    buffer: &mut DisplayBuffer,
    history: &mut HistoryRecorder,
) -> Option<Evaluation> {
    let op = state.operator()?;
    let left = state.left_operand().unwrap_or(f64::NAN);

    state.extract_right_operand(buffer.text());
    let right = state.right_operand();
    let value = op.apply(left, right);

    let expression = format!("{} {} {}", format_number(left), op, format_number(right));
    debug!(%expression, value, "Evaluated expression");

    history.record(HistoryEntry::new(expression.clone(), value));

    state.reset();
    buffer.clear_to_empty();

    Some(Evaluation {
        expression,
        value,
        display: format_result(value),
    })
}

/// Format a result for display.
///
/// Integral values have no decimal point; everything else gets exactly
/// two decimals, with ties rounded away from zero.
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }

    if value.fract() == 0.0 {
        return format_number(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, fixed_half_away(value, 2))
}

/// Format a number in its shortest plain form (`50`, `0.5`, `-3`).
///
/// Magnitudes from 1e21 up and below 1e-6 switch to exponent form
/// (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }

    if value == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let scientific = format!("{:e}", value);
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => scientific,
        };
    }

    format!("{}", value)
}

/// Format a number with thousand separators and between `min_fraction`
/// and `max_fraction` decimals (trailing zeros beyond the minimum dropped).
pub fn format_grouped(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }

    let fixed = fixed_half_away(value, max_fraction);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let significant = frac_part.trim_end_matches('0').len();
    let frac = &frac_part[..significant.max(min_fraction).min(frac_part.len())];

    let is_zero = int_part.chars().chain(frac.chars()).all(|c| c == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac.is_empty() {
        format!("{}{}", sign, group_digits(int_part))
    } else {
        format!("{}{}.{}", sign, group_digits(int_part), frac)
    }
}

/// `|value|` with `precision` decimals, rounding ties away from zero.
///
/// `{:.N}` rounds exact binary ties to even (0.125 -> "0.12"), so the
/// rounding is done by hand on the exact decimal expansion.
fn fixed_half_away(value: f64, precision: usize) -> String {
    // 1074 fractional digits hold any f64 exactly
    let exact = format!("{:.1074}", value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(precision))
        .collect();

    if frac_part.as_bytes().get(precision).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - precision;
    let int_digits: String = digits[..split].iter().map(|&d| d as char).collect();
    if precision == 0 {
        return int_digits;
    }

    let frac_digits: String = digits[split..].iter().map(|&d| d as char).collect();
    format!("{}.{}", int_digits, frac_digits)
}

/// Insert a comma between every group of three digits.
fn group_digits(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_sign_positive() {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}
