//! Pending-operator state and operand parsing.
//!
//! The buffer is the only source of truth for the right operand: it is
//! re-derived from the buffer text when the expression is evaluated.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::buffer::DisplayBuffer;

lazy_static! {
    /// Longest numeric prefix: optional sign (ASCII or U+2212), then either
    /// `Infinity` or a decimal literal with an optional exponent.
    static ref LEADING_NUMBER: Regex = Regex::new(
        r"^\s*([+\-−]?)(Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+\-]?\d+)?)"
    ).unwrap();
}

/// One of the four binary operators the calculator supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Scan order used when locating the operator inside the buffer.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The character written into the buffer for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Map a buffer character back to its operator.
    pub fn from_symbol(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == ch)
    }

    /// Map a keyboard key to an operator, accepting ASCII spellings.
    pub fn from_key(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator with IEEE-754 semantics (x / 0 is not an error).
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parse the longest leading decimal number of `input`.
///
/// Trailing garbage is ignored, so `"5+"` parses as 5 and `"12.5x"` as 12.5.
/// Returns `None` when no numeric prefix exists.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let caps = LEADING_NUMBER.captures(input)?;
    let negative = matches!(caps.get(1).map(|m| m.as_str()), Some("-" | "−"));
    let magnitude = match &caps[2] {
        "Infinity" => f64::INFINITY,
        literal => literal.parse::<f64>().ok()?,
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// The operator selected by the user and the operands around it.
///
/// `left_operand` is set if and only if `operator` is set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpressionState {
    left_operand: Option<f64>,
    operator: Option<Operator>,
    right_operand_raw: Option<String>,
}

impl ExpressionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left_operand(&self) -> Option<f64> {
        self.left_operand
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn right_operand_raw(&self) -> Option<&str> {
        self.right_operand_raw.as_deref()
    }

    /// Whether an operator is waiting for evaluation.
    pub fn is_pending(&self) -> bool {
        self.operator.is_some()
    }

    /// Select `op`, capturing the buffer as the left operand.
    ///
    /// Ignored when the buffer is empty or an operator is already pending.
    /// Returns whether the operator was accepted.
    pub fn begin_operator(&mut self, op: Operator, buffer: &mut DisplayBuffer) -> bool {
        if buffer.is_empty() || self.operator.is_some() {
            return false;
        }

        self.left_operand = Some(parse_leading_number(buffer.text()).unwrap_or(f64::NAN));
        buffer.push_operator(op);
        self.operator = Some(op);
        true
    }

    /// Re-derive the right operand from the buffer text.
    ///
    /// The first operator found (in `Operator::ALL` order) decides the split;
    /// the right operand is whatever follows its last occurrence. A buffer
    /// without any operator leaves the right operand untouched.
    pub fn extract_right_operand(&mut self, buffer: &str) {
        let Some(op) = Operator::ALL
            .into_iter()
            .find(|op| buffer.contains(op.symbol()))
        else {
            return;
        };

        if let Some(last) = buffer.rsplit(op.symbol()).next() {
            self.right_operand_raw = Some(last.to_string());
        }
    }

    /// The right operand as a number; missing or unparseable means zero.
    pub fn right_operand(&self) -> f64 {
        self.right_operand_raw
            .as_deref()
            .and_then(parse_leading_number)
            .unwrap_or(0.0)
    }

    /// Forget the pending operator and both operands.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
