//! The calculator display text.

use super::expression::Operator;

const ZERO: &str = "0";

/// Text shown on the calculator display, doubling as the parse source.
///
/// Outside of an evaluation the text is never empty: anything that would
/// leave it empty normalizes to `"0"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self {
            text: ZERO.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a digit or a decimal point.
    ///
    /// A lone `"0"` is replaced by the first digit. A second decimal point
    /// anywhere in the buffer is rejected. Returns whether the text changed.
    pub fn append_digit_or_point(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() && ch != '.' {
            return false;
        }

        if self.text == ZERO && ch != '.' {
            self.text = ch.to_string();
            return true;
        }

        if ch == '.' && self.text.contains('.') {
            return false;
        }

        self.text.push(ch);
        true
    }

    /// Append an operator symbol verbatim.
    pub(crate) fn push_operator(&mut self, op: Operator) {
        self.text.push(op.symbol());
    }

    /// Remove the last character and return it.
    ///
    /// The buffer falls back to `"0"` once it runs empty.
    pub fn backspace(&mut self) -> Option<char> {
        let removed = self.text.pop();
        if self.text.is_empty() {
            self.text = ZERO.to_string();
        }
        removed
    }

    /// Reset to `"0"`.
    pub fn reset(&mut self) {
        self.text = ZERO.to_string();
    }

    /// Replace the whole text, e.g. with an evaluation result.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.text.is_empty() {
            self.reset();
        }
    }

    /// Empty the buffer while a result is being computed.
    pub(crate) fn clear_to_empty(&mut self) {
        self.text.clear();
    }
}
