//! Converter input and currency selection.

use tracing::debug;

use super::currency::{self, Currency};
use crate::calculator::{DisplayBuffer, format_grouped, parse_leading_number};
use crate::error::Result;
use crate::history::{HistoryEntry, HistoryRecorder};

/// What the converter panel shows for the current input.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionPreview {
    pub source_code: &'static str,
    pub source_symbol: &'static str,
    /// Input amount with thousand separators.
    pub source_amount: String,
    pub target_code: &'static str,
    pub target_symbol: &'static str,
    /// Converted amount with thousand separators and two decimals.
    pub target_amount: String,
}

/// Amount entry plus the source and target currencies.
#[derive(Clone, Debug)]
pub struct Converter {
    input: DisplayBuffer,
    source: &'static Currency,
    target: &'static Currency,
}

impl Converter {
    pub fn new(source: &str, target: &str) -> Result<Self> {
        Ok(Self {
            input: DisplayBuffer::new(),
            source: currency::lookup(source)?,
            target: currency::lookup(target)?,
        })
    }

    pub fn input(&self) -> &str {
        self.input.text()
    }

    pub fn source(&self) -> &'static Currency {
        self.source
    }

    pub fn target(&self) -> &'static Currency {
        self.target
    }

    /// Type a digit or decimal point into the amount.
    pub fn press_digit(&mut self, ch: char) {
        self.input.append_digit_or_point(ch);
    }

    /// Reset the amount to `"0"`.
    pub fn clear(&mut self) {
        self.input.reset();
    }

    /// Exchange source and target currencies.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    pub fn select_source(&mut self, code: &str) -> Result<()> {
        self.source = currency::lookup(code)?;
        Ok(())
    }

    pub fn select_target(&mut self, code: &str) -> Result<()> {
        self.target = currency::lookup(code)?;
        Ok(())
    }

    /// The typed amount; anything unparseable counts as zero.
    pub fn amount(&self) -> f64 {
        parse_leading_number(self.input.text()).unwrap_or(0.0)
    }

    /// The amount expressed in the target currency.
    pub fn converted(&self) -> f64 {
        self.source.convert_to(self.amount(), self.target)
    }

    pub fn preview(&self) -> ConversionPreview {
        ConversionPreview {
            source_code: self.source.code,
            source_symbol: self.source.symbol,
            source_amount: format_grouped(self.amount(), 0, 3),
            target_code: self.target.code,
            target_symbol: self.target.symbol,
            target_amount: format_grouped(self.converted(), 2, 2),
        }
    }

    /// Record the current conversion in `history`.
    ///
    /// A zero or unparseable amount records nothing. Returns whether an
    /// entry was added.
    pub fn commit(&self, history: &mut HistoryRecorder) -> bool {
        let Some(amount) = parse_leading_number(self.input.text()) else {
            return false;
        };
        if amount == 0.0 {
            return false;
        }

        let expression = format!(
            "{} {} to {}",
            format_grouped(amount, 0, 3),
            self.source.code,
            self.target.code
        );
        let result = self.source.convert_to(amount, self.target);
        debug!(%expression, result, "Conversion committed");

        history.record(HistoryEntry::new(expression, result));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(keys: &str) -> Converter {
        let mut converter = Converter::new("INR", "USD").unwrap();
        for ch in keys.chars() {
            converter.press_digit(ch);
        }
        converter
    }

    #[test]
    fn test_defaults() {
        let converter = typed("");
        assert_eq!(converter.input(), "0");
        assert_eq!(converter.source().code, "INR");
        assert_eq!(converter.target().code, "USD");
        assert_eq!(converter.preview().target_amount, "0.00");
    }

    #[test]
    fn test_input_follows_digit_rules() {
        let converter = typed("012.5.0");
        assert_eq!(converter.input(), "12.50");
        assert_eq!(converter.amount(), 12.5);
    }

    #[test]
    fn test_preview() {
        let converter = typed("100000");
        let preview = converter.preview();
        assert_eq!(preview.source_amount, "100,000");
        assert_eq!(preview.source_symbol, "₹");
        assert_eq!(preview.target_amount, "1,109.20");
        assert_eq!(preview.target_symbol, "$");
    }

    #[test]
    fn test_swap() {
        let mut converter = typed("1");
        converter.swap();
        assert_eq!(converter.source().code, "USD");
        assert_eq!(converter.target().code, "INR");
        assert_eq!(converter.preview().target_amount, "90.16");
    }

    #[test]
    fn test_select_unknown_currency_keeps_selection() {
        let mut converter = typed("1");
        assert!(converter.select_target("ABC").is_err());
        assert_eq!(converter.target().code, "USD");

        converter.select_target("EUR").unwrap();
        assert_eq!(converter.target().code, "EUR");
    }

    #[test]
    fn test_clear() {
        let mut converter = typed("55");
        converter.clear();
        assert_eq!(converter.input(), "0");
    }

    #[test]
    fn test_commit_records_history() {
        let mut converter = typed("2500");
        converter.select_source("USD").unwrap();
        converter.select_target("EUR").unwrap();
        let mut history = HistoryRecorder::default();

        assert!(converter.commit(&mut history));
        let entry = history.get(0).unwrap();
        assert_eq!(entry.expression, "2,500 USD to EUR");
        assert!((entry.result - 2500.0 / 0.011092 * 0.009436).abs() < 1e-9);
    }

    #[test]
    fn test_commit_zero_is_noop() {
        let converter = typed("0.");
        let mut history = HistoryRecorder::default();

        assert!(!converter.commit(&mut history));
        assert!(history.is_empty());
    }
}
