//! Static exchange-rate table.
//!
//! Rates are expressed against INR (rate 1.0): one unit of INR buys `rate`
//! units of the currency.

use crate::error::{Error, Result};

/// The currency every rate is relative to.
pub const BASE_CURRENCY: &str = "INR";

/// A currency code with its rate against the base currency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Currency {
    pub code: &'static str,
    pub rate: f64,
    pub symbol: &'static str,
}

impl Currency {
    const fn new(code: &'static str, rate: f64, symbol: &'static str) -> Self {
        Self { code, rate, symbol }
    }

    /// Convert `amount` of this currency into `target`.
    pub fn convert_to(&self, amount: f64, target: &Currency) -> f64 {
        amount / self.rate * target.rate
    }
}

static CURRENCIES: &[Currency] = &[
    Currency::new("INR", 1.0, "₹"),
    Currency::new("USD", 0.011092, "$"),
    Currency::new("EUR", 0.009436, "€"),
    Currency::new("GBP", 0.008267, "£"),
    Currency::new("AUD", 0.016628, "A$"),
    Currency::new("CAD", 0.015278, "C$"),
    Currency::new("SGD", 0.014323, "$"),
    Currency::new("CHF", 0.008803, "Fr"),
    Currency::new("MYR", 0.045591, "RM"),
    Currency::new("JPY", 1.723179, "¥"),
    Currency::new("CNY", 0.078292, "¥"),
    Currency::new("ARS", 15.934299, "$"),
    Currency::new("BHD", 0.004171, ".د.ب"),
    Currency::new("BWP", 0.153636, "P"),
    Currency::new("BRL", 0.060007, "R$"),
    Currency::new("BND", 0.014323, "$"),
    Currency::new("BGN", 0.018456, "лв"),
    Currency::new("CLP", 10.147904, "$"),
    Currency::new("COP", 42.349858, "$"),
    Currency::new("CZK", 0.228391, "Kč"),
    Currency::new("DKK", 0.070486, "kr"),
    Currency::new("HKD", 0.086319, "$"),
    Currency::new("HUF", 3.611251, "Ft"),
    Currency::new("ISK", 1.398540, "kr"),
    Currency::new("IDR", 184.757970, "Rp"),
    Currency::new("IRR", 466.723911, "﷼"),
    Currency::new("ILS", 0.035569, "₪"),
    Currency::new("KZT", 5.773737, "₸"),
    Currency::new("KRW", 16.325658, "₩"),
    Currency::new("KWD", 0.003401, "د.ك"),
    Currency::new("LYD", 0.060229, "ل.د"),
    Currency::new("MUR", 0.511198, "₨"),
    Currency::new("MXN", 0.200014, "$"),
    Currency::new("NPR", 1.600750, "₨"),
    Currency::new("NZD", 0.019066, "NZ$"),
    Currency::new("NOK", 0.111544, "kr"),
    Currency::new("OMR", 0.004268, "ر.ع."),
    Currency::new("PKR", 3.111471, "₨"),
    Currency::new("PHP", 0.653851, "₱"),
    Currency::new("PLN", 0.039871, "zł"),
    Currency::new("QAR", 0.040375, "ر.ق"),
    Currency::new("RON", 0.048040, "lei"),
    Currency::new("RUB", 0.890064, "₽"),
    Currency::new("SAR", 0.041595, "ر.س"),
    Currency::new("ZAR", 0.187058, "R"),
    Currency::new("LKR", 3.421630, "Rs"),
    Currency::new("SEK", 0.102491, "kr"),
    Currency::new("TWD", 0.346051, "NT$"),
    Currency::new("THB", 0.350821, "฿"),
    Currency::new("TTD", 0.075226, "$"),
    Currency::new("TRY", 0.472665, "₺"),
    Currency::new("AED", 0.040736, "د.إ"),
];

/// Look up a currency by its ISO code.
pub fn lookup(code: &str) -> Result<&'static Currency> {
    CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .ok_or_else(|| Error::unknown_currency(code))
}

/// All known codes, sorted alphabetically.
pub fn codes() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = CURRENCIES.iter().map(|c| c.code).collect();
    codes.sort_unstable();
    codes
}

/// Convert `amount` from `source` to `target` by ISO code.
pub fn convert(amount: f64, source: &str, target: &str) -> Result<f64> {
    Ok(lookup(source)?.convert_to(amount, lookup(target)?))
}
