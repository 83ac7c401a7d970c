//! Currency selection model
//!
//! A single currency is selected from a fixed list. The selection affects
//! only display formatting; stored amounts are currency-agnostic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A display currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code (e.g. "USD")
    pub code: String,

    /// Display symbol (e.g. "$")
    pub symbol: String,

    /// Human-readable name
    pub name: String,
}

impl Currency {
    fn new(code: &str, symbol: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
        }
    }

    /// The fixed list of selectable currencies
    pub fn all() -> Vec<Currency> {
        vec![
            Currency::new("USD", "$", "US Dollar"),
            Currency::new("EUR", "€", "Euro"),
            Currency::new("GBP", "£", "British Pound"),
            Currency::new("JPY", "¥", "Japanese Yen"),
            Currency::new("CAD", "C$", "Canadian Dollar"),
            Currency::new("AUD", "A$", "Australian Dollar"),
            Currency::new("CHF", "Fr", "Swiss Franc"),
            Currency::new("INR", "₹", "Indian Rupee"),
            Currency::new("BRL", "R$", "Brazilian Real"),
            Currency::new("MXN", "Mex$", "Mexican Peso"),
        ]
    }

    /// Look up a currency by its code (case-insensitive)
    pub fn by_code(code: &str) -> Option<Currency> {
        let code = code.to_ascii_uppercase();
        Self::all().into_iter().find(|c| c.code == code)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::new("USD", "$", "US Dollar")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.code, self.symbol, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_code() {
        let eur = Currency::by_code("eur").unwrap();
        assert_eq!(eur.symbol, "€");
        assert!(Currency::by_code("XXX").is_none());
    }

    #[test]
    fn test_default_is_in_list() {
        let default = Currency::default();
        assert!(Currency::all().contains(&default));
    }

    #[test]
    fn test_codes_unique() {
        let all = Currency::all();
        let mut codes: Vec<_> = all.iter().map(|c| c.code.clone()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }
}
