//! Currency formatting for monetary values

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How monetary values are rendered, pt-BR by default (`R$ 1.234,56`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoneyFormat {
    /// Currency symbol placed before the amount
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Separator between groups of three integer digits
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,

    /// Separator between the integer part and the cents
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

fn default_symbol() -> String {
    "R$".to_string()
}

fn default_thousands_separator() -> char {
    '.'
}

fn default_decimal_separator() -> char {
    ','
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl MoneyFormat {
    /// Render `value` with two decimals, rounding half away from zero
    pub fn format(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded < Decimal::ZERO;
        let digits = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(ch);
        }

        format!(
            "{}{} {}{}{}",
            if negative { "-" } else { "" },
            self.symbol,
            grouped,
            self.decimal_separator,
            frac_part
        )
    }
}

#[cfg(test)]
#[path = "money_test.rs"]
mod tests;
