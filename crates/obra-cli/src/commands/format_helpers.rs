//! Text rendering shared by the table outputs

use chrono::NaiveDate;
use obra_core::{MoneyFormat, Progress};
use rust_decimal::Decimal;

/// Width of the bar drawn by [`progress_bar`]
pub(crate) const BAR_WIDTH: usize = 20;

/// `[########------------] 40%`
pub(crate) fn progress_bar(progress: Progress) -> String {
    let filled = usize::from(progress.percent()) * BAR_WIDTH / 100;
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress
    )
}

/// Day/month/year, as the dashboard shows dates
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Square metres with the same separators as the currency
pub(crate) fn format_area(area: Decimal, money: &MoneyFormat) -> String {
    let rendered = money.format(area);
    let number = rendered
        .trim_start_matches('-')
        .trim_start_matches(money.symbol.as_str())
        .trim_start();
    let number = number
        .strip_suffix(&format!("{}00", money.decimal_separator))
        .unwrap_or(number);
    format!("{} m²", number)
}

#[cfg(test)]
#[path = "format_helpers_test.rs"]
mod tests;
