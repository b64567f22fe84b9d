//! Rupiah currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency prefix written before every amount.
pub const RUPIAH_PREFIX: &str = "Rp ";

/// Formats an amount as Indonesian Rupiah, e.g. `Rp 1.000.000,00`.
///
/// Amounts are rounded to two decimal places half-to-even, thousands are
/// grouped with `.` and `,` separates the cents.
///
/// # Examples
///
/// ```
/// use salary_calculator::display::format_rupiah;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_rupiah(Decimal::from(1_000_000)), "Rp 1.000.000,00");
/// assert_eq!(format_rupiah(Decimal::ZERO), "Rp 0,00");
/// ```
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{}{}{},{}",
        if negative { "-" } else { "" },
        RUPIAH_PREFIX,
        group_thousands(whole),
        cents
    )
}

/// Inserts `.` between every group of three digits, counting from the right.
fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
