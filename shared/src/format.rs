//! Display formatting for dashboard figures.
//!
//! Amounts follow the `en-UG` rendering of Ugandan Shillings with no fraction
//! digits: `USh`, a no-break space, then comma-grouped digits.

pub const CURRENCY_SYMBOL: &str = "USh";

const SYMBOL_SEPARATOR: char = '\u{a0}';

/// Formats an amount as UGX. Missing and NaN amounts format as zero.
///
/// Rounds half away from zero. A value that rounds to zero never carries a
/// minus sign.
pub fn format_currency(amount: Option<f64>) -> String {
    let rounded = amount.filter(|value| !value.is_nan()).unwrap_or(0.0).round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = if rounded.is_infinite() {
        "∞".to_string()
    } else {
        group_thousands(&format!("{:.0}", rounded.abs()))
    };
    format!("{}{}{}{}", sign, CURRENCY_SYMBOL, SYMBOL_SEPARATOR, digits)
}

/// Counts are shown as bare numbers.
pub fn format_count(count: u64) -> String {
    count.to_string()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
