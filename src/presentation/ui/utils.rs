//! Small formatting helpers shared by the widgets.

/// Formats an integer with thin thousands separators: `1234567` becomes
/// `1 234 567`.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Formats a euro amount with two decimals and separated thousands:
/// `1234.5` becomes `1 234.50 €`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_eur(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = format_count(cents / 100);
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{whole}.{:02} €", cents % 100)
}
