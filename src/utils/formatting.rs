//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Render a currency amount with its ISO-4217-like code, e.g. "USD 12.50".
pub fn format_currency(amount: f64, code: &str) -> String {
    if amount < 0.0 {
        format!("-{} {:.2}", code, amount.abs())
    } else {
        format!("{} {:.2}", code, amount)
    }
}

/// Render a distance with one decimal, e.g. "12.5 mi" / "12.5 km".
pub fn format_distance(value: f64, unit_abbrev: &str) -> String {
    format!("{:.1} {}", value, unit_abbrev)
}
