//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// `$170.00` style amount; negative amounts keep the sign before the symbol.
pub fn format_money(amount: f64, currency: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency, amount.abs())
    } else {
        format!("{}{:.2}", currency, amount)
    }
}

/// Decimal hours with two digits, e.g. `8.50`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_money(170.0, "$"), "$170.00");
        assert_eq!(format_money(0.126, "€"), "€0.13");
        assert_eq!(format_money(-5.0, "$"), "-$5.00");
    }

    #[test]
    fn hours_have_two_decimals() {
        assert_eq!(format_hours(8.5), "8.50");
        assert_eq!(format_hours(0.0), "0.00");
    }
}
