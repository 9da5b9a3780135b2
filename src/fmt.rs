/// Format a price with up to 4 decimal places, trailing zeros trimmed.
#[must_use]
pub fn format_price(price: f64) -> String {
    trimmed(price, 4)
}

/// Fixed-point render at `max_decimals`, with trailing zeros and a bare
/// trailing separator stripped: `2.3300` becomes `2.33`, `2.0000` becomes `2`.
///
/// Never produces scientific notation. A negative value keeps its sign, so
/// callers formatting a magnitude must take `abs()` themselves.
#[must_use]
pub fn trimmed(value: f64, max_decimals: usize) -> String {
    let formatted = format!("{value:.max_decimals$}");
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_trailing_zeros() {
        assert_eq!(format_price(2.33), "2.33");
        assert_eq!(format_price(2.2633), "2.2633");
    }

    #[test]
    fn test_trims_bare_separator() {
        assert_eq!(format_price(2.0), "2");
        assert_eq!(format_price(0.0), "0");
    }

    #[test]
    fn test_rounds_to_max_decimals() {
        assert_eq!(trimmed(1.0 / 3.0, 2), "0.33");
        assert_eq!(trimmed(123.456, 0), "123");
    }

    #[test]
    fn test_keeps_sign() {
        assert_eq!(format_price(-0.5), "-0.5");
    }
}
