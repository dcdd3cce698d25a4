//! Currency rounding and formatting helpers shared by all pricing engines.

/// Rounds a monetary amount to 2 decimals.
///
/// The stable engine rounds after every intermediate step, the mixed and
/// parallel engines only at the points their algorithms call for it, so this
/// lives here rather than being baked into a wrapper type.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats an amount as `$1234.56` for display.
pub fn format_money(value: f64) -> String {
    format!("${:.2}", round2(value))
}

/// Formats a percentage with 2 decimals, e.g. `9.92%`.
pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", round2(value))
}

/// Formats a box or carton count, dropping the decimals when whole.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round2(4.2361), 4.24);
        assert_eq!(round2(4.2349), 4.23);
        assert_eq!(round2(10.0 / 3.0), 3.33);
        assert_eq!(round2(825.0), 825.0);
    }

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_money(4.2), "$4.20");
        assert_eq!(format_money(915.0), "$915.00");
        assert_eq!(format_pct(10.984), "10.98%");
    }

    #[test]
    fn quantities_drop_trailing_zero_decimals() {
        assert_eq!(format_quantity(9.0), "9");
        assert_eq!(format_quantity(4.5), "4.5");
        assert_eq!(format_quantity(216.0), "216");
    }
}
