//! Currency Formatting
//!
//! Dollar display strings and the input filter for amount fields.

/// Group an unsigned integer with comma thousands separators.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a value as dollars: `$1,234`, `$1,234.56`, `-$12.50`.
///
/// Whole amounts drop the cents, which keeps chart tick labels short.
pub fn format_dollars(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    let whole = cents / 100;
    let frac = cents % 100;

    if frac == 0 {
        format!("{}${}", sign, group_thousands(whole))
    } else {
        format!("{}${}.{:02}", sign, group_thousands(whole), frac)
    }
}

/// Filter raw text from a currency field down to a plain decimal amount.
///
/// Keeps digits and the first decimal point, caps at two decimals. Applying
/// the filter to its own output changes nothing, so it is safe to run on
/// every input event.
pub fn normalize_amount_input(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;
    let mut decimals = 0;

    for c in raw.chars() {
        match c {
            '0'..='9' => {
                if seen_point {
                    if decimals < 2 {
                        out.push(c);
                        decimals += 1;
                    }
                } else {
                    out.push(c);
                }
            }
            '.' if !seen_point => {
                seen_point = true;
                out.push('.');
            }
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_dollars(0.0), "$0");
        assert_eq!(format_dollars(999.0), "$999");
        assert_eq!(format_dollars(1_000.0), "$1,000");
        assert_eq!(format_dollars(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn shows_cents_only_when_present() {
        assert_eq!(format_dollars(1_234.5), "$1,234.50");
        assert_eq!(format_dollars(12.34), "$12.34");
        assert_eq!(format_dollars(12.0), "$12");
    }

    #[test]
    fn sign_sits_before_the_dollar() {
        assert_eq!(format_dollars(-12.5), "-$12.50");
        assert_eq!(format_dollars(-1_000.0), "-$1,000");
        // A magnitude that rounds to zero cents drops the sign too.
        assert_eq!(format_dollars(-0.001), "$0");
    }

    #[test]
    fn strips_everything_but_digits_and_point() {
        assert_eq!(normalize_amount_input("$1,234.56"), "1234.56");
        assert_eq!(normalize_amount_input("abc"), "");
        assert_eq!(normalize_amount_input("12a3"), "123");
    }

    #[test]
    fn keeps_a_single_decimal_point() {
        assert_eq!(normalize_amount_input("1.2.3"), "1.23");
        assert_eq!(normalize_amount_input("..5"), ".5");
    }

    #[test]
    fn caps_at_two_decimals() {
        assert_eq!(normalize_amount_input("10.999"), "10.99");
        assert_eq!(normalize_amount_input("0.1"), "0.1");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["$1,234.567", "1.2.3.4", "  42 ", "0.99", ""] {
            let once = normalize_amount_input(raw);
            assert_eq!(normalize_amount_input(&once), once);
        }
    }
}
