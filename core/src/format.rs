//! Rupee and count formatting.
//!
//! Currency follows en-IN rules: the last three digits form one group,
//! everything above groups in pairs (`₹12,34,567`). Plain counts on
//! metric cards use western thousands grouping (`1,234,567`).

const RUPEE: char = '₹';

/// Group digits as en-IN does: `1234567` -> `12,34,567`.
pub fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Group digits in threes: `1234567` -> `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a rupee amount.
///
/// `decimals = false` rounds to whole rupees; `decimals = true` always
/// prints exactly two decimal places. Negative amounts carry the sign
/// before the symbol (`-₹1,200`). Non-finite input formats as zero.
pub fn format_currency(amount: f64, decimals: bool) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();

    if decimals {
        let paise = (abs * 100.0).round() as u64;
        let (whole, frac) = (paise / 100, paise % 100);
        format!("{sign}{RUPEE}{}.{frac:02}", group_indian(whole))
    } else {
        let whole = abs.round() as u64;
        if whole == 0 {
            return format!("{RUPEE}0");
        }
        format!("{sign}{RUPEE}{}", group_indian(whole))
    }
}

/// Abbreviated rupee amount: crore (1e7), lakh (1e5), thousand (1e3).
pub fn format_currency_compact(amount: f64) -> String {
    if amount >= 10_000_000.0 {
        format!("{RUPEE}{:.1}Cr", amount / 10_000_000.0)
    } else if amount >= 100_000.0 {
        format!("{RUPEE}{:.1}L", amount / 100_000.0)
    } else if amount >= 1_000.0 {
        format!("{RUPEE}{:.1}K", amount / 1_000.0)
    } else {
        format!("{RUPEE}{amount}")
    }
}

/// Western-grouped count for metric cards.
pub fn format_count(n: u64) -> String {
    group_thousands(n)
}

/// en-IN grouped count for analyzer and dashboard cards.
pub fn format_count_in(n: u64) -> String {
    group_indian(n)
}

/// `value` with one decimal and a percent sign: `4.2%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Round to one decimal place, as chart values are displayed.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1_000), "1,000");
        assert_eq!(group_indian(12_345), "12,345");
        assert_eq!(group_indian(123_456), "1,23,456");
        assert_eq!(group_indian(1_234_567), "12,34,567");
        assert_eq!(group_indian(123_456_789), "12,34,56,789");
    }

    #[test]
    fn western_grouping() {
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(84_200), "84,200");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn whole_rupees() {
        assert_eq!(format_currency(1_234_567.0, false), "₹12,34,567");
        assert_eq!(format_currency(2_850.4, false), "₹2,850");
        assert_eq!(format_currency(99.5, false), "₹100");
        assert_eq!(format_currency(0.0, false), "₹0");
        assert_eq!(format_currency(-1_200.0, false), "-₹1,200");
    }

    #[test]
    fn two_decimal_rupees() {
        assert_eq!(format_currency(1_234.5, true), "₹1,234.50");
        assert_eq!(format_currency(0.07, true), "₹0.07");
        assert_eq!(format_currency(100_000.0, true), "₹1,00,000.00");
    }

    #[test]
    fn compact_thresholds() {
        assert_eq!(format_currency_compact(25_000_000.0), "₹2.5Cr");
        assert_eq!(format_currency_compact(5_000_000.0), "₹50.0L");
        assert_eq!(format_currency_compact(150_000.0), "₹1.5L");
        assert_eq!(format_currency_compact(2_500.0), "₹2.5K");
        assert_eq!(format_currency_compact(750.0), "₹750");
        assert_eq!(format_currency_compact(12.5), "₹12.5");
    }

    #[test]
    fn percent_and_rounding() {
        assert_eq!(format_percent(4.3), "4.3%");
        assert_eq!(format_percent(7.0), "7.0%");
        assert_eq!(round1(3.14159), 3.1);
    }
}
