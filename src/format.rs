//! Display formatting for rupee amounts and percentages
//!
//! Amounts are rounded to whole rupees and grouped the Indian way
//! (`12,34,56,789`): the last three digits, then pairs.

/// One crore (1,00,00,000)
pub const CRORE: f64 = 10_000_000.0;
/// One lakh (1,00,000)
pub const LAKH: f64 = 100_000.0;

/// Group a whole number with Indian digit separators
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// `₹10,00,000` style amount, rounded to the nearest rupee
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(rounded.abs() as u64))
}

/// Abbreviated amount: crores and lakhs to one decimal, smaller amounts in full
pub fn format_inr_compact(amount: f64) -> String {
    let magnitude = amount.abs();
    let sign = if amount < 0.0 { "-" } else { "" };

    if magnitude >= CRORE {
        format!("{}₹{:.1} Cr", sign, magnitude / CRORE)
    } else if magnitude >= LAKH {
        format!("{}₹{:.1} L", sign, magnitude / LAKH)
    } else {
        format_inr(amount)
    }
}

/// Percentage with a fixed number of decimals (callers use 1 or 2)
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1_000), "1,000");
        assert_eq!(group_indian(100_000), "1,00,000");
        assert_eq!(group_indian(1_000_000), "10,00,000");
        assert_eq!(group_indian(123_456_789), "12,34,56,789");
    }

    #[test]
    fn test_format_inr_rounds() {
        assert_eq!(format_inr(2_522_879.6), "₹25,22,880");
        assert_eq!(format_inr(8_333.33), "₹8,333");
        assert_eq!(format_inr(-1_500.4), "-₹1,500");
        assert_eq!(format_inr(0.2), "₹0");
    }

    #[test]
    fn test_compact_thresholds() {
        assert_eq!(format_inr_compact(10_000_000.0), "₹1.0 Cr");
        assert_eq!(format_inr_compact(43_419_247.0), "₹4.3 Cr");
        assert_eq!(format_inr_compact(100_000.0), "₹1.0 L");
        assert_eq!(format_inr_compact(9_999_999.0), "₹100.0 L");
        assert_eq!(format_inr_compact(99_999.0), "₹99,999");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(123.7115, 1), "123.7%");
        assert_eq!(format_percent(12.6825, 2), "12.68%");
    }
}
