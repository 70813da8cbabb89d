//! Human formatting of amounts and rates

use crate::models::{DepositInput, DepositResult};

/// Format an amount as whole rupees with Indian digit grouping.
///
/// `1234567.8` becomes `₹12,34,568`: the last three digits form one
/// group, every group above it has two.
pub fn format_inr(amount: f64) -> String {
    if amount.is_nan() {
        return "₹NaN".to_string();
    }
    let negative = amount < 0.0 && amount.abs().round() != 0.0;
    let sign = if negative { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}₹∞");
    }
    let rupees = format!("{:.0}", amount.abs().round());
    format!("{sign}₹{}", group_indian(&rupees))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    groups.push(head);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Two-decimal percentage, e.g. `9.00%`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// One-line summary sent alongside a share link
pub fn share_text(input: &DepositInput, result: &DepositResult) -> String {
    format!(
        "Check out this FD calculation: {} at {}% for {} {} = {}",
        format_inr(input.principal),
        input.annual_rate_percent,
        input.tenure_value,
        input.tenure_unit,
        format_inr(result.maturity_amount)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute_maturity;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1_000.0), "₹1,000");
        assert_eq!(format_inr(100_000.0), "₹1,00,000");
        assert_eq!(format_inr(1_234_567.8), "₹12,34,568");
        assert_eq!(format_inr(123_456_789.0), "₹12,34,56,789");
    }

    #[test]
    fn test_inr_rounds_to_whole_rupees() {
        assert_eq!(format_inr(144_994.8), "₹1,44,995");
        assert_eq!(format_inr(44_994.4), "₹44,994");
    }

    #[test]
    fn test_inr_degenerate_values() {
        assert_eq!(format_inr(-2_500.0), "-₹2,500");
        assert_eq!(format_inr(-0.2), "₹0");
        assert_eq!(format_inr(f64::INFINITY), "₹∞");
        assert_eq!(format_inr(f64::NAN), "₹NaN");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(9.0), "9.00%");
        assert_eq!(format_percent(44.99), "44.99%");
    }

    #[test]
    fn test_share_text() {
        let input = DepositInput::default();
        let result = compute_maturity(&input);
        assert_eq!(
            share_text(&input, &result),
            "Check out this FD calculation: ₹1,00,000 at 7.5% for 5 years = ₹1,44,995"
        );
    }
}
