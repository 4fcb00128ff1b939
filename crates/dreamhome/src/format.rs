//! Indian numbering helpers (lakhs and crores) for rupee amounts.

pub const RUPEE: &str = "₹";

/// Group a run of ASCII digits as `12,34,567`: last three, then pairs.
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}

/// Format a rupee amount with Indian grouping; fractions are truncated.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() || amount.trunc() == 0.0 {
        return format!("{RUPEE}0");
    }

    let whole = amount.trunc();
    let digits = format!("{:.0}", whole.abs());
    let sign = if whole < 0.0 { "-" } else { "" };
    format!("{sign}{RUPEE}{}", group_indian(&digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_lakhs_and_crores() {
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("100000"), "1,00,000");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }

    #[test]
    fn formats_rupees() {
        assert_eq!(format_inr(1_234_567.0), "₹12,34,567");
        assert_eq!(format_inr(8_678.26), "₹8,678");
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(-250_000.0), "-₹2,50,000");
    }
}
