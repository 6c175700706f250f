use crate::billing_period::BillingPeriod;

/// Render a `YYYYMM` code as "March 2025".
///
/// Input that is not a valid six-character period comes back unchanged.
pub fn format_billing_period(billing_period: &str) -> String {
    if billing_period.len() != 6 {
        return billing_period.to_string();
    }

    let Ok(period) = BillingPeriod::parse(billing_period) else {
        return billing_period.to_string();
    };

    match u8::try_from(period.month()).ok().and_then(|m| chrono::Month::try_from(m).ok()) {
        Some(month) => format!("{} {}", month.name(), period.year()),
        None => billing_period.to_string(),
    }
}

/// Dollar amount with two decimals, e.g. `$12.00`
pub fn format_currency(amount: f64) -> String {
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("${:.2}", amount)
}

/// Upper-case the first character, used for status labels such as "pending"
pub fn capitalize_first_letter(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_billing_period() {
        assert_eq!(format_billing_period("202503"), "March 2025");
        assert_eq!(format_billing_period("202401"), "January 2024");
        assert_eq!(format_billing_period("202512"), "December 2025");
    }

    #[test]
    fn test_format_billing_period_leaves_malformed_input_alone() {
        assert_eq!(format_billing_period(""), "");
        assert_eq!(format_billing_period("20253"), "20253");
        assert_eq!(format_billing_period("2025031"), "2025031");
        assert_eq!(format_billing_period("202513"), "202513");
        assert_eq!(format_billing_period("March!"), "March!");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(12.0), "$12.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1234.50");
        assert_eq!(format_currency(9.999), "$10.00");
        assert_eq!(format_currency(-0.0), "$0.00");
    }

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("pending"), "Pending");
        assert_eq!(capitalize_first_letter("Paid"), "Paid");
        assert_eq!(capitalize_first_letter(""), "");
        assert_eq!(capitalize_first_letter("ñandú"), "Ñandú");
    }
}
