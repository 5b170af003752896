//! Display formatting for SEK amounts and rates

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to öre (two decimals, half away from zero) and drop trailing zeros
pub fn round_amount(amount: Decimal) -> Decimal {
    round2(amount).normalize()
}

/// Format as `219 600,00 kr`
pub fn format_sek(amount: Decimal) -> String {
    let rounded = round2(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}{} kr", sign, group_decimal(rounded.abs()))
}

/// Like [`format_sek`] but always carries a sign, for differences
pub fn format_sek_signed(amount: Decimal) -> String {
    if round2(amount) > Decimal::ZERO {
        format!("+{}", format_sek(amount))
    } else {
        format_sek(amount)
    }
}

/// Format a percentage value (39 -> `39,00 %`)
pub fn format_percent(percent: Decimal) -> String {
    let rounded = round2(percent);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}{} %", sign, group_decimal(rounded.abs()))
}

/// Format a rate given as a fraction (0.3142 -> `31,42 %`)
pub fn format_rate(rate: Decimal) -> String {
    format_percent(rate * dec!(100))
}

fn group_decimal(amount: Decimal) -> String {
    let text = format!("{:.2}", amount);
    let (whole, fraction) = text.split_once('.').unwrap_or((&text, "00"));
    format!("{},{}", group_thousands(whole), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sek_amounts() {
        assert_eq!(format_sek(dec!(219600)), "219 600,00 kr");
        assert_eq!(format_sek(dec!(0)), "0,00 kr");
        assert_eq!(format_sek(dec!(999.995)), "1 000,00 kr");
        assert_eq!(format_sek(dec!(1234567.891)), "1 234 567,89 kr");
        assert_eq!(format_sek(dec!(-10000)), "-10 000,00 kr");
        assert_eq!(format_sek(dec!(-0.001)), "0,00 kr");
    }

    #[test]
    fn signed_amounts() {
        assert_eq!(format_sek_signed(dec!(51440)), "+51 440,00 kr");
        assert_eq!(format_sek_signed(dec!(-5)), "-5,00 kr");
        assert_eq!(format_sek_signed(dec!(0)), "0,00 kr");
    }

    #[test]
    fn rounding_to_ore() {
        assert_eq!(round_amount(dec!(0.005)), dec!(0.01));
        assert_eq!(round_amount(dec!(-0.005)), dec!(-0.01));
        assert_eq!(round_amount(dec!(115200.00)).to_string(), "115200");
        assert_eq!(round_amount(dec!(18300.4449)).to_string(), "18300.44");
    }

    #[test]
    fn percentages() {
        assert_eq!(format_percent(dec!(39)), "39,00 %");
        assert_eq!(format_percent(dec!(42.636)), "42,64 %");
        assert_eq!(format_rate(dec!(0.3142)), "31,42 %");
        assert_eq!(format_rate(dec!(0.07)), "7,00 %");
    }
}
