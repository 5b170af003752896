//! Fixed Swedish rates for the single supported income year.
//!
//! Nothing here is configurable at runtime: the calculator models one year
//! and one jurisdiction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Upper bound (inclusive) of the base bracket
pub const LOWER_THRESHOLD: Decimal = dec!(540700);
/// Upper bound (inclusive) of the middle bracket
pub const UPPER_THRESHOLD: Decimal = dec!(709300);

pub const BASE_RATE: Decimal = dec!(0.32);
pub const MIDDLE_RATE: Decimal = dec!(0.52);
pub const TOP_RATE: Decimal = dec!(0.57);

/// Employer contribution on gross salary, uncapped
pub const SOCIAL_SECURITY_RATE: Decimal = dec!(0.3142);

pub const PENSION_RATE: Decimal = dec!(0.07);
/// Ceiling on the yearly pension contribution
pub const PENSION_CAP: Decimal = dec!(39700);

pub const DIVIDEND_RATE: Decimal = dec!(0.30);
pub const CAPITAL_GAINS_RATE: Decimal = dec!(0.30);

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Largest amount accepted for any single input field
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Income range taxed at a single marginal rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    /// Income above this amount falls into the bracket
    #[serde(with = "rust_decimal::serde::float")]
    pub lower: Decimal,
    /// Inclusive upper bound, `None` for the top bracket
    #[serde(with = "rust_decimal::serde::float_option")]
    pub upper: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
}

/// Income tax brackets, lowest first.
///
/// The base bracket starts at zero: there is no personal allowance, the whole
/// income up to [`LOWER_THRESHOLD`] is taxed at [`BASE_RATE`].
pub const BRACKETS: [Bracket; 3] = [
    Bracket {
        lower: Decimal::ZERO,
        upper: Some(LOWER_THRESHOLD),
        rate: BASE_RATE,
    },
    Bracket {
        lower: LOWER_THRESHOLD,
        upper: Some(UPPER_THRESHOLD),
        rate: MIDDLE_RATE,
    },
    Bracket {
        lower: UPPER_THRESHOLD,
        upper: None,
        rate: TOP_RATE,
    },
];

/// One line of the static reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRate {
    pub label: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    pub applies_to: &'static str,
}

const REFERENCE_RATES: &[ReferenceRate] = &[
    ReferenceRate {
        label: "Income tax (base)",
        rate: BASE_RATE,
        applies_to: "Yearly income up to 540 700 kr",
    },
    ReferenceRate {
        label: "Income tax (middle)",
        rate: MIDDLE_RATE,
        applies_to: "Yearly income from 540 700 kr up to 709 300 kr",
    },
    ReferenceRate {
        label: "Income tax (top)",
        rate: TOP_RATE,
        applies_to: "Yearly income above 709 300 kr",
    },
    ReferenceRate {
        label: "Employer social security",
        rate: SOCIAL_SECURITY_RATE,
        applies_to: "Gross salary, paid by the employer",
    },
    ReferenceRate {
        label: "Pension contribution",
        rate: PENSION_RATE,
        applies_to: "Gross salary, at most 39 700 kr per year",
    },
    ReferenceRate {
        label: "Dividends",
        rate: DIVIDEND_RATE,
        applies_to: "Dividend income",
    },
    ReferenceRate {
        label: "Capital gains",
        rate: CAPITAL_GAINS_RATE,
        applies_to: "Realised capital gains",
    },
];

/// Static reference table shown next to every calculation
pub fn reference_rates() -> &'static [ReferenceRate] {
    REFERENCE_RATES
}
