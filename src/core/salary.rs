//! Salary tax engine: gross salary in, full tax and cost breakdown out.

use super::se::{
    BRACKETS, CAPITAL_GAINS_RATE, DIVIDEND_RATE, MAX_AMOUNT, MONTHS_PER_YEAR, PENSION_CAP,
    PENSION_RATE, SOCIAL_SECURITY_RATE,
};
use crate::money::round_amount;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaxError {
    #[error("invalid {field}: {value} (must be a finite, non-negative number)")]
    InvalidInput { field: &'static str, value: String },
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
    #[error("invalid salary range: {0}")]
    InvalidRange(String),
}

/// Period a salary figure is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Monthly,
    Yearly,
}

impl Period {
    pub fn from_is_yearly(is_yearly: bool) -> Self {
        if is_yearly {
            Period::Yearly
        } else {
            Period::Monthly
        }
    }

    pub fn is_yearly(&self) -> bool {
        matches!(self, Period::Yearly)
    }

    /// Scale an amount in this period up to a yearly amount
    pub fn to_yearly(self, amount: Decimal) -> Decimal {
        match self {
            Period::Monthly => amount * MONTHS_PER_YEAR,
            Period::Yearly => amount,
        }
    }

    /// Scale a yearly amount down to this period
    pub fn yearly_to_period(self, amount: Decimal) -> Decimal {
        match self {
            Period::Monthly => amount / MONTHS_PER_YEAR,
            Period::Yearly => amount,
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Input to [`compute_tax`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxInput {
    /// Gross salary in SEK, monthly or yearly according to `isYearly`
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    #[schemars(with = "f64")]
    pub salary: Decimal,
    /// Whether `salary` is a yearly figure (otherwise monthly)
    #[serde(rename = "isYearly", with = "is_yearly")]
    #[schemars(with = "bool")]
    pub period: Period,
    /// Dividend income in SEK
    #[serde(default, serialize_with = "rust_decimal::serde::float::serialize")]
    #[schemars(with = "Option<f64>")]
    pub dividends: Decimal,
    /// Realised capital gains in SEK
    #[serde(default, serialize_with = "rust_decimal::serde::float::serialize")]
    #[schemars(with = "Option<f64>")]
    pub capital_gains: Decimal,
}

impl TaxInput {
    pub fn new(salary: Decimal, period: Period) -> Self {
        TaxInput {
            salary,
            period,
            dividends: Decimal::ZERO,
            capital_gains: Decimal::ZERO,
        }
    }

    pub fn monthly(salary: Decimal) -> Self {
        Self::new(salary, Period::Monthly)
    }

    pub fn yearly(salary: Decimal) -> Self {
        Self::new(salary, Period::Yearly)
    }

    pub fn with_dividends(mut self, dividends: Decimal) -> Self {
        self.dividends = dividends;
        self
    }

    pub fn with_capital_gains(mut self, capital_gains: Decimal) -> Self {
        self.capital_gains = capital_gains;
        self
    }

    /// Build an input from floating point amounts, rejecting NaN, infinities
    /// and negative values.
    pub fn from_f64(
        salary: f64,
        is_yearly: bool,
        dividends: f64,
        capital_gains: f64,
    ) -> Result<Self, TaxError> {
        let input = TaxInput {
            salary: decimal_from_f64("salary", salary)?,
            period: Period::from_is_yearly(is_yearly),
            dividends: decimal_from_f64("dividends", dividends)?,
            capital_gains: decimal_from_f64("capitalGains", capital_gains)?,
        };
        input.validate()?;
        Ok(input)
    }

    /// Check every amount is non-negative and within [`MAX_AMOUNT`]
    pub fn validate(&self) -> Result<(), TaxError> {
        for (field, value) in [
            ("salary", self.salary),
            ("dividends", self.dividends),
            ("capitalGains", self.capital_gains),
        ] {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(TaxError::InvalidInput {
                    field,
                    value: value.to_string(),
                });
            }
            if value > MAX_AMOUNT {
                return Err(TaxError::OutOfRange {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn decimal_from_f64(field: &'static str, value: f64) -> Result<Decimal, TaxError> {
    if !value.is_finite() {
        return Err(TaxError::InvalidInput {
            field,
            value: value.to_string(),
        });
    }
    // finite but beyond what a Decimal can hold
    Decimal::from_f64(value).ok_or_else(|| TaxError::OutOfRange {
        field,
        value: value.to_string(),
    })
}

mod is_yearly {
    use super::Period;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(period: &Period, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(period.is_yearly())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Period, D::Error> {
        bool::deserialize(deserializer).map(Period::from_is_yearly)
    }
}

/// Tax and cost breakdown of a salary.
///
/// Amounts are yearly unless the value came from [`TaxBreakdown::per_period`].
/// Social security and the dividend and capital gains taxes are reported
/// alongside but are not part of `total_tax` or `net_salary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_salary: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub income_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub social_security: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub pension_contribution: Decimal,
    /// Income tax plus pension contribution
    #[serde(with = "rust_decimal::serde::float")]
    pub total_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_salary: Decimal,
    /// `total_tax` as a percentage of `gross_salary`, zero for a zero salary
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_percentage: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub employer_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub dividend_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub capital_gains_tax: Decimal,
}

impl TaxBreakdown {
    /// Express every amount in `period`. The percentage is unchanged.
    pub fn per_period(&self, period: Period) -> Self {
        self.map_amounts(|amount| period.yearly_to_period(amount))
    }

    /// Round every amount and the percentage to two decimals for display
    pub fn rounded(&self) -> Self {
        TaxBreakdown {
            tax_percentage: round_amount(self.tax_percentage),
            ..self.map_amounts(round_amount)
        }
    }

    /// Field-by-field `other - self`; the percentage becomes a difference in
    /// percentage points.
    pub fn difference(&self, other: &TaxBreakdown) -> Self {
        TaxBreakdown {
            gross_salary: other.gross_salary - self.gross_salary,
            income_tax: other.income_tax - self.income_tax,
            social_security: other.social_security - self.social_security,
            pension_contribution: other.pension_contribution - self.pension_contribution,
            total_tax: other.total_tax - self.total_tax,
            net_salary: other.net_salary - self.net_salary,
            tax_percentage: other.tax_percentage - self.tax_percentage,
            employer_cost: other.employer_cost - self.employer_cost,
            dividend_tax: other.dividend_tax - self.dividend_tax,
            capital_gains_tax: other.capital_gains_tax - self.capital_gains_tax,
        }
    }

    fn map_amounts(&self, f: impl Fn(Decimal) -> Decimal) -> Self {
        TaxBreakdown {
            gross_salary: f(self.gross_salary),
            income_tax: f(self.income_tax),
            social_security: f(self.social_security),
            pension_contribution: f(self.pension_contribution),
            total_tax: f(self.total_tax),
            net_salary: f(self.net_salary),
            tax_percentage: self.tax_percentage,
            employer_cost: f(self.employer_cost),
            dividend_tax: f(self.dividend_tax),
            capital_gains_tax: f(self.capital_gains_tax),
        }
    }
}

/// Portion of a yearly income that fell into one bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketShare {
    #[serde(with = "rust_decimal::serde::float")]
    pub lower: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub upper: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub taxed_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
}

/// Split a yearly income over the brackets, lowest bracket first.
///
/// The walk starts at the top: everything above a bracket's lower bound is
/// taxed at that bracket's rate, and the remainder moves down. Income exactly
/// at a threshold stays in the lower bracket.
pub fn bracket_shares(gross: Decimal) -> Vec<BracketShare> {
    let mut remaining = gross.max(Decimal::ZERO);
    let mut shares: Vec<BracketShare> = BRACKETS
        .iter()
        .rev()
        .map(|bracket| {
            let taxed_amount = if remaining > bracket.lower {
                let taxed = remaining - bracket.lower;
                remaining = bracket.lower;
                taxed
            } else {
                Decimal::ZERO
            };
            BracketShare {
                lower: bracket.lower,
                upper: bracket.upper,
                rate: bracket.rate,
                taxed_amount,
                tax: taxed_amount * bracket.rate,
            }
        })
        .collect();
    shares.reverse();
    shares
}

/// Progressive income tax on a yearly income
pub fn income_tax(gross: Decimal) -> Decimal {
    bracket_shares(gross).iter().map(|share| share.tax).sum()
}

/// Compute the full breakdown for a salary.
///
/// Amounts are validated first; a zero salary is valid and reports a zero
/// tax percentage.
pub fn compute_tax(input: &TaxInput) -> Result<TaxBreakdown, TaxError> {
    input.validate()?;

    let gross_salary = input.period.to_yearly(input.salary);
    let income_tax = income_tax(gross_salary);
    let social_security = gross_salary * SOCIAL_SECURITY_RATE;
    let pension_contribution = (gross_salary * PENSION_RATE).min(PENSION_CAP);
    let total_tax = income_tax + pension_contribution;
    let tax_percentage = if gross_salary.is_zero() {
        Decimal::ZERO
    } else {
        total_tax / gross_salary * dec!(100)
    };

    let breakdown = TaxBreakdown {
        gross_salary,
        income_tax,
        social_security,
        pension_contribution,
        total_tax,
        net_salary: gross_salary - total_tax,
        tax_percentage,
        employer_cost: gross_salary + social_security,
        dividend_tax: input.dividends * DIVIDEND_RATE,
        capital_gains_tax: input.capital_gains * CAPITAL_GAINS_RATE,
    };

    log::debug!(
        "Salary {} ({}): gross={}, income_tax={}, pension={}, net={}",
        input.salary,
        input.period,
        breakdown.gross_salary,
        breakdown.income_tax,
        breakdown.pension_contribution,
        breakdown.net_salary
    );

    Ok(breakdown)
}
