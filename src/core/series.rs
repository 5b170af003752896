//! Breakdowns over a range of salaries, the data behind the salary chart

use super::salary::{compute_tax, Period, TaxBreakdown, TaxError, TaxInput};
use super::se::MAX_AMOUNT;
use crate::money::round_amount;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Upper limit on the number of points in one series
pub const MAX_POINTS: usize = 10_000;

/// Salaries from `start` to `end` inclusive, `step` apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesRange {
    pub start: Decimal,
    pub end: Decimal,
    pub step: Decimal,
}

impl SeriesRange {
    /// Number of points, or an error if the range is empty or too large
    pub fn point_count(&self) -> Result<usize, TaxError> {
        if self.step <= Decimal::ZERO {
            return Err(TaxError::InvalidRange(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.start.is_sign_negative() && !self.start.is_zero() {
            return Err(TaxError::InvalidRange(format!(
                "start must not be negative, got {}",
                self.start
            )));
        }
        if self.end > MAX_AMOUNT {
            return Err(TaxError::InvalidRange(format!(
                "end {} is above {}",
                self.end, MAX_AMOUNT
            )));
        }
        if self.start > self.end {
            return Err(TaxError::InvalidRange(format!(
                "start {} is after end {}",
                self.start, self.end
            )));
        }
        let steps = self
            .end
            .checked_sub(self.start)
            .and_then(|span| span.checked_div(self.step))
            .map(|steps| steps.floor())
            .ok_or_else(too_many_points)?;
        match steps.to_usize() {
            Some(steps) if steps < MAX_POINTS => Ok(steps + 1),
            _ => Err(too_many_points()),
        }
    }
}

fn too_many_points() -> TaxError {
    TaxError::InvalidRange(format!("more than {} points requested", MAX_POINTS))
}

/// One point of the salary chart, amounts in the series period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_salary: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub income_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_salary: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub social_security: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub employer_cost: Decimal,
}

impl SeriesPoint {
    /// Round every amount for display
    pub fn rounded(&self) -> Self {
        SeriesPoint {
            gross_salary: round_amount(self.gross_salary),
            income_tax: round_amount(self.income_tax),
            net_salary: round_amount(self.net_salary),
            social_security: round_amount(self.social_security),
            employer_cost: round_amount(self.employer_cost),
        }
    }
}

impl From<&TaxBreakdown> for SeriesPoint {
    fn from(b: &TaxBreakdown) -> Self {
        SeriesPoint {
            gross_salary: b.gross_salary,
            income_tax: b.income_tax,
            net_salary: b.net_salary,
            social_security: b.social_security,
            employer_cost: b.employer_cost,
        }
    }
}

/// Compute a breakdown for every salary in `range`, where salaries and the
/// resulting amounts are both expressed in `period`.
pub fn salary_series(range: SeriesRange, period: Period) -> Result<Vec<SeriesPoint>, TaxError> {
    let len = range.point_count()?;
    let mut points = Vec::with_capacity(len);
    let mut salary = range.start;
    for i in 0..len {
        // only step while still inside the range
        if i > 0 {
            salary += range.step;
        }
        let breakdown = compute_tax(&TaxInput::new(salary, period))?;
        points.push(SeriesPoint::from(&breakdown.per_period(period)));
    }
    log::debug!(
        "Series {}..={} step {} ({}): {} points",
        range.start,
        range.end,
        range.step,
        period,
        points.len()
    );
    Ok(points)
}
