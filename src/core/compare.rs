//! Side-by-side comparison of two salaries

use super::salary::{compute_tax, TaxBreakdown, TaxError, TaxInput};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub primary: TaxBreakdown,
    pub comparison: TaxBreakdown,
    /// `comparison - primary` for every field
    pub difference: TaxBreakdown,
}

impl Comparison {
    /// Apply `f` to all three breakdowns, e.g. to change period or round
    pub fn map(&self, f: impl Fn(&TaxBreakdown) -> TaxBreakdown) -> Self {
        Comparison {
            primary: f(&self.primary),
            comparison: f(&self.comparison),
            difference: f(&self.difference),
        }
    }
}

pub fn compare(primary: &TaxInput, comparison: &TaxInput) -> Result<Comparison, TaxError> {
    let primary = compute_tax(primary)?;
    let comparison = compute_tax(comparison)?;
    let difference = primary.difference(&comparison);

    log::debug!(
        "Comparison: gross {} -> {}, net difference {}",
        primary.gross_salary,
        comparison.gross_salary,
        difference.net_salary
    );

    Ok(Comparison {
        primary,
        comparison,
        difference,
    })
}
