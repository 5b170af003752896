pub mod compare;
pub mod salary;
pub mod se;
pub mod series;

// Flat public surface for domain types and functions.
pub use compare::{compare, Comparison};
pub use salary::{
    bracket_shares, compute_tax, income_tax, BracketShare, Period, TaxBreakdown, TaxError,
    TaxInput,
};
pub use se::{reference_rates, Bracket, ReferenceRate, BRACKETS};
pub use series::{salary_series, SeriesPoint, SeriesRange, MAX_POINTS};
