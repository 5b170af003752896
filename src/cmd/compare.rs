//! Compare command - two salaries side by side

use super::render_table;
use clap::Args;
use lonekalk::core::{compare, Comparison, Period, TaxBreakdown, TaxInput};
use lonekalk::money::{format_percent, format_sek, format_sek_signed};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct CompareCommand {
    /// Current gross salary in SEK
    salary: Decimal,

    /// Salary to compare against, in the same period
    comparison: Decimal,

    /// Treat both salaries as yearly and show yearly amounts
    #[arg(short, long)]
    yearly: bool,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct CompareOutput {
    period: Period,
    #[serde(flatten)]
    comparison: Comparison,
}

#[derive(Debug, Clone, Tabled)]
struct CompareRow {
    #[tabled(rename = "Item")]
    item: &'static str,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Comparison")]
    comparison: String,
    #[tabled(rename = "Difference")]
    difference: String,
}

impl CompareCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let period = Period::from_is_yearly(self.yearly);
        let result = compare(
            &TaxInput::new(self.salary, period),
            &TaxInput::new(self.comparison, period),
        )?
        .map(|b| b.per_period(period));

        if self.json {
            let output = CompareOutput {
                period,
                comparison: result.map(TaxBreakdown::rounded),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!();
            println!("SALARY COMPARISON ({})", period.display().to_uppercase());
            println!("{}", render_table(compare_rows(&result)));
            println!();
        }
        Ok(())
    }
}

fn compare_rows(c: &Comparison) -> Vec<CompareRow> {
    let amount = |item, f: fn(&TaxBreakdown) -> Decimal| CompareRow {
        item,
        current: format_sek(f(&c.primary)),
        comparison: format_sek(f(&c.comparison)),
        difference: format_sek_signed(f(&c.difference)),
    };
    let points = c.difference.tax_percentage;
    vec![
        amount("Gross salary", |b| b.gross_salary),
        amount("Income tax", |b| b.income_tax),
        amount("Pension contribution", |b| b.pension_contribution),
        amount("Total tax", |b| b.total_tax),
        amount("Net salary", |b| b.net_salary),
        CompareRow {
            item: "Tax percentage",
            current: format_percent(c.primary.tax_percentage),
            comparison: format_percent(c.comparison.tax_percentage),
            difference: if points > Decimal::ZERO {
                format!("+{}", format_percent(points))
            } else {
                format_percent(points)
            },
        },
        amount("Employer social security", |b| b.social_security),
        amount("Total employer cost", |b| b.employer_cost),
    ]
}
