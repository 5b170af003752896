//! Calc command - breakdown for a single salary

use super::{breakdown_rows, render_table, BracketRow};
use clap::Args;
use lonekalk::core::{bracket_shares, compute_tax, BracketShare, Period, TaxBreakdown, TaxInput};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct CalcCommand {
    /// Gross salary in SEK (monthly unless --yearly is given)
    salary: Decimal,

    /// Treat the salary as yearly and show yearly amounts
    #[arg(short, long)]
    yearly: bool,

    /// Dividend income in SEK
    #[arg(short, long, default_value_t = Decimal::ZERO)]
    dividends: Decimal,

    /// Realised capital gains in SEK
    #[arg(short = 'g', long, default_value_t = Decimal::ZERO)]
    capital_gains: Decimal,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalcOutput {
    period: Period,
    breakdown: TaxBreakdown,
    yearly: TaxBreakdown,
    brackets: Vec<BracketShare>,
}

impl CalcCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let period = Period::from_is_yearly(self.yearly);
        let input = TaxInput::new(self.salary, period)
            .with_dividends(self.dividends)
            .with_capital_gains(self.capital_gains);
        let yearly = compute_tax(&input)?;
        let shares = bracket_shares(yearly.gross_salary);

        if self.json {
            let output = CalcOutput {
                period,
                breakdown: yearly.per_period(period).rounded(),
                yearly: yearly.rounded(),
                brackets: shares,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            self.print_breakdown(&yearly, &shares, period);
        }
        Ok(())
    }

    fn print_breakdown(&self, yearly: &TaxBreakdown, shares: &[BracketShare], period: Period) {
        println!();
        println!("SALARY BREAKDOWN ({})", period.display().to_uppercase());
        println!("{}", render_table(breakdown_rows(&yearly.per_period(period))));
        println!();
        println!("INCOME TAX BY BRACKET (YEARLY)");
        println!("{}", render_table(shares.iter().map(BracketRow::from)));
        println!();
    }
}
