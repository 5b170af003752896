//! Graph command - chart data over a salary range

use super::render_table;
use clap::Args;
use lonekalk::core::{salary_series, Period, SeriesPoint, SeriesRange};
use lonekalk::money::format_sek;
use rust_decimal::Decimal;
use std::io;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct GraphCommand {
    /// First salary in the range
    #[arg(long, default_value_t = Decimal::ZERO)]
    from: Decimal,

    /// Last salary in the range (inclusive)
    #[arg(long)]
    to: Decimal,

    /// Distance between salaries
    #[arg(long)]
    step: Decimal,

    /// Salaries and amounts are yearly instead of monthly
    #[arg(short, long)]
    yearly: bool,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

#[derive(Debug, Clone, Tabled)]
struct PointRow {
    #[tabled(rename = "Gross salary")]
    gross_salary: String,
    #[tabled(rename = "Income tax")]
    income_tax: String,
    #[tabled(rename = "Net salary")]
    net_salary: String,
    #[tabled(rename = "Social security")]
    social_security: String,
    #[tabled(rename = "Employer cost")]
    employer_cost: String,
}

impl From<&SeriesPoint> for PointRow {
    fn from(p: &SeriesPoint) -> Self {
        PointRow {
            gross_salary: format_sek(p.gross_salary),
            income_tax: format_sek(p.income_tax),
            net_salary: format_sek(p.net_salary),
            social_security: format_sek(p.social_security),
            employer_cost: format_sek(p.employer_cost),
        }
    }
}

/// CSV line with amounts as plain decimal text
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct PointRecord {
    gross_salary: String,
    income_tax: String,
    net_salary: String,
    social_security: String,
    employer_cost: String,
}

impl From<SeriesPoint> for PointRecord {
    fn from(p: SeriesPoint) -> Self {
        PointRecord {
            gross_salary: p.gross_salary.to_string(),
            income_tax: p.income_tax.to_string(),
            net_salary: p.net_salary.to_string(),
            social_security: p.social_security.to_string(),
            employer_cost: p.employer_cost.to_string(),
        }
    }
}

impl GraphCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let period = Period::from_is_yearly(self.yearly);
        let range = SeriesRange {
            start: self.from,
            end: self.to,
            step: self.step,
        };
        let points = salary_series(range, period)?;

        if self.csv {
            self.write_csv(&points)
        } else {
            println!();
            println!("SALARY CHART ({})", period.display().to_uppercase());
            println!("{}", render_table(points.iter().map(PointRow::from)));
            println!();
            Ok(())
        }
    }

    fn write_csv(&self, points: &[SeriesPoint]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for p in points {
            wtr.serialize(PointRecord::from(p.rounded()))?;
        }
        wtr.flush()?;
        Ok(())
    }
}
