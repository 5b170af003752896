//! Batch command - breakdowns for every row of a CSV file

use super::{open_input, render_table};
use anyhow::Context;
use clap::Args;
use lonekalk::core::{compute_tax, Period, TaxBreakdown, TaxInput};
use lonekalk::money::{format_percent, format_sek};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use std::path::PathBuf;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct BatchCommand {
    /// CSV file with salary,period,dividends,capital_gains columns. Reads from
    /// stdin if not specified.
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Output as CSV instead of formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

/// One input row
#[derive(Debug, Clone, Deserialize)]
struct BatchRecord {
    salary: Decimal,
    period: Period,
    #[serde(default)]
    dividends: Option<Decimal>,
    #[serde(default)]
    capital_gains: Option<Decimal>,
}

impl From<BatchRecord> for TaxInput {
    fn from(record: BatchRecord) -> Self {
        TaxInput::new(record.salary, record.period)
            .with_dividends(record.dividends.unwrap_or_default())
            .with_capital_gains(record.capital_gains.unwrap_or_default())
    }
}

/// Parse the batch CSV format into engine inputs
pub fn read_inputs<R: Read>(reader: R) -> anyhow::Result<Vec<TaxInput>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut inputs = Vec::new();
    for (i, result) in rdr.deserialize::<BatchRecord>().enumerate() {
        let record = result.with_context(|| format!("Failed to parse row {}", i + 1))?;
        inputs.push(record.into());
    }
    Ok(inputs)
}

/// Compute every input, failing on the first invalid row
pub fn compute_all(inputs: &[TaxInput]) -> anyhow::Result<Vec<TaxBreakdown>> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| compute_tax(input).with_context(|| format!("Row {}", i + 1)))
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchResult {
    row: usize,
    input: TaxInput,
    breakdown: TaxBreakdown,
}

/// CSV line per row, amounts as plain decimal text
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct BreakdownRecord {
    row: usize,
    gross_salary: String,
    income_tax: String,
    social_security: String,
    pension_contribution: String,
    total_tax: String,
    net_salary: String,
    tax_percentage: String,
    employer_cost: String,
    dividend_tax: String,
    capital_gains_tax: String,
}

impl From<&BatchResult> for BreakdownRecord {
    fn from(r: &BatchResult) -> Self {
        let b = &r.breakdown;
        BreakdownRecord {
            row: r.row,
            gross_salary: b.gross_salary.to_string(),
            income_tax: b.income_tax.to_string(),
            social_security: b.social_security.to_string(),
            pension_contribution: b.pension_contribution.to_string(),
            total_tax: b.total_tax.to_string(),
            net_salary: b.net_salary.to_string(),
            tax_percentage: b.tax_percentage.to_string(),
            employer_cost: b.employer_cost.to_string(),
            dividend_tax: b.dividend_tax.to_string(),
            capital_gains_tax: b.capital_gains_tax.to_string(),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
struct BatchRow {
    #[tabled(rename = "#")]
    row: usize,
    #[tabled(rename = "Gross (yearly)")]
    gross_salary: String,
    #[tabled(rename = "Income tax")]
    income_tax: String,
    #[tabled(rename = "Pension")]
    pension_contribution: String,
    #[tabled(rename = "Net salary")]
    net_salary: String,
    #[tabled(rename = "Tax %")]
    tax_percentage: String,
    #[tabled(rename = "Employer cost")]
    employer_cost: String,
    #[tabled(rename = "Investment tax")]
    investment_tax: String,
}

impl BatchCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let reader = open_input(&self.file)
            .with_context(|| format!("Failed to open: {}", self.file.display()))?;
        let inputs = read_inputs(reader)
            .with_context(|| format!("Failed to read CSV: {}", self.file.display()))?;
        log::info!("Read {} salary rows", inputs.len());

        let breakdowns = compute_all(&inputs)?;
        let results: Vec<BatchResult> = inputs
            .into_iter()
            .zip(breakdowns)
            .enumerate()
            .map(|(i, (input, breakdown))| BatchResult {
                row: i + 1,
                input,
                breakdown: breakdown.rounded(),
            })
            .collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
            Ok(())
        } else if self.csv {
            self.write_csv(&results)
        } else {
            self.print_table(&results);
            Ok(())
        }
    }

    fn print_table(&self, results: &[BatchResult]) {
        if results.is_empty() {
            println!("No salary rows found");
            return;
        }

        let rows = results.iter().map(|r| {
            let b = &r.breakdown;
            BatchRow {
                row: r.row,
                gross_salary: format_sek(b.gross_salary),
                income_tax: format_sek(b.income_tax),
                pension_contribution: format_sek(b.pension_contribution),
                net_salary: format_sek(b.net_salary),
                tax_percentage: format_percent(b.tax_percentage),
                employer_cost: format_sek(b.employer_cost),
                investment_tax: format_sek(b.dividend_tax + b.capital_gains_tax),
            }
        });
        println!("{}", render_table(rows));
    }

    fn write_csv(&self, results: &[BatchResult]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for r in results {
            wtr.serialize(BreakdownRecord::from(r))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lonekalk::core::TaxError;
    use rust_decimal_macros::dec;

    #[test]
    fn reads_rows_with_optional_columns() {
        let data = "\
salary,period,dividends,capital_gains
30000,monthly,,
709300,yearly,10000,5000
";
        let inputs = read_inputs(data.as_bytes()).unwrap();

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0], TaxInput::monthly(dec!(30000)));
        assert_eq!(
            inputs[1],
            TaxInput::yearly(dec!(709300))
                .with_dividends(dec!(10000))
                .with_capital_gains(dec!(5000))
        );
    }

    #[test]
    fn bad_period_reports_row() {
        let data = "salary,period,dividends,capital_gains\n30000,weekly,,\n";
        let err = read_inputs(data.as_bytes()).unwrap_err();

        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn negative_salary_fails_with_row() {
        let inputs = vec![
            TaxInput::monthly(dec!(30000)),
            TaxInput::monthly(dec!(-30000)),
        ];
        let err = compute_all(&inputs).unwrap_err();

        assert_eq!(err.to_string(), "Row 2");
        assert!(matches!(
            err.downcast_ref::<TaxError>(),
            Some(TaxError::InvalidInput { field: "salary", .. })
        ));
    }

    #[test]
    fn computes_each_row_independently() {
        let inputs = vec![
            TaxInput::monthly(dec!(30000)),
            TaxInput::yearly(dec!(1000000)),
        ];
        let breakdowns = compute_all(&inputs).unwrap();

        assert_eq!(breakdowns[0].net_salary, dec!(219600));
        assert_eq!(breakdowns[1].income_tax, dec!(426395));
    }
}
