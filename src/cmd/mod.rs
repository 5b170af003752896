pub mod batch;
pub mod calc;
pub mod compare;
pub mod graph;
pub mod rates;
pub mod schema;

use lonekalk::core::{BracketShare, TaxBreakdown};
use lonekalk::money::{format_percent, format_rate, format_sek};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Open a file for reading, or stdin with "-"
pub fn open_input(path: &Path) -> anyhow::Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        let stdin = io::stdin();
        let mut buffer = Vec::new();
        stdin.lock().read_to_end(&mut buffer)?;
        if buffer.is_empty() {
            anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
        }
        Ok(Box::new(io::Cursor::new(buffer)))
    } else {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Render rows with the value columns right-aligned
pub fn render_table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

#[derive(Debug, Clone, Tabled)]
pub struct AmountRow {
    #[tabled(rename = "Item")]
    pub item: &'static str,
    #[tabled(rename = "Amount")]
    pub amount: String,
}

/// Breakdown as label/amount rows, in display order
pub fn breakdown_rows(b: &TaxBreakdown) -> Vec<AmountRow> {
    let row = |item, amount| AmountRow {
        item,
        amount: format_sek(amount),
    };
    let mut rows = vec![
        row("Gross salary", b.gross_salary),
        row("Income tax", b.income_tax),
        row("Pension contribution", b.pension_contribution),
        row("Total tax", b.total_tax),
        row("Net salary", b.net_salary),
        AmountRow {
            item: "Tax percentage",
            amount: format_percent(b.tax_percentage),
        },
        row("Employer social security", b.social_security),
        row("Total employer cost", b.employer_cost),
    ];
    if !b.dividend_tax.is_zero() {
        rows.push(row("Dividend tax", b.dividend_tax));
    }
    if !b.capital_gains_tax.is_zero() {
        rows.push(row("Capital gains tax", b.capital_gains_tax));
    }
    rows
}

#[derive(Debug, Clone, Tabled)]
pub struct BracketRow {
    #[tabled(rename = "Bracket")]
    pub bracket: String,
    #[tabled(rename = "Rate")]
    pub rate: String,
    #[tabled(rename = "Taxed")]
    pub taxed: String,
    #[tabled(rename = "Tax")]
    pub tax: String,
}

impl From<&BracketShare> for BracketRow {
    fn from(share: &BracketShare) -> Self {
        let bracket = match share.upper {
            Some(upper) => format!("{} - {}", format_sek(share.lower), format_sek(upper)),
            None => format!("above {}", format_sek(share.lower)),
        };
        BracketRow {
            bracket,
            rate: format_rate(share.rate),
            taxed: format_sek(share.taxed_amount),
            tax: format_sek(share.tax),
        }
    }
}
