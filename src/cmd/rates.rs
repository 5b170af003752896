//! Rates command - the static reference table

use super::render_table;
use clap::Args;
use lonekalk::core::reference_rates;
use lonekalk::money::format_rate;
use tabled::Tabled;

#[derive(Args, Debug)]
pub struct RatesCommand {
    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Tabled)]
struct RateRow {
    #[tabled(rename = "Tax")]
    label: &'static str,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Applies to")]
    applies_to: &'static str,
}

impl RatesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(reference_rates())?);
            return Ok(());
        }

        let rows = reference_rates().iter().map(|r| RateRow {
            label: r.label,
            rate: format_rate(r.rate),
            applies_to: r.applies_to,
        });
        println!();
        println!("TAX RATES");
        println!("{}", render_table(rows));
        println!();
        Ok(())
    }
}
