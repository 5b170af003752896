//! Schema command - describes the salary input accepted by `calc` and `batch`

use clap::Args;
use lonekalk::core::TaxInput;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Which description to print
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema of one salary input (`salary`, `isYearly`, `dividends`,
    /// `capitalGains`), the camelCase contract also used in batch JSON output
    JsonSchema,
    /// Header line to start a batch salary CSV with
    CsvHeader,
    /// Batch CSV columns, whether each is required, and a sample file
    CsvFields,
}

/// Batch CSV column: name, required, meaning
type Column = (&'static str, bool, &'static str);

const BATCH_COLUMNS: &[Column] = &[
    ("salary", true, "Gross salary in SEK for the given period"),
    ("period", true, "\"monthly\" or \"yearly\""),
    ("dividends", false, "Yearly dividend income in SEK, taxed at 30 %"),
    ("capital_gains", false, "Yearly realised capital gains in SEK, taxed at 30 %"),
];

const BATCH_SAMPLE: &str = "\
salary,period,dividends,capital_gains
30000,monthly,,
709300,yearly,10000,5000";

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => {
                let schema = schema_for!(TaxInput);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaFormat::CsvHeader => println!("{}", batch_header()),
            SchemaFormat::CsvFields => print_batch_columns(),
        }
        Ok(())
    }
}

fn batch_header() -> String {
    BATCH_COLUMNS
        .iter()
        .map(|(name, ..)| *name)
        .collect::<Vec<_>>()
        .join(",")
}

fn print_batch_columns() {
    println!("Batch salary CSV");
    println!("================");
    println!();
    for (name, required, meaning) in BATCH_COLUMNS {
        let req = if *required { "required" } else { "optional" };
        println!("{:15} ({:8})  {}", name, req, meaning);
    }
    println!();
    println!("Amounts are plain decimal numbers without thousand separators.");
    println!("Empty optional columns count as zero.");
    println!();
    println!("Example:");
    println!("{}", BATCH_SAMPLE);
}
