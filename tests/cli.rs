//! E2E tests for the command line

use std::process::{Command, Output};

fn lonekalk(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lonekalk"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(output.status.success(), "Command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

/// Monthly salary shown as a monthly breakdown table
#[test]
fn calc_monthly_table() {
    let output = lonekalk(&["calc", "30000"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("SALARY BREAKDOWN (MONTHLY)"));
    assert!(stdout.contains("30 000,00 kr"));
    assert!(stdout.contains("9 600,00 kr"));
    assert!(stdout.contains("18 300,00 kr"));
    assert!(stdout.contains("39,00 %"));
    assert!(stdout.contains("INCOME TAX BY BRACKET"));
    assert!(stdout.contains("115 200,00 kr"));
}

/// Yearly salary in the top bracket
#[test]
fn calc_yearly_top_bracket() {
    let output = lonekalk(&["calc", "1000000", "--yearly"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("SALARY BREAKDOWN (YEARLY)"));
    assert!(stdout.contains("426 395,00 kr"));
    assert!(stdout.contains("39 700,00 kr"));
    assert!(stdout.contains("above 709 300,00 kr"));
}

/// JSON output carries both the period view and the yearly figures
#[test]
fn calc_json() {
    let json = stdout_json(&lonekalk(&[
        "calc",
        "30000",
        "--dividends",
        "10000",
        "--capital-gains",
        "5000",
        "--json",
    ]));

    assert_eq!(json["period"], "monthly");
    assert_eq!(json["breakdown"]["grossSalary"], 30000.0);
    assert_eq!(json["breakdown"]["netSalary"], 18300.0);
    assert_eq!(json["yearly"]["grossSalary"], 360000.0);
    assert_eq!(json["yearly"]["incomeTax"], 115200.0);
    assert_eq!(json["yearly"]["pensionContribution"], 25200.0);
    assert_eq!(json["yearly"]["socialSecurity"], 113112.0);
    assert_eq!(json["yearly"]["employerCost"], 473112.0);
    assert_eq!(json["yearly"]["taxPercentage"], 39.0);
    assert_eq!(json["yearly"]["dividendTax"], 3000.0);
    assert_eq!(json["yearly"]["capitalGainsTax"], 1500.0);
    assert_eq!(json["yearly"]["netSalary"], 219600.0);
    assert_eq!(json["brackets"].as_array().map(Vec::len), Some(3));
}

/// Zero salary is valid and reports a zero percentage
#[test]
fn calc_zero_salary() {
    let json = stdout_json(&lonekalk(&["calc", "0", "--json"]));

    assert_eq!(json["yearly"]["taxPercentage"], 0.0);
    assert_eq!(json["yearly"]["netSalary"], 0.0);
}

/// Negative amounts are rejected with a non-zero exit
#[test]
fn calc_rejects_negative_dividends() {
    let output = lonekalk(&["calc", "30000", "--dividends=-100"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("invalid dividends"), "stderr: {}", stderr);
}

#[test]
fn calc_rejects_non_numeric_salary() {
    let output = lonekalk(&["calc", "30k"]);
    assert!(!output.status.success());
}

#[test]
fn compare_json() {
    let json = stdout_json(&lonekalk(&[
        "compare", "500000", "600000", "--yearly", "--json",
    ]));

    assert_eq!(json["period"], "yearly");
    assert_eq!(json["primary"]["grossSalary"], 500000.0);
    assert_eq!(json["comparison"]["grossSalary"], 600000.0);
    assert_eq!(json["difference"]["incomeTax"], 43860.0);
    assert_eq!(json["difference"]["netSalary"], 51440.0);
}

#[test]
fn compare_table() {
    let output = lonekalk(&["compare", "30000", "40000"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("SALARY COMPARISON (MONTHLY)"));
    assert!(stdout.contains("+10 000,00 kr"));
}

#[test]
fn rates_table() {
    let output = lonekalk(&["rates"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Income tax (base)"));
    assert!(stdout.contains("32,00 %"));
    assert!(stdout.contains("57,00 %"));
    assert!(stdout.contains("31,42 %"));
}

#[test]
fn rates_json() {
    let json = stdout_json(&lonekalk(&["rates", "--json"]));
    let rates = json.as_array().expect("array of rates");

    assert_eq!(rates.len(), 7);
    assert_eq!(rates[0]["label"], "Income tax (base)");
    assert_eq!(rates[0]["rate"], 0.32);
}

#[test]
fn graph_csv() {
    let output = lonekalk(&[
        "graph", "--from", "30000", "--to", "40000", "--step", "10000", "--csv",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(
        lines[0],
        "grossSalary,incomeTax,netSalary,socialSecurity,employerCost"
    );
    assert_eq!(lines[1], "30000,9600,18300,9426,39426");
    assert_eq!(lines.len(), 3);
}

#[test]
fn graph_rejects_zero_step() {
    let output = lonekalk(&["graph", "--to", "40000", "--step", "0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("step must be positive"), "stderr: {}", stderr);
}

/// Bounds beyond the largest accepted amount fail cleanly instead of overflowing
#[test]
fn graph_rejects_huge_range() {
    let output = lonekalk(&[
        "graph",
        "--to",
        "79228162514264337593543950335",
        "--step",
        "0.0000000001",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(stderr.contains("invalid salary range"), "stderr: {}", stderr);
    assert!(!stderr.contains("panicked"), "stderr: {}", stderr);
}

#[test]
fn batch_table() {
    let output = lonekalk(&["batch", "tests/data/salaries.csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("219 600,00 kr"));
    assert!(stdout.contains("260 696,00 kr"));
    assert!(stdout.contains("426 395,00 kr"));
    assert!(stdout.contains("4 500,00 kr"));
}

#[test]
fn batch_json() {
    let json = stdout_json(&lonekalk(&["batch", "tests/data/salaries.csv", "--json"]));
    let rows = json.as_array().expect("array of results");

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["row"], 1);
    assert_eq!(rows[0]["input"]["isYearly"], false);
    assert_eq!(rows[1]["breakdown"]["incomeTax"], 260696.0);
    assert_eq!(rows[2]["breakdown"]["dividendTax"], 3000.0);
    assert_eq!(rows[3]["breakdown"]["taxPercentage"], 0.0);
}

#[test]
fn batch_csv() {
    let output = lonekalk(&["batch", "tests/data/salaries.csv", "--csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(
        lines[0],
        "row,grossSalary,incomeTax,socialSecurity,pensionContribution,totalTax,\
netSalary,taxPercentage,employerCost,dividendTax,capitalGainsTax"
    );
    assert_eq!(
        lines[1],
        "1,360000,115200,113112,25200,140400,219600,39,473112,0,0"
    );
    assert_eq!(lines.len(), 5);
}

#[test]
fn batch_reports_invalid_row() {
    let output = lonekalk(&["batch", "tests/data/invalid_salary.csv"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Row 2"), "stderr: {}", stderr);
    assert!(stderr.contains("invalid salary"), "stderr: {}", stderr);
}

#[test]
fn schema_outputs() {
    let json = stdout_json(&lonekalk(&["schema"]));
    assert!(json["properties"]["isYearly"].is_object());
    assert!(json["properties"]["capitalGains"].is_object());
    assert_eq!(json["properties"]["salary"]["type"], "number");

    let output = lonekalk(&["schema", "csv-header"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "salary,period,dividends,capital_gains");
}
