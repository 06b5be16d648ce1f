use std::{error::Error, fs, path::Path};

use clap::Parser;
use wellplate::scan::{build_scan_plan, ScanPlanInput, ScanPlanReport};

/// Scan-plan CLI for calibrated well plates.
#[derive(Debug, Parser)]
#[command(author, version, about = "Well-plate scan position planner")]
struct Args {
    /// Path to JSON file containing a ScanPlanInput.
    #[arg(long)]
    input: String,

    /// Pretty-print the report JSON.
    #[arg(long)]
    pretty: bool,
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let value = serde_json::from_str(&data)?;
    Ok(value)
}

fn write_report_json(report: &ScanPlanReport, pretty: bool) -> Result<String, Box<dyn Error>> {
    if pretty {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_json::to_string(report)?)
    }
}

fn run_plan_from_file(input_path: &str, pretty: bool) -> Result<String, Box<dyn Error>> {
    let input: ScanPlanInput = load_json_file(Path::new(input_path))?;
    let report = build_scan_plan(&input)?;
    write_report_json(&report, pretty)
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let json = run_plan_from_file(&args.input, args.pretty)?;
    println!("{}", json);
    Ok(())
}
