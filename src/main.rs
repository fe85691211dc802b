//! GVK report entry point.
//!
//! ## CLI Subcommands
//!
//! - `gvk-report` or `gvk-report report` - Print the text report (default)
//! - `gvk-report report --json` - Print the report as JSON
//! - `gvk-report config` - Show effective logging configuration

mod cli_parser;

use std::process::ExitCode;

use gvk_report::config as gvk_config;
use gvk_report::gvks::total_entries;
use gvk_report::telemetry::init_logging;
use gvk_report::{GvkReport, OutputFormat, UniqueGvks, GVK_LISTS};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("report");
    let config = gvk_config::load();

    if let Err(e) = init_logging(&config.log) {
        eprintln!("Logging disabled: {}", e);
    }

    match command {
        "report" | "" => match parse_report_args(args.get(2..).unwrap_or(&[])) {
            Some(format) => run_report(format),
            None => {
                cli_parser::print_command_help("report");
                ExitCode::FAILURE
            }
        },
        "config" => {
            for line in config.effective_lines() {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        "help" | "--help" | "-h" => {
            if let Some(sub) = args.get(2) {
                cli_parser::print_command_help(sub);
            } else {
                cli_parser::print_usage();
            }
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("gvk-report {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            cli_parser::print_usage();
            ExitCode::FAILURE
        }
    }
}

/// Resolve the output format from `report` arguments. Text unless `--json`.
fn parse_report_args(args: &[String]) -> Option<OutputFormat> {
    let mut format = OutputFormat::Text;
    for arg in args {
        match arg.as_str() {
            "--json" => format = OutputFormat::Json,
            _ => {
                eprintln!("Unknown argument: {}", arg);
                return None;
            }
        }
    }
    Some(format)
}

fn run_report(format: OutputFormat) -> ExitCode {
    let unique = UniqueGvks::embedded();
    let total = total_entries(GVK_LISTS);
    tracing::debug!(
        lists = GVK_LISTS.len(),
        entries = total,
        unique = unique.len(),
        duplicates = unique.duplicates_removed(total),
        "deduplicated gvk lists"
    );

    let report = GvkReport::from_unique(&unique);
    let stdout = std::io::stdout();
    match report.write(&mut stdout.lock(), format) {
        Ok(()) => {
            tracing::info!(count = report.count, %format, "report written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
