//! treescan: Inventory two file trees as JSON

use std::process::ExitCode;

use clap::Parser;
use treescan_cli::cli::{is_informational, usage_message};
use treescan_cli::commands::scan;
use treescan_cli::logging::setup_logging;
use treescan_cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if is_informational(&e) => e.exit(),
        Err(e) => {
            println!("{}", scan::failure_json(&usage_message(&e), true));
            return ExitCode::FAILURE;
        }
    };

    setup_logging(cli.verbose);
    let pretty = !cli.compact;

    match scan::execute(&cli.source_path, &cli.dest_path, cli.scanner_config(), pretty) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", scan::failure_json(&format!("Error with {e:#}"), pretty));
            ExitCode::FAILURE
        }
    }
}
