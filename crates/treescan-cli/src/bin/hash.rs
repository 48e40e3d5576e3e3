//! treescan-hash: Print the SHA-256 of a single file as JSON

use std::process::ExitCode;

use clap::Parser;
use treescan_cli::cli::is_informational;
use treescan_cli::commands::hash::{self, HashOutcome, HASH_USAGE};
use treescan_cli::HashCli;

fn main() -> ExitCode {
    let cli = match HashCli::try_parse() {
        Ok(cli) => cli,
        Err(e) if is_informational(&e) => e.exit(),
        Err(_) => {
            println!("{}", HashOutcome::failed(HASH_USAGE).to_json());
            return ExitCode::FAILURE;
        }
    };

    let outcome = hash::run(&cli.file_path);
    println!("{}", outcome.to_json());

    if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
