//! Tally CLI: runs the max benchmark and the counter demo.
//!
//! With no arguments it times `max` over a shuffled list of one million
//! integers, prints the elapsed time, then prints the values returned by
//! two calls on each counter kind and what each counter does.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod commands;
mod format;

use std::process;

use clap::ArgMatches;
use tracing_subscriber::EnvFilter;

use commands::{build_cli, matches_to_config};
use format::{format_error, format_output, OutputMode};

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();
    let output_mode = output_mode(&matches);

    match run(&matches) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    }
}

fn output_mode(matches: &ArgMatches) -> OutputMode {
    if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    }
}

/// Run the benchmark and counter demo, returning the formatted output.
fn run(matches: &ArgMatches) -> Result<String, tally_core::Error> {
    let config = matches_to_config(matches);
    tracing::debug!(?config, "starting run");

    let report = tally_core::run_max_benchmark(&config)?;
    let demo = tally_core::run_counter_demo();

    Ok(format_output(&report, &demo, output_mode(matches)))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
