//! Clap command definition and conversion into a `BenchConfig`.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tally_core::{BenchConfig, EmptyInputPolicy};

/// Build the top-level command.
pub fn build_cli() -> Command {
    Command::new("tally")
        .about("Time a max-of-list scan and demonstrate stateful counters")
        .arg(
            Arg::new("len")
                .long("len")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Number of elements in the benchmark list"),
        )
        .arg(
            Arg::new("runs")
                .long("runs")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Timed passes over the list"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .value_parser(value_parser!(u64))
                .help("Seed for shuffling the list"),
        )
        .arg(
            Arg::new("strict-empty")
                .long("strict-empty")
                .action(ArgAction::SetTrue)
                .help("Treat an empty list as an error instead of returning 0"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print a single JSON document"),
        )
}

/// Apply command-line overrides on top of the default configuration.
pub fn matches_to_config(matches: &ArgMatches) -> BenchConfig {
    let mut config = BenchConfig::default();
    if let Some(&len) = matches.get_one::<usize>("len") {
        config = config.with_len(len);
    }
    if let Some(&runs) = matches.get_one::<usize>("runs") {
        config = config.with_runs(runs);
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }
    if matches.get_flag("strict-empty") {
        config = config.with_empty_policy(EmptyInputPolicy::Error);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        build_cli().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn test_no_args_uses_defaults() {
        let config = matches_to_config(&parse(&["tally"]));
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = matches_to_config(&parse(&[
            "tally",
            "--len",
            "10",
            "--runs",
            "3",
            "--seed",
            "9",
            "--strict-empty",
        ]));
        assert_eq!(config.len, 10);
        assert_eq!(config.runs, 3);
        assert_eq!(config.seed, 9);
        assert_eq!(config.empty_policy, EmptyInputPolicy::Error);
    }

    #[test]
    fn test_rejects_non_numeric_len() {
        assert!(build_cli()
            .try_get_matches_from(["tally", "--len", "many"])
            .is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        build_cli().debug_assert();
    }
}
