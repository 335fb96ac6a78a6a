//! Output formatting for human and JSON modes.

use serde::Serialize;
use tally_core::{BenchReport, CounterDemo, CounterProfile, Error};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

#[derive(Serialize)]
struct RunOutput<'a> {
    benchmark: &'a BenchReport,
    counters: &'a CounterDemo,
}

/// Render the benchmark report and counter demo.
pub fn format_output(report: &BenchReport, demo: &CounterDemo, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            let output = RunOutput {
                benchmark: report,
                counters: demo,
            };
            serde_json::to_string_pretty(&output)
                .unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
        }
        OutputMode::Human => {
            let mut lines = Vec::new();
            lines.push(format!(
                "max of {} elements: {} ({:.6}s over {} run(s), {:.6}s per run)",
                report.len,
                report.max,
                report.elapsed.as_secs_f64(),
                report.runs,
                report.per_run.as_secs_f64(),
            ));
            lines.extend(demo.single.iter().map(u64::to_string));
            lines.extend(demo.pair.iter().map(u64::to_string));
            lines.extend(demo.profiles.iter().map(format_profile));
            lines.join("\n")
        }
    }
}

fn format_profile(profile: &CounterProfile) -> String {
    format!(
        "{:?} counter: each call adds {} to {} and returns {} (calls: {})",
        profile.kind,
        profile.step,
        profile.fields.join(", "),
        profile.returns,
        profile.calls,
    )
}

/// Render an error for stderr.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::json!({ "error": err.to_string() }).to_string(),
        OutputMode::Human => format!("(error) {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{run_counter_demo, run_max_benchmark, BenchConfig};

    #[test]
    fn test_human_output_lists_counter_values() {
        let report = run_max_benchmark(&BenchConfig::quick()).unwrap();
        let demo = run_counter_demo();
        let text = format_output(&report, &demo, OutputMode::Human);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("max of 1000 elements: 999"));
        assert_eq!(&lines[1..5], &["1", "2", "1", "2"]);
        assert!(lines[5].starts_with("Single counter: each call adds 1 to x and returns x"));
        assert!(lines[6].starts_with("Pair counter: each call adds 1 to x, y and returns x"));
    }

    #[test]
    fn test_json_output_parses() {
        let report = run_max_benchmark(&BenchConfig::quick()).unwrap();
        let demo = run_counter_demo();
        let text = format_output(&report, &demo, OutputMode::Json);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed["benchmark"]["max"], 999);
        assert_eq!(parsed["counters"]["single"], serde_json::json!([1, 2]));
        assert_eq!(parsed["counters"]["profiles"][1]["fields"], serde_json::json!(["x", "y"]));
    }

    #[test]
    fn test_format_error() {
        let err = Error::EmptyInput;
        assert_eq!(format_error(&err, OutputMode::Human), "(error) empty input");
        assert_eq!(format_error(&err, OutputMode::Json), r#"{"error":"empty input"}"#);
    }
}
