//! Enumerating a JSON axis map into an output stream.

use std::io::Write;

use log::info;
use serde::Serialize;
use serde_json::Value;

use crate::config::RunConfig;
use crate::permutations::permutations_of_value;

/// What a run found and wrote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub keys: Vec<String>,
    pub length_estimate: usize,
    /// `None` when the count does not fit into a `usize`.
    pub combination_count: Option<usize>,
    pub emitted: usize,
}

/// Writes the combinations of `states` to `out` as configured.
///
/// Combinations are pulled one at a time. Only the table format holds all
/// written rows in memory.
pub fn run(states: Value, config: &RunConfig, out: &mut dyn Write) -> anyhow::Result<RunSummary> {
    let mut permutations = permutations_of_value(states);
    let keys: Vec<String> = permutations.keys().cloned().collect();
    let length_estimate = permutations.length();
    let combination_count = permutations.combination_count();

    let emitted = if config.count_only {
        0
    } else {
        let formatter = config.format.formatter();
        match config.limit {
            Some(limit) => {
                formatter.write_combinations(out, &keys, &mut permutations.by_ref().take(limit))?
            }
            None => formatter.write_combinations(out, &keys, &mut permutations)?,
        }
    };

    info!(
        "wrote {emitted} of {} combinations over {} keys",
        combination_count.map_or_else(|| "too many".to_owned(), |count| count.to_string()),
        keys.len()
    );

    Ok(RunSummary {
        keys,
        length_estimate,
        combination_count,
        emitted,
    })
}

#[cfg(test)]
mod tests {
    use super::{RunSummary, run};
    use crate::config::RunConfig;
    use crate::output::OutputFormat;
    use serde_json::json;

    fn run_to_string(states: serde_json::Value, config: &RunConfig) -> (RunSummary, String) {
        let mut out = Vec::new();
        let summary = run(states, config, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn readme_example() {
        let (summary, text) = run_to_string(json!({"x": [0, 1], "y": [2, 3]}), &RunConfig::default());
        assert_eq!(
            summary,
            RunSummary {
                keys: vec!["x".to_owned(), "y".to_owned()],
                length_estimate: 4,
                combination_count: Some(4),
                emitted: 4,
            }
        );
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec![
                r#"{"x":0,"y":2}"#,
                r#"{"x":1,"y":2}"#,
                r#"{"x":0,"y":3}"#,
                r#"{"x":1,"y":3}"#,
            ]
        );
    }

    #[test]
    fn limit() {
        let config = RunConfig {
            format: OutputFormat::Csv,
            limit: Some(2),
            ..RunConfig::default()
        };
        let (summary, text) = run_to_string(json!({"a": [1, 2, 3], "b": [true, false]}), &config);
        assert_eq!(summary.emitted, 2);
        assert_eq!(summary.combination_count, Some(6));
        assert_eq!(summary.length_estimate, 5);
        assert_eq!(text, "a,b\n1,true\n2,true\n");
    }

    #[test]
    fn count_only() {
        let config = RunConfig {
            count_only: true,
            ..RunConfig::default()
        };
        let (summary, text) = run_to_string(json!({"a": [1, 2, 3], "b": "nope"}), &config);
        assert_eq!(summary.keys, vec!["a".to_owned()]);
        assert_eq!(summary.combination_count, Some(3));
        assert_eq!(summary.emitted, 0);
        assert!(text.is_empty());
    }

    #[test]
    fn not_an_object() {
        let (summary, text) = run_to_string(json!("oops"), &RunConfig::default());
        assert!(summary.keys.is_empty());
        assert_eq!(summary.combination_count, Some(0));
        assert_eq!(summary.emitted, 0);
        assert!(text.is_empty());
    }
}
