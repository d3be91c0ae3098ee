use std::io::Write;

use anyhow::Context;
use clap::ValueEnum;
use serde_json::Value;
use tabled::{builder::Builder, settings::Style};

use crate::combination::Combination;

/// A stream of combinations produced from a JSON axis map.
pub type JsonCombinations<'a> = &'a mut dyn Iterator<Item = Combination<String, Value>>;

/// Writes combinations of a JSON axis map to an output stream.
pub trait CombinationFormatter {
    /// Writes `combinations`, whose keys are `keys`, and returns how many
    /// combinations were written.
    fn write_combinations(
        &self,
        out: &mut dyn Write,
        keys: &[String],
        combinations: JsonCombinations<'_>,
    ) -> anyhow::Result<usize>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// A table with one column per key
    Table,
    /// Comma separated values with a header row
    Csv,
}

impl OutputFormat {
    pub fn formatter(self) -> Box<dyn CombinationFormatter> {
        match self {
            OutputFormat::Json => Box::new(JsonLinesFormatter),
            OutputFormat::Table => Box::new(PrettyFormatter),
            OutputFormat::Csv => Box::new(CsvFormatter),
        }
    }
}

/// Strings are written without quotes, everything else as JSON.
pub(crate) fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn row(keys: &[String], combination: &Combination<String, Value>) -> Vec<String> {
    keys.iter()
        .map(|key| combination.get(key.as_str()).map(format_cell).unwrap_or_default())
        .collect()
}

pub struct JsonLinesFormatter;

impl CombinationFormatter for JsonLinesFormatter {
    fn write_combinations(
        &self,
        out: &mut dyn Write,
        _keys: &[String],
        combinations: JsonCombinations<'_>,
    ) -> anyhow::Result<usize> {
        let mut count = 0;
        for combination in combinations {
            serde_json::to_writer(&mut *out, &combination)
                .context("failed to write combination")?;
            writeln!(out)?;
            count += 1;
        }
        Ok(count)
    }
}

/// Pretty table formatter using the tabled library
pub struct PrettyFormatter;

impl CombinationFormatter for PrettyFormatter {
    fn write_combinations(
        &self,
        out: &mut dyn Write,
        keys: &[String],
        combinations: JsonCombinations<'_>,
    ) -> anyhow::Result<usize> {
        let mut builder = Builder::default();
        builder.push_record(keys.iter().cloned());

        let mut count = 0;
        for combination in combinations {
            builder.push_record(row(keys, &combination));
            count += 1;
        }

        if count == 0 {
            return Ok(0);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        writeln!(out, "{table}")?;

        Ok(count)
    }
}

pub struct CsvFormatter;

impl CombinationFormatter for CsvFormatter {
    fn write_combinations(
        &self,
        out: &mut dyn Write,
        keys: &[String],
        combinations: JsonCombinations<'_>,
    ) -> anyhow::Result<usize> {
        let mut writer = csv::Writer::from_writer(out);

        let mut count = 0;
        for combination in combinations {
            if count == 0 {
                writer.write_record(keys).context("failed to write CSV header")?;
            }
            writer
                .write_record(row(keys, &combination))
                .context("failed to write CSV record")?;
            count += 1;
        }
        writer.flush()?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::{CombinationFormatter, CsvFormatter, JsonLinesFormatter, OutputFormat, PrettyFormatter};
    use crate::permutations::permutations_of_value;
    use serde_json::json;

    fn render(formatter: &dyn CombinationFormatter, input: serde_json::Value) -> (usize, String) {
        let mut permutations = permutations_of_value(input);
        let keys: Vec<String> = permutations.keys().cloned().collect();
        let mut out = Vec::new();
        let count = formatter
            .write_combinations(&mut out, &keys, &mut permutations)
            .unwrap();
        (count, String::from_utf8(out).unwrap())
    }

    #[test]
    fn json_lines() {
        let (count, text) = render(&JsonLinesFormatter, json!({"x": [0, 1], "y": ["a"]}));
        assert_eq!(count, 2);
        assert_eq!(text, "{\"x\":0,\"y\":\"a\"}\n{\"x\":1,\"y\":\"a\"}\n");
    }

    #[test]
    fn csv_rows() {
        let (count, text) = render(
            &CsvFormatter,
            json!({"x": [0, 1], "skip": "no", "y": ["a, b"]}),
        );
        assert_eq!(count, 2);
        assert_eq!(text, "x,y\n0,\"a, b\"\n1,\"a, b\"\n");
    }

    #[test]
    fn table() {
        let (count, text) = render(&PrettyFormatter, json!({"flag": [true, false]}));
        assert_eq!(count, 2);
        assert!(text.contains("flag"));
        assert!(text.contains("true"));
        assert!(text.contains("false"));
        assert!(text.starts_with('╭'));
    }

    #[test]
    fn nothing_to_write() {
        for format in [OutputFormat::Json, OutputFormat::Table, OutputFormat::Csv] {
            let (count, text) = render(format.formatter().as_ref(), json!(null));
            assert_eq!(count, 0);
            assert!(text.is_empty());
        }
    }
}
