//! Writing combinations for humans and for other tools.

pub mod formatter;

pub use formatter::{
    CombinationFormatter, CsvFormatter, JsonLinesFormatter, OutputFormat, PrettyFormatter,
};
