//! Command line front end: enumerate the combinations of a JSON axis map.
//!
//! The axis map is read from a file or from standard input, for example
//! `echo '{"x": [0, 1], "y": ["a", "b"]}' | permute --format table`.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use log::debug;
use serde_json::Value;

use obj_permute::config::RunConfig;
use obj_permute::output::OutputFormat;
use obj_permute::runner::{RunSummary, run};
use obj_permute::utils::json::{load_json, read_json};

/// CLI arguments for combination enumeration
#[derive(Parser, Debug)]
#[command(author, version, about = "Enumerate every combination of a JSON axis map", long_about = None)]
struct Args {
    /// JSON file holding the axis map, standard input when omitted
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Write at most this many combinations
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Only print the number of combinations
    #[arg(short, long)]
    count: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl From<&Args> for RunConfig {
    fn from(args: &Args) -> Self {
        RunConfig {
            format: args.format,
            limit: args.limit,
            count_only: args.count,
        }
    }
}

fn print_summary(summary: &RunSummary, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string(summary)?);
        return Ok(());
    }

    let count = summary
        .combination_count
        .map_or_else(|| "more than usize::MAX".to_owned(), |count| count.to_string());
    println!("{} {}", "Combinations:".bold(), count.as_str().green());
    println!("{} {}", "Keys:".bold(), summary.keys.join(", "));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let env = Env::default()
        .filter_or("PERMUTE_LOG", "warn")
        .write_style_or("PERMUTE_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let states: Value = match &args.input {
        Some(path) => load_json(path)?,
        None => read_json(io::stdin().lock()).context("failed to parse standard input")?,
    };
    debug!("loaded axis map from {:?}", args.input);

    let config = RunConfig::from(&args);
    let summary = {
        let mut out = io::stdout().lock();
        let summary = run(states, &config, &mut out)?;
        out.flush()?;
        summary
    };

    if config.count_only {
        print_summary(&summary, config.format)?;
    }

    Ok(())
}
