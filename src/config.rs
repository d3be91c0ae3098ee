//! Options for enumerating an axis map from the command line.

use crate::output::OutputFormat;

/// Options for a single enumeration run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub format: OutputFormat,
    /// Stop after this many combinations.
    pub limit: Option<usize>,
    /// Only report counts, write no combinations.
    pub count_only: bool,
}

#[cfg(test)]
mod tests {
    use super::RunConfig;
    use crate::output::OutputFormat;

    #[test]
    fn defaults() {
        let config = RunConfig::default();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.limit, None);
        assert!(!config.count_only);
    }
}
