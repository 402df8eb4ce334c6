//! Output formatting utilities

use crate::error::CliResult;
use colored::*;
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Serialize a single item; table output falls back to JSON
pub fn format_single<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Table | OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(data)?),
    }
}

/// Print a single item in the specified format
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<()> {
    println!("{}", format_single(data, format)?);
    Ok(())
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_format_single() {
        let value = serde_json::json!({"total": 2});
        assert!(format_single(&value, OutputFormat::Json)
            .unwrap()
            .contains("\"total\": 2"));
        assert_eq!(
            format_single(&value, OutputFormat::Yaml).unwrap().trim(),
            "total: 2"
        );
    }
}
