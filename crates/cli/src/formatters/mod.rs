//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the `text` and `json` output formats.
//! - Compute derived datastore usage figures once for every format.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Every formatter output ends with a newline unless it is empty.
//! - `text` output reproduces the layout of the classic pyVmomi sample scripts.

use anyhow::Result;
use vsphere_client::Profile;

mod json;
mod size;
mod text;
mod usage;

pub use json::JsonFormatter;
pub use size::sizeof_fmt;
pub use text::TextFormatter;
pub use usage::DatastoreUsage;

/// Output format enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: text, json", s),
        }
    }
}

/// Formatter trait for the report types.
pub trait Formatter {
    /// Format the ids of compatible datastores.
    fn format_datastore_ids(&self, ids: &[String]) -> Result<String>;

    /// Format datastore usage reports.
    fn format_datastores(&self, datastores: &[DatastoreUsage]) -> Result<String>;

    /// Format storage profiles.
    fn format_profiles(&self, profiles: &[Profile]) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("yaml").is_err());
    }
}
