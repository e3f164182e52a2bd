//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all report types as pretty-printed JSON.

use anyhow::Result;
use vsphere_client::Profile;

use crate::formatters::{DatastoreUsage, Formatter};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_datastore_ids(&self, ids: &[String]) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(ids)?))
    }

    fn format_datastores(&self, datastores: &[DatastoreUsage]) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(datastores)?))
    }

    fn format_profiles(&self, profiles: &[Profile]) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(profiles)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datastore_ids() {
        let output = JsonFormatter
            .format_datastore_ids(&["datastore-11".to_string()])
            .unwrap();
        let parsed: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, vec!["datastore-11"]);
    }

    #[test]
    fn test_datastores_include_derived_fields() {
        let usage = DatastoreUsage::new("ds1", "ds:///a/", 100, 20, Some(30));
        let output = JsonFormatter.format_datastores(&[usage]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["provisioned"], 110);
        assert_eq!(parsed[0]["over_provisioned"], 10);
        assert_eq!(parsed[0]["over_provisioned_pct"], 10.0);
    }

    #[test]
    fn test_profiles() {
        let output = JsonFormatter
            .format_profiles(&[Profile::new("p-1", "Gold")])
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["id"], "p-1");
        assert_eq!(parsed[0]["name"], "Gold");
    }
}
