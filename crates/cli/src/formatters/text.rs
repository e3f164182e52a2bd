//! Plain text formatter.
//!
//! Responsibilities:
//! - Print compatible datastore ids the way Python's `pprint` prints a list of strings.
//! - Print the fixed-layout datastore report block.
//! - Print one `<id>  <name>` line per storage profile.

use std::fmt::Write;

use anyhow::Result;
use vsphere_client::Profile;

use crate::formatters::{DatastoreUsage, Formatter, sizeof_fmt};

/// Line width at which `pprint` switches to one element per line.
const PPRINT_WIDTH: usize = 80;

/// Text formatter.
pub struct TextFormatter;

/// Python `repr()` of a string.
fn py_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// `pprint` of a list of strings: one line when it fits, otherwise one
/// element per line.
fn pprint_list(items: &[String]) -> String {
    let reprs: Vec<String> = items.iter().map(|s| py_repr(s)).collect();
    let single = format!("[{}]", reprs.join(", "));
    if single.len() <= PPRINT_WIDTH {
        single
    } else {
        format!("[{}]", reprs.join(",\n "))
    }
}

/// Python `str()` of a float.
///
/// Shortest round-trip digits match Rust's `{:?}`; only the exponent differs,
/// which Python writes signed and at least two digits wide (`1e-05`, `1e+16`).
fn py_float_str(value: f64) -> String {
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// Over-provisioned percentage; a zero-capacity datastore prints the integer 0.
fn format_pct(usage: &DatastoreUsage) -> String {
    if usage.capacity == 0 {
        "0".to_string()
    } else {
        py_float_str(usage.over_provisioned_pct)
    }
}

fn write_report(out: &mut String, ds: &DatastoreUsage) {
    let _ = writeln!(out);
    let _ = writeln!(out, "Name                  : {}", ds.name);
    let _ = writeln!(out, "URL                   : {}", ds.url);
    let _ = writeln!(out, "Capacity              : {} GB", sizeof_fmt(ds.capacity));
    let _ = writeln!(out, "Free Space            : {} GB", sizeof_fmt(ds.free_space));
    let _ = writeln!(out, "Uncommitted           : {} GB", sizeof_fmt(ds.uncommitted));
    let _ = writeln!(out, "Provisioned           : {} GB", sizeof_fmt(ds.provisioned));
    if ds.is_over_provisioned() {
        let _ = writeln!(
            out,
            "Over-provisioned      : {} GB / {} %",
            sizeof_fmt(ds.over_provisioned),
            format_pct(ds)
        );
    }
    let _ = writeln!(out, "Hosts                 : {}", ds.hosts);
    let _ = writeln!(out, "Virtual Machines      : {}", ds.vms);
}

impl Formatter for TextFormatter {
    fn format_datastore_ids(&self, ids: &[String]) -> Result<String> {
        Ok(format!("{}\n", pprint_list(ids)))
    }

    fn format_datastores(&self, datastores: &[DatastoreUsage]) -> Result<String> {
        let mut out = String::new();
        for ds in datastores {
            write_report(&mut out, ds);
        }
        Ok(out)
    }

    fn format_profiles(&self, profiles: &[Profile]) -> Result<String> {
        let mut out = String::new();
        for profile in profiles {
            let _ = writeln!(out, "{}  {}", profile.profile_id.unique_id, profile.name);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_datastore_ids_as_python_list() {
        let output = TextFormatter
            .format_datastore_ids(&ids(&["datastore-11", "datastore-12"]))
            .unwrap();
        assert_eq!(output, "['datastore-11', 'datastore-12']\n");
    }

    #[test]
    fn test_empty_datastore_ids() {
        assert_eq!(TextFormatter.format_datastore_ids(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn test_long_list_wraps_one_per_line() {
        let many: Vec<String> = (1..=8).map(|i| format!("datastore-{i}")).collect();
        let output = TextFormatter.format_datastore_ids(&many).unwrap();
        assert!(output.starts_with("['datastore-1',\n 'datastore-2',\n"));
        assert!(output.ends_with(" 'datastore-8']\n"));
    }

    #[test]
    fn test_py_repr_quotes() {
        assert_eq!(py_repr("abc"), "'abc'");
        assert_eq!(py_repr("it's"), "\"it's\"");
        assert_eq!(py_repr(r"a\b"), r"'a\\b'");
    }

    #[test]
    fn test_py_float_str() {
        assert_eq!(py_float_str(10.0), "10.0");
        assert_eq!(py_float_str(9.99999999994543), "9.99999999994543");
        assert_eq!(py_float_str(0.0001), "0.0001");
        assert_eq!(py_float_str(1e-5), "1e-05");
        assert_eq!(py_float_str(1e16), "1e+16");
        assert_eq!(py_float_str(1.5e-100), "1.5e-100");
    }

    #[test]
    fn test_tiny_percentage_uses_two_digit_exponent() {
        // 1 MiB over on a 10 TiB datastore
        let usage = DatastoreUsage::new("ds", "ds:///c/", 10_995_116_277_760, 0, Some(1_048_576));
        assert_eq!(format_pct(&usage), "9.5367431640625e-06");

        let output = TextFormatter.format_datastores(&[usage]).unwrap();
        assert!(output.contains("/ 9.5367431640625e-06 %\n"));
    }

    #[test]
    fn test_report_with_over_provisioning() {
        let mut usage = DatastoreUsage::new("ds1", "ds:///vmfs/volumes/a/", 100, 20, Some(30));
        usage.hosts = 2;
        usage.vms = 5;

        let output = TextFormatter.format_datastores(&[usage]).unwrap();
        let expected = "\n\
Name                  : ds1\n\
URL                   : ds:///vmfs/volumes/a/\n\
Capacity              : 100.0bytes GB\n\
Free Space            : 20.0bytes GB\n\
Uncommitted           : 30.0bytes GB\n\
Provisioned           : 110.0bytes GB\n\
Over-provisioned      : 10.0bytes GB / 10.0 %\n\
Hosts                 : 2\n\
Virtual Machines      : 5\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_report_without_over_provisioning() {
        let usage = DatastoreUsage::new("ds2", "ds:///b/", 100, 80, None);
        let output = TextFormatter.format_datastores(&[usage]).unwrap();
        assert!(!output.contains("Over-provisioned"));
        assert!(output.contains("Provisioned           : 20.0bytes GB\n"));
    }

    #[test]
    fn test_profiles() {
        let profiles = vec![Profile::new("p-1", "Gold"), Profile::new("p-2", "Silver")];
        let output = TextFormatter.format_profiles(&profiles).unwrap();
        assert_eq!(output, "p-1  Gold\np-2  Silver\n");
    }
}
