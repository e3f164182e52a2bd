//! Human-readable byte sizes.

const UNITS: [&str; 4] = ["bytes", "KB", "MB", "GB"];

/// Render a byte count with one decimal place and a unit suffix.
///
/// The value is divided by 1024 while it is at least 1024, through bytes, KB,
/// MB and GB. Division stops at GB: anything still at least 1024 GB is printed
/// as that many GB labelled `TB`, so `1024^4` bytes renders as `1024.0TB`.
pub fn sizeof_fmt(num: i64) -> String {
    let mut value = num as f64;
    for (i, unit) in UNITS.iter().enumerate() {
        if value < 1024.0 {
            return format!("{:3.1}{}", value, unit);
        }
        if i + 1 < UNITS.len() {
            value /= 1024.0;
        }
    }
    format!("{:3.1}TB", value)
}
