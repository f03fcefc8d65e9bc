use crate::CsvPoint;

use std::fmt::Write;

use serde_json::Value;

pub const CSV_HEADER: &str = "name,latitude,longitude";

/// Header row, then one `\n`-terminated row per point in input order
pub fn points_to_csv(points: &[CsvPoint]) -> Result<String, std::fmt::Error> {
    let mut csv = String::with_capacity(CSV_HEADER.len() + points.len() * 32);
    writeln!(csv, "{}", CSV_HEADER)?;

    for point in points {
        writeln!(
            csv,
            "{},{},{}",
            escape_field(&render_value(&point.name)),
            escape_field(&render_value(&point.latitude)),
            escape_field(&render_value(&point.longitude)),
        )?;
    }

    Ok(csv)
}

/// Strings as their contents, null as empty, everything else as JSON text
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Quote a field when it contains a comma, quote, CR or LF
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
