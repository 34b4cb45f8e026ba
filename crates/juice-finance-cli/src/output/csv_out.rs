use serde_json::Value;
use std::io;

use super::{format_scalar, result_of, series_points};

/// Chart columns in plotting order: x, then the three lines.
const SERIES_COLUMNS: [&str; 4] = [
    "sales_value",
    "fixed_cost_level",
    "total_cost_level",
    "revenue_level",
];

/// Write output as CSV to stdout.
///
/// Series and dashboard output are written as one row per chart point.
/// Anything else becomes a two-column `field,value` listing with nested
/// objects flattened to dotted keys.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    let result = result_of(value);

    if let Some(points) = series_points(result) {
        write_rows(&mut wtr, points);
    } else {
        let _ = wtr.write_record(["field", "value"]);
        let mut rows = Vec::new();
        flatten("", result, &mut rows);
        for (key, val) in rows {
            let _ = wtr.write_record([key, val]);
        }
    }

    let _ = wtr.flush();
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) {
    let _ = wtr.write_record(SERIES_COLUMNS);

    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = SERIES_COLUMNS
                .iter()
                .map(|h| map.get(*h).map(format_scalar).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&record);
        }
    }
}

/// Flatten nested objects into `parent.child` keys. Arrays are indexed.
fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    let key_for = |k: &str| {
        if prefix.is_empty() {
            k.to_string()
        } else {
            format!("{prefix}.{k}")
        }
    };

    match value {
        Value::Object(map) => {
            for (k, v) in map {
                flatten(&key_for(k), v, out);
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                flatten(&key_for(&i.to_string()), v, out);
            }
        }
        scalar => out.push((prefix.to_string(), format_scalar(scalar))),
    }
}
