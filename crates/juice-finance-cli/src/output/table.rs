use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::format_scalar;

/// Format output as tables using the tabled crate.
///
/// Scalar fields of the result share one Field/Value table; every nested
/// object gets its own Field/Value table and every list of records (cost
/// breakdown, chart points) its own columnar table.
pub fn print_table(value: &Value) {
    let Value::Object(envelope) = value else {
        println!("{}", value);
        return;
    };

    match envelope.get("result") {
        Some(Value::Object(result)) => print_sections(None, result),
        _ => print_sections(None, envelope),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_sections(title: Option<&str>, map: &Map<String, Value>) {
    let mut scalars = Builder::default();
    scalars.push_record(["Field", "Value"]);
    let mut has_scalars = false;
    let mut nested: Vec<(&str, &Value)> = Vec::new();

    for (key, val) in map {
        match val {
            Value::Object(_) | Value::Array(_) => nested.push((key.as_str(), val)),
            _ => {
                scalars.push_record([key.as_str(), &format_scalar(val)]);
                has_scalars = true;
            }
        }
    }

    if has_scalars {
        if let Some(t) = title {
            println!("\n{}", t);
        }
        println!("{}", Table::from(scalars));
    }

    for (key, val) in nested {
        match val {
            Value::Object(inner) => print_sections(Some(key), inner),
            Value::Array(rows) => print_records(key, rows),
            _ => {}
        }
    }
}

fn print_records(title: &str, rows: &[Value]) {
    println!("\n{}", title);

    let Some(Value::Object(first)) = rows.first() else {
        if rows.is_empty() {
            println!("(empty)");
        }
        for row in rows {
            println!("{}", format_scalar(row));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_scalar).unwrap_or_default())
                .collect();
            builder.push_record(record);
        }
    }

    println!("{}", Table::from(builder));
}
