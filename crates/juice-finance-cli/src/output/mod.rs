pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("JSON serialization error: {}", e),
        },
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The `result` member of a computation envelope, or the value itself.
fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Break-even chart points, whether the result is a bare series or a
/// dashboard snapshot.
fn series_points(result: &Value) -> Option<&Vec<Value>> {
    result
        .get("points")
        .or_else(|| result.get("series").and_then(|s| s.get("points")))
        .and_then(Value::as_array)
}

/// Render a scalar for a table cell or CSV field.
fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_of_unwraps_envelope() {
        let v = json!({ "result": { "a": 1 }, "warnings": [] });
        assert_eq!(result_of(&v), &json!({ "a": 1 }));
        let bare = json!({ "a": 1 });
        assert_eq!(result_of(&bare), &bare);
    }

    #[test]
    fn test_series_points_found_in_snapshot() {
        let snapshot = json!({ "series": { "points": [{ "sales_value": "0" }] } });
        assert_eq!(series_points(&snapshot).map(Vec::len), Some(1));
        let series = json!({ "points": [] });
        assert_eq!(series_points(&series).map(Vec::len), Some(0));
        assert!(series_points(&json!({ "metrics": {} })).is_none());
    }

    #[test]
    fn test_format_scalar() {
        assert_eq!(format_scalar(&json!("16516.67")), "16516.67");
        assert_eq!(format_scalar(&json!(null)), "");
        assert_eq!(format_scalar(&json!(true)), "true");
    }
}
