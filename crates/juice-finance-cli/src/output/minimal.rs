use serde_json::Value;

use super::{format_scalar, result_of};

/// Fields tried in order; the first non-null one is printed.
const PRIORITY_KEYS: [&str; 3] = ["classification", "break_even_point", "upper_bound"];

/// Print just the key answer: the profitability class for metrics and
/// dashboard output, the chart range for a bare series.
pub fn print_minimal(value: &Value) {
    let result = result_of(value);

    if let Value::Object(map) = result {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                println!("{}", format_scalar(val));
                return;
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_scalar(val));
            return;
        }
    }

    println!("{}", format_scalar(result));
}
