use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use juice_finance_core::model::{DerivedMetrics, MonthlyInputs};
use juice_finance_core::ModelConfig;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Parse an optional configuration document; absent or empty means defaults.
fn parse_config(config_json: Option<String>) -> NapiResult<ModelConfig> {
    match config_json.as_deref().map(str::trim) {
        None | Some("") => Ok(ModelConfig::default()),
        Some(json) => serde_json::from_str(json).map_err(to_napi_error),
    }
}

// ---------------------------------------------------------------------------
// Financial model
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_metrics(input_json: String, config_json: Option<String>) -> NapiResult<String> {
    let input: MonthlyInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config = parse_config(config_json)?;
    let output =
        juice_finance_core::model::compute_metrics(&input, &config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Break-even series
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SeriesRequest {
    metrics: DerivedMetrics,
    #[serde(default)]
    step: Option<Decimal>,
    #[serde(default)]
    max_points: Option<usize>,
}

/// Takes `{ "metrics": <DerivedMetrics>, "step"?: "1000", "max_points"?: 10000 }`.
#[napi]
pub fn generate_break_even_series(input_json: String) -> NapiResult<String> {
    let request: SeriesRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let defaults = ModelConfig::default();
    let output = juice_finance_core::series::generate_break_even_series(
        &request.metrics,
        request.step.unwrap_or(defaults.series_step),
        request.max_points.unwrap_or(defaults.max_series_points),
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[napi]
pub fn recompute(input_json: String, config_json: Option<String>) -> NapiResult<String> {
    let input: MonthlyInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config = parse_config(config_json)?;
    let output = juice_finance_core::pipeline::recompute(&input, &config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
