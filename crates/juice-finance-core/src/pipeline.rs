use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::ModelConfig;
use crate::model::{
    compute_metrics, CostBreakdownEntry, CostCategory, DerivedMetrics, MonthlyInputs,
    ProfitabilityClass,
};
use crate::series::{generate_break_even_series, BreakEvenSeries};
use crate::types::{with_metadata, ComputationOutput};
use crate::FinanceResult;

/// Everything the dashboard renders for one set of inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub metrics: DerivedMetrics,
    pub cost_breakdown: Vec<CostBreakdownEntry>,
    pub classification: ProfitabilityClass,
    pub largest_cost_category: Option<CostCategory>,
    pub headline: String,
    pub series: BreakEvenSeries,
}

/// Rebuild the full dashboard state from scratch. Called on every input
/// change; nothing is carried over from the previous snapshot.
pub fn recompute(
    inputs: &MonthlyInputs,
    config: &ModelConfig,
) -> FinanceResult<ComputationOutput<DashboardSnapshot>> {
    let start = Instant::now();

    let metrics_out = compute_metrics(inputs, config)?;
    let series_out = generate_break_even_series(
        &metrics_out.result.metrics,
        config.series_step,
        config.max_series_points,
    )?;

    let mut warnings = metrics_out.warnings;
    warnings.extend(series_out.warnings);

    let m = metrics_out.result;
    let snapshot = DashboardSnapshot {
        metrics: m.metrics,
        cost_breakdown: m.cost_breakdown,
        classification: m.classification,
        largest_cost_category: m.largest_cost_category,
        headline: m.headline,
        series: series_out.result,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Dashboard Recompute: Financial Model then Break-even Series",
        &serde_json::json!({
            "config": config,
        }),
        warnings,
        elapsed,
        snapshot,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_recompute_combines_both_stages() {
        let inputs = MonthlyInputs {
            sales_revenue: dec!(30000),
            variable_cost_supplies: dec!(12000),
            staff_wages: dec!(5600),
            rent: dec!(3000),
            utilities: dec!(700),
            freight: dec!(160),
            maintenance: dec!(200),
            depreciation: dec!(250),
        };
        let out = recompute(&inputs, &ModelConfig::default()).unwrap();
        let snap = &out.result;
        assert_eq!(snap.metrics.operating_profit, dec!(8090));
        assert_eq!(snap.classification, ProfitabilityClass::Profit);
        assert_eq!(snap.cost_breakdown.len(), 7);
        assert_eq!(snap.series.step, dec!(1000));
        assert_eq!(snap.series.points.len(), 45);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_recompute_uses_configured_step() {
        let inputs = MonthlyInputs {
            sales_revenue: dec!(10000),
            variable_cost_supplies: dec!(2000),
            staff_wages: dec!(0),
            rent: dec!(2000),
            utilities: dec!(0),
            freight: dec!(0),
            maintenance: dec!(0),
            depreciation: dec!(0),
        };
        let config = ModelConfig {
            series_step: dec!(500),
            ..ModelConfig::default()
        };
        let out = recompute(&inputs, &config).unwrap();
        // 10000 * 1.5 = 15000 -> 30 points of 500
        assert_eq!(out.result.series.points.len(), 30);
    }

    #[test]
    fn test_recompute_rejects_invalid_config_before_work() {
        let inputs = MonthlyInputs {
            sales_revenue: dec!(100),
            variable_cost_supplies: dec!(0),
            staff_wages: dec!(0),
            rent: dec!(0),
            utilities: dec!(0),
            freight: dec!(0),
            maintenance: dec!(0),
            depreciation: dec!(0),
        };
        let config = ModelConfig {
            series_step: dec!(0),
            ..ModelConfig::default()
        };
        assert!(recompute(&inputs, &config).is_err());
    }

    #[test]
    fn test_recompute_merges_warnings() {
        let inputs = MonthlyInputs {
            sales_revenue: dec!(0),
            variable_cost_supplies: dec!(0),
            staff_wages: dec!(0),
            rent: dec!(0),
            utilities: dec!(0),
            freight: dec!(0),
            maintenance: dec!(0),
            depreciation: dec!(0),
        };
        let out = recompute(&inputs, &ModelConfig::default()).unwrap();
        // zero revenue, CM fallback, zero operating profit, origin-only series
        assert_eq!(out.warnings.len(), 4);
        assert_eq!(out.result.series.points.len(), 1);
    }

    #[test]
    fn test_recompute_large_revenue_widens_series() {
        let inputs = MonthlyInputs {
            sales_revenue: dec!(10000000),
            variable_cost_supplies: dec!(4000000),
            staff_wages: dec!(0),
            rent: dec!(3000),
            utilities: dec!(0),
            freight: dec!(0),
            maintenance: dec!(0),
            depreciation: dec!(0),
        };
        let out = recompute(&inputs, &ModelConfig::default()).unwrap();
        let series = &out.result.series;
        // 15_000_000 / 1000 would be 15000 points
        assert_eq!(series.step, dec!(2000));
        assert_eq!(series.points.len(), 7500);
        assert!(out.warnings.iter().any(|w| w.contains("widened")));
    }

    #[test]
    fn test_recompute_tiny_configured_step() {
        let inputs = MonthlyInputs {
            sales_revenue: dec!(30000),
            variable_cost_supplies: dec!(12000),
            staff_wages: dec!(0),
            rent: dec!(9910),
            utilities: dec!(0),
            freight: dec!(0),
            maintenance: dec!(0),
            depreciation: dec!(0),
        };
        let config = ModelConfig {
            series_step: dec!(0.0000000000000000000000001),
            ..ModelConfig::default()
        };
        let out = recompute(&inputs, &config).unwrap();
        assert!(out.result.series.points.len() <= config.max_series_points);
    }
}
