use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinanceError;
use crate::model::DerivedMetrics;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::FinanceResult;

/// How far past the larger of revenue and break-even the chart extends.
const HEADROOM: Decimal = dec!(1.5);

/// One grid point of the break-even chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub sales_value: Money,
    /// Constant at fixed_costs
    pub fixed_cost_level: Money,
    /// fixed_costs + sales_value * (1 - CM ratio)
    pub total_cost_level: Money,
    /// Equal to sales_value
    pub revenue_level: Money,
}

impl SeriesPoint {
    /// Cost and revenue levels at a hypothetical sales value. Levels beyond
    /// the Decimal range saturate.
    pub fn at(metrics: &DerivedMetrics, sales_value: Money) -> Self {
        let variable_cost_share = Decimal::ONE.saturating_sub(metrics.contribution_margin_ratio);
        SeriesPoint {
            sales_value,
            fixed_cost_level: metrics.fixed_costs,
            total_cost_level: metrics
                .fixed_costs
                .saturating_add(sales_value.saturating_mul(variable_cost_share)),
            revenue_level: sales_value,
        }
    }
}

/// The point where the revenue line crosses total costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenMarker {
    pub sales_value: Money,
    pub revenue_level: Money,
}

/// Cost and revenue curves over an evenly spaced sales grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakEvenSeries {
    pub step: Money,
    /// Exclusive end of the grid, a multiple of `step`
    pub upper_bound: Money,
    pub points: Vec<SeriesPoint>,
    pub break_even_marker: BreakEvenMarker,
}

fn step_error(step: Money, reason: String) -> FinanceError {
    FinanceError::InvalidInput {
        field: "series_step".to_string(),
        reason: format!("Step {step}: {reason}"),
    }
}

fn check_step(step: Money) -> FinanceResult<()> {
    if step <= Decimal::ZERO {
        return Err(FinanceError::InvalidInput {
            field: "series_step".to_string(),
            reason: "Series step must be positive".to_string(),
        });
    }
    Ok(())
}

/// `max(revenue, break_even) * 1.5`, saturating at `Decimal::MAX`.
/// The flag is set when it saturated.
fn chart_reach(sales_revenue: Money, break_even_point: Money) -> (Money, bool) {
    let reach = sales_revenue.max(break_even_point);
    match reach.checked_mul(HEADROOM) {
        Some(raw) => (raw, false),
        None => (Decimal::MAX, true),
    }
}

/// Largest multiple of `step` not above `raw`.
fn truncate_to_step(raw: Money, step: Money) -> FinanceResult<Money> {
    let steps = raw
        .checked_div(step)
        .ok_or_else(|| step_error(step, format!("chart range {raw} holds too many steps")))?;
    steps
        .floor()
        .checked_mul(step)
        .ok_or_else(|| step_error(step, format!("chart range {raw} is not representable")))
}

/// Smallest multiple of `step` that spans `raw` in at most `max_points`
/// grid points. Returns `step` itself when it already fits.
pub fn fitting_step(raw: Money, step: Money, max_points: usize) -> FinanceResult<Money> {
    check_step(step)?;
    let span = match step.checked_mul(Decimal::from(max_points.max(1))) {
        Some(span) if raw > span => span,
        // Either the grid already fits, or step * max_points exceeds any
        // representable chart range.
        _ => return Ok(step),
    };
    let factor = raw
        .checked_div(span)
        .ok_or_else(|| step_error(step, format!("chart range {raw} holds too many steps")))?
        .ceil();
    step.checked_mul(factor)
        .ok_or_else(|| step_error(step, format!("widening by {factor} overflows")))
}

/// `max(revenue, break_even) * 1.5`, truncated down to a multiple of `step`.
pub fn series_upper_bound(
    sales_revenue: Money,
    break_even_point: Money,
    step: Money,
) -> FinanceResult<Money> {
    check_step(step)?;
    let (raw, _) = chart_reach(sales_revenue, break_even_point);
    truncate_to_step(raw, step)
}

/// Build the break-even chart series: one point per step from 0 up to (but
/// excluding) the upper bound, and never fewer than the single point 0.
///
/// When `step` would need more than `max_points` points the grid is
/// coarsened to the smallest multiple of `step` that fits; the step
/// actually used is reported in the output.
pub fn generate_break_even_series(
    metrics: &DerivedMetrics,
    step: Money,
    max_points: usize,
) -> FinanceResult<ComputationOutput<BreakEvenSeries>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    check_step(step)?;
    let (raw, saturated) = chart_reach(metrics.sales_revenue, metrics.break_even_point);
    if saturated {
        warnings.push(format!(
            "Chart range exceeds the decimal range; clamped to {raw}"
        ));
    }

    let requested_step = step;
    let step = fitting_step(raw, requested_step, max_points)?;
    if step != requested_step {
        warnings.push(format!(
            "Step {requested_step} needs more than {max_points} points; widened to {step}"
        ));
    }

    let upper_bound = truncate_to_step(raw, step)?;
    let grid_len = upper_bound / step;
    let count = grid_len
        .to_usize()
        .filter(|n| *n <= max_points)
        .ok_or_else(|| {
            step_error(
                step,
                format!("{grid_len} points up to {upper_bound}; at most {max_points} allowed"),
            )
        })?;

    let points: Vec<SeriesPoint> = if count == 0 {
        warnings.push(format!(
            "Chart range is below one step ({step}); series holds the origin only"
        ));
        vec![SeriesPoint::at(metrics, Decimal::ZERO)]
    } else {
        (0..count)
            .map(|i| SeriesPoint::at(metrics, step * Decimal::from(i)))
            .collect()
    };

    let output = BreakEvenSeries {
        step,
        upper_bound,
        points,
        break_even_marker: BreakEvenMarker {
            sales_value: metrics.break_even_point,
            revenue_level: metrics.break_even_point,
        },
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Break-even Chart Series (fixed cost, total cost and revenue lines)",
        &serde_json::json!({
            "requested_step": requested_step.to_string(),
            "step": step.to_string(),
            "headroom": HEADROOM.to_string(),
            "fixed_costs": metrics.fixed_costs.to_string(),
            "contribution_margin_ratio": metrics.contribution_margin_ratio.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
