use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::ModelConfig;
use crate::error::FinanceError;
use crate::types::{safe_ratio, with_metadata, Clamped, ComputationOutput, Money, Rate};
use crate::FinanceResult;

// ---------------------------------------------------------------------------
// Types — Inputs
// ---------------------------------------------------------------------------

/// Whether a cost moves with sales volume.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CostBehaviour {
    Fixed,
    Variable,
}

/// The shop's cost taxonomy. Declaration order is the tie-break order of
/// the cost breakdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Supplies,
    StaffWages,
    Rent,
    Utilities,
    Freight,
    Maintenance,
    Depreciation,
}

impl CostCategory {
    /// Every category, variable cost first.
    pub const ALL: [CostCategory; 7] = [
        CostCategory::Supplies,
        CostCategory::StaffWages,
        CostCategory::Rent,
        CostCategory::Utilities,
        CostCategory::Freight,
        CostCategory::Maintenance,
        CostCategory::Depreciation,
    ];

    /// The fixed-cost line items.
    pub const FIXED: [CostCategory; 6] = [
        CostCategory::StaffWages,
        CostCategory::Rent,
        CostCategory::Utilities,
        CostCategory::Freight,
        CostCategory::Maintenance,
        CostCategory::Depreciation,
    ];

    pub fn behaviour(self) -> CostBehaviour {
        match self {
            CostCategory::Supplies => CostBehaviour::Variable,
            _ => CostBehaviour::Fixed,
        }
    }

    pub fn is_fixed(self) -> bool {
        self.behaviour() == CostBehaviour::Fixed
    }

    /// Human-readable label used in charts and tables.
    pub fn label(self) -> &'static str {
        match self {
            CostCategory::Supplies => "Supplies",
            CostCategory::StaffWages => "Staff wages",
            CostCategory::Rent => "Rent",
            CostCategory::Utilities => "Utilities",
            CostCategory::Freight => "Freight",
            CostCategory::Maintenance => "Maintenance",
            CostCategory::Depreciation => "Depreciation",
        }
    }

    /// Name of the corresponding `MonthlyInputs` field.
    pub fn field_name(self) -> &'static str {
        match self {
            CostCategory::Supplies => "variable_cost_supplies",
            CostCategory::StaffWages => "staff_wages",
            CostCategory::Rent => "rent",
            CostCategory::Utilities => "utilities",
            CostCategory::Freight => "freight",
            CostCategory::Maintenance => "maintenance",
            CostCategory::Depreciation => "depreciation",
        }
    }
}

/// One month of revenue and costs.
///
/// Fixed-cost line items default to zero so a deployment that does not
/// track, say, depreciation can simply omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyInputs {
    /// Sales revenue for the month
    pub sales_revenue: Money,
    /// Cost of supplies (fruit, milk, cups); the only variable cost
    pub variable_cost_supplies: Money,
    #[serde(default)]
    pub staff_wages: Money,
    #[serde(default)]
    pub rent: Money,
    /// Water and electricity
    #[serde(default)]
    pub utilities: Money,
    #[serde(default)]
    pub freight: Money,
    #[serde(default)]
    pub maintenance: Money,
    #[serde(default)]
    pub depreciation: Money,
}

impl MonthlyInputs {
    pub fn amount(&self, category: CostCategory) -> Money {
        match category {
            CostCategory::Supplies => self.variable_cost_supplies,
            CostCategory::StaffWages => self.staff_wages,
            CostCategory::Rent => self.rent,
            CostCategory::Utilities => self.utilities,
            CostCategory::Freight => self.freight,
            CostCategory::Maintenance => self.maintenance,
            CostCategory::Depreciation => self.depreciation,
        }
    }

    /// Reject the first negative field.
    pub fn validate(&self) -> FinanceResult<()> {
        if self.sales_revenue < Decimal::ZERO {
            return Err(negative_field("sales_revenue", self.sales_revenue));
        }
        for category in CostCategory::ALL {
            let amount = self.amount(category);
            if amount < Decimal::ZERO {
                return Err(negative_field(category.field_name(), amount));
            }
        }
        Ok(())
    }
}

fn negative_field(field: &str, value: Money) -> FinanceError {
    FinanceError::InvalidInput {
        field: field.to_string(),
        reason: format!("Must be non-negative, got {value}"),
    }
}

// ---------------------------------------------------------------------------
// Types — Outputs
// ---------------------------------------------------------------------------

/// Profitability figures derived from one month of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub sales_revenue: Money,
    /// Sum of tracked fixed-cost line items
    pub fixed_costs: Money,
    /// Supplies
    pub variable_costs: Money,
    /// fixed_costs + variable_costs
    pub total_operating_costs: Money,
    /// sales_revenue - variable_costs
    pub contribution_margin: Money,
    /// sales_revenue - variable_costs
    pub gross_profit: Money,
    /// gross_profit - fixed_costs
    pub operating_profit: Money,
    /// Equal to operating profit; taxes are not modelled
    pub net_profit: Money,
    pub gross_margin_ratio: Rate,
    pub operating_margin_ratio: Rate,
    pub net_margin_ratio: Rate,
    pub contribution_margin_ratio: Rate,
    /// fixed_costs / CM ratio, or fixed_costs when the CM ratio is not positive
    pub break_even_point: Money,
    /// sales_revenue - break_even_point
    pub margin_of_safety: Money,
    pub margin_of_safety_ratio: Rate,
    /// Degree of operating leverage: contribution margin / operating profit
    pub operating_leverage: Decimal,
}

/// One slice of the cost composition chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdownEntry {
    pub category: CostCategory,
    pub label: String,
    pub behaviour: CostBehaviour,
    pub amount: Money,
    /// amount / total_operating_costs
    pub share_of_total: Rate,
}

/// Traffic-light state of the month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfitabilityClass {
    Profit,
    NearBreakeven,
    Loss,
}

/// Tolerance band around zero operating profit. Both edges are inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThresholdBand {
    pub lower: Money,
    pub upper: Money,
}

impl ThresholdBand {
    pub fn classify(&self, operating_profit: Money) -> ProfitabilityClass {
        if operating_profit > self.upper {
            ProfitabilityClass::Profit
        } else if operating_profit >= self.lower {
            ProfitabilityClass::NearBreakeven
        } else {
            ProfitabilityClass::Loss
        }
    }
}

/// Output of `compute_metrics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsOutput {
    pub metrics: DerivedMetrics,
    /// Sorted by amount, largest first
    pub cost_breakdown: Vec<CostBreakdownEntry>,
    pub classification: ProfitabilityClass,
    /// None when every cost is zero
    pub largest_cost_category: Option<CostCategory>,
    pub headline: String,
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Derive every profitability figure. Inputs are assumed validated.
///
/// Figures beyond the Decimal range saturate at `Decimal::MIN`/`Decimal::MAX`;
/// `compute_metrics` reports which ones did.
pub fn derive_metrics(inputs: &MonthlyInputs, config: &ModelConfig) -> DerivedMetrics {
    derive_clamped(inputs, config, &mut Clamped::default())
}

fn derive_clamped(
    inputs: &MonthlyInputs,
    config: &ModelConfig,
    clamped: &mut Clamped,
) -> DerivedMetrics {
    let revenue = inputs.sales_revenue;

    let fixed_costs: Money = CostCategory::FIXED
        .iter()
        .filter(|c| config.tracks(**c))
        .fold(Decimal::ZERO, |acc, c| {
            clamped.add("fixed_costs", acc, inputs.amount(*c))
        });
    let variable_costs = inputs.variable_cost_supplies;
    let total_operating_costs = clamped.add("total_operating_costs", fixed_costs, variable_costs);

    let contribution_margin = clamped.sub("contribution_margin", revenue, variable_costs);
    let gross_profit = contribution_margin;
    let operating_profit = clamped.sub("operating_profit", gross_profit, fixed_costs);
    let net_profit = operating_profit;

    let contribution_margin_ratio =
        clamped.ratio("contribution_margin_ratio", contribution_margin, revenue);

    let break_even_point = if contribution_margin_ratio > Decimal::ZERO {
        clamped.div("break_even_point", fixed_costs, contribution_margin_ratio)
    } else {
        fixed_costs
    };

    let margin_of_safety = clamped.sub("margin_of_safety", revenue, break_even_point);

    let operating_leverage = if operating_profit.is_zero() {
        Decimal::ZERO
    } else {
        clamped.div("operating_leverage", contribution_margin, operating_profit)
    };

    DerivedMetrics {
        sales_revenue: revenue,
        fixed_costs,
        variable_costs,
        total_operating_costs,
        contribution_margin,
        gross_profit,
        operating_profit,
        net_profit,
        gross_margin_ratio: clamped.ratio("gross_margin_ratio", gross_profit, revenue),
        operating_margin_ratio: clamped.ratio("operating_margin_ratio", operating_profit, revenue),
        net_margin_ratio: clamped.ratio("net_margin_ratio", net_profit, revenue),
        contribution_margin_ratio,
        break_even_point,
        margin_of_safety,
        margin_of_safety_ratio: clamped.ratio("margin_of_safety_ratio", margin_of_safety, revenue),
        operating_leverage,
    }
}

/// Tracked cost categories, largest first. Equal amounts keep taxonomy order.
pub fn cost_breakdown(inputs: &MonthlyInputs, config: &ModelConfig) -> Vec<CostBreakdownEntry> {
    let entries: Vec<(CostCategory, Money)> = CostCategory::ALL
        .iter()
        .filter(|c| config.tracks(**c))
        .map(|c| (*c, inputs.amount(*c)))
        .collect();

    let total: Money = entries
        .iter()
        .fold(Decimal::ZERO, |acc, (_, amount)| acc.saturating_add(*amount));

    let mut breakdown: Vec<CostBreakdownEntry> = entries
        .into_iter()
        .map(|(category, amount)| CostBreakdownEntry {
            category,
            label: category.label().to_string(),
            behaviour: category.behaviour(),
            amount,
            share_of_total: safe_ratio(amount, total),
        })
        .collect();

    breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
    breakdown
}

/// One-line health summary shown next to the traffic light.
pub fn headline(class: ProfitabilityClass, metrics: &DerivedMetrics) -> String {
    match class {
        ProfitabilityClass::Profit => format!(
            "Generating profit: operating profit is {}",
            metrics.operating_profit.round_dp(2)
        ),
        ProfitabilityClass::NearBreakeven => format!(
            "Near break-even: revenue ({}) barely covers total costs ({})",
            metrics.sales_revenue.round_dp(2),
            metrics.total_operating_costs.round_dp(2)
        ),
        ProfitabilityClass::Loss => format!(
            "Losing money: operating loss of {}",
            metrics.operating_profit.abs().round_dp(2)
        ),
    }
}

// ---------------------------------------------------------------------------
// Function: compute_metrics
// ---------------------------------------------------------------------------

/// Validate one month of inputs and derive margins, break-even point,
/// the sorted cost breakdown and the profitability class.
pub fn compute_metrics(
    inputs: &MonthlyInputs,
    config: &ModelConfig,
) -> FinanceResult<ComputationOutput<MetricsOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    config.validate()?;
    inputs.validate()?;

    let mut clamped = Clamped::default();
    let metrics = derive_clamped(inputs, config, &mut clamped);

    if !clamped.fields().is_empty() {
        warnings.push(format!(
            "Figures exceed the decimal range and were clamped: {}",
            clamped.fields().join(", ")
        ));
    }

    if metrics.sales_revenue.is_zero() {
        warnings.push("Sales revenue is zero; margin ratios are reported as 0".to_string());
    }
    if metrics.contribution_margin_ratio <= Decimal::ZERO {
        warnings.push(format!(
            "Contribution margin is not positive; break-even point falls back to fixed costs ({})",
            metrics.fixed_costs
        ));
    }
    if metrics.operating_profit.is_zero() {
        warnings
            .push("Operating profit is zero; operating leverage is undefined (set to 0)".to_string());
    }

    let breakdown = cost_breakdown(inputs, config);
    let largest_cost_category = breakdown
        .first()
        .filter(|e| e.amount > Decimal::ZERO)
        .map(|e| e.category);

    let classification = config.threshold_band().classify(metrics.operating_profit);

    let output = MetricsOutput {
        headline: headline(classification, &metrics),
        metrics,
        cost_breakdown: breakdown,
        classification,
        largest_cost_category,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Monthly Contribution Margin and Break-even Analysis",
        &serde_json::json!({
            "near_breakeven_band": [
                config.near_breakeven_lower_bound.to_string(),
                config.near_breakeven_upper_bound.to_string(),
            ],
            "fixed_cost_categories": config.fixed_cost_categories,
            "tax": "not modelled; net profit equals operating profit",
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reference_month() -> MonthlyInputs {
        MonthlyInputs {
            sales_revenue: dec!(30000),
            variable_cost_supplies: dec!(12000),
            staff_wages: dec!(5600),
            rent: dec!(3000),
            utilities: dec!(700),
            freight: dec!(160),
            maintenance: dec!(200),
            depreciation: dec!(250),
        }
    }

    fn zero_month() -> MonthlyInputs {
        MonthlyInputs {
            sales_revenue: dec!(0),
            variable_cost_supplies: dec!(0),
            staff_wages: dec!(0),
            rent: dec!(0),
            utilities: dec!(0),
            freight: dec!(0),
            maintenance: dec!(0),
            depreciation: dec!(0),
        }
    }

    #[test]
    fn test_fixed_and_total_costs() {
        let m = derive_metrics(&reference_month(), &ModelConfig::default());
        assert_eq!(m.fixed_costs, dec!(9910));
        assert_eq!(m.variable_costs, dec!(12000));
        assert_eq!(m.total_operating_costs, dec!(21910));
    }

    #[test]
    fn test_profits_and_margins() {
        let m = derive_metrics(&reference_month(), &ModelConfig::default());
        assert_eq!(m.gross_profit, dec!(18000));
        assert_eq!(m.operating_profit, dec!(8090));
        assert_eq!(m.net_profit, m.operating_profit);
        assert_eq!(m.gross_margin_ratio, dec!(0.6));
        assert_eq!(m.contribution_margin_ratio, dec!(0.6));
        assert_eq!(m.operating_margin_ratio.round_dp(4), dec!(0.2697));
    }

    #[test]
    fn test_break_even_point() {
        let m = derive_metrics(&reference_month(), &ModelConfig::default());
        // 9910 / 0.6 = 16516.67
        assert_eq!(m.break_even_point.round_dp(2), dec!(16516.67));
        assert_eq!(m.margin_of_safety.round_dp(2), dec!(13483.33));
    }

    #[test]
    fn test_operating_leverage() {
        let m = derive_metrics(&reference_month(), &ModelConfig::default());
        // 18000 / 8090
        assert_eq!(m.operating_leverage, dec!(18000) / dec!(8090));
    }

    #[test]
    fn test_zero_revenue_guards() {
        let mut inputs = zero_month();
        inputs.rent = dec!(1500);
        let m = derive_metrics(&inputs, &ModelConfig::default());
        assert_eq!(m.gross_margin_ratio, dec!(0));
        assert_eq!(m.operating_margin_ratio, dec!(0));
        assert_eq!(m.contribution_margin_ratio, dec!(0));
        assert_eq!(m.margin_of_safety_ratio, dec!(0));
        assert_eq!(m.break_even_point, dec!(1500));
    }

    #[test]
    fn test_variable_costs_exceed_revenue() {
        let inputs = MonthlyInputs {
            sales_revenue: dec!(1000),
            variable_cost_supplies: dec!(1200),
            rent: dec!(500),
            ..zero_month()
        };
        let m = derive_metrics(&inputs, &ModelConfig::default());
        assert!(m.contribution_margin_ratio < dec!(0));
        assert_eq!(m.break_even_point, dec!(500));
        assert_eq!(m.operating_profit, dec!(-700));
    }

    #[test]
    fn test_untracked_category_excluded() {
        let config = ModelConfig {
            fixed_cost_categories: CostCategory::FIXED[..5].to_vec(),
            ..ModelConfig::default()
        };
        let m = derive_metrics(&reference_month(), &config);
        // depreciation (250) dropped
        assert_eq!(m.fixed_costs, dec!(9660));
        let breakdown = cost_breakdown(&reference_month(), &config);
        assert_eq!(breakdown.len(), 6);
        assert!(breakdown
            .iter()
            .all(|e| e.category != CostCategory::Depreciation));
    }

    #[test]
    fn test_breakdown_sorted_descending() {
        let breakdown = cost_breakdown(&reference_month(), &ModelConfig::default());
        let order: Vec<CostCategory> = breakdown.iter().map(|e| e.category).collect();
        assert_eq!(
            order,
            vec![
                CostCategory::Supplies,
                CostCategory::StaffWages,
                CostCategory::Rent,
                CostCategory::Utilities,
                CostCategory::Depreciation,
                CostCategory::Maintenance,
                CostCategory::Freight,
            ]
        );
    }

    #[test]
    fn test_breakdown_ties_keep_taxonomy_order() {
        let inputs = MonthlyInputs {
            freight: dec!(100),
            rent: dec!(100),
            ..zero_month()
        };
        let breakdown = cost_breakdown(&inputs, &ModelConfig::default());
        assert_eq!(breakdown[0].category, CostCategory::Rent);
        assert_eq!(breakdown[1].category, CostCategory::Freight);
        assert_eq!(breakdown[0].share_of_total, dec!(0.5));
    }

    #[test]
    fn test_breakdown_shares_zero_when_no_costs() {
        let breakdown = cost_breakdown(&zero_month(), &ModelConfig::default());
        assert!(breakdown.iter().all(|e| e.share_of_total.is_zero()));
    }

    #[test]
    fn test_classify_band_edges_inclusive() {
        let band = ThresholdBand {
            lower: dec!(-500),
            upper: dec!(0),
        };
        assert_eq!(band.classify(dec!(0.01)), ProfitabilityClass::Profit);
        assert_eq!(band.classify(dec!(0)), ProfitabilityClass::NearBreakeven);
        assert_eq!(band.classify(dec!(-500)), ProfitabilityClass::NearBreakeven);
        assert_eq!(band.classify(dec!(-500.01)), ProfitabilityClass::Loss);
    }

    #[test]
    fn test_narrow_band_classifies_loss_sooner() {
        let inputs = MonthlyInputs {
            sales_revenue: dec!(1000),
            rent: dec!(1300),
            ..zero_month()
        };
        let wide = compute_metrics(&inputs, &ModelConfig::default()).unwrap();
        let narrow = compute_metrics(&inputs, &ModelConfig::narrow_band()).unwrap();
        assert_eq!(
            wide.result.classification,
            ProfitabilityClass::NearBreakeven
        );
        assert_eq!(narrow.result.classification, ProfitabilityClass::Loss);
    }

    #[test]
    fn test_negative_input_names_field() {
        let inputs = MonthlyInputs {
            utilities: dec!(-1),
            ..reference_month()
        };
        let err = compute_metrics(&inputs, &ModelConfig::default()).unwrap_err();
        match err {
            FinanceError::InvalidInput { field, .. } => assert_eq!(field, "utilities"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_revenue_rejected() {
        let inputs = MonthlyInputs {
            sales_revenue: dec!(-10),
            ..reference_month()
        };
        let err = inputs.validate().unwrap_err();
        assert_eq!(err.field(), Some("sales_revenue"));
    }

    #[test]
    fn test_zero_revenue_warnings() {
        let result = compute_metrics(&zero_month(), &ModelConfig::default()).unwrap();
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Sales revenue is zero")));
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("falls back to fixed costs")));
        assert_eq!(result.result.largest_cost_category, None);
    }

    #[test]
    fn test_healthy_month_has_no_warnings() {
        let result = compute_metrics(&reference_month(), &ModelConfig::default()).unwrap();
        assert!(result.warnings.is_empty());
        assert_eq!(result.result.classification, ProfitabilityClass::Profit);
        assert_eq!(
            result.result.largest_cost_category,
            Some(CostCategory::Supplies)
        );
        assert!(result.result.headline.contains("8090"));
    }

    #[test]
    fn test_headline_loss_reports_absolute_amount() {
        let inputs = MonthlyInputs {
            sales_revenue: dec!(1000),
            variable_cost_supplies: dec!(1200),
            rent: dec!(500),
            ..zero_month()
        };
        let result = compute_metrics(&inputs, &ModelConfig::default()).unwrap();
        assert_eq!(result.result.classification, ProfitabilityClass::Loss);
        assert_eq!(result.result.headline, "Losing money: operating loss of 700");
    }

    #[test]
    fn test_missing_fixed_items_deserialize_as_zero() {
        let inputs: MonthlyInputs = serde_json::from_str(
            r#"{ "sales_revenue": "30000", "variable_cost_supplies": "12000", "rent": "3000" }"#,
        )
        .unwrap();
        assert_eq!(inputs.depreciation, dec!(0));
        assert_eq!(inputs.rent, dec!(3000));
    }

    #[test]
    fn test_classification_serializes_screaming_case() {
        let json = serde_json::to_string(&ProfitabilityClass::NearBreakeven).unwrap();
        assert_eq!(json, "\"NEAR_BREAKEVEN\"");
    }

    #[test]
    fn test_behaviour_serializes_snake_case() {
        let json = serde_json::to_string(&CostBehaviour::Fixed).unwrap();
        assert_eq!(json, "\"fixed\"");
    }

    #[test]
    fn test_fixed_cost_sum_saturates_at_decimal_max() {
        let inputs = MonthlyInputs {
            staff_wages: Decimal::MAX,
            rent: Decimal::MAX,
            ..zero_month()
        };
        let out = compute_metrics(&inputs, &ModelConfig::default()).unwrap();
        let m = &out.result.metrics;
        assert_eq!(m.fixed_costs, Decimal::MAX);
        assert_eq!(m.total_operating_costs, Decimal::MAX);
        assert_eq!(m.operating_profit, -Decimal::MAX);
        assert_eq!(out.result.classification, ProfitabilityClass::Loss);
        assert!(out
            .warnings
            .iter()
            .any(|w| w.contains("clamped") && w.contains("fixed_costs")));
    }

    #[test]
    fn test_break_even_saturates_on_tiny_margin() {
        let inputs = MonthlyInputs {
            sales_revenue: dec!(1000000000000000000000000000),
            variable_cost_supplies: dec!(999999999999999999999999999),
            rent: dec!(10000000000),
            ..zero_month()
        };
        let out = compute_metrics(&inputs, &ModelConfig::default()).unwrap();
        let m = &out.result.metrics;
        assert_eq!(m.contribution_margin, dec!(1));
        assert_eq!(m.break_even_point, Decimal::MAX);
        assert!(m.margin_of_safety < Decimal::ZERO);
        assert!(out.warnings.iter().any(|w| w.contains("break_even_point")));
    }

    #[test]
    fn test_ordinary_month_reports_nothing_clamped() {
        let out = compute_metrics(&reference_month(), &ModelConfig::default()).unwrap();
        assert!(!out.warnings.iter().any(|w| w.contains("clamped")));
    }
}
