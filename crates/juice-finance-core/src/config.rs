use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FinanceError;
use crate::model::{CostCategory, ThresholdBand};
use crate::types::Money;
use crate::FinanceResult;

/// Default lower edge of the near-breakeven band (monthly operating profit).
pub const DEFAULT_LOWER_BOUND: Money = dec!(-500);

/// Lower edge used by the narrow-band deployment.
pub const NARROW_LOWER_BOUND: Money = dec!(-200);

/// Default upper edge of the near-breakeven band.
pub const DEFAULT_UPPER_BOUND: Money = dec!(0);

/// Default spacing of the break-even chart grid.
pub const DEFAULT_SERIES_STEP: Money = dec!(1000);

/// Default ceiling on the number of grid points in a break-even series.
pub const DEFAULT_MAX_SERIES_POINTS: usize = 10_000;

/// Parameters of the financial model that differ between deployments.
///
/// Every field has a default, so a partial JSON/YAML document such as
/// `{ "near_breakeven_lower_bound": "-200" }` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Operating profit at or above this value (and at or below the upper
    /// bound) is classified as near breakeven
    pub near_breakeven_lower_bound: Money,
    /// Operating profit strictly above this value is classified as profit
    pub near_breakeven_upper_bound: Money,
    /// Grid spacing of the break-even series
    pub series_step: Money,
    /// Fixed-cost line items tracked by this deployment. Items not listed
    /// contribute nothing to fixed costs or to the breakdown.
    pub fixed_cost_categories: Vec<CostCategory>,
    /// Upper limit on series length
    pub max_series_points: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            near_breakeven_lower_bound: DEFAULT_LOWER_BOUND,
            near_breakeven_upper_bound: DEFAULT_UPPER_BOUND,
            series_step: DEFAULT_SERIES_STEP,
            fixed_cost_categories: CostCategory::FIXED.to_vec(),
            max_series_points: DEFAULT_MAX_SERIES_POINTS,
        }
    }
}

impl ModelConfig {
    /// The variant with a tighter caution band around zero profit.
    pub fn narrow_band() -> Self {
        Self {
            near_breakeven_lower_bound: NARROW_LOWER_BOUND,
            ..Self::default()
        }
    }

    pub fn threshold_band(&self) -> ThresholdBand {
        ThresholdBand {
            lower: self.near_breakeven_lower_bound,
            upper: self.near_breakeven_upper_bound,
        }
    }

    /// Whether a category is counted. Supplies is the variable cost and is
    /// always counted.
    pub fn tracks(&self, category: CostCategory) -> bool {
        !category.is_fixed() || self.fixed_cost_categories.contains(&category)
    }

    pub fn validate(&self) -> FinanceResult<()> {
        if self.near_breakeven_lower_bound > self.near_breakeven_upper_bound {
            return Err(FinanceError::InvalidInput {
                field: "near_breakeven_lower_bound".to_string(),
                reason: format!(
                    "Lower bound ({}) must not exceed upper bound ({})",
                    self.near_breakeven_lower_bound, self.near_breakeven_upper_bound
                ),
            });
        }

        if self.series_step <= Decimal::ZERO {
            return Err(FinanceError::InvalidInput {
                field: "series_step".to_string(),
                reason: "Series step must be positive".to_string(),
            });
        }

        if self.max_series_points == 0 {
            return Err(FinanceError::InvalidInput {
                field: "max_series_points".to_string(),
                reason: "At least one series point must be allowed".to_string(),
            });
        }

        for (i, category) in self.fixed_cost_categories.iter().enumerate() {
            if !category.is_fixed() {
                return Err(FinanceError::InvalidInput {
                    field: "fixed_cost_categories".to_string(),
                    reason: format!("{} is a variable cost, not a fixed cost", category.label()),
                });
            }
            if self.fixed_cost_categories[..i].contains(category) {
                return Err(FinanceError::InvalidInput {
                    field: "fixed_cost_categories".to_string(),
                    reason: format!("{} is listed more than once", category.label()),
                });
            }
        }

        Ok(())
    }
}
