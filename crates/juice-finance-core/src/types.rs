use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Safe ratio: returns Decimal::ZERO when the denominator is not positive.
/// Only for ratios bounded by one, such as a part over its whole.
pub(crate) fn safe_ratio(numerator: Decimal, denominator: Decimal) -> Rate {
    if denominator <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// Decimal arithmetic that clamps to `Decimal::MIN`/`Decimal::MAX` instead
/// of panicking on overflow, and remembers which figures were clamped.
#[derive(Debug, Default)]
pub(crate) struct Clamped {
    fields: Vec<&'static str>,
}

impl Clamped {
    fn record(&mut self, field: &'static str) {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
    }

    fn bound(negative: bool) -> Decimal {
        if negative {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    }

    pub fn add(&mut self, field: &'static str, a: Decimal, b: Decimal) -> Decimal {
        a.checked_add(b).unwrap_or_else(|| {
            self.record(field);
            Self::bound(b.is_sign_negative())
        })
    }

    pub fn sub(&mut self, field: &'static str, a: Decimal, b: Decimal) -> Decimal {
        a.checked_sub(b).unwrap_or_else(|| {
            self.record(field);
            Self::bound(!b.is_sign_negative())
        })
    }

    /// `numerator / denominator`; the denominator must be non-zero.
    pub fn div(&mut self, field: &'static str, numerator: Decimal, denominator: Decimal) -> Decimal {
        numerator.checked_div(denominator).unwrap_or_else(|| {
            self.record(field);
            Self::bound(numerator.is_sign_negative() != denominator.is_sign_negative())
        })
    }

    /// Like `safe_ratio`, for ratios that may exceed the Decimal range.
    pub fn ratio(&mut self, field: &'static str, numerator: Decimal, denominator: Decimal) -> Rate {
        if denominator <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            self.div(field, numerator, denominator)
        }
    }

    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_clamped_add_saturates_and_records() {
        let mut c = Clamped::default();
        assert_eq!(c.add("total", Decimal::MAX, dec!(1)), Decimal::MAX);
        assert_eq!(c.add("total", dec!(2), dec!(3)), dec!(5));
        assert_eq!(c.fields(), &["total"]);
    }

    #[test]
    fn test_clamped_sub_saturates_downwards() {
        let mut c = Clamped::default();
        assert_eq!(c.sub("profit", Decimal::MIN, dec!(10)), Decimal::MIN);
        assert_eq!(c.fields(), &["profit"]);
    }

    #[test]
    fn test_clamped_div_keeps_sign() {
        let mut c = Clamped::default();
        assert_eq!(c.div("bep", Decimal::MAX, dec!(0.001)), Decimal::MAX);
        assert_eq!(c.div("lev", Decimal::MAX, dec!(-0.001)), Decimal::MIN);
        assert_eq!(c.fields(), &["bep", "lev"]);
    }

    #[test]
    fn test_clamped_ratio_zero_denominator() {
        let mut c = Clamped::default();
        assert_eq!(c.ratio("margin", dec!(5), dec!(0)), dec!(0));
        assert!(c.fields().is_empty());
    }
}
