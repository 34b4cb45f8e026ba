pub mod config;
pub mod error;
pub mod model;
pub mod types;

#[cfg(feature = "series")]
pub mod series;

#[cfg(feature = "series")]
pub mod pipeline;

pub use config::ModelConfig;
pub use error::FinanceError;
pub use model::{compute_metrics, MonthlyInputs, ProfitabilityClass};
pub use types::*;

#[cfg(feature = "series")]
pub use pipeline::recompute;
#[cfg(feature = "series")]
pub use series::generate_break_even_series;

/// Standard result type for all juice-finance operations
pub type FinanceResult<T> = Result<T, FinanceError>;
