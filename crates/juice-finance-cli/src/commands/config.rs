use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use juice_finance_core::ModelConfig;

use crate::input;

/// Deployment presets for the near-breakeven band.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Variant {
    /// Caution band from -500 to 0
    Default,
    /// Caution band from -200 to 0
    Narrow,
}

/// Model configuration shared by every command
#[derive(Args)]
pub struct ConfigArgs {
    /// Path to a JSON or YAML model configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Preset used when no configuration file is given
    #[arg(long, global = true)]
    pub variant: Option<Variant>,

    /// Lower edge of the near-breakeven band (e.g. -500)
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub lower_bound: Option<Decimal>,

    /// Upper edge of the near-breakeven band
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub upper_bound: Option<Decimal>,

    /// Sales step of the break-even chart grid
    #[arg(long, global = true)]
    pub step: Option<Decimal>,
}

impl ConfigArgs {
    /// File (or preset) first, then individual flags on top.
    pub fn resolve(&self) -> Result<ModelConfig, Box<dyn std::error::Error>> {
        let mut config = if let Some(ref path) = self.config {
            tracing::info!(path = %path, "loading model configuration");
            input::file::read_config(path)?
        } else {
            match self.variant {
                Some(Variant::Narrow) => ModelConfig::narrow_band(),
                Some(Variant::Default) | None => ModelConfig::default(),
            }
        };

        if let Some(lower) = self.lower_bound {
            config.near_breakeven_lower_bound = lower;
        }
        if let Some(upper) = self.upper_bound {
            config.near_breakeven_upper_bound = upper;
        }
        if let Some(step) = self.step {
            config.series_step = step;
        }

        config.validate()?;
        tracing::debug!(?config, "resolved model configuration");
        Ok(config)
    }
}
