use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use juice_finance_core::model::{self, MonthlyInputs};
use juice_finance_core::{pipeline, series, ComputationOutput};

use super::config::ConfigArgs;
use crate::input;

/// One month of revenue and costs. Defaults are the shop's reference month.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct MonthArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Sales revenue for the month
    #[arg(long, default_value = "30000")]
    pub sales_revenue: Decimal,

    /// Cost of supplies (variable)
    #[arg(long, default_value = "12000")]
    pub supplies: Decimal,

    /// Staff wages (fixed)
    #[arg(long, default_value = "5600")]
    pub staff_wages: Decimal,

    /// Shop rent (fixed)
    #[arg(long, default_value = "3000")]
    pub rent: Decimal,

    /// Water and electricity (fixed)
    #[arg(long, default_value = "700")]
    pub utilities: Decimal,

    /// Freight (fixed)
    #[arg(long, default_value = "160")]
    pub freight: Decimal,

    /// Maintenance (fixed)
    #[arg(long, default_value = "200")]
    pub maintenance: Decimal,

    /// Equipment depreciation (fixed)
    #[arg(long, default_value = "250")]
    pub depreciation: Decimal,
}

impl MonthArgs {
    fn into_inputs(self) -> Result<MonthlyInputs, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            tracing::info!(path = %path, "reading monthly inputs from file");
            return input::file::read_json(path);
        }
        if let Some(data) = input::stdin::read_stdin()? {
            tracing::info!("reading monthly inputs from stdin");
            return Ok(serde_json::from_value(data)?);
        }
        tracing::info!("using monthly inputs from flags");
        Ok(MonthlyInputs {
            sales_revenue: self.sales_revenue,
            variable_cost_supplies: self.supplies,
            staff_wages: self.staff_wages,
            rent: self.rent,
            utilities: self.utilities,
            freight: self.freight,
            maintenance: self.maintenance,
            depreciation: self.depreciation,
        })
    }
}

fn to_value<T: Serialize>(output: ComputationOutput<T>) -> Result<Value, Box<dyn std::error::Error>> {
    for w in &output.warnings {
        tracing::warn!("{}", w);
    }
    tracing::debug!(
        elapsed_us = output.metadata.computation_time_us,
        "{}",
        output.methodology
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_metrics(args: MonthArgs, config: &ConfigArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = config.resolve()?;
    let inputs = args.into_inputs()?;
    let result = model::compute_metrics(&inputs, &config)?;
    to_value(result)
}

pub fn run_series(args: MonthArgs, config: &ConfigArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = config.resolve()?;
    let inputs = args.into_inputs()?;
    inputs.validate()?;
    let metrics = model::derive_metrics(&inputs, &config);
    let result =
        series::generate_break_even_series(&metrics, config.series_step, config.max_series_points)?;
    to_value(result)
}

pub fn run_dashboard(
    args: MonthArgs,
    config: &ConfigArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let config = config.resolve()?;
    let inputs = args.into_inputs()?;
    let result = pipeline::recompute(&inputs, &config)?;
    to_value(result)
}
