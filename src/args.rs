//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Generate a synthetic inventory CSV dataset.
///
/// Defaults reproduce the canonical sample file: 200 records over the last
/// 90 days with a 10% out-of-stock rate.
#[derive(Parser, Clone, Debug)]
#[command(name = "inventory-fixtures")]
#[command(about = "Generate a synthetic inventory dataset as CSV")]
pub struct GenerateArgs {
    /// Number of days to generate data for (backwards from today)
    #[arg(long, default_value = "90")]
    pub days: u32,

    /// Number of records to generate
    #[arg(long, short = 'n', default_value = "200")]
    pub num_records: u64,

    /// Probability of an item being out of stock
    #[arg(long, default_value = "0.1")]
    pub out_of_stock_rate: f64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output CSV file path
    #[arg(long, short = 'o', default_value = "sample_inventory_limited_out_of_stock.csv")]
    pub output: PathBuf,

    /// Omit the CSV header row
    #[arg(long)]
    pub no_header: bool,
}
