use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use gradeflow_reporting::DateRange;

#[derive(Debug, Parser)]
#[command(name = "gradeflow-report", version)]
#[command(about = "Sales reports over an orders JSON export")]
#[command(
    after_help = "<ORDER> is an order id or its display number.\n\nEnvironment:\n  GRADEFLOW_TZ_OFFSET_MINUTES   Report time zone (minutes east of UTC)\n  RUST_LOG                      Log filter (default: info)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Order count, piece total and best-seller ranking.
    Metrics {
        orders: PathBuf,
        /// First day included (YYYY-MM-DD).
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Last day included (YYYY-MM-DD).
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Production manifest over the selected orders.
    Manifest {
        orders: PathBuf,
        #[arg(required = true, value_name = "ORDER")]
        selected: Vec<String>,
    },
    /// Print sheet for one order.
    Print { orders: PathBuf, order: String },
}

impl Command {
    /// Date window of a metrics run; unbounded for the other commands.
    pub fn range(&self) -> DateRange {
        match self {
            Command::Metrics { start, end, .. } => DateRange::new(*start, *end),
            _ => DateRange::unbounded(),
        }
    }
}
