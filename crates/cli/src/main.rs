use anyhow::Result;
use clap::Parser;

use gradeflow_cli::{Cli, execute};
use gradeflow_infra::BackendConfig;
use gradeflow_reporting::ReportClock;

fn main() -> Result<()> {
    let cli = Cli::parse();
    gradeflow_observability::init();

    let config = BackendConfig::from_env()?;
    let clock = ReportClock::with_offset_minutes(config.tz_offset_minutes);

    let report = execute(&cli.command, &clock)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
