//! Offline reports over an orders export.

pub mod args;
pub mod run;

pub use args::{Cli, Command};
pub use run::{execute, load_orders};
