//! Grade grids and sales reports.
//!
//! Everything here is a pure function of already-fetched records: no IO, no
//! shared state, safe to call from anywhere.

pub mod grid;
pub mod manifest;
pub mod metrics;
pub mod print_sheet;

pub use grid::{GradeAccumulator, GradeRow, GradeTable, aggregate_grid};
pub use manifest::{ProductionManifest, production_manifest};
pub use metrics::{
    DateRange, Metrics, OrderSummary, RANKING_SIZE, RankingEntry, ReportClock, filter_orders,
    recent_orders, summarize_metrics, summarize_metrics_at,
};
pub use print_sheet::{ColumnTotal, PrintSheet};
