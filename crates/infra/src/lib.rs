//! Infrastructure layer: backend configuration, record storage and the
//! dashboard service that composes them with the domain crates.

pub mod config;
pub mod dashboard;
pub mod store;

pub use config::BackendConfig;
pub use dashboard::{Dashboard, DashboardData, ServiceError, ServiceResult};
pub use store::{InMemoryRecordStore, InMemoryTable, RecordStore, StoreError, Table};
