use thiserror::Error;

use gradeflow_core::Entity;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A row with the same id already exists.
    #[error("duplicate record: {0}")]
    Duplicate(String),
    /// The backend could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// One table of records keyed by their entity id.
///
/// `list` returns rows in insertion order.
pub trait Table<V: Entity>: Send + Sync {
    fn get(&self, id: V::Id) -> Result<Option<V>, StoreError>;
    fn list(&self) -> Result<Vec<V>, StoreError>;
    /// Insert new rows; fails without writing anything if any id exists.
    fn insert(&self, rows: Vec<V>) -> Result<(), StoreError>;
    /// Replace an existing row. Returns `false` when the id is unknown.
    fn update(&self, row: V) -> Result<bool, StoreError>;
    /// Delete rows by id. Returns how many rows were removed.
    fn delete(&self, ids: &[V::Id]) -> Result<usize, StoreError>;
}
