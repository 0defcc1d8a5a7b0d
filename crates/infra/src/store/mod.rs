//! Record storage abstractions.
//!
//! The hosted backend owns persistence; these traits are the seam the
//! dashboard talks through, with an in-memory implementation for tests and
//! offline report runs.

pub mod in_memory;
pub mod table;

pub use in_memory::{InMemoryRecordStore, InMemoryTable};
pub use table::{StoreError, Table};

use gradeflow_auth::Profile;
use gradeflow_parties::Client;
use gradeflow_products::Product;
use gradeflow_sales::Order;

/// The four tables the dashboard reads and writes.
pub trait RecordStore: Send + Sync {
    fn products(&self) -> &dyn Table<Product>;
    fn clients(&self) -> &dyn Table<Client>;
    fn orders(&self) -> &dyn Table<Order>;
    fn profiles(&self) -> &dyn Table<Profile>;
}

impl<S> RecordStore for std::sync::Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn products(&self) -> &dyn Table<Product> {
        (**self).products()
    }

    fn clients(&self) -> &dyn Table<Client> {
        (**self).clients()
    }

    fn orders(&self) -> &dyn Table<Order> {
        (**self).orders()
    }

    fn profiles(&self) -> &dyn Table<Profile> {
        (**self).profiles()
    }
}
