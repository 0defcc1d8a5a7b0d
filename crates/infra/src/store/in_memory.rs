use std::collections::HashSet;
use std::sync::RwLock;

use gradeflow_auth::Profile;
use gradeflow_core::Entity;
use gradeflow_parties::Client;
use gradeflow_products::Product;
use gradeflow_sales::Order;

use super::RecordStore;
use super::table::{StoreError, Table};

/// In-memory table for tests/dev.
#[derive(Debug)]
pub struct InMemoryTable<V> {
    inner: RwLock<Vec<V>>,
}

impl<V> InMemoryTable<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    pub fn with_rows(rows: Vec<V>) -> Self {
        Self {
            inner: RwLock::new(rows),
        }
    }
}

impl<V> Default for InMemoryTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("in-memory table lock poisoned".to_string())
}

impl<V> Table<V> for InMemoryTable<V>
where
    V: Entity + Clone + Send + Sync,
{
    fn get(&self, id: V::Id) -> Result<Option<V>, StoreError> {
        let rows = self.inner.read().map_err(|_| poisoned())?;
        Ok(rows.iter().find(|r| r.id() == id).cloned())
    }

    fn list(&self) -> Result<Vec<V>, StoreError> {
        let rows = self.inner.read().map_err(|_| poisoned())?;
        Ok(rows.clone())
    }

    fn insert(&self, new_rows: Vec<V>) -> Result<(), StoreError> {
        let mut rows = self.inner.write().map_err(|_| poisoned())?;

        let mut seen: HashSet<V::Id> = rows.iter().map(Entity::id).collect();
        for row in &new_rows {
            if !seen.insert(row.id()) {
                return Err(StoreError::Duplicate(format!("{:?}", row.id())));
            }
        }

        rows.extend(new_rows);
        Ok(())
    }

    fn update(&self, row: V) -> Result<bool, StoreError> {
        let mut rows = self.inner.write().map_err(|_| poisoned())?;
        match rows.iter_mut().find(|r| r.id() == row.id()) {
            Some(slot) => {
                *slot = row;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, ids: &[V::Id]) -> Result<usize, StoreError> {
        let mut rows = self.inner.write().map_err(|_| poisoned())?;
        let before = rows.len();
        rows.retain(|r| !ids.contains(&r.id()));
        Ok(before - rows.len())
    }
}

/// All four tables in memory.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    products: InMemoryTable<Product>,
    clients: InMemoryTable<Client>,
    orders: InMemoryTable<Order>,
    profiles: InMemoryTable<Profile>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from previously exported rows.
    pub fn with_records(
        products: Vec<Product>,
        clients: Vec<Client>,
        orders: Vec<Order>,
        profiles: Vec<Profile>,
    ) -> Self {
        Self {
            products: InMemoryTable::with_rows(products),
            clients: InMemoryTable::with_rows(clients),
            orders: InMemoryTable::with_rows(orders),
            profiles: InMemoryTable::with_rows(profiles),
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn products(&self) -> &dyn Table<Product> {
        &self.products
    }

    fn clients(&self) -> &dyn Table<Client> {
        &self.clients
    }

    fn orders(&self) -> &dyn Table<Order> {
        &self.orders
    }

    fn profiles(&self) -> &dyn Table<Profile> {
        &self.profiles
    }
}
