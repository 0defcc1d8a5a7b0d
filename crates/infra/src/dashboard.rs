//! Dashboard service.
//!
//! Every operation takes the caller's [`SessionContext`] explicitly, checks
//! the role policy and then reads or writes through a [`RecordStore`]. Reads
//! are scoped the way the backend's row rules scope them: representatives
//! only ever see their own clients and orders.

use chrono::Utc;
use serde::Serialize;

use gradeflow_auth::{AuthzError, Permission, Profile, SessionContext, authorize};
use gradeflow_core::{
    ClientId, DomainError, OrderId, ProductId, ProfileId, normalize_label,
};
use gradeflow_parties::{Client, NewClient};
use gradeflow_products::{Catalog, Product, RegisterGrade};
use gradeflow_reporting::{
    DateRange, Metrics, PrintSheet, ProductionManifest, ReportClock, production_manifest,
    summarize_metrics_at,
};
use gradeflow_sales::{Cart, Order, OrderStamp, display_id};

use crate::store::{RecordStore, StoreError};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Forbidden(#[from] AuthzError),
    #[error("unauthorized")]
    Unauthorized,
    #[error(transparent)]
    Store(StoreError),
}

impl From<DomainError> for ServiceError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => ServiceError::Validation(msg),
            DomainError::InvalidId(msg) => ServiceError::Validation(msg),
            DomainError::InvariantViolation(msg) => ServiceError::InvariantViolation(msg),
            DomainError::NotFound(what) => ServiceError::NotFound(what),
            DomainError::Conflict(msg) => ServiceError::Conflict(msg),
            DomainError::Unauthorized => ServiceError::Unauthorized,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Duplicate(msg) => ServiceError::Conflict(msg),
            other => ServiceError::Store(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Everything the dashboard renders after sign-in, already scoped to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardData {
    pub profile: Profile,
    pub products: Vec<Product>,
    pub clients: Vec<Client>,
    /// Newest first.
    pub orders: Vec<Order>,
    pub profiles: Vec<Profile>,
}

pub struct Dashboard<S> {
    store: S,
}

impl<S: RecordStore> Dashboard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load(&self, session: &SessionContext) -> ServiceResult<DashboardData> {
        authorize(session, &Permission::CATALOG_READ)?;

        let products = self.store.products().list()?;
        let clients = self.visible_clients(session)?;
        let orders = self.visible_orders(session)?;
        let profiles = if session.is_admin() {
            self.store.profiles().list()?
        } else {
            vec![session.profile().clone()]
        };

        tracing::debug!(
            profile_id = %session.profile_id(),
            role = %session.role(),
            products = products.len(),
            clients = clients.len(),
            orders = orders.len(),
            "dashboard loaded"
        );

        Ok(DashboardData {
            profile: session.profile().clone(),
            products,
            clients,
            orders,
            profiles,
        })
    }

    /// Submit the cart as a new order for `client_id`.
    ///
    /// The cart is only emptied once the order is stored.
    pub fn create_order(
        &self,
        session: &SessionContext,
        cart: &mut Cart,
        client_id: Option<ClientId>,
        delivery_date: &str,
        payment_method: &str,
    ) -> ServiceResult<Order> {
        authorize(session, &Permission::ORDERS_WRITE)?;

        let client = match client_id {
            Some(id) => Some(self.visible_client(session, id)?),
            None => None,
        };

        let new_order = cart
            .clone()
            .checkout(client.as_ref(), delivery_date, payment_method)?;

        let order = new_order.into_order(OrderStamp {
            id: OrderId::new(),
            display_id: display_id::generate(),
            rep_id: session.profile_id(),
            rep_name: session.display_name().to_string(),
            created_at: Utc::now(),
        });
        self.store.orders().insert(vec![order.clone()])?;
        cart.clear();

        tracing::info!(
            order_id = %order.id,
            display_id = %order.display_number(),
            rep_id = %session.profile_id(),
            pieces = order.total_pieces(),
            "order created"
        );
        Ok(order)
    }

    pub fn create_client(&self, session: &SessionContext, new_client: NewClient) -> ServiceResult<Client> {
        authorize(session, &Permission::CLIENTS_WRITE)?;

        let client = new_client.into_client(ClientId::new(), session.profile_id())?;
        self.store.clients().insert(vec![client.clone()])?;

        tracing::info!(client_id = %client.id, rep_id = %session.profile_id(), "client created");
        Ok(client)
    }

    /// Register a reference/color over a set of sizes.
    ///
    /// Sizes already in the catalog are skipped; returns the rows inserted.
    pub fn register_grade(&self, session: &SessionContext, command: &RegisterGrade) -> ServiceResult<Vec<Product>> {
        authorize(session, &Permission::CATALOG_WRITE)?;

        let variants = command.variants()?;
        let existing = self.store.products().list()?;
        let catalog = Catalog::new(&existing);

        let fresh: Vec<Product> = variants
            .into_iter()
            .filter(|v| catalog.find_variant(&v.reference, &v.color, &v.size).is_none())
            .map(|v| v.into_product(ProductId::new()))
            .collect();

        if fresh.is_empty() {
            return Err(ServiceError::Conflict(format!(
                "grade {} {} already registered for every selected size",
                normalize_label(&command.reference),
                normalize_label(&command.color)
            )));
        }

        self.store.products().insert(fresh.clone())?;
        tracing::info!(
            reference = %fresh[0].reference,
            color = %fresh[0].color,
            sizes = fresh.len(),
            "grade registered"
        );
        Ok(fresh)
    }

    pub fn delete_variant(&self, session: &SessionContext, id: ProductId) -> ServiceResult<()> {
        authorize(session, &Permission::CATALOG_WRITE)?;

        if self.store.products().delete(&[id])? == 0 {
            return Err(ServiceError::NotFound(format!("product {id}")));
        }
        tracing::info!(product_id = %id, "variant deleted");
        Ok(())
    }

    /// Delete every size of a reference/color. Returns how many rows went.
    pub fn delete_grade(&self, session: &SessionContext, reference: &str, color: &str) -> ServiceResult<usize> {
        authorize(session, &Permission::CATALOG_WRITE)?;

        let reference = normalize_label(reference);
        let color = normalize_label(color);
        let ids: Vec<ProductId> = self
            .store
            .products()
            .list()?
            .into_iter()
            .filter(|p| p.is_grade(&reference, &color))
            .map(|p| p.id)
            .collect();

        let removed = self.store.products().delete(&ids)?;
        tracing::info!(%reference, %color, removed, "grade deleted");
        Ok(removed)
    }

    pub fn mark_printed(&self, session: &SessionContext, id: OrderId) -> ServiceResult<Order> {
        authorize(session, &Permission::ORDERS_MARK_PRINTED)?;

        let mut order = self
            .store
            .orders()
            .get(id)?
            .ok_or_else(|| ServiceError::NotFound(format!("order {id}")))?;
        if order.printed {
            return Ok(order);
        }

        order.mark_printed();
        if !self.store.orders().update(order.clone())? {
            return Err(ServiceError::NotFound(format!("order {id}")));
        }
        tracing::info!(order_id = %id, "order marked printed");
        Ok(order)
    }

    pub fn list_reps(&self, session: &SessionContext) -> ServiceResult<Vec<Profile>> {
        authorize(session, &Permission::PROFILES_READ)?;

        Ok(self
            .store
            .profiles()
            .list()?
            .into_iter()
            .filter(Profile::is_rep)
            .collect())
    }

    /// Remove a representative's profile. Admin profiles cannot be removed
    /// this way.
    pub fn delete_rep(&self, session: &SessionContext, id: ProfileId) -> ServiceResult<()> {
        authorize(session, &Permission::PROFILES_DELETE)?;

        let profile = self
            .store
            .profiles()
            .get(id)?
            .ok_or_else(|| ServiceError::NotFound(format!("profile {id}")))?;
        if !profile.is_rep() {
            return Err(ServiceError::InvariantViolation(format!(
                "profile {id} is not a representative"
            )));
        }

        self.store.profiles().delete(&[id])?;
        tracing::info!(profile_id = %id, name = %profile.name, "representative deleted");
        Ok(())
    }

    pub fn print_sheet(&self, session: &SessionContext, id: OrderId) -> ServiceResult<PrintSheet> {
        let order = self.visible_order(session, id)?;
        Ok(PrintSheet::for_order(&order))
    }

    pub fn metrics(&self, session: &SessionContext, range: &DateRange, clock: &ReportClock) -> ServiceResult<Metrics> {
        authorize(session, &Permission::REPORTS_READ)?;

        let orders = self.store.orders().list()?;
        Ok(summarize_metrics_at(&orders, range, clock))
    }

    pub fn production_manifest(&self, session: &SessionContext, selected: &[OrderId]) -> ServiceResult<ProductionManifest> {
        authorize(session, &Permission::REPORTS_READ)?;

        let orders = self.store.orders().list()?;
        let manifest = production_manifest(&orders, selected);
        tracing::info!(
            orders = manifest.orders.len(),
            pieces = manifest.total_pieces,
            "production manifest built"
        );
        Ok(manifest)
    }

    fn visible_clients(&self, session: &SessionContext) -> ServiceResult<Vec<Client>> {
        authorize(session, &Permission::CLIENTS_READ)?;

        let mut clients = self.store.clients().list()?;
        if !session.is_admin() {
            let me = session.profile_id();
            clients.retain(|c| c.is_owned_by(me));
        }
        Ok(clients)
    }

    fn visible_client(&self, session: &SessionContext, id: ClientId) -> ServiceResult<Client> {
        authorize(session, &Permission::CLIENTS_READ)?;

        self.store
            .clients()
            .get(id)?
            .filter(|c| session.is_admin() || c.is_owned_by(session.profile_id()))
            .ok_or_else(|| ServiceError::NotFound(format!("client {id}")))
    }

    fn visible_orders(&self, session: &SessionContext) -> ServiceResult<Vec<Order>> {
        let mut orders = self.store.orders().list()?;
        if authorize(session, &Permission::ORDERS_READ_ALL).is_err() {
            authorize(session, &Permission::ORDERS_READ_OWN)?;
            let me = session.profile_id();
            orders.retain(|o| o.is_owned_by(me));
        }
        // Stable: rows without a timestamp keep their relative order at the end.
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    fn visible_order(&self, session: &SessionContext, id: OrderId) -> ServiceResult<Order> {
        let order = self
            .store
            .orders()
            .get(id)?
            .ok_or_else(|| ServiceError::NotFound(format!("order {id}")))?;

        if authorize(session, &Permission::ORDERS_READ_ALL).is_ok() {
            return Ok(order);
        }
        authorize(session, &Permission::ORDERS_READ_OWN)?;
        if order.is_owned_by(session.profile_id()) {
            Ok(order)
        } else {
            Err(ServiceError::NotFound(format!("order {id}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryRecordStore;
    use gradeflow_auth::Role;
    use gradeflow_core::Quantity;

    fn session(name: &str, role: Role) -> SessionContext {
        SessionContext::new(Profile::new(ProfileId::new(), name, role))
    }

    fn dashboard() -> Dashboard<InMemoryRecordStore> {
        Dashboard::new(InMemoryRecordStore::new())
    }

    #[test]
    fn register_grade_skips_existing_sizes_and_conflicts_when_nothing_is_new() {
        let dash = dashboard();
        let admin = session("Admin", Role::Admin);

        let first = dash
            .register_grade(&admin, &RegisterGrade::new("ref1", "azul", ["P", "M"]))
            .unwrap();
        assert_eq!(first.len(), 2);

        let second = dash
            .register_grade(&admin, &RegisterGrade::new("REF1", " Azul ", ["M", "G"]))
            .unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].size, "G");

        let err = dash
            .register_grade(&admin, &RegisterGrade::new("ref1", "azul", ["P", "G"]))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(dash.store().products().list().unwrap().len(), 3);
    }

    #[test]
    fn reps_cannot_touch_the_catalog() {
        let dash = dashboard();
        let rep = session("Rep", Role::Rep);

        let err = dash
            .register_grade(&rep, &RegisterGrade::new("R1", "AZUL", ["P"]))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
    }

    #[test]
    fn delete_grade_removes_every_size_of_the_pair() {
        let dash = dashboard();
        let admin = session("Admin", Role::Admin);
        dash.register_grade(&admin, &RegisterGrade::new("R1", "AZUL", ["P", "M", "G"]))
            .unwrap();
        dash.register_grade(&admin, &RegisterGrade::new("R1", "PRETO", ["P"]))
            .unwrap();

        assert_eq!(dash.delete_grade(&admin, "r1", "azul").unwrap(), 3);
        let left = dash.store().products().list().unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].color, "PRETO");

        let err = dash.delete_variant(&admin, ProductId::new()).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn create_order_keeps_cart_when_client_is_missing() {
        let dash = dashboard();
        let admin = session("Admin", Role::Admin);
        let rep = session("Rep", Role::Rep);
        let products = dash
            .register_grade(&admin, &RegisterGrade::new("R1", "AZUL", ["P"]))
            .unwrap();

        let mut cart = Cart::new();
        cart.add_grid(&Catalog::new(&products), "R1", "AZUL", [("P", Quantity::new(3))]);

        let err = dash
            .create_order(&rep, &mut cart, None, "", "")
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(cart.total_pieces(), 3);

        let err = dash
            .create_order(&rep, &mut cart, Some(ClientId::new()), "", "")
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(cart.total_pieces(), 3);
    }

    #[test]
    fn delete_rep_refuses_admin_profiles() {
        let dash = dashboard();
        let admin = session("Admin", Role::Admin);
        dash.store()
            .profiles()
            .insert(vec![admin.profile().clone()])
            .unwrap();

        let err = dash.delete_rep(&admin, admin.profile_id()).unwrap_err();
        assert!(matches!(err, ServiceError::InvariantViolation(_)));
        assert!(matches!(
            dash.delete_rep(&admin, ProfileId::new()).unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }

    #[test]
    fn domain_errors_map_onto_service_errors() {
        assert_eq!(
            ServiceError::from(DomainError::invalid_id("x")),
            ServiceError::Validation("x".to_string())
        );
        assert_eq!(
            ServiceError::from(StoreError::Duplicate("id".to_string())),
            ServiceError::Conflict("id".to_string())
        );
        assert_eq!(ServiceError::from(DomainError::Unauthorized), ServiceError::Unauthorized);
    }
}
