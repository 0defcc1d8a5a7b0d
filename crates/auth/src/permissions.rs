use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Permissions are opaque strings (e.g. `"orders.write"`). The wildcard `"*"`
/// grants everything and is what the administrator role carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub const WILDCARD: Permission = Permission::constant("*");

    pub const CATALOG_READ: Permission = Permission::constant("catalog.read");
    pub const CATALOG_WRITE: Permission = Permission::constant("catalog.write");
    pub const CLIENTS_READ: Permission = Permission::constant("clients.read");
    pub const CLIENTS_WRITE: Permission = Permission::constant("clients.write");
    /// Read orders submitted by the acting representative.
    pub const ORDERS_READ_OWN: Permission = Permission::constant("orders.read_own");
    /// Read every order regardless of representative.
    pub const ORDERS_READ_ALL: Permission = Permission::constant("orders.read_all");
    pub const ORDERS_WRITE: Permission = Permission::constant("orders.write");
    /// Flag an order sheet as printed.
    pub const ORDERS_MARK_PRINTED: Permission = Permission::constant("orders.mark_printed");
    pub const PROFILES_READ: Permission = Permission::constant("profiles.read");
    pub const PROFILES_DELETE: Permission = Permission::constant("profiles.delete");
    pub const REPORTS_READ: Permission = Permission::constant("reports.read");

    const fn constant(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
