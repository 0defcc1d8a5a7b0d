use serde::{Deserialize, Serialize};

use crate::permissions::Permission;

/// Role stored on the user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Back office: catalog, every order, production manifests, staff.
    Admin,
    /// Sales representative: own clients and own orders.
    Rep,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Rep => "rep",
        }
    }

    /// Permissions granted by this role.
    pub fn permissions(&self) -> Vec<Permission> {
        match self {
            Role::Admin => vec![Permission::WILDCARD],
            Role::Rep => vec![
                Permission::CATALOG_READ,
                Permission::CLIENTS_READ,
                Permission::CLIENTS_WRITE,
                Permission::ORDERS_READ_OWN,
                Permission::ORDERS_WRITE,
            ],
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
