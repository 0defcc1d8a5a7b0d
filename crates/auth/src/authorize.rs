use thiserror::Error;

use gradeflow_core::DomainError;

use crate::permissions::Permission;
use crate::session::SessionContext;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: role '{role}' lacks permission '{permission}'")]
    Forbidden { role: String, permission: String },
}

impl From<AuthzError> for DomainError {
    fn from(_: AuthzError) -> Self {
        DomainError::Unauthorized
    }
}

/// Check that the session's role grants `required`.
///
/// - No IO
/// - No panics
/// - Pure policy check; the backend enforces its own row-level rules too
pub fn authorize(session: &SessionContext, required: &Permission) -> Result<(), AuthzError> {
    let role = session.role();
    let granted = role
        .permissions()
        .iter()
        .any(|p| p.is_wildcard() || p == required);

    if granted {
        Ok(())
    } else {
        Err(AuthzError::Forbidden {
            role: role.to_string(),
            permission: required.to_string(),
        })
    }
}
