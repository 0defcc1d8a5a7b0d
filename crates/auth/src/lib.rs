//! `gradeflow-auth`: profiles, roles and the authorization policy.
//!
//! Authentication itself happens in the hosted backend; this crate only
//! models who is acting (an explicit [`SessionContext`]) and what their role
//! allows. Decoupled from transport and storage.

pub mod authorize;
pub mod permissions;
pub mod profile;
pub mod roles;
pub mod session;

pub use authorize::{AuthzError, authorize};
pub use permissions::Permission;
pub use profile::Profile;
pub use roles::Role;
pub use session::SessionContext;
