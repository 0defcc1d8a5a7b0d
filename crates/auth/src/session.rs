use gradeflow_core::ProfileId;

use crate::profile::Profile;
use crate::roles::Role;

/// Who is acting, passed explicitly into every dashboard operation.
///
/// Built once after sign-in from the authenticated user's profile row and
/// never mutated; signing out means dropping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    profile: Profile,
}

impl SessionContext {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn profile_id(&self) -> ProfileId {
        self.profile.id
    }

    pub fn role(&self) -> Role {
        self.profile.role
    }

    pub fn display_name(&self) -> &str {
        &self.profile.name
    }

    pub fn is_admin(&self) -> bool {
        self.profile.is_admin()
    }
}
