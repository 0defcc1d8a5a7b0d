use serde::{Deserialize, Serialize};

use gradeflow_core::{Entity, ProfileId};

use crate::roles::Role;

/// User profile row (one per authenticated user).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    #[serde(default)]
    pub name: String,
    pub role: Role,
}

impl Entity for Profile {
    type Id = ProfileId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Profile {
    pub fn new(id: ProfileId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_rep(&self) -> bool {
        self.role == Role::Rep
    }
}
