use serde::{Deserialize, Serialize};

use gradeflow_core::{ClientId, DomainError, DomainResult, Entity, ProfileId, format_location};

/// Client record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    /// Representative who registered the client.
    pub rep_id: Option<ProfileId>,
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Client {
    pub fn is_owned_by(&self, rep_id: ProfileId) -> bool {
        self.rep_id == Some(rep_id)
    }

    /// `"City - ST"`, as printed on order sheets.
    pub fn location(&self) -> String {
        format_location(&self.city, &self.state)
    }
}

/// Form payload for a new client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

impl NewClient {
    pub fn new(name: impl Into<String>, city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            state: state.into(),
        }
    }

    /// Validate the form and stamp the owning representative.
    ///
    /// Only the name is mandatory; all fields are trimmed and the state is
    /// upper-cased (`"sp"` becomes `"SP"`).
    pub fn into_client(self, id: ClientId, rep_id: ProfileId) -> DomainResult<Client> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("client name must not be blank"));
        }

        Ok(Client {
            id,
            name,
            city: self.city.trim().to_string(),
            state: self.state.trim().to_uppercase(),
            rep_id: Some(rep_id),
        })
    }
}
