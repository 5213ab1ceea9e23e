use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub practitioner_id: Uuid,
    pub username: String,
    pub roles: Vec<String>,
}

impl Identity {
    pub fn new(practitioner_id: Uuid, username: String, roles: Vec<String>) -> Self {
        Self {
            practitioner_id,
            username,
            roles,
        }
    }

    pub fn id(&self) -> Uuid {
        self.practitioner_id
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
