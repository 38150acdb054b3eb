use serde::{Deserialize, Serialize};

/// The authenticated member asking for a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    pub id: String,
    pub display_name: String,
    pub contact: String,
}

impl Requester {
    /// Falls back to the contact when the identity provider has no display name.
    pub fn new(id: impl Into<String>, display_name: Option<String>, contact: impl Into<String>) -> Self {
        let contact = contact.into();
        let display_name = display_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| contact.clone());
        Self {
            id: id.into(),
            display_name,
            contact,
        }
    }

    pub fn is_identified(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// Caller of staff operations. `is_admin` is a claim produced by the
/// authorization collaborator before the scheduling core is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub is_admin: bool,
}

impl Actor {
    pub fn new(id: impl Into<String>, is_admin: bool) -> Self {
        Self {
            id: id.into(),
            is_admin,
        }
    }
}
