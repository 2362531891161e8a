//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! Role strings the client does not recognise deserialize to `Role::Unknown`
//! instead of failing the whole `/api/auth/me` payload, so an unexpected role
//! degrades to "no restricted access" rather than "not signed in".

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access tier attached to an authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Librarian,
    Member,
    /// Any role value this client does not know about.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Librarian => "librarian",
            Self::Member => "member",
            Self::Unknown => "unknown",
        }
    }
}

/// The signed-in user as returned by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact address, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Assigned role. Absent for accounts the backend has not classified.
    #[serde(default)]
    pub role: Option<Role>,
}

impl User {
    /// Role label for display; `"none"` when the account has no role.
    pub fn role_label(&self) -> &'static str {
        self.role.map_or("none", Role::as_str)
    }
}
