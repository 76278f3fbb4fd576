//! # User model for the signed-in account
//!
//! [`UserInfo`] is what the identity query (`me`) returns. Every field except
//! `id` and `email` may be missing on a freshly created account; in particular
//! `role` is absent or [`Role::Unassigned`] until onboarding completes.
//!
//! [`Role`] is deserialised leniently: a role string this client does not know
//! becomes [`Role::Unknown`] instead of failing the whole identity query.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Portal role controlling which screens a user may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Unassigned,
    Patient,
    Doctor,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Roles a user can pick during onboarding.
    pub const SELECTABLE: [Role; 2] = [Role::Patient, Role::Doctor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Unassigned => "UNASSIGNED",
            Role::Patient => "PATIENT",
            Role::Doctor => "DOCTOR",
            Role::Unknown => "UNKNOWN",
        }
    }

    /// Human title, e.g. "Doctor".
    pub fn title(&self) -> &'static str {
        match self {
            Role::Unassigned => "Unassigned",
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
            Role::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UNASSIGNED" => Ok(Role::Unassigned),
            "PATIENT" => Ok(Role::Patient),
            "DOCTOR" => Ok(Role::Doctor),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

/// The signed-in user as returned by the identity query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    /// Lower-cased role for the header, empty when no role is set.
    pub fn role_label(&self) -> String {
        self.role
            .map(|r| r.as_str().to_lowercase())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_me() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id":"u1","email":"alice@example.org","name":"Alice","avatar":null,"role":"PATIENT"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Some(Role::Patient));
        assert_eq!(user.display_name(), "Alice");
        assert_eq!(user.role_label(), "patient");
    }

    #[test]
    fn test_missing_role_and_name() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id":"u2","email":"bob@example.org"}"#).unwrap();
        assert_eq!(user.role, None);
        assert_eq!(user.display_name(), "bob@example.org");
        assert_eq!(user.role_label(), "");
    }

    #[test]
    fn test_unknown_role_is_lenient() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id":"u3","email":"x@example.org","role":"ADMIN"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Some(Role::Unknown));
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("doctor".parse::<Role>(), Ok(Role::Doctor));
        assert_eq!("PATIENT".parse::<Role>(), Ok(Role::Patient));
        assert!("nurse".parse::<Role>().is_err());
        assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"DOCTOR\"");
    }
}
