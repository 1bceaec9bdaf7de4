//! # User model for authenticated sessions
//!
//! [`User`] is the profile the backend returns from `/auth/me`, `/auth/login`
//! and `/auth/register`:
//!
//! - `id`: the backend document id (sent as `_id` or `id`).
//! - `name`, `email`: profile fields captured at registration.
//! - `created_at`: ISO-8601 timestamp, shown as "member since".
//! - `preferences`: free-form settings object owned by the backend; the client
//!   keeps it opaque.
//!
//! The helper [`User::display_name`] returns the user's name or falls back to
//! their email address, and [`User::initial`] gives the avatar letter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The signed-in user as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub preferences: Option<Value>,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Upper-cased first letter of the name, `'U'` when there is none.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_mongo_style_document() {
        let user: User = serde_json::from_str(
            r#"{"_id":"65f1c0","name":"asha","email":"asha@example.com","createdAt":"2024-03-01T10:00:00.000Z","preferences":{"units":"kg"}}"#,
        )
        .unwrap();
        assert_eq!(user.id, "65f1c0");
        assert_eq!(user.created_at.as_deref(), Some("2024-03-01T10:00:00.000Z"));
        assert_eq!(user.initial(), 'A');
        assert_eq!(user.display_name(), "asha");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user: User = serde_json::from_str(r#"{"id":"1","email":"x@y.z"}"#).unwrap();
        assert_eq!(user.display_name(), "x@y.z");
        assert_eq!(user.initial(), 'U');
    }
}
