use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

/// A signed-in user's profile.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    /// Avatar initials: first letter of each name word, uppercased.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// Raw credentials submitted by the login form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// An explicit session value.
///
/// Replaces ambient authentication state: sign-in and sign-out are commands
/// that return the next session value, and components needing the current
/// user receive a `Session` instead of reaching into shared state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Session {
    SignedOut,
    SignedIn {
        session_id: String,
        user: User,
        signed_in_at: DateTime<Utc>,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::SignedIn { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::SignedIn { user, .. } => Some(user),
            Session::SignedOut => None,
        }
    }
}
