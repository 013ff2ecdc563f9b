//! # User model for authenticated users
//!
//! Two representations of a signed-in user:
//!
//! - [`User`] (server only) — the complete `users` row, loaded via
//!   [`sqlx::FromRow`]. `provider` / `provider_id` identify the identity
//!   provider account (`"google"` + Google subject id); the admin policy
//!   matches on `provider_id` so the privileged identity survives a
//!   database rebuild.
//! - [`UserInfo`] — the client-safe projection that crosses the
//!   server/client boundary via server functions. It converts the `Uuid`
//!   to a `String` for WASM and carries the server-computed `is_admin`
//!   flag so the client never sees the policy itself.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

#[cfg(feature = "server")]
use crate::auth::AdminPolicy;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: String,
    pub provider_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self, policy: &AdminPolicy) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            is_admin: policy.is_admin(&self.provider_id),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub is_admin: bool,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}
