//! API token entity used for write authentication.

use chrono::{DateTime, Utc};

/// A stored API credential.
///
/// Only the HMAC-SHA256 hash of the raw token is persisted; the raw value is
/// shown once at creation time by the admin CLI.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApiToken {
    pub id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl ApiToken {
    /// Returns true if the token has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}
