//! Repository trait for API token storage.

use crate::domain::entities::ApiToken;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for API credentials.
///
/// Tokens are identified by the HMAC-SHA256 hash of their raw value; the raw
/// token never reaches storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Stores a new token hash under a human-readable name.
    async fn insert(&self, name: &str, token_hash: &str) -> Result<ApiToken, AppError>;

    /// Returns true if the hash matches a stored, non-revoked token.
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Records when a token was last used. Best-effort; callers may ignore
    /// failures.
    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError>;

    /// Lists all tokens, including revoked ones.
    async fn list(&self) -> Result<Vec<ApiToken>, AppError>;

    /// Revokes a token by name. Returns `Ok(false)` when no active token has
    /// that name.
    async fn revoke(&self, name: &str) -> Result<bool, AppError>;
}
