//! Storage seam for registered users.

use async_trait::async_trait;

use crate::domain::entities::users::UserRecord;
use crate::errors::AppResult;

/// Persistence contract the registration service depends on.
///
/// Lookups take the canonical (lowercased) email. `insert` must enforce
/// email and phone uniqueness itself and report a violation as
/// `AppError::DuplicateField`, because two concurrent registrations can both
/// pass the service's pre-insert lookups.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;

    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<UserRecord>>;

    /// Stores the record and returns it with its assigned id.
    async fn insert(&self, user: UserRecord) -> AppResult<UserRecord>;

    /// Creates whatever indexes the backend needs. Idempotent.
    async fn ensure_indexes(&self) -> AppResult<()>;

    /// Short backend name for health output and logs.
    fn backend_name(&self) -> &'static str;
}
