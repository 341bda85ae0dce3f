//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Persistence contract for user records.
///
/// The document store behind this trait is the sole source of truth and the
/// authoritative enforcement point for the username uniqueness constraint;
/// callers' read-then-write checks are not atomic with `save`.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Find a user by their store-assigned identifier
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by username. Exact match; callers pass the lowercased form.
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a user. Assigns an identifier when the record has none,
    /// otherwise overwrites the record with that identifier.
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Delete a single user record
    async fn delete(&self, user: &User) -> Result<(), DomainError>;

    /// Delete every user record
    async fn delete_all(&self) -> Result<(), DomainError>;

    /// List every user record
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;
}
