//! User service for user record management

use std::sync::Arc;

use tracing::info;

use crate::domain::user::{
    validate_mandatory_fields, validate_user_id, validate_user_name,
    validate_user_uniqueness_for_registration, validate_user_uniqueness_on_update, User,
    UserRepository,
};
use crate::domain::DomainError;

/// Orchestrates validation then persistence for user records.
///
/// Holds no state of its own; the repository is the sole source of truth.
/// Every write is gated by the field and uniqueness checks in
/// `domain::user::validation`.
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new user.
    ///
    /// The username is lowercased before the write; the store assigns the
    /// identifier. Returns a confirmation naming the persisted record.
    pub async fn register_user(&self, user: User) -> Result<String, DomainError> {
        validate_mandatory_fields(&user)?;
        validate_user_uniqueness_for_registration(&user, &*self.repository).await?;

        let mut user = user;
        user.normalize_user_name();

        let saved = self.repository.save(user).await?;
        let id = saved.id().unwrap_or_default();
        info!(id = %id, "User registered");

        Ok(format!(
            "User registered with id {}, userName {}, firstName {}, lastName {}, and email {}",
            id,
            saved.user_name(),
            saved.first_name(),
            saved.last_name(),
            saved.email()
        ))
    }

    /// Update an existing user, overwriting the record with its identifier
    pub async fn update_user(&self, user: User) -> Result<String, DomainError> {
        validate_mandatory_fields(&user)?;
        validate_user_uniqueness_on_update(&user, &*self.repository).await?;

        let mut user = user;
        user.normalize_user_name();

        let saved = self.repository.save(user).await?;
        info!(id = %saved.id().unwrap_or_default(), "User details updated");

        Ok("User details updated".to_string())
    }

    /// Get a user by their identifier
    pub async fn get_user_by_id(&self, id: &str) -> Result<User, DomainError> {
        validate_user_id(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(format!("User with ID {} not found", id)))
    }

    /// Get a user by username. The lookup is case-insensitive; a miss names
    /// the username as submitted.
    pub async fn get_user_by_user_name(&self, user_name: &str) -> Result<User, DomainError> {
        validate_user_name(user_name)?;

        self.repository
            .find_by_user_name(&user_name.to_lowercase())
            .await?
            .ok_or_else(|| {
                DomainError::user_not_found(format!("User with userName {} not found", user_name))
            })
    }

    /// List every user
    pub async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        self.repository.find_all().await
    }

    /// Delete a user by identifier. Deletion is idempotent: a missing id is
    /// treated as success and yields the same confirmation.
    pub async fn delete_user(&self, id: &str) -> Result<String, DomainError> {
        if let Some(user) = self.repository.find_by_id(id).await? {
            self.repository.delete(&user).await?;
        }

        info!(id = %id, "User deleted or does not exist");
        Ok(format!("User with id {} is deleted or does not exist", id))
    }

    /// Delete every user
    pub async fn delete_all(&self) -> Result<String, DomainError> {
        self.repository.delete_all().await?;

        info!("All users deleted");
        Ok("All users deleted".to_string())
    }
}
