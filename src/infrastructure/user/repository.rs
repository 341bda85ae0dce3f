//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// Records and their username index, guarded together. A single lock keeps
/// the index consistent with the records and leaves no second lock to
/// acquire across an await point.
#[derive(Debug, Default)]
struct Store {
    /// Records keyed by store-assigned id
    users: HashMap<String, User>,
    /// Index for username -> user ID lookup
    username_index: HashMap<String, String>,
}

/// In-memory implementation of UserRepository.
///
/// Stands in for the document store: `save` assigns a UUID to records that
/// have no identifier yet, and the username index enforces the same unique
/// constraint the store's index would. Because the service's validation reads
/// are not atomic with `save`, this constraint is the authoritative one.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.get(id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;

        if let Some(user_id) = store.username_index.get(user_name) {
            return Ok(store.users.get(user_id).cloned());
        }

        Ok(None)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email() == email).cloned())
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut store = self.store.write().await;

        let user = if user.id().is_none() {
            user.with_id(Uuid::new_v4().to_string())
        } else {
            user
        };
        let id = user.id().unwrap_or_default().to_string();
        let user_name = user.user_name().to_string();

        // Unique index on username: a record owned by a different id wins
        if let Some(owner) = store.username_index.get(&user_name) {
            if owner != &id {
                return Err(DomainError::duplicate_user(format!(
                    "Username {} already exists.",
                    user_name
                )));
            }
        }

        // An overwrite may change the username; drop the stale index entry
        if let Some(previous) = store.users.get(&id) {
            if previous.user_name() != user_name {
                let previous_name = previous.user_name().to_string();
                store.username_index.remove(&previous_name);
            }
        }

        store.username_index.insert(user_name, id.clone());
        store.users.insert(id, user.clone());

        Ok(user)
    }

    async fn delete(&self, user: &User) -> Result<(), DomainError> {
        let mut store = self.store.write().await;

        if let Some(id) = user.id() {
            if let Some(removed) = store.users.remove(id) {
                store.username_index.remove(removed.user_name());
            }
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        let mut store = self.store.write().await;

        store.users.clear();
        store.username_index.clear();

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }
}
