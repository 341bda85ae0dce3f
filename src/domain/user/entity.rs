//! User entity

use serde::{Deserialize, Serialize};

/// A user record as held in the document store.
///
/// The identifier is assigned by the store on first save and is immutable
/// afterwards; `None` means the record has not been persisted yet. The
/// username is stored lowercased so lookups and the uniqueness constraint
/// are case-insensitive; incoming values keep their submitted case until
/// the service normalizes them just before the write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier
    #[serde(skip_serializing_if = "Option::is_none", default)]
    id: Option<String>,
    /// Unique username, lowercased on write
    user_name: String,
    first_name: String,
    last_name: String,
    /// Unique email address
    email: String,
}

impl User {
    /// Create a new, not yet persisted user
    pub fn new(
        user_name: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user_name: user_name.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Attach a store-assigned identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Getters

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    // Mutators

    /// Lowercase the username for storage
    pub fn normalize_user_name(&mut self) {
        self.user_name = self.user_name.to_lowercase();
    }

    pub fn set_user_name(&mut self, user_name: impl Into<String>) {
        self.user_name = user_name.into();
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User::new("john_doe", "John", "Doe", "john.doe@example.com")
    }

    #[test]
    fn test_new_user_has_no_id() {
        let user = create_test_user();

        assert!(user.id().is_none());
        assert_eq!(user.user_name(), "john_doe");
        assert_eq!(user.first_name(), "John");
        assert_eq!(user.last_name(), "Doe");
        assert_eq!(user.email(), "john.doe@example.com");
    }

    #[test]
    fn test_with_id() {
        let user = create_test_user().with_id("user-1");
        assert_eq!(user.id(), Some("user-1"));
    }

    #[test]
    fn test_normalize_user_name() {
        let mut user = User::new("John_Doe", "John", "Doe", "john.doe@example.com");

        user.normalize_user_name();
        assert_eq!(user.user_name(), "john_doe");
    }

    #[test]
    fn test_normalize_user_name_is_idempotent() {
        let mut user = create_test_user();

        user.normalize_user_name();
        user.normalize_user_name();
        assert_eq!(user.user_name(), "john_doe");
    }

    #[test]
    fn test_serialization_uses_wire_names() {
        let user = create_test_user().with_id("user-1");

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], "user-1");
        assert_eq!(json["userName"], "john_doe");
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["email"], "john.doe@example.com");
    }

    #[test]
    fn test_serialization_omits_absent_id() {
        let user = create_test_user();

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_deserialization_without_id() {
        let json = r#"{
            "userName": "jane_doe",
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane.doe@example.com"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.id().is_none());
        assert_eq!(user.user_name(), "jane_doe");
    }
}
