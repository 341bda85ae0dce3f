use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("The field {field} is mandatory and cannot be null or empty")]
    MissingField { field: String },

    #[error("{message}")]
    DuplicateUser { message: String },

    #[error("{message}")]
    UserNotFound { message: String },

    #[error("Email {email} is not a valid email address")]
    InvalidEmail { email: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn duplicate_user(message: impl Into<String>) -> Self {
        Self::DuplicateUser {
            message: message.into(),
        }
    }

    pub fn user_not_found(message: impl Into<String>) -> Self {
        Self::UserNotFound {
            message: message.into(),
        }
    }

    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmail {
            email: email.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
