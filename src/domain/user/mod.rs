//! User domain
//!
//! This module provides the user entity, the validation rules that gate every
//! write, and the repository trait the persistence layer implements.

mod entity;
mod repository;
mod validation;

pub use entity::User;
pub use repository::UserRepository;
pub use validation::{
    validate_email, validate_mandatory_fields, validate_user_id, validate_user_name,
    validate_user_uniqueness_for_registration, validate_user_uniqueness_on_update,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
