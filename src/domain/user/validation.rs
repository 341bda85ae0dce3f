//! User validation
//!
//! Field completeness checks plus the uniqueness checks that run against the
//! repository before any write. The uniqueness checks are a fast-fail
//! convenience: they are not atomic with the subsequent save, so the store's
//! own unique index remains the authoritative guard against concurrent
//! registrations of the same username.

use once_cell::sync::Lazy;
use regex::Regex;

use super::entity::User;
use super::repository::UserRepository;
use crate::domain::DomainError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate that all mandatory user fields are present.
///
/// Checks run in order first name, username, email; the first blank field is
/// reported and the rest are not inspected. A present email must also be
/// syntactically valid.
pub fn validate_mandatory_fields(user: &User) -> Result<(), DomainError> {
    if is_blank(user.first_name()) {
        return Err(DomainError::missing_field("firstName"));
    }

    validate_user_name(user.user_name())?;

    if is_blank(user.email()) {
        return Err(DomainError::missing_field("email"));
    }

    validate_email(user.email())
}

/// Validate that a username is present
pub fn validate_user_name(user_name: &str) -> Result<(), DomainError> {
    if is_blank(user_name) {
        return Err(DomainError::missing_field("userName"));
    }

    Ok(())
}

/// Validate that a user identifier is present
pub fn validate_user_id(id: &str) -> Result<(), DomainError> {
    if is_blank(id) {
        return Err(DomainError::missing_field("id"));
    }

    Ok(())
}

/// Validate that an email address is syntactically well-formed
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(DomainError::invalid_email(email));
    }

    Ok(())
}

/// Check whether an existing record is the candidate itself.
///
/// A candidate without an identifier has no "self" to exclude, so it can
/// never match an existing record.
fn is_same_record(candidate: &User, existing: &User) -> bool {
    match (candidate.id(), existing.id()) {
        (Some(candidate_id), Some(existing_id)) => candidate_id == existing_id,
        _ => false,
    }
}

async fn validate_user_uniqueness<R: UserRepository + ?Sized>(
    user: &User,
    repository: &R,
) -> Result<(), DomainError> {
    // Lookup runs against the stored, lowercased form; the error names the
    // username as submitted.
    if let Some(existing) = repository
        .find_by_user_name(&user.user_name().to_lowercase())
        .await?
    {
        if !is_same_record(user, &existing) {
            return Err(DomainError::duplicate_user(format!(
                "Username {} already exists.",
                user.user_name()
            )));
        }
    }

    if let Some(existing) = repository.find_by_email(user.email()).await? {
        if !is_same_record(user, &existing) {
            return Err(DomainError::duplicate_user(format!(
                "Email {} already exists.",
                user.email()
            )));
        }
    }

    Ok(())
}

/// Validate that a new registration does not collide with an existing
/// username or email. The candidate carries no identifier yet, so any hit on
/// either lookup is a real conflict.
pub async fn validate_user_uniqueness_for_registration<R: UserRepository + ?Sized>(
    user: &User,
    repository: &R,
) -> Result<(), DomainError> {
    validate_user_uniqueness(user, repository).await
}

/// Validate that an update does not collide with another user's username or
/// email. A hit that is the record being updated itself is not a conflict.
pub async fn validate_user_uniqueness_on_update<R: UserRepository + ?Sized>(
    user: &User,
    repository: &R,
) -> Result<(), DomainError> {
    validate_user_uniqueness(user, repository).await
}
