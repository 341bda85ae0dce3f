//! Chatterbox User Service
//!
//! Core of a user-record management service: registration, updates,
//! lookups and deletion, with username/email uniqueness enforced before
//! every write. The HTTP surface and the real document-store driver live
//! outside this crate; persistence is an injected [`UserRepository`]
//! implementation, so the embedding transport layer plugs in its own store
//! and tests run against the in-memory one.
//!
//! Usernames are stored lowercased, which makes lookups and the uniqueness
//! constraint case-insensitive. All three failure kinds surface as
//! [`DomainError`] variants and propagate unmodified to the caller; the one
//! deliberate exception is [`UserService::delete_user`], which treats a
//! missing record as success.

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{DomainError, User, UserRepository};
pub use infrastructure::{InMemoryUserRepository, UserService};
