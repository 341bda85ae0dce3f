//! User infrastructure module
//!
//! Implementations backing the user domain: the in-memory repository that
//! stands in for the document store, and the service that orchestrates
//! validation and persistence.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::UserService;
