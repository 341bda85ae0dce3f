//! Infrastructure layer - Repository implementations and process wiring

pub mod logging;
pub mod user;

pub use user::{InMemoryUserRepository, UserService};
