//! # userdir-types
//!
//! Shared domain types for the User Directory service.
//!
//! This crate defines the data structures used throughout the system:
//! - User: Immutable directory record
//! - SearchCriteria: Optional multi-field filter with explicit presence
//! - Settings: Configuration types
//!
//! ## Usage
//!
//! ```rust
//! use userdir_types::{SearchCriteria, User};
//!
//! let user = User::new(1, "Abdulla", "LA", 1234567890, 5.8, true);
//! assert!(SearchCriteria::new().with_city("LA").matches(&user));
//! ```

pub mod config;
pub mod error;
pub mod user;

pub use config::Settings;
pub use error::DirectoryError;
pub use user::{SearchCriteria, User};
