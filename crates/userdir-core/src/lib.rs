//! Query engine for the user directory.
//!
//! Provides the in-memory record store with:
//! - Lookup by single id (copy-out, NotFound on miss)
//! - Lookup by id list in request order
//! - Multi-field search in insertion order
//! - Built-in and file-backed seed data

pub mod directory;
pub mod seed;

pub use directory::UserDirectory;
pub use seed::builtin_users;
