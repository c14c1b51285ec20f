//! In-memory user directory.
//!
//! The record sequence is fixed at construction. Queries scan it in
//! insertion order and return clones, so callers never hold a reference
//! into the stored records.

use std::path::Path;

use userdir_types::{DirectoryError, SearchCriteria, User};

use crate::seed::{builtin_users, load_users};

/// Read-only collection of user records.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Build a directory over the given records, keeping their order.
    ///
    /// Ids are assumed unique; use [`UserDirectory::from_json_file`] for
    /// untrusted input.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Directory over the built-in seed set.
    pub fn with_builtin_seed() -> Self {
        Self::new(builtin_users())
    }

    /// Directory over a JSON seed file.
    pub fn from_json_file(path: &Path) -> Result<Self, DirectoryError> {
        Ok(Self::new(load_users(path)?))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// Fetch the record with the given id.
    pub fn get_by_id(&self, id: i32) -> Result<User, DirectoryError> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(DirectoryError::NotFound(id))
    }

    /// Fetch records for each id, in the order the ids were given.
    ///
    /// Unknown ids are skipped. A repeated id yields a repeated record.
    pub fn get_by_ids(&self, ids: &[i32]) -> Vec<User> {
        ids.iter()
            .flat_map(|id| self.users.iter().filter(move |user| user.id == *id))
            .cloned()
            .collect()
    }

    /// All records satisfying the criteria, in insertion order.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<User> {
        self.users
            .iter()
            .filter(|user| criteria.matches(user))
            .cloned()
            .collect()
    }
}
