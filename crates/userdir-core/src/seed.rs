//! Seed data for the directory.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use userdir_types::{DirectoryError, User};

/// The fixed record set served when no seed file is configured.
pub fn builtin_users() -> Vec<User> {
    vec![
        User::new(1, "Abdulla", "LA", 1234567890, 5.8, true),
        User::new(2, "Safwan", "NY", 1234567891, 5.9, false),
        User::new(3, "Ibtisaam", "SF", 1234567892, 5.7, true),
        User::new(4, "Adesh", "LA", 1234567893, 5.6, false),
    ]
}

/// Read a JSON array of users from disk.
///
/// Rejects files where two records share an id.
pub fn load_users(path: &Path) -> Result<Vec<User>, DirectoryError> {
    info!("Loading seed users from {:?}", path);
    let raw = fs::read_to_string(path)?;
    let users: Vec<User> = serde_json::from_str(&raw)?;
    ensure_unique_ids(&users)?;
    Ok(users)
}

fn ensure_unique_ids(users: &[User]) -> Result<(), DirectoryError> {
    let mut seen = HashSet::with_capacity(users.len());
    for user in users {
        if !seen.insert(user.id) {
            return Err(DirectoryError::DuplicateId(user.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_seed(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        assert!(ensure_unique_ids(&builtin_users()).is_ok());
        assert_eq!(builtin_users().len(), 4);
    }

    #[test]
    fn test_load_users_preserves_file_order() {
        let file = write_seed(
            r#"[
                {"id": 7, "name": "Zed", "city": "TX", "phone": 5550000, "height": 6.1, "married": false},
                {"id": 2, "name": "Amy", "city": "NY", "phone": 5550001, "height": 5.2, "married": true}
            ]"#,
        );
        let users = load_users(file.path()).unwrap();
        let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![7, 2]);
        assert_eq!(users[1].city, "NY");
    }

    #[test]
    fn test_load_users_rejects_duplicate_ids() {
        let file = write_seed(
            r#"[
                {"id": 1, "name": "A", "city": "LA", "phone": 1, "height": 5.0, "married": true},
                {"id": 1, "name": "B", "city": "NY", "phone": 2, "height": 5.1, "married": false}
            ]"#,
        );
        let result = load_users(file.path());
        assert!(matches!(result, Err(DirectoryError::DuplicateId(1))));
    }

    #[test]
    fn test_load_users_malformed_json() {
        let file = write_seed("{ not json");
        assert!(matches!(
            load_users(file.path()),
            Err(DirectoryError::Seed(_))
        ));
    }

    #[test]
    fn test_load_users_missing_file() {
        let result = load_users(Path::new("/no/such/seed.json"));
        assert!(matches!(result, Err(DirectoryError::Seed(_))));
    }
}
