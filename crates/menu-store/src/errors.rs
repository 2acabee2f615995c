//! Error handling for menu-store
//!
//! Maps rusqlite failures onto the menu-core taxonomy, with store-specific
//! helper constructors

use menu_core::errors::MenuError;
use rusqlite::ffi;

/// Result type alias using MenuError
pub use menu_core::errors::Result;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> MenuError {
    MenuError::MigrationFailed {
        migration_id: migration_id.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> MenuError {
    MenuError::ChecksumMismatch {
        migration_id: migration_id.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

/// Create a database error from rusqlite::Error
///
/// Uniqueness and referential failures are part of the observable contract
/// of this store, so the SQLite extended result code decides the variant.
pub fn from_rusqlite(err: rusqlite::Error) -> MenuError {
    if let rusqlite::Error::SqliteFailure(ref code, ref message) = err {
        let detail = message.clone().unwrap_or_else(|| code.to_string());
        match code.extended_code {
            ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                return MenuError::ConstraintViolation { detail };
            }
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                return MenuError::ForeignKeyViolation { detail };
            }
            _ => {}
        }
    }

    MenuError::Persistence {
        detail: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_error_carries_context() {
        let err = migration_error("001_initial_schema", "bad SQL");
        assert_eq!(err.code(), "ERR_MIGRATION_FAILED");
        assert!(err.to_string().contains("001_initial_schema"));
    }

    #[test]
    fn test_non_constraint_error_maps_to_persistence() {
        let err = from_rusqlite(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.code(), "ERR_PERSISTENCE");
    }
}
