//! Error taxonomy for the menu data layer
//!
//! Every failure surfaced by the workspace maps onto one of these variants.
//! Each variant carries a stable error code for programmatic handling and
//! test assertions. Initialization failures are fail-fast: no retries, no
//! local recovery.

use thiserror::Error;

/// Result type alias using MenuError
pub type Result<T> = std::result::Result<T, MenuError>;

/// Canonical error taxonomy for menu operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MenuError {
    /// Dish not found in the store
    #[error("Dish not found: {dish_id}")]
    DishNotFound { dish_id: i64 },

    /// Ingredient not found in the store
    #[error("Ingredient not found: {ingredient_id}")]
    IngredientNotFound { ingredient_id: i64 },

    /// A primary-key or uniqueness constraint was violated
    #[error("Constraint violation: {detail}")]
    ConstraintViolation { detail: String },

    /// A row referenced a dish or ingredient that does not exist
    #[error("Foreign key violation: {detail}")]
    ForeignKeyViolation { detail: String },

    /// A schema migration failed to apply
    #[error("Migration {migration_id} failed: {reason}")]
    MigrationFailed { migration_id: String, reason: String },

    /// An already-applied migration's SQL no longer matches its recorded checksum
    #[error("Checksum mismatch for migration {migration_id}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        migration_id: String,
        expected: String,
        actual: String,
    },

    /// Any other failure reported by the underlying store
    #[error("Persistence error: {detail}")]
    Persistence { detail: String },
}

impl MenuError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            MenuError::DishNotFound { .. } => "ERR_DISH_NOT_FOUND",
            MenuError::IngredientNotFound { .. } => "ERR_INGREDIENT_NOT_FOUND",
            MenuError::ConstraintViolation { .. } => "ERR_CONSTRAINT_VIOLATION",
            MenuError::ForeignKeyViolation { .. } => "ERR_FOREIGN_KEY_VIOLATION",
            MenuError::MigrationFailed { .. } => "ERR_MIGRATION_FAILED",
            MenuError::ChecksumMismatch { .. } => "ERR_CHECKSUM_MISMATCH",
            MenuError::Persistence { .. } => "ERR_PERSISTENCE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_stable() {
        let err = MenuError::DishNotFound { dish_id: 42 };
        assert_eq!(err.code(), "ERR_DISH_NOT_FOUND");

        let err = MenuError::ConstraintViolation {
            detail: "dup".to_string(),
        };
        assert_eq!(err.code(), "ERR_CONSTRAINT_VIOLATION");
    }

    #[test]
    fn test_display_includes_context() {
        let err = MenuError::MigrationFailed {
            migration_id: "001_initial_schema".to_string(),
            reason: "syntax error".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("001_initial_schema"));
        assert!(rendered.contains("syntax error"));
    }
}
