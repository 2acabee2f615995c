use serde::{Deserialize, Serialize};

/// Ingredient - a named component used by zero or more dishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier (store-assigned for new rows)
    pub id: i64,

    /// Display name
    pub name: String,
}

impl Ingredient {
    /// Create a new Ingredient with the given identity and name
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}
