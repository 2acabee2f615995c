use serde::{Deserialize, Serialize};

/// Dish - a sellable menu item
///
/// A dish carries a price and an image reference, and is linked to the
/// ingredients it uses through DishIngredient association rows. Associations
/// are reached by query; a dish never holds live references to its
/// ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Unique identifier (store-assigned for new rows)
    pub id: i64,

    /// Display name
    pub name: String,

    /// Price in the menu's currency
    pub price: f64,

    /// URL of an external image resource
    pub image_url: String,
}

impl Dish {
    /// Create a new Dish with the given identity and content
    pub fn new(id: i64, name: String, price: f64, image_url: String) -> Self {
        Self {
            id,
            name,
            price,
            image_url,
        }
    }

    /// Check if this dish has an image reference
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}
