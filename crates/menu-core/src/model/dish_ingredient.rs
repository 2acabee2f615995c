use serde::{Deserialize, Serialize};

/// DishIngredient - association row linking one dish to one ingredient
///
/// Pure join entity: composite identity (dish_id, ingredient_id), no payload.
/// Both sides are plain identifier fields; the referenced rows are looked up
/// explicitly when needed. The association does not own either lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DishIngredient {
    /// Identifier of the dish side of the association
    pub dish_id: i64,

    /// Identifier of the ingredient side of the association
    pub ingredient_id: i64,
}

impl DishIngredient {
    /// Create a new association between a dish and an ingredient
    pub fn new(dish_id: i64, ingredient_id: i64) -> Self {
        Self {
            dish_id,
            ingredient_id,
        }
    }

    /// The composite key as a tuple, in (dish, ingredient) order
    pub fn key(&self) -> (i64, i64) {
        (self.dish_id, self.ingredient_id)
    }
}
