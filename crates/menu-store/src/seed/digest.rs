//! Seed digest canonicalization
//!
//! Computes a stable SHA256 digest of the seed content for the seed_runs
//! ledger

use menu_core::model::{Dish, DishIngredient, Ingredient};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Canonical representation of the seed for digest calculation
#[derive(Debug, Clone, Serialize)]
struct CanonicalSeed {
    dishes: Vec<CanonicalDish>,
    ingredients: Vec<CanonicalIngredient>,
    links: Vec<CanonicalLink>,
}

#[derive(Debug, Clone, Serialize)]
struct CanonicalDish {
    id: i64,
    name: String,
    price: f64,
    image_url: String,
}

#[derive(Debug, Clone, Serialize)]
struct CanonicalIngredient {
    id: i64,
    name: String,
}

#[derive(Debug, Clone, Serialize)]
struct CanonicalLink {
    dish_id: i64,
    ingredient_id: i64,
}

/// Compute a stable digest for the seed content
///
/// Returns a SHA256 hex digest of the canonicalized (id-sorted) seed
pub fn compute_seed_digest(
    dishes: &[Dish],
    ingredients: &[Ingredient],
    links: &[DishIngredient],
) -> String {
    let canonical = canonicalize(dishes, ingredients, links);

    let json =
        serde_json::to_string(&canonical).expect("canonical seed serialization is infallible");

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    hex::encode(result)
}

/// Canonicalize the seed for deterministic digest calculation
fn canonicalize(
    dishes: &[Dish],
    ingredients: &[Ingredient],
    links: &[DishIngredient],
) -> CanonicalSeed {
    let mut dishes: Vec<CanonicalDish> = dishes
        .iter()
        .map(|d| CanonicalDish {
            id: d.id,
            name: d.name.clone(),
            price: d.price,
            image_url: d.image_url.clone(),
        })
        .collect();
    dishes.sort_by_key(|d| d.id);

    let mut ingredients: Vec<CanonicalIngredient> = ingredients
        .iter()
        .map(|i| CanonicalIngredient {
            id: i.id,
            name: i.name.clone(),
        })
        .collect();
    ingredients.sort_by_key(|i| i.id);

    let mut links: Vec<CanonicalLink> = links
        .iter()
        .map(|l| CanonicalLink {
            dish_id: l.dish_id,
            ingredient_id: l.ingredient_id,
        })
        .collect();
    links.sort_by_key(|l| (l.dish_id, l.ingredient_id));

    CanonicalSeed {
        dishes,
        ingredients,
        links,
    }
}
