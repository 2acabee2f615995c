//! Literal seed rows
//!
//! These rows are fixed content, not configuration; changing them changes
//! the seed digest and a fresh store would record a new seed run.

use menu_core::model::{Dish, DishIngredient, Ingredient};

const MARGHERITTA_IMAGE_URL: &str = "https://cdn.shopify.com/s/files/1/0205/9582/articles/20220211142347-margherita-9920_ba86be55-674e-4f35-8094-2067ab41a671.jpg?crop=center&height=915&v=1644590192&width=1200";

/// The dishes inserted at initialization
pub fn seed_dishes() -> Vec<Dish> {
    vec![Dish::new(
        1,
        "Margheritta".to_string(),
        7.50,
        MARGHERITTA_IMAGE_URL.to_string(),
    )]
}

/// The ingredients inserted at initialization
pub fn seed_ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient::new(1, "Tomato Sauce".to_string()),
        Ingredient::new(2, "Mozzarella".to_string()),
    ]
}

/// The dish/ingredient associations inserted at initialization
pub fn seed_links() -> Vec<DishIngredient> {
    vec![DishIngredient::new(1, 1), DishIngredient::new(1, 2)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_reference_seeded_rows() {
        let dish_ids: Vec<i64> = seed_dishes().iter().map(|d| d.id).collect();
        let ingredient_ids: Vec<i64> = seed_ingredients().iter().map(|i| i.id).collect();

        for link in seed_links() {
            assert!(dish_ids.contains(&link.dish_id));
            assert!(ingredient_ids.contains(&link.ingredient_id));
        }
    }

    #[test]
    fn test_no_duplicate_links() {
        let links = seed_links();
        let mut keys: Vec<(i64, i64)> = links.iter().map(|l| l.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), links.len());
    }
}
