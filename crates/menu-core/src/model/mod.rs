pub mod dish;
pub mod dish_ingredient;
pub mod ingredient;

pub use dish::Dish;
pub use dish_ingredient::DishIngredient;
pub use ingredient::Ingredient;
