//! Dish detail command
//!
//! Usage: menu show <DISH_ID> [--db PATH]

use clap::Args;
use menu_core::errors::MenuError;
use menu_store::repo::hydration;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Identifier of the dish to show
    pub dish_id: i64,

    /// Path to the SQLite database file
    #[arg(long, default_value = ".menu/menu.db")]
    pub db: PathBuf,
}

/// Execute dish detail lookup
pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = menu_store::db::open(&args.db)?;

    let dish = hydration::get_dish(&conn, args.dish_id)?.ok_or(MenuError::DishNotFound {
        dish_id: args.dish_id,
    })?;

    println!("{} ({:.2})", dish.name, dish.price);
    if dish.has_image() {
        println!("  image: {}", dish.image_url);
    }

    let ingredients = hydration::ingredients_for_dish(&conn, dish.id)?;
    if ingredients.is_empty() {
        println!("  no ingredients recorded");
    } else {
        println!("  ingredients:");
        for ingredient in ingredients {
            println!("    - {}", ingredient.name);
        }
    }

    Ok(())
}
