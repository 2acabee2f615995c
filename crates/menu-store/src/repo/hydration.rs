//! Hydration layer - loads domain models out of SQLite
//!
//! Converts database rows back into Dish/Ingredient/DishIngredient structs
//! with deterministic ordering

use crate::errors::{from_rusqlite, Result};
use menu_core::model::{Dish, DishIngredient, Ingredient};
use rusqlite::{Connection, OptionalExtension};

/// Load a single dish by id
pub fn get_dish(conn: &Connection, dish_id: i64) -> Result<Option<Dish>> {
    conn.query_row(
        "SELECT id, name, price, image_url FROM dishes WHERE id = ?",
        [dish_id],
        |row| {
            Ok(Dish {
                id: row.get(0)?,
                name: row.get(1)?,
                price: row.get(2)?,
                image_url: row.get(3)?,
            })
        },
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Load all dishes, ordered by id
pub fn list_dishes(conn: &Connection) -> Result<Vec<Dish>> {
    let mut stmt = conn
        .prepare("SELECT id, name, price, image_url FROM dishes ORDER BY id")
        .map_err(from_rusqlite)?;

    let dishes = stmt
        .query_map([], |row| {
            Ok(Dish {
                id: row.get(0)?,
                name: row.get(1)?,
                price: row.get(2)?,
                image_url: row.get(3)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(dishes)
}

/// Load a single ingredient by id
pub fn get_ingredient(conn: &Connection, ingredient_id: i64) -> Result<Option<Ingredient>> {
    conn.query_row(
        "SELECT id, name FROM ingredients WHERE id = ?",
        [ingredient_id],
        |row| {
            Ok(Ingredient {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Load all ingredients, ordered by id
pub fn list_ingredients(conn: &Connection) -> Result<Vec<Ingredient>> {
    let mut stmt = conn
        .prepare("SELECT id, name FROM ingredients ORDER BY id")
        .map_err(from_rusqlite)?;

    let ingredients = stmt
        .query_map([], |row| {
            Ok(Ingredient {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(ingredients)
}

/// Load all association rows, ordered by composite key
pub fn list_dish_ingredients(conn: &Connection) -> Result<Vec<DishIngredient>> {
    let mut stmt = conn
        .prepare("SELECT dish_id, ingredient_id FROM dish_ingredients ORDER BY dish_id, ingredient_id")
        .map_err(from_rusqlite)?;

    let links = stmt
        .query_map([], |row| {
            Ok(DishIngredient {
                dish_id: row.get(0)?,
                ingredient_id: row.get(1)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(links)
}

/// Load the ingredients a dish uses, ordered by ingredient id
pub fn ingredients_for_dish(conn: &Connection, dish_id: i64) -> Result<Vec<Ingredient>> {
    let mut stmt = conn
        .prepare(
            "SELECT i.id, i.name FROM ingredients i
             JOIN dish_ingredients di ON di.ingredient_id = i.id
             WHERE di.dish_id = ?
             ORDER BY i.id",
        )
        .map_err(from_rusqlite)?;

    let ingredients = stmt
        .query_map([dish_id], |row| {
            Ok(Ingredient {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(ingredients)
}

/// Load the dishes that use an ingredient, ordered by dish id
pub fn dishes_using_ingredient(conn: &Connection, ingredient_id: i64) -> Result<Vec<Dish>> {
    let mut stmt = conn
        .prepare(
            "SELECT d.id, d.name, d.price, d.image_url FROM dishes d
             JOIN dish_ingredients di ON di.dish_id = d.id
             WHERE di.ingredient_id = ?
             ORDER BY d.id",
        )
        .map_err(from_rusqlite)?;

    let dishes = stmt
        .query_map([ingredient_id], |row| {
            Ok(Dish {
                id: row.get(0)?,
                name: row.get(1)?,
                price: row.get(2)?,
                image_url: row.get(3)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(dishes)
}
