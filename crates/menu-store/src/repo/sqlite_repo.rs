//! SQLite repository implementation
//!
//! Write path for the menu tables. Inserts are strict: a duplicate key
//! surfaces as ConstraintViolation and a dangling reference as
//! ForeignKeyViolation, exactly as the underlying store reports them.

use crate::errors::{from_rusqlite, Result};
use menu_core::model::{Dish, DishIngredient, Ingredient};
use rusqlite::Connection;

/// SQLite repository for dishes, ingredients, and their associations
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a dish with an explicit identity
    pub fn insert_dish(conn: &Connection, dish: &Dish) -> Result<()> {
        conn.execute(
            "INSERT INTO dishes (id, name, price, image_url) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![dish.id, dish.name, dish.price, dish.image_url],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Insert a dish with a store-assigned identity
    ///
    /// Returns the assigned id
    pub fn create_dish(conn: &Connection, name: &str, price: f64, image_url: &str) -> Result<i64> {
        conn.execute(
            "INSERT INTO dishes (name, price, image_url) VALUES (?1, ?2, ?3)",
            rusqlite::params![name, price, image_url],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Insert an ingredient with an explicit identity
    pub fn insert_ingredient(conn: &Connection, ingredient: &Ingredient) -> Result<()> {
        conn.execute(
            "INSERT INTO ingredients (id, name) VALUES (?1, ?2)",
            rusqlite::params![ingredient.id, ingredient.name],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Insert an ingredient with a store-assigned identity
    ///
    /// Returns the assigned id
    pub fn create_ingredient(conn: &Connection, name: &str) -> Result<i64> {
        conn.execute(
            "INSERT INTO ingredients (name) VALUES (?1)",
            rusqlite::params![name],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Insert an association row
    ///
    /// Fails with ConstraintViolation when the (dish_id, ingredient_id)
    /// pair already exists, and with ForeignKeyViolation when either side
    /// references a missing row.
    pub fn insert_dish_ingredient(conn: &Connection, link: &DishIngredient) -> Result<()> {
        conn.execute(
            "INSERT INTO dish_ingredients (dish_id, ingredient_id) VALUES (?1, ?2)",
            rusqlite::params![link.dish_id, link.ingredient_id],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Delete a dish; its association rows go with it (cascade)
    ///
    /// Returns true when a row was deleted
    pub fn delete_dish(conn: &Connection, dish_id: i64) -> Result<bool> {
        let deleted = conn
            .execute("DELETE FROM dishes WHERE id = ?", [dish_id])
            .map_err(from_rusqlite)?;

        Ok(deleted > 0)
    }

    /// Delete an ingredient; its association rows go with it (cascade)
    ///
    /// Returns true when a row was deleted
    pub fn delete_ingredient(conn: &Connection, ingredient_id: i64) -> Result<bool> {
        let deleted = conn
            .execute("DELETE FROM ingredients WHERE id = ?", [ingredient_id])
            .map_err(from_rusqlite)?;

        Ok(deleted > 0)
    }
}
