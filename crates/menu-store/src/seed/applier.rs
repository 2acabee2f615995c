//! Seed application
//!
//! Applies the fixed seed rows inside one transaction. Inserts tolerate
//! rows that already exist, so a partially populated store is topped up
//! rather than duplicated; a store whose ledger already carries the seed
//! digest is left untouched.

use crate::errors::{from_rusqlite, Result};
use crate::seed::data::{seed_dishes, seed_ingredients, seed_links};
use crate::seed::digest::compute_seed_digest;
use rusqlite::{Connection, OptionalExtension};

/// Apply the fixed seed to the database
///
/// Returns the seed digest. Safe to call on every startup: the first call
/// inserts the rows and records the digest in seed_runs, later calls find
/// the digest and return early.
pub fn apply_seed(conn: &mut Connection) -> Result<String> {
    let dishes = seed_dishes();
    let ingredients = seed_ingredients();
    let links = seed_links();

    let digest = compute_seed_digest(&dishes, &ingredients, &links);

    let already_applied: bool = conn
        .query_row(
            "SELECT 1 FROM seed_runs WHERE digest = ?",
            [digest.as_str()],
            |_| Ok(true),
        )
        .optional()
        .map_err(from_rusqlite)?
        .unwrap_or(false);

    if already_applied {
        tracing::debug!(digest = %digest, "seed already applied, skipping");
        return Ok(digest);
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    for dish in &dishes {
        tx.execute(
            "INSERT INTO dishes (id, name, price, image_url) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO NOTHING",
            rusqlite::params![dish.id, dish.name, dish.price, dish.image_url],
        )
        .map_err(from_rusqlite)?;
    }

    for ingredient in &ingredients {
        tx.execute(
            "INSERT INTO ingredients (id, name) VALUES (?1, ?2)
             ON CONFLICT(id) DO NOTHING",
            rusqlite::params![ingredient.id, ingredient.name],
        )
        .map_err(from_rusqlite)?;
    }

    for link in &links {
        tx.execute(
            "INSERT INTO dish_ingredients (dish_id, ingredient_id) VALUES (?1, ?2)
             ON CONFLICT(dish_id, ingredient_id) DO NOTHING",
            rusqlite::params![link.dish_id, link.ingredient_id],
        )
        .map_err(from_rusqlite)?;
    }

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO seed_runs (digest, applied_at) VALUES (?, ?)",
        rusqlite::params![digest, now],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(digest = %digest, "seed applied");

    Ok(digest)
}
