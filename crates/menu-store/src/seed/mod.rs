//! Fixed seed data for the menu store
//!
//! The store is non-empty on first use: one dish, two ingredients, and the
//! association rows linking them. Application is idempotent; a digest of the
//! seed content is recorded in the seed_runs ledger and re-runs that find it
//! there skip insertion.

mod applier;
mod data;
mod digest;

pub use applier::apply_seed;
pub use data::{seed_dishes, seed_ingredients, seed_links};
pub use digest::compute_seed_digest;
