//! Dish listing command
//!
//! Usage: menu list [--db PATH]

use clap::Args;
use menu_store::repo::hydration;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Path to the SQLite database file
    #[arg(long, default_value = ".menu/menu.db")]
    pub db: PathBuf,
}

/// Execute dish listing
pub fn execute(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = menu_store::db::open(&args.db)?;

    let dishes = hydration::list_dishes(&conn)?;
    if dishes.is_empty() {
        println!("No dishes. Run `menu init` first.");
        return Ok(());
    }

    for dish in dishes {
        println!("{:>4}  {:<24} {:>6.2}", dish.id, dish.name, dish.price);
    }

    Ok(())
}
