//! Database initialization command
//!
//! Usage: menu init [--db PATH]

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Path to the SQLite database file
    #[arg(long, default_value = ".menu/menu.db")]
    pub db: PathBuf,
}

/// Execute database initialization: apply migrations, then the seed
pub fn execute(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = args.db.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut conn = menu_store::db::open(&args.db)?;
    menu_store::migrations::apply_migrations(&mut conn)?;
    let digest = menu_store::seed::apply_seed(&mut conn)?;

    println!(
        "✓ Database ready at {} (seed digest: {})",
        args.db.display(),
        digest
    );

    Ok(())
}
