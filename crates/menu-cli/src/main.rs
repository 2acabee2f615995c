//! Menu CLI
//!
//! Command-line front end for the menu data store

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "menu")]
#[command(about = "Menu - restaurant menu data store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Initialize the database (schema + seed data)
    Init(commands::init::InitArgs),
    /// List dishes
    List(commands::list::ListArgs),
    /// Show a dish with its ingredients
    Show(commands::show::ShowArgs),
}

fn main() {
    menu_core::logging::init(menu_core::logging::Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::List(args) => commands::list::execute(args),
        Commands::Show(args) => commands::show::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
