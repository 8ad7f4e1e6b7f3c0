//! Comptoir CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run clients database migrations
//! comptoir-cli migrate clients
//!
//! # Ensure the unique product name index
//! comptoir-cli indexes products
//!
//! # Seed the clients table with sample rows
//! comptoir-cli seed clients --count 20
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `indexes` - Ensure datastore indexes
//! - `seed` - Seed a database with sample data

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "comptoir-cli")]
#[command(author, version, about = "Comptoir CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        target: MigrateTarget,
    },
    /// Ensure datastore indexes
    Indexes {
        #[command(subcommand)]
        target: IndexTarget,
    },
    /// Seed a database with sample data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
}

#[derive(Subcommand)]
enum MigrateTarget {
    /// Run clients database migrations
    Clients,
}

#[derive(Subcommand)]
enum IndexTarget {
    /// Ensure the unique index on product names
    Products,
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Insert sample client rows
    Clients {
        /// Number of rows to insert
        #[arg(short, long, default_value_t = 10)]
        count: usize,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate { target } => match target {
            MigrateTarget::Clients => commands::migrate::clients().await?,
        },
        Commands::Indexes { target } => match target {
            IndexTarget::Products => commands::indexes::products().await?,
        },
        Commands::Seed { target } => match target {
            SeedTarget::Clients { count } => commands::seed::clients(count).await?,
        },
    }
    Ok(())
}
