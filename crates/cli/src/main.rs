//! Teahouse CLI - Inspect and edit the persisted cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart stored in the default profile
//! th-cli cart show
//!
//! # Add one unit of an item
//! th-cli cart add masala-chai "Masala Chai" 50
//!
//! # Remove a line entirely
//! th-cli cart remove masala-chai
//!
//! # Run the demo checkout
//! th-cli cart checkout
//!
//! # List the menu catalog
//! th-cli menu
//! ```
//!
//! # Commands
//!
//! - `cart` - Operate on the cart in a profile file
//! - `menu` - Print the menu catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use teahouse_storefront::config::{DEFAULT_MENU_PATH, DEFAULT_PROFILE_PATH};
use teahouse_storefront::storage::CART_KEY;

mod commands;

#[derive(Parser)]
#[command(name = "th-cli")]
#[command(author, version, about = "Teahouse CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Operate on the persisted cart
    Cart {
        /// Profile file holding the cart
        #[arg(short, long, env = "TEAHOUSE_PROFILE_PATH", default_value = DEFAULT_PROFILE_PATH)]
        profile: PathBuf,

        /// Key the cart is stored under
        #[arg(short, long, env = "TEAHOUSE_CART_KEY", default_value = CART_KEY)]
        key: String,

        #[command(subcommand)]
        action: CartAction,
    },
    /// Print the menu catalog
    Menu {
        /// Menu catalog file
        #[arg(short, long, env = "TEAHOUSE_MENU_PATH", default_value = DEFAULT_MENU_PATH)]
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show every line and the total
    Show,
    /// Add one unit of an item
    Add {
        /// Item id
        id: String,
        /// Display name
        name: String,
        /// Unit price
        price: String,
    },
    /// Remove a line entirely
    Remove {
        /// Item id
        id: String,
    },
    /// Empty the cart (demo checkout)
    Checkout,
}

fn main() {
    // Load .env before clap reads env fallbacks
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt().without_time().with_target(false).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Cart {
            profile,
            key,
            action,
        } => {
            let mut cart = commands::cart::open(&profile, &key);
            match action {
                CartAction::Show => commands::cart::show(&mut cart),
                CartAction::Add { id, name, price } => {
                    commands::cart::add(&mut cart, &id, name, &price)?;
                }
                CartAction::Remove { id } => commands::cart::remove(&mut cart, &id),
                CartAction::Checkout => commands::cart::checkout(&mut cart),
            }
        }
        Commands::Menu { path } => commands::menu::list(&path)?,
    }
    Ok(())
}
