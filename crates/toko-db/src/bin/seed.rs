//! # Seed Data Generator
//!
//! Populates the database with catalog products for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database (DATABASE_PATH or ./toko.db)
//! cargo run -p toko-db --bin seed
//!
//! # Specify database path
//! cargo run -p toko-db --bin seed -- --db ./data/toko.db
//! ```
//!
//! Each product gets a name from the catalog below, a price derived from its
//! position, and a stock level between 0 and 60.

use tracing_subscriber::EnvFilter;

use toko_core::NewProduct;
use toko_db::{Database, DbConfig};

/// Development catalog: (name, base price in cents).
const CATALOG: &[(&str, i64)] = &[
    ("Mineral Water 600ml", 400),
    ("Mineral Water 1.5L", 700),
    ("Instant Noodles Chicken", 350),
    ("Instant Noodles Beef", 350),
    ("Rice 5kg", 6500),
    ("Cooking Oil 1L", 1800),
    ("Sugar 1kg", 1400),
    ("Salt 500g", 300),
    ("Egg Tray", 2800),
    ("Wheat Flour 1kg", 1200),
    ("Coffee Sachet", 150),
    ("Tea Bags 25pcs", 700),
    ("Condensed Milk Can", 1100),
    ("Soy Sauce 135ml", 900),
    ("Chili Sauce 135ml", 950),
    ("Soap Bar", 450),
    ("Shampoo Sachet", 100),
    ("Toothpaste 75g", 850),
    ("Detergent 800g", 1900),
    ("Dish Soap 250ml", 650),
    ("Biscuits Pack", 550),
    ("Chocolate Wafer", 250),
    ("Potato Chips", 1050),
    ("Canned Sardines", 1250),
    ("Sweet Bread Loaf", 1500),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Honor a local .env, then stock RUST_LOG filtering
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut db_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Toko Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: DATABASE_PATH or ./toko.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = match db_path {
        Some(path) => DbConfig::new(path),
        None => DbConfig::from_env(),
    };

    println!("Toko Seed Data Generator");
    println!("========================");
    println!("Database: {}", config.database_path.display());
    println!();

    let db = Database::new(config).await?;

    println!("✓ Connected, migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!("Seeding products...");

    let mut seeded = 0;
    for (idx, (name, price_cents)) in CATALOG.iter().enumerate() {
        let product = NewProduct {
            name: name.to_string(),
            price_cents: *price_cents,
            stock: ((idx * 7) % 61) as i64,
        };

        if let Err(e) = db.products().insert(&product).await {
            eprintln!("Failed to insert {}: {}", product.name, e);
            continue;
        }

        seeded += 1;
    }

    println!();
    println!("✓ Seeded {} products", seeded);

    Ok(())
}
