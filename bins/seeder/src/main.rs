//! Database seeder for Spendbook development and testing.
//!
//! Inserts a month of sample expenses through the same validation path the
//! API uses. Skips seeding when the table already holds records.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use anyhow::Context;
use serde_json::{Map, json};
use spendbook_core::expense::{ExpenseFilter, ExpenseService};
use spendbook_db::{ExpenseRepository, connect};
use spendbook_shared::AppConfig;

/// Sample expenses as `(title, amount, category, date)`.
const SAMPLES: [(&str, &str, Option<&str>, &str); 10] = [
    ("Groceries", "42.50", Some("Food"), "2025-08-01"),
    ("Monthly rent", "1200.00", Some("Housing"), "2025-08-01"),
    ("Bus pass", "65.00", Some("Transport"), "2025-08-02"),
    ("Coffee beans", "18.90", Some("Food"), "2025-08-03"),
    ("Gas", "30", None, "2025-08-05"),
    ("Electricity bill", "88.15", Some("Utilities"), "2025-08-07"),
    ("Cinema tickets", "24.00", Some("Entertainment"), "2025-08-09"),
    ("Pharmacy", "12.35", Some("Health"), "2025-08-12"),
    ("Dinner out", "56.80", Some("Food"), "2025-08-15"),
    ("Phone plan", "35.00", Some("Utilities"), "2025-08-20"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    println!("Connecting to database...");
    let db = connect(&config.database)
        .await
        .context("failed to connect to database")?;

    let service = ExpenseService::new(Arc::new(ExpenseRepository::new(db)));

    let existing = service.list(&ExpenseFilter::new()).await?;
    if !existing.is_empty() {
        println!("  {} expenses already present, skipping...", existing.len());
        return Ok(());
    }

    println!("Seeding sample expenses...");
    let mut inserted = 0;
    for (title, amount, category, date) in SAMPLES {
        let mut payload = Map::new();
        payload.insert("title".to_string(), json!(title));
        payload.insert("amount".to_string(), json!(amount));
        payload.insert("date".to_string(), json!(date));
        if let Some(category) = category {
            payload.insert("category".to_string(), json!(category));
        }

        match service.create(&payload).await {
            Ok(expense) => {
                inserted += 1;
                println!("  Created {} ({})", expense.title, expense.category);
            }
            Err(e) => eprintln!("Failed to insert expense {title}: {e}"),
        }
    }

    println!("Seeding complete! Inserted {inserted} expenses");
    Ok(())
}
