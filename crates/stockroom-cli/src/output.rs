//! Table and JSON rendering for listings.

use chrono::{DateTime, Utc};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

use stockroom_core::store::{Category, MovementRecord, ProductWithCategory, User};

fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(header.to_vec());
    table
}

pub fn print_categories(categories: &[Category], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(categories)?);
        return Ok(());
    }
    if categories.is_empty() {
        println!("No categories recorded");
        return Ok(());
    }
    let mut table = new_table(&["ID", "Name"]);
    for category in categories {
        table.add_row(vec![category.id.to_string(), category.name.clone()]);
    }
    println!("{table}");
    Ok(())
}

pub fn print_products(products: &[ProductWithCategory], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(products)?);
        return Ok(());
    }
    if products.is_empty() {
        println!("No products recorded");
        return Ok(());
    }
    let mut table = new_table(&["ID", "Product", "Quantity", "Category"]);
    for product in products {
        table.add_row(vec![
            product.id.to_string(),
            product.name.clone(),
            product.quantity.to_string(),
            product.category.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn print_history(records: &[MovementRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }
    if records.is_empty() {
        println!("History is empty");
        return Ok(());
    }
    let mut table = new_table(&["Product", "Quantity", "Type", "Date"]);
    for record in records {
        table.add_row(vec![
            record.product.clone(),
            record.quantity.to_string(),
            record.kind.to_string(),
            format_timestamp(&record.recorded_at),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn print_users(users: &[User], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(users)?);
        return Ok(());
    }
    if users.is_empty() {
        println!("No users registered");
        return Ok(());
    }
    let mut table = new_table(&["ID", "Username", "Email", "Role", "Created"]);
    for user in users {
        table.add_row(vec![
            user.id.to_string(),
            user.username.clone(),
            user.email.clone(),
            user.role.to_string(),
            format_timestamp(&user.created_at),
        ]);
    }
    println!("{table}");
    Ok(())
}
