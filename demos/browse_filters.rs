//! Browsing the database through a configured client
//!
//! This example builds a client with a timeout, walks the filter
//! vocabulary (categories and areas), then drills into one category.
//!
//! Run with: cargo run --example browse_filters

use std::time::Duration;

use mealdb::MealDb;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let client = MealDb::builder()
        .timeout(Duration::from_secs(15))
        .user_agent("mealdb-browse-example")
        .build()?;

    println!("=== Categories ===");
    let categories = client.categories_filter().await?;
    println!("{}", categories.join(", "));

    println!("\n=== Areas ===");
    let areas = client.area_filter().await?;
    println!("{}", areas.join(", "));

    // Drill into the first category
    if let Some(category) = categories.first() {
        println!("\n=== Meals in {category} ===");
        let meals = client.filter_by_category(category).await?;
        for meal in meals.iter().take(5) {
            println!("- {}", meal.str_field("strMeal").unwrap_or("?"));
        }
        if meals.len() > 5 {
            println!("... and {} more", meals.len() - 5);
        }
    }

    // Full category records carry a description too
    println!("\n=== Category details ===");
    let details = client.meal_categories().await?;
    if let Some(first) = details.first() {
        for (field, value) in first.fields() {
            println!("{field}: {value}");
        }
    }

    Ok(())
}
