//! Simple API usage with convenience functions
//!
//! This example shows the free functions for the most common lookups:
//! searching by name, looking up by id and fetching a random meal.
//!
//! Run with: cargo run --example search_meals

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Search by name
    println!("=== Search: Arrabiata ===");
    let meals = mealdb::search("Arrabiata").await?;
    for meal in &meals {
        println!(
            "{} ({})",
            meal.str_field("strMeal").unwrap_or("?"),
            meal.str_field("strArea").unwrap_or("unknown area")
        );
    }

    // Look up the full record for the first hit
    let first_id = meals
        .first()
        .and_then(|meal| meal.str_field("idMeal"))
        .and_then(|id| id.parse().ok());
    if let Some(id) = first_id {
        println!("\n=== Lookup: {id} ===");
        let meal = mealdb::search_by_id(id).await?;
        println!(
            "{} / {} / {}",
            meal.str_field("strMeal").unwrap_or("?"),
            meal.str_field("strCategory").unwrap_or("?"),
            meal.str_field("strArea").unwrap_or("?")
        );
    }

    // Random pick for tonight
    println!("\n=== Random ===");
    let meal = mealdb::random().await?;
    println!("How about: {}", meal.str_field("strMeal").unwrap_or("?"));
    if let Some(youtube) = meal.str_field("strYoutube") {
        println!("Video: {youtube}");
    }

    Ok(())
}
