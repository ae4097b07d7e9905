//! Async client for [TheMealDB](https://www.themealdb.com/) recipe API.
//!
//! TheMealDB is a free, crowd-sourced recipe database. This crate wraps its
//! JSON API: searching meals by name, letter or id, drawing a random meal,
//! browsing categories, and filtering by ingredient, area or category.
//!
//! The service has no stable schema, so results come back as [`Record`]s,
//! ordered maps of the raw JSON fields (`strMeal`, `strMealThumb`, ...).
//! All operations resolve to [`MealDbError::NoResults`] when nothing
//! matched, so callers handle "not found" the same way for every endpoint.
//!
//! # Quick start
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), mealdb::MealDbError> {
//! let meals = mealdb::search("Arrabiata").await?;
//! for meal in &meals {
//!     println!("{}", meal.str_field("strMeal").unwrap_or("?"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The free functions build a fresh [`MealDb`] per call. For connection
//! reuse across calls, or to set a timeout or user agent, hold a client:
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), mealdb::MealDbError> {
//! use std::time::Duration;
//!
//! let client = mealdb::MealDb::builder()
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//!
//! let dinner = client.random().await?;
//! let sides = client.filter_by_category("Side").await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod error;
pub mod model;

pub use builder::MealDbBuilder;
pub use client::MealDb;
pub use error::MealDbError;
pub use model::Record;

/// Searches meals by name. See [`MealDb::search`].
pub async fn search(name: &str) -> Result<Vec<Record>, MealDbError> {
    MealDb::new().search(name).await
}

/// Searches meals by their first letter. See [`MealDb::search_by_letter`].
pub async fn search_by_letter(letter: &str) -> Result<Vec<Record>, MealDbError> {
    MealDb::new().search_by_letter(letter).await
}

/// Looks up one meal by id. See [`MealDb::search_by_id`].
pub async fn search_by_id(id: u32) -> Result<Record, MealDbError> {
    MealDb::new().search_by_id(id).await
}

/// Fetches a single random meal. See [`MealDb::random`].
pub async fn random() -> Result<Record, MealDbError> {
    MealDb::new().random().await
}

/// Lists all meal categories. See [`MealDb::meal_categories`].
pub async fn meal_categories() -> Result<Vec<Record>, MealDbError> {
    MealDb::new().meal_categories().await
}

/// Filters meals by main ingredient. See [`MealDb::filter_by_ingredient`].
pub async fn filter_by_ingredient(ingredient: &str) -> Result<Vec<Record>, MealDbError> {
    MealDb::new().filter_by_ingredient(ingredient).await
}

/// Filters meals by area. See [`MealDb::filter_by_area`].
pub async fn filter_by_area(area: &str) -> Result<Vec<Record>, MealDbError> {
    MealDb::new().filter_by_area(area).await
}

/// Filters meals by category. See [`MealDb::filter_by_category`].
pub async fn filter_by_category(category: &str) -> Result<Vec<Record>, MealDbError> {
    MealDb::new().filter_by_category(category).await
}

/// Lists the category names usable with [`filter_by_category`].
pub async fn categories_filter() -> Result<Vec<String>, MealDbError> {
    MealDb::new().categories_filter().await
}

/// Lists every known ingredient record. See [`MealDb::ingredients_filter`].
pub async fn ingredients_filter() -> Result<Vec<Record>, MealDbError> {
    MealDb::new().ingredients_filter().await
}

/// Lists the area names usable with [`filter_by_area`].
pub async fn area_filter() -> Result<Vec<String>, MealDbError> {
    MealDb::new().area_filter().await
}
