//! The [`MealDb`] client and its one-method-per-endpoint API surface.

use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::builder::MealDbBuilder;
use crate::error::MealDbError;
use crate::model::{self, Record};

/// Public test-key endpoint. Premium keys live under a different path
/// segment; the builder can swap the whole prefix.
pub(crate) const DEFAULT_BASE_URL: &str = "https://themealdb.com/api/json/v1/1";

/// Async client for TheMealDB JSON API.
///
/// The client owns a pooled [`reqwest::Client`] and a base URL, nothing
/// else; it is cheap to clone and safe to share between tasks. Every method
/// issues exactly one GET against one endpoint and resolves to the records
/// behind the response's `meals`/`categories` field, or to a
/// [`MealDbError`] when the transport fails, the body is not the expected
/// JSON, or the service reports no results.
#[derive(Debug, Clone)]
pub struct MealDb {
    http: Client,
    base_url: String,
}

impl MealDb {
    /// Creates a client against the public API endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom endpoint prefix, e.g. a premium
    /// key path or a local mock server. A trailing slash is tolerated.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::from_parts(Client::new(), base_url.into())
    }

    /// Starts configuring a client with a timeout, user agent or custom
    /// endpoint. See [`MealDbBuilder`].
    pub fn builder() -> MealDbBuilder {
        MealDbBuilder::default()
    }

    pub(crate) fn from_parts(http: Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Runs the round trip every operation shares: GET the endpoint, read
    /// the body as text, parse it as JSON and pull out `field`.
    ///
    /// An empty body, a missing field, a JSON `null` or an empty string all
    /// mean the same thing coming from this service: nothing matched. An
    /// empty array does not; that is a real result and is handed through.
    /// The HTTP status is not consulted; error pages surface as parse
    /// failures.
    async fn fetch_field(&self, endpoint: &str, field: &str) -> Result<Value, MealDbError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {url}");

        let body = self.http.get(&url).send().await?.text().await?;
        if body.is_empty() {
            return Err(MealDbError::NoResults);
        }

        let mut payload: Value = serde_json::from_str(&body)?;
        match payload.get_mut(field) {
            Some(value) if !model::is_empty_sentinel(value) => Ok(value.take()),
            _ => Err(MealDbError::NoResults),
        }
    }

    /// Searches meals by name.
    pub async fn search(&self, name: &str) -> Result<Vec<Record>, MealDbError> {
        let endpoint = format!("search.php?s={}", urlencoding::encode(name));
        let value = self.fetch_field(&endpoint, "meals").await?;
        model::extract_records(value)
    }

    /// Searches meals by their first letter.
    ///
    /// Unlike the other text parameters, the letter is inserted into the
    /// query string verbatim, without percent-encoding.
    pub async fn search_by_letter(&self, letter: &str) -> Result<Vec<Record>, MealDbError> {
        let endpoint = format!("search.php?f={letter}");
        let value = self.fetch_field(&endpoint, "meals").await?;
        model::extract_records(value)
    }

    /// Looks up the full details of one meal by id.
    pub async fn search_by_id(&self, id: u32) -> Result<Record, MealDbError> {
        let endpoint = format!("lookup.php?i={id}");
        let value = self.fetch_field(&endpoint, "meals").await?;
        model::extract_first(value)
    }

    /// Fetches a single random meal.
    pub async fn random(&self) -> Result<Record, MealDbError> {
        let value = self.fetch_field("random.php", "meals").await?;
        model::extract_first(value)
    }

    /// Lists all meal categories with their descriptions and thumbnails.
    pub async fn meal_categories(&self) -> Result<Vec<Record>, MealDbError> {
        let value = self.fetch_field("categories.php", "categories").await?;
        model::extract_records(value)
    }

    /// Filters meals by main ingredient.
    pub async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<Record>, MealDbError> {
        let endpoint = format!("filter.php?i={}", urlencoding::encode(ingredient));
        let value = self.fetch_field(&endpoint, "meals").await?;
        model::extract_records(value)
    }

    /// Filters meals by area.
    pub async fn filter_by_area(&self, area: &str) -> Result<Vec<Record>, MealDbError> {
        let endpoint = format!("filter.php?a={}", urlencoding::encode(area));
        let value = self.fetch_field(&endpoint, "meals").await?;
        model::extract_records(value)
    }

    /// Filters meals by category.
    pub async fn filter_by_category(&self, category: &str) -> Result<Vec<Record>, MealDbError> {
        let endpoint = format!("filter.php?c={}", urlencoding::encode(category));
        let value = self.fetch_field(&endpoint, "meals").await?;
        model::extract_records(value)
    }

    /// Lists the category names accepted by [`filter_by_category`].
    ///
    /// [`filter_by_category`]: MealDb::filter_by_category
    pub async fn categories_filter(&self) -> Result<Vec<String>, MealDbError> {
        let value = self.fetch_field("list.php?c=list", "meals").await?;
        model::extract_category_names(value)
    }

    /// Lists every known ingredient record, unmodified.
    pub async fn ingredients_filter(&self) -> Result<Vec<Record>, MealDbError> {
        let value = self.fetch_field("list.php?i=list", "meals").await?;
        model::extract_records(value)
    }

    /// Lists the area names accepted by [`filter_by_area`].
    ///
    /// [`filter_by_area`]: MealDb::filter_by_area
    pub async fn area_filter(&self) -> Result<Vec<String>, MealDbError> {
        let value = self.fetch_field("list.php?a=list", "meals").await?;
        model::extract_area_names(value)
    }
}

impl Default for MealDb {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_search_extracts_meals_field() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::UrlEncoded("s".into(), "Arrabiata".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"meals":[{"idMeal":"52771","strMeal":"Spicy Arrabiata Penne"}]}"#,
            )
            .create();

        let client = MealDb::with_base_url(server.url());
        let meals = client.search("Arrabiata").await.unwrap();

        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].str_field("strMeal"), Some("Spicy Arrabiata Penne"));
        mock.assert();
    }

    #[tokio::test]
    async fn test_null_meals_field_is_no_results() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals":null}"#)
            .create();

        let client = MealDb::with_base_url(server.url());
        let result = client.search("zzzzz").await;

        assert!(matches!(result, Err(MealDbError::NoResults)));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url_is_tolerated() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/random.php")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals":[{"idMeal":"52772"}]}"#)
            .create();

        let client = MealDb::with_base_url(format!("{}/", server.url()));
        let meal = client.random().await.unwrap();

        assert_eq!(meal.str_field("idMeal"), Some("52772"));
        mock.assert();
    }
}
