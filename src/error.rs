use thiserror::Error;

/// Errors that can occur while talking to TheMealDB API
#[derive(Error, Debug)]
pub enum MealDbError {
    /// Failed to reach the service or to read the response body
    #[error("Failed to fetch from the API: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Response body was not valid JSON, or not the shape the endpoint returns
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The service answered without any matching records
    #[error("no results found")]
    NoResults,
}
