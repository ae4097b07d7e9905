//! Builder for configuring a [`MealDb`] client.

use std::time::Duration;

use crate::client::{self, MealDb};
use crate::error::MealDbError;

/// Configures and constructs a [`MealDb`] client.
///
/// The plain constructors cover most uses; reach for the builder when you
/// need a request timeout, a custom user agent, or a different endpoint
/// prefix.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use mealdb::MealDb;
///
/// # fn main() -> Result<(), mealdb::MealDbError> {
/// let client = MealDb::builder()
///     .timeout(Duration::from_secs(10))
///     .user_agent("recipe-kiosk/1.2")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MealDbBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MealDbBuilder {
    /// Creates a builder with no options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the endpoint prefix, e.g. for a premium API key path.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets a total timeout per request. Without one, requests wait
    /// indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`MealDbError::FetchError`] if the underlying HTTP client
    /// cannot be initialized with the given options.
    pub fn build(self) -> Result<MealDb, MealDbError> {
        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| client::DEFAULT_BASE_URL.to_string());
        Ok(MealDb::from_parts(http.build()?, base_url))
    }
}
