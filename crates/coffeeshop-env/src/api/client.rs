//! HTTP client for the drinks API
//!
//! ```rust,no_run
//! use coffeeshop_env::api::ClientBuilder;
//!
//! # async fn example() -> coffeeshop_env::error::Result<()> {
//! // Base URL taken from the compiled-in environment
//! let client = ClientBuilder::from_environment(coffeeshop_env::environment())
//!     .with_bearer_token("eyJ...")
//!     .build()?;
//!
//! let drinks = client.drinks_detail().await?;
//! # Ok(())
//! # }
//! ```

use super::types::{AuthErrorBody, DeleteResponse, Drink, DrinkPayload, DrinksResponse, ErrorBody};
use super::{route_url, DrinkRoute};
use crate::environment::{environment, EnvironmentConfig};
use crate::error::{ApiError, Result};
use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default timeout in seconds for API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the drinks API
#[derive(Debug, Clone)]
pub struct DrinksClient {
    http_client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl DrinksClient {
    /// Base URL requests are sent to, as configured
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// Public listing (short recipe representation)
    pub async fn list_drinks(&self) -> Result<Vec<Drink>> {
        let response: DrinksResponse = self.call(DrinkRoute::ListDrinks, None::<&()>).await?;
        Ok(response.drinks)
    }

    /// Full listing, requires `get:drinks-detail`
    pub async fn drinks_detail(&self) -> Result<Vec<Drink>> {
        let response: DrinksResponse = self.call(DrinkRoute::DrinksDetail, None::<&()>).await?;
        Ok(response.drinks)
    }

    /// Create a drink, requires `post:drinks`
    pub async fn create_drink(&self, drink: &DrinkPayload) -> Result<Vec<Drink>> {
        let response: DrinksResponse = self.call(DrinkRoute::CreateDrink, Some(drink)).await?;
        Ok(response.drinks)
    }

    /// Patch a drink, requires `patch:drinks`
    pub async fn update_drink(&self, id: u64, changes: &DrinkPayload) -> Result<Vec<Drink>> {
        let response: DrinksResponse = self.call(DrinkRoute::UpdateDrink(id), Some(changes)).await?;
        Ok(response.drinks)
    }

    /// Delete a drink, requires `delete:drinks`. Returns the deleted id.
    pub async fn delete_drink(&self, id: u64) -> Result<u64> {
        let response: DeleteResponse = self.call(DrinkRoute::DeleteDrink(id), None::<&()>).await?;
        Ok(response.delete)
    }

    async fn call<B: Serialize, T: DeserializeOwned>(
        &self,
        route: DrinkRoute,
        body: Option<&B>,
    ) -> Result<T> {
        let url = route_url(&self.base_url, &route);
        debug!("{} {}", route.method(), url);

        let mut request = self.http_client.request(route.method(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = &self.bearer_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request.send().await.map_err(ApiError::HttpClient)?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        if response.status().is_success() {
            response.json().await.map_err(ApiError::HttpClient)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        debug!("API request failed with status {}: {}", status, error_text);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let (code, description) = match serde_json::from_str::<AuthErrorBody>(&error_text)
                {
                    Ok(body) => (body.code, body.description),
                    Err(_) => (status.as_str().to_string(), error_text),
                };
                if status == StatusCode::UNAUTHORIZED {
                    ApiError::Unauthorized { code, description }
                } else {
                    ApiError::Forbidden { code, description }
                }
            }
            StatusCode::NOT_FOUND => ApiError::NotFound {
                message: error_message(&error_text),
            },
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::Unprocessable {
                message: error_message(&error_text),
            },
            _ => ApiError::Http {
                status: status.as_u16(),
                message: error_message(&error_text),
            },
        }
    }
}

/// `message` of the API's error envelope, or the raw body
fn error_message(text: &str) -> String {
    serde_json::from_str::<ErrorBody>(text)
        .map(|body| body.message)
        .unwrap_or_else(|_| text.to_string())
}

/// Builder for [`DrinksClient`]
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    bearer_token: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pointed at the environment's `apiServerUrl`
    pub fn from_environment(env: &EnvironmentConfig) -> Self {
        Self::default().base_url(env.api_server_url)
    }

    /// Set the base URL for the API
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Send `Authorization: Bearer {token}` with every request
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client. Without an explicit base URL the compiled-in
    /// environment's `apiServerUrl` is used.
    pub fn build(self) -> Result<DrinksClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| environment().api_server_url.to_string());

        Url::parse(&base_url).map_err(|source| ApiError::InvalidUrl {
            value: base_url.clone(),
            source,
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            )
            .build()
            .map_err(ApiError::HttpClient)?;

        Ok(DrinksClient {
            http_client,
            base_url,
            bearer_token: self.bearer_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_environment() {
        let client = ClientBuilder::new().build().unwrap();
        assert_eq!(client.base_url(), environment().api_server_url);
        assert_eq!(client.bearer_token(), None);
    }

    #[test]
    fn test_builder_rejects_relative_base_url() {
        let err = ClientBuilder::new().base_url("127.0.0.1:5000").build();
        // "127.0.0.1" is not a valid scheme
        assert!(matches!(err, Err(ApiError::InvalidUrl { .. })));
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(
            error_message(r#"{"success": false, "error": 422, "message": "unprocessable"}"#),
            "unprocessable"
        );
        assert_eq!(error_message("gateway timeout"), "gateway timeout");
    }
}
