use crate::models::error::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;

// API CONFIGURATION
/// Configuration for the crowd prediction API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    pub fn register_url(&self) -> String {
        format!("{}/auth/register", self.base_url)
    }

    pub fn stations_url(&self) -> String {
        format!("{}/stations", self.base_url)
    }

    pub fn station_url(&self, id: u32) -> String {
        format!("{}/stations/{id}", self.base_url)
    }

    pub fn station_reports_url(&self, id: u32, hours: u32) -> String {
        format!("{}/crowd-reports/station/{id}?hours={hours}", self.base_url)
    }

    pub fn crowd_reports_url(&self) -> String {
        format!("{}/crowd-reports", self.base_url)
    }

    pub fn hourly_predictions_url(&self, id: u32, hours: u32) -> String {
        format!("{}/predictions/hourly/{id}?hours={hours}", self.base_url)
    }

    pub fn station_predictions_url(&self, id: u32, limit: u32) -> String {
        format!("{}/predictions/station/{id}?limit={limit}", self.base_url)
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predictions/predict", self.base_url)
    }

    pub fn station_analytics_url(&self, id: u32, days: u32) -> String {
        format!("{}/analytics/station/{id}?days={days}", self.base_url)
    }

    pub fn overview_url(&self) -> String {
        format!("{}/analytics/overview", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| crate::config::Config::API_BASE_URL.to_string()),
        }
    }
}

// API CLIENT
/// HTTP client for the crowd prediction backend. Attaches the bearer
/// token when a session is active; surfaces failures verbatim as
/// `AppError`, leaving retry and display decisions to callers.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a new unauthenticated client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default(), None)
    }

    /// Creates a client carrying the persisted session token, if any.
    pub fn from_session() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default(), crate::services::session::stored_token())
    }

    /// Creates a new client with the specified configuration and token.
    pub fn with_config(config: ApiConfig, token: Option<String>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            token,
        })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Executes a single GET request and decodes the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let request = self.authorize(self.http.get(url));
        let response = request.send().await.map_err(|e| self.classify_error(e))?;
        self.decode(response).await
    }

    /// Executes a single POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let request = self.authorize(self.http.post(url)).json(body);
        let response = request.send().await.map_err(|e| self.classify_error(e))?;
        self.decode(response).await
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Data(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Network(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Network(format!("Request error: {error}"))
        } else {
            AppError::Network(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            401 | 403 => AppError::Auth(format!("Authentication failed: {status}")),
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            code => AppError::Http {
                status: code,
                message: body.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_default() {
        let config = ApiConfig::builder().build();
        assert_eq!(
            config.stations_url(),
            "http://localhost:8000/api/stations"
        );
    }

    #[test]
    fn test_config_builder_custom_base() {
        let config = ApiConfig::builder().base_url("http://test/api").build();
        assert_eq!(config.station_url(4), "http://test/api/stations/4");
        assert_eq!(
            config.station_reports_url(4, 24),
            "http://test/api/crowd-reports/station/4?hours=24"
        );
    }

    #[test]
    fn test_prediction_and_analytics_urls() {
        let config = ApiConfig::builder().base_url("http://test/api").build();
        assert_eq!(
            config.hourly_predictions_url(9, 24),
            "http://test/api/predictions/hourly/9?hours=24"
        );
        assert_eq!(
            config.station_predictions_url(9, 10),
            "http://test/api/predictions/station/9?limit=10"
        );
        assert_eq!(config.predict_url(), "http://test/api/predictions/predict");
        assert_eq!(
            config.station_analytics_url(9, 7),
            "http://test/api/analytics/station/9?days=7"
        );
        assert_eq!(config.overview_url(), "http://test/api/analytics/overview");
    }

    #[test]
    fn test_auth_urls() {
        let config = ApiConfig::builder().base_url("http://test/api").build();
        assert_eq!(config.login_url(), "http://test/api/auth/login");
        assert_eq!(config.register_url(), "http://test/api/auth/register");
    }
}
