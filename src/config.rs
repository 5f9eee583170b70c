/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the crowd prediction REST backend
    pub const API_BASE_URL: &'static str = "http://localhost:8000/api";

    /// Enable automatic data refresh polling on the dashboard
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Polling interval in milliseconds (2 minutes = 120,000ms)
    pub const POLLING_INTERVAL_MS: u32 = 120_000;

    /// Window of recent crowd reports shown on a station page, in hours
    pub const REPORT_WINDOW_HOURS: u32 = 24;

    /// Prediction horizon requested for the hourly chart, in hours
    pub const PREDICTION_HOURS: u32 = 24;

    /// Window used for per-station analytics, in days
    pub const ANALYTICS_WINDOW_DAYS: u32 = 7;

    /// localStorage key holding the bearer token
    pub const TOKEN_STORAGE_KEY: &'static str = "token";

    /// localStorage key holding the logged-in username
    pub const USERNAME_STORAGE_KEY: &'static str = "username";
}
