//! Configuration for the book skill Lambda.

use std::env;

/// Default Goodreads book lookup endpoint.
pub const DEFAULT_GOODREADS_ENDPOINT: &str = "https://www.goodreads.com/book/title.xml";

/// Time zone user requests are treated as coming from.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Goodreads API key. A missing key is not rejected here; the provider
    /// responds with an authentication error instead.
    pub goodreads_key: String,
    /// Goodreads book lookup endpoint
    pub goodreads_endpoint: String,
    /// Time zone the skill reports operating in
    pub timezone: String,
    /// Timeout applied to the outbound metadata request, in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            goodreads_key: env::var("GOODREADS_KEY").unwrap_or_default(),
            goodreads_endpoint: env::var("GOODREADS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_GOODREADS_ENDPOINT.to_string()),
            timezone: env::var("TZ").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
