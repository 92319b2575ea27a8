use std::env;

/// Default endpoint, matching the API server's default port and route.
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:3000/api/contact";

/// Configuration for the contact form client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Full URL the form posts to
    pub endpoint_url: String,
}

impl FormConfig {
    /// Load configuration from environment variables
    ///
    /// `CONTACT_ENDPOINT_URL` overrides the default endpoint.
    pub fn from_env() -> Self {
        let endpoint_url = env::var("CONTACT_ENDPOINT_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string());

        Self { endpoint_url }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
        }
    }
}
