//! API utilities for frontend-backend communication
//!
//! The API base URL is an explicit [`ApiConfig`] value, built once at start
//! and handed to the views through context.

use gloo_net::http::Request;
use leptos::prelude::*;
use serde::de::DeserializeOwned;

/// Where the report API lives
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// `base_url` without a trailing slash, e.g. "http://localhost:3000".
    /// An empty base means "same origin".
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Derive the base URL from the current window location.
    ///
    /// Pages from the trunk dev server talk to the backend on port 3000 of
    /// the same host; pages served by the backend itself use their origin.
    /// Falls back to same-origin requests when no window is available.
    pub fn from_location() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::new(""),
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = location.port().unwrap_or_default();
        let origin = location.origin().unwrap_or_default();
        Self::new(base_url_for(&protocol, &hostname, &port, &origin))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from an API path ("/api/...", "/dashboard/...")
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Port of the trunk dev server (see Trunk.toml)
pub const DEV_SERVER_PORT: &str = "8081";
/// Default backend port while developing
pub const DEV_API_PORT: &str = "3000";

/// Base URL for a page at `protocol//hostname:port` with the given origin
pub fn base_url_for(protocol: &str, hostname: &str, port: &str, origin: &str) -> String {
    if port == DEV_SERVER_PORT {
        format!("{}//{}:{}", protocol, hostname, DEV_API_PORT)
    } else {
        origin.to_string()
    }
}

/// ApiConfig provided by `App`
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().expect("ApiConfig context not found")
}

/// GET `url` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ApiConfig::new("http://localhost:3000/");
        assert_eq!(config.base_url(), "http://localhost:3000");
        assert_eq!(
            config.url("/api/sales/channel"),
            "http://localhost:3000/api/sales/channel"
        );
    }

    #[test]
    fn test_dev_server_page_uses_api_port() {
        assert_eq!(
            base_url_for("http:", "localhost", "8081", "http://localhost:8081"),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_backend_served_page_uses_origin() {
        assert_eq!(
            base_url_for("http:", "reports.local", "8080", "http://reports.local:8080"),
            "http://reports.local:8080"
        );
        assert_eq!(
            base_url_for("https:", "reports.example.com", "", "https://reports.example.com"),
            "https://reports.example.com"
        );
        let config = ApiConfig::new(base_url_for("http:", "h", "3000", "http://h:3000"));
        assert_eq!(config.url("/health"), "http://h:3000/health");
    }

    #[test]
    fn test_same_origin_config() {
        let config = ApiConfig::new("");
        assert_eq!(config.url("/dashboard/sales-data"), "/dashboard/sales-data");
    }
}
