//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::FrontendConfig;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format_base(&protocol, &hostname, FrontendConfig::current().api_port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/car-transmition/update/7");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn format_base(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base.trim_end_matches('/'), path)
    } else {
        format!("{}/{}", base.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_base() {
        assert_eq!(
            format_base("https:", "admin.example.com", 3000),
            "https://admin.example.com:3000"
        );
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000", "/car-transmition/update/7"),
            "http://localhost:3000/car-transmition/update/7"
        );
        assert_eq!(
            join_url("http://localhost:3000/", "car-transmition/all"),
            "http://localhost:3000/car-transmition/all"
        );
        assert_eq!(join_url("", "/car-transmition/all"), "/car-transmition/all");
    }
}
