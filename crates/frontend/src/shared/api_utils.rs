//! API utilities for frontend-backend communication
//!
//! Provides helper functions for resolving the API base URL.

/// Base URL baked in at build time, e.g. `API_BASE=https://api.example.com trunk build`
const BUILD_API_BASE: Option<&str> = option_env!("API_BASE");

/// Get the base URL for API requests
///
/// Uses the `API_BASE` value from the build environment when it is set,
/// otherwise constructs the URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available and nothing was configured
pub fn api_base() -> String {
    resolve_api_base(BUILD_API_BASE, location_api_base)
}

/// Pick the configured base URL if it is non-blank, otherwise the fallback.
/// Trailing slashes are removed so that paths can be appended directly.
pub fn resolve_api_base(configured: Option<&str>, fallback: impl FnOnce() -> String) -> String {
    let base = match configured.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value.to_string(),
        None => fallback(),
    };
    base.trim_end_matches('/').to_string()
}

fn location_api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_wins() {
        let base = resolve_api_base(Some("https://api.example.com/"), || unreachable!());
        assert_eq!(base, "https://api.example.com");
    }

    #[test]
    fn test_blank_configured_base_falls_back() {
        assert_eq!(
            resolve_api_base(Some("   "), || "http://localhost:3000".to_string()),
            "http://localhost:3000"
        );
        assert_eq!(
            resolve_api_base(None, || "http://127.0.0.1:3000/".to_string()),
            "http://127.0.0.1:3000"
        );
    }

    #[test]
    fn test_missing_window_gives_empty_base() {
        assert_eq!(resolve_api_base(None, String::new), "");
    }
}
