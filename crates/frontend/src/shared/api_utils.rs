//! API configuration for frontend-backend communication
//!
//! The backend base URL is captured from `OZGROCERIES_API_BASE_URL` when the
//! WASM bundle is built (e.g. `OZGROCERIES_API_BASE_URL=https://api.example trunk build`)
//! and resolved once at startup.

/// Used when no base URL was supplied at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Name of the build-time variable holding the backend base URL
pub const API_BASE_ENV: &str = "OZGROCERIES_API_BASE_URL";

/// Console configuration, provided to the view tree via context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Base URL without trailing slash, e.g. "http://localhost:3000"
    pub api_base_url: String,
}

impl ConsoleConfig {
    /// Resolve the configuration from the build environment
    pub fn from_env() -> Self {
        let config = Self::resolve(option_env!("OZGROCERIES_API_BASE_URL"));
        log::info!("{} = {}", API_BASE_ENV, config.api_base_url);
        config
    }

    /// Blank values fall back to [`DEFAULT_API_BASE`]
    pub fn resolve(value: Option<&str>) -> Self {
        let base = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        Self {
            api_base_url: base.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_absent_or_blank() {
        assert_eq!(ConsoleConfig::resolve(None).api_base_url, "http://localhost:3000");
        assert_eq!(ConsoleConfig::resolve(Some("  ")).api_base_url, "http://localhost:3000");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ConsoleConfig::resolve(Some("https://api.ozgroceries.example/"));
        assert_eq!(config.api_base_url, "https://api.ozgroceries.example");
    }
}
