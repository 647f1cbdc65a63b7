//! Site configuration.

/// Backend base used when `BACKEND_URL` is unset.
pub const DEFAULT_BACKEND_BASE: &str = "http://localhost:8000";

/// Environment-supplied configuration for the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Base URL of the inquiry backend.
    pub backend_base: String,
}

impl SiteConfig {
    pub fn new(backend_base: impl Into<String>) -> Self {
        Self {
            backend_base: backend_base.into(),
        }
    }

    /// Read `BACKEND_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_BASE.to_string()),
        )
    }

    fn base(&self) -> &str {
        self.backend_base.trim_end_matches('/')
    }

    /// Endpoint receiving inquiry submissions.
    pub fn inquiries_url(&self) -> String {
        format!("{}/api/inquiries", self.base())
    }

    /// Backend health-check endpoint.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = SiteConfig::default();
        assert_eq!(config.inquiries_url(), "http://localhost:8000/api/inquiries");
        assert_eq!(config.health_url(), "http://localhost:8000/health");
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        let config = SiteConfig::new("https://api.meghamsys.com/");
        assert_eq!(
            config.inquiries_url(),
            "https://api.meghamsys.com/api/inquiries"
        );
    }
}
