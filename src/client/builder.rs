//! Fluent construction of a [`LexofficeClient`].

use std::sync::Arc;
use std::time::Duration;

use super::config::{ClientConfig, ProxyConfig, RateLimitPolicy};
use super::http::{ErrorHook, LexofficeClient};
use crate::{Error, Result};

/// Builder for [`LexofficeClient`].
///
/// Every setting that is not given keeps the [`ClientConfig`] default, so
/// the web address falls back to `https://api.lexoffice.io/`.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use lexoffice_rs::client::{ClientBuilder, RateLimitPolicy};
///
/// let client = ClientBuilder::new()
///     .with_api_key("X")
///     .with_timeout(Duration::from_millis(5000))
///     .with_rate_limiter(RateLimitPolicy::lexoffice_default())
///     .build()
///     .unwrap();
/// assert_eq!(client.config().timeout, Duration::from_millis(5000));
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    error_hook: Option<ErrorHook>,
}

impl ClientBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            error_hook: None,
        }
    }

    /// Override the API host.
    pub fn with_web_address(mut self, web_address: impl Into<String>) -> Self {
        self.config = self.config.with_web_address(web_address);
        self
    }

    /// Set the API key used as bearer token.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = self.config.with_access_token(api_key);
        self
    }

    /// Override the API version segment.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.config = self.config.with_api_version(version);
        self
    }

    /// Set the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Enable client-side rate limiting.
    pub fn with_rate_limiter(mut self, policy: RateLimitPolicy) -> Self {
        self.config = self.config.with_rate_limit(policy);
        self
    }

    /// Route requests through a proxy.
    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.config = self.config.with_proxy(proxy);
        self
    }

    /// Pause between page requests (at least 20 ms).
    pub fn with_page_cool_down(mut self, cool_down: Duration) -> Self {
        self.config = self.config.with_page_cool_down(cool_down);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.with_user_agent(user_agent);
        self
    }

    /// Register a callback for probe failures and token format problems.
    pub fn on_error(mut self, hook: impl Fn(&Error) + Send + Sync + 'static) -> Self {
        self.error_hook = Some(Arc::new(hook));
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Fails if the web address is not a URL, the rate limit policy is
    /// invalid, or the HTTP transport cannot be created.
    pub fn build(self) -> Result<LexofficeClient> {
        LexofficeClient::from_parts(self.config, self.error_hook)
    }
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("config", &self.config)
            .field("error_hook", &self.error_hook.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{DEFAULT_WEB_ADDRESS, MIN_PAGE_COOL_DOWN};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_api_key_and_timeout() {
        let client = ClientBuilder::new()
            .with_api_key("X")
            .with_timeout(Duration::from_millis(5000))
            .build()
            .unwrap();

        let config = client.config();
        assert_eq!(config.access_token.expose(), "X");
        assert_eq!(config.timeout, Duration::from_millis(5000));
        assert_eq!(config.web_address, DEFAULT_WEB_ADDRESS);
        assert_eq!(
            config.api_base_url().unwrap().as_str(),
            "https://api.lexoffice.io/v1/"
        );
    }

    #[test]
    fn test_overrides() {
        let client = ClientBuilder::new()
            .with_api_key("X")
            .with_web_address("http://localhost:9000")
            .with_api_version("v2")
            .with_user_agent("ua/1")
            .with_page_cool_down(Duration::from_millis(1))
            .with_proxy(ProxyConfig::new("proxy.local", 8080).insecure())
            .build()
            .unwrap();

        let config = client.config();
        assert_eq!(config.api_base_url().unwrap().as_str(), "http://localhost:9000/v2/");
        assert_eq!(config.user_agent, "ua/1");
        assert_eq!(config.page_cool_down, MIN_PAGE_COOL_DOWN);
        assert_eq!(config.proxy.unwrap().uri(), "http://proxy.local:8080");
    }

    #[test]
    fn test_on_error_sees_malformed_key() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let client = ClientBuilder::new()
            .with_api_key("X")
            .on_error(move |e| {
                assert!(matches!(e, Error::InvalidAccessToken));
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        assert!(!client.is_access_token_valid());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invalid_rate_limit_rejected() {
        let result = ClientBuilder::new()
            .with_api_key("X")
            .with_rate_limiter(RateLimitPolicy::new(0, 0, Duration::from_secs(1)))
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
