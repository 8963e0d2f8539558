//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::auth::AccessToken;
use crate::{Error, Result};

/// Published lexoffice API host.
pub const DEFAULT_WEB_ADDRESS: &str = "https://api.lexoffice.io/";
/// API version path segment.
pub const DEFAULT_API_VERSION: &str = "v1";
/// Per-call deadline used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);
/// Lower bound for the pause between two page requests.
pub const MIN_PAGE_COOL_DOWN: Duration = Duration::from_millis(20);

/// Configuration for the lexoffice client.
///
/// # Example
///
/// ```
/// use lexoffice_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("my-api-key")
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("my-app/1.0");
/// assert_eq!(config.api_base_url().unwrap().as_str(), "https://api.lexoffice.io/v1/");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host, e.g. `https://api.lexoffice.io/`
    pub web_address: String,
    /// API version path segment
    pub api_version: String,
    /// Bearer token
    pub access_token: AccessToken,
    /// Per-call deadline
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Optional outbound proxy
    pub proxy: Option<ProxyConfig>,
    /// Optional client-side rate limit
    pub rate_limit: Option<RateLimitPolicy>,
    /// Pause between two page requests of one listing
    pub page_cool_down: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            web_address: DEFAULT_WEB_ADDRESS.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            access_token: AccessToken::new(String::new()),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("lexoffice-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            proxy: None,
            rate_limit: None,
            page_cool_down: MIN_PAGE_COOL_DOWN,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with default values and the given token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: AccessToken::new(access_token),
            ..Self::default()
        }
    }

    /// Load configuration from the environment.
    ///
    /// Reads:
    /// - `LEXOFFICE_API_KEY` (required)
    /// - `LEXOFFICE_BASE_URL` (optional): overrides the web address
    /// - `LEXOFFICE_TIMEOUT_MS` (optional): per-call deadline in milliseconds
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the key is missing or the timeout is not
    /// a number.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var("LEXOFFICE_API_KEY")
            .map_err(|_| Error::Config("LEXOFFICE_API_KEY is not set".to_string()))?;
        let mut config = Self::new(key);

        if let Ok(url) = std::env::var("LEXOFFICE_BASE_URL") {
            config = config.with_web_address(url);
        }
        if let Ok(ms) = std::env::var("LEXOFFICE_TIMEOUT_MS") {
            let ms: u64 = ms.parse().map_err(|_| {
                Error::Config(format!("LEXOFFICE_TIMEOUT_MS is not a number: {ms}"))
            })?;
            config = config.with_timeout(Duration::from_millis(ms));
        }
        Ok(config)
    }

    /// Set the API host.
    pub fn with_web_address(mut self, web_address: impl Into<String>) -> Self {
        self.web_address = web_address.into();
        self
    }

    /// Set the API version segment.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the bearer token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = AccessToken::new(token);
        self
    }

    /// Set the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Route requests through a proxy.
    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Limit the request rate on the client side.
    pub fn with_rate_limit(mut self, policy: RateLimitPolicy) -> Self {
        self.rate_limit = Some(policy);
        self
    }

    /// Set the pause between page requests. Values below 20 ms are raised
    /// to 20 ms.
    pub fn with_page_cool_down(mut self, cool_down: Duration) -> Self {
        self.page_cool_down = cool_down.max(MIN_PAGE_COOL_DOWN);
        self
    }

    /// The web address with a guaranteed trailing slash.
    pub fn web_address_url(&self) -> Result<Url> {
        let mut raw = self.web_address.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Ok(Url::parse(&raw)?)
    }

    /// Base URL every API path is joined to: `<web address><version>/`.
    pub fn api_base_url(&self) -> Result<Url> {
        let version = self.api_version.trim_matches('/');
        if version.is_empty() {
            return self.web_address_url();
        }
        Ok(self.web_address_url()?.join(&format!("{version}/"))?)
    }
}

/// Outbound proxy settings.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Host name or full URL of the proxy
    pub address: String,
    /// Proxy port
    pub port: u16,
    /// Use `https://` when `address` carries no scheme
    pub secure: bool,
    /// Send the configured credentials
    pub use_default_credentials: bool,
    /// Proxy user
    pub user: Option<String>,
    /// Proxy password
    pub password: Option<String>,
}

impl ProxyConfig {
    /// A proxy on the given host and port, TLS on, no credentials.
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
            secure: true,
            use_default_credentials: true,
            user: None,
            password: None,
        }
    }

    /// Use plain HTTP to talk to the proxy.
    pub fn insecure(mut self) -> Self {
        self.secure = false;
        self
    }

    /// Authenticate against the proxy.
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }

    /// Full proxy URI.
    ///
    /// An address that already carries a scheme is used as is; otherwise
    /// the scheme follows [`secure`](Self::secure).
    pub fn uri(&self) -> String {
        if self.address.starts_with("http://") || self.address.starts_with("https://") {
            format!("{}:{}", self.address.trim_end_matches('/'), self.port)
        } else {
            let scheme = if self.secure { "https" } else { "http" };
            format!("{}://{}:{}", scheme, self.address, self.port)
        }
    }

    /// Credentials to send, if any.
    pub(crate) fn credentials(&self) -> Option<(&str, &str)> {
        if !self.use_default_credentials {
            return None;
        }
        let user = self.user.as_deref().filter(|u| !u.is_empty())?;
        Some((user, self.password.as_deref().unwrap_or("")))
    }
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("address", &self.address)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("use_default_credentials", &self.use_default_credentials)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self::new(String::new(), 443)
    }
}

/// Token bucket parameters for client-side rate limiting.
///
/// lexoffice allows two requests per second per token; the
/// [`lexoffice_default`](Self::lexoffice_default) policy matches that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Maximum number of tokens in the bucket
    pub capacity: u32,
    /// Tokens added every period
    pub tokens_per_period: u32,
    /// Replenishment period
    pub replenishment_period: Duration,
    /// Maximum number of callers waiting for a token
    pub queue_limit: usize,
}

impl RateLimitPolicy {
    /// Create a policy with an unbounded queue.
    pub fn new(capacity: u32, tokens_per_period: u32, replenishment_period: Duration) -> Self {
        Self {
            capacity,
            tokens_per_period,
            replenishment_period,
            queue_limit: usize::MAX,
        }
    }

    /// Two requests per second.
    pub fn lexoffice_default() -> Self {
        Self::new(2, 2, Duration::from_secs(1))
    }

    /// Bound the number of waiting callers.
    pub fn with_queue_limit(mut self, queue_limit: usize) -> Self {
        self.queue_limit = queue_limit;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.capacity == 0 || self.tokens_per_period == 0 {
            return Err(Error::Config(
                "rate limit capacity and tokens per period must be positive".to_string(),
            ));
        }
        if self.replenishment_period.is_zero() {
            return Err(Error::Config(
                "rate limit replenishment period must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_millis(10_000));
        assert_eq!(config.web_address, "https://api.lexoffice.io/");
        assert_eq!(config.page_cool_down, MIN_PAGE_COOL_DOWN);
        assert!(config.proxy.is_none());
        assert!(config.rate_limit.is_none());
    }

    #[test]
    fn test_api_base_url_normalizes_slashes() {
        let config = ClientConfig::new("t").with_web_address("http://localhost:8080");
        assert_eq!(config.api_base_url().unwrap().as_str(), "http://localhost:8080/v1/");

        let config = config.with_api_version("/v2/");
        assert_eq!(config.api_base_url().unwrap().as_str(), "http://localhost:8080/v2/");

        let config = config.with_api_version("");
        assert_eq!(config.api_base_url().unwrap().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_bad_web_address() {
        let config = ClientConfig::new("t").with_web_address("not a url");
        assert!(matches!(config.api_base_url(), Err(Error::UrlParse(_))));
    }

    #[test]
    fn test_page_cool_down_floor() {
        let config = ClientConfig::default().with_page_cool_down(Duration::from_millis(5));
        assert_eq!(config.page_cool_down, Duration::from_millis(20));

        let config = config.with_page_cool_down(Duration::from_millis(250));
        assert_eq!(config.page_cool_down, Duration::from_millis(250));
    }

    #[test]
    fn test_proxy_uri() {
        assert_eq!(ProxyConfig::new("proxy.local", 8443).uri(), "https://proxy.local:8443");
        assert_eq!(ProxyConfig::new("proxy.local", 3128).insecure().uri(), "http://proxy.local:3128");
        assert_eq!(ProxyConfig::new("http://proxy.local", 3128).uri(), "http://proxy.local:3128");
    }

    #[test]
    fn test_proxy_credentials() {
        let proxy = ProxyConfig::new("proxy.local", 443);
        assert_eq!(proxy.credentials(), None);

        let proxy = proxy.with_credentials("user", "pw");
        assert_eq!(proxy.credentials(), Some(("user", "pw")));

        let proxy = ProxyConfig {
            use_default_credentials: false,
            ..proxy
        };
        assert_eq!(proxy.credentials(), None);
        assert!(!format!("{:?}", proxy).contains("pw"));
    }

    #[test]
    fn test_rate_limit_validation() {
        assert!(RateLimitPolicy::lexoffice_default().validate().is_ok());
        assert!(RateLimitPolicy::new(0, 1, Duration::from_secs(1)).validate().is_err());
        assert!(RateLimitPolicy::new(1, 1, Duration::ZERO).validate().is_err());
        assert_eq!(
            RateLimitPolicy::lexoffice_default().with_queue_limit(4).queue_limit,
            4
        );
    }
}
