//! HTTP client implementation for the lexoffice API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::api::{
    ContactsService, CountriesService, CreditNotesService, EventSubscriptionsService,
    FilesService, InvoicesService, PaymentConditionsService, PaymentsService,
    QuotationsService, VoucherListService,
};
use crate::auth::AccessToken;
use crate::{Error, Result};

use super::builder::ClientBuilder;
use super::config::{ClientConfig, ProxyConfig};
use super::executor::{HttpExecutor, RequestExecutor};
use super::rate_limit::RateLimiter;

/// Callback notified of failures that are not returned to a caller:
/// failed connectivity probes and malformed access tokens.
pub type ErrorHook = Arc<dyn Fn(&Error) + Send + Sync>;

/// The main client for interacting with the lexoffice API.
///
/// This client provides access to all API services through method calls
/// that return service structs. Cloning is cheap; clones share the same
/// connection pool, configuration, and state flags.
///
/// # Example
///
/// ```no_run
/// use lexoffice_rs::LexofficeClient;
/// use lexoffice_rs::client::ListOptions;
/// use lexoffice_rs::models::VoucherStatus;
///
/// # async fn example() -> lexoffice_rs::Result<()> {
/// let client = LexofficeClient::new("your-api-key")?;
///
/// let open = client
///     .invoices()
///     .list(VoucherStatus::Open, false, ListOptions::default())
///     .await?;
/// let invoices = client.invoices().get_many_from_list(&open).await?;
/// println!("{} open invoices", invoices.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LexofficeClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    config: RwLock<ClientConfig>,
    transport: RwLock<Arc<dyn RequestExecutor>>,
    rate_limiter: Option<RateLimiter>,
    error_hook: RwLock<Option<ErrorHook>>,
    is_online: AtomicBool,
    is_connecting: AtomicBool,
    is_access_token_valid: AtomicBool,
}

impl LexofficeClient {
    /// Create a client with default settings for the given API key.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(access_token))
    }

    /// Create a client from `LEXOFFICE_*` environment variables.
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a client with a custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::from_parts(config, None)
    }

    /// Start building a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_parts(config: ClientConfig, error_hook: Option<ErrorHook>) -> Result<Self> {
        config.api_base_url()?;
        let transport: Arc<dyn RequestExecutor> = Arc::new(HttpExecutor::from_config(&config)?);
        let rate_limiter = config.rate_limit.clone().map(RateLimiter::new).transpose()?;

        let inner = ClientInner {
            config: RwLock::new(config),
            transport: RwLock::new(transport),
            rate_limiter,
            error_hook: RwLock::new(error_hook),
            is_online: AtomicBool::new(false),
            is_connecting: AtomicBool::new(false),
            is_access_token_valid: AtomicBool::new(false),
        };
        inner.verify_access_token();

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Get the contacts service.
    pub fn contacts(&self) -> ContactsService {
        ContactsService::new(self.inner.clone())
    }

    /// Get the voucher list service.
    pub fn voucher_list(&self) -> VoucherListService {
        VoucherListService::new(self.inner.clone())
    }

    /// Get the invoices service.
    pub fn invoices(&self) -> InvoicesService {
        InvoicesService::new(self.inner.clone())
    }

    /// Get the quotations service.
    pub fn quotations(&self) -> QuotationsService {
        QuotationsService::new(self.inner.clone())
    }

    /// Get the credit notes service.
    pub fn credit_notes(&self) -> CreditNotesService {
        CreditNotesService::new(self.inner.clone())
    }

    /// Get the payments service.
    pub fn payments(&self) -> PaymentsService {
        PaymentsService::new(self.inner.clone())
    }

    /// Get the files service.
    pub fn files(&self) -> FilesService {
        FilesService::new(self.inner.clone())
    }

    /// Get the event subscriptions (webhooks) service.
    pub fn event_subscriptions(&self) -> EventSubscriptionsService {
        EventSubscriptionsService::new(self.inner.clone())
    }

    /// Get the countries service.
    pub fn countries(&self) -> CountriesService {
        CountriesService::new(self.inner.clone())
    }

    /// Get the payment conditions service.
    pub fn payment_conditions(&self) -> PaymentConditionsService {
        PaymentConditionsService::new(self.inner.clone())
    }

    /// Issue an arbitrary request and return the raw response body.
    ///
    /// `path` is relative to the versioned API base, e.g. `"profile"` or
    /// `"contacts?customer=true"`. `body`, if given, is sent as JSON.
    pub async fn call<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String> {
        let response = self
            .inner
            .send(method, path, |req| match body {
                Some(b) => req.json(b),
                None => req,
            })
            .await?;
        Ok(response.text().await?)
    }

    /// Probe whether the lexoffice host is reachable.
    ///
    /// Sends a GET to the web address root and updates
    /// [`is_online`](Self::is_online):
    ///
    /// - success status: online
    /// - the probe timed out: unchanged
    /// - any other failure: offline, and the error hook is notified
    ///
    /// A probe started while another one is running returns immediately.
    pub async fn check_online(&self, timeout: Duration) {
        let inner = &self.inner;
        if inner.is_connecting.swap(true, Ordering::SeqCst) {
            return;
        }
        let _guard = ConnectingGuard(&inner.is_connecting);

        match inner.probe(timeout).await {
            Ok(()) => inner.is_online.store(true, Ordering::SeqCst),
            Err(Error::Timeout) => {
                tracing::debug!(timeout_ms = timeout.as_millis() as u64, "online check timed out");
            }
            Err(e) => {
                tracing::warn!(error = %e, "online check failed");
                inner.is_online.store(false, Ordering::SeqCst);
                inner.report(&e);
            }
        }
    }

    /// Result of the last connectivity probe.
    pub fn is_online(&self) -> bool {
        self.inner.is_online.load(Ordering::SeqCst)
    }

    /// Whether a connectivity probe is running.
    pub fn is_connecting(&self) -> bool {
        self.inner.is_connecting.load(Ordering::SeqCst)
    }

    /// Whether the configured token matches the lexoffice key format.
    ///
    /// This is a local check; see [`AccessToken::is_well_formed`].
    pub fn is_access_token_valid(&self) -> bool {
        self.inner.is_access_token_valid.load(Ordering::SeqCst)
    }

    /// Replace the access token and re-check its format.
    pub fn set_access_token(&self, token: impl Into<String>) {
        self.inner.write_config().access_token = AccessToken::new(token);
        self.inner.verify_access_token();
    }

    /// Change the per-call deadline. Rebuilds the transport.
    pub fn set_timeout(&self, timeout: Duration) -> Result<()> {
        self.inner.reconfigure(|c| c.timeout = timeout)
    }

    /// Change or remove the proxy. Rebuilds the transport.
    pub fn set_proxy(&self, proxy: Option<ProxyConfig>) -> Result<()> {
        self.inner.reconfigure(|c| c.proxy = proxy)
    }

    /// Install the error hook, replacing any previous one.
    pub fn set_error_hook(&self, hook: impl Fn(&Error) + Send + Sync + 'static) {
        *self
            .inner
            .error_hook
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(hook));
    }

    /// A snapshot of the current configuration.
    pub fn config(&self) -> ClientConfig {
        self.inner.read_config().clone()
    }
}

impl std::fmt::Debug for LexofficeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexofficeClient")
            .field("config", &*self.inner.read_config())
            .field("is_online", &self.is_online())
            .finish()
    }
}

/// Clears the connecting flag even if the probe future is dropped.
struct ConnectingGuard<'a>(&'a AtomicBool);

impl Drop for ConnectingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl ClientInner {
    fn read_config(&self) -> std::sync::RwLockReadGuard<'_, ClientConfig> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_config(&self) -> std::sync::RwLockWriteGuard<'_, ClientConfig> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn transport(&self) -> Arc<dyn RequestExecutor> {
        self.transport
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply a config change and swap in a freshly built transport.
    ///
    /// The config is only updated if the new transport builds.
    fn reconfigure(&self, change: impl FnOnce(&mut ClientConfig)) -> Result<()> {
        let mut config = self.read_config().clone();
        change(&mut config);
        let transport: Arc<dyn RequestExecutor> = Arc::new(HttpExecutor::from_config(&config)?);

        *self.write_config() = config;
        *self.transport.write().unwrap_or_else(PoisonError::into_inner) = transport;
        tracing::debug!("transport rebuilt");
        Ok(())
    }

    fn verify_access_token(&self) {
        let valid = self.read_config().access_token.is_well_formed();
        self.is_access_token_valid.store(valid, Ordering::SeqCst);
        if !valid {
            tracing::warn!("access token does not match the lexoffice key format");
            self.report(&Error::InvalidAccessToken);
        }
    }

    /// Notify the error hook, if one is installed.
    fn report(&self, error: &Error) {
        let hook = self
            .error_hook
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(hook) = hook {
            hook(error);
        }
    }

    pub(crate) fn page_cool_down(&self) -> Duration {
        self.read_config().page_cool_down
    }

    /// Resolve a path against the versioned API base.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url> {
        let base = self.read_config().api_base_url()?;
        Ok(base.join(path.trim_start_matches('/'))?)
    }

    /// Build, authenticate, and send a request.
    ///
    /// Waits on the rate limiter first, then enforces the configured
    /// timeout as a deadline for the whole exchange. Returns the response
    /// only for 200, 201, 202, and 204.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        customize: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response> {
        let url = self.api_url(path)?;
        let (bearer, timeout) = {
            let config = self.read_config();
            (config.access_token.bearer(), config.timeout)
        };
        let mut auth = HeaderValue::from_str(&bearer)
            .map_err(|_| Error::InvalidInput("access token is not a valid header value".to_string()))?;
        auth.set_sensitive(true);

        let transport = self.transport();
        let mut request = customize(
            transport
                .request(method.clone(), url.clone())
                .header(AUTHORIZATION, auth),
        )
        .build()?;
        request
            .headers_mut()
            .entry(ACCEPT)
            .or_insert_with(|| HeaderValue::from_static("application/json"));

        if let Some(limiter) = &self.rate_limiter {
            limiter.acquire().await?;
        }

        tracing::debug!(%method, %url, "sending request");
        let response = match tokio::time::timeout(timeout, transport.execute(request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) if e.is_timeout() => return Err(Error::Timeout),
            Ok(Err(e)) => return Err(Error::Http(e)),
            Err(_) => return Err(Error::Timeout),
        };

        Self::check_status(response).await
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if matches!(
            status,
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED | StatusCode::NO_CONTENT
        ) {
            return Ok(response);
        }

        let uri = response.url().to_string();
        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
        tracing::debug!(status = status.as_u16(), %uri, "request failed");
        Err(Error::from_api_response(status.as_u16(), uri, body))
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        Self::parse(self.send(Method::GET, path, |r| r).await?).await
    }

    /// Make a GET request, mapping 404 to `None`.
    pub(crate) async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        match self.get(path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        Self::parse(self.send(Method::GET, path, |r| r.query(query)).await?).await
    }

    /// Make a GET request for a binary body.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let response = self
            .send(Method::GET, path, |r| r.header(ACCEPT, HeaderValue::from_static("*/*")))
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Make a POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        Self::parse(self.send(Method::POST, path, |r| r.json(body)).await?).await
    }

    /// Make a POST request with query parameters.
    pub(crate) async fn post_with_query<T, B, Q>(&self, path: &str, body: &B, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        Self::parse(
            self.send(Method::POST, path, |r| r.query(query).json(body))
                .await?,
        )
        .await
    }

    /// Make a multipart POST request.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        Self::parse(self.send(Method::POST, path, |r| r.multipart(form)).await?).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, |r| r).await?;
        Ok(())
    }

    /// GET the web address root without credentials.
    async fn probe(&self, timeout: Duration) -> Result<()> {
        let url = self.read_config().web_address_url()?;
        let transport = self.transport();
        let request = transport.request(Method::GET, url.clone()).build()?;

        let response = match tokio::time::timeout(timeout, transport.execute(request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) if e.is_timeout() => return Err(Error::Timeout),
            Ok(Err(e)) => return Err(Error::Http(e)),
            Err(_) => return Err(Error::Timeout),
        };

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::from_api_response(
                status.as_u16(),
                url.to_string(),
                serde_json::Value::Null,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_api_url_joins_relative_paths() {
        let client = LexofficeClient::new("t").unwrap();
        assert_eq!(
            client.inner.api_url("invoices/abc").unwrap().as_str(),
            "https://api.lexoffice.io/v1/invoices/abc"
        );
        assert_eq!(
            client.inner.api_url("/contacts?customer=true").unwrap().as_str(),
            "https://api.lexoffice.io/v1/contacts?customer=true"
        );
    }

    #[test]
    fn test_invalid_token_flag_and_hook() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let hook: ErrorHook = Arc::new(move |e: &Error| {
            assert!(matches!(e, Error::InvalidAccessToken));
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let client = LexofficeClient::from_parts(ClientConfig::new("short"), Some(hook)).unwrap();
        assert!(!client.is_access_token_valid());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        client.set_access_token("a".repeat(48));
        assert!(client.is_access_token_valid());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_set_timeout_rebuilds_config() {
        let client = LexofficeClient::new("t").unwrap();
        client.set_timeout(Duration::from_millis(1234)).unwrap();
        assert_eq!(client.config().timeout, Duration::from_millis(1234));

        client
            .set_proxy(Some(ProxyConfig::new("proxy.local", 3128).insecure()))
            .unwrap();
        assert_eq!(client.config().proxy.unwrap().port, 3128);
        client.set_proxy(None).unwrap();
        assert!(client.config().proxy.is_none());
    }

    #[test]
    fn test_bad_base_url_fails_construction() {
        let config = ClientConfig::new("t").with_web_address("::nope::");
        assert!(LexofficeClient::with_config(config).is_err());
    }

    #[test]
    fn test_debug_hides_token() {
        let client = LexofficeClient::new("super-secret-token").unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("super-secret-token"));
    }
}
