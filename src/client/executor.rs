//! Transport seam between the client and the HTTP stack.

use std::future::Future;
use std::pin::Pin;

use reqwest::{Method, Request, RequestBuilder, Response};
use url::Url;

use super::config::ClientConfig;
use crate::Result;

/// Boxed future returned by [`RequestExecutor::execute`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Something that can build and send HTTP requests.
///
/// The client never talks to reqwest directly; it goes through this trait
/// so that the transport can be swapped as a whole when proxy or timeout
/// settings change.
pub trait RequestExecutor: Send + Sync {
    /// Start a request for `method` on `url`.
    fn request(&self, method: Method, url: Url) -> RequestBuilder;

    /// Send a built request.
    fn execute(&self, request: Request) -> BoxFuture<'_, reqwest::Result<Response>>;
}

/// reqwest-backed [`RequestExecutor`].
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    http: reqwest::Client,
}

impl HttpExecutor {
    /// Build a transport for `config`: timeout, user agent, and proxy.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent);

        if let Some(proxy) = config.proxy.as_ref().filter(|p| !p.address.is_empty()) {
            let mut p = reqwest::Proxy::all(proxy.uri())?;
            if let Some((user, password)) = proxy.credentials() {
                p = p.basic_auth(user, password);
            }
            tracing::debug!(proxy = %proxy.uri(), "building transport with proxy");
            builder = builder.proxy(p);
        }

        Ok(Self {
            http: builder.build()?,
        })
    }
}

impl RequestExecutor for HttpExecutor {
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    fn execute(&self, request: Request) -> BoxFuture<'_, reqwest::Result<Response>> {
        Box::pin(self.http.execute(request))
    }
}
