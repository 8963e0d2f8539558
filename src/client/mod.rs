//! HTTP client and service layer for the lexoffice API.
//!
//! This module provides the main entry point [`LexofficeClient`] for
//! interacting with the lexoffice API.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use lexoffice_rs::LexofficeClient;
//!
//! # async fn example() -> lexoffice_rs::Result<()> {
//! let client = LexofficeClient::builder()
//!     .with_api_key("your-api-key")
//!     .with_timeout(Duration::from_secs(5))
//!     .build()?;
//!
//! let countries = client.countries().list().await?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod executor;
pub mod global;
mod http;
pub mod paginated;
mod rate_limit;

pub use builder::ClientBuilder;
pub use config::{
    ClientConfig, ProxyConfig, RateLimitPolicy, DEFAULT_API_VERSION, DEFAULT_TIMEOUT,
    DEFAULT_WEB_ADDRESS, MIN_PAGE_COOL_DOWN,
};
pub use executor::{BoxFuture, HttpExecutor, RequestExecutor};
pub use http::{ErrorHook, LexofficeClient};
pub use paginated::{ListOptions, Page, PaginatedStream, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub(crate) use http::ClientInner;
