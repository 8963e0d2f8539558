//! Countries service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::Country;
use crate::Result;

/// Service for the country reference list.
pub struct CountriesService {
    inner: Arc<ClientInner>,
}

impl CountriesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all countries with their tax classification.
    pub async fn list(&self) -> Result<Vec<Country>> {
        self.inner.get("countries").await
    }
}
