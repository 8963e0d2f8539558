//! Payment conditions service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::PaymentCondition;
use crate::Result;

/// Service for the organization's payment condition templates.
pub struct PaymentConditionsService {
    inner: Arc<ClientInner>,
}

impl PaymentConditionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all payment condition templates.
    pub async fn list(&self) -> Result<Vec<PaymentCondition>> {
        self.inner.get("payment-conditions").await
    }
}
