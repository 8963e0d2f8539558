//! Payments service.

use std::sync::Arc;

use uuid::Uuid;

use crate::client::ClientInner;
use crate::models::Payments;
use crate::Result;

/// Service for the payment state of vouchers.
pub struct PaymentsService {
    inner: Arc<ClientInner>,
}

impl PaymentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the payments booked against a voucher.
    ///
    /// Works for any voucher id from the voucher list. Returns `None` if
    /// lexoffice answers 404.
    pub async fn get(&self, voucher_id: Uuid) -> Result<Option<Payments>> {
        self.inner
            .get_optional(&format!("payments/{}", voucher_id))
            .await
    }
}
