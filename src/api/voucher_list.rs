//! Voucher list service: the cross-type index of all vouchers.

use std::sync::Arc;

use serde::Serialize;

use crate::client::paginated::PaginatedStreamBuilder;
use crate::client::{ClientInner, ListOptions, PaginatedStream};
use crate::models::{VoucherListEntry, VoucherStatus, VoucherType};
use crate::Result;

/// Filters for `GET /voucherlist`.
///
/// lexoffice requires a voucher type; status and archived are optional.
///
/// # Example
///
/// ```
/// use lexoffice_rs::api::VoucherListQuery;
/// use lexoffice_rs::models::{VoucherStatus, VoucherType};
///
/// let query = VoucherListQuery::new(VoucherType::Quotation)
///     .status(VoucherStatus::Open)
///     .archived(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherListQuery {
    /// Voucher type
    pub voucher_type: VoucherType,
    /// Voucher status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_status: Option<VoucherStatus>,
    /// Include only archived (`true`) or unarchived (`false`) vouchers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl VoucherListQuery {
    /// Query all vouchers of one type.
    pub fn new(voucher_type: VoucherType) -> Self {
        Self {
            voucher_type,
            voucher_status: None,
            archived: None,
        }
    }

    /// Filter by status.
    pub fn status(mut self, status: VoucherStatus) -> Self {
        self.voucher_status = Some(status);
        self
    }

    /// Filter by archive flag.
    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }
}

/// Service for the voucher list.
///
/// The invoice, quotation, and credit note services use the same endpoint
/// for their `list` calls; this service exposes it for any voucher type.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use lexoffice_rs::api::VoucherListQuery;
/// use lexoffice_rs::client::ListOptions;
/// use lexoffice_rs::models::{VoucherStatus, VoucherType};
///
/// # async fn example(client: lexoffice_rs::LexofficeClient) -> lexoffice_rs::Result<()> {
/// let query = VoucherListQuery::new(VoucherType::Invoice).status(VoucherStatus::Overdue);
/// let mut stream = client.voucher_list().list_stream(query, ListOptions::default());
///
/// while let Some(entry) = stream.next().await {
///     let entry = entry?;
///     println!("{:?} due {:?}", entry.voucher_number, entry.due_date);
/// }
/// # Ok(())
/// # }
/// ```
pub struct VoucherListService {
    inner: Arc<ClientInner>,
}

impl VoucherListService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch every matching entry across all pages.
    pub async fn list(&self, query: VoucherListQuery, options: ListOptions) -> Result<Vec<VoucherListEntry>> {
        self.list_stream(query, options).collect_all().await
    }

    /// Stream matching entries, fetching pages lazily.
    pub fn list_stream(&self, query: VoucherListQuery, options: ListOptions) -> PaginatedStream<VoucherListEntry> {
        PaginatedStreamBuilder::new(self.inner.clone(), "voucherlist", options).build_with_query(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_wire_format() {
        let query = VoucherListQuery::new(VoucherType::CreditNote)
            .status(VoucherStatus::PaidOff)
            .archived(true);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({
                "voucherType": "creditnote",
                "voucherStatus": "paidoff",
                "archived": true
            })
        );

        let bare = serde_json::to_value(VoucherListQuery::new(VoucherType::Invoice)).unwrap();
        assert_eq!(bare, serde_json::json!({ "voucherType": "invoice" }));
    }
}
