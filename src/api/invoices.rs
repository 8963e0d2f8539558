//! Invoices service.

use std::sync::Arc;

use uuid::Uuid;

use super::vouchers::VoucherEndpoint;
use crate::client::{ClientInner, ListOptions, PaginatedStream};
use crate::models::{DocumentFileId, Invoice, ResourceResponse, VoucherListEntry, VoucherStatus, VoucherType};
use crate::Result;

/// Service for invoice operations.
///
/// # Example
///
/// ```no_run
/// use lexoffice_rs::client::ListOptions;
/// use lexoffice_rs::models::VoucherStatus;
///
/// # async fn example(client: lexoffice_rs::LexofficeClient) -> lexoffice_rs::Result<()> {
/// // Index of all open, unarchived invoices
/// let entries = client
///     .invoices()
///     .list(VoucherStatus::Open, false, ListOptions::default())
///     .await?;
///
/// // Full documents, fetched one by one
/// let invoices = client.invoices().get_many_from_list(&entries).await?;
/// for invoice in invoices {
///     println!("{:?}: {:?}", invoice.voucher_number, invoice.total_price.total_gross_amount);
/// }
/// # Ok(())
/// # }
/// ```
pub struct InvoicesService {
    endpoint: VoucherEndpoint,
}

impl InvoicesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self {
            endpoint: VoucherEndpoint::new(inner, "invoices", VoucherType::Invoice),
        }
    }

    /// List invoices with the given status through the voucher list.
    pub async fn list(
        &self,
        status: VoucherStatus,
        archived: bool,
        options: ListOptions,
    ) -> Result<Vec<VoucherListEntry>> {
        self.endpoint.list(status, archived, options).await
    }

    /// Stream invoice list entries, fetching pages lazily.
    pub fn list_stream(
        &self,
        status: VoucherStatus,
        archived: bool,
        options: ListOptions,
    ) -> PaginatedStream<VoucherListEntry> {
        self.endpoint.list_stream(status, archived, options)
    }

    /// Get an invoice by id. Returns `None` if lexoffice answers 404.
    pub async fn get(&self, id: Uuid) -> Result<Option<Invoice>> {
        self.endpoint.get(id).await
    }

    /// Get several invoices, in order, skipping unknown ids.
    ///
    /// Requests are sent sequentially.
    pub async fn get_many<I>(&self, ids: I) -> Result<Vec<Invoice>>
    where
        I: IntoIterator<Item = Uuid>,
    {
        self.endpoint.get_many(ids).await
    }

    /// Get the full invoices behind voucher list entries.
    pub async fn get_many_from_list(&self, entries: &[VoucherListEntry]) -> Result<Vec<Invoice>> {
        self.endpoint.get_many(entries.iter().map(|e| e.id)).await
    }

    /// Create an invoice.
    ///
    /// With `finalize` the invoice is created in status `open` and gets a
    /// voucher number; otherwise it stays a draft.
    pub async fn create(&self, invoice: &Invoice, finalize: bool) -> Result<ResourceResponse> {
        self.endpoint.create(invoice, finalize).await
    }

    /// Render the invoice PDF and return its file id.
    pub async fn render_document(&self, id: Uuid) -> Result<DocumentFileId> {
        self.endpoint.render_document(id).await
    }

    /// Render the invoice PDF and download it.
    pub async fn download_document(&self, id: Uuid) -> Result<Vec<u8>> {
        self.endpoint.download_document(id).await
    }
}
