//! Quotations service.

use std::sync::Arc;

use uuid::Uuid;

use super::vouchers::VoucherEndpoint;
use crate::client::{ClientInner, ListOptions, PaginatedStream};
use crate::models::{DocumentFileId, Quotation, ResourceResponse, VoucherListEntry, VoucherStatus, VoucherType};
use crate::Result;

/// Service for quotation operations.
///
/// Same surface as [`InvoicesService`](super::InvoicesService), on
/// `/quotations`.
pub struct QuotationsService {
    endpoint: VoucherEndpoint,
}

impl QuotationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self {
            endpoint: VoucherEndpoint::new(inner, "quotations", VoucherType::Quotation),
        }
    }

    /// List quotations with the given status through the voucher list.
    pub async fn list(
        &self,
        status: VoucherStatus,
        archived: bool,
        options: ListOptions,
    ) -> Result<Vec<VoucherListEntry>> {
        self.endpoint.list(status, archived, options).await
    }

    /// Stream quotation list entries.
    pub fn list_stream(
        &self,
        status: VoucherStatus,
        archived: bool,
        options: ListOptions,
    ) -> PaginatedStream<VoucherListEntry> {
        self.endpoint.list_stream(status, archived, options)
    }

    /// Get a quotation by id, `None` on 404.
    pub async fn get(&self, id: Uuid) -> Result<Option<Quotation>> {
        self.endpoint.get(id).await
    }

    /// Get several quotations sequentially, skipping unknown ids.
    pub async fn get_many<I>(&self, ids: I) -> Result<Vec<Quotation>>
    where
        I: IntoIterator<Item = Uuid>,
    {
        self.endpoint.get_many(ids).await
    }

    /// Get the full quotations behind voucher list entries.
    pub async fn get_many_from_list(&self, entries: &[VoucherListEntry]) -> Result<Vec<Quotation>> {
        self.endpoint.get_many(entries.iter().map(|e| e.id)).await
    }

    /// Create a quotation, optionally finalized.
    pub async fn create(&self, quotation: &Quotation, finalize: bool) -> Result<ResourceResponse> {
        self.endpoint.create(quotation, finalize).await
    }

    /// Render the quotation PDF and return its file id.
    pub async fn render_document(&self, id: Uuid) -> Result<DocumentFileId> {
        self.endpoint.render_document(id).await
    }

    /// Render the quotation PDF and download it.
    pub async fn download_document(&self, id: Uuid) -> Result<Vec<u8>> {
        self.endpoint.download_document(id).await
    }
}
