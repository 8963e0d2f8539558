//! Credit notes service.

use std::sync::Arc;

use uuid::Uuid;

use super::vouchers::VoucherEndpoint;
use crate::client::{ClientInner, ListOptions, PaginatedStream};
use crate::models::{CreditNote, DocumentFileId, ResourceResponse, VoucherListEntry, VoucherStatus, VoucherType};
use crate::Result;

/// Service for credit note operations.
pub struct CreditNotesService {
    endpoint: VoucherEndpoint,
}

impl CreditNotesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self {
            endpoint: VoucherEndpoint::new(inner, "credit-notes", VoucherType::CreditNote),
        }
    }

    /// List credit notes with the given status through the voucher list.
    pub async fn list(
        &self,
        status: VoucherStatus,
        archived: bool,
        options: ListOptions,
    ) -> Result<Vec<VoucherListEntry>> {
        self.endpoint.list(status, archived, options).await
    }

    /// Stream credit note list entries.
    pub fn list_stream(
        &self,
        status: VoucherStatus,
        archived: bool,
        options: ListOptions,
    ) -> PaginatedStream<VoucherListEntry> {
        self.endpoint.list_stream(status, archived, options)
    }

    /// Get a credit note by id, `None` on 404.
    pub async fn get(&self, id: Uuid) -> Result<Option<CreditNote>> {
        self.endpoint.get(id).await
    }

    /// Get several credit notes sequentially, skipping unknown ids.
    pub async fn get_many<I>(&self, ids: I) -> Result<Vec<CreditNote>>
    where
        I: IntoIterator<Item = Uuid>,
    {
        self.endpoint.get_many(ids).await
    }

    /// Create a credit note.
    ///
    /// Link it to an invoice through
    /// [`related_vouchers`](crate::models::Voucher::related_vouchers).
    pub async fn create(&self, credit_note: &CreditNote, finalize: bool) -> Result<ResourceResponse> {
        self.endpoint.create(credit_note, finalize).await
    }

    /// Render the credit note PDF and return its file id.
    pub async fn render_document(&self, id: Uuid) -> Result<DocumentFileId> {
        self.endpoint.render_document(id).await
    }
}
