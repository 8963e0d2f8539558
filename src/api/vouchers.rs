//! Shared plumbing for the invoice, quotation, and credit note endpoints.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::client::paginated::PaginatedStreamBuilder;
use crate::client::{ClientInner, ListOptions, PaginatedStream};
use crate::models::{DocumentFileId, ResourceResponse, Voucher, VoucherListEntry, VoucherStatus, VoucherType};
use crate::Result;

use super::voucher_list::VoucherListQuery;

/// One sales voucher resource: its path and its voucher list type.
pub(crate) struct VoucherEndpoint {
    inner: Arc<ClientInner>,
    path: &'static str,
    voucher_type: VoucherType,
}

#[derive(Serialize)]
struct FinalizeQuery {
    finalize: bool,
}

impl VoucherEndpoint {
    pub(crate) fn new(inner: Arc<ClientInner>, path: &'static str, voucher_type: VoucherType) -> Self {
        Self {
            inner,
            path,
            voucher_type,
        }
    }

    pub(crate) fn list_stream(
        &self,
        status: VoucherStatus,
        archived: bool,
        options: ListOptions,
    ) -> PaginatedStream<VoucherListEntry> {
        let query = VoucherListQuery::new(self.voucher_type)
            .status(status)
            .archived(archived);
        PaginatedStreamBuilder::new(self.inner.clone(), "voucherlist", options).build_with_query(query)
    }

    pub(crate) async fn list(
        &self,
        status: VoucherStatus,
        archived: bool,
        options: ListOptions,
    ) -> Result<Vec<VoucherListEntry>> {
        self.list_stream(status, archived, options).collect_all().await
    }

    pub(crate) async fn get(&self, id: Uuid) -> Result<Option<Voucher>> {
        self.inner.get_optional(&format!("{}/{}", self.path, id)).await
    }

    /// Resolve ids one after the other, dropping the ones lexoffice does not
    /// know.
    pub(crate) async fn get_many<I>(&self, ids: I) -> Result<Vec<Voucher>>
    where
        I: IntoIterator<Item = Uuid>,
    {
        let mut vouchers = Vec::new();
        for id in ids {
            match self.get(id).await? {
                Some(voucher) => vouchers.push(voucher),
                None => tracing::debug!(path = self.path, %id, "voucher not found, skipping"),
            }
        }
        Ok(vouchers)
    }

    pub(crate) async fn create(&self, voucher: &Voucher, finalize: bool) -> Result<ResourceResponse> {
        let response: ResourceResponse = self
            .inner
            .post_with_query(self.path, voucher, &FinalizeQuery { finalize })
            .await?;
        tracing::debug!(path = self.path, id = %response.id, finalize, "voucher created");
        Ok(response)
    }

    pub(crate) async fn render_document(&self, id: Uuid) -> Result<DocumentFileId> {
        self.inner
            .get(&format!("{}/{}/document", self.path, id))
            .await
    }

    pub(crate) async fn download_document(&self, id: Uuid) -> Result<Vec<u8>> {
        let file = self.render_document(id).await?;
        self.inner
            .get_bytes(&format!("files/{}", file.document_file_id))
            .await
    }
}
