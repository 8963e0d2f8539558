//! Files service: document downloads and voucher uploads.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use uuid::Uuid;

use crate::client::ClientInner;
use crate::models::{FileKind, FileUploadResponse};
use crate::{Error, Result};

/// Service for files.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: lexoffice_rs::LexofficeClient, id: uuid::Uuid) -> lexoffice_rs::Result<()> {
/// let file = client.invoices().render_document(id).await?;
/// let pdf = client.files().download(file.document_file_id).await?;
/// std::fs::write("invoice.pdf", pdf).ok();
/// # Ok(())
/// # }
/// ```
pub struct FilesService {
    inner: Arc<ClientInner>,
}

impl FilesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Download a file as raw bytes.
    pub async fn download(&self, id: Uuid) -> Result<Vec<u8>> {
        let bytes = self.inner.get_bytes(&format!("files/{}", id)).await?;
        tracing::debug!(%id, len = bytes.len(), "file downloaded");
        Ok(bytes)
    }

    /// Upload a file, e.g. a scanned receipt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty file or file name.
    pub async fn upload(
        &self,
        content: Vec<u8>,
        file_name: impl Into<String>,
        kind: FileKind,
    ) -> Result<FileUploadResponse> {
        let file_name = file_name.into();
        if content.is_empty() {
            return Err(Error::InvalidInput("cannot upload an empty file".to_string()));
        }
        if file_name.trim().is_empty() {
            return Err(Error::InvalidInput("file name is required".to_string()));
        }

        let form = Form::new()
            .part("file", Part::bytes(content).file_name(file_name))
            .text("type", kind.as_str());
        self.inner.post_multipart("files", form).await
    }
}
