//! File references.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to a rendered voucher PDF.
///
/// Returned by the `/{voucher}/{id}/document` render endpoints and embedded
/// in vouchers under `files`. Pass the id to `files().download()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFileId {
    /// File id
    pub document_file_id: Uuid,
}

/// Kind of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileKind {
    /// A bookkeeping voucher (receipt, incoming invoice)
    #[default]
    Voucher,
}

impl FileKind {
    /// Value of the `type` multipart field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Voucher => "voucher",
        }
    }
}

/// Response to `POST /files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadResponse {
    /// Id of the stored file
    pub id: Uuid,
}
