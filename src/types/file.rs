use serde::{Deserialize, Serialize};

/// Metadata recorded for one uploaded file.
///
/// The bytes themselves live elsewhere; `signature` is bound to them
/// exactly as uploaded, not to the file name or any of these fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    pub filename: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// `sha256:<hex>` of the content at upload time
    pub content_hash: String,
    pub is_signed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_key_id: Option<String>,
    pub owner_id: String,
    pub created_at: String,
}

impl FileRecord {
    /// The stored signature, if the file was signed on upload.
    pub fn signature(&self) -> Option<&str> {
        if self.is_signed {
            self.signature.as_deref()
        } else {
            None
        }
    }
}
