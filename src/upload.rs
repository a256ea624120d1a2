//! Signing files as they are uploaded.

use std::fs;
use std::path::Path;

use chrono::Utc;
use rsa::RsaPrivateKey;

use crate::crypto;
use crate::error::Error;
use crate::keystore::KeyStore;
use crate::types::file::FileRecord;

/// What the upload pathway hands over for one file.
#[derive(Debug, Clone)]
pub struct Upload<'a> {
    pub owner_id: &'a str,
    pub filename: &'a str,
    pub mime_type: Option<&'a str>,
    /// File content exactly as received
    pub content: &'a [u8],
    /// Sign with the owner's private key
    pub sign: bool,
}

/// Build the record for an upload, signing the content if requested.
///
/// Only the owner's own private key is ever fetched from `store`.
pub fn prepare_upload(store: &dyn KeyStore, upload: &Upload<'_>) -> Result<FileRecord, Error> {
    let (signature, signer_key_id) = if upload.sign {
        let private_key_pem = store.private_key_pem(upload.owner_id)?;
        let key_id = store.public_key(upload.owner_id)?.key_id;
        let signature = crypto::sign_data_pem(upload.content, &private_key_pem)?;

        tracing::info!(
            "Signed {} for {} with key {}",
            upload.filename,
            upload.owner_id,
            key_id
        );
        (Some(signature), Some(key_id))
    } else {
        (None, None)
    };

    Ok(FileRecord {
        filename: upload.filename.to_string(),
        size: upload.content.len() as u64,
        mime_type: upload.mime_type.map(|s| s.to_string()),
        content_hash: crypto::content_digest(upload.content),
        is_signed: signature.is_some(),
        signature,
        signer_key_id,
        owner_id: upload.owner_id.to_string(),
        created_at: Utc::now().to_rfc3339(),
    })
}

/// Read a whole file and sign its content.
///
/// # Errors
///
/// An unreadable file is a [`Error::Signing`] failure, like any other
/// reason the signature could not be produced.
pub fn sign_file(path: &Path, private_key: &RsaPrivateKey) -> Result<String, Error> {
    let content = fs::read(path)
        .map_err(|e| Error::Signing(format!("Cannot read {}: {}", path.display(), e)))?;
    Ok(crypto::sign_data(&content, private_key)?)
}
