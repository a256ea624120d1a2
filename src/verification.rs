use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto;
use crate::error::Error;
use crate::keystore::KeyStore;
use crate::types::file::FileRecord;

const VALID_MESSAGE: &str = "Signature is valid";
const INVALID_MESSAGE: &str = "Signature is invalid";
const UNSIGNED_MESSAGE: &str = "File is not signed";

/// Outcome of a verification request.
///
/// An invalid signature is a normal outcome, not an error. The report does
/// not say why a signature was rejected: corrupt signature text, the wrong
/// key and altered content all read the same.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationReport {
    pub is_valid: bool,
    pub message: String,
}

impl VerificationReport {
    fn from_outcome(is_valid: bool) -> Self {
        Self {
            is_valid,
            message: if is_valid {
                VALID_MESSAGE.to_string()
            } else {
                INVALID_MESSAGE.to_string()
            },
        }
    }

    fn unsigned() -> Self {
        Self {
            is_valid: false,
            message: UNSIGNED_MESSAGE.to_string(),
        }
    }
}

/// Verify content against a signature and a caller-supplied public key PEM.
///
/// # Errors
///
/// Only a public key that does not parse is an error; the signature itself
/// never produces one.
pub fn verify_bytes(
    content: &[u8],
    signature: &str,
    public_key_pem: &str,
) -> Result<VerificationReport, Error> {
    let public_key = crypto::decode_public_key(public_key_pem)?;
    let valid = crypto::verify_signature(content, signature, &public_key);
    Ok(VerificationReport::from_outcome(valid))
}

/// Verify stored content against its record, using the owner's registered key.
///
/// An unsigned record is reported as not valid.
pub fn verify_record(
    content: &[u8],
    record: &FileRecord,
    store: &dyn KeyStore,
) -> Result<VerificationReport, Error> {
    let Some(signature) = record.signature() else {
        return Ok(VerificationReport::unsigned());
    };

    let public = store.public_key(&record.owner_id)?;
    if let Some(ref signer_key_id) = record.signer_key_id {
        if *signer_key_id != public.key_id {
            tracing::debug!(
                "{} was signed with {}, owner now has {}",
                record.filename,
                signer_key_id,
                public.key_id
            );
        }
    }

    verify_bytes(content, signature, &public.public_key_pem)
}

/// Read a file from disk and verify it.
///
/// A file that cannot be read is an [`Error::Io`], not an invalid signature.
pub fn verify_file(
    path: &Path,
    signature: &str,
    public_key_pem: &str,
) -> Result<VerificationReport, Error> {
    let content = fs::read(path)?;
    verify_bytes(&content, signature, public_key_pem)
}
