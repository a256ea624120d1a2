use std::fmt;

use serde::{Deserialize, Serialize};

use crate::crypto::SIGNATURE_ALGORITHM;

/// Key material stored for one registered identity.
///
/// The private key PEM is unencrypted. Whoever persists this record is
/// responsible for keeping it readable by its owner only.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserKeys {
    pub identity: String,
    pub key_id: String,
    pub public_key_pem: String,
    pub private_key_pem: String,
    pub created_at: String,
}

/// The shareable half of a [`UserKeys`] record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicKeyInfo {
    /// Signature scheme the key is used with (always "RSA-PSS-SHA256")
    pub key_type: String,
    pub key_id: String,
    pub public_key_pem: String,
}

impl UserKeys {
    pub fn public_info(&self) -> PublicKeyInfo {
        PublicKeyInfo {
            key_type: SIGNATURE_ALGORITHM.to_string(),
            key_id: self.key_id.clone(),
            public_key_pem: self.public_key_pem.clone(),
        }
    }
}

impl fmt::Debug for UserKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserKeys")
            .field("identity", &self.identity)
            .field("key_id", &self.key_id)
            .field("public_key_pem", &self.public_key_pem)
            .field("private_key_pem", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}
