use chrono::Utc;

use crate::crypto;
use crate::error::Error;
use crate::keystore::KeyStore;
use crate::types::user::UserKeys;

/// Register `identity`: generate its key pair, encode both halves and store them.
///
/// Key generation costs a few hundred milliseconds, so the identity is
/// checked first and a taken one is rejected before any work is done.
pub fn register_user(store: &mut dyn KeyStore, identity: &str) -> Result<UserKeys, Error> {
    if store.contains(identity) {
        return Err(Error::IdentityExists(identity.to_string()));
    }

    let keys = build_user_keys(identity)?;
    store.insert(keys.clone())?;

    tracing::info!("Registered key pair {} for {}", keys.key_id, identity);
    Ok(keys)
}

/// Generate a key pair for `identity` without storing it.
pub fn build_user_keys(identity: &str) -> Result<UserKeys, Error> {
    let key_pair = crypto::generate_key_pair()?;

    Ok(UserKeys {
        identity: identity.to_string(),
        key_id: crypto::calculate_key_id(&key_pair.public_key)?,
        public_key_pem: crypto::encode_public_key(&key_pair.public_key)?,
        private_key_pem: crypto::encode_private_key(&key_pair.private_key)?,
        created_at: Utc::now().to_rfc3339(),
    })
}
