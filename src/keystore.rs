//! Key storage abstraction.
//!
//! The signing flows never reach for a global database handle; the store is
//! always handed in by the caller.

use std::collections::HashMap;

use crate::error::Error;
use crate::types::user::{PublicKeyInfo, UserKeys};

/// Look up and record key pairs by identity.
///
/// Implementations must only hand out a private key to its owner. The flows
/// in this crate only ever ask for the private key of the identity they act
/// on behalf of.
pub trait KeyStore: Send + Sync {
    /// Store a newly registered key pair.
    ///
    /// Fails with [`Error::IdentityExists`] if the identity already has one.
    fn insert(&mut self, keys: UserKeys) -> Result<(), Error>;

    /// Whether `identity` has a key pair.
    fn contains(&self, identity: &str) -> bool;

    /// Public key info for `identity`.
    fn public_key(&self, identity: &str) -> Result<PublicKeyInfo, Error>;

    /// Private key PEM for `identity`.
    fn private_key_pem(&self, identity: &str) -> Result<String, Error>;
}

/// In-memory key store keyed by identity.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyStore {
    users: HashMap<String, UserKeys>,
}

impl InMemoryKeyStore {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn get(&self, identity: &str) -> Result<&UserKeys, Error> {
        self.users
            .get(identity)
            .ok_or_else(|| Error::KeyNotFound(identity.to_string()))
    }

    /// Serialize the store to JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        let mut users: Vec<&UserKeys> = self.users.values().collect();
        users.sort_by(|a, b| a.identity.cmp(&b.identity));
        Ok(serde_json::to_string_pretty(&users)?)
    }

    /// Deserialize the store from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let users: Vec<UserKeys> = serde_json::from_str(json)?;
        let mut store = Self::new();
        for keys in users {
            store.insert(keys)?;
        }
        Ok(store)
    }
}

impl KeyStore for InMemoryKeyStore {
    fn insert(&mut self, keys: UserKeys) -> Result<(), Error> {
        if self.users.contains_key(&keys.identity) {
            return Err(Error::IdentityExists(keys.identity));
        }
        self.users.insert(keys.identity.clone(), keys);
        Ok(())
    }

    fn contains(&self, identity: &str) -> bool {
        self.users.contains_key(identity)
    }

    fn public_key(&self, identity: &str) -> Result<PublicKeyInfo, Error> {
        Ok(self.get(identity)?.public_info())
    }

    fn private_key_pem(&self, identity: &str) -> Result<String, Error> {
        Ok(self.get(identity)?.private_key_pem.clone())
    }
}
