//! # filesig
//!
//! Per-user digital signing and verification of stored files.
//!
//! Every registered user gets an RSA key pair. Uploaded files can be signed
//! with the owner's private key, and anyone holding the public key can later
//! check that a file's bytes are exactly the ones that were signed.
//!
//! ## Features
//!
//! - **RSA Key Generation**: 2048-bit keys with public exponent 65537
//! - **PEM Format Support**: PKCS#8 private keys, SubjectPublicKeyInfo public keys
//! - **Digital Signatures**: RSA-PSS over SHA-256 (MGF1/SHA-256, maximum salt length)
//! - **Total Verification**: verifying never fails, it answers `true` or `false`
//! - **Upload Records**: signed upload metadata bound to the owner's key id
//!
//! ## Quick Start
//!
//! ```rust
//! use filesig::crypto::{generate_key_pair, sign_data, verify_signature};
//!
//! let key_pair = generate_key_pair().unwrap();
//!
//! let signature = sign_data(b"hello world", &key_pair.private_key).unwrap();
//! assert!(verify_signature(b"hello world", &signature, &key_pair.public_key));
//!
//! // Any change to the content invalidates the signature
//! assert!(!verify_signature(b"hello world!", &signature, &key_pair.public_key));
//! ```
//!
//! ## Error Handling
//!
//! Key decoding, signing and storage operations return `Result<T, Error>`.
//! Verification does not: a malformed signature, the wrong key and tampered
//! content all come back as `false`, with no way to tell them apart.
//!
//! Private keys are stored unencrypted. Keeping them away from anyone but
//! their owner is up to whatever persists [`types::user::UserKeys`].

pub mod crypto;
pub mod error;
pub mod keystore;
pub mod registration;
pub mod types;
pub mod upload;
pub mod verification;

pub use error::Error;
