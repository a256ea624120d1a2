use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed key: {0}")]
    MalformedKey(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    #[error("Key encoding error: {0}")]
    Encoding(String),

    #[error("No key pair registered for '{0}'")]
    KeyNotFound(String),

    #[error("Identity '{0}' already has a key pair")]
    IdentityExists(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error was caused by what the caller passed in, as opposed
    /// to the environment. Client errors are not worth retrying unchanged.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedKey(_)
                | Error::Signing(_)
                | Error::KeyNotFound(_)
                | Error::IdentityExists(_)
                | Error::Json(_)
        )
    }
}

impl From<crate::crypto::Error> for Error {
    fn from(err: crate::crypto::Error) -> Self {
        match err {
            crate::crypto::Error::MalformedKey(msg) => Error::MalformedKey(msg),
            crate::crypto::Error::Signing(msg) => Error::Signing(msg),
            crate::crypto::Error::KeyGeneration(msg) => Error::KeyGeneration(msg),
            crate::crypto::Error::Encoding(msg) => Error::Encoding(msg),
        }
    }
}
