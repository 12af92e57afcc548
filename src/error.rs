//! Error types for the classicrypt library.

use thiserror::Error;

/// Errors produced by the classicrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassiCryptError {
    /// Key fails the algorithm-specific validity rules.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Ciphertext cannot be split into digraphs.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Character is not present in the Playfair key square.
    #[error("Character '{0}' is not present in the key square")]
    InvalidCharacter(char),

    /// Cipher name outside the supported set.
    #[error("Unsupported cipher: {0}")]
    UnsupportedCipher(String),

    /// Mode other than `encrypt` or `decrypt`.
    #[error("Unsupported mode: {0}")]
    UnsupportedMode(String),

    /// A required request field is absent or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl ClassiCryptError {
    /// Returns `true` for errors caused by the shape of a request rather
    /// than by the cipher engines.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            ClassiCryptError::MissingField(_)
                | ClassiCryptError::UnsupportedCipher(_)
                | ClassiCryptError::UnsupportedMode(_)
        )
    }
}
