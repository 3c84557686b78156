use thiserror::Error;

/// Errors produced by the cipher engine.
///
/// Construction-time failures (bad selector, bad key length) surface
/// immediately; failures inside an encrypt/decrypt loop abort the whole
/// call. Out-of-range S-box indices are programming errors and are handled
/// with assertions, not with a variant here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("invalid key length for {algorithm}: got {actual} bytes")]
    InvalidKeyLength {
        algorithm: &'static str,
        actual: usize,
    },

    #[error("invalid input length: {0}")]
    InvalidInputLength(&'static str),

    #[error("invalid padding: count byte exceeds buffer length")]
    InvalidPadding,

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("unsupported cipher mode: {0}")]
    UnsupportedMode(String),

    #[error("unsupported padding scheme: {0}")]
    UnsupportedPadding(String),
}
