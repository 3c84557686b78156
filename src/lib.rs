pub mod crypto;

pub use crypto::cipher_context::CipherContext;
pub use crypto::cipher_types::{CipherMode, EncryptionAlgorithm, PaddingMode};
pub use crypto::error::CryptoError;
