use crate::crypto::error::CryptoError;

/// Keyed round function applied to one half-block inside a Feistel round.
pub trait EncryptionTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CryptoError>;
}
