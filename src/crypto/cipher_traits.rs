use crate::crypto::error::CryptoError;

/// Single-block transform. `data` must be exactly one block long.
pub trait CipherAlgorithm {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

pub trait SymmetricCipher: CipherAlgorithm {
    /// Expands `key` into the round-key schedule owned by this instance.
    fn set_key(&mut self, key: &[u8]) -> Result<(), CryptoError>;

    /// Block length in bytes, constant for the lifetime of the instance.
    fn block_size(&self) -> usize;
}
