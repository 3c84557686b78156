use crate::crypto::cipher_modes::{EncryptMode, SharedCipher, make_mode};
use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::cipher_types::{CipherMode, EncryptionAlgorithm, PaddingMode};
use crate::crypto::des::Des;
use crate::crypto::error::CryptoError;
use crate::crypto::mars::Mars;
use crate::crypto::paddings::{apply_padding, remove_padding};
use crate::crypto::serpent::Serpent;
use log::{debug, trace};
use std::sync::Arc;

/// Pipeline facade: one padding scheme + one chaining mode + one keyed
/// cipher, composed into whole-buffer encrypt/decrypt.
pub struct CipherContext {
    mode: Box<dyn EncryptMode>,
    padding: PaddingMode,
    block_length: usize,
}

impl CipherContext {
    pub fn new(
        key: &[u8],
        algorithm: EncryptionAlgorithm,
        mode: CipherMode,
        padding: PaddingMode,
        iv: &[u8],
    ) -> Result<Self, CryptoError> {
        let mut cipher: Box<dyn SymmetricCipher + Send + Sync> = match algorithm {
            EncryptionAlgorithm::DES => Box::new(Des::new()),
            EncryptionAlgorithm::MARS => Box::new(Mars::new()),
            EncryptionAlgorithm::Serpent => Box::new(Serpent::new()),
        };
        cipher.set_key(key)?;

        let block_length = cipher.block_size();
        let shared: SharedCipher = Arc::from(cipher);
        let mode_object = make_mode(mode, shared, iv)?;

        debug!(
            "cipher context ready: {:?}/{:?}/{:?}, block length {}",
            algorithm, mode, padding, block_length
        );

        Ok(CipherContext {
            mode: mode_object,
            padding,
            block_length,
        })
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        trace!("encrypting {} bytes", plaintext.len());
        let padded = apply_padding(plaintext, self.block_length, self.padding);
        self.mode.encrypt(&padded)
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        trace!("decrypting {} bytes", ciphertext.len());
        let decrypted = self.mode.decrypt(ciphertext)?;
        remove_padding(&decrypted, self.padding)
    }

    pub fn block_length(&self) -> usize {
        self.block_length
    }
}
