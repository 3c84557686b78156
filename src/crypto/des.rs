use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::error::CryptoError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::permute_bits;
use std::sync::Arc;

const BLOCK_SIZE: usize = 8;
const ROUNDS: usize = 16;

pub struct Des {
    feistel_network: FeistelNetwork,
    key_expansion: DesKeyExpansion,
    round_keys: Vec<Vec<u8>>,
}

impl Des {
    pub fn new() -> Self {
        Des {
            feistel_network: FeistelNetwork::new(ROUNDS, Arc::new(DesTransformation)),
            key_expansion: DesKeyExpansion,
            round_keys: Vec::new(),
        }
    }

    fn check_block(&self, data: &[u8]) -> Result<(), CryptoError> {
        if data.len() != BLOCK_SIZE {
            return Err(CryptoError::InvalidInputLength(
                "DES operates on 8-byte blocks",
            ));
        }
        assert!(!self.round_keys.is_empty(), "key not set");
        Ok(())
    }
}

impl Default for Des {
    fn default() -> Self {
        Self::new()
    }
}

impl CipherAlgorithm for Des {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.check_block(data)?;
        let permuted = permute_bits(data, &IP, false, 1);
        let encrypted = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, &self.round_keys)?;
        Ok(permute_bits(&encrypted, &FP, false, 1))
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.check_block(data)?;
        let permuted = permute_bits(data, &IP, false, 1);
        let decrypted = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, &self.round_keys)?;
        Ok(permute_bits(&decrypted, &FP, false, 1))
    }
}

impl SymmetricCipher for Des {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CryptoError> {
        self.round_keys = self.key_expansion.generate_round_keys(key)?;
        Ok(())
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
