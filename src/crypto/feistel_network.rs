use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CryptoError;
use crate::crypto::utils::xor_bytes;
use std::sync::Arc;

/// Generic Feistel engine: split the block into halves, run the keyed round
/// function, XOR into the other half. The final round leaves the right half
/// in place, so encryption and decryption traverse the same recurrence with
/// the key order reversed.
pub struct FeistelNetwork {
    rounds: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        rounds: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            rounds,
            transformation,
        }
    }

    pub fn encrypt_with_round_keys(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
    ) -> Result<Vec<u8>, CryptoError> {
        assert_eq!(block.len() % 2, 0, "block size must be even");

        let half = block.len() / 2;
        let mut left = block[..half].to_vec();
        let mut right = block[half..].to_vec();

        for index in 0..self.rounds - 1 {
            let feistel_out = self.transformation.transform(&right, &round_keys[index])?;
            let new_right = xor_bytes(&left, &feistel_out);
            left = right;
            right = new_right;
        }

        let feistel_out = self
            .transformation
            .transform(&right, &round_keys[self.rounds - 1])?;
        left = xor_bytes(&left, &feistel_out);

        Ok([left, right].concat())
    }

    pub fn decrypt_with_round_keys(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
    ) -> Result<Vec<u8>, CryptoError> {
        assert_eq!(block.len() % 2, 0, "block size must be even");

        let half = block.len() / 2;
        let mut left = block[..half].to_vec();
        let mut right = block[half..].to_vec();

        let feistel_out = self
            .transformation
            .transform(&right, &round_keys[self.rounds - 1])?;
        left = xor_bytes(&left, &feistel_out);

        for index in (0..self.rounds - 1).rev() {
            let feistel_out = self.transformation.transform(&left, &round_keys[index])?;
            let new_left = xor_bytes(&right, &feistel_out);
            right = left;
            left = new_left;
        }

        Ok([left, right].concat())
    }
}
