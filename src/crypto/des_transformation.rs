use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CryptoError;
use crate::crypto::utils::{permute_bits, substitute, xor_bytes};

/// The DES round function: expand the half-block to 48 bits, mix in the
/// round key, substitute back down to 32 bits, permute.
pub struct DesTransformation;

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let expanded = permute_bits(input_block, &E, false, 1);
        let mixed = xor_bytes(&expanded, round_key);
        let substituted = substitute(&mixed, &S_BOXES)?;
        Ok(permute_bits(&substituted, &P, false, 1))
    }
}
