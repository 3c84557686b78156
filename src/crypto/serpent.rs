use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::error::CryptoError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::serpent_key_expansion::SerpentKeyExpansion;
use crate::crypto::serpent_tables::{FP_TABLE, INVERSE_S_BOX, IP_TABLE, S_BOX};
use crate::crypto::utils::{permute_bits, xor_bytes};

const BLOCK_SIZE: usize = 16;
const ROUNDS: usize = 32;

/// 32-round SPN over four 32-bit words: round-key XOR, a round-indexed
/// 4-bit S-box over all 32 nibbles, and a fixed linear mixing layer, framed
/// by the initial/final bit permutations and a final whitening key.
pub struct Serpent {
    key_expansion: SerpentKeyExpansion,
    round_keys: Vec<Vec<u8>>,
}

fn apply_sboxes(block: &mut [u8], round: usize, inverse: bool) {
    let sbox_index = round % 8;

    for group in 0..32 {
        let byte_index = group / 2;
        let pos = (group % 2) * 4;

        let part = ((block[byte_index] >> pos) & 0x0F) as usize;
        let substituted = if inverse {
            INVERSE_S_BOX[sbox_index][part]
        } else {
            S_BOX[sbox_index][part]
        };

        block[byte_index] = (block[byte_index] & !(0x0Fu8 << pos)) | (substituted << pos);
    }
}

fn load_words(block: &[u8]) -> [u32; 4] {
    [
        u32::from_le_bytes(block[0..4].try_into().unwrap()),
        u32::from_le_bytes(block[4..8].try_into().unwrap()),
        u32::from_le_bytes(block[8..12].try_into().unwrap()),
        u32::from_le_bytes(block[12..16].try_into().unwrap()),
    ]
}

fn store_words(words: [u32; 4]) -> Vec<u8> {
    let mut out = Vec::with_capacity(BLOCK_SIZE);
    for word in words {
        out.extend_from_slice(&word.to_le_bytes());
    }
    out
}

fn linear_transformation(block: &[u8]) -> Vec<u8> {
    let [mut x0, mut x1, mut x2, mut x3] = load_words(block);

    x0 = x0.rotate_left(13);
    x2 = x2.rotate_left(3);
    x1 ^= x0 ^ x2;
    x3 ^= x2 ^ (x0 << 3);
    x1 = x1.rotate_left(1);
    x3 = x3.rotate_left(7);
    x0 ^= x1 ^ x3;
    x2 ^= x3 ^ (x1 << 7);
    x0 = x0.rotate_left(5);
    x2 = x2.rotate_left(22);

    store_words([x0, x1, x2, x3])
}

fn inverse_linear_transformation(block: &[u8]) -> Vec<u8> {
    let [mut x0, mut x1, mut x2, mut x3] = load_words(block);

    x2 = x2.rotate_right(22);
    x0 = x0.rotate_right(5);
    x2 ^= x3 ^ (x1 << 7);
    x0 ^= x1 ^ x3;
    x3 = x3.rotate_right(7);
    x1 = x1.rotate_right(1);
    x3 ^= x2 ^ (x0 << 3);
    x1 ^= x0 ^ x2;
    x2 = x2.rotate_right(3);
    x0 = x0.rotate_right(13);

    store_words([x0, x1, x2, x3])
}

impl Serpent {
    pub fn new() -> Self {
        Serpent {
            key_expansion: SerpentKeyExpansion,
            round_keys: Vec::new(),
        }
    }

    fn check_block(&self, data: &[u8]) -> Result<(), CryptoError> {
        if data.len() != BLOCK_SIZE {
            return Err(CryptoError::InvalidInputLength(
                "Serpent operates on 16-byte blocks",
            ));
        }
        assert!(!self.round_keys.is_empty(), "key not set");
        Ok(())
    }
}

impl Default for Serpent {
    fn default() -> Self {
        Self::new()
    }
}

impl CipherAlgorithm for Serpent {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.check_block(data)?;

        let mut block = permute_bits(data, &IP_TABLE, false, 0);

        for round in 0..ROUNDS {
            block = xor_bytes(&block, &self.round_keys[round]);
            apply_sboxes(&mut block, round, false);
            if round != ROUNDS - 1 {
                block = linear_transformation(&block);
            }
        }

        block = xor_bytes(&block, &self.round_keys[ROUNDS]);
        Ok(permute_bits(&block, &FP_TABLE, false, 0))
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.check_block(data)?;

        let mut block = permute_bits(data, &IP_TABLE, false, 0);

        block = xor_bytes(&block, &self.round_keys[ROUNDS]);

        for round in (0..ROUNDS).rev() {
            if round != ROUNDS - 1 {
                block = inverse_linear_transformation(&block);
            }
            apply_sboxes(&mut block, round, true);
            block = xor_bytes(&block, &self.round_keys[round]);
        }

        Ok(permute_bits(&block, &FP_TABLE, false, 0))
    }
}

impl SymmetricCipher for Serpent {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CryptoError> {
        self.round_keys = self.key_expansion.generate_round_keys(key)?;
        Ok(())
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
