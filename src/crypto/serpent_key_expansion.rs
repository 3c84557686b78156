use crate::crypto::error::CryptoError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::serpent_tables::apply_sbox_word;

const PHI: u32 = 0x9E37_79B9;
const S_BOX_ORDER: [usize; 8] = [3, 2, 1, 0, 7, 6, 5, 4];

pub struct SerpentKeyExpansion;

impl KeyExpansion for SerpentKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CryptoError> {
        if key.len() > 32 {
            return Err(CryptoError::InvalidKeyLength {
                algorithm: "Serpent",
                actual: key.len(),
            });
        }

        // short keys get a single 0x80 marker byte, the rest stays zero
        let mut padded = [0u8; 32];
        padded[..key.len()].copy_from_slice(key);
        if key.len() < 32 {
            padded[key.len()] = 0x80;
        }

        let mut w = [0u32; 132];
        for i in 0..8 {
            w[i] = u32::from_le_bytes(padded[4 * i..4 * i + 4].try_into().unwrap());
        }
        for i in 8..132 {
            w[i] = (w[i - 8] ^ w[i - 5] ^ w[i - 3] ^ w[i - 1] ^ PHI ^ i as u32).rotate_left(11);
        }

        let mut round_keys = Vec::with_capacity(33);
        for block in 0..33 {
            let sbox_index = S_BOX_ORDER[block % 8];
            let mut bytes = Vec::with_capacity(16);
            for i in 0..4 {
                let word = apply_sbox_word(w[block * 4 + i], sbox_index);
                bytes.extend_from_slice(&word.to_le_bytes());
            }
            round_keys.push(bytes);
        }

        Ok(round_keys)
    }
}
