use crate::crypto::error::CryptoError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::mars_tables::{B, S};

pub struct MarsKeyExpansion;

/// Propagates ones upward from the lowest set bit of `x`.
fn compute_mask(x: u32) -> u32 {
    for i in 0..32 {
        if x & (1u32 << i) != 0 {
            return 0xFFFF_FFFFu32 << i;
        }
    }
    0
}

impl KeyExpansion for MarsKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CryptoError> {
        if key.len() % 4 != 0 || !(16..=56).contains(&key.len()) {
            return Err(CryptoError::InvalidKeyLength {
                algorithm: "MARS",
                actual: key.len(),
            });
        }

        let n = key.len() / 4;
        let mut t = [0u32; 15];
        for (i, word) in key.chunks_exact(4).enumerate() {
            t[i] = u32::from_le_bytes(word.try_into().unwrap());
        }
        t[n] = n as u32;

        let mut k = [0u32; 40];
        for j in 0..4u32 {
            // linear key-word expansion
            for i in 0..15 {
                t[i] ^= (t[(i + 8) % 15] ^ t[(i + 13) % 15]).rotate_left(3) ^ (4 * i as u32 + j);
            }

            // S-box based stirring
            for _ in 0..4 {
                for i in 0..15 {
                    let s_index = (t[(i + 14) % 15] & 0x1FF) as usize;
                    t[i] = t[i].wrapping_add(S[s_index]).rotate_left(9);
                }
            }

            // store the next ten key words
            for i in 0..10 {
                k[10 * j as usize + i] = t[(4 * i) % 15];
            }
        }

        // fix the multiplication keys: force the low two bits, then blend in
        // a rotated masking constant
        for i in (5..=35).step_by(2) {
            let j = (k[i] & 0x3) as usize;
            let w = k[i] | 0x3;
            let r = k[i - 1] & 0x1F;
            let p = B[j].rotate_left(r);
            let m = compute_mask(w);
            k[i] = w ^ (p & m);
        }

        Ok(k.iter().map(|word| word.to_le_bytes().to_vec()).collect())
    }
}
