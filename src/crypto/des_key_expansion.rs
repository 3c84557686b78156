use crate::crypto::des_tables::{CYCLE_SHIFTS, PC1, PC2};
use crate::crypto::error::CryptoError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::permute_bits;

const HALF_KEY_BITS: u32 = 28;

pub struct DesKeyExpansion;

/// Top 28 bits of the PC-1 output.
fn make_c(p_key: &[u8]) -> u32 {
    (u32::from(p_key[0]) << 20)
        | (u32::from(p_key[1]) << 12)
        | (u32::from(p_key[2]) << 4)
        | (u32::from(p_key[3]) >> 4)
}

/// Low 28 bits of the PC-1 output.
fn make_d(p_key: &[u8]) -> u32 {
    ((u32::from(p_key[3]) & 0x0F) << 24)
        | (u32::from(p_key[4]) << 16)
        | (u32::from(p_key[5]) << 8)
        | u32::from(p_key[6])
}

/// Repacks the rotated halves into 7 big-endian bytes for PC-2.
fn make_cd(c: u32, d: u32) -> [u8; 7] {
    let cd = (u64::from(c) << HALF_KEY_BITS) | u64::from(d);
    let mut bytes = [0u8; 7];
    for (j, byte) in bytes.iter_mut().enumerate() {
        *byte = ((cd >> ((6 - j) * 8)) & 0xFF) as u8;
    }
    bytes
}

fn left_cycle_shift_28(value: u32, shift: u32) -> u32 {
    ((value << shift) | (value >> (HALF_KEY_BITS - shift))) & ((1 << HALF_KEY_BITS) - 1)
}

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CryptoError> {
        // PC-1 consults key bits 1..=64, so anything past the first 8 bytes
        // is ignored.
        if key.len() < 8 {
            return Err(CryptoError::InvalidKeyLength {
                algorithm: "DES",
                actual: key.len(),
            });
        }

        let permuted = permute_bits(key, &PC1, false, 1);
        let mut c = make_c(&permuted);
        let mut d = make_d(&permuted);

        let mut round_keys = Vec::with_capacity(CYCLE_SHIFTS.len());
        for &shift in CYCLE_SHIFTS.iter() {
            c = left_cycle_shift_28(c, shift);
            d = left_cycle_shift_28(d, shift);
            let cd = make_cd(c, d);
            round_keys.push(permute_bits(&cd, &PC2, false, 1));
        }

        Ok(round_keys)
    }
}
