use crate::crypto::error::CryptoError;
use bitvec::prelude::BitVec;

/// Applies a bit permutation table to `data`.
///
/// Output bit `i` (packed MSB-first) is input bit `table[i] - start_index`.
/// Input bits are addressed MSB-first within each byte unless
/// `reverse_bit_order` is set, in which case the table positions count from
/// the least significant bit. `start_index` is 1 for tables published
/// 1-indexed (DES) and 0 for 0-indexed ones (Serpent). Positions past the
/// end of `data` read as zero.
pub fn permute_bits(
    data: &[u8],
    table: &[u16],
    reverse_bit_order: bool,
    start_index: usize,
) -> Vec<u8> {
    let bits = bytes_to_bits(data);
    let mut permuted = BitVec::with_capacity(table.len());

    for &pos in table {
        let pos = (pos as usize).saturating_sub(start_index);
        let index = if reverse_bit_order {
            (pos / 8) * 8 + (7 - pos % 8)
        } else {
            pos
        };
        permuted.push(index < bits.len() && bits[index]);
    }

    bits_to_bytes(&permuted)
}

/// Byte-wise XOR truncated to the shorter operand. Chaining callers always
/// pass equal-length blocks; the truncation handles an IV longer than one
/// block.
pub fn xor_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

/// 6-byte to 4-byte S-box substitution: eight 6-bit groups, row from the
/// outer bits, column from the middle four, each mapped to a 4-bit value.
pub fn substitute(data: &[u8], sboxes: &[[[u8; 16]; 4]; 8]) -> Result<Vec<u8>, CryptoError> {
    if data.len() != 6 {
        return Err(CryptoError::InvalidInputLength(
            "substitution expects a 6-byte block",
        ));
    }

    let mut block: u64 = 0;
    for &byte in data {
        block = (block << 8) | u64::from(byte);
    }

    let mut result = vec![0u8; 4];
    for i in 0..8 {
        let six_bits = ((block >> (6 * (7 - i))) & 0x3F) as usize;
        let row = ((six_bits >> 4) & 0x2) | (six_bits & 0x1);
        let col = (six_bits >> 1) & 0xF;
        let value = sboxes[i][row][col];
        result[i / 2] |= if i % 2 != 0 { value } else { value << 4 };
    }
    Ok(result)
}

pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

pub fn bits_to_bytes(bits: &BitVec) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));

    for chunk in bits.chunks(8) {
        let mut byte = 0;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}
