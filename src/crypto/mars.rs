use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::error::CryptoError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::mars_key_expansion::MarsKeyExpansion;
use crate::crypto::mars_tables::S;

const BLOCK_SIZE: usize = 16;

/// Type-3 Feistel core with mixing wrappers: 8 forward-mixing rounds,
/// 16 keyed core rounds, 8 backward-mixing rounds, with additive whitening
/// on both ends. Words are little-endian and all arithmetic wraps mod 2^32.
pub struct Mars {
    key_expansion: MarsKeyExpansion,
    round_keys: Vec<Vec<u8>>,
}

fn s0(x: u32) -> u32 {
    S[(x & 0xFF) as usize]
}

fn s1(x: u32) -> u32 {
    S[256 + (x & 0xFF) as usize]
}

/// Keyed E-function of the core rounds: returns the (L, M, R) tuple routed
/// into three of the four data words.
fn e_function(a: u32, first_key: u32, second_key: u32) -> (u32, u32, u32) {
    let r = a.rotate_left(13).wrapping_mul(first_key).rotate_left(10);
    let m = a.wrapping_add(second_key).rotate_left((r >> 5) & 0x1F);
    let l = (S[(m & 0x1FF) as usize] ^ (r >> 5) ^ r).rotate_left(r & 0x1F);
    (l, m, r)
}

impl Mars {
    pub fn new() -> Self {
        Mars {
            key_expansion: MarsKeyExpansion,
            round_keys: Vec::new(),
        }
    }

    fn check_block(&self, data: &[u8]) -> Result<(), CryptoError> {
        if data.len() != BLOCK_SIZE {
            return Err(CryptoError::InvalidInputLength(
                "MARS operates on 16-byte blocks",
            ));
        }
        assert!(!self.round_keys.is_empty(), "key not set");
        Ok(())
    }

    fn round_words(&self) -> Vec<u32> {
        self.round_keys
            .iter()
            .map(|rk| u32::from_le_bytes(rk[..4].try_into().unwrap()))
            .collect()
    }
}

impl Default for Mars {
    fn default() -> Self {
        Self::new()
    }
}

fn load_words(data: &[u8]) -> (u32, u32, u32, u32) {
    (
        u32::from_le_bytes(data[0..4].try_into().unwrap()),
        u32::from_le_bytes(data[4..8].try_into().unwrap()),
        u32::from_le_bytes(data[8..12].try_into().unwrap()),
        u32::from_le_bytes(data[12..16].try_into().unwrap()),
    )
}

fn store_words(a: u32, b: u32, c: u32, d: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(BLOCK_SIZE);
    out.extend_from_slice(&a.to_le_bytes());
    out.extend_from_slice(&b.to_le_bytes());
    out.extend_from_slice(&c.to_le_bytes());
    out.extend_from_slice(&d.to_le_bytes());
    out
}

impl CipherAlgorithm for Mars {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.check_block(data)?;
        let k = self.round_words();

        let (mut a, mut b, mut c, mut d) = load_words(data);
        a = a.wrapping_add(k[0]);
        b = b.wrapping_add(k[1]);
        c = c.wrapping_add(k[2]);
        d = d.wrapping_add(k[3]);

        // forward mixing
        for i in 0..8 {
            b = (b ^ s0(a)).wrapping_add(s1(a.rotate_right(8)));
            c = c.wrapping_add(s0(a.rotate_right(16)));
            d ^= s1(a.rotate_right(24));

            a = a.rotate_right(24);

            if i == 1 || i == 5 {
                a = a.wrapping_add(b);
            } else if i == 0 || i == 4 {
                a = a.wrapping_add(d);
            }

            let tmp = d;
            d = c;
            c = b;
            b = a;
            a = tmp;
        }

        // cryptographic core
        for i in 0..16 {
            let first_key = k[2 * i + 5];
            let second_key = k[2 * i + 4];
            let (l, m, r) = e_function(a, first_key, second_key);

            c = c.wrapping_add(m);
            if i < 8 {
                d = d.wrapping_add(r);
                b = b.wrapping_add(l);
            } else {
                d = d.wrapping_add(l);
                b = b.wrapping_add(r);
            }

            let tmp = a;
            a = b;
            b = c;
            c = d;
            d = tmp.rotate_left(13);
        }

        // backward mixing
        for i in 0..8 {
            if i == 3 || i == 7 {
                a = a.wrapping_sub(b);
            }
            if i == 2 || i == 6 {
                a = a.wrapping_sub(d);
            }

            b ^= s1(a);
            c = c.wrapping_sub(s0(a.rotate_left(8)));
            d = d.wrapping_sub(s1(a.rotate_left(16))) ^ s0(a.rotate_left(24));

            let tmp = a;
            a = b;
            b = c;
            c = d;
            d = tmp.rotate_left(24);
        }

        a = a.wrapping_sub(k[36]);
        b = b.wrapping_sub(k[37]);
        c = c.wrapping_sub(k[38]);
        d = d.wrapping_sub(k[39]);

        Ok(store_words(a, b, c, d))
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.check_block(data)?;
        let k = self.round_words();

        let (mut a, mut b, mut c, mut d) = load_words(data);
        a = a.wrapping_add(k[36]);
        b = b.wrapping_add(k[37]);
        c = c.wrapping_add(k[38]);
        d = d.wrapping_add(k[39]);

        // inverse backward mixing
        for i in (0..8).rev() {
            let tmp = d.rotate_right(24);
            d = c;
            c = b;
            b = a;
            a = tmp;

            d = (d ^ s0(a.rotate_left(24))).wrapping_add(s1(a.rotate_left(16)));
            c = c.wrapping_add(s0(a.rotate_left(8)));
            b ^= s1(a);

            if i == 3 || i == 7 {
                a = a.wrapping_add(b);
            } else if i == 2 || i == 6 {
                a = a.wrapping_add(d);
            }
        }

        // inverse core rounds
        for i in (0..16).rev() {
            let tmp = d.rotate_right(13);
            d = c;
            c = b;
            b = a;
            a = tmp;

            let first_key = k[2 * i + 5];
            let second_key = k[2 * i + 4];
            let (l, m, r) = e_function(a, first_key, second_key);

            if i < 8 {
                b = b.wrapping_sub(l);
                d = d.wrapping_sub(r);
            } else {
                b = b.wrapping_sub(r);
                d = d.wrapping_sub(l);
            }
            c = c.wrapping_sub(m);
        }

        // inverse forward mixing
        for i in (0..8).rev() {
            let tmp = a;
            a = b;
            b = c;
            c = d;
            d = tmp;

            if i == 1 || i == 5 {
                a = a.wrapping_sub(b);
            } else if i == 0 || i == 4 {
                a = a.wrapping_sub(d);
            }

            a = a.rotate_left(24);

            d ^= s1(a.rotate_right(24));
            c = c.wrapping_sub(s0(a.rotate_right(16)));
            b = b.wrapping_sub(s1(a.rotate_right(8))) ^ s0(a);
        }

        a = a.wrapping_sub(k[0]);
        b = b.wrapping_sub(k[1]);
        c = c.wrapping_sub(k[2]);
        d = d.wrapping_sub(k[3]);

        Ok(store_words(a, b, c, d))
    }
}

impl SymmetricCipher for Mars {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CryptoError> {
        self.round_keys = self.key_expansion.generate_round_keys(key)?;
        Ok(())
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
