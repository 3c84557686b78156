use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::cipher_types::CipherMode;
use crate::crypto::error::CryptoError;
use crate::crypto::utils::xor_bytes;
use rayon::prelude::*;
use std::sync::Arc;

pub type SharedCipher = Arc<dyn SymmetricCipher + Send + Sync>;

/// A chaining strategy over whole blocks. Implementations copy the IV at
/// construction and reseed their chaining state from it on every call, so
/// `encrypt`/`decrypt` take `&self` and repeated calls are independent.
///
/// Buffers are processed in `len / block` whole blocks; a trailing
/// remainder is ignored except where documented (RandomDelta rejects it).
pub trait EncryptMode: Send + Sync {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// Builds the mode object for `mode`, binding `cipher` and the first block
/// of `iv`. Every mode except ECB requires an IV of at least one block.
pub fn make_mode(
    mode: CipherMode,
    cipher: SharedCipher,
    iv: &[u8],
) -> Result<Box<dyn EncryptMode>, CryptoError> {
    let block_length = cipher.block_size();

    if mode != CipherMode::ECB && iv.len() < block_length {
        return Err(CryptoError::InvalidInputLength(
            "IV must be at least one block long",
        ));
    }
    let iv = iv.get(..block_length).unwrap_or_default().to_vec();

    Ok(match mode {
        CipherMode::ECB => Box::new(EcbMode {
            cipher,
            block_length,
        }),
        CipherMode::CBC => Box::new(CbcMode {
            cipher,
            block_length,
            iv,
        }),
        CipherMode::PCBC => Box::new(PcbcMode {
            cipher,
            block_length,
            iv,
        }),
        CipherMode::CFB => Box::new(CfbMode {
            cipher,
            block_length,
            iv,
        }),
        CipherMode::OFB => Box::new(OfbMode {
            cipher,
            block_length,
            iv,
        }),
        CipherMode::CTR => Box::new(CtrMode {
            cipher,
            block_length,
            iv,
        }),
        CipherMode::RandomDelta => Box::new(RandomDeltaMode::new(cipher, block_length, &iv)),
    })
}

fn whole_blocks(data: &[u8], block_length: usize) -> &[u8] {
    &data[..data.len() - data.len() % block_length]
}

pub struct EcbMode {
    cipher: SharedCipher,
    block_length: usize,
}

impl EcbMode {
    fn process(&self, data: &[u8], encrypt: bool) -> Result<Vec<u8>, CryptoError> {
        let blocks = whole_blocks(data, self.block_length)
            .par_chunks(self.block_length)
            .map(|block| {
                if encrypt {
                    self.cipher.encrypt(block)
                } else {
                    self.cipher.decrypt(block)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(blocks.concat())
    }
}

impl EncryptMode for EcbMode {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.process(data, true)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.process(data, false)
    }
}

pub struct CbcMode {
    cipher: SharedCipher,
    block_length: usize,
    iv: Vec<u8>,
}

impl EncryptMode for CbcMode {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let data = whole_blocks(data, self.block_length);
        let mut result = Vec::with_capacity(data.len());
        let mut prev = self.iv.clone();

        for block in data.chunks_exact(self.block_length) {
            let xored = xor_bytes(block, &prev);
            let encrypted = self.cipher.encrypt(&xored)?;
            result.extend_from_slice(&encrypted);
            prev = encrypted;
        }
        Ok(result)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let data = whole_blocks(data, self.block_length);
        let mut result = Vec::with_capacity(data.len());

        for (i, block) in data.chunks_exact(self.block_length).enumerate() {
            // the previous value comes from the input ciphertext, never
            // from decrypted output
            let prev = if i == 0 {
                &self.iv[..]
            } else {
                &data[(i - 1) * self.block_length..i * self.block_length]
            };
            let decrypted = self.cipher.decrypt(block)?;
            result.extend_from_slice(&xor_bytes(&decrypted, prev));
        }
        Ok(result)
    }
}

pub struct PcbcMode {
    cipher: SharedCipher,
    block_length: usize,
    iv: Vec<u8>,
}

impl EncryptMode for PcbcMode {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let data = whole_blocks(data, self.block_length);
        let mut result = Vec::with_capacity(data.len());
        let mut xor_block = self.iv.clone();

        for block in data.chunks_exact(self.block_length) {
            let xor_input = xor_bytes(block, &xor_block);
            let encrypted = self.cipher.encrypt(&xor_input)?;
            xor_block = xor_bytes(&encrypted, block);
            result.extend_from_slice(&encrypted);
        }
        Ok(result)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let data = whole_blocks(data, self.block_length);
        let mut result = Vec::with_capacity(data.len());
        let mut xor_block = self.iv.clone();

        for block in data.chunks_exact(self.block_length) {
            let decrypted = self.cipher.decrypt(block)?;
            let plain = xor_bytes(&decrypted, &xor_block);
            xor_block = xor_bytes(block, &plain);
            result.extend_from_slice(&plain);
        }
        Ok(result)
    }
}

pub struct CfbMode {
    cipher: SharedCipher,
    block_length: usize,
    iv: Vec<u8>,
}

impl EncryptMode for CfbMode {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let data = whole_blocks(data, self.block_length);
        let mut result = Vec::with_capacity(data.len());
        let mut prev = self.iv.clone();

        for block in data.chunks_exact(self.block_length) {
            let encrypted = xor_bytes(block, &self.cipher.encrypt(&prev)?);
            prev = encrypted.clone();
            result.extend_from_slice(&encrypted);
        }
        Ok(result)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let data = whole_blocks(data, self.block_length);
        let mut result = Vec::with_capacity(data.len());
        let mut prev = self.iv.clone();

        for block in data.chunks_exact(self.block_length) {
            // the cipher runs in the encrypt direction on both paths
            let decrypted = xor_bytes(block, &self.cipher.encrypt(&prev)?);
            prev = block.to_vec();
            result.extend_from_slice(&decrypted);
        }
        Ok(result)
    }
}

pub struct OfbMode {
    cipher: SharedCipher,
    block_length: usize,
    iv: Vec<u8>,
}

impl OfbMode {
    fn process(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let data = whole_blocks(data, self.block_length);
        let mut result = Vec::with_capacity(data.len());
        let mut prev = self.iv.clone();

        for block in data.chunks_exact(self.block_length) {
            let keystream = self.cipher.encrypt(&prev)?;
            result.extend_from_slice(&xor_bytes(block, &keystream));
            prev = keystream;
        }
        Ok(result)
    }
}

impl EncryptMode for OfbMode {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.process(data)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.process(data)
    }
}

pub struct CtrMode {
    cipher: SharedCipher,
    block_length: usize,
    iv: Vec<u8>,
}

impl CtrMode {
    /// Counter block: high half fixed from the IV, low half the big-endian
    /// block index.
    fn keystream_block(&self, index: usize) -> Result<Vec<u8>, CryptoError> {
        let half = self.block_length / 2;
        let mut counter_block = vec![0u8; self.block_length];
        counter_block[..half].copy_from_slice(&self.iv[..half]);
        for j in 0..half {
            counter_block[half + j] = ((index >> ((half - 1 - j) * 8)) & 0xFF) as u8;
        }
        self.cipher.encrypt(&counter_block)
    }

    fn process(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let blocks = whole_blocks(data, self.block_length)
            .par_chunks(self.block_length)
            .enumerate()
            .map(|(i, block)| Ok(xor_bytes(block, &self.keystream_block(i)?)))
            .collect::<Result<Vec<_>, CryptoError>>()?;
        Ok(blocks.concat())
    }
}

impl EncryptMode for CtrMode {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.process(data)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.process(data)
    }
}

/// Non-standard counter-like mode: block `i` has its first 8 bytes XORed
/// with the big-endian bytes of `init + i * delta` before (after) the block
/// cipher. Not a published construction; no security claim is attached to
/// it.
pub struct RandomDeltaMode {
    cipher: SharedCipher,
    block_length: usize,
    init: u64,
    delta: u64,
}

impl RandomDeltaMode {
    fn new(cipher: SharedCipher, block_length: usize, iv: &[u8]) -> Self {
        let init = u64::from_be_bytes(iv[..8].try_into().unwrap());
        RandomDeltaMode {
            cipher,
            block_length,
            init,
            delta: 1,
        }
    }

    fn check_length(&self, data: &[u8]) -> Result<(), CryptoError> {
        if data.len() % self.block_length != 0 {
            return Err(CryptoError::InvalidInputLength(
                "RandomDelta requires a whole number of blocks",
            ));
        }
        Ok(())
    }

    fn delta_bytes(&self, index: usize) -> [u8; 8] {
        self.init
            .wrapping_add(self.delta.wrapping_mul(index as u64))
            .to_be_bytes()
    }
}

impl EncryptMode for RandomDeltaMode {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.check_length(data)?;
        let mut result = Vec::with_capacity(data.len());

        for (i, chunk) in data.chunks_exact(self.block_length).enumerate() {
            let mut block = chunk.to_vec();
            for (byte, delta) in block.iter_mut().zip(self.delta_bytes(i)) {
                *byte ^= delta;
            }
            result.extend_from_slice(&self.cipher.encrypt(&block)?);
        }
        Ok(result)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.check_length(data)?;
        let mut result = Vec::with_capacity(data.len());

        for (i, chunk) in data.chunks_exact(self.block_length).enumerate() {
            let mut decrypted = self.cipher.decrypt(chunk)?;
            for (byte, delta) in decrypted.iter_mut().zip(self.delta_bytes(i)) {
                *byte ^= delta;
            }
            result.extend_from_slice(&decrypted);
        }
        Ok(result)
    }
}
