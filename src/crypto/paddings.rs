use crate::crypto::cipher_types::PaddingMode;
use crate::crypto::error::CryptoError;
use rand::RngCore;

/// Rounds `data` up to a multiple of `block_size`. Already-aligned input is
/// returned unchanged, including for PKCS7: no full padding block is ever
/// appended.
pub fn apply_padding(data: &[u8], block_size: usize, padding: PaddingMode) -> Vec<u8> {
    let padding_length = if data.len() % block_size == 0 {
        0
    } else {
        block_size - data.len() % block_size
    };

    let mut result = data.to_vec();
    if padding_length == 0 {
        return result;
    }

    match padding {
        PaddingMode::Zeros => result.resize(data.len() + padding_length, 0),
        PaddingMode::ANSI_X923 => {
            result.resize(data.len() + padding_length - 1, 0);
            result.push(padding_length as u8);
        }
        PaddingMode::PKCS7 => {
            result.extend(vec![padding_length as u8; padding_length]);
        }
        PaddingMode::ISO10126 => {
            let mut tail = vec![0u8; padding_length - 1];
            rand::rng().fill_bytes(&mut tail);
            result.extend_from_slice(&tail);
            result.push(padding_length as u8);
        }
    }
    result
}

/// Strips the padding applied by [`apply_padding`].
///
/// Zeros removal scans backward to the last non-zero byte; plaintext that
/// genuinely ends in zero bytes loses them, and an all-zero buffer strips
/// to empty. That ambiguity is inherent to the scheme. For the count-byte
/// schemes a count larger than the buffer is rejected as `InvalidPadding`
/// instead of underflowing.
pub fn remove_padding(data: &[u8], padding: PaddingMode) -> Result<Vec<u8>, CryptoError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    match padding {
        PaddingMode::Zeros => {
            let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
            Ok(data[..end].to_vec())
        }
        PaddingMode::ANSI_X923 | PaddingMode::PKCS7 | PaddingMode::ISO10126 => {
            let pad_length = data[data.len() - 1] as usize;
            if pad_length > data.len() {
                return Err(CryptoError::InvalidPadding);
            }
            Ok(data[..data.len() - pad_length].to_vec())
        }
    }
}
