use cipher_engine::crypto::cipher_types::PaddingMode;
use cipher_engine::crypto::error::CryptoError;
use cipher_engine::crypto::paddings::{apply_padding, remove_padding};

const BLOCK: usize = 8;

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 250 + 1) as u8).collect()
}

#[test]
fn test_apply_zeros() {
    let padded = apply_padding(&[1, 2, 3], BLOCK, PaddingMode::Zeros);
    assert_eq!(padded, vec![1, 2, 3, 0, 0, 0, 0, 0]);
}

#[test]
fn test_apply_pkcs7() {
    let padded = apply_padding(&[1, 2, 3], BLOCK, PaddingMode::PKCS7);
    assert_eq!(padded, vec![1, 2, 3, 5, 5, 5, 5, 5]);
}

#[test]
fn test_apply_ansi_x923() {
    let padded = apply_padding(&[1, 2, 3], BLOCK, PaddingMode::ANSI_X923);
    assert_eq!(padded, vec![1, 2, 3, 0, 0, 0, 0, 5]);
}

#[test]
fn test_apply_iso10126() {
    let padded = apply_padding(&[1, 2, 3], BLOCK, PaddingMode::ISO10126);
    assert_eq!(padded.len(), BLOCK);
    assert_eq!(&padded[..3], &[1, 2, 3]);
    assert_eq!(padded[BLOCK - 1], 5);
}

#[test]
fn test_aligned_input_is_left_unpadded() {
    // no full padding block is appended on aligned input
    for padding in [
        PaddingMode::Zeros,
        PaddingMode::ANSI_X923,
        PaddingMode::PKCS7,
        PaddingMode::ISO10126,
    ] {
        let data = sample(BLOCK);
        assert_eq!(apply_padding(&data, BLOCK, padding), data);
        assert_eq!(apply_padding(&[], BLOCK, padding), Vec::<u8>::new());
    }
}

#[test]
fn test_roundtrip_unaligned_lengths() {
    for padding in [
        PaddingMode::Zeros,
        PaddingMode::ANSI_X923,
        PaddingMode::PKCS7,
        PaddingMode::ISO10126,
    ] {
        for len in 0..=10 * BLOCK {
            if len % BLOCK == 0 && len != 0 {
                continue;
            }
            let data = sample(len);
            let padded = apply_padding(&data, BLOCK, padding);
            assert_eq!(padded.len() % BLOCK, 0);
            assert_eq!(
                remove_padding(&padded, padding).unwrap(),
                data,
                "padding {:?} length {}",
                padding,
                len
            );
        }
    }
}

#[test]
fn test_roundtrip_aligned_lengths_with_zero_tail() {
    // aligned input skips padding entirely, so the count-byte schemes read
    // the last plaintext byte on removal; a zero tail byte strips nothing
    for padding in [
        PaddingMode::ANSI_X923,
        PaddingMode::PKCS7,
        PaddingMode::ISO10126,
    ] {
        for len in (BLOCK..=10 * BLOCK).step_by(BLOCK) {
            let mut data = sample(len);
            *data.last_mut().unwrap() = 0;
            let padded = apply_padding(&data, BLOCK, padding);
            assert_eq!(remove_padding(&padded, padding).unwrap(), data);
        }
    }
}

#[test]
fn test_zeros_removal_is_ambiguous_for_zero_tails() {
    // trailing plaintext zeros are indistinguishable from the pad and lost
    let data = vec![1, 2, 0, 0];
    let padded = apply_padding(&data, BLOCK, PaddingMode::Zeros);
    assert_eq!(remove_padding(&padded, PaddingMode::Zeros).unwrap(), vec![1, 2]);
}

#[test]
fn test_zeros_removal_of_all_zero_buffer() {
    let removed = remove_padding(&[0u8; 8], PaddingMode::Zeros).unwrap();
    assert_eq!(removed, Vec::<u8>::new());
}

#[test]
fn test_remove_empty_buffer() {
    for padding in [
        PaddingMode::Zeros,
        PaddingMode::ANSI_X923,
        PaddingMode::PKCS7,
        PaddingMode::ISO10126,
    ] {
        assert_eq!(remove_padding(&[], padding).unwrap(), Vec::<u8>::new());
    }
}

#[test]
fn test_malformed_count_byte_is_rejected() {
    for padding in [
        PaddingMode::ANSI_X923,
        PaddingMode::PKCS7,
        PaddingMode::ISO10126,
    ] {
        assert_eq!(
            remove_padding(&[1, 2, 3, 200], padding),
            Err(CryptoError::InvalidPadding)
        );
    }
}
