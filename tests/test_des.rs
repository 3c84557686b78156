use cipher_engine::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use cipher_engine::crypto::des::Des;
use cipher_engine::crypto::des_key_expansion::DesKeyExpansion;
use cipher_engine::crypto::error::CryptoError;
use cipher_engine::crypto::key_expansion::KeyExpansion;
use hex_literal::hex;

#[test]
fn test_des_known_vector() {
    let key = hex!("13 34 57 79 9B BC DF F1");
    let plaintext = hex!("01 23 45 67 89 AB CD EF");
    let expected = hex!("85 E8 13 54 0F 0A B4 05");

    let mut des = Des::new();
    des.set_key(&key).unwrap();

    let ciphertext = des.encrypt(&plaintext).unwrap();
    assert_eq!(ciphertext, expected);

    let decrypted = des.decrypt(&ciphertext).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_des_roundtrip() {
    let mut des = Des::new();
    des.set_key(b"8bytekey").unwrap();

    let block = hex!("00 11 22 33 44 55 66 77");
    let ciphertext = des.encrypt(&block).unwrap();
    assert_ne!(ciphertext, block.to_vec());
    assert_eq!(des.decrypt(&ciphertext).unwrap(), block);
}

#[test]
fn test_des_schedule_has_16_six_byte_keys() {
    let keys = DesKeyExpansion
        .generate_round_keys(&hex!("0123456789ABCDEF"))
        .unwrap();
    assert_eq!(keys.len(), 16);
    assert!(keys.iter().all(|k| k.len() == 6));
}

#[test]
fn test_des_schedule_is_deterministic() {
    let key = hex!("0123456789ABCDEF");
    let first = DesKeyExpansion.generate_round_keys(&key).unwrap();
    let second = DesKeyExpansion.generate_round_keys(&key).unwrap();
    assert_eq!(first, second);

    let other = DesKeyExpansion
        .generate_round_keys(&hex!("FEDCBA9876543210"))
        .unwrap();
    assert_ne!(first, other);
}

#[test]
fn test_des_ignores_key_bytes_past_the_first_eight() {
    let short_key = hex!("01 23 45 67 82 AB CD EF");
    let long_key = hex!("01 23 45 67 82 AB CD EF 01 23 45 67 82 AB CD EF");
    let block = hex!("00 01 02 03 04 05 06 07");

    let mut des_short = Des::new();
    des_short.set_key(&short_key).unwrap();
    let mut des_long = Des::new();
    des_long.set_key(&long_key).unwrap();

    assert_eq!(
        des_short.encrypt(&block).unwrap(),
        des_long.encrypt(&block).unwrap()
    );
}

#[test]
fn test_des_rejects_short_key() {
    let mut des = Des::new();
    assert_eq!(
        des.set_key(&[0u8; 4]),
        Err(CryptoError::InvalidKeyLength {
            algorithm: "DES",
            actual: 4
        })
    );
}

#[test]
fn test_des_rejects_wrong_block_length() {
    let mut des = Des::new();
    des.set_key(b"8bytekey").unwrap();
    assert!(des.encrypt(&[0u8; 7]).is_err());
    assert!(des.decrypt(&[0u8; 16]).is_err());
}
