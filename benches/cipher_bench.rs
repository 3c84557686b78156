use cipher_engine::crypto::cipher_context::CipherContext;
use cipher_engine::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use cipher_engine::crypto::cipher_types::{CipherMode, EncryptionAlgorithm, PaddingMode};
use cipher_engine::crypto::des::Des;
use cipher_engine::crypto::mars::Mars;
use cipher_engine::crypto::serpent::Serpent;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_single_blocks(c: &mut Criterion) {
    let mut des = Des::new();
    des.set_key(b"8bytekey").unwrap();
    let des_block = [0x42u8; 8];
    c.bench_function("des_encrypt_block", |b| {
        b.iter(|| des.encrypt(black_box(&des_block)).unwrap())
    });

    let mut mars = Mars::new();
    mars.set_key(&[0x42u8; 16]).unwrap();
    let wide_block = [0x42u8; 16];
    c.bench_function("mars_encrypt_block", |b| {
        b.iter(|| mars.encrypt(black_box(&wide_block)).unwrap())
    });

    let mut serpent = Serpent::new();
    serpent.set_key(&[0x42u8; 16]).unwrap();
    c.bench_function("serpent_encrypt_block", |b| {
        b.iter(|| serpent.encrypt(black_box(&wide_block)).unwrap())
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let key = [0x23u8; 16];
    let iv = [0x13u8; 16];
    let data = vec![0xABu8; 64 * 1024];

    for (name, mode) in [
        ("mars_ecb_encrypt_64k", CipherMode::ECB),
        ("mars_cbc_encrypt_64k", CipherMode::CBC),
        ("mars_ctr_encrypt_64k", CipherMode::CTR),
    ] {
        let context =
            CipherContext::new(&key, EncryptionAlgorithm::MARS, mode, PaddingMode::PKCS7, &iv)
                .unwrap();
        c.bench_function(name, |b| {
            b.iter(|| context.encrypt(black_box(&data)).unwrap())
        });
    }
}

criterion_group!(benches, bench_single_blocks, bench_pipeline);
criterion_main!(benches);
