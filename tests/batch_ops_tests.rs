//! tests/batch_ops_tests.rs
//! Parallel batch encryption/decryption (feature `batch-ops`)

#![cfg(feature = "batch-ops")]

mod common;
use common::{pattern, zero_key};

use rclone_crypt::{decrypt_batch, encrypt_batch, read_header, CryptError, DataKey};
use std::io::Cursor;

#[test]
fn batch_roundtrip_sanity_check() {
    let key = zero_key();
    let data = [b"hello parallel world"; 4];

    let mut encrypted = data.map(|d| (Cursor::new(d.to_vec()), Vec::<u8>::new()));
    encrypt_batch(&mut encrypted, &key).unwrap();

    let mut decrypted = encrypted
        .into_iter()
        .map(|(_, buf)| (Cursor::new(buf), Vec::<u8>::new()))
        .collect::<Vec<_>>();
    decrypt_batch(&mut decrypted, &key).unwrap();

    let results: Vec<_> = decrypted.into_iter().map(|(_, buf)| buf).collect();
    assert_eq!(results, data.as_ref());
}

#[test]
fn batch_empty_batch() {
    let mut batch: Vec<(Cursor<Vec<u8>>, Vec<u8>)> = Vec::new();
    encrypt_batch(&mut batch, &zero_key()).unwrap();
    assert!(batch.is_empty());
}

#[test]
fn batch_different_file_sizes() {
    let key = DataKey::new([0x5A; 32]);
    let data = vec![
        vec![],
        pattern(1),
        pattern(16),
        pattern(17),
        pattern(65_536),
        pattern(65_537),
        pattern(200_000),
    ];

    let mut encrypted: Vec<_> = data
        .iter()
        .map(|d| (Cursor::new(d.clone()), Vec::<u8>::new()))
        .collect();
    encrypt_batch(&mut encrypted, &key).unwrap();

    let mut decrypted: Vec<_> = encrypted
        .iter()
        .map(|(_, buf)| (Cursor::new(buf.clone()), Vec::<u8>::new()))
        .collect();
    decrypt_batch(&mut decrypted, &key).unwrap();

    let results: Vec<_> = decrypted.into_iter().map(|(_, buf)| buf).collect();
    assert_eq!(results, data);
}

#[test]
fn batch_containers_get_independent_nonces() {
    let key = zero_key();
    let mut batch: Vec<_> = (0..8)
        .map(|_| (Cursor::new(b"same".to_vec()), Vec::<u8>::new()))
        .collect();
    encrypt_batch(&mut batch, &key).unwrap();

    let mut nonces: Vec<_> = batch
        .iter()
        .map(|(_, c)| read_header(&mut Cursor::new(c)).unwrap().nonce)
        .collect();
    nonces.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
    nonces.dedup();
    assert_eq!(nonces.len(), 8);
}

#[test]
fn batch_decrypt_reports_tampered_member() {
    let key = zero_key();
    let mut encrypted: Vec<_> = (0..3)
        .map(|i| (Cursor::new(pattern(100 + i)), Vec::<u8>::new()))
        .collect();
    encrypt_batch(&mut encrypted, &key).unwrap();

    let mut decrypted: Vec<_> = encrypted
        .into_iter()
        .map(|(_, buf)| (Cursor::new(buf), Vec::<u8>::new()))
        .collect();
    let last = decrypted[1].0.get_ref().len() - 1;
    decrypted[1].0.get_mut()[last] ^= 0x01;

    let err = decrypt_batch(&mut decrypted, &key).unwrap_err();
    assert!(matches!(err, CryptError::Authentication), "{err:?}");
}
