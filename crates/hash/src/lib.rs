//! Prefix-domain-separated hashing for Streamlined NTRU Prime.
//!
//! Every hash in sntrup761 is `Hash_b(x)`: the first [`HASH_BYTES`] bytes of
//! SHA-512 over the single domain byte `b` followed by `x`. Distinct domain
//! bytes keep the public-key cache, plaintext digest, confirmation and session
//! keys independent even when their inputs are related.

#![no_std]
#![deny(unsafe_code)]

mod sha512;

pub use sha512::{hash_prefix, hash_prefix_parts};

/// Output length of every prefix hash.
pub const HASH_BYTES: usize = 32;

/// Session key on rejection.
pub const DOMAIN_REJECT: u8 = 0;
/// Session key on acceptance.
pub const DOMAIN_SESSION: u8 = 1;
/// Confirmation tag appended to ciphertexts.
pub const DOMAIN_CONFIRM: u8 = 2;
/// Digest of an encoded plaintext.
pub const DOMAIN_PLAINTEXT: u8 = 3;
/// Cached digest of a public key.
pub const DOMAIN_PUBLIC_KEY: u8 = 4;
