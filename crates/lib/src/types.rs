//! Key, ciphertext, and shared-secret newtypes with RAII zeroization.
//!
//! Secret keys and ciphertexts are `#[repr(C)]` byte-array records, so their
//! wire form is a `zerocopy` view of the struct and every section is a named
//! field.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    Error,
    params::{
        CIPHERTEXT_BYTES, CONFIRM_BYTES, HASH_BYTES, PUBLIC_KEY_BYTES, ROUNDED_BYTES,
        SECRET_KEY_BYTES, SHARED_SECRET_BYTES, SMALL_BYTES,
    },
};

fn read_exact<T: FromBytes>(bytes: &[u8], expected: usize) -> Result<T, Error> {
    T::read_from_bytes(bytes).map_err(|_| Error::InvalidLength {
        expected,
        actual: bytes.len(),
    })
}

/// sntrup761 public (encapsulation) key.
#[derive(Clone, PartialEq, Eq, FromBytes, IntoBytes, KnownLayout, Immutable)]
#[repr(transparent)]
pub struct PublicKey {
    pub(crate) bytes: [u8; PUBLIC_KEY_BYTES],
}

impl PublicKey {
    /// View the key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_BYTES] {
        &self.bytes
    }

    /// Consume the wrapper and return the inner byte array.
    #[inline]
    pub fn into_bytes(self) -> [u8; PUBLIC_KEY_BYTES] {
        self.bytes
    }
}

impl From<[u8; PUBLIC_KEY_BYTES]> for PublicKey {
    #[inline]
    fn from(bytes: [u8; PUBLIC_KEY_BYTES]) -> Self {
        Self { bytes }
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        read_exact(bytes, PUBLIC_KEY_BYTES)
    }
}

impl AsRef<[u8]> for PublicKey {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PublicKey")
            .field("len", &PUBLIC_KEY_BYTES)
            .finish_non_exhaustive()
    }
}

/// sntrup761 secret (decapsulation) key. Zeroized on drop.
///
/// Carries its own public key and that key's hash so decapsulation can
/// re-encrypt without any other input.
#[derive(Clone, FromBytes, IntoBytes, KnownLayout, Immutable, Zeroize, ZeroizeOnDrop)]
#[repr(C)]
pub struct SecretKey {
    /// Encoded short `f`.
    pub(crate) f: [u8; SMALL_BYTES],
    /// Encoded `1/g` in `R3`.
    pub(crate) ginv: [u8; SMALL_BYTES],
    pub(crate) pk: [u8; PUBLIC_KEY_BYTES],
    /// Implicit-rejection seed.
    pub(crate) rho: [u8; SMALL_BYTES],
    /// Hash of `pk`, domain 4.
    pub(crate) cache: [u8; HASH_BYTES],
}

impl SecretKey {
    /// The public key embedded in this secret key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from(self.pk)
    }

    /// View the key in its 1763-byte wire form.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_BYTES] {
        zerocopy::transmute_ref!(self)
    }
}

impl From<[u8; SECRET_KEY_BYTES]> for SecretKey {
    fn from(mut bytes: [u8; SECRET_KEY_BYTES]) -> Self {
        let sk: Self = zerocopy::transmute!(bytes);
        bytes.zeroize();
        sk
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        read_exact(bytes, SECRET_KEY_BYTES)
    }
}

impl AsRef<[u8]> for SecretKey {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        IntoBytes::as_bytes(self)
    }
}

impl core::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SecretKey")
            .field("len", &SECRET_KEY_BYTES)
            .finish_non_exhaustive()
    }
}

/// sntrup761 ciphertext: rounded encoding followed by the confirmation tag.
#[derive(Clone, PartialEq, Eq, FromBytes, IntoBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct Ciphertext {
    pub(crate) rounded: [u8; ROUNDED_BYTES],
    pub(crate) confirm: [u8; CONFIRM_BYTES],
}

impl Ciphertext {
    /// View the ciphertext in its 1039-byte wire form.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; CIPHERTEXT_BYTES] {
        zerocopy::transmute_ref!(self)
    }
}

impl From<[u8; CIPHERTEXT_BYTES]> for Ciphertext {
    #[inline]
    fn from(bytes: [u8; CIPHERTEXT_BYTES]) -> Self {
        zerocopy::transmute!(bytes)
    }
}

impl TryFrom<&[u8]> for Ciphertext {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        read_exact(bytes, CIPHERTEXT_BYTES)
    }
}

impl AsRef<[u8]> for Ciphertext {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        IntoBytes::as_bytes(self)
    }
}

impl core::fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ciphertext")
            .field("len", &CIPHERTEXT_BYTES)
            .finish_non_exhaustive()
    }
}

/// sntrup761 shared secret (32 bytes). Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    pub(crate) bytes: [u8; SHARED_SECRET_BYTES],
}

impl SharedSecret {
    #[inline]
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_BYTES] {
        &self.bytes
    }
}

impl From<[u8; SHARED_SECRET_BYTES]> for SharedSecret {
    #[inline]
    fn from(bytes: [u8; SHARED_SECRET_BYTES]) -> Self {
        Self { bytes }
    }
}

impl TryFrom<&[u8]> for SharedSecret {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        let bytes = <[u8; SHARED_SECRET_BYTES]>::try_from(bytes).map_err(|_| {
            Error::InvalidLength {
                expected: SHARED_SECRET_BYTES,
                actual: bytes.len(),
            }
        })?;
        Ok(Self { bytes })
    }
}

impl AsRef<[u8]> for SharedSecret {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}
