//! sntrup761 IND-CCA2 key encapsulation with implicit rejection.
//!
//! The ciphertext carries a confirmation hash of the plaintext and public
//! key. Decapsulation re-encrypts the recovered plaintext and compares the
//! whole ciphertext in constant time; on mismatch the session key is derived
//! from the secret seed `rho` under a different domain byte.

use ctutils::{CtEq, CtSelect};
use rand_core::{CryptoRng, TryCryptoRng};
use sntrup_hash::{DOMAIN_REJECT, DOMAIN_SESSION};
use tracing::instrument;
use zeroize::Zeroize;

use crate::{
    Error,
    hash::{hash_cache, hash_confirm, hash_session},
    math::R3,
    params::{HASH_BYTES, PUBLIC_KEY_BYTES, SMALL_BYTES},
    pke, random,
    types::{Ciphertext, PublicKey, SecretKey, SharedSecret},
};

/// Encrypt `r` and attach its confirmation tag. Also returns the encoding of
/// `r`, which the caller must wipe.
fn hide(
    r: &R3, pk: &[u8; PUBLIC_KEY_BYTES], cache: &[u8; HASH_BYTES],
) -> (Ciphertext, [u8; SMALL_BYTES]) {
    let r_enc = r.to_bytes();
    let ct = Ciphertext {
        rounded: pke::encrypt_bytes(r, pk),
        confirm: hash_confirm(&r_enc, cache),
    };
    (ct, r_enc)
}

fn keypair_inner<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
) -> Result<(PublicKey, SecretKey), R::Error> {
    let keys = pke::keygen_bytes(rng)?;
    let rho = random::rho(rng)?;
    let sk = SecretKey {
        f: keys.f,
        ginv: keys.ginv,
        pk: keys.pk,
        rho,
        cache: hash_cache(&keys.pk),
    };
    Ok((PublicKey::from(keys.pk), sk))
}

fn encapsulate_inner<R: TryCryptoRng + ?Sized>(
    pk: &PublicKey, rng: &mut R,
) -> Result<(Ciphertext, SharedSecret), R::Error> {
    let mut r = random::short_random(rng)?;
    let cache = hash_cache(pk.as_bytes());
    let (ct, mut r_enc) = hide(&r, pk.as_bytes(), &cache);
    let ss = hash_session(DOMAIN_SESSION, &r_enc, ct.as_bytes());

    r.zeroize();
    r_enc.zeroize();
    Ok((ct, SharedSecret::from(ss)))
}

/// Randomized key generation.
#[instrument(level = "debug", skip_all)]
pub fn keypair(rng: &mut impl CryptoRng) -> (PublicKey, SecretKey) {
    let Ok(keys) = keypair_inner(rng);
    keys
}

/// Key generation over a fallible random source.
///
/// # Errors
///
/// [`Error::RandomSource`] if `rng` fails; nothing partial is returned.
#[instrument(level = "debug", skip_all, err)]
pub fn try_keypair<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
) -> Result<(PublicKey, SecretKey), Error> {
    keypair_inner(rng).map_err(|e| {
        tracing::debug!(error = ?e, "random source failed during key generation");
        Error::RandomSource
    })
}

/// Randomized encapsulation.
#[instrument(level = "debug", skip_all)]
pub fn encapsulate(pk: &PublicKey, rng: &mut impl CryptoRng) -> (Ciphertext, SharedSecret) {
    let Ok(out) = encapsulate_inner(pk, rng);
    out
}

/// Encapsulation over a fallible random source.
///
/// # Errors
///
/// [`Error::RandomSource`] if `rng` fails.
#[instrument(level = "debug", skip_all, err)]
pub fn try_encapsulate<R: TryCryptoRng + ?Sized>(
    pk: &PublicKey, rng: &mut R,
) -> Result<(Ciphertext, SharedSecret), Error> {
    encapsulate_inner(pk, rng).map_err(|e| {
        tracing::debug!(error = ?e, "random source failed during encapsulation");
        Error::RandomSource
    })
}

/// Decapsulation with implicit rejection. Never fails.
#[must_use]
#[instrument(level = "debug", skip_all)]
pub fn decapsulate(ct: &Ciphertext, sk: &SecretKey) -> SharedSecret {
    let mut r = pke::decrypt_bytes(&ct.rounded, &sk.f, &sk.ginv);
    let (cnew, mut r_enc) = hide(&r, &sk.pk, &sk.cache);

    let ok = ct.as_ref().ct_eq(cnew.as_ref());
    r_enc.ct_assign(&sk.rho, !ok);
    let mut domain = DOMAIN_SESSION;
    domain.ct_assign(&DOMAIN_REJECT, !ok);
    let ss = hash_session(domain, &r_enc, ct.as_bytes());

    r.zeroize();
    r_enc.zeroize();
    SharedSecret::from(ss)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CIPHERTEXT_BYTES, ROUNDED_BYTES};
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;
    use sntrup_hash::{DOMAIN_PLAINTEXT, hash_prefix, hash_prefix_parts};

    fn session_key(domain: u8, r_enc: &[u8], ct: &Ciphertext) -> [u8; HASH_BYTES] {
        let inner = hash_prefix(DOMAIN_PLAINTEXT, r_enc);
        hash_prefix_parts(domain, &[&inner[..], ct.as_ref()])
    }

    #[test]
    fn cache_matches_embedded_public_key() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let (pk, sk) = keypair(&mut rng);
        assert_eq!(sk.pk, *pk.as_bytes());
        assert_eq!(sk.cache, hash_cache(pk.as_bytes()));
    }

    #[test]
    fn rejection_key_uses_rho_and_domain_zero() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let (pk, sk) = keypair(&mut rng);
        let (ct, _) = encapsulate(&pk, &mut rng);

        let mut bad = *ct.as_bytes();
        bad[0] ^= 1;
        let bad = Ciphertext::from(bad);

        let expected = session_key(DOMAIN_REJECT, &sk.rho, &bad);
        assert_eq!(decapsulate(&bad, &sk).as_bytes(), &expected);
    }

    #[test]
    fn acceptance_key_uses_domain_one() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let (pk, sk) = keypair(&mut rng);
        let (ct, ss) = encapsulate(&pk, &mut rng);

        let r = pke::decrypt_bytes(&ct.rounded, &sk.f, &sk.ginv);
        let expected = session_key(DOMAIN_SESSION, &r.to_bytes(), &ct);
        assert_eq!(ss.as_bytes(), &expected);
        assert_eq!(decapsulate(&ct, &sk).as_bytes(), &expected);
    }

    #[test]
    fn confirm_tag_is_checked() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let (pk, sk) = keypair(&mut rng);
        let (ct, ss) = encapsulate(&pk, &mut rng);

        let mut bad = *ct.as_bytes();
        bad[bad.len() - 1] ^= 0x80;
        let bad = Ciphertext::from(bad);
        assert_ne!(decapsulate(&bad, &sk).as_bytes(), ss.as_bytes());
        assert_eq!(
            decapsulate(&bad, &sk).as_bytes(),
            &session_key(DOMAIN_REJECT, &sk.rho, &bad)
        );
    }

    #[test]
    fn every_ciphertext_byte_is_compared() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let (pk, sk) = keypair(&mut rng);
        let (ct, ss) = encapsulate(&pk, &mut rng);

        for pos in [0, ROUNDED_BYTES - 1, ROUNDED_BYTES, CIPHERTEXT_BYTES - 1] {
            let mut bad = *ct.as_bytes();
            bad[pos] ^= 0x01;
            let bad = Ciphertext::from(bad);
            let got = decapsulate(&bad, &sk);
            let expected = session_key(DOMAIN_REJECT, &sk.rho, &bad);
            assert_ne!(got.as_bytes(), ss.as_bytes(), "byte {pos}");
            assert_eq!(got.as_bytes(), &expected, "byte {pos}");
        }
    }
}
