//! Streamlined NTRU Prime core: the deterministic-plaintext encryption
//! scheme under the KEM.
//!
//! Ring-level [`keygen`] / [`encrypt`] / [`decrypt`], and the byte-level
//! [`keygen_bytes`] / [`encrypt_bytes`] / [`decrypt_bytes`] the KEM composes.

use rand_core::TryCryptoRng;
use zeroize::Zeroize;

use crate::{
    math::{R3, Rq, ct::select_i8},
    params::{P, PUBLIC_KEY_BYTES, ROUNDED_BYTES, SMALL_BYTES, W},
    random,
};

/// Ring-level key pair: public `h = g / (3f)`, secret `f` and `1/g` in `R3`.
pub struct KeyPair {
    pub h: Rq,
    pub f: R3,
    pub ginv: R3,
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.f.zeroize();
        self.ginv.zeroize();
    }
}

/// Generate a key pair, resampling `g` until it is invertible in `R3`.
pub fn keygen<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<KeyPair, R::Error> {
    let mut attempt = 1u32;
    let (mut g, mut ginv) = loop {
        let mut g = random::small_random(rng)?;
        let (ginv, singular) = g.recip();
        if !singular {
            break (g, ginv);
        }
        tracing::trace!(attempt, "g not invertible in R3, resampling");
        g.zeroize();
        attempt += 1;
    };

    let mut f = random::short_random(rng)?;
    // A short f is always invertible in Rq for sntrup761.
    let (mut finv, _) = Rq::recip3(&f);
    let h = finv.mult_small(&g);

    finv.zeroize();
    g.zeroize();
    let pair = KeyPair { h, f, ginv };
    f.zeroize();
    ginv.zeroize();
    Ok(pair)
}

/// `c = Round(h * r)` for a short plaintext `r`.
#[must_use]
pub fn encrypt(r: &R3, h: &Rq) -> Rq {
    h.mult_small(r).round()
}

/// Recover the short plaintext from `c`.
///
/// If the candidate does not have weight `W`, returns the fixed short
/// polynomial whose first `W` coefficients are 1 instead; this is not
/// distinguishable in timing from success.
#[must_use]
pub fn decrypt(c: &Rq, f: &R3, ginv: &R3) -> R3 {
    let mut cf = c.mult_small(f);
    let mut cf3 = cf.mult3();
    let mut e = R3::from_rq(&cf3);
    let mut ev = &e * ginv;

    let mask = ev.weight_mask();
    let ec = ev.coeffs();
    let r = R3::from(core::array::from_fn::<i8, P, _>(|i| {
        let fallback = if i < W { 1 } else { 0 };
        select_i8(mask, fallback, ec[i])
    }));

    cf.zeroize();
    cf3.zeroize();
    e.zeroize();
    ev.zeroize();
    r
}

/// Byte-level key pair: encoded `h`, `f` and `1/g`.
pub struct KeyPairBytes {
    pub pk: [u8; PUBLIC_KEY_BYTES],
    pub f: [u8; SMALL_BYTES],
    pub ginv: [u8; SMALL_BYTES],
}

impl Drop for KeyPairBytes {
    fn drop(&mut self) {
        self.f.zeroize();
        self.ginv.zeroize();
    }
}

pub fn keygen_bytes<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<KeyPairBytes, R::Error> {
    let pair = keygen(rng)?;
    Ok(KeyPairBytes {
        pk: pair.h.to_bytes(),
        f: pair.f.to_bytes(),
        ginv: pair.ginv.to_bytes(),
    })
}

#[must_use]
pub fn encrypt_bytes(r: &R3, pk: &[u8; PUBLIC_KEY_BYTES]) -> [u8; ROUNDED_BYTES] {
    let h = Rq::from_bytes(pk);
    encrypt(r, &h).to_rounded_bytes()
}

#[must_use]
pub fn decrypt_bytes(
    c: &[u8; ROUNDED_BYTES], f: &[u8; SMALL_BYTES], ginv: &[u8; SMALL_BYTES],
) -> R3 {
    let c = Rq::from_rounded_bytes(c);
    let mut f = R3::from_bytes(f);
    let mut ginv = R3::from_bytes(ginv);
    let r = decrypt(&c, &f, &ginv);
    f.zeroize();
    ginv.zeroize();
    r
}
