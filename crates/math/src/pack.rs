//! Fixed wire packings of ring elements.
//!
//! - *Small*: ternary coefficients, four per byte as `c + 1` in two bits.
//! - *Rq*: centered `Fq` coefficients shifted to `[0, q)`, radix `q`.
//! - *Rounded*: multiples of 3 in `Fq`, stored as their index, radix 1531.

use crate::{
    P, Q, Q12, ROUNDED_BYTES, ROUNDED_RADIX, RQ_BYTES, SMALL_BYTES,
    encode::{decode, encode, encoded_len},
};

const RQ_RADICES: [u16; P] = [Q as u16; P];
const ROUNDED_RADICES: [u16; P] = [ROUNDED_RADIX; P];

const _: () = {
    assert!(encoded_len(&RQ_RADICES) == RQ_BYTES);
    assert!(encoded_len(&ROUNDED_RADICES) == ROUNDED_BYTES);
};

pub fn small_to_bytes(s: &mut [u8; SMALL_BYTES], f: &[i8; P]) {
    let (quads, last) = f.split_at(P - 1);
    for (byte, c) in s.iter_mut().zip(quads.chunks_exact(4)) {
        let mut x = 0u8;
        for (j, &t) in c.iter().enumerate() {
            x |= ((t + 1) as u8) << (2 * j);
        }
        *byte = x;
    }
    s[SMALL_BYTES - 1] = (last[0] + 1) as u8;
}

/// Inverse of [`small_to_bytes`]. A two-bit field of 3 decodes to 2.
pub fn bytes_to_small(f: &mut [i8; P], s: &[u8; SMALL_BYTES]) {
    let (quads, last) = f.split_at_mut(P - 1);
    for (c, &byte) in quads.chunks_exact_mut(4).zip(s.iter()) {
        for (j, t) in c.iter_mut().enumerate() {
            *t = ((byte >> (2 * j)) & 3) as i8 - 1;
        }
    }
    last[0] = (s[SMALL_BYTES - 1] & 3) as i8 - 1;
}

pub fn rq_to_bytes(s: &mut [u8; RQ_BYTES], h: &[i16; P]) {
    let r: [u16; P] = core::array::from_fn(|i| (h[i] + Q12) as u16);
    encode(s, &r, &RQ_RADICES);
}

pub fn bytes_to_rq(h: &mut [i16; P], s: &[u8; RQ_BYTES]) {
    let mut r = [0u16; P];
    decode(&mut r, s, &RQ_RADICES);
    for (c, &v) in h.iter_mut().zip(r.iter()) {
        *c = v as i16 - Q12;
    }
}

/// Pack a rounded element (every coefficient a multiple of 3).
pub fn rounded_to_bytes(s: &mut [u8; ROUNDED_BYTES], c: &[i16; P]) {
    // (x * 10923) >> 15 == x / 3 for the multiples of 3 in [0, q).
    let r: [u16; P] = core::array::from_fn(|i| (((c[i] + Q12) as u32 * 10923) >> 15) as u16);
    encode(s, &r, &ROUNDED_RADICES);
}

pub fn bytes_to_rounded(c: &mut [i16; P], s: &[u8; ROUNDED_BYTES]) {
    let mut r = [0u16; P];
    decode(&mut r, s, &ROUNDED_RADICES);
    for (x, &v) in c.iter_mut().zip(r.iter()) {
        *x = v as i16 * 3 - Q12;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ternary_pattern() -> [i8; P] {
        core::array::from_fn(|i| (i % 3) as i8 - 1)
    }

    #[test]
    fn small_layout() {
        let mut f = [0i8; P];
        f[0] = -1;
        f[1] = 1;
        f[P - 1] = 1;
        let mut s = [0u8; SMALL_BYTES];
        small_to_bytes(&mut s, &f);
        // Zero coefficients pack as 0b01.
        assert_eq!(s[0], 0b01_01_10_00);
        assert_eq!(s[1], 0b01_01_01_01);
        assert_eq!(s[SMALL_BYTES - 1], 2);
    }

    #[test]
    fn small_roundtrip() {
        let f = ternary_pattern();
        let mut s = [0u8; SMALL_BYTES];
        small_to_bytes(&mut s, &f);
        let mut g = [0i8; P];
        bytes_to_small(&mut g, &s);
        assert_eq!(f, g);
    }

    #[test]
    fn rq_roundtrip() {
        let h: [i16; P] = core::array::from_fn(|i| ((i as i32 * 1237) % Q as i32) as i16 - Q12);
        let mut s = [0u8; RQ_BYTES];
        rq_to_bytes(&mut s, &h);
        let mut back = [0i16; P];
        bytes_to_rq(&mut back, &s);
        assert_eq!(h, back);
    }

    #[test]
    fn rounded_roundtrip() {
        let c: [i16; P] =
            core::array::from_fn(|i| 3 * ((i as i16 * 7) % ROUNDED_RADIX as i16) - Q12);
        let mut s = [0u8; ROUNDED_BYTES];
        rounded_to_bytes(&mut s, &c);
        let mut back = [0i16; P];
        bytes_to_rounded(&mut back, &s);
        assert_eq!(c, back);
    }

    #[test]
    fn rounded_extremes() {
        for v in [-Q12, Q12] {
            let c = [v; P];
            let mut s = [0u8; ROUNDED_BYTES];
            rounded_to_bytes(&mut s, &c);
            let mut back = [0i16; P];
            bytes_to_rounded(&mut back, &s);
            assert_eq!(c, back);
        }
    }
}
