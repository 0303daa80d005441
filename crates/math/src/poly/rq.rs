use core::ops;

use zeroize::Zeroize;

use super::{R3, mult_reduce};
use crate::{
    P, ROUNDED_BYTES, RQ_BYTES,
    ct::{cswap_i16, negative_mask, nonzero_mask},
    pack,
    reduce::{f3_freeze, fq_freeze, fq_recip},
};

/// Element of `Rq`, coefficients centered in `[-(q-1)/2, (q-1)/2]`.
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct Rq(pub(crate) [i16; P]);

impl Rq {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0i16; P])
    }

    /// `self * g` for a small `g`.
    #[must_use]
    pub fn mult_small(&self, g: &R3) -> Self {
        let mut fg = [0i32; P];
        mult_reduce(
            &mut fg,
            |i| self.0[i] as i32,
            |j| g.0[j] as i32,
            |x| fq_freeze(x) as i32,
        );
        let h = Self(core::array::from_fn(|i| fg[i] as i16));
        fg.zeroize();
        h
    }

    /// `3 * self`.
    #[must_use]
    pub fn mult3(&self) -> Self {
        Self(core::array::from_fn(|i| fq_freeze(3 * self.0[i] as i32)))
    }

    /// Round every coefficient to the nearest multiple of 3.
    #[must_use]
    pub fn round(&self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] - f3_freeze(self.0[i]) as i16))
    }

    /// `1 / (3 * f)` in `Rq` for a small `f`, by the same fixed-length
    /// extended GCD as [`R3::recip`], with the leading scale removed at the
    /// end.
    ///
    /// Returns the candidate inverse and `true` if `3f` is not invertible.
    #[must_use]
    pub fn recip3(small: &R3) -> (Self, bool) {
        let mut f = [0i16; P + 1];
        f[0] = 1;
        f[P - 1] = -1;
        f[P] = -1;
        let mut g = [0i16; P + 1];
        for (i, &c) in small.0.iter().enumerate() {
            g[P - 1 - i] = c as i16;
        }
        let mut v = [0i16; P + 1];
        let mut r = [0i16; P + 1];
        r[0] = fq_recip(3);
        let mut delta: i16 = 1;

        for _ in 0..2 * P - 1 {
            v.copy_within(0..P, 1);
            v[0] = 0;

            let swap = negative_mask(-delta) & nonzero_mask(g[0]);
            delta ^= swap & (delta ^ -delta);
            delta += 1;

            cswap_i16(&mut f, &mut g, swap);
            cswap_i16(&mut v, &mut r, swap);

            let (f0, g0) = (f[0] as i32, g[0] as i32);
            for (gi, &fi) in g.iter_mut().zip(f.iter()) {
                *gi = fq_freeze(f0 * *gi as i32 - g0 * fi as i32);
            }
            for (ri, &vi) in r.iter_mut().zip(v.iter()) {
                *ri = fq_freeze(f0 * *ri as i32 - g0 * vi as i32);
            }

            g.copy_within(1..=P, 0);
            g[P] = 0;
        }

        let scale = fq_recip(f[0]) as i32;
        let out = Self(core::array::from_fn(|i| fq_freeze(scale * v[P - 1 - i] as i32)));
        let singular = nonzero_mask(delta) != 0;

        f.zeroize();
        g.zeroize();
        v.zeroize();
        r.zeroize();
        (out, singular)
    }

    #[must_use]
    pub fn from_bytes(s: &[u8; RQ_BYTES]) -> Self {
        let mut h = Self::zero();
        pack::bytes_to_rq(&mut h.0, s);
        h
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; RQ_BYTES] {
        let mut s = [0u8; RQ_BYTES];
        pack::rq_to_bytes(&mut s, &self.0);
        s
    }

    /// Decode a rounded element; every coefficient comes back a multiple of 3.
    #[must_use]
    pub fn from_rounded_bytes(s: &[u8; ROUNDED_BYTES]) -> Self {
        let mut c = Self::zero();
        pack::bytes_to_rounded(&mut c.0, s);
        c
    }

    /// Encode an element produced by [`Rq::round`].
    #[must_use]
    pub fn to_rounded_bytes(&self) -> [u8; ROUNDED_BYTES] {
        let mut s = [0u8; ROUNDED_BYTES];
        pack::rounded_to_bytes(&mut s, &self.0);
        s
    }

    #[must_use]
    pub const fn coeffs(&self) -> &[i16; P] {
        &self.0
    }
}

impl From<[i16; P]> for Rq {
    #[inline]
    fn from(coeffs: [i16; P]) -> Self {
        Self(coeffs)
    }
}

impl Default for Rq {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl core::fmt::Debug for Rq {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rq").finish_non_exhaustive()
    }
}

impl<'b> ops::Mul<&'b R3> for &Rq {
    type Output = Rq;
    #[inline]
    fn mul(self, rhs: &'b R3) -> Rq {
        self.mult_small(rhs)
    }
}
