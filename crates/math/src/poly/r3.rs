use core::ops;

use zeroize::Zeroize;

use super::{Rq, mult_reduce};
use crate::{
    P, SMALL_BYTES, W,
    ct::{cswap_i8, negative_mask, nonzero_mask},
    pack,
    reduce::f3_freeze,
    sample,
};

/// Element of `R3`, coefficients centered in `{-1, 0, 1}`.
///
/// Also the carrier for "small" polynomials: the short secrets and
/// plaintexts, and the ternary `g`.
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct R3(pub(crate) [i8; P]);

impl R3 {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0i8; P])
    }

    /// The constant polynomial 1.
    #[must_use]
    pub const fn one() -> Self {
        let mut c = [0i8; P];
        c[0] = 1;
        Self(c)
    }

    /// Short polynomial (weight exactly `W`) from `P` uniform words.
    #[must_use]
    pub fn short_from_list(words: &[u32; P]) -> Self {
        let mut f = Self::zero();
        sample::short_from_list(&mut f.0, words);
        f
    }

    /// Uniform ternary polynomial from `P` uniform words.
    #[must_use]
    pub fn small_from_list(words: &[u32; P]) -> Self {
        let mut g = Self::zero();
        sample::small_from_list(&mut g.0, words);
        g
    }

    /// Reduce every coefficient of an `Rq` element mod 3.
    #[must_use]
    pub fn from_rq(r: &Rq) -> Self {
        Self(core::array::from_fn(|i| f3_freeze(r.0[i])))
    }

    #[must_use]
    pub fn from_bytes(s: &[u8; SMALL_BYTES]) -> Self {
        let mut f = Self::zero();
        pack::bytes_to_small(&mut f.0, s);
        f
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; SMALL_BYTES] {
        let mut s = [0u8; SMALL_BYTES];
        pack::small_to_bytes(&mut s, &self.0);
        s
    }

    #[must_use]
    pub fn mult(&self, g: &Self) -> Self {
        let mut fg = [0i32; P];
        mult_reduce(
            &mut fg,
            |i| self.0[i] as i32,
            |j| g.0[j] as i32,
            |x| f3_freeze(x as i16) as i32,
        );
        let h = Self(core::array::from_fn(|i| fg[i] as i8));
        fg.zeroize();
        h
    }

    /// `0` if exactly `W` coefficients are nonzero, `-1` otherwise.
    #[must_use]
    pub fn weight_mask(&self) -> i16 {
        let weight: i16 = self.0.iter().map(|&c| (c & 1) as i16).sum();
        nonzero_mask(weight - W as i16)
    }

    /// Inverse in `R3` by a constant-time extended GCD with exactly `2p - 1`
    /// iterations.
    ///
    /// Returns the candidate inverse and `true` if `self` is singular, in
    /// which case the candidate is meaningless.
    #[must_use]
    pub fn recip(&self) -> (Self, bool) {
        // f = x^p - x - 1 and g = reversed input, both with an extra slot so
        // the top coefficient survives the shifts.
        let mut f = [0i8; P + 1];
        f[0] = 1;
        f[P - 1] = -1;
        f[P] = -1;
        let mut g = [0i8; P + 1];
        for (i, &c) in self.0.iter().enumerate() {
            g[P - 1 - i] = c;
        }
        let mut v = [0i8; P + 1];
        let mut r = [0i8; P + 1];
        r[0] = 1;
        let mut delta: i16 = 1;

        for _ in 0..2 * P - 1 {
            v.copy_within(0..P, 1);
            v[0] = 0;

            let sign = -(g[0] * f[0]);
            let swap = negative_mask(-delta) & nonzero_mask(g[0] as i16);
            delta ^= swap & (delta ^ -delta);
            delta += 1;

            cswap_i8(&mut f, &mut g, swap);
            cswap_i8(&mut v, &mut r, swap);

            for (gi, &fi) in g.iter_mut().zip(f.iter()) {
                *gi = f3_freeze((*gi + sign * fi) as i16);
            }
            for (ri, &vi) in r.iter_mut().zip(v.iter()) {
                *ri = f3_freeze((*ri + sign * vi) as i16);
            }

            g.copy_within(1..=P, 0);
            g[P] = 0;
        }

        let scale = f[0];
        let out = Self(core::array::from_fn(|i| scale * v[P - 1 - i]));
        let singular = nonzero_mask(delta) != 0;

        f.zeroize();
        g.zeroize();
        v.zeroize();
        r.zeroize();
        (out, singular)
    }

    #[must_use]
    pub const fn coeffs(&self) -> &[i8; P] {
        &self.0
    }
}

impl From<[i8; P]> for R3 {
    #[inline]
    fn from(coeffs: [i8; P]) -> Self {
        Self(coeffs)
    }
}

impl Default for R3 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl core::fmt::Debug for R3 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("R3").finish_non_exhaustive()
    }
}

impl<'b> ops::Mul<&'b R3> for &R3 {
    type Output = R3;
    #[inline]
    fn mul(self, rhs: &'b R3) -> R3 {
        self.mult(rhs)
    }
}
