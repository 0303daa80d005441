//! The rings `R3 = F3[x]/(x^p - x - 1)` and `Rq = Fq[x]/(x^p - x - 1)`.

mod r3;
mod rq;

pub use r3::R3;
pub use rq::Rq;

use zeroize::Zeroize;

use crate::P;

/// Schoolbook product reduced modulo `x^p - x - 1`.
///
/// `freeze` maps an integer to its centered representative in the
/// coefficient field; it is applied to every convolution sum and again after
/// each fold of `x^p = x + 1`. Loop bounds depend on `P` only.
pub(crate) fn mult_reduce(
    out: &mut [i32; P],
    f: impl Fn(usize) -> i32,
    g: impl Fn(usize) -> i32,
    freeze: impl Fn(i32) -> i32,
) {
    let mut fg = [0i32; 2 * P - 1];
    for i in 0..P {
        let fi = f(i);
        for (j, acc) in fg[i..i + P].iter_mut().enumerate() {
            *acc += fi * g(j);
        }
    }
    for x in &mut fg {
        *x = freeze(*x);
    }
    for i in (P..2 * P - 1).rev() {
        fg[i - P] = freeze(fg[i - P] + fg[i]);
        fg[i - P + 1] = freeze(fg[i - P + 1] + fg[i]);
    }
    out.copy_from_slice(&fg[..P]);
    fg.zeroize();
}
