//! Scalar and vector helpers shared by compiled expressions

use num_traits::Float;

/// Modulo whose result takes the sign of the divisor
///
/// `floored_mod(-1.0, 3.0) == 2.0`, unlike the `%` remainder which gives `-1.0`.
/// Zero divisors and non-finite inputs produce NaN as IEEE remainder does.
pub fn floored_mod<T: Float>(dividend: T, divisor: T) -> T {
    ((dividend % divisor) + divisor) % divisor
}

/// Linear interpolation from `a` (at `t = 0`) to `b` (at `t = 1`)
// Kept unfused so results match the rounding of `(b - a) * t + a` exactly
#[allow(clippy::suboptimal_flops)]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    (b - a) * t + a
}

/// Component-wise interpolation between two vectors
pub fn mix<T: Float>(a: [T; 3], b: [T; 3], t: T) -> [T; 3] {
    let [a0, a1, a2] = a;
    let [b0, b1, b2] = b;
    [lerp(a0, b0, t), lerp(a1, b1, t), lerp(a2, b2, t)]
}
