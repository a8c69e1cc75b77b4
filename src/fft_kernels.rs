//! Closed-form real transforms for 1, 2, 4 and 8 points.
//!
//! These are the leaves of the engine: no rotation coefficient, no scratch
//! buffer, no bit-reversal table. Output follows the packed layout and the
//! inverse kernels are unnormalized (scaled by `N`).

use crate::num::Float;

#[inline(always)]
pub fn rfft1<T: Float>(f: &mut [T], x: &[T]) {
    debug_assert_eq!(f.len(), 1);
    debug_assert_eq!(x.len(), 1);
    f[0] = x[0];
}

#[inline(always)]
pub fn irfft1<T: Float>(x: &mut [T], f: &[T]) {
    debug_assert_eq!(x.len(), 1);
    debug_assert_eq!(f.len(), 1);
    x[0] = f[0];
}

#[inline(always)]
pub fn rfft2<T: Float>(f: &mut [T], x: &[T]) {
    debug_assert_eq!(f.len(), 2);
    debug_assert_eq!(x.len(), 2);
    f[0] = x[0] + x[1];
    f[1] = x[0] - x[1];
}

#[inline(always)]
pub fn irfft2<T: Float>(x: &mut [T], f: &[T]) {
    debug_assert_eq!(x.len(), 2);
    debug_assert_eq!(f.len(), 2);
    x[0] = f[0] + f[1];
    x[1] = f[0] - f[1];
}

#[inline(always)]
pub fn rfft4<T: Float>(f: &mut [T], x: &[T]) {
    debug_assert_eq!(f.len(), 4);
    debug_assert_eq!(x.len(), 4);
    f[1] = x[0] - x[2];
    f[3] = x[1] - x[3];
    let b0 = x[0] + x[2];
    let b2 = x[1] + x[3];
    f[0] = b0 + b2;
    f[2] = b0 - b2;
}

#[inline(always)]
pub fn irfft4<T: Float>(x: &mut [T], f: &[T]) {
    debug_assert_eq!(x.len(), 4);
    debug_assert_eq!(f.len(), 4);
    let b0 = f[0] + f[2];
    let b2 = f[0] - f[2];
    let b1 = f[1] * T::two();
    let b3 = f[3] * T::two();
    x[0] = b0 + b1;
    x[2] = b0 - b1;
    x[1] = b2 + b3;
    x[3] = b2 - b3;
}

#[inline(always)]
pub fn rfft8<T: Float>(f: &mut [T], x: &[T]) {
    debug_assert_eq!(f.len(), 8);
    debug_assert_eq!(x.len(), 8);
    let sqrt2_2 = T::sqrt2_2();

    // Two 4-point transforms on the even (0, 4, 2, 6) and odd (1, 5, 3, 7)
    // samples.
    let e1 = x[0] - x[4];
    let e3 = x[2] - x[6];
    let e_s0 = x[0] + x[4];
    let e_s2 = x[2] + x[6];
    let e0 = e_s0 + e_s2;
    let e2 = e_s0 - e_s2;

    let o1 = x[1] - x[5];
    let o3 = x[3] - x[7];
    let o_s0 = x[1] + x[5];
    let o_s2 = x[3] + x[7];
    let o0 = o_s0 + o_s2;
    let o2 = o_s0 - o_s2;

    f[0] = e0 + o0;
    f[4] = e0 - o0;
    f[2] = e2;
    f[6] = o2;

    let v = (o1 - o3) * sqrt2_2;
    f[1] = e1 + v;
    f[3] = e1 - v;

    let v = (o1 + o3) * sqrt2_2;
    f[5] = v + e3;
    f[7] = v - e3;
}

#[inline(always)]
pub fn irfft8<T: Float>(x: &mut [T], f: &[T]) {
    debug_assert_eq!(x.len(), 8);
    debug_assert_eq!(f.len(), 8);
    let sqrt2_2 = T::sqrt2_2();
    let two = T::two();

    // Split into the even and odd 4-point spectra.
    let e0 = f[0] + f[4];
    let o0 = f[0] - f[4];
    let e2 = f[2] * two;
    let o2 = f[6] * two;
    let e1 = f[1] + f[3];
    let e3 = f[5] - f[7];
    let vr = f[1] - f[3];
    let vi = f[5] + f[7];
    let o1 = (vr + vi) * sqrt2_2;
    let o3 = (vi - vr) * sqrt2_2;

    let b0 = e0 + e2;
    let b2 = e0 - e2;
    let b1 = e1 * two;
    let b3 = e3 * two;
    x[0] = b0 + b1;
    x[4] = b0 - b1;
    x[2] = b2 + b3;
    x[6] = b2 - b3;

    let b0 = o0 + o2;
    let b2 = o0 - o2;
    let b1 = o1 * two;
    let b3 = o3 * two;
    x[1] = b0 + b1;
    x[5] = b0 - b1;
    x[3] = b2 + b3;
    x[7] = b2 - b3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfft4_pinned() {
        let mut f = [0.0f32; 4];
        rfft4(&mut f, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(f, [10.0, -2.0, -2.0, -2.0]);
    }

    #[test]
    fn irfft4_scales_by_length() {
        let mut x = [0.0f32; 4];
        irfft4(&mut x, &[10.0, -2.0, -2.0, -2.0]);
        assert_eq!(x, [4.0, 8.0, 12.0, 16.0]);
    }

    #[test]
    fn rfft8_single_tone_bins() {
        // x[2] = 1 -> X[k] = e^{-iπk/2}.
        let mut x = [0.0f64; 8];
        x[2] = 1.0;
        let mut f = [0.0f64; 8];
        rfft8(&mut f, &x);
        let expected = [1.0, 0.0, -1.0, 0.0, 1.0, 1.0, 0.0, -1.0];
        for (a, b) in f.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-15, "{f:?}");
        }
    }

    #[test]
    fn rfft8_roundtrip() {
        let x = [0.5f64, -1.0, 2.0, 3.5, -0.25, 0.0, 1.0, -2.0];
        let mut f = [0.0f64; 8];
        let mut y = [0.0f64; 8];
        rfft8(&mut f, &x);
        irfft8(&mut y, &f);
        for (a, b) in x.iter().zip(y.iter()) {
            assert!((a * 8.0 - b).abs() < 1e-12);
        }
    }

    #[test]
    fn two_point_pair() {
        let mut f = [0.0f32; 2];
        rfft2(&mut f, &[3.0, 1.0]);
        assert_eq!(f, [4.0, 2.0]);
        let mut x = [0.0f32; 2];
        irfft2(&mut x, &f);
        assert_eq!(x, [6.0, 2.0]);
        let mut one = [0.0f32; 1];
        rfft1(&mut one, &[7.0]);
        irfft1(&mut x[..1], &one);
        assert_eq!(x[0], 7.0);
    }
}
