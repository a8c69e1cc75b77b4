//! Inverse (synthesis) passes.
//!
//! Each pass undoes the matching forward pass and scales by two, so the
//! full chain reconstructs `N·x`. The last pass scatters samples back
//! through the bit-reversal table.

use crate::num::Float;
use crate::trigo::{PassCoefs, Twiddles};

/// General pass `pass >= 3`: splits packed `2^(pass+1)`-point spectra into
/// the even and odd `2^pass`-point spectra they were merged from.
#[inline]
pub fn pass_n<T: Float, W: Twiddles<T>>(df: &mut [T], sf: &[T], pass: u32, coefs: &mut W) {
    debug_assert_eq!(df.len(), sf.len());
    let two = T::two();
    let nbr_coef = 1usize << pass;
    let h_nbr_coef = nbr_coef >> 1;
    let d_nbr_coef = nbr_coef << 1;
    for (dst, src) in df
        .chunks_exact_mut(d_nbr_coef)
        .zip(sf.chunks_exact(d_nbr_coef))
    {
        dst[0] = src[0] + src[nbr_coef];
        dst[nbr_coef] = src[0] - src[nbr_coef];
        dst[h_nbr_coef] = src[h_nbr_coef] * two;
        dst[nbr_coef + h_nbr_coef] = src[nbr_coef + h_nbr_coef] * two;

        coefs.begin();
        for i in 1..h_nbr_coef {
            let sfr = src[i];
            let sfr_mirror = src[nbr_coef - i];
            let sfi = src[nbr_coef + i];
            let sfi_mirror = src[d_nbr_coef - i];

            dst[i] = sfr + sfr_mirror;
            dst[h_nbr_coef + i] = sfi - sfi_mirror;

            let (c, s) = coefs.next(i);
            let vr = sfr - sfr_mirror;
            let vi = sfi + sfi_mirror;
            dst[nbr_coef + i] = vr * c + vi * s;
            dst[nbr_coef + h_nbr_coef + i] = vi * c - vr * s;
        }
    }
}

/// Run inverse pass `pass` with the strategy chosen for it at construction.
#[inline]
pub fn pass_n_with<T: Float>(df: &mut [T], sf: &[T], pass: u32, coefs: PassCoefs<'_, T>) {
    match coefs {
        PassCoefs::Table(mut table) => pass_n(df, sf, pass, &mut table),
        PassCoefs::Oscillator(osc) => pass_n(df, sf, pass, osc),
        PassCoefs::Closed => unreachable!("pass {pass} is closed-form"),
    }
}

/// Split 8-point spectra into pairs of 4-point spectra.
#[inline]
pub fn pass_3<T: Float>(df: &mut [T], sf: &[T]) {
    debug_assert_eq!(df.len(), sf.len());
    let sqrt2_2 = T::sqrt2_2();
    let two = T::two();
    for (d, s) in df.chunks_exact_mut(8).zip(sf.chunks_exact(8)) {
        d[0] = s[0] + s[4];
        d[4] = s[0] - s[4];
        d[2] = s[2] * two;
        d[6] = s[6] * two;

        d[1] = s[1] + s[3];
        d[3] = s[5] - s[7];

        let vr = s[1] - s[3];
        let vi = s[5] + s[7];
        d[5] = (vr + vi) * sqrt2_2;
        d[7] = (vi - vr) * sqrt2_2;
    }
}

/// Last two passes at once, writing samples through the bit-reversal table.
#[inline]
pub fn pass_1_2<T: Float>(x: &mut [T], sf: &[T], br: &[usize]) {
    let n = x.len();
    debug_assert_eq!(sf.len(), n);
    debug_assert_eq!(br.len(), n >> 2);
    let two = T::two();
    let quarter = n >> 2;
    let half = n >> 1;
    let three_quarters = half + quarter;
    for (block, &r0) in sf.chunks_exact(4).zip(br) {
        let b0 = block[0] + block[2];
        let b2 = block[0] - block[2];
        let b1 = block[1] * two;
        let b3 = block[3] * two;
        x[r0] = b0 + b1;
        x[r0 + half] = b0 - b1;
        x[r0 + quarter] = b2 + b3;
        x[r0 + three_quarters] = b2 - b3;
    }
}
