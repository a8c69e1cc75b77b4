//! Forward (analysis) passes.
//!
//! Decimation in time specialised for real input. After the gather pass the
//! working buffer holds `N/4` packed 4-point spectra; every following pass
//! merges pairs of packed `2^p`-point spectra into one `2^(p+1)`-point
//! spectrum, so only half of each complex spectrum is ever stored.

use crate::num::Float;
use crate::trigo::{PassCoefs, Twiddles};

/// Gather samples through the bit-reversal table and run the first two
/// passes at once: `df` receives `N/4` packed 4-point spectra.
#[inline]
pub fn pass_1_2<T: Float>(df: &mut [T], x: &[T], br: &[usize]) {
    let n = x.len();
    debug_assert_eq!(df.len(), n);
    debug_assert_eq!(br.len(), n >> 2);
    let quarter = n >> 2;
    let half = n >> 1;
    let three_quarters = half + quarter;
    for (block, &r0) in df.chunks_exact_mut(4).zip(br) {
        let x0 = x[r0];
        let x1 = x[r0 + half];
        let x2 = x[r0 + quarter];
        let x3 = x[r0 + three_quarters];
        block[1] = x0 - x1;
        block[3] = x2 - x3;
        let s0 = x0 + x1;
        let s2 = x2 + x3;
        block[0] = s0 + s2;
        block[2] = s0 - s2;
    }
}

/// Third pass: 4-point spectra into 8-point spectra. The only rotation is
/// by `π/4`, folded into a `sqrt(2)/2` constant.
#[inline]
pub fn pass_3<T: Float>(df: &mut [T], sf: &[T]) {
    debug_assert_eq!(df.len(), sf.len());
    let sqrt2_2 = T::sqrt2_2();
    for (d, s) in df.chunks_exact_mut(8).zip(sf.chunks_exact(8)) {
        d[0] = s[0] + s[4];
        d[4] = s[0] - s[4];
        d[2] = s[2];
        d[6] = s[6];

        let v = (s[5] - s[7]) * sqrt2_2;
        d[1] = s[1] + v;
        d[3] = s[1] - v;

        let v = (s[5] + s[7]) * sqrt2_2;
        d[5] = v + s[3];
        d[7] = v - s[3];
    }
}

/// General pass `pass >= 3`: merges pairs of packed `2^pass`-point spectra.
///
/// Within a block, the first half of `sf` is the spectrum of the even
/// samples and the second half the spectrum of the odd samples.
#[inline]
pub fn pass_n<T: Float, W: Twiddles<T>>(df: &mut [T], sf: &[T], pass: u32, coefs: &mut W) {
    debug_assert_eq!(df.len(), sf.len());
    let nbr_coef = 1usize << pass;
    let h_nbr_coef = nbr_coef >> 1;
    let d_nbr_coef = nbr_coef << 1;
    for (dst, src) in df
        .chunks_exact_mut(d_nbr_coef)
        .zip(sf.chunks_exact(d_nbr_coef))
    {
        let (sf1, sf2) = src.split_at(nbr_coef);

        // Bins 0 and nbr_coef are real, bin h_nbr_coef needs no rotation
        dst[0] = sf1[0] + sf2[0];
        dst[nbr_coef] = sf1[0] - sf2[0];
        dst[h_nbr_coef] = sf1[h_nbr_coef];
        dst[nbr_coef + h_nbr_coef] = sf2[h_nbr_coef];

        coefs.begin();
        for i in 1..h_nbr_coef {
            let (c, s) = coefs.next(i);
            let sf1r = sf1[i];
            let sf1i = sf1[h_nbr_coef + i];
            let sf2r = sf2[i];
            let sf2i = sf2[h_nbr_coef + i];

            let v = sf2r * c - sf2i * s;
            dst[i] = sf1r + v;
            dst[nbr_coef - i] = sf1r - v;

            let v = sf2r * s + sf2i * c;
            dst[nbr_coef + i] = v + sf1i;
            dst[d_nbr_coef - i] = v - sf1i;
        }
    }
}

/// Run general pass `pass` with the strategy chosen for it at construction.
#[inline]
pub fn pass_n_with<T: Float>(df: &mut [T], sf: &[T], pass: u32, coefs: PassCoefs<'_, T>) {
    match coefs {
        PassCoefs::Table(mut table) => pass_n(df, sf, pass, &mut table),
        PassCoefs::Oscillator(osc) => pass_n(df, sf, pass, osc),
        PassCoefs::Closed => unreachable!("pass {pass} is closed-form"),
    }
}
