//! Fixed-length real FFT.
//!
//! [`FixLenRfft`] transforms real buffers of `N = 2^L` samples into the
//! packed spectrum layout and back. Every table it needs is built by
//! [`FixLenRfft::new`]; `do_fft`, `do_ifft` and `rescale` never allocate.
//!
//! # Packed layout
//!
//! With `X[k] = Σ x[n]·e^{-2πi·kn/N}`, a packed spectrum `f` of `N` reals
//! holds:
//! - `f[0] = Re X[0]` and `f[N/2] = Re X[N/2]` (both bins are real),
//! - `f[k] = Re X[k]` for `1 <= k < N/2`,
//! - `f[N/2 + k] = -Im X[k] = Im X[N - k]` for `1 <= k < N/2`.
//!
//! [`unpack_spectrum`] and [`pack_spectrum`] convert to and from `N/2 + 1`
//! complex bins.

use alloc::vec;
use alloc::vec::Vec;

use crate::bitrev;
use crate::direct;
use crate::fft_kernels::{irfft1, irfft2, irfft4, irfft8, rfft1, rfft2, rfft4, rfft8};
use crate::inverse;
use crate::num::{Complex, Float};
use crate::osc::Oscillator;
use crate::trigo::{CoefSource, PassTrigo, FIRST_ROTATING_PASS};

/// Largest supported length exponent.
pub const MAX_NBR_BITS: u32 = 30;

/// Precondition failures reported before any work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The length exponent is above [`MAX_NBR_BITS`].
    InvalidNbrBits(u32),
    /// A buffer does not have the length the operation requires.
    MismatchedLengths { expected: usize, actual: usize },
    /// A packed spectrum whose length is not a power of two.
    NotPowerOfTwo(usize),
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::InvalidNbrBits(bits) => write!(
                f,
                "length exponent {bits} is outside 0..={MAX_NBR_BITS}"
            ),
            FftError::MismatchedLengths { expected, actual } => write!(
                f,
                "buffer holds {actual} elements, expected {expected}"
            ),
            FftError::NotPowerOfTwo(len) => write!(f, "length {len} is not a power of two"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Real FFT of a length fixed at construction.
///
/// The instance owns a scratch buffer of `N` elements, an `N/4`-entry
/// bit-reversal table, a quarter-wave cosine table shared by the passes
/// below [`TRIGO_BD_LIMIT`](crate::trigo::TRIGO_BD_LIMIT), and one
/// oscillator per pass from there on. Transforms take `&mut self`: one instance serves one
/// transform at a time, distinct instances are independent.
///
/// ```
/// use fixlen_rfft::FixLenRfft;
///
/// let mut fft = FixLenRfft::<f32>::new(2).unwrap();
/// let mut spectrum = [0.0f32; 4];
/// fft.do_fft(&mut spectrum, &[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(spectrum, [10.0, -2.0, -2.0, -2.0]);
///
/// let mut signal = [0.0f32; 4];
/// fft.do_ifft(&mut signal, &spectrum).unwrap();
/// fft.rescale(&mut signal).unwrap();
/// assert_eq!(signal, [1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Clone, Debug)]
pub struct FixLenRfft<T: Float> {
    nbr_bits: u32,
    length: usize,
    buffer: Vec<T>,
    br: Vec<usize>,
    trigo: CoefSource<T>,
}

impl<T: Float> FixLenRfft<T> {
    /// Build an engine for `2^nbr_bits` samples.
    pub fn new(nbr_bits: u32) -> Result<Self, FftError> {
        if nbr_bits > MAX_NBR_BITS {
            return Err(FftError::InvalidNbrBits(nbr_bits));
        }
        let length = 1usize << nbr_bits;
        let fft = Self {
            nbr_bits,
            length,
            buffer: vec![T::zero(); length],
            br: bitrev::build(nbr_bits),
            trigo: CoefSource::new(nbr_bits),
        };
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "rfft: length {} (2^{}), cos table {}, oscillators {}",
            fft.length,
            fft.nbr_bits,
            fft.trigo.table_len(),
            fft.trigo.oscillator_count()
        );
        Ok(fft)
    }

    /// Transform length `N`.
    #[inline]
    pub fn get_length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn nbr_bits(&self) -> u32 {
        self.nbr_bits
    }

    pub fn table_len(&self) -> usize {
        self.trigo.table_len()
    }

    pub fn oscillator_count(&self) -> usize {
        self.trigo.oscillator_count()
    }

    pub fn pass_trigo(&self, pass: u32) -> Option<PassTrigo> {
        (pass < self.nbr_bits).then(|| self.trigo.pass_trigo(pass))
    }

    /// Worst-case absolute error of any rotation coefficient this instance
    /// uses, per component.
    ///
    /// Table coefficients are correctly rounded up to one epsilon. Oscillator
    /// coefficients drift linearly with the number of steps between resets,
    /// which is `2^(L-2) - 1` for the deepest pass; see
    /// [`Oscillator::error_bound`].
    pub fn max_phase_error(&self) -> f64 {
        if self.trigo.oscillator_count() > 0 {
            Oscillator::<T>::error_bound(self.trigo.max_oscillator_steps())
        } else if self.trigo.table_len() > 0 {
            T::epsilon()
        } else {
            0.0
        }
    }

    /// Forward transform of the `N` samples in `x` into the packed spectrum
    /// `f`.
    pub fn do_fft(&mut self, f: &mut [T], x: &[T]) -> Result<(), FftError> {
        self.check_len(f.len())?;
        self.check_len(x.len())?;
        match self.nbr_bits {
            0 => rfft1(f, x),
            1 => rfft2(f, x),
            2 => rfft4(f, x),
            3 => rfft8(f, x),
            _ => self.forward_general(f, x),
        }
        Ok(())
    }

    /// Inverse transform of the packed spectrum `f` into `x`.
    ///
    /// The result is `N` times the true inverse; call [`Self::rescale`]
    /// to normalize.
    pub fn do_ifft(&mut self, x: &mut [T], f: &[T]) -> Result<(), FftError> {
        self.check_len(x.len())?;
        self.check_len(f.len())?;
        match self.nbr_bits {
            0 => irfft1(x, f),
            1 => irfft2(x, f),
            2 => irfft4(x, f),
            3 => irfft8(x, f),
            _ => self.inverse_general(x, f),
        }
        Ok(())
    }

    /// Multiply every element of `x` by `1/N`.
    pub fn rescale(&self, x: &mut [T]) -> Result<(), FftError> {
        self.check_len(x.len())?;
        let mul = T::from_f64(1.0 / self.length as f64);
        for v in x.iter_mut() {
            *v = *v * mul;
        }
        Ok(())
    }

    #[inline]
    fn check_len(&self, actual: usize) -> Result<(), FftError> {
        if actual != self.length {
            return Err(FftError::MismatchedLengths {
                expected: self.length,
                actual,
            });
        }
        Ok(())
    }

    /// `nbr_bits >= 4`. Data ping-pongs between `f` and the scratch buffer;
    /// the first destination is picked so the last pass lands in `f`.
    fn forward_general(&mut self, f: &mut [T], x: &[T]) {
        let nbr_bits = self.nbr_bits;
        let buf = &mut self.buffer[..];
        let trigo = &mut self.trigo;
        trigo.reset();

        let mut in_f = nbr_bits & 1 == 0;
        if in_f {
            direct::pass_1_2(f, x, &self.br);
            direct::pass_3(buf, f);
        } else {
            direct::pass_1_2(buf, x, &self.br);
            direct::pass_3(f, buf);
        }
        in_f = !in_f;

        for pass in FIRST_ROTATING_PASS..nbr_bits {
            if in_f {
                direct::pass_n_with(buf, f, pass, trigo.coefs(pass));
            } else {
                direct::pass_n_with(f, buf, pass, trigo.coefs(pass));
            }
            in_f = !in_f;
        }
        debug_assert!(in_f);
    }

    /// `nbr_bits >= 4`. `f` is only read by the first pass; the remaining
    /// passes alternate so pass 3 reads from `x` and the scatter pass reads
    /// from the scratch buffer.
    fn inverse_general(&mut self, x: &mut [T], f: &[T]) {
        let nbr_bits = self.nbr_bits;
        let buf = &mut self.buffer[..];
        let trigo = &mut self.trigo;
        trigo.reset();

        let last = nbr_bits - 1;
        let mut in_x = nbr_bits & 1 == 0;
        if in_x {
            inverse::pass_n_with(x, f, last, trigo.coefs(last));
        } else {
            inverse::pass_n_with(buf, f, last, trigo.coefs(last));
        }

        for pass in (FIRST_ROTATING_PASS..last).rev() {
            if in_x {
                inverse::pass_n_with(buf, x, pass, trigo.coefs(pass));
            } else {
                inverse::pass_n_with(x, buf, pass, trigo.coefs(pass));
            }
            in_x = !in_x;
        }
        debug_assert!(in_x);

        inverse::pass_3(buf, x);
        inverse::pass_1_2(x, buf, &self.br);
    }
}

/// Expand a packed spectrum of `N` reals into `N/2 + 1` complex bins.
pub fn unpack_spectrum<T: Float>(packed: &[T], bins: &mut [Complex<T>]) -> Result<(), FftError> {
    let n = packed.len();
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo(n));
    }
    let half = n / 2;
    if bins.len() != half + 1 {
        return Err(FftError::MismatchedLengths {
            expected: half + 1,
            actual: bins.len(),
        });
    }
    bins[0] = Complex::new(packed[0], T::zero());
    if half == 0 {
        return Ok(());
    }
    for k in 1..half {
        bins[k] = Complex::new(packed[k], -packed[half + k]);
    }
    bins[half] = Complex::new(packed[half], T::zero());
    Ok(())
}

/// Pack `N/2 + 1` complex bins into `N` reals. The imaginary parts of bins
/// `0` and `N/2` are dropped.
pub fn pack_spectrum<T: Float>(bins: &[Complex<T>], packed: &mut [T]) -> Result<(), FftError> {
    let n = packed.len();
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo(n));
    }
    let half = n / 2;
    if bins.len() != half + 1 {
        return Err(FftError::MismatchedLengths {
            expected: half + 1,
            actual: bins.len(),
        });
    }
    packed[0] = bins[0].re;
    if half == 0 {
        return Ok(());
    }
    for k in 1..half {
        packed[k] = bins[k].re;
        packed[half + k] = -bins[k].im;
    }
    packed[half] = bins[half].re;
    Ok(())
}
