//! # fixlen-rfft - Fixed-length real FFT for Rust
//!
//! An allocation-free, power-of-two, real-input FFT. An engine is built once
//! for a length `N = 2^L` (`0 <= L <= 30`); every transform afterwards runs
//! on memory owned by the engine or the caller.
//!
//! ## Features
//!
//! - **Packed spectrum**: `N` reals in, `N` reals out (see [`rfft`])
//! - **Zero allocation** in `do_fft`, `do_ifft` and `rescale`
//! - **Closed-form kernels** for `N <= 8`, no coefficient evaluated
//! - **Per-pass twiddle strategy**: shared cosine table for shallow passes,
//!   rotation oscillators for deep ones
//! - **`f32` and `f64`** through the [`Float`] trait
//!
//! ## Cargo Features
//!
//! - `std` (default): implement `std::error::Error` for [`FftError`]
//! - `verbose-logging`: log engine configuration through the `log` facade
//!
//! ## Example
//!
//! ```
//! use fixlen_rfft::FixLenRfft;
//!
//! let mut fft = FixLenRfft::<f64>::new(10).unwrap();
//! let n = fft.get_length();
//! let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1).sin()).collect();
//! let mut spectrum = vec![0.0; n];
//! let mut y = vec![0.0; n];
//!
//! fft.do_fft(&mut spectrum, &x).unwrap();
//! fft.do_ifft(&mut y, &spectrum).unwrap();
//! fft.rescale(&mut y).unwrap();
//!
//! for (a, b) in x.iter().zip(y.iter()) {
//!     assert!((a - b).abs() < 1e-12);
//! }
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

/// Element types and the minimal complex value used by the spectrum helpers.
pub mod num;

/// Rotation oscillator for the deep passes.
pub mod osc;

/// Bit-reversal table builder.
pub mod bitrev;

/// Per-pass rotation coefficient source (table or oscillator).
pub mod trigo;

/// Closed-form transforms for 1, 2, 4 and 8 points.
pub mod fft_kernels;

/// Forward passes.
pub mod direct;

/// Inverse passes.
pub mod inverse;

/// The fixed-length engine and packed-spectrum helpers.
pub mod rfft;

pub use num::{Complex, Complex32, Complex64, Float};
pub use rfft::{pack_spectrum, unpack_spectrum, FftError, FixLenRfft, MAX_NBR_BITS};
