//! Rotation coefficients for the general passes.
//!
//! Pass `p` (combining two spectra of `2^p` points) needs `cos(iπ/2^p)` and
//! `sin(iπ/2^p)` for `1 <= i < 2^(p-1)`. Passes below [`TRIGO_BD_LIMIT`]
//! read them from one shared quarter-wave cosine table; that pass and every
//! deeper one own an [`Oscillator`]. The choice is made once per pass when the source
//! is built and stored as a [`PassTrigo`] tag.

use alloc::vec::Vec;

use crate::num::{cos_sin, pi_over_pow2, Float};
use crate::osc::Oscillator;

/// First pass whose coefficients come from an oscillator. Bounds the table
/// to `2^(TRIGO_BD_LIMIT - 2)` entries and gives a `2^L` transform
/// `max(0, L - TRIGO_BD_LIMIT)` oscillators.
pub const TRIGO_BD_LIMIT: u32 = 12;

/// First pass that needs any rotation coefficient. Passes below it are the
/// closed-form butterflies.
pub const FIRST_ROTATING_PASS: u32 = 3;

/// Coefficient strategy of one pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassTrigo {
    /// Closed-form butterfly, no coefficient.
    Closed,
    /// Read the shared table every `stride` entries.
    Table { stride: usize },
    /// Step the oscillator at `index` in the oscillator array.
    Oscillator { index: usize },
}

/// Sequential access to the coefficients of one pass.
///
/// `begin` is called at the start of every block of the pass, then `next(i)`
/// for `i = 1, 2, ...` in increasing order.
pub trait Twiddles<T: Float> {
    fn begin(&mut self);
    /// `(cos, sin)` of `i·π/2^pass`.
    fn next(&mut self, i: usize) -> (T, T);
}

/// Table cursor for one pass.
#[derive(Clone, Copy, Debug)]
pub struct TableTwiddles<'a, T: Float> {
    cos: &'a [T],
    stride: usize,
}

impl<T: Float> Twiddles<T> for TableTwiddles<'_, T> {
    #[inline(always)]
    fn begin(&mut self) {}

    #[inline(always)]
    fn next(&mut self, i: usize) -> (T, T) {
        let index = i * self.stride;
        debug_assert!(index > 0 && index < self.cos.len());
        // sin(x) = cos(π/2 - x)
        (self.cos[index], self.cos[self.cos.len() - index])
    }
}

impl<T: Float> Twiddles<T> for Oscillator<T> {
    #[inline(always)]
    fn begin(&mut self) {
        self.reset();
    }

    #[inline(always)]
    fn next(&mut self, _i: usize) -> (T, T) {
        self.step();
        self.current()
    }
}

/// Borrowed coefficient strategy for one pass, handed to the pass engines.
pub enum PassCoefs<'a, T: Float> {
    Closed,
    Table(TableTwiddles<'a, T>),
    Oscillator(&'a mut Oscillator<T>),
}

/// Per-instance coefficient source.
#[derive(Clone, Debug)]
pub struct CoefSource<T: Float> {
    cos_table: Vec<T>,
    passes: Vec<PassTrigo>,
    oscillators: Vec<Oscillator<T>>,
}

impl<T: Float> CoefSource<T> {
    /// Decide the strategy of every pass of a `2^nbr_bits` transform and
    /// build the table and oscillators those passes need.
    pub fn new(nbr_bits: u32) -> Self {
        let passes: Vec<PassTrigo> = (0..nbr_bits)
            .map(|pass| Self::strategy(nbr_bits, pass))
            .collect();
        let cos_table = build_cos_table(nbr_bits);
        let oscillators = (TRIGO_BD_LIMIT..nbr_bits)
            .map(Oscillator::for_pass)
            .collect();
        Self {
            cos_table,
            passes,
            oscillators,
        }
    }

    fn strategy(nbr_bits: u32, pass: u32) -> PassTrigo {
        if pass < FIRST_ROTATING_PASS {
            PassTrigo::Closed
        } else if pass < TRIGO_BD_LIMIT {
            PassTrigo::Table {
                stride: 1usize << (table_max_pass(nbr_bits) - pass),
            }
        } else {
            PassTrigo::Oscillator {
                index: (pass - TRIGO_BD_LIMIT) as usize,
            }
        }
    }

    pub fn pass_trigo(&self, pass: u32) -> PassTrigo {
        self.passes[pass as usize]
    }

    pub fn table_len(&self) -> usize {
        self.cos_table.len()
    }

    pub fn oscillator_count(&self) -> usize {
        self.oscillators.len()
    }

    /// Coefficient cursor for `pass`.
    #[inline]
    pub fn coefs(&mut self, pass: u32) -> PassCoefs<'_, T> {
        match self.passes[pass as usize] {
            PassTrigo::Closed => PassCoefs::Closed,
            PassTrigo::Table { stride } => PassCoefs::Table(TableTwiddles {
                cos: &self.cos_table,
                stride,
            }),
            PassTrigo::Oscillator { index } => PassCoefs::Oscillator(&mut self.oscillators[index]),
        }
    }

    /// `(cos, sin)` of `index·π/2^pass` for `0 < index < 2^(pass - 1)`.
    ///
    /// Table passes are a lookup. Oscillator passes are evaluated directly,
    /// leaving the oscillator untouched: the transforms read those passes
    /// in order through [`Self::coefs`], where each value is one step of
    /// the pass's oscillator after a reset. `None` for closed-form passes,
    /// passes past the transform and indices out of range.
    pub fn get(&self, pass: u32, index: usize) -> Option<(T, T)> {
        let trigo = self.passes.get(pass as usize)?;
        if index == 0 || pass < FIRST_ROTATING_PASS || index >= 1usize << (pass - 1) {
            return None;
        }
        match *trigo {
            PassTrigo::Table { stride } => {
                let mut cursor = TableTwiddles {
                    cos: &self.cos_table,
                    stride,
                };
                Some(cursor.next(index))
            }
            PassTrigo::Oscillator { .. } => Some(cos_sin(index as f64 * pi_over_pow2(pass))),
            PassTrigo::Closed => None,
        }
    }

    /// Put every oscillator back at phase zero.
    pub fn reset(&mut self) {
        for osc in &mut self.oscillators {
            osc.reset();
        }
    }

    /// Longest run of oscillator steps between two resets, over all passes.
    pub fn max_oscillator_steps(&self) -> u64 {
        match self.oscillators.len() {
            0 => 0,
            n => {
                let deepest = TRIGO_BD_LIMIT + n as u32 - 1;
                (1u64 << (deepest - 1)) - 1
            }
        }
    }
}

/// Deepest pass served by the table for a `2^nbr_bits` transform.
#[inline]
fn table_max_pass(nbr_bits: u32) -> u32 {
    (nbr_bits - 1).min(TRIGO_BD_LIMIT - 1)
}

/// Quarter-wave cosine table: `cos(j·π/2^P)` for `0 <= j < 2^(P-1)` with
/// `P` the deepest table pass. Empty when no pass uses the table.
fn build_cos_table<T: Float>(nbr_bits: u32) -> Vec<T> {
    if nbr_bits <= FIRST_ROTATING_PASS {
        return Vec::new();
    }
    let max_pass = table_max_pass(nbr_bits);
    let len = 1usize << (max_pass - 1);
    let mul = pi_over_pow2(max_pass);
    (0..len)
        .map(|j| cos_sin::<T>(j as f64 * mul).0)
        .collect()
}
