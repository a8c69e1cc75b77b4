//! Bit-reversal table used by the first and last passes.
//!
//! The engine gathers samples four at a time: for every block `c` the
//! indices are `br[c]`, `br[c] + N/2`, `br[c] + N/4` and `br[c] + 3N/4`,
//! where `br[c]` is the `L`-bit reversal of `4c`. Only `N/4` entries are
//! therefore stored.

use alloc::vec;
use alloc::vec::Vec;

/// Number of entries the table holds for a transform of `2^nbr_bits`
/// samples: `max(1, 2^(nbr_bits - 2))`.
#[inline]
pub fn table_len(nbr_bits: u32) -> usize {
    if nbr_bits < 2 {
        1
    } else {
        1usize << (nbr_bits - 2)
    }
}

/// Build the table for a transform of `2^nbr_bits` samples.
///
/// Doubling construction: starting from `[0]`, a table of `k` entries
/// grows to `2k` with `new[2i] = old[i]` and `new[2i + 1] = old[i] + k`.
/// The vector is allocated once at its final size and filled in place.
/// For `nbr_bits < 2` the single placeholder entry is never read.
pub fn build(nbr_bits: u32) -> Vec<usize> {
    let len = table_len(nbr_bits);
    let mut table = vec![0usize; len];
    let mut k = 1;
    while k < len {
        // Walk downwards so every source entry is read before it is overwritten.
        for i in (0..k).rev() {
            let v = table[i];
            table[2 * i] = v;
            table[2 * i + 1] = v + k;
        }
        k <<= 1;
    }
    table
}
