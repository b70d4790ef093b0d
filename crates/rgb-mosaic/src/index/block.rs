//! Fixed 16x16x16 presence bitmap, the leaf granularity of the index.

use super::{NearestAcc, Offset};

/// Side length of a block along each axis.
pub(crate) const BLOCK_SIZE: i32 = 16;

/// A 16x16x16 boolean presence table.
///
/// Storage is 16x16 rows of `u16`, one bit per k coordinate, so a whole
/// k-row can be tested for emptiness in one load during the nearest scan.
/// Coordinates are pre-validated by callers; there are no failure modes.
#[derive(Debug, Clone)]
pub struct BitBlock {
    rows: [[u16; 16]; 16],
}

impl BitBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self { rows: [[0; 16]; 16] }
    }

    /// Whether the bit at `(i, j, k)` is set. Each coordinate must be in 0..16.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> bool {
        (self.rows[i][j] >> k) & 1 != 0
    }

    /// Set the bit at `(i, j, k)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, k: usize) {
        self.rows[i][j] |= 1 << k;
    }

    /// Clear the bit at `(i, j, k)`.
    #[inline]
    pub fn clear(&mut self, i: usize, j: usize, k: usize) {
        self.rows[i][j] &= !(1 << k);
    }

    /// Whether no bit is set. Used to propagate emptiness up one level.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(|&bits| bits == 0))
    }

    /// Bounded scan for the set bits nearest to `(oi, oj, ok)`.
    ///
    /// Folds every set bit into `acc`, keeping the minimum squared Euclidean
    /// distance and the full list of offsets that achieve it (offsets are
    /// relative to the origin, so the origin plus an offset is the absolute
    /// coordinate of a hit). The origin may lie outside `0..16`: fine-level
    /// queries translate a cube-wide origin into block-local space, which can
    /// be negative or beyond the block.
    ///
    /// Each axis prunes once the partial squared distance along the axes
    /// processed so far exceeds the accumulator's bound AND the loop has
    /// passed the origin on that axis; from there the per-axis distance only
    /// grows, so the remainder of the loop cannot improve on the bound.
    pub(crate) fn scan_nearest(&self, oi: i32, oj: i32, ok: i32, acc: &mut NearestAcc) {
        for i in 0..BLOCK_SIZE {
            let di = i - oi;
            let len_i = di * di;
            if len_i > acc.bound() {
                if i >= oi {
                    break;
                }
                continue;
            }
            for j in 0..BLOCK_SIZE {
                if self.rows[i as usize][j as usize] == 0 {
                    continue;
                }
                let dj = j - oj;
                let len_ij = len_i + dj * dj;
                if len_ij > acc.bound() {
                    if j >= oj {
                        break;
                    }
                    continue;
                }
                for k in 0..BLOCK_SIZE {
                    if !self.get(i as usize, j as usize, k as usize) {
                        continue;
                    }
                    let dk = k - ok;
                    acc.consider(len_ij + dk * dk, Offset { di, dj, dk });
                }
            }
        }
    }
}

impl Default for BitBlock {
    fn default() -> Self {
        Self::new()
    }
}
