//! Two-level hierarchical presence index over the color cube.
//!
//! [`PresenceIndex`] tracks which colors are currently marked and answers
//! "which marked color is nearest to this origin?" without scanning millions
//! of cells. The cube is partitioned into 16x16x16 super-cells of 16x16x16
//! colors each: a coarse [`BitBlock`] records which super-cells are non-empty
//! and a flat arena of fine blocks records individual colors. A super-cell
//! bit is set iff its fine block is non-empty.
//!
//! During steady-state growth the engine stores exactly the *frontier*
//! colors here (placed colors that still touch a free pixel), so a query is
//! always "nearest growth anchor", not "nearest placed color".
//!
//! # Approximate coarse metric
//!
//! The coarse scan measures squared distance between super-cell *indices*
//! (0..16), not the 16-unit physical spacing the cells represent. The set of
//! super-cells tied at that index metric is then searched exhaustively at
//! fine granularity. A marked color just across the boundary of a
//! non-candidate super-cell can therefore be missed in favor of a slightly
//! farther one, so the query is a fast approximation of true nearest
//! neighbor, not an exact one. Within a single candidate super-cell the fine
//! result is exact.

mod block;

pub use block::BitBlock;

use crate::color::Rgb;

/// Super-cells per axis; also the side length of a fine block.
const GRID: i32 = 16;

/// Total number of fine blocks in the arena.
const FINE_BLOCKS: usize = (GRID * GRID * GRID) as usize;

/// An origin-relative coordinate offset returned by a nearest query.
///
/// Adding an offset to the query origin yields the absolute coordinate of
/// the matching cell (super-cell indices at the coarse level, colors at the
/// fine level).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    /// Offset along the first (red) axis.
    pub di: i32,
    /// Offset along the second (green) axis.
    pub dj: i32,
    /// Offset along the third (blue) axis.
    pub dk: i32,
}

impl Offset {
    /// Resolve a fine-level offset back to the absolute color it points at.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that the sum stays within the color cube, which holds
    /// for any offset produced by a query (it points at a marked color).
    #[inline]
    pub fn apply(self, origin: Rgb) -> Rgb {
        let r = origin.r as i32 + self.di;
        let g = origin.g as i32 + self.dj;
        let b = origin.b as i32 + self.dk;
        debug_assert!(
            (0..256).contains(&r) && (0..256).contains(&g) && (0..256).contains(&b),
            "offset {:?} leaves the color cube from origin {}",
            self,
            origin,
        );
        Rgb::new(r as u8, g as u8, b as u8)
    }
}

/// Running best result threaded through a bounded scan.
///
/// Replaces ambient mutable "current best" state: the scan reads its pruning
/// bound from here and folds every candidate in via [`consider`](Self::consider).
/// Ties at the minimum are all retained, in scan order.
#[derive(Debug, Clone)]
pub(crate) struct NearestAcc {
    best_dist: i32,
    offsets: Vec<Offset>,
}

impl NearestAcc {
    pub(crate) fn new() -> Self {
        Self {
            best_dist: i32::MAX,
            offsets: Vec::with_capacity(16),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.best_dist = i32::MAX;
        self.offsets.clear();
    }

    /// Current pruning bound (`i32::MAX` until the first hit).
    #[inline]
    pub(crate) fn bound(&self) -> i32 {
        self.best_dist
    }

    /// Fold in one candidate: ignored if worse than the bound, replaces the
    /// tie list if strictly better, appended if equal.
    #[inline]
    pub(crate) fn consider(&mut self, dist_sq: i32, offset: Offset) {
        if dist_sq > self.best_dist {
            return;
        }
        if dist_sq < self.best_dist {
            self.best_dist = dist_sq;
            self.offsets.clear();
        }
        self.offsets.push(offset);
    }

    pub(crate) fn best(&self) -> i32 {
        self.best_dist
    }

    pub(crate) fn hits(&self) -> &[Offset] {
        &self.offsets
    }
}

/// Reusable coarse and fine accumulators for [`PresenceIndex::nearest_occupied`].
///
/// Owned by the caller and passed explicitly so the hot loop never
/// reallocates the tie lists. A fresh scratch works identically; reuse is
/// purely an allocation optimization.
#[derive(Debug, Clone)]
pub struct QueryScratch {
    coarse: NearestAcc,
    fine: NearestAcc,
}

impl QueryScratch {
    /// Create a scratch with empty accumulators.
    pub fn new() -> Self {
        Self {
            coarse: NearestAcc::new(),
            fine: NearestAcc::new(),
        }
    }
}

impl Default for QueryScratch {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a nearest-occupied query, borrowing the scratch's tie list.
#[derive(Debug, Clone, Copy)]
pub struct Nearest<'a> {
    /// Minimum squared Euclidean distance over all marked colors reachable
    /// through the coarse candidate set.
    pub dist_sq: i32,
    /// Every origin-relative offset achieving `dist_sq`, in scan order.
    /// Never empty.
    pub offsets: &'a [Offset],
}

/// Sparse presence index over the 256^3 color cube.
///
/// # Example
///
/// ```
/// use rgb_mosaic::{PresenceIndex, QueryScratch, Rgb};
///
/// let mut index = PresenceIndex::new();
/// let mut scratch = QueryScratch::new();
/// index.mark(Rgb::new(10, 10, 10));
///
/// let near = index.nearest_occupied(Rgb::new(12, 10, 10), &mut scratch).unwrap();
/// assert_eq!(near.dist_sq, 4);
/// assert_eq!(near.offsets[0].apply(Rgb::new(12, 10, 10)), Rgb::new(10, 10, 10));
/// ```
#[derive(Debug, Clone)]
pub struct PresenceIndex {
    /// Which super-cells contain at least one marked color.
    coarse: BitBlock,
    /// Fine blocks, one per super-cell, indexed by coarse linear index.
    fine: Vec<BitBlock>,
}

impl PresenceIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            coarse: BitBlock::new(),
            fine: vec![BitBlock::new(); FINE_BLOCKS],
        }
    }

    #[inline]
    fn cell_index(ci: i32, cj: i32, ck: i32) -> usize {
        ((ci * GRID + cj) * GRID + ck) as usize
    }

    /// Mark a color present.
    ///
    /// Sets the fine bit and unconditionally the owning super-cell bit.
    pub fn mark(&mut self, color: Rgb) {
        let (ci, cj, ck) = (color.r as usize >> 4, color.g as usize >> 4, color.b as usize >> 4);
        self.coarse.set(ci, cj, ck);
        self.fine[Self::cell_index(ci as i32, cj as i32, ck as i32)].set(
            color.r as usize & 15,
            color.g as usize & 15,
            color.b as usize & 15,
        );
    }

    /// Unmark a color.
    ///
    /// Clears the fine bit; the super-cell bit is cleared only once its fine
    /// block becomes empty. The hierarchy is two levels deep, so emptiness
    /// never propagates further.
    pub fn unmark(&mut self, color: Rgb) {
        let (ci, cj, ck) = (color.r as usize >> 4, color.g as usize >> 4, color.b as usize >> 4);
        let block = &mut self.fine[Self::cell_index(ci as i32, cj as i32, ck as i32)];
        block.clear(
            color.r as usize & 15,
            color.g as usize & 15,
            color.b as usize & 15,
        );
        if block.is_empty() {
            self.coarse.clear(ci, cj, ck);
        }
    }

    /// Whether a color is currently marked.
    pub fn contains(&self, color: Rgb) -> bool {
        let (ci, cj, ck) = (color.r as usize >> 4, color.g as usize >> 4, color.b as usize >> 4);
        self.fine[Self::cell_index(ci as i32, cj as i32, ck as i32)].get(
            color.r as usize & 15,
            color.g as usize & 15,
            color.b as usize & 15,
        )
    }

    /// Whether no color is marked.
    pub fn is_empty(&self) -> bool {
        self.coarse.is_empty()
    }

    /// Find the marked colors nearest to `origin`.
    ///
    /// Two bounded scans: the coarse block is scanned at the origin's
    /// super-cell coordinates, then every super-cell tied for best has its
    /// fine block scanned with the origin translated into block-local
    /// coordinates, all candidates folding into one shared accumulator.
    /// Fine offsets are origin-relative in absolute color units, so
    /// [`Offset::apply`] recovers the matching color.
    ///
    /// Returns `None` when the index is empty; callers are expected to
    /// guarantee at least one marked color before querying.
    pub fn nearest_occupied<'s>(
        &self,
        origin: Rgb,
        scratch: &'s mut QueryScratch,
    ) -> Option<Nearest<'s>> {
        let QueryScratch { coarse, fine } = scratch;
        coarse.reset();
        fine.reset();

        let (oi, oj, ok) = (origin.r as i32, origin.g as i32, origin.b as i32);
        let (sci, scj, sck) = (oi / GRID, oj / GRID, ok / GRID);
        self.coarse.scan_nearest(sci, scj, sck, coarse);
        if coarse.hits().is_empty() {
            return None;
        }

        for cell in coarse.hits() {
            let (ci, cj, ck) = (sci + cell.di, scj + cell.dj, sck + cell.dk);
            let block = &self.fine[Self::cell_index(ci, cj, ck)];
            // Translate the origin into this block's local space; the result
            // can be negative or >= 16 when the block is not the origin's own.
            block.scan_nearest(oi - GRID * ci, oj - GRID * cj, ok - GRID * ck, fine);
        }

        // Every candidate super-cell bit implies a non-empty fine block, so
        // at least one hit was folded in.
        Some(Nearest {
            dist_sq: fine.best(),
            offsets: fine.hits(),
        })
    }
}

impl Default for PresenceIndex {
    fn default() -> Self {
        Self::new()
    }
}
