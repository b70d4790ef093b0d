//! Greedy frontier-growth placement engine.
//!
//! [`PlacementEngine`] drives the whole run: it shuffles the color sequence
//! with a seeded RNG, seeds one full canvas column, then places the
//! remaining colors one at a time next to their nearest frontier color.
//!
//! The lifecycle is Seeding -> Growing -> Done. Seeding happens in the
//! constructor, so the frontier index is guaranteed non-empty before the
//! first nearest query. During Growing the index holds exactly the frontier
//! colors: a color is marked when its pixel still borders a free pixel and
//! unmarked as soon as its last free neighbor fills in.
//!
//! All randomness (the color shuffle and the neighbor-slot visiting order)
//! comes from one `StdRng`, so a seed determines the entire placement
//! sequence byte for byte.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::api::MosaicError;
use crate::canvas::{Canvas, Neighborhood, Pixel, CANVAS_SIZE};
use crate::color::{all_colors, Rgb, COLOR_COUNT};
use crate::index::{PresenceIndex, QueryScratch};
use crate::output::MosaicImage;

/// Number of colors assigned during Seeding: one full canvas column.
pub const SEED_STRIP_LEN: usize = CANVAS_SIZE;

/// Record of one growth step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The color that was placed.
    pub color: Rgb,
    /// The pixel it landed on.
    pub pixel: Pixel,
    /// The frontier color it grew from.
    pub anchor: Rgb,
    /// Squared color distance between `color` and `anchor`.
    pub dist_sq: i32,
}

/// The greedy placement loop over canvas, frontier index and color sequence.
///
/// Construct via [`MosaicBuilder`](crate::MosaicBuilder) or
/// [`PlacementEngine::new`], then either [`run`](Self::run) to completion or
/// step with [`place_next`](Self::place_next) (the CLI steps so it can log
/// progress).
pub struct PlacementEngine {
    canvas: Canvas,
    frontier: PresenceIndex,
    /// The full shuffled color sequence; `colors[..SEED_STRIP_LEN]` went
    /// into the seed strip.
    colors: Vec<Rgb>,
    /// Position of the next color to place.
    cursor: usize,
    rng: StdRng,
    scratch: QueryScratch,
    neighbor_buf: Vec<Pixel>,
}

impl PlacementEngine {
    /// Shuffle the color cube with `seed` and seed column x=0.
    ///
    /// Every seeded color is registered in the frontier index
    /// unconditionally, which is exact: right after seeding each seeded
    /// pixel has the whole x=1 column free beside it.
    pub fn new(seed: u64, neighborhood: Neighborhood) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut colors = all_colors();
        colors.shuffle(&mut rng);

        let mut canvas = Canvas::new(neighborhood);
        let mut frontier = PresenceIndex::new();
        for y in 0..SEED_STRIP_LEN {
            let color = colors[y];
            canvas.place(Pixel::new(0, y as u16), color);
            frontier.mark(color);
        }

        Self {
            canvas,
            frontier,
            colors,
            cursor: SEED_STRIP_LEN,
            rng,
            scratch: QueryScratch::new(),
            neighbor_buf: Vec::with_capacity(8),
        }
    }

    /// Place the next color of the shuffled sequence.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted. A query against an
    /// empty frontier or an anchor without a free neighbor slot is a hard
    /// error, never a silently skipped color.
    pub fn place_next(&mut self) -> Result<Option<Placement>, MosaicError> {
        let Some(&color) = self.colors.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;

        // Nearest frontier color; first tied offset wins, deterministically.
        let (dist_sq, offset) = {
            let near = self
                .frontier
                .nearest_occupied(color, &mut self.scratch)
                .ok_or(MosaicError::FrontierEmpty { color })?;
            (near.dist_sq, near.offsets[0])
        };
        let anchor = offset.apply(color);
        let anchor_pixel = self.canvas.pixel_of(anchor);

        // Visit the anchor's neighbor slots in uniformly random order and
        // take the first free one.
        self.neighbor_buf.clear();
        self.neighbor_buf.extend(self.canvas.neighbors(anchor_pixel));
        self.neighbor_buf.shuffle(&mut self.rng);
        let pixel = self
            .neighbor_buf
            .iter()
            .copied()
            .find(|&p| self.canvas.is_free(p))
            .ok_or(MosaicError::NoFreeNeighbor { color, anchor })?;

        self.canvas.place(pixel, color);
        if self.canvas.is_boundary(pixel) {
            self.frontier.mark(color);
        }
        self.retire_around(pixel);

        Ok(Some(Placement {
            color,
            pixel,
            anchor,
            dist_sq,
        }))
    }

    /// Drop neighbors of a freshly filled pixel out of the frontier once
    /// they no longer border a free pixel.
    fn retire_around(&mut self, pixel: Pixel) {
        for neighbor in self.canvas.neighbors(pixel) {
            if let Some(color) = self.canvas.color_at(neighbor) {
                if !self.canvas.is_boundary(neighbor) {
                    self.frontier.unmark(color);
                }
            }
        }
    }

    /// Run the growth loop to completion.
    pub fn run(&mut self) -> Result<(), MosaicError> {
        while self.place_next()?.is_some() {}
        Ok(())
    }

    /// Number of colors placed so far (seed strip included).
    pub fn placed(&self) -> usize {
        self.canvas.placed()
    }

    /// Total number of colors to place.
    pub fn total(&self) -> usize {
        COLOR_COUNT
    }

    /// Whether every color has been consumed.
    pub fn is_done(&self) -> bool {
        self.cursor == self.colors.len()
    }

    /// The canvas state (for inspection and tests).
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The frontier index state (for inspection and tests).
    pub fn frontier(&self) -> &PresenceIndex {
        &self.frontier
    }

    /// Consume the engine into the finished image.
    ///
    /// Errors with [`MosaicError::Incomplete`] if any pixel is unassigned.
    pub fn into_image(self) -> Result<MosaicImage, MosaicError> {
        if !self.canvas.is_complete() {
            return Err(MosaicError::Incomplete {
                placed: self.canvas.placed(),
            });
        }
        Ok(MosaicImage::new(self.canvas.into_colors()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeding_fills_column_zero_and_frontier() {
        let engine = PlacementEngine::new(13, Neighborhood::Adjacent8);
        assert_eq!(engine.placed(), SEED_STRIP_LEN);
        for y in [0u16, 1, 2048, 4095] {
            let color = engine.canvas().color_at(Pixel::new(0, y)).unwrap();
            assert!(
                engine.frontier().contains(color),
                "seeded color {} at (0, {}) missing from frontier",
                color,
                y,
            );
        }
        assert!(engine.canvas().is_free(Pixel::new(1, 0)));
    }

    #[test]
    fn test_seeding_is_idempotent_for_a_seed() {
        let a = PlacementEngine::new(13, Neighborhood::Adjacent8);
        let b = PlacementEngine::new(13, Neighborhood::Adjacent8);
        for y in 0..SEED_STRIP_LEN {
            let pixel = Pixel::new(0, y as u16);
            assert_eq!(a.canvas().color_at(pixel), b.canvas().color_at(pixel));
        }
        let c = PlacementEngine::new(14, Neighborhood::Adjacent8);
        let differs = (0..SEED_STRIP_LEN).any(|y| {
            let pixel = Pixel::new(0, y as u16);
            a.canvas().color_at(pixel) != c.canvas().color_at(pixel)
        });
        assert!(differs, "different seeds should shuffle differently");
    }

    #[test]
    fn test_growth_places_adjacent_to_anchor() {
        let mut engine = PlacementEngine::new(7, Neighborhood::Adjacent8);
        for _ in 0..200 {
            let placement = engine.place_next().unwrap().unwrap();
            let anchor_pixel = engine.canvas().pixel_of(placement.anchor);
            let dx = (placement.pixel.x as i32 - anchor_pixel.x as i32).abs();
            let dy = (placement.pixel.y as i32 - anchor_pixel.y as i32).abs();
            assert!(dx <= 1 && dy <= 1 && dx + dy > 0);
            assert_eq!(placement.dist_sq, placement.color.dist_sq(placement.anchor));
        }
    }

    #[test]
    fn test_knight_neighborhood_places_a_knights_move_away() {
        let mut engine = PlacementEngine::new(7, Neighborhood::KnightsMove);
        let placement = engine.place_next().unwrap().unwrap();
        let anchor_pixel = engine.canvas().pixel_of(placement.anchor);
        let dx = (placement.pixel.x as i32 - anchor_pixel.x as i32).abs();
        let dy = (placement.pixel.y as i32 - anchor_pixel.y as i32).abs();
        assert_eq!(dx.min(dy), 1);
        assert_eq!(dx.max(dy), 2);
    }

    #[test]
    fn test_no_free_neighbor_is_a_hard_error() {
        let mut engine = PlacementEngine::new(1, Neighborhood::Adjacent8);

        // Force the next query to anchor at the corner pixel (0, 0): retire
        // every other seeded color from the frontier, then occupy the
        // corner's remaining free neighbors by hand.
        let corner_color = engine.canvas.color_at(Pixel::new(0, 0)).unwrap();
        for y in 1..SEED_STRIP_LEN {
            let color = engine.canvas.color_at(Pixel::new(0, y as u16)).unwrap();
            engine.frontier.unmark(color);
        }
        let last = engine.colors.len();
        engine.canvas.place(Pixel::new(1, 0), engine.colors[last - 1]);
        engine.canvas.place(Pixel::new(1, 1), engine.colors[last - 2]);

        match engine.place_next() {
            Err(MosaicError::NoFreeNeighbor { anchor, .. }) => {
                assert_eq!(anchor, corner_color);
            }
            other => panic!("expected NoFreeNeighbor, got {:?}", other),
        }
    }

    #[test]
    fn test_into_image_rejects_incomplete_run() {
        let engine = PlacementEngine::new(3, Neighborhood::Adjacent8);
        match engine.into_image() {
            Err(MosaicError::Incomplete { placed }) => assert_eq!(placed, SEED_STRIP_LEN),
            _ => panic!("expected Incomplete"),
        }
    }
}
