//! Pixel canvas with bijective color bookkeeping and boundary geometry.
//!
//! [`Canvas`] owns the forward pixel-to-color map and the inverse
//! color-to-pixel lookup the placement engine needs to turn a nearest-color
//! answer back into a canvas location. It also provides the boundary
//! predicate the frontier bookkeeping is built on: a pixel is *boundary*
//! while it is occupied and at least one in-bounds neighbor is still free.
//!
//! The canvas records placements; deciding when a color enters or leaves the
//! frontier index is the engine's job.

use crate::color::{Rgb, COLOR_COUNT};

/// Canvas side length in pixels. `CANVAS_SIZE^2` equals the color count.
pub const CANVAS_SIZE: usize = 4096;

/// Total number of pixels on the canvas.
pub const PIXEL_COUNT: usize = CANVAS_SIZE * CANVAS_SIZE;

/// A canvas position, each coordinate in `0..4096`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Column (0..=4095).
    pub x: u16,
    /// Row (0..=4095).
    pub y: u16,
}

impl Pixel {
    /// Create a pixel position.
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Row-major cell index with x outer, y inner, matching the output
    /// pixel order.
    #[inline]
    fn index(self) -> usize {
        self.x as usize * CANVAS_SIZE + self.y as usize
    }
}

/// Pixel adjacency used for growth and boundary checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Neighborhood {
    /// The eight unit offsets around a pixel (the default).
    #[default]
    Adjacent8,
    /// The eight knight's-move offsets. Produces a looser, speckled growth
    /// texture since placements skip over directly adjacent pixels.
    KnightsMove,
}

impl Neighborhood {
    /// The offset set defining this adjacency.
    pub const fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Neighborhood::Adjacent8 => &[
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 1),
                (1, -1),
                (1, 0),
                (1, 1),
            ],
            Neighborhood::KnightsMove => &[
                (-2, -1),
                (-2, 1),
                (2, -1),
                (2, 1),
                (-1, -2),
                (-1, 2),
                (1, -2),
                (1, 2),
            ],
        }
    }
}

/// The 4096x4096 grid of pixel-to-color assignments and its inverse.
///
/// Invariant: the forward and inverse maps agree for every placed color at
/// all times (bijective on the placed subset); at completion both are total
/// bijections over the full pixel and color domains. Placements are
/// monotonic: a cell goes from free to occupied exactly once and is never
/// cleared.
#[derive(Debug)]
pub struct Canvas {
    /// Pixel -> color, row-major with x outer. `None` is unassigned.
    cells: Vec<Option<Rgb>>,
    /// Color linear index -> pixel; meaningful only once the color is placed.
    positions: Vec<Pixel>,
    placed: usize,
    neighborhood: Neighborhood,
}

impl Canvas {
    /// Create an empty canvas using the given adjacency.
    pub fn new(neighborhood: Neighborhood) -> Self {
        Self {
            cells: vec![None; PIXEL_COUNT],
            positions: vec![Pixel::new(0, 0); COLOR_COUNT],
            placed: 0,
            neighborhood,
        }
    }

    /// Whether `(x, y)` lies on the canvas.
    #[inline]
    pub fn in_bounds(x: i32, y: i32) -> bool {
        (0..CANVAS_SIZE as i32).contains(&x) && (0..CANVAS_SIZE as i32).contains(&y)
    }

    /// The adjacency this canvas was created with.
    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// Assign `color` to `pixel`, recording both map directions.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts the pixel is free; placements are never overwritten.
    pub fn place(&mut self, pixel: Pixel, color: Rgb) {
        debug_assert!(
            self.cells[pixel.index()].is_none(),
            "pixel ({}, {}) placed twice",
            pixel.x,
            pixel.y,
        );
        self.cells[pixel.index()] = Some(color);
        self.positions[color.linear_index()] = pixel;
        self.placed += 1;
    }

    /// The color assigned to `pixel`, if any.
    #[inline]
    pub fn color_at(&self, pixel: Pixel) -> Option<Rgb> {
        self.cells[pixel.index()]
    }

    /// Whether `pixel` has no color assigned.
    #[inline]
    pub fn is_free(&self, pixel: Pixel) -> bool {
        self.cells[pixel.index()].is_none()
    }

    /// The pixel a placed color was assigned to.
    ///
    /// Only meaningful for colors that have been placed; the forward map is
    /// the source of truth and the two must agree.
    #[inline]
    pub fn pixel_of(&self, color: Rgb) -> Pixel {
        let pixel = self.positions[color.linear_index()];
        debug_assert_eq!(
            self.color_at(pixel),
            Some(color),
            "inverse lookup for unplaced color {}",
            color,
        );
        pixel
    }

    /// Number of placed colors.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Whether every pixel has been assigned.
    pub fn is_complete(&self) -> bool {
        self.placed == PIXEL_COUNT
    }

    /// The in-bounds neighbors of `pixel` under the configured adjacency,
    /// in offset-table order. Up to 8 pixels.
    pub fn neighbors(&self, pixel: Pixel) -> impl Iterator<Item = Pixel> {
        let (x, y) = (pixel.x as i32, pixel.y as i32);
        self.neighborhood.offsets().iter().filter_map(move |&(dx, dy)| {
            let (nx, ny) = (x + dx, y + dy);
            Self::in_bounds(nx, ny).then(|| Pixel::new(nx as u16, ny as u16))
        })
    }

    /// Whether `pixel` is occupied and still has at least one free in-bounds
    /// neighbor. Out-of-bounds neighbors count as closed.
    pub fn is_boundary(&self, pixel: Pixel) -> bool {
        if self.cells[pixel.index()].is_none() {
            return false;
        }
        self.neighbors(pixel).any(|n| self.is_free(n))
    }

    /// Consume the canvas into its pixel colors, in cell order.
    ///
    /// Callers check completeness first; unassigned cells would be skipped.
    pub(crate) fn into_colors(self) -> Vec<Rgb> {
        debug_assert_eq!(self.placed, PIXEL_COUNT);
        self.cells.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_round_trips_both_maps() {
        let mut canvas = Canvas::new(Neighborhood::Adjacent8);
        let (pixel, color) = (Pixel::new(17, 4000), Rgb::new(9, 8, 7));
        assert!(canvas.is_free(pixel));
        canvas.place(pixel, color);
        assert_eq!(canvas.color_at(pixel), Some(color));
        assert_eq!(canvas.pixel_of(color), pixel);
        assert_eq!(canvas.placed(), 1);
        assert!(!canvas.is_complete());
    }

    #[test]
    fn test_neighbor_counts_at_corner_edge_interior() {
        let canvas = Canvas::new(Neighborhood::Adjacent8);
        assert_eq!(canvas.neighbors(Pixel::new(0, 0)).count(), 3);
        assert_eq!(canvas.neighbors(Pixel::new(0, 100)).count(), 5);
        assert_eq!(canvas.neighbors(Pixel::new(100, 100)).count(), 8);
        assert_eq!(canvas.neighbors(Pixel::new(4095, 4095)).count(), 3);
    }

    #[test]
    fn test_knight_neighborhood_counts_and_reach() {
        let canvas = Canvas::new(Neighborhood::KnightsMove);
        assert_eq!(canvas.neighbors(Pixel::new(0, 0)).count(), 2);
        assert_eq!(canvas.neighbors(Pixel::new(100, 100)).count(), 8);
        // Knight moves never touch the 8-adjacent ring.
        for n in canvas.neighbors(Pixel::new(100, 100)) {
            let (dx, dy) = (
                (n.x as i32 - 100).abs(),
                (n.y as i32 - 100).abs(),
            );
            assert_eq!(dx.min(dy), 1);
            assert_eq!(dx.max(dy), 2);
        }
    }

    #[test]
    fn test_boundary_requires_occupied_and_free_neighbor() {
        let mut canvas = Canvas::new(Neighborhood::Adjacent8);
        let center = Pixel::new(10, 10);
        assert!(!canvas.is_boundary(center), "free pixel is never boundary");

        canvas.place(center, Rgb::new(1, 1, 1));
        assert!(canvas.is_boundary(center));

        // Fill all eight neighbors; the center stops being boundary.
        let mut next = 0u8;
        for n in canvas.neighbors(center).collect::<Vec<_>>() {
            canvas.place(n, Rgb::new(2, 2, next));
            next += 1;
        }
        assert!(!canvas.is_boundary(center));
        // The ring itself still borders free pixels.
        assert!(canvas.is_boundary(Pixel::new(9, 9)));
    }
}
