//! rgb-mosaic: every 24-bit RGB color on one 4096x4096 canvas
//!
//! This library assigns each of the 16,777,216 possible RGB colors to a
//! unique pixel so that numerically close colors tend to land spatially
//! close, producing an "all-colors" mosaic. The result is a total bijection:
//! every color appears exactly once, every pixel is assigned exactly once.
//!
//! # Quick Start
//!
//! The [`MosaicBuilder`] is the primary entry point:
//!
//! ```no_run
//! use rgb_mosaic::MosaicBuilder;
//!
//! let image = MosaicBuilder::new().seed(13).generate()?;
//! image.write_ppm_file("allrgb.ppm")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! For progress reporting, [`MosaicBuilder::build`] returns a steppable
//! [`PlacementEngine`] instead.
//!
//! # Algorithm
//!
//! The mosaic grows greedily from a seeded strip:
//!
//! ```text
//! shuffled color sequence        (seeded StdRng, fixed for the whole run)
//!     |
//!     v
//! Seeding                        (first 4096 colors fill column x=0,
//!     |                           all registered as frontier)
//!     v
//! ╔═══════════════════════════════════════════════╗
//! ║  Growth loop, once per remaining color C      ║
//! ║                                               ║
//! ║  nearest frontier color to C   (PresenceIndex)║
//! ║      |                                        ║
//! ║  anchor pixel                  (inverse map)  ║
//! ║      |                                        ║
//! ║  shuffle anchor's neighbors, take first free  ║
//! ║      |                                        ║
//! ║  place C; mark C frontier if it borders a     ║
//! ║  free pixel; retire filled-in neighbors       ║
//! ╚═══════════════════════════════════════════════╝
//!     |
//!     v
//! MosaicImage -> binary PPM (P6)
//! ```
//!
//! A *frontier* color is a placed color whose pixel still has a free
//! neighbor; only those are eligible growth anchors, and the
//! [`PresenceIndex`] stores exactly that set during growth.
//!
//! # The presence index
//!
//! "Find a nearby already-placed color" would be an O(n) scan over millions
//! of colors done millions of times. Instead the color cube is covered by a
//! two-level bitmask hierarchy: a coarse 16x16x16 block of super-cells, each
//! owning a fine 16x16x16 block of colors. A query scans the coarse block
//! with monotonic axis pruning, then scans only the fine blocks of the
//! super-cells tied for best. The coarse level measures distance between
//! super-cell indices rather than physical color spacing, so the query is a
//! deliberate approximation of true nearest neighbor; see the
//! [`index`] module docs for the exact semantics.
//!
//! # Determinism
//!
//! One seed drives the color shuffle and the neighbor-slot visiting order,
//! and ties in the nearest query resolve to the first offset in scan order,
//! so a run is reproducible byte for byte. The algorithm is a greedy
//! heuristic with an explicit tie-breaking policy, not an optimizer: it
//! makes no global smoothness guarantee.

pub mod api;
pub mod canvas;
pub mod color;
pub mod engine;
pub mod index;
pub mod output;


pub use api::{MosaicBuilder, MosaicError};
pub use canvas::{Canvas, Neighborhood, Pixel, CANVAS_SIZE, PIXEL_COUNT};
pub use color::{all_colors, Rgb, COLOR_COUNT};
pub use engine::{Placement, PlacementEngine, SEED_STRIP_LEN};
pub use index::{BitBlock, Nearest, Offset, PresenceIndex, QueryScratch};
pub use output::MosaicImage;
