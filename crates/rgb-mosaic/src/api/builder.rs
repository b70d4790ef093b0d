//! MosaicBuilder -- the ergonomic entry point for the crate.

use crate::api::MosaicError;
use crate::canvas::Neighborhood;
use crate::engine::PlacementEngine;
use crate::output::MosaicImage;

/// Fluent configuration for a mosaic run.
///
/// Configuration methods consume and return `self`; [`build`](Self::build)
/// yields a steppable [`PlacementEngine`] and [`generate`](Self::generate)
/// runs the whole pipeline to a finished [`MosaicImage`].
///
/// # Example
///
/// ```no_run
/// use rgb_mosaic::MosaicBuilder;
///
/// let image = MosaicBuilder::new().seed(13).generate()?;
/// image.write_ppm_file("allrgb.ppm")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MosaicBuilder {
    seed: u64,
    neighborhood: Neighborhood,
}

impl MosaicBuilder {
    /// Create a builder with seed 0 and 8-connected adjacency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed controlling the color shuffle and neighbor-slot order.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the pixel adjacency used for growth and frontier tracking.
    #[inline]
    pub fn neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Build a seeded engine ready for stepping.
    pub fn build(self) -> PlacementEngine {
        PlacementEngine::new(self.seed, self.neighborhood)
    }

    /// Run the full pipeline: seed, grow every color, return the image.
    pub fn generate(self) -> Result<MosaicImage, MosaicError> {
        let mut engine = self.build();
        engine.run()?;
        engine.into_image()
    }
}
