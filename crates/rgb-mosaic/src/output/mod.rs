//! Finished-image container and PPM serialization.

mod mosaic_image;

pub use mosaic_image::MosaicImage;
