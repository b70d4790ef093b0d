//! Public entry points: the mosaic builder and the unified error type.

mod builder;
mod error;

pub use builder::MosaicBuilder;
pub use error::MosaicError;
