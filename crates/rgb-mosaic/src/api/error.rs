//! Unified error type for the rgb-mosaic public API.

use std::fmt;

use crate::canvas::PIXEL_COUNT;
use crate::color::Rgb;

/// Everything that can go wrong while growing a mosaic.
///
/// The growth loop is a deterministic batch computation, so the failure
/// surface is narrow — but each failure is surfaced loudly. In particular a
/// color that finds no free neighbor slot is an error, never a silently
/// unplaced color: a quiet gap would corrupt the end-of-run bijection, which
/// is strictly worse than stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosaicError {
    /// A nearest-frontier query ran against an empty index. The seeded
    /// strip guarantees this cannot happen in a normal run.
    FrontierEmpty {
        /// The color being placed when the query was issued.
        color: Rgb,
    },
    /// Every neighbor slot of the chosen anchor was already occupied.
    NoFreeNeighbor {
        /// The color that could not be placed.
        color: Rgb,
        /// The frontier color the query selected as growth anchor.
        anchor: Rgb,
    },
    /// The engine was asked for the finished image before every pixel was
    /// assigned.
    Incomplete {
        /// Colors placed so far.
        placed: usize,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MosaicError::FrontierEmpty { color } => {
                write!(f, "frontier index empty while placing color {}", color)
            }
            MosaicError::NoFreeNeighbor { color, anchor } => {
                write!(
                    f,
                    "no available neighbor slot for color {} near anchor {}",
                    color, anchor
                )
            }
            MosaicError::Incomplete { placed } => {
                write!(
                    f,
                    "mosaic incomplete: {} of {} colors placed",
                    placed, PIXEL_COUNT
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {}
