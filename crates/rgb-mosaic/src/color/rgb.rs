//! The `Rgb` color coordinate.

use super::{CHANNEL_VALUES, COLOR_COUNT};

/// A single color in the 24-bit RGB cube.
///
/// Each channel is a coordinate in `0..=255`; the triple doubles as a point
/// in the 3D color space over which nearest-neighbor queries run. An
/// unassigned canvas cell is `Option::<Rgb>::None` rather than a sentinel
/// value.
///
/// # Example
///
/// ```
/// use rgb_mosaic::Rgb;
///
/// let c = Rgb::new(16, 32, 48);
/// assert_eq!(c.linear_index(), 16 * 65536 + 32 * 256 + 48);
/// assert_eq!(Rgb::from_linear_index(c.linear_index()), c);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255).
    pub r: u8,
    /// Green channel (0..=255).
    pub g: u8,
    /// Blue channel (0..=255).
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The color's position in the canonical r-outer, b-inner enumeration.
    ///
    /// Used as the index into the color-to-pixel inverse lookup table.
    #[inline]
    pub fn linear_index(self) -> usize {
        (self.r as usize * CHANNEL_VALUES + self.g as usize) * CHANNEL_VALUES + self.b as usize
    }

    /// Inverse of [`linear_index`](Self::linear_index).
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `index < COLOR_COUNT`.
    #[inline]
    pub fn from_linear_index(index: usize) -> Self {
        debug_assert!(index < COLOR_COUNT, "color index {} out of range", index);
        Self {
            r: (index >> 16) as u8,
            g: (index >> 8) as u8,
            b: index as u8,
        }
    }

    /// Squared Euclidean distance to another color.
    #[inline]
    pub fn dist_sq(self, other: Rgb) -> i32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        dr * dr + dg * dg + db * db
    }
}
