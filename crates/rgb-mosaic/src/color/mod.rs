//! Color coordinate type for the 24-bit RGB cube.
//!
//! The color domain is exactly 256^3 = 16,777,216 values, which equals the
//! pixel count of the 4096x4096 canvas. This equality is what makes a total
//! bijection between colors and pixels possible.

use std::fmt;

mod rgb;

pub use rgb::Rgb;

/// Number of distinct values per color channel.
pub const CHANNEL_VALUES: usize = 256;

/// Total number of colors in the cube (equals the canvas pixel count).
pub const COLOR_COUNT: usize = CHANNEL_VALUES * CHANNEL_VALUES * CHANNEL_VALUES;

/// Enumerate every color in the cube, red outermost, blue innermost.
///
/// The placement engine shuffles this sequence with a seeded RNG; the
/// enumeration order here is the canonical pre-shuffle order, so the same
/// seed always yields the same shuffled sequence.
pub fn all_colors() -> Vec<Rgb> {
    let mut colors = Vec::with_capacity(COLOR_COUNT);
    for r in 0..=255u8 {
        for g in 0..=255u8 {
            for b in 0..=255u8 {
                colors.push(Rgb::new(r, g, b));
            }
        }
    }
    colors
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}
