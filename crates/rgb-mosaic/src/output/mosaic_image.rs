//! MosaicImage struct with binary PPM output.
//!
//! [`MosaicImage`] wraps the finished canvas colors with dimension accessors
//! and writes the raw P6 pixel dump: a fixed text header followed by one
//! 3-byte RGB record per pixel. No color-space transform is applied; the
//! bytes are exactly the color's channel values.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::canvas::{Pixel, CANVAS_SIZE, PIXEL_COUNT};
use crate::color::Rgb;

/// The completed mosaic: one color per pixel, x-outer/y-inner order.
///
/// Produced by [`PlacementEngine::into_image`](crate::PlacementEngine::into_image)
/// once every pixel is assigned. The pixel order matches the canvas indexing
/// and is exactly the order the PPM payload is written in.
pub struct MosaicImage {
    /// Pixel colors in row-major order with x outer, y inner.
    pixels: Vec<Rgb>,
}

impl MosaicImage {
    /// Wrap a full canvas worth of pixel colors.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len()` equals the canvas pixel count.
    pub fn new(pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            PIXEL_COUNT,
            "pixel buffer length ({}) must cover the full {}x{} canvas",
            pixels.len(),
            CANVAS_SIZE,
            CANVAS_SIZE,
        );
        Self { pixels }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        CANVAS_SIZE
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        CANVAS_SIZE
    }

    /// The pixel colors as a slice, in output order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The color at a canvas position.
    #[inline]
    pub fn color_at(&self, pixel: Pixel) -> Rgb {
        self.pixels[pixel.x as usize * CANVAS_SIZE + pixel.y as usize]
    }

    /// Write the image as binary PPM (P6).
    ///
    /// Header is `P6\n<width> <height>\n255\n`, payload is `width * height`
    /// 3-byte RGB records in the canvas's x-outer/y-inner order.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "P6\n{} {}\n255\n", self.width(), self.height())?;
        let mut payload = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            payload.extend_from_slice(&[color.r, color.g, color.b]);
        }
        writer.write_all(&payload)
    }

    /// Write the image as binary PPM to a file path.
    pub fn write_ppm_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_layout() {
        let mut pixels = vec![Rgb::new(7, 8, 9); PIXEL_COUNT];
        pixels[0] = Rgb::new(1, 2, 3);
        // Cell index CANVAS_SIZE is pixel (x=1, y=0): x is the outer axis.
        pixels[CANVAS_SIZE] = Rgb::new(4, 5, 6);
        let image = MosaicImage::new(pixels);
        assert_eq!(image.color_at(Pixel::new(1, 0)), Rgb::new(4, 5, 6));

        let mut buf = Vec::new();
        image.write_ppm(&mut buf).unwrap();

        let header = b"P6\n4096 4096\n255\n";
        assert_eq!(&buf[..header.len()], header);
        assert_eq!(buf.len(), header.len() + PIXEL_COUNT * 3);
        assert_eq!(&buf[header.len()..header.len() + 3], &[1, 2, 3]);
        let second_row = header.len() + CANVAS_SIZE * 3;
        assert_eq!(&buf[second_row..second_row + 3], &[4, 5, 6]);
    }
}
