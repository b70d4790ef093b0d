//! End-to-end mosaic generation tests.
//!
//! The full 16.7M-color run is `#[ignore]`d: it takes minutes and is meant
//! to be run in release mode (`cargo test --release -- --ignored`). The
//! remaining tests exercise the same pipeline on bounded step counts.

use pretty_assertions::assert_eq;
use rgb_mosaic::{
    MosaicBuilder, MosaicImage, Neighborhood, Pixel, Rgb, CANVAS_SIZE, COLOR_COUNT, PIXEL_COUNT,
    SEED_STRIP_LEN,
};

const PPM_HEADER: &[u8] = b"P6\n4096 4096\n255\n";

#[test]
fn test_ppm_output_shape() {
    let image = MosaicImage::new(vec![Rgb::new(255, 0, 128); PIXEL_COUNT]);
    let mut buf = Vec::new();
    image.write_ppm(&mut buf).unwrap();

    assert_eq!(&buf[..PPM_HEADER.len()], PPM_HEADER);
    assert_eq!(buf.len(), PPM_HEADER.len() + PIXEL_COUNT * 3);
    assert_eq!(&buf[PPM_HEADER.len()..PPM_HEADER.len() + 3], &[255, 0, 128]);
}

#[test]
fn test_partial_growth_keeps_placed_subset_bijective() {
    let mut engine = MosaicBuilder::new().seed(5).build();

    let mut colors = Vec::with_capacity(SEED_STRIP_LEN + 20_000);
    let mut pixels = Vec::with_capacity(SEED_STRIP_LEN + 20_000);
    for y in 0..SEED_STRIP_LEN {
        let pixel = Pixel::new(0, y as u16);
        colors.push(engine.canvas().color_at(pixel).unwrap());
        pixels.push(pixel);
    }
    for _ in 0..20_000 {
        let placement = engine.place_next().unwrap().unwrap();
        colors.push(placement.color);
        pixels.push(placement.pixel);
    }

    // No color placed twice, no pixel assigned twice.
    let mut color_seen = vec![false; COLOR_COUNT];
    for &color in &colors {
        assert!(!color_seen[color.linear_index()], "color {} placed twice", color);
        color_seen[color.linear_index()] = true;
    }
    let mut pixel_seen = vec![false; PIXEL_COUNT];
    for &pixel in &pixels {
        let index = pixel.x as usize * CANVAS_SIZE + pixel.y as usize;
        assert!(!pixel_seen[index], "pixel ({}, {}) assigned twice", pixel.x, pixel.y);
        pixel_seen[index] = true;
    }

    // Forward and inverse canvas maps agree on the placed subset.
    for (&color, &pixel) in colors.iter().zip(&pixels) {
        assert_eq!(engine.canvas().color_at(pixel), Some(color));
        assert_eq!(engine.canvas().pixel_of(color), pixel);
    }
}

#[test]
fn test_neighborhood_option_changes_growth() {
    let mut adjacent = MosaicBuilder::new().seed(11).build();
    let mut knight = MosaicBuilder::new()
        .seed(11)
        .neighborhood(Neighborhood::KnightsMove)
        .build();

    // Same seed, same shuffled sequence, different geometry.
    let a = adjacent.place_next().unwrap().unwrap();
    let k = knight.place_next().unwrap().unwrap();
    assert_eq!(a.color, k.color);
    assert_ne!(a.pixel, k.pixel);
}

/// Full-scale end-to-end run with seed 13: the output file must be exactly
/// header plus 4096*4096*3 payload bytes, and decoding the payload must
/// reproduce a total bijection — every color exactly once.
#[test]
#[ignore = "full 16.7M-color run; run in release mode"]
fn test_full_run_seed_13_writes_bijective_ppm() {
    let mut engine = MosaicBuilder::new().seed(13).build();
    engine.run().unwrap();
    let image = engine.into_image().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("allrgb.ppm");
    image.write_ppm_file(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), PPM_HEADER.len() + PIXEL_COUNT * 3);
    assert_eq!(&bytes[..PPM_HEADER.len()], PPM_HEADER);

    let mut seen = vec![false; COLOR_COUNT];
    for rgb in bytes[PPM_HEADER.len()..].chunks_exact(3) {
        let color = Rgb::new(rgb[0], rgb[1], rgb[2]);
        assert!(!seen[color.linear_index()], "color {} appears twice", color);
        seen[color.linear_index()] = true;
    }
    assert!(seen.iter().all(|&s| s), "some colors never appear");
}
