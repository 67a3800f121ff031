//! Synthetic test image generation.
//!
//! Deterministic RGBA patterns for resize tests. All functions produce
//! reproducible output suitable for regression testing.

#![allow(dead_code)]

use rand::{rngs::StdRng, Rng, SeedableRng};
use resampler::Image;

/// The 2x2 fixture: transparent black, red / green, blue.
pub fn quad() -> Image {
    Image::from_raw(
        2,
        2,
        vec![
            0x00, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0xff, //
            0x00, 0xff, 0x00, 0xff, 0x00, 0x00, 0xff, 0xff,
        ],
    )
    .unwrap()
}

/// A solid color image.
pub fn solid(width: u32, height: u32, px: [u8; 4]) -> Image {
    let pixels = (0..width * height).flat_map(|_| px).collect();
    Image::from_raw(width, height, pixels).unwrap()
}

/// Horizontal gradient on R, vertical on G, opaque.
pub fn gradient(width: u32, height: u32) -> Image {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 255) / width.max(1)) as u8;
            let g = ((y * 255) / height.max(1)) as u8;
            pixels.extend_from_slice(&[r, g, 128, 255]);
        }
    }
    Image::from_raw(width, height, pixels).unwrap()
}

/// Seeded random pixels, including random alpha.
pub fn noise(width: u32, height: u32, seed: u64) -> Image {
    let mut rng = StdRng::seed_from_u64(seed);
    let pixels = (0..width * height * 4).map(|_| rng.gen()).collect();
    Image::from_raw(width, height, pixels).unwrap()
}

/// Re-wrap `img` with `pad` junk bytes after every row.
pub fn with_padding(img: &Image, pad: usize) -> Image {
    let row_len = img.width() as usize * 4;
    let mut pixels = Vec::with_capacity((row_len + pad) * img.height() as usize);
    for y in 0..img.height() as usize {
        pixels.extend_from_slice(img.row(y));
        pixels.extend(std::iter::repeat(0xEE).take(pad));
    }
    Image::from_raw_with_stride(img.width(), img.height(), row_len + pad, pixels).unwrap()
}

/// Assert two images have the same size and every component within `tolerance`.
pub fn assert_close(got: &Image, want: &Image, tolerance: u8) {
    assert_eq!(
        (got.width(), got.height()),
        (want.width(), want.height()),
        "size mismatch"
    );
    for y in 0..got.height() as usize {
        for (i, (a, b)) in got.row(y).iter().zip(want.row(y)).enumerate() {
            assert!(
                a.abs_diff(*b) <= tolerance,
                "row {y} byte {i}: got {a:#04x}, want {b:#04x}"
            );
        }
    }
}
