//! Fuzz target for the resize policies.
//!
//! Tests that resize, fit and thumbnail handle arbitrary sizes and pixels
//! without panicking and honor their output-size contracts.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use resampler::{fit, resize, thumbnail, Image, ResampleFilter};

const FILTERS: [ResampleFilter; 6] = [
    ResampleFilter::NEAREST_NEIGHBOR,
    ResampleFilter::BOX,
    ResampleFilter::LINEAR,
    ResampleFilter::CATMULL_ROM,
    ResampleFilter::LANCZOS,
    ResampleFilter::BSPLINE,
];

/// Structured input for resize fuzzing.
#[derive(Arbitrary, Debug)]
struct ResizeInput {
    /// Source width (clamped to reasonable range)
    width: u8,
    /// Source height (clamped to reasonable range)
    height: u8,
    /// Target width, zero allowed
    dst_width: u8,
    /// Target height, zero allowed
    dst_height: u8,
    /// Filter selector
    filter: u8,
    /// Raw pixel data
    data: Vec<u8>,
}

fuzz_target!(|input: ResizeInput| {
    let width = (input.width as u32 % 48).max(1);
    let height = (input.height as u32 % 48).max(1);
    let expected_len = (width * height * 4) as usize;

    // If we don't have enough data, skip this input
    if input.data.len() < expected_len {
        return;
    }
    let src = match Image::from_raw(width, height, input.data[..expected_len].to_vec()) {
        Ok(img) => img,
        Err(_) => return,
    };

    let filter = FILTERS[input.filter as usize % FILTERS.len()];
    let (w, h) = (input.dst_width as u32 % 96, input.dst_height as u32 % 96);

    match resize(&src, w, h, filter) {
        Ok(out) => {
            if w != 0 {
                assert_eq!(out.width(), w);
            }
            if h != 0 {
                assert_eq!(out.height(), h);
            }
        }
        Err(_) => assert!(w == 0 && h == 0, "resize {w}x{h} failed"),
    }

    if w == 0 || h == 0 {
        return;
    }

    let fitted = fit(&src, w, h, filter).expect("fit failed");
    assert!(fitted.width() <= w && fitted.height() <= h);

    let thumb = thumbnail(&src, w, h, filter).expect("thumbnail failed");
    assert_eq!((thumb.width(), thumb.height()), (w, h));
});
