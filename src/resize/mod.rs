//! Image resizing.
//!
//! Three entry points share one separable engine:
//! - [`resize`]: scale to an exact size (one side may be inferred).
//! - [`fit`]: shrink to fit inside a bounding box, preserving aspect ratio.
//! - [`thumbnail`]: scale to cover a box, then center-crop to it exactly.
//!
//! Convolving filters run a horizontal pass followed by a vertical pass, each
//! driven by a [`WeightTable`]. [`ResampleFilter::NEAREST_NEIGHBOR`] skips the
//! tables and samples directly.
//!
//! # Example
//!
//! ```rust
//! use resampler::{resize, Image, ResampleFilter};
//!
//! // Resize a 100x100 RGBA image to 50x50 using Lanczos3
//! let src = Image::from_raw(100, 100, vec![128u8; 100 * 100 * 4]).unwrap();
//! let resized = resize(&src, 50, 50, ResampleFilter::LANCZOS).unwrap();
//! assert_eq!((resized.width(), resized.height()), (50, 50));
//! ```

mod convolve;
mod weights;

use std::ops::Range;

pub use weights::{Span, WeightTable};

use crate::error::{Error, Result};
use crate::filter::ResampleFilter;
use crate::image::{packed_len, Image};

/// Maximum supported target dimension.
pub const MAX_DIMENSION: u32 = 1 << 24;

/// Resize `src` to `width x height`.
///
/// If exactly one of `width` and `height` is zero it is inferred from the
/// source aspect ratio. The source is never modified; the result is a new,
/// tightly packed image.
///
/// # Errors
///
/// - [`Error::InvalidDimension`] if both `width` and `height` are zero.
/// - [`Error::InvalidFilter`] if the filter support is not finite and positive.
/// - [`Error::EmptySource`] if `src` has zero area.
/// - [`Error::ImageTooLarge`] if the resolved size exceeds [`MAX_DIMENSION`],
///   or its pixel buffer would not be addressable.
pub fn resize(src: &Image, width: u32, height: u32, filter: ResampleFilter) -> Result<Image> {
    if width == 0 && height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    check_inputs(src, &filter)?;

    let (dst_w, dst_h) = resolve_size(src, width, height);
    resize_exact(src, dst_w, dst_h, &filter)
}

/// Shrink `src` to fit within `width x height`, preserving its aspect ratio.
///
/// Never upscales: a source that already fits is returned as an unmodified
/// copy.
///
/// # Errors
///
/// As [`resize`], except that a zero `width` or `height` is always
/// [`Error::InvalidDimension`].
pub fn fit(src: &Image, width: u32, height: u32, filter: ResampleFilter) -> Result<Image> {
    check_bounds(width, height)?;
    check_inputs(src, &filter)?;

    let (src_w, src_h) = (src.width(), src.height());
    if src_w <= width && src_h <= height {
        log::debug!("fit {}x{} within {}x{}: already fits", src_w, src_h, width, height);
        return Ok(src.to_packed());
    }

    let (dst_w, dst_h) = fit_dimensions(src_w, src_h, width, height);
    resize_exact(src, dst_w, dst_h, &filter)
}

/// Size [`fit`] produces for a nonempty `src_w x src_h` source and a nonzero
/// `width x height` box.
pub(crate) fn fit_dimensions(src_w: u32, src_h: u32, width: u32, height: u32) -> (u32, u32) {
    if src_w <= width && src_h <= height {
        return (src_w, src_h);
    }
    // Compare aspect ratios exactly: src_w / src_h > width / height
    if src_w as u64 * height as u64 > src_h as u64 * width as u64 {
        (width, scaled(src_h, width, src_w).min(height))
    } else {
        (scaled(src_w, height, src_h).min(width), height)
    }
}

/// Scale `src` to cover `width x height`, then crop the center to exactly that
/// size.
///
/// The result is always `width x height`; source content outside the crop is
/// discarded. Only the cropped window of the cover is ever computed.
///
/// # Errors
///
/// As [`fit`].
pub fn thumbnail(src: &Image, width: u32, height: u32, filter: ResampleFilter) -> Result<Image> {
    check_bounds(width, height)?;
    check_inputs(src, &filter)?;

    let (src_w, src_h) = (src.width(), src.height());
    let (cover_w, cover_h) = if src_w as u64 * height as u64 > src_h as u64 * width as u64 {
        (scaled(src_w, height, src_h).max(width), height)
    } else {
        (width, scaled(src_h, width, src_w).max(height))
    };

    let x = (cover_w - width) / 2;
    let y = (cover_h - height) / 2;
    log::debug!(
        "thumbnail {}x{} at ({}, {}) of cover {}x{}",
        width,
        height,
        x,
        y,
        cover_w,
        cover_h
    );

    let cols = x as usize..(x + width) as usize;
    let rows = y as usize..(y + height) as usize;
    resize_window(src, cover_w, cover_h, cols, rows, &filter)
}

/// Resize to a fully resolved, nonzero size. Inputs are already validated.
fn resize_exact(src: &Image, width: u32, height: u32, filter: &ResampleFilter) -> Result<Image> {
    let (cols, rows) = (0..width as usize, 0..height as usize);
    resize_window(src, width, height, cols, rows, filter)
}

/// Resize `src` to `width x height`, computing only the `cols x rows` window
/// of the result.
fn resize_window(
    src: &Image,
    width: u32,
    height: u32,
    cols: Range<usize>,
    rows: Range<usize>,
    filter: &ResampleFilter,
) -> Result<Image> {
    let too_large = Error::ImageTooLarge {
        width,
        height,
        max: MAX_DIMENSION,
    };
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(too_large);
    }

    let (src_w, src_h) = (src.width(), src.height());
    let (out_w, out_h) = (cols.len() as u32, rows.len() as u32);
    let (x, y) = (cols.start as u32, rows.start as u32);

    if packed_len(out_w, out_h).is_none() {
        return Err(too_large);
    }

    if (src_w, src_h) == (width, height) {
        log::debug!("resize {}x{}: size unchanged, copying", width, height);
        return src.crop(x, y, out_w, out_h);
    }

    if filter.is_nearest() {
        log::debug!(
            "resize {}x{} -> {}x{}: nearest neighbor",
            src_w,
            src_h,
            width,
            height
        );
        return Ok(convolve::nearest(src, width, height, cols, rows));
    }

    log::debug!(
        "resize {}x{} -> {}x{}: support {}",
        src_w,
        src_h,
        width,
        height,
        filter.support()
    );

    // Vertical weights first, so the horizontal pass only covers the source
    // rows they read
    let v_table = (height != src_h).then(|| {
        WeightTable::build_range(src_h as usize, height as usize, rows.clone(), filter)
    });
    let src_rows = v_table.as_ref().map_or(rows, WeightTable::source_range);
    let (stage_y, stage_h) = (src_rows.start as u32, src_rows.len() as u32);
    if packed_len(out_w, stage_h).is_none() {
        return Err(too_large);
    }

    let stage = if width != src_w {
        let table = WeightTable::build_range(src_w as usize, width as usize, cols, filter);
        Some(convolve::horizontal(src, &table, src_rows.clone()))
    } else if out_w != src_w || stage_h != src_h {
        Some(src.crop(x, stage_y, out_w, stage_h)?)
    } else {
        None
    };

    match v_table {
        Some(table) => {
            let table = table.rebased(src_rows);
            Ok(convolve::vertical(stage.as_ref().unwrap_or(src), &table))
        }
        None => Ok(stage.unwrap_or_else(|| src.to_packed())),
    }
}

fn check_inputs(src: &Image, filter: &ResampleFilter) -> Result<()> {
    filter.validate()?;
    if src.is_empty() {
        return Err(Error::EmptySource {
            width: src.width(),
            height: src.height(),
        });
    }
    Ok(())
}

pub(crate) fn check_bounds(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

/// Fill in a zero target dimension from the source aspect ratio.
fn resolve_size(src: &Image, width: u32, height: u32) -> (u32, u32) {
    match (width, height) {
        (0, h) => (scaled(src.width(), h, src.height()), h),
        (w, 0) => (w, scaled(src.height(), w, src.width())),
        size => size,
    }
}

/// `round(value * num / den)`, at least 1.
#[inline]
fn scaled(value: u32, num: u32, den: u32) -> u32 {
    let v = (value as f64 * num as f64 / den as f64).round();
    v.clamp(1.0, u32::MAX as f64) as u32
}
