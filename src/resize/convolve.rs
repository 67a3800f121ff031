//! One-axis convolution passes and nearest-neighbor sampling.
//!
//! Every pass writes each destination row exactly once from shared, immutable
//! input, so with the `parallel` feature rows are handed to rayon directly.

use std::ops::Range;

use super::weights::{nearest_index, WeightTable};
use crate::image::{Image, BYTES_PER_PIXEL};

/// Resample source rows `rows` of `src` to `table.len()` pixels each.
pub(crate) fn horizontal(src: &Image, table: &WeightTable, rows: Range<usize>) -> Image {
    debug_assert_eq!(table.src_len(), src.width() as usize);
    let dst_width = table.len();
    let height = rows.len();

    let mut out = vec![0u8; dst_width * height * BYTES_PER_PIXEL];
    for_each_row(&mut out, dst_width * BYTES_PER_PIXEL, |y, dst_row| {
        resample_row(src.row(rows.start + y), dst_row, table);
    });
    Image::from_packed_unchecked(dst_width as u32, height as u32, out)
}

/// Resample every column of `src` to `table.len()` pixels.
pub(crate) fn vertical(src: &Image, table: &WeightTable) -> Image {
    debug_assert_eq!(table.src_len(), src.height() as usize);
    let row_len = src.row_len();
    let dst_height = table.len();

    let mut out = vec![0u8; row_len * dst_height];
    for_each_row(&mut out, row_len, |y, dst_row| {
        resample_column(src, dst_row, table, y);
    });
    Image::from_packed_unchecked(src.width(), dst_height as u32, out)
}

/// Copy the closest source pixel into every destination pixel of the
/// `cols x rows` window of a `dst_width x dst_height` result.
pub(crate) fn nearest(
    src: &Image,
    dst_width: u32,
    dst_height: u32,
    cols: Range<usize>,
    rows: Range<usize>,
) -> Image {
    let src_w = src.width() as usize;
    let src_h = src.height() as usize;
    let x_scale = src_w as f32 / dst_width as f32;
    let y_scale = src_h as f32 / dst_height as f32;
    let (out_w, out_h) = (cols.len(), rows.len());

    let x_offsets: Vec<usize> = cols
        .map(|x| nearest_index(x, x_scale, src_w) * BYTES_PER_PIXEL)
        .collect();

    let mut out = vec![0u8; out_w * out_h * BYTES_PER_PIXEL];
    for_each_row(&mut out, out_w * BYTES_PER_PIXEL, |y, dst_row| {
        let src_row = src.row(nearest_index(rows.start + y, y_scale, src_h));
        for (dst_px, &off) in dst_row
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(&x_offsets)
        {
            dst_px.copy_from_slice(&src_row[off..off + BYTES_PER_PIXEL]);
        }
    });
    Image::from_packed_unchecked(out_w as u32, out_h as u32, out)
}

/// Apply the horizontal weights to a single row.
#[inline]
fn resample_row(src_row: &[u8], dst_row: &mut [u8], table: &WeightTable) {
    for (dst_x, dst_px) in dst_row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let (span, weights) = table.span(dst_x);
        let first = span.start * BYTES_PER_PIXEL;
        let taps = &src_row[first..first + span.len * BYTES_PER_PIXEL];

        let mut sums = [0.0f32; BYTES_PER_PIXEL];
        for (src_px, &weight) in taps.chunks_exact(BYTES_PER_PIXEL).zip(weights) {
            for c in 0..BYTES_PER_PIXEL {
                sums[c] += src_px[c] as f32 * weight;
            }
        }

        for c in 0..BYTES_PER_PIXEL {
            dst_px[c] = quantize(sums[c]);
        }
    }
}

/// Produce destination row `dst_y` by weighting whole source rows.
#[inline]
fn resample_column(src: &Image, dst_row: &mut [u8], table: &WeightTable, dst_y: usize) {
    let mut sums = vec![0.0f32; dst_row.len()];
    for (src_y, weight) in table.taps(dst_y) {
        for (sum, &v) in sums.iter_mut().zip(src.row(src_y)) {
            *sum += v as f32 * weight;
        }
    }
    for (d, s) in dst_row.iter_mut().zip(&sums) {
        *d = quantize(*s);
    }
}

#[inline]
fn quantize(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Run `f(y, row)` for every `row_len`-byte row of `out`.
#[cfg(feature = "parallel")]
fn for_each_row<F>(out: &mut [u8], row_len: usize, f: F)
where
    F: Fn(usize, &mut [u8]) + Sync + Send,
{
    use rayon::prelude::*;

    out.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}

/// Run `f(y, row)` for every `row_len`-byte row of `out`.
#[cfg(not(feature = "parallel"))]
fn for_each_row<F>(out: &mut [u8], row_len: usize, f: F)
where
    F: Fn(usize, &mut [u8]),
{
    for (y, row) in out.chunks_exact_mut(row_len).enumerate() {
        f(y, row);
    }
}
