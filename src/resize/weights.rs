//! Per-axis convolution weights.
//!
//! A [`WeightTable`] maps every destination coordinate on one axis to a run
//! of contiguous source indices and their normalized weights. All weights
//! live in one arena; each destination coordinate owns a [`Span`] into it.

use std::ops::Range;

use crate::filter::ResampleFilter;

/// Source run contributing to one destination coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First contributing source index.
    pub start: usize,
    /// Offset of the first weight in the arena.
    offset: usize,
    /// Number of contributing source indices.
    pub len: usize,
}

/// Normalized, edge-clamped weights for resampling one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    src_len: usize,
    spans: Vec<Span>,
    weights: Vec<f32>,
}

impl WeightTable {
    /// Build the weights for resampling `src_len` samples to `dst_len`.
    ///
    /// When downscaling, the kernel is stretched by the scale factor so every
    /// source sample contributes to some destination sample. Taps that fall
    /// outside `0..src_len` are clamped to the nearest edge and merged.
    ///
    /// [`ResampleFilter::NEAREST_NEIGHBOR`] yields a single full-weight tap per
    /// coordinate. The filter is assumed to be valid.
    pub fn build(src_len: usize, dst_len: usize, filter: &ResampleFilter) -> Self {
        Self::build_range(src_len, dst_len, 0..dst_len, filter)
    }

    /// Build only the destination coordinates in `dsts` of a `src_len` to
    /// `dst_len` resampling.
    ///
    /// Entry `k` of the result holds the weights of coordinate
    /// `dsts.start + k`, identical to the same entry of [`WeightTable::build`].
    /// `dsts` is clipped to `0..dst_len`.
    pub fn build_range(
        src_len: usize,
        dst_len: usize,
        dsts: Range<usize>,
        filter: &ResampleFilter,
    ) -> Self {
        let dsts = dsts.start.min(dst_len)..dsts.end.min(dst_len);
        let mut table = WeightTable {
            src_len,
            spans: Vec::with_capacity(dsts.len()),
            weights: Vec::new(),
        };
        if src_len == 0 || dsts.is_empty() {
            return table;
        }

        let scale = src_len as f32 / dst_len as f32;
        if src_len == 1 || filter.is_nearest() {
            for dst in dsts {
                let idx = nearest_index(dst, scale, src_len);
                table.push_single(idx);
            }
            return table;
        }

        // Widen the kernel for downscaling
        let filter_scale = scale.max(1.0);
        let radius = filter.support() * filter_scale;
        let last = (src_len - 1) as isize;
        let mut window: Vec<f32> = Vec::new();

        for dst in dsts.clone() {
            let center = (dst as f32 + 0.5) * scale - 0.5;
            let lo = (center - radius).ceil() as isize;
            let hi = (center + radius).floor() as isize;
            if lo > hi {
                table.push_single(nearest_index(dst, scale, src_len));
                continue;
            }

            // Clamped taps collapse onto the edges, so the window is contiguous
            let first = lo.clamp(0, last);
            let end = hi.clamp(0, last);
            window.clear();
            window.resize((end - first + 1) as usize, 0.0);

            let mut sum = 0.0f32;
            for i in lo..=hi {
                let w = filter.weight((i as f32 - center) / filter_scale);
                window[(i.clamp(0, last) - first) as usize] += w;
                sum += w;
            }

            if sum.abs() <= f32::EPSILON {
                table.push_single(nearest_index(dst, scale, src_len));
                continue;
            }

            // Trim zero-weight ends
            let lead = window.iter().take_while(|w| **w == 0.0).count();
            let trail = window.iter().rev().take_while(|w| **w == 0.0).count();
            let kept = &window[lead..window.len() - trail];

            table.spans.push(Span {
                start: first as usize + lead,
                offset: table.weights.len(),
                len: kept.len(),
            });
            table.weights.extend(kept.iter().map(|w| w / sum));
        }

        log::trace!(
            "weight table {}->{} [{}..{}]: scale {:.4}, {} taps",
            src_len,
            dst_len,
            dsts.start,
            dsts.end,
            scale,
            table.weights.len()
        );
        table
    }

    /// Number of destination coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True when the table has no destination coordinates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Length of the source axis this table reads from.
    #[inline]
    pub fn src_len(&self) -> usize {
        self.src_len
    }

    /// The source run for destination coordinate `dst` and its weights.
    ///
    /// # Panics
    ///
    /// Panics if `dst >= len()`.
    #[inline]
    pub fn span(&self, dst: usize) -> (Span, &[f32]) {
        let span = self.spans[dst];
        (span, &self.weights[span.offset..span.offset + span.len])
    }

    /// `(source index, weight)` pairs for destination coordinate `dst`.
    pub fn taps(&self, dst: usize) -> impl Iterator<Item = (usize, f32)> + '_ {
        let (span, weights) = self.span(dst);
        weights
            .iter()
            .enumerate()
            .map(move |(k, &w)| (span.start + k, w))
    }

    /// Source indices read by any coordinate of the table.
    pub(crate) fn source_range(&self) -> Range<usize> {
        let start = self.spans.iter().map(|s| s.start).min().unwrap_or(0);
        let end = self.spans.iter().map(|s| s.start + s.len).max().unwrap_or(0);
        start..end
    }

    /// Re-index the table to read from the `src` sub-range of its source axis.
    pub(crate) fn rebased(mut self, src: Range<usize>) -> Self {
        debug_assert!(src.end <= self.src_len);
        for span in &mut self.spans {
            span.start -= src.start;
        }
        self.src_len = src.len();
        self
    }

    fn push_single(&mut self, idx: usize) {
        self.spans.push(Span {
            start: idx,
            offset: self.weights.len(),
            len: 1,
        });
        self.weights.push(1.0);
    }
}

/// Source index closest to the center of destination coordinate `dst`.
#[inline]
pub(crate) fn nearest_index(dst: usize, scale: f32, src_len: usize) -> usize {
    let center = (dst as f32 + 0.5) * scale - 0.5;
    center.round().clamp(0.0, (src_len - 1) as f32) as usize
}
