//! RGBA pixel buffers.
//!
//! [`Image`] stores non-premultiplied 8-bit RGBA pixels in row-major order.
//! Rows may be padded: `stride` is the byte distance between the starts of two
//! consecutive rows and is at least `width * 4`. Every image produced by this
//! crate is tightly packed.

use crate::error::{Error, Result};

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// An owned, non-premultiplied RGBA image.
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    stride: usize,
    pixels: Vec<u8>,
}

impl Image {
    /// Create a transparent black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDataLength`] if `width * height * 4` overflows
    /// `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = packed_len(width, height).ok_or(Error::InvalidDataLength {
            expected: usize::MAX,
            actual: 0,
        })?;
        Ok(Self {
            width,
            height,
            stride: width as usize * BYTES_PER_PIXEL,
            pixels: vec![0; len],
        })
    }

    /// Wrap a tightly packed RGBA buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDataLength`] if `pixels.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        Self::from_raw_with_stride(width, height, width as usize * BYTES_PER_PIXEL, pixels)
    }

    /// Wrap an RGBA buffer whose rows are `stride` bytes apart.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStride`] if `stride < width * 4`, or
    /// [`Error::InvalidDataLength`] if `pixels.len() != height * stride`.
    pub fn from_raw_with_stride(
        width: u32,
        height: u32,
        stride: usize,
        pixels: Vec<u8>,
    ) -> Result<Self> {
        let min = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(Error::InvalidStride { stride, min: usize::MAX })?;
        if stride < min {
            return Err(Error::InvalidStride { stride, min });
        }

        let expected = stride
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDataLength {
                expected: usize::MAX,
                actual: pixels.len(),
            })?;
        if pixels.len() != expected {
            return Err(Error::InvalidDataLength {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            pixels,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte distance between consecutive rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// True when the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The whole backing buffer, including any row padding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image, returning its backing buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// The visible `width * 4` bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.pixels[start..start + self.row_len()]
    }

    /// The pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.stride + x as usize * BYTES_PER_PIXEL;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[idx..idx + BYTES_PER_PIXEL]);
        Some(px)
    }

    /// Copy into a fresh, tightly packed buffer.
    pub fn to_packed(&self) -> Image {
        if self.stride == self.row_len() {
            return self.clone();
        }
        let mut pixels = Vec::with_capacity(self.row_len() * self.height as usize);
        for y in 0..self.height as usize {
            pixels.extend_from_slice(self.row(y));
        }
        Image {
            width: self.width,
            height: self.height,
            stride: self.row_len(),
            pixels,
        }
    }

    /// Copy the `width x height` rectangle whose top-left corner is `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if the rectangle is not inside the image.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Image> {
        let fits_x = x.checked_add(width).is_some_and(|r| r <= self.width);
        let fits_y = y.checked_add(height).is_some_and(|b| b <= self.height);
        if !fits_x || !fits_y {
            return Err(Error::RegionOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }

        let row_len = width as usize * BYTES_PER_PIXEL;
        let left = x as usize * BYTES_PER_PIXEL;
        let mut pixels = Vec::with_capacity(row_len * height as usize);
        for row in y as usize..(y + height) as usize {
            pixels.extend_from_slice(&self.row(row)[left..left + row_len]);
        }

        Ok(Image {
            width,
            height,
            stride: row_len,
            pixels,
        })
    }

    #[inline]
    pub(crate) fn row_len(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Build a packed image from parts the caller already sized correctly.
    pub(crate) fn from_packed_unchecked(width: u32, height: u32, pixels: Vec<u8>) -> Image {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * BYTES_PER_PIXEL
        );
        Image {
            width,
            height,
            stride: width as usize * BYTES_PER_PIXEL,
            pixels,
        }
    }
}

/// Byte length of a tightly packed `width x height` image, or `None` if it
/// does not fit in `usize`.
#[inline]
pub(crate) fn packed_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(BYTES_PER_PIXEL))
}

impl PartialEq for Image {
    /// Dimensions and visible pixels must match; row padding is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && (0..self.height as usize).all(|y| self.row(y) == other.row(y))
    }
}

impl Eq for Image {}
