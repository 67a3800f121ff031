//! Error types for the resampler library.

use std::fmt;

/// Result type alias for resampler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building images or resampling them.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Target size cannot be resolved (both zero, or a zero bounding box).
    InvalidDimension {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// Source image has zero area.
    EmptySource {
        /// Source width.
        width: u32,
        /// Source height.
        height: u32,
    },
    /// Filter support radius is not a finite positive number.
    InvalidFilter {
        /// Offending support radius.
        support: f32,
    },
    /// Filter name not recognized.
    UnknownFilter(String),
    /// Resolved target exceeds the maximum supported dimension.
    ImageTooLarge {
        /// Target width.
        width: u32,
        /// Target height.
        height: u32,
        /// Maximum supported dimension.
        max: u32,
    },
    /// Pixel buffer length doesn't match `height * stride`.
    InvalidDataLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes provided.
        actual: usize,
    },
    /// Row stride is shorter than one row of pixels.
    InvalidStride {
        /// Stride provided.
        stride: usize,
        /// Minimum stride (`width * 4`).
        min: usize,
    },
    /// Crop rectangle extends past the image.
    RegionOutOfBounds {
        /// Left edge.
        x: u32,
        /// Top edge.
        y: u32,
        /// Region width.
        width: u32,
        /// Region height.
        height: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimension { width, height } => {
                write!(f, "Invalid target dimensions: {}x{}", width, height)
            }
            Error::EmptySource { width, height } => {
                write!(f, "Source image is empty: {}x{}", width, height)
            }
            Error::InvalidFilter { support } => {
                write!(
                    f,
                    "Invalid filter: support radius {} must be finite and positive",
                    support
                )
            }
            Error::UnknownFilter(name) => write!(f, "Unknown resample filter: {:?}", name),
            Error::ImageTooLarge { width, height, max } => {
                write!(
                    f,
                    "Image {}x{} exceeds maximum dimension {}",
                    width, height, max
                )
            }
            Error::InvalidDataLength { expected, actual } => {
                write!(
                    f,
                    "Invalid pixel data length: expected {} bytes, got {}",
                    expected, actual
                )
            }
            Error::InvalidStride { stride, min } => {
                write!(f, "Invalid stride {}: must be at least {}", stride, min)
            }
            Error::RegionOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Region {}x{} at ({}, {}) is outside the image",
                    width, height, x, y
                )
            }
        }
    }
}

impl std::error::Error for Error {}
