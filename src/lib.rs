//! # resampler
//!
//! Separable image resampling for non-premultiplied 8-bit RGBA buffers.
//!
//! Images are scaled through a pluggable interpolation kernel in two 1D
//! passes, with the kernel stretched when downscaling so no source pixel is
//! skipped. On top of the exact-size [`resize`] sit two policies:
//! [`fit`] (contain, never upscale) and [`thumbnail`] (cover, then crop).
//!
//! ## Features
//!
//! - Nearest, box, linear, cubic and windowed-sinc filters, plus custom kernels
//! - Edge-clamped, normalized weights: no darkening or fading at borders
//! - Optional parallel passes via the `parallel` feature
//! - Optional WebAssembly bindings via the `wasm` feature
//!
//! ## Example
//!
//! ```rust
//! use resampler::{fit, thumbnail, Image, ResampleFilter};
//!
//! let src = Image::from_raw(4, 2, vec![200u8; 4 * 2 * 4]).unwrap();
//!
//! let contained = fit(&src, 2, 2, ResampleFilter::LINEAR).unwrap();
//! assert_eq!((contained.width(), contained.height()), (2, 1));
//!
//! let square = thumbnail(&src, 2, 2, ResampleFilter::BOX).unwrap();
//! assert_eq!((square.width(), square.height()), (2, 2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod image;
pub mod resize;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use filter::{Kernel, ResampleFilter};
pub use image::Image;
pub use resize::{fit, resize, thumbnail, WeightTable, MAX_DIMENSION};
