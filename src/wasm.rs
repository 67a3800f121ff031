//! WebAssembly bindings for resampler.
//!
//! Exposes the three resize policies over packed RGBA bytes, for example
//! straight from a canvas `ImageData`.
//!
//! # Building
//!
//! ```bash
//! rustup target add wasm32-unknown-unknown
//! cargo install wasm-bindgen-cli
//!
//! cargo build --target wasm32-unknown-unknown --release --features wasm
//! wasm-bindgen --target web --out-dir pkg \
//!   target/wasm32-unknown-unknown/release/resampler.wasm
//! ```
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { fitRgba, fitSize, thumbnailRgba } from 'resampler';
//!
//! await init();
//!
//! const { data, width, height } = ctx.getImageData(0, 0, w, h);
//!
//! // Square 128x128 avatar
//! const avatar = thumbnailRgba(data, width, height, 128, 128, "lanczos");
//!
//! // Preview that fits in 800x600
//! const [pw, ph] = fitSize(width, height, 800, 600);
//! const preview = fitRgba(data, width, height, 800, 600, "linear");
//! ```

use wasm_bindgen::prelude::*;

use crate::filter::ResampleFilter;
use crate::image::Image;
use crate::resize;

fn js_error(err: crate::Error) -> JsError {
    JsError::new(&err.to_string())
}

fn source(data: &[u8], width: u32, height: u32) -> Result<Image, JsError> {
    Image::from_raw(width, height, data.to_vec()).map_err(js_error)
}

fn parse_filter(name: &str) -> Result<ResampleFilter, JsError> {
    name.parse().map_err(js_error)
}

/// Resize packed RGBA pixels to `dst_width x dst_height`.
///
/// One of the target dimensions may be 0 to preserve the aspect ratio.
///
/// # Arguments
///
/// * `data` - Packed RGBA pixels as Uint8Array
/// * `width` - Source width in pixels
/// * `height` - Source height in pixels
/// * `dst_width` - Target width (0 to infer)
/// * `dst_height` - Target height (0 to infer)
/// * `filter` - Filter name, e.g. "nearest", "box", "linear", "lanczos"
#[wasm_bindgen(js_name = "resizeRgba")]
pub fn resize_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    dst_width: u32,
    dst_height: u32,
    filter: &str,
) -> Result<Vec<u8>, JsError> {
    let src = source(data, width, height)?;
    let filter = parse_filter(filter)?;
    resize::resize(&src, dst_width, dst_height, filter)
        .map(Image::into_raw)
        .map_err(js_error)
}

/// Shrink packed RGBA pixels to fit within `max_width x max_height`.
///
/// Use [`fit_size`] to learn the dimensions of the returned pixels.
#[wasm_bindgen(js_name = "fitRgba")]
pub fn fit_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
    filter: &str,
) -> Result<Vec<u8>, JsError> {
    let src = source(data, width, height)?;
    let filter = parse_filter(filter)?;
    resize::fit(&src, max_width, max_height, filter)
        .map(Image::into_raw)
        .map_err(js_error)
}

/// Dimensions `[width, height]` that [`fit_rgba`] produces for a source of
/// `width x height`.
#[wasm_bindgen(js_name = "fitSize")]
pub fn fit_size(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> Result<Vec<u32>, JsError> {
    resize::check_bounds(max_width, max_height).map_err(js_error)?;
    if width == 0 || height == 0 {
        return Err(js_error(crate::Error::EmptySource { width, height }));
    }
    let (w, h) = resize::fit_dimensions(width, height, max_width, max_height);
    Ok(vec![w, h])
}

/// Cover `dst_width x dst_height` and center-crop to exactly that size.
#[wasm_bindgen(js_name = "thumbnailRgba")]
pub fn thumbnail_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    dst_width: u32,
    dst_height: u32,
    filter: &str,
) -> Result<Vec<u8>, JsError> {
    let src = source(data, width, height)?;
    let filter = parse_filter(filter)?;
    resize::thumbnail(&src, dst_width, dst_height, filter)
        .map(Image::into_raw)
        .map_err(js_error)
}
