//! Resampling filters.
//!
//! A [`ResampleFilter`] is a plain value: a weighting function of the distance
//! from the sample center plus the support radius beyond which that function is
//! zero. Filters are `Copy` and carry no state, so a single filter can be used
//! from any number of threads at once.
//!
//! Custom kernels are any non-capturing function of distance:
//!
//! ```rust
//! use resampler::ResampleFilter;
//!
//! fn tent(x: f32) -> f32 {
//!     (1.0 - x.abs()).max(0.0)
//! }
//!
//! const TENT: ResampleFilter = ResampleFilter::new(tent, 1.0);
//! assert!(TENT.validate().is_ok());
//! ```

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Weighting function of distance (in source pixels) from the sample center.
pub type Kernel = fn(f32) -> f32;

/// A resampling filter: kernel function plus support radius.
#[derive(Clone, Copy)]
pub struct ResampleFilter {
    kernel: Kernel,
    support: f32,
    nearest: bool,
}

impl ResampleFilter {
    /// Picks the single closest source sample; no blending.
    pub const NEAREST_NEIGHBOR: Self = Self {
        kernel: box_kernel,
        support: 0.0,
        nearest: true,
    };
    /// Uniform weight over half a pixel; exact area averaging for integer ratios.
    pub const BOX: Self = Self::new(box_kernel, 0.5);
    /// Triangle (bilinear) weight.
    pub const LINEAR: Self = Self::new(linear_kernel, 1.0);
    /// Hermite cubic (B = 0, C = 0).
    pub const HERMITE: Self = Self::new(hermite_kernel, 1.0);
    /// Mitchell-Netravali cubic (B = C = 1/3).
    pub const MITCHELL_NETRAVALI: Self = Self::new(mitchell_kernel, 2.0);
    /// Catmull-Rom cubic (B = 0, C = 1/2).
    pub const CATMULL_ROM: Self = Self::new(catmull_rom_kernel, 2.0);
    /// Cubic B-spline (B = 1, C = 0). Smooth, noticeably blurry.
    pub const BSPLINE: Self = Self::new(bspline_kernel, 2.0);
    /// Gaussian bump `exp(-2x^2)`.
    pub const GAUSSIAN: Self = Self::new(gaussian_kernel, 2.0);
    /// Sinc windowed by a Bartlett (triangle) window.
    pub const BARTLETT: Self = Self::new(bartlett_kernel, 3.0);
    /// Lanczos3: sinc windowed by sinc.
    pub const LANCZOS: Self = Self::new(lanczos_kernel, 3.0);
    /// Sinc windowed by a Hann window.
    pub const HANN: Self = Self::new(hann_kernel, 3.0);
    /// Sinc windowed by a Hamming window.
    pub const HAMMING: Self = Self::new(hamming_kernel, 3.0);
    /// Sinc windowed by a Blackman window.
    pub const BLACKMAN: Self = Self::new(blackman_kernel, 3.0);
    /// Sinc windowed by a Welch (parabolic) window.
    pub const WELCH: Self = Self::new(welch_kernel, 3.0);
    /// Sinc windowed by a cosine window.
    pub const COSINE: Self = Self::new(cosine_kernel, 3.0);

    /// Build a filter from a kernel and its support radius.
    ///
    /// The support is checked by [`validate`](Self::validate) when the filter
    /// is used, not here.
    pub const fn new(kernel: Kernel, support: f32) -> Self {
        Self {
            kernel,
            support,
            nearest: false,
        }
    }

    /// Support radius in source pixels.
    #[inline]
    pub fn support(&self) -> f32 {
        self.support
    }

    /// Kernel weight at `distance`.
    #[inline]
    pub fn weight(&self, distance: f32) -> f32 {
        (self.kernel)(distance)
    }

    /// True for [`NEAREST_NEIGHBOR`](Self::NEAREST_NEIGHBOR), which resize
    /// handles by direct sampling instead of convolution.
    #[inline]
    pub fn is_nearest(&self) -> bool {
        self.nearest
    }

    /// Check that the support radius is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilter`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.nearest || (self.support.is_finite() && self.support > 0.0) {
            Ok(())
        } else {
            Err(Error::InvalidFilter {
                support: self.support,
            })
        }
    }
}

impl Default for ResampleFilter {
    fn default() -> Self {
        Self::LINEAR
    }
}

impl fmt::Debug for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nearest {
            return f.write_str("ResampleFilter::NEAREST_NEIGHBOR");
        }
        f.debug_struct("ResampleFilter")
            .field("support", &self.support)
            .finish_non_exhaustive()
    }
}

impl FromStr for ResampleFilter {
    type Err = Error;

    /// Parse a filter name, ignoring case, `-` and `_`.
    fn from_str(name: &str) -> Result<Self> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let filter = match key.as_str() {
            "nearest" | "nearestneighbor" => Self::NEAREST_NEIGHBOR,
            "box" => Self::BOX,
            "linear" | "bilinear" | "triangle" => Self::LINEAR,
            "hermite" => Self::HERMITE,
            "mitchell" | "mitchellnetravali" => Self::MITCHELL_NETRAVALI,
            "catmullrom" => Self::CATMULL_ROM,
            "bspline" => Self::BSPLINE,
            "gaussian" => Self::GAUSSIAN,
            "bartlett" => Self::BARTLETT,
            "lanczos" | "lanczos3" => Self::LANCZOS,
            "hann" => Self::HANN,
            "hamming" => Self::HAMMING,
            "blackman" => Self::BLACKMAN,
            "welch" => Self::WELCH,
            "cosine" => Self::COSINE,
            _ => return Err(Error::UnknownFilter(name.to_string())),
        };
        Ok(filter)
    }
}

fn box_kernel(x: f32) -> f32 {
    if x.abs() <= 0.5 {
        1.0
    } else {
        0.0
    }
}

fn linear_kernel(x: f32) -> f32 {
    (1.0 - x.abs()).max(0.0)
}

/// Mitchell-Netravali two-parameter cubic.
#[inline]
fn bc_cubic(x: f32, b: f32, c: f32) -> f32 {
    let x = x.abs();
    if x < 1.0 {
        ((12.0 - 9.0 * b - 6.0 * c) * x * x * x + (-18.0 + 12.0 * b + 6.0 * c) * x * x
            + (6.0 - 2.0 * b))
            / 6.0
    } else if x < 2.0 {
        ((-b - 6.0 * c) * x * x * x
            + (6.0 * b + 30.0 * c) * x * x
            + (-12.0 * b - 48.0 * c) * x
            + (8.0 * b + 24.0 * c))
            / 6.0
    } else {
        0.0
    }
}

fn hermite_kernel(x: f32) -> f32 {
    if x.abs() < 1.0 {
        bc_cubic(x, 0.0, 0.0)
    } else {
        0.0
    }
}

fn mitchell_kernel(x: f32) -> f32 {
    bc_cubic(x, 1.0 / 3.0, 1.0 / 3.0)
}

fn catmull_rom_kernel(x: f32) -> f32 {
    bc_cubic(x, 0.0, 0.5)
}

fn bspline_kernel(x: f32) -> f32 {
    bc_cubic(x, 1.0, 0.0)
}

fn gaussian_kernel(x: f32) -> f32 {
    if x.abs() < 2.0 {
        (-2.0 * x * x).exp()
    } else {
        0.0
    }
}

#[inline]
fn sinc(x: f32) -> f32 {
    if x.abs() < f32::EPSILON {
        1.0
    } else {
        let pi_x = PI * x;
        pi_x.sin() / pi_x
    }
}

/// Sinc with a three-lobe window; zero at and beyond `|x| = 3`.
#[inline]
fn windowed_sinc(x: f32, window: impl Fn(f32) -> f32) -> f32 {
    let x = x.abs();
    if x < 3.0 {
        sinc(x) * window(x)
    } else {
        0.0
    }
}

fn bartlett_kernel(x: f32) -> f32 {
    windowed_sinc(x, |x| (3.0 - x) / 3.0)
}

fn lanczos_kernel(x: f32) -> f32 {
    windowed_sinc(x, |x| sinc(x / 3.0))
}

fn hann_kernel(x: f32) -> f32 {
    windowed_sinc(x, |x| 0.5 + 0.5 * (PI * x / 3.0).cos())
}

fn hamming_kernel(x: f32) -> f32 {
    windowed_sinc(x, |x| 0.54 + 0.46 * (PI * x / 3.0).cos())
}

fn blackman_kernel(x: f32) -> f32 {
    windowed_sinc(x, |x| {
        0.42 - 0.5 * (PI * x / 3.0 - PI).cos() + 0.08 * (2.0 * PI * x / 3.0 - 2.0 * PI).cos()
    })
}

fn welch_kernel(x: f32) -> f32 {
    windowed_sinc(x, |x| 1.0 - x * x / 9.0)
}

fn cosine_kernel(x: f32) -> f32 {
    windowed_sinc(x, |x| (PI / 2.0 * (x / 3.0)).cos())
}
