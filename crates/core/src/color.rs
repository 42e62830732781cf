//! Color types and the sRGB to OKLCH conversion.
//!
//! Provides the 8-bit [`Rgb8`] triplet that every resolution path produces,
//! the float working types (`Srgb`, `LinearRgb`, `OkLab`, `OkLch`), the pure
//! conversion functions between them, and the canonical `oklch(...)` text
//! form. Uses `f64` throughout for precision.
//!
//! All functions here are pure and safe to call from any thread.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Chroma below which a color is treated as achromatic and its hue pinned to 0.
///
/// Pure grays come out of the matrix chain with a residual chroma around
/// 4e-8; the least saturated 8-bit chromatic input is around 1e-3.
pub const ACHROMATIC_EPSILON: f64 = 1e-4;

/// Upper bound for [`OklchFormat::lightness_decimals`].
pub const MAX_LIGHTNESS_DECIMALS: usize = 4;

/// An 8-bit sRGB triplet, the color a pick resolves to. No alpha.
///
/// Serializes as a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh (cylindrical form of OKLab).
///
/// `l` is a fraction in [0, 1]; use [`OkLch::lightness_percent`] for the
/// 0-100 value shown to users. `h` is in degrees, [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Rgb8 {
    /// Creates a triplet from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Canonical functional form, `rgb(r, g, b)`, as a browser reports it.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<Rgb8> for Srgb {
    fn from(c: Rgb8) -> Self {
        Srgb {
            r: c.r as f64 / 255.0,
            g: c.g as f64 / 255.0,
            b: c.b as f64 / 255.0,
        }
    }
}

impl Serialize for Rgb8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.r, self.g, self.b].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [r, g, b] = <[u8; 3]>::deserialize(deserializer)?;
        Ok(Rgb8 { r, g, b })
    }
}

impl OkLch {
    /// Lightness on the 0-100 percentage scale.
    pub fn lightness_percent(&self) -> f64 {
        self.l * 100.0
    }
}

/// Applies inverse sRGB gamma to convert a single sRGB component to linear.
fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

/// Converts linear RGB to OKLab via the LMS cone-response matrices.
///
/// `cbrt` is a true cube root, so the chain stays defined for any input.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l_ = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m_ = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s_ = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let l_c = l_.cbrt();
    let m_c = m_.cbrt();
    let s_c = s_.cbrt();

    OkLab {
        l: 0.2104542553 * l_c + 0.7936177850 * m_c - 0.0040720468 * s_c,
        a: 1.9779984951 * l_c - 2.4285922050 * m_c + 0.4505937099 * s_c,
        b: 0.0259040371 * l_c + 0.7827717662 * m_c - 0.8086757660 * s_c,
    }
}

/// Converts OKLab to OKLCh (cylindrical form).
///
/// If chroma is below [`ACHROMATIC_EPSILON`] the hue is pinned to 0 so that
/// grays never report a numerically unstable angle.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let ch = (c.a * c.a + c.b * c.b).sqrt();
    let h = if ch < ACHROMATIC_EPSILON {
        0.0
    } else {
        let mut h = c.b.atan2(c.a).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        // -tiny + 360.0 rounds up to exactly 360.0
        if h >= 360.0 {
            0.0
        } else {
            h
        }
    };
    OkLch { l: c.l, c: ch, h }
}

/// Convenience: sRGB to OKLCh via the chain sRGB -> linear -> OKLab -> OKLCh.
pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(linear_to_oklab(srgb_to_linear(c)))
}

/// Converts an 8-bit sRGB triplet to OKLCh.
///
/// Never fails: every `u8` triplet is in the domain.
pub fn convert(c: Rgb8) -> OkLch {
    srgb_to_oklch(c.into())
}

/// Presentation options for the `oklch(<L>% <C> <H>)` text form.
///
/// Only the lightness precision varies; chroma and hue always carry
/// exactly four decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OklchFormat {
    lightness_decimals: usize,
}

impl OklchFormat {
    /// Canonical form: lightness rounded to a whole percentage.
    pub const CANONICAL: OklchFormat = OklchFormat {
        lightness_decimals: 0,
    };

    /// Creates a format with the given lightness precision, clamped to
    /// [0, `MAX_LIGHTNESS_DECIMALS`].
    pub fn with_lightness_decimals(decimals: usize) -> Self {
        Self {
            lightness_decimals: decimals.min(MAX_LIGHTNESS_DECIMALS),
        }
    }

    /// Returns the number of decimals used for lightness.
    pub fn lightness_decimals(&self) -> usize {
        self.lightness_decimals
    }

    /// Renders `c` as `oklch(<L>% <C> <H>)`.
    pub fn format(&self, c: OkLch) -> String {
        let l = non_negative(c.lightness_percent().min(100.0));
        format!(
            "oklch({l:.prec$}% {:.4} {:.4})",
            non_negative(c.c),
            non_negative(c.h),
            prec = self.lightness_decimals
        )
    }
}

/// Maps `-0.0` and tiny negative float noise to `0.0` so "-0" is never printed.
fn non_negative(v: f64) -> f64 {
    if v > 0.0 {
        v
    } else {
        0.0
    }
}

impl fmt::Display for OkLch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&OklchFormat::CANONICAL.format(*self))
    }
}

/// Converts and formats in one step using the canonical format.
pub fn rgb_to_oklch_string(c: Rgb8) -> String {
    convert(c).to_string()
}
