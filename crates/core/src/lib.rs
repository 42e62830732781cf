#![deny(unsafe_code)]
//! Core types for the OKLCH color picker.
//!
//! Provides the sRGB to OKLCH converter and its canonical `oklch(...)` text
//! form, color-string parsing, the `Surface` capability trait with a
//! strategy-chain resolver that finds the visible color at a point, an
//! in-memory `Scene` surface, raster `Snapshot` sampling, the `PickState`
//! lifecycle value and `PickerConfig`.

pub mod color;
pub mod config;
pub mod error;
pub mod named;
pub mod parse;
pub mod pick;
pub mod raster;
pub mod resolve;
pub mod scene;
pub mod surface;

pub use color::{convert, OkLab, OkLch, OklchFormat, Rgb8, Srgb};
pub use config::PickerConfig;
pub use error::PickError;
pub use named::CssNamedColors;
pub use pick::{pick_with_style, PickState, PickedColor};
pub use raster::Snapshot;
pub use resolve::{resolve_color, ColorQuery, Resolution, VisualSource};
pub use scene::{Rect, Scene, SceneNode};
pub use surface::{ColorNameResolver, StyleProperty, Surface};
