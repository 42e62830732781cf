//! End-to-end pick: resolve a point, convert to OKLCH, format.
//!
//! The core holds no state between picks. Whether a pick is in progress is
//! a [`PickState`] value owned by whoever drives the interaction; it is
//! passed in and handed back, never stored here.

use serde::Serialize;

use crate::color::{convert, OkLch, Rgb8};
use crate::config::PickerConfig;
use crate::error::PickError;
use crate::resolve::{resolve_color, ColorQuery, Resolution, VisualSource};
use crate::surface::Surface;

/// Whether the next click should be intercepted as a pick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickState {
    #[default]
    Idle,
    Picking,
}

impl PickState {
    /// Arms the picker. Starting while already picking is a no-op.
    pub fn start(self) -> PickState {
        PickState::Picking
    }

    /// Disarms the picker without picking.
    pub fn cancel(self) -> PickState {
        PickState::Idle
    }

    /// Handles a click at `(x, y)`.
    ///
    /// While picking, the click becomes a query and the picker disarms: one
    /// click ends the session. While idle the click is not intercepted.
    pub fn click(self, x: f64, y: f64) -> (PickState, Option<ColorQuery>) {
        match self {
            PickState::Picking => (PickState::Idle, Some(ColorQuery::new(x, y))),
            PickState::Idle => (PickState::Idle, None),
        }
    }

    /// Returns true while clicks are intercepted.
    pub fn is_picking(self) -> bool {
        self == PickState::Picking
    }
}

/// Everything a pick produced, ready for the clipboard or display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickedColor {
    pub rgb: Rgb8,
    pub oklch: OkLch,
    pub source: VisualSource,
    /// Formatted `oklch(<L>% <C> <H>)` string.
    pub text: String,
}

impl PickedColor {
    /// Converts and formats a resolution according to `config`.
    pub fn from_resolution(resolution: Resolution, config: &PickerConfig) -> Self {
        let oklch = convert(resolution.color);
        Self {
            rgb: resolution.color,
            oklch,
            source: resolution.source,
            text: config.format().format(oklch),
        }
    }
}

/// Picks through style inspection of `surface`.
pub fn pick_with_style<S: Surface>(
    surface: &S,
    query: ColorQuery,
    config: &PickerConfig,
) -> Result<PickedColor, PickError> {
    let resolution = resolve_color(surface, query)?;
    Ok(PickedColor::from_resolution(resolution, config))
}
