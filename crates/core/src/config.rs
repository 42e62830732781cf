//! Picker configuration read from a loose JSON object.
//!
//! Every key is optional. A missing key, or one holding the wrong JSON
//! type, falls back to its default, so building a config never fails.

use serde::Serialize;
use serde_json::Value;

use crate::color::{OklchFormat, MAX_LIGHTNESS_DECIMALS};

/// Default device pixel ratio for mapping points onto a captured raster.
pub const DEFAULT_DEVICE_PIXEL_RATIO: f64 = 1.0;

/// Presentation and sampling options for a pick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PickerConfig {
    /// Decimals for the lightness percentage, 0 (canonical) to 4.
    pub lightness_decimals: usize,
    /// Surface-to-raster scale for the pixel-sampling path.
    pub device_pixel_ratio: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            lightness_decimals: 0,
            device_pixel_ratio: DEFAULT_DEVICE_PIXEL_RATIO,
        }
    }
}

impl PickerConfig {
    /// Builds a config from `params`, e.g. `{"lightness_decimals": 4}`.
    ///
    /// `lightness_decimals` is clamped to [0, 4]; a `device_pixel_ratio`
    /// that is not a positive finite number falls back to 1.0.
    pub fn from_json(params: &Value) -> Self {
        let defaults = Self::default();
        Self {
            lightness_decimals: param_usize(
                params,
                "lightness_decimals",
                defaults.lightness_decimals,
            )
            .min(MAX_LIGHTNESS_DECIMALS),
            device_pixel_ratio: sanitize_ratio(param_f64(
                params,
                "device_pixel_ratio",
                defaults.device_pixel_ratio,
            )),
        }
    }

    /// Returns the config with a different lightness precision, clamped to [0, 4].
    pub fn with_lightness_decimals(mut self, decimals: usize) -> Self {
        self.lightness_decimals = decimals.min(MAX_LIGHTNESS_DECIMALS);
        self
    }

    /// Returns the config with a different device pixel ratio.
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = sanitize_ratio(ratio);
        self
    }

    /// The text format implied by this config.
    pub fn format(&self) -> OklchFormat {
        OklchFormat::with_lightness_decimals(self.lightness_decimals)
    }
}

fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        DEFAULT_DEVICE_PIXEL_RATIO
    }
}

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing,
/// negative, fractional or not a number.
fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(PickerConfig::from_json(&json!({})), PickerConfig::default());
    }

    #[test]
    fn non_object_gives_defaults() {
        assert_eq!(
            PickerConfig::from_json(&json!("not an object")),
            PickerConfig::default()
        );
    }

    #[test]
    fn reads_both_keys() {
        let cfg = PickerConfig::from_json(&json!({
            "lightness_decimals": 2,
            "device_pixel_ratio": 2,
        }));
        assert_eq!(cfg.lightness_decimals, 2);
        assert!((cfg.device_pixel_ratio - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lightness_decimals_are_clamped() {
        let cfg = PickerConfig::from_json(&json!({"lightness_decimals": 12}));
        assert_eq!(cfg.lightness_decimals, 4);
        assert_eq!(cfg.format().lightness_decimals(), 4);
    }

    #[test]
    fn wrong_types_fall_back() {
        let cfg = PickerConfig::from_json(&json!({
            "lightness_decimals": -1,
            "device_pixel_ratio": "retina",
        }));
        assert_eq!(cfg, PickerConfig::default());

        let cfg = PickerConfig::from_json(&json!({"lightness_decimals": 2.5}));
        assert_eq!(cfg.lightness_decimals, 0);
    }

    #[test]
    fn non_positive_ratio_falls_back() {
        for ratio in [0.0, -2.0] {
            let cfg = PickerConfig::from_json(&json!({"device_pixel_ratio": ratio}));
            assert!((cfg.device_pixel_ratio - 1.0).abs() < f64::EPSILON);
        }
        let cfg = PickerConfig::default().with_device_pixel_ratio(f64::NAN);
        assert!((cfg.device_pixel_ratio - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builders_override_fields() {
        let cfg = PickerConfig::default()
            .with_lightness_decimals(3)
            .with_device_pixel_ratio(1.5);
        assert_eq!(cfg.lightness_decimals, 3);
        assert!((cfg.device_pixel_ratio - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_to_json_object() {
        let v = serde_json::to_value(PickerConfig::default()).unwrap();
        assert_eq!(v["lightness_decimals"], 0);
        assert_eq!(v["device_pixel_ratio"], 1.0);
    }
}
