#![deny(unsafe_code)]
//! Surface capture and the pixel-sampling pick path.
//!
//! The host provides a [`SurfaceCapture`] that returns an encoded image of
//! the visible surface. With the `png` feature (default on) this crate
//! decodes it into a core [`Snapshot`] and samples the pixel under the
//! query. There is no fallback chain on this path: the sampled pixel is the
//! answer, or the pick fails.

#[cfg(feature = "png")]
pub mod snapshot;

use oklch_picker_core::error::PickError;
use std::path::PathBuf;

#[cfg(feature = "png")]
use oklch_picker_core::{ColorQuery, PickedColor, PickerConfig, Resolution, Snapshot};

/// Host capability that rasterizes the currently visible surface.
///
/// Implementations block until the capture is complete. A capture either
/// yields the whole encoded image or fails; there are no partial results
/// and no retries.
pub trait SurfaceCapture {
    /// Returns the encoded snapshot bytes.
    fn capture_surface(&self) -> Result<Vec<u8>, PickError>;
}

/// Treats a PNG file on disk as the captured surface.
#[derive(Debug, Clone)]
pub struct PngFileCapture {
    path: PathBuf,
}

impl PngFileCapture {
    /// Captures from the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SurfaceCapture for PngFileCapture {
    fn capture_surface(&self) -> Result<Vec<u8>, PickError> {
        std::fs::read(&self.path).map_err(|e| {
            PickError::SurfaceCaptureUnavailable(format!("{}: {e}", self.path.display()))
        })
    }
}

/// A capture that hands back fixed bytes.
#[derive(Debug, Clone, Default)]
pub struct StaticCapture {
    bytes: Vec<u8>,
}

impl StaticCapture {
    /// Captures `bytes` every time.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl SurfaceCapture for StaticCapture {
    fn capture_surface(&self) -> Result<Vec<u8>, PickError> {
        Ok(self.bytes.clone())
    }
}

/// Captures the surface and decodes it.
#[cfg(feature = "png")]
pub fn capture_snapshot<C: SurfaceCapture + ?Sized>(capture: &C) -> Result<Snapshot, PickError> {
    let bytes = capture.capture_surface()?;
    snapshot::decode_png(&bytes)
}

/// Captures the surface and samples the pixel under `query`.
///
/// `scale` is the device pixel ratio between surface and raster.
#[cfg(feature = "png")]
pub fn sample_capture<C: SurfaceCapture + ?Sized>(
    capture: &C,
    query: ColorQuery,
    scale: f64,
) -> Result<Resolution, PickError> {
    capture_snapshot(capture)?.sample(query, scale)
}

/// Picks through pixel sampling: capture, sample, convert, format.
#[cfg(feature = "png")]
pub fn pick_with_capture<C: SurfaceCapture + ?Sized>(
    capture: &C,
    query: ColorQuery,
    config: &PickerConfig,
) -> Result<PickedColor, PickError> {
    let resolution = sample_capture(capture, query, config.device_pixel_ratio)?;
    Ok(PickedColor::from_resolution(resolution, config))
}

#[cfg(all(test, feature = "png"))]
mod tests {
    use super::*;
    use oklch_picker_core::{Rgb8, VisualSource};

    fn png_bytes(snapshot: &Snapshot) -> Vec<u8> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.png");
        snapshot::write_png(snapshot, &path).unwrap();
        std::fs::read(&path).unwrap()
    }

    fn two_tone() -> Snapshot {
        let mut snap = Snapshot::filled(4, 4, Rgb8::new(255, 255, 255)).unwrap();
        snap.set_pixel(2, 2, [124, 1, 7, 255]);
        snap
    }

    #[test]
    fn sample_capture_returns_exact_pixel() {
        let capture = StaticCapture::new(png_bytes(&two_tone()));
        let res = sample_capture(&capture, ColorQuery::new(2.0, 2.0), 1.0).unwrap();
        assert_eq!(res.color, Rgb8::new(124, 1, 7));
        assert_eq!(res.source, VisualSource::Pixel);
    }

    #[test]
    fn pick_with_capture_formats_oklch() {
        let capture = StaticCapture::new(png_bytes(&two_tone()));
        let picked =
            pick_with_capture(&capture, ColorQuery::new(2.5, 2.5), &PickerConfig::default())
                .unwrap();
        assert_eq!(picked.text, "oklch(37% 0.1499 27.5058)");
    }

    #[test]
    fn pick_with_capture_applies_device_pixel_ratio() {
        let capture = StaticCapture::new(png_bytes(&two_tone()));
        let config = PickerConfig::default().with_device_pixel_ratio(2.0);
        let picked = pick_with_capture(&capture, ColorQuery::new(1.0, 1.0), &config).unwrap();
        assert_eq!(picked.rgb, Rgb8::new(124, 1, 7));
    }

    #[test]
    fn outside_point_is_not_found() {
        let capture = StaticCapture::new(png_bytes(&two_tone()));
        assert!(matches!(
            sample_capture(&capture, ColorQuery::new(4.0, 0.0), 1.0),
            Err(PickError::PointOutsideSnapshot { .. })
        ));
    }

    #[test]
    fn empty_capture_is_unavailable() {
        let capture = StaticCapture::default();
        assert!(matches!(
            sample_capture(&capture, ColorQuery::new(0.0, 0.0), 1.0),
            Err(PickError::SurfaceCaptureUnavailable(_))
        ));
    }

    #[test]
    fn file_capture_reads_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        snapshot::write_png(&two_tone(), &path).unwrap();

        let capture = PngFileCapture::new(path.clone());
        let res = sample_capture(&capture, ColorQuery::new(0.0, 0.0), 1.0).unwrap();
        assert_eq!(res.color, Rgb8::new(255, 255, 255));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let capture = PngFileCapture::new("/nonexistent/definitely/missing.png");
        assert!(matches!(
            capture.capture_surface(),
            Err(PickError::SurfaceCaptureUnavailable(_))
        ));
    }
}
