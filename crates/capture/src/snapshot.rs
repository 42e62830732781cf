//! PNG decoding and encoding of surface snapshots.
//!
//! This module is feature-gated behind `png` (default on) so that embedders
//! that capture raw RGBA themselves can depend on this crate without pulling
//! in the `image` crate.

use oklch_picker_core::error::PickError;
use oklch_picker_core::raster::Snapshot;
use std::path::Path;

/// Decodes PNG bytes, as returned by a surface capture, into a snapshot.
///
/// Returns `PickError::SurfaceCaptureUnavailable` if `bytes` is empty or is
/// not a decodable PNG.
pub fn decode_png(bytes: &[u8]) -> Result<Snapshot, PickError> {
    if bytes.is_empty() {
        return Err(PickError::SurfaceCaptureUnavailable(
            "capture returned no data".into(),
        ));
    }
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| PickError::SurfaceCaptureUnavailable(e.to_string()))?
        .to_rgba8();
    let w = usize::try_from(img.width()).map_err(|_| PickError::InvalidDimensions)?;
    let h = usize::try_from(img.height()).map_err(|_| PickError::InvalidDimensions)?;
    Snapshot::from_rgba(w, h, img.into_raw())
}

/// Writes a snapshot as a PNG image.
///
/// Returns `PickError::InvalidDimensions` if the snapshot dimensions overflow
/// `u32`, or `PickError::SurfaceCaptureUnavailable` on write failure.
pub fn write_png(snapshot: &Snapshot, path: &Path) -> Result<(), PickError> {
    let w = u32::try_from(snapshot.width()).map_err(|_| PickError::InvalidDimensions)?;
    let h = u32::try_from(snapshot.height()).map_err(|_| PickError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, snapshot.data().to_vec()).ok_or(
        PickError::BufferSizeMismatch {
            expected: snapshot.width() * snapshot.height() * 4,
            got: snapshot.data().len(),
        },
    )?;
    img.save(path)
        .map_err(|e| PickError::SurfaceCaptureUnavailable(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oklch_picker_core::color::Rgb8;

    #[test]
    fn write_then_decode_round_trip() {
        let mut snap = Snapshot::filled(16, 8, Rgb8::new(10, 20, 30)).unwrap();
        snap.set_pixel(3, 5, [200, 100, 50, 255]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");

        write_png(&snap, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let decoded = decode_png(&bytes).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 8);
        assert_eq!(decoded.pixel(3, 5), Some([200, 100, 50, 255]));
        assert_eq!(decoded.pixel(0, 0), Some([10, 20, 30, 255]));
    }

    #[test]
    fn decode_empty_is_capture_unavailable() {
        assert!(matches!(
            decode_png(&[]),
            Err(PickError::SurfaceCaptureUnavailable(_))
        ));
    }

    #[test]
    fn decode_garbage_is_capture_unavailable() {
        assert!(matches!(
            decode_png(b"definitely not a png"),
            Err(PickError::SurfaceCaptureUnavailable(_))
        ));
    }
}
