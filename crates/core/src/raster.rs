//! Rasterized snapshot of a surface and single-pixel sampling.
//!
//! A `Snapshot` stores `width * height` RGBA8 pixels in row-major order.
//! Sampling is the alternative resolution path: it reports exactly the pixel
//! under the point, with no fallback chain.

use crate::color::Rgb8;
use crate::error::PickError;
use crate::resolve::{ColorQuery, Resolution, VisualSource};

/// An RGBA8 raster captured from the visible surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Snapshot {
    /// Creates a snapshot from a row-major RGBA8 buffer.
    ///
    /// Returns `PickError::InvalidDimensions` if either dimension is zero or
    /// the byte count overflows `usize`, and `PickError::BufferSizeMismatch`
    /// if `data.len() != width * height * 4`.
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Result<Self, PickError> {
        if width == 0 || height == 0 {
            return Err(PickError::InvalidDimensions);
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(PickError::InvalidDimensions)?;
        if data.len() != expected {
            return Err(PickError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a snapshot filled with one opaque color.
    pub fn filled(width: usize, height: usize, color: Rgb8) -> Result<Self, PickError> {
        let len = width
            .checked_mul(height)
            .ok_or(PickError::InvalidDimensions)?;
        let data = [color.r, color.g, color.b, 255].repeat(len);
        Self::from_rgba(width, height, data)
    }

    /// Snapshot width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Snapshot height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying RGBA8 data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the RGBA bytes at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Overwrites the pixel at `(x, y)`. Out-of-range writes are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y * self.width + x) * 4;
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    /// Samples the pixel under `query`.
    ///
    /// The query is in surface coordinates; `scale` (the device pixel ratio)
    /// maps it onto the raster before flooring. Alpha is discarded. Returns
    /// `PickError::PointOutsideSnapshot` for negative, non-finite or
    /// out-of-range points.
    pub fn sample(&self, query: ColorQuery, scale: f64) -> Result<Resolution, PickError> {
        let outside = || PickError::PointOutsideSnapshot {
            x: query.x,
            y: query.y,
            width: self.width,
            height: self.height,
        };
        let px = raster_coord(query.x, scale).ok_or_else(outside)?;
        let py = raster_coord(query.y, scale).ok_or_else(outside)?;
        let [r, g, b, _] = self.pixel(px, py).ok_or_else(outside)?;
        Ok(Resolution {
            color: Rgb8 { r, g, b },
            source: VisualSource::Pixel,
        })
    }
}

/// Maps one surface coordinate to a raster index.
fn raster_coord(v: f64, scale: f64) -> Option<usize> {
    let scaled = (v * scale).floor();
    if !scaled.is_finite() || scaled < 0.0 || scaled > usize::MAX as f64 {
        return None;
    }
    Some(scaled as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> Snapshot {
        let data = (0..height)
            .flat_map(|y| (0..width).flat_map(move |x| [x as u8, y as u8, 7, 128]))
            .collect();
        Snapshot::from_rgba(width, height, data).unwrap()
    }

    #[test]
    fn from_rgba_rejects_zero_dimensions() {
        assert!(matches!(
            Snapshot::from_rgba(0, 4, vec![]),
            Err(PickError::InvalidDimensions)
        ));
        assert!(matches!(
            Snapshot::from_rgba(4, 0, vec![]),
            Err(PickError::InvalidDimensions)
        ));
    }

    #[test]
    fn from_rgba_rejects_wrong_length() {
        let err = Snapshot::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            PickError::BufferSizeMismatch {
                expected: 16,
                got: 15
            }
        ));
    }

    #[test]
    fn from_rgba_rejects_overflowing_dimensions() {
        assert!(matches!(
            Snapshot::from_rgba(usize::MAX, 2, vec![]),
            Err(PickError::InvalidDimensions)
        ));
    }

    #[test]
    fn filled_has_opaque_pixels() {
        let snap = Snapshot::filled(3, 2, Rgb8::new(1, 2, 3)).unwrap();
        assert_eq!(snap.data().len(), 3 * 2 * 4);
        assert_eq!(snap.pixel(2, 1), Some([1, 2, 3, 255]));
    }

    #[test]
    fn pixel_is_row_major() {
        let snap = gradient(4, 3);
        assert_eq!(snap.pixel(0, 0), Some([0, 0, 7, 128]));
        assert_eq!(snap.pixel(3, 2), Some([3, 2, 7, 128]));
        assert_eq!(snap.pixel(4, 0), None);
        assert_eq!(snap.pixel(0, 3), None);
    }

    #[test]
    fn set_pixel_writes_in_bounds_only() {
        let mut snap = Snapshot::filled(2, 2, Rgb8::new(0, 0, 0)).unwrap();
        snap.set_pixel(1, 1, [9, 8, 7, 6]);
        snap.set_pixel(5, 5, [1, 1, 1, 1]);
        assert_eq!(snap.pixel(1, 1), Some([9, 8, 7, 6]));
        assert_eq!(snap.pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn sample_discards_alpha() {
        let snap = gradient(4, 4);
        let res = snap.sample(ColorQuery::new(2.0, 1.0), 1.0).unwrap();
        assert_eq!(res.color, Rgb8::new(2, 1, 7));
        assert_eq!(res.source, VisualSource::Pixel);
    }

    #[test]
    fn sample_floors_fractional_points() {
        let snap = gradient(4, 4);
        let res = snap.sample(ColorQuery::new(2.9, 0.5), 1.0).unwrap();
        assert_eq!(res.color, Rgb8::new(2, 0, 7));
    }

    #[test]
    fn sample_applies_device_pixel_ratio() {
        let snap = gradient(8, 8);
        let res = snap.sample(ColorQuery::new(1.5, 3.0), 2.0).unwrap();
        assert_eq!(res.color, Rgb8::new(3, 6, 7));
    }

    #[test]
    fn sample_outside_is_reported() {
        let snap = gradient(4, 4);
        for (x, y) in [(4.0, 0.0), (0.0, 4.0), (-0.5, 1.0), (f64::NAN, 1.0), (f64::INFINITY, 0.0)] {
            assert!(
                matches!(
                    snap.sample(ColorQuery::new(x, y), 1.0),
                    Err(PickError::PointOutsideSnapshot { .. })
                ),
                "({x}, {y}) should be outside"
            );
        }
    }
}
