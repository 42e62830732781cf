//! Error types for the color picker core.

use thiserror::Error;

/// Errors produced while resolving, sampling or converting a picked color.
///
/// Every variant is recoverable at the boundary of a single pick: the caller
/// reports that nothing was picked and carries on.
#[derive(Debug, Error)]
pub enum PickError {
    /// Hit-testing found no element under the point.
    #[error("no element at point ({x}, {y})")]
    NoElementAtPoint { x: f64, y: f64 },

    /// Every fallback source was exhausted without finding a visible color.
    #[error("no color found at point")]
    NoColorFound,

    /// A color string matched none of the accepted grammars.
    #[error("unparsable color: {0}")]
    UnparsableColor(String),

    /// The host could not provide a rasterized snapshot of the surface.
    #[error("surface capture unavailable: {0}")]
    SurfaceCaptureUnavailable(String),

    /// A sampled point fell outside the snapshot raster.
    #[error("point ({x}, {y}) outside snapshot of size ({width}, {height})")]
    PointOutsideSnapshot {
        x: f64,
        y: f64,
        width: usize,
        height: usize,
    },

    /// Width or height was zero when creating a snapshot.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A pixel buffer did not match the declared snapshot dimensions.
    #[error("buffer size mismatch: expected {expected} bytes, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },

    /// A scene description could not be loaded.
    #[error("invalid scene: {0}")]
    InvalidScene(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_element_at_point_includes_coordinates() {
        let err = PickError::NoElementAtPoint { x: 12.0, y: 34.5 };
        let msg = format!("{err}");
        assert!(msg.contains("12"), "missing x in: {msg}");
        assert!(msg.contains("34.5"), "missing y in: {msg}");
    }

    #[test]
    fn unparsable_color_includes_input() {
        let err = PickError::UnparsableColor("url(#grad)".into());
        let msg = format!("{err}");
        assert!(msg.contains("url(#grad)"), "missing input in: {msg}");
    }

    #[test]
    fn capture_unavailable_includes_reason() {
        let err = PickError::SurfaceCaptureUnavailable("permission denied".into());
        let msg = format!("{err}");
        assert!(
            msg.contains("permission denied"),
            "missing reason in: {msg}"
        );
    }

    #[test]
    fn point_outside_snapshot_includes_coordinates_and_dimensions() {
        let err = PickError::PointOutsideSnapshot {
            x: 100.0,
            y: 200.0,
            width: 64,
            height: 48,
        };
        let msg = format!("{err}");
        assert!(msg.contains("100"), "missing x in: {msg}");
        assert!(msg.contains("200"), "missing y in: {msg}");
        assert!(msg.contains("64"), "missing width in: {msg}");
        assert!(msg.contains("48"), "missing height in: {msg}");
    }

    #[test]
    fn buffer_size_mismatch_includes_both_sizes() {
        let err = PickError::BufferSizeMismatch {
            expected: 16,
            got: 12,
        };
        let msg = format!("{err}");
        assert!(msg.contains("16"), "missing expected in: {msg}");
        assert!(msg.contains("12"), "missing got in: {msg}");
    }

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = format!("{}", PickError::InvalidDimensions);
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn pick_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PickError>();
    }

    #[test]
    fn pick_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<PickError>();
    }
}
