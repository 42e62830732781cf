//! Color-string parsing shared by every resolution step.
//!
//! Three grammars are tried in order: `rgb()`/`rgba()` functional notation,
//! 3- or 6-digit hex, and finally whatever the host can canonicalize through
//! [`ColorNameResolver`]. The strict parsers return `PickError::UnparsableColor`;
//! [`parse_color`] folds every failure into `None` so callers can skip the
//! candidate and keep searching.

use crate::color::Rgb8;
use crate::error::PickError;
use crate::surface::ColorNameResolver;

/// Parses `s` with all three grammars, returning `None` if none matches.
pub fn parse_color<R: ColorNameResolver + ?Sized>(s: &str, resolver: &R) -> Option<Rgb8> {
    let s = s.trim();
    if let Ok(c) = parse_rgb_function(s) {
        return Some(c);
    }
    if let Ok(c) = parse_hex(s) {
        return Some(c);
    }
    let canonical = resolver.resolve_named_color(s)?;
    parse_rgb_function(&canonical).ok()
}

/// Returns true if `s` is the `transparent` keyword or an `rgb()`/`rgba()`
/// form whose alpha is exactly zero.
///
/// Any other alpha, partial included, counts as opaque.
pub fn is_transparent(s: &str) -> bool {
    let s = s.trim();
    if s.eq_ignore_ascii_case("transparent") {
        return true;
    }
    matches!(parse_rgb_components(s), Ok((_, Some(alpha))) if alpha == 0.0)
}

/// Parses `rgb(r, g, b)` / `rgba(r, g, b, a)` (comma or space separated,
/// alpha optionally after `/`). The alpha channel is discarded.
pub fn parse_rgb_function(s: &str) -> Result<Rgb8, PickError> {
    parse_rgb_components(s).map(|(color, _)| color)
}

/// Parses `#rgb` or `#rrggbb` (case insensitive). The 3-digit form
/// duplicates each digit.
pub fn parse_hex(s: &str) -> Result<Rgb8, PickError> {
    let invalid = || PickError::UnparsableColor(s.to_string());
    let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
    match hex.len() {
        3 => Ok(Rgb8 {
            r: channel(&hex[0..1].repeat(2))?,
            g: channel(&hex[1..2].repeat(2))?,
            b: channel(&hex[2..3].repeat(2))?,
        }),
        6 => Ok(Rgb8 {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        _ => Err(invalid()),
    }
}

/// Splits an `rgb()`/`rgba()` string into its color and optional alpha.
fn parse_rgb_components(s: &str) -> Result<(Rgb8, Option<f64>), PickError> {
    let invalid = || PickError::UnparsableColor(s.to_string());
    let s = s.trim();
    let body = strip_prefix_ignore_case(s, "rgba(")
        .or_else(|| strip_prefix_ignore_case(s, "rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let (channels, slash_alpha) = match body.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (body, None),
    };

    let mut parts: Vec<&str> = if channels.contains(',') {
        channels.split(',').map(str::trim).collect()
    } else {
        channels.split_whitespace().collect()
    };

    let alpha_token = match (slash_alpha, parts.len()) {
        (Some(alpha), 3) => Some(alpha),
        (None, 4) if channels.contains(',') => parts.pop(),
        (None, 3) => None,
        _ => return Err(invalid()),
    };

    let channel = |token: &str| token.parse::<u8>().map_err(|_| invalid());
    let color = Rgb8 {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
    };
    let alpha = alpha_token
        .map(|token| parse_alpha(token).ok_or_else(invalid))
        .transpose()?;
    Ok((color, alpha))
}

/// Parses an alpha value given as a number or a percentage.
fn parse_alpha(token: &str) -> Option<f64> {
    let value = match token.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok()? / 100.0,
        None => token.parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}
