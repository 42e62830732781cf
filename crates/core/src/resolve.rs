//! Resolve the visible color at a point of a [`Surface`].
//!
//! Resolution hit-tests the point and then runs an ordered list of
//! strategies against the hit element; the first strategy that yields a
//! color wins:
//!
//! 1. [`own_style`]: the element's computed background, text, border and
//!    outline colors, in that order, skipping transparent values.
//! 2. [`vector_graphic`]: the nearest graphic-primitive ancestors (the
//!    element itself included) and their `fill`/`stroke` paint.
//! 3. [`ancestor_background`]: the first non-transparent background on the
//!    parent chain.
//!
//! Candidate strings that fail to parse are skipped, never reported.

use serde::{Deserialize, Serialize};
use std::iter;

use crate::color::Rgb8;
use crate::error::PickError;
use crate::parse::{is_transparent, parse_color};
use crate::surface::{StyleProperty, Surface};

/// Tags recognized as vector-graphic primitives.
pub const GRAPHIC_TAGS: [&str; 6] = ["svg", "path", "rect", "circle", "ellipse", "polygon"];

/// Where a resolved color came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "property", rename_all = "snake_case")]
pub enum VisualSource {
    /// A computed style property of the hit element.
    ComputedStyle(StyleProperty),
    /// The `fill` attribute of a graphic ancestor.
    VectorFillAttribute,
    /// The computed `fill` of a graphic ancestor.
    VectorFillStyle,
    /// The `stroke` attribute of a graphic ancestor.
    VectorStrokeAttribute,
    /// The computed `stroke` of a graphic ancestor.
    VectorStrokeStyle,
    /// The background of an ordinary ancestor.
    AncestorBackground,
    /// A raw pixel of a captured snapshot.
    Pixel,
}

impl VisualSource {
    /// Short human-readable description.
    pub fn describe(&self) -> String {
        match self {
            VisualSource::ComputedStyle(p) => format!("computed {}", p.css_name()),
            VisualSource::VectorFillAttribute => "fill attribute".to_string(),
            VisualSource::VectorFillStyle => "computed fill".to_string(),
            VisualSource::VectorStrokeAttribute => "stroke attribute".to_string(),
            VisualSource::VectorStrokeStyle => "computed stroke".to_string(),
            VisualSource::AncestorBackground => "ancestor background-color".to_string(),
            VisualSource::Pixel => "snapshot pixel".to_string(),
        }
    }
}

/// Order in which a graphic element's paint is tried.
const VECTOR_PAINT_ORDER: [VisualSource; 4] = [
    VisualSource::VectorFillAttribute,
    VisualSource::VectorStrokeAttribute,
    VisualSource::VectorFillStyle,
    VisualSource::VectorStrokeStyle,
];

/// A point to resolve, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorQuery {
    pub x: f64,
    pub y: f64,
}

impl ColorQuery {
    /// Creates a query for `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A resolved color and the source that supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub color: Rgb8,
    pub source: VisualSource,
}

/// One step of the fallback search.
pub type Strategy<S> = fn(&S, &<S as Surface>::Element) -> Option<Resolution>;

/// The fallback search, highest priority first.
pub fn strategies<S: Surface>() -> [Strategy<S>; 3] {
    [own_style::<S>, vector_graphic::<S>, ancestor_background::<S>]
}

/// Resolves the color visually present at `query`.
///
/// Returns `PickError::NoElementAtPoint` if hit-testing finds nothing and
/// `PickError::NoColorFound` once every strategy has come up empty.
pub fn resolve_color<S: Surface>(surface: &S, query: ColorQuery) -> Result<Resolution, PickError> {
    let element = surface
        .hit_test(query.x, query.y)
        .ok_or(PickError::NoElementAtPoint {
            x: query.x,
            y: query.y,
        })?;
    strategies::<S>()
        .iter()
        .find_map(|strategy| strategy(surface, &element))
        .ok_or(PickError::NoColorFound)
}

/// The element's own computed colors in [`StyleProperty::OWN_COLOR_PRIORITY`] order.
pub fn own_style<S: Surface>(surface: &S, element: &S::Element) -> Option<Resolution> {
    StyleProperty::OWN_COLOR_PRIORITY
        .iter()
        .find_map(|&property| {
            let value = surface.computed_style(element, property)?;
            Some(Resolution {
                color: visible_color(surface, &value)?,
                source: VisualSource::ComputedStyle(property),
            })
        })
}

/// Paint of the nearest graphic primitives, walking up from `element`.
///
/// Every graphic ancestor is tried in turn; within one, explicit attributes
/// beat computed styles and fill beats stroke. Only absent values and the
/// literal `none` are skipped.
pub fn vector_graphic<S: Surface>(surface: &S, element: &S::Element) -> Option<Resolution> {
    iter::successors(Some(element.clone()), |el| surface.parent_of(el))
        .filter(|el| is_graphic_tag(&surface.tag_name(el)))
        .find_map(|el| {
            VECTOR_PAINT_ORDER.iter().find_map(|&source| {
                let value = vector_paint(surface, &el, source)?;
                if value.trim().eq_ignore_ascii_case("none") {
                    return None;
                }
                Some(Resolution {
                    color: parse_color(&value, surface)?,
                    source,
                })
            })
        })
}

/// First non-transparent `background-color` among the strict ancestors.
pub fn ancestor_background<S: Surface>(surface: &S, element: &S::Element) -> Option<Resolution> {
    iter::successors(surface.parent_of(element), |el| surface.parent_of(el)).find_map(|el| {
        let value = surface.computed_style(&el, StyleProperty::BackgroundColor)?;
        Some(Resolution {
            color: visible_color(surface, &value)?,
            source: VisualSource::AncestorBackground,
        })
    })
}

/// Returns true for tags in [`GRAPHIC_TAGS`] (case insensitive).
pub fn is_graphic_tag(tag: &str) -> bool {
    GRAPHIC_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Parses a computed color unless it is transparent.
fn visible_color<S: Surface>(surface: &S, value: &str) -> Option<Rgb8> {
    if value.trim().is_empty() || is_transparent(value) {
        return None;
    }
    parse_color(value, surface)
}

fn vector_paint<S: Surface>(
    surface: &S,
    element: &S::Element,
    source: VisualSource,
) -> Option<String> {
    match source {
        VisualSource::VectorFillAttribute => surface.attribute(element, "fill"),
        VisualSource::VectorStrokeAttribute => surface.attribute(element, "stroke"),
        VisualSource::VectorFillStyle => surface.computed_style(element, StyleProperty::Fill),
        VisualSource::VectorStrokeStyle => surface.computed_style(element, StyleProperty::Stroke),
        _ => None,
    }
}
