//! Host capabilities the resolver consumes.
//!
//! The resolver never touches a real rendering surface. Instead the host
//! supplies these traits; [`Scene`](crate::scene::Scene) is the in-memory
//! implementation used by the CLI and the tests.

use serde::{Deserialize, Serialize};

/// Computed style properties the resolver can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleProperty {
    BackgroundColor,
    Color,
    BorderColor,
    OutlineColor,
    Fill,
    Stroke,
}

impl StyleProperty {
    /// Order in which an element's own computed colors are tried.
    pub const OWN_COLOR_PRIORITY: [StyleProperty; 4] = [
        StyleProperty::BackgroundColor,
        StyleProperty::Color,
        StyleProperty::BorderColor,
        StyleProperty::OutlineColor,
    ];

    /// The CSS property name, e.g. `"background-color"`.
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::Color => "color",
            StyleProperty::BorderColor => "border-color",
            StyleProperty::OutlineColor => "outline-color",
            StyleProperty::Fill => "fill",
            StyleProperty::Stroke => "stroke",
        }
    }
}

/// Canonicalizes arbitrary color syntax to an `rgb(...)` string.
pub trait ColorNameResolver {
    /// Returns the `rgb(r, g, b)` form of `color`, or `None` if the host
    /// does not recognize it as a color.
    fn resolve_named_color(&self, color: &str) -> Option<String>;
}

/// A queryable snapshot of a rendered visual tree.
///
/// Element handles are cheap to clone; the resolver holds at most a couple
/// at a time while walking up the tree.
pub trait Surface: ColorNameResolver {
    /// Handle to one element of the tree.
    type Element: Clone;

    /// Topmost element at `(x, y)`, if any.
    fn hit_test(&self, x: f64, y: f64) -> Option<Self::Element>;

    /// Computed value of `property` on `element`.
    fn computed_style(&self, element: &Self::Element, property: StyleProperty) -> Option<String>;

    /// Explicit attribute value, used for vector-graphic `fill` and `stroke`.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Parent element, `None` at the root.
    fn parent_of(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Element tag name, e.g. `"div"` or `"path"`.
    fn tag_name(&self, element: &Self::Element) -> String;
}
