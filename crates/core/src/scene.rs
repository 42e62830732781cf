//! In-memory visual tree implementing [`Surface`].
//!
//! A [`Scene`] is built from a nested [`SceneNode`] description (usually
//! JSON) and flattened into pre-order. Pre-order doubles as paint order: a
//! later node paints over every earlier node it overlaps, which is what
//! hit-testing relies on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PickError;
use crate::named::CssNamedColors;
use crate::surface::{ColorNameResolver, StyleProperty, Surface};

/// Axis-aligned box in surface coordinates. Half-open on the far edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its origin and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if `(x, y)` lies inside the box.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// One element of a scene description, with its children nested inline.
///
/// `style` holds computed values keyed by CSS property name
/// (`"background-color"`, `"fill"`, ...). Nodes without `bounds` are part
/// of the tree but never hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Rect>,
    #[serde(default)]
    pub style: BTreeMap<String, String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Creates a node with the given tag and nothing else.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Returns the node with the given bounds.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Returns the node with a computed style value set.
    pub fn with_style(mut self, property: StyleProperty, value: impl Into<String>) -> Self {
        self.style.insert(property.css_name().to_string(), value.into());
        self
    }

    /// Returns the node with an attribute set.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Returns the node with `child` appended after any existing children.
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Handle to a node in a [`Scene`]: its pre-order index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Pre-order index of the node.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct FlatNode {
    tag: String,
    bounds: Option<Rect>,
    style: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    parent: Option<NodeId>,
}

/// A flattened, queryable visual tree.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<FlatNode>,
}

impl Scene {
    /// Flattens `root` and its descendants into a scene.
    pub fn new(root: SceneNode) -> Self {
        let mut nodes = Vec::new();
        flatten(root, None, &mut nodes);
        Self { nodes }
    }

    /// Parses a JSON scene description whose top level is the root node.
    ///
    /// Returns `PickError::InvalidScene` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, PickError> {
        let root: SceneNode =
            serde_json::from_str(json).map_err(|e| PickError::InvalidScene(e.to_string()))?;
        Ok(Self::new(root))
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the scene has no nodes. (Always false for built scenes.)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// First node in pre-order with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.tag == tag).map(NodeId)
    }

    fn node(&self, id: &NodeId) -> Option<&FlatNode> {
        self.nodes.get(id.0)
    }
}

fn flatten(node: SceneNode, parent: Option<NodeId>, out: &mut Vec<FlatNode>) {
    let id = NodeId(out.len());
    out.push(FlatNode {
        tag: node.tag,
        bounds: node.bounds,
        style: node.style,
        attributes: node.attributes,
        parent,
    });
    for child in node.children {
        flatten(child, Some(id), out);
    }
}

impl ColorNameResolver for Scene {
    fn resolve_named_color(&self, color: &str) -> Option<String> {
        CssNamedColors.resolve_named_color(color)
    }
}

impl Surface for Scene {
    type Element = NodeId;

    fn hit_test(&self, x: f64, y: f64) -> Option<NodeId> {
        self.nodes
            .iter()
            .rposition(|n| n.bounds.is_some_and(|b| b.contains(x, y)))
            .map(NodeId)
    }

    fn computed_style(&self, element: &NodeId, property: StyleProperty) -> Option<String> {
        self.node(element)?.style.get(property.css_name()).cloned()
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.node(element)?.attributes.get(name).cloned()
    }

    fn parent_of(&self, element: &NodeId) -> Option<NodeId> {
        self.node(element)?.parent
    }

    fn tag_name(&self, element: &NodeId) -> String {
        self.node(element).map(|n| n.tag.clone()).unwrap_or_default()
    }
}
