//! In-memory scene graph.

use glam::DVec2;
use logomark_core::{Color, ContainerSpec, NodeId, Size, SurfaceError, TextSpec, ViewBox};
use logomark_layout::{measure_text, Bounds, Surface, TextMetrics, TextStyle};
use tracing::trace;

use crate::markup::parse_markup;

/// Imported vector markup.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupNode {
    /// Markup starting at its root `<svg>` element
    pub markup: String,
    /// Size of the markup's own canvas
    pub canvas: Size,
    /// Region of the canvas that is shown
    pub natural: Bounds,
    /// Displayed size
    pub size: Size,
    pub fill: Option<Color>,
    /// Top-left corner, in the parent's coordinates
    pub position: DVec2,
}

/// A single line of styled text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub spec: TextSpec,
    pub metrics: TextMetrics,
    /// Top-left corner of the text box, in the parent's coordinates
    pub position: DVec2,
}

/// Nodes that move together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupNode {
    pub children: Vec<NodeId>,
    /// Translation applied to every child
    pub offset: DVec2,
}

/// A node in the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Markup(MarkupNode),
    Text(TextNode),
    Group(GroupNode),
}

#[derive(Debug, Clone)]
struct Entry {
    node: SceneNode,
    parent: Option<NodeId>,
}

/// A canvas holding the elements of one composition.
#[derive(Debug, Clone)]
pub struct Scene {
    size: Size,
    viewport: ViewBox,
    background: Color,
    class: Option<String>,
    nodes: Vec<Entry>,
    roots: Vec<NodeId>,
    prepared: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty, unprepared scene.
    pub fn new() -> Self {
        Self {
            size: Size::default(),
            viewport: ViewBox::default(),
            background: Color::TRANSPARENT,
            class: None,
            nodes: Vec::new(),
            roots: Vec::new(),
            prepared: false,
        }
    }

    /// Create a scene already prepared for `container`.
    pub fn with_container(container: &ContainerSpec) -> Self {
        let mut scene = Self::new();
        scene.prepare(container);
        scene
    }

    /// Remove all nodes. Size and viewport are kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Top-level nodes in paint order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.entry(id).ok().map(|e| &e.node)
    }

    /// Number of nodes, groups included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn entry(&self, id: NodeId) -> Result<&Entry, SurfaceError> {
        self.nodes
            .get(id.0 as usize)
            .ok_or(SurfaceError::UnknownNode { node: id })
    }

    fn entry_mut(&mut self, id: NodeId) -> Result<&mut Entry, SurfaceError> {
        self.nodes
            .get_mut(id.0 as usize)
            .ok_or(SurfaceError::UnknownNode { node: id })
    }

    fn push(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u64);
        self.nodes.push(Entry { node, parent: None });
        self.roots.push(id);
        id
    }

    /// Bounds in the coordinates of the node's parent.
    fn local_bounds(&self, id: NodeId) -> Result<Bounds, SurfaceError> {
        match &self.entry(id)?.node {
            SceneNode::Markup(m) => Ok(Bounds::from_vecs(
                m.position,
                DVec2::new(m.size.width, m.size.height),
            )),
            SceneNode::Text(t) => Ok(Bounds::from_vecs(
                t.position,
                DVec2::new(t.metrics.width, t.metrics.height),
            )),
            SceneNode::Group(g) => {
                let children = g
                    .children
                    .iter()
                    .map(|c| self.local_bounds(*c))
                    .collect::<Result<Vec<_>, _>>()?;
                let inner = Bounds::union_all(&children).unwrap_or_default();
                Ok(inner.translated(g.offset))
            }
        }
    }

    /// Origin of the node's parent, in scene coordinates.
    fn parent_origin(&self, id: NodeId) -> Result<DVec2, SurfaceError> {
        let mut origin = DVec2::ZERO;
        let mut current = self.entry(id)?.parent;
        while let Some(parent) = current {
            let entry = self.entry(parent)?;
            if let SceneNode::Group(g) = &entry.node {
                origin += g.offset;
            }
            current = entry.parent;
        }
        Ok(origin)
    }

    fn shift(&mut self, id: NodeId, delta: DVec2) -> Result<(), SurfaceError> {
        match &mut self.entry_mut(id)?.node {
            SceneNode::Markup(m) => m.position += delta,
            SceneNode::Text(t) => t.position += delta,
            SceneNode::Group(g) => g.offset += delta,
        }
        Ok(())
    }

    fn detach(&mut self, id: NodeId) -> Result<(), SurfaceError> {
        match self.entry(id)?.parent {
            Some(parent) => {
                if let SceneNode::Group(g) = &mut self.entry_mut(parent)?.node {
                    g.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|r| *r != id),
        }
        self.entry_mut(id)?.parent = None;
        Ok(())
    }
}

impl Surface for Scene {
    fn prepare(&mut self, container: &ContainerSpec) {
        self.clear();
        self.size = Size::new(container.width, container.height);
        self.viewport = container.viewbox;
        self.background = container.background_color;
        self.class = container.class.clone();
        self.prepared = true;
        trace!(
            width = container.width,
            height = container.height,
            viewbox = %container.viewbox,
            "prepared scene"
        );
    }

    fn size(&self) -> Size {
        self.size
    }

    fn viewport(&self) -> ViewBox {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: ViewBox) {
        trace!(viewbox = %viewport, "set viewport");
        self.viewport = viewport;
    }

    fn import_markup(&mut self, markup: &str) -> Result<NodeId, SurfaceError> {
        let parsed = parse_markup(markup)?;
        let id = self.push(SceneNode::Markup(MarkupNode {
            markup: parsed.markup,
            canvas: parsed.canvas,
            natural: parsed.natural,
            size: parsed.natural.size(),
            fill: None,
            position: parsed.natural.position(),
        }));
        trace!(node = %id, "imported markup");
        Ok(id)
    }

    fn fit_markup(
        &mut self,
        node: NodeId,
        natural: Bounds,
        size: Size,
        fill: Color,
    ) -> Result<(), SurfaceError> {
        match &mut self.entry_mut(node)?.node {
            SceneNode::Markup(m) => {
                m.natural = natural;
                m.size = size;
                m.fill = Some(fill);
            }
            _ => return Err(SurfaceError::UnknownNode { node }),
        }
        trace!(node = %node, width = size.width, height = size.height, "fitted markup");
        Ok(())
    }

    fn create_text(&mut self, text: &TextSpec) -> NodeId {
        let metrics = measure_text(&text.text, &TextStyle::for_spec(text));
        let id = self.push(SceneNode::Text(TextNode {
            spec: text.clone(),
            metrics,
            position: DVec2::ZERO,
        }));
        trace!(node = %id, width = metrics.width, height = metrics.height, "created text");
        id
    }

    fn bbox(&self, node: NodeId) -> Result<Bounds, SurfaceError> {
        let local = self.local_bounds(node)?;
        Ok(local.translated(self.parent_origin(node)?))
    }

    fn move_to(&mut self, node: NodeId, x: f64, y: f64) -> Result<(), SurfaceError> {
        let current = self.bbox(node)?;
        let delta = DVec2::new(x, y) - current.position();
        self.shift(node, delta)?;
        trace!(node = %node, x, y, "moved node");
        Ok(())
    }

    fn group(&mut self, children: &[NodeId]) -> Result<NodeId, SurfaceError> {
        for child in children {
            self.entry(*child)?;
        }

        let id = self.push(SceneNode::Group(GroupNode::default()));
        for &child in children {
            // Keep the child where it is on the canvas once it loses its old parent.
            let origin = self.parent_origin(child)?;
            self.detach(child)?;
            self.shift(child, origin)?;
            self.entry_mut(child)?.parent = Some(id);
            if let SceneNode::Group(g) = &mut self.entry_mut(id)?.node {
                g.children.push(child);
            }
        }
        trace!(node = %id, children = children.len(), "grouped nodes");
        Ok(id)
    }
}
