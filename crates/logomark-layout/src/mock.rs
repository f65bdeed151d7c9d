//! In-memory surface used by the unit tests.

use std::collections::HashMap;

use glam::DVec2;
use logomark_core::{
    Color, ContainerSpec, LogoProps, LogoSpec, NodeId, Size, SurfaceError, TextSpec, ViewBox,
};

use crate::bounds::Bounds;
use crate::surface::Surface;

const MOCK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><rect width="24" height="24"/></svg>"#;

/// Route `tracing` output through the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn sample_props() -> LogoProps {
    LogoProps {
        container: ContainerSpec::new(400.0, 300.0),
        logo: LogoSpec::new(MOCK_SVG, 100.0, 100.0),
        title: TextSpec::new("Acme", 24.0),
        slogan: TextSpec::new("Fast.", 14.0),
    }
}

enum MockNode {
    Markup { bounds: Bounds, fitted: Option<Bounds> },
    Text { bounds: Bounds },
    Group { children: Vec<NodeId> },
}

/// Text is 0.5em per character wide and 1.25em tall; markup is always 24x24.
pub struct MockSurface {
    size: Size,
    viewport: ViewBox,
    nodes: HashMap<NodeId, MockNode>,
    next_id: u64,
    /// Make text nodes report no bounding box
    pub detach_text: bool,
}

impl MockSurface {
    pub fn new() -> Self {
        Self {
            size: Size::new(400.0, 300.0),
            viewport: ViewBox::new(0.0, 0.0, 400.0, 300.0),
            nodes: HashMap::new(),
            next_id: 0,
            detach_text: false,
        }
    }

    /// Natural bounds the logo was fitted from.
    pub fn fitted(&self, node: NodeId) -> Option<Bounds> {
        match self.nodes.get(&node) {
            Some(MockNode::Markup { fitted, .. }) => *fitted,
            _ => None,
        }
    }

    fn insert(&mut self, node: MockNode) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    fn translate(&mut self, node: NodeId, delta: DVec2) -> Result<(), SurfaceError> {
        let children = match self.nodes.get_mut(&node) {
            Some(MockNode::Markup { bounds, .. }) | Some(MockNode::Text { bounds }) => {
                *bounds = bounds.translated(delta);
                return Ok(());
            }
            Some(MockNode::Group { children }) => children.clone(),
            None => return Err(SurfaceError::UnknownNode { node }),
        };
        for child in children {
            self.translate(child, delta)?;
        }
        Ok(())
    }
}

impl Surface for MockSurface {
    fn prepare(&mut self, container: &ContainerSpec) {
        self.nodes.clear();
        self.size = Size::new(container.width, container.height);
        self.viewport = container.viewbox;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn viewport(&self) -> ViewBox {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: ViewBox) {
        self.viewport = viewport;
    }

    fn import_markup(&mut self, markup: &str) -> Result<NodeId, SurfaceError> {
        if !markup.trim_start().starts_with("<svg") {
            return Err(SurfaceError::MalformedMarkup {
                reason: "expected an <svg> root".to_string(),
            });
        }
        Ok(self.insert(MockNode::Markup {
            bounds: Bounds::new(0.0, 0.0, 24.0, 24.0),
            fitted: None,
        }))
    }

    fn fit_markup(
        &mut self,
        node: NodeId,
        natural: Bounds,
        size: Size,
        _fill: Color,
    ) -> Result<(), SurfaceError> {
        match self.nodes.get_mut(&node) {
            Some(MockNode::Markup { bounds, fitted }) => {
                *fitted = Some(natural);
                *bounds = Bounds::new(bounds.x, bounds.y, size.width, size.height);
                Ok(())
            }
            _ => Err(SurfaceError::UnknownNode { node }),
        }
    }

    fn create_text(&mut self, text: &TextSpec) -> NodeId {
        let width = text.text.chars().count() as f64 * text.font_size * 0.5;
        self.insert(MockNode::Text {
            bounds: Bounds::new(0.0, 0.0, width, text.font_size * 1.25),
        })
    }

    fn bbox(&self, node: NodeId) -> Result<Bounds, SurfaceError> {
        match self.nodes.get(&node) {
            Some(MockNode::Markup { bounds, .. }) => Ok(*bounds),
            Some(MockNode::Text { bounds }) if !self.detach_text => Ok(*bounds),
            Some(MockNode::Group { children }) => {
                let boxes = children
                    .iter()
                    .map(|c| self.bbox(*c))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Bounds::union_all(&boxes).unwrap_or_default())
            }
            _ => Err(SurfaceError::UnknownNode { node }),
        }
    }

    fn move_to(&mut self, node: NodeId, x: f64, y: f64) -> Result<(), SurfaceError> {
        let current = self.bbox(node)?;
        self.translate(node, DVec2::new(x, y) - current.position())
    }

    fn group(&mut self, children: &[NodeId]) -> Result<NodeId, SurfaceError> {
        for child in children {
            if !self.nodes.contains_key(child) {
                return Err(SurfaceError::UnknownNode { node: *child });
            }
        }
        Ok(self.insert(MockNode::Group {
            children: children.to_vec(),
        }))
    }
}
