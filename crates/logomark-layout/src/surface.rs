//! The drawing surface capability the layout engine talks to.
//!
//! Anything that can hold vector markup and text, report their bounding boxes
//! and move them around can host a composition. The layout math only ever goes
//! through this trait, which keeps it testable without a real renderer.

use logomark_core::{Color, ContainerSpec, NodeId, Size, SurfaceError, TextSpec, ViewBox};

use crate::bounds::Bounds;

/// A vector canvas the layout engine can populate.
///
/// Positions are absolute, in viewport coordinates. `move_to` places the
/// top-left corner of a node's bounding box at the given point.
pub trait Surface {
    /// Drop all content, then size the surface and set its viewport and background.
    fn prepare(&mut self, container: &ContainerSpec);

    /// The declared size of the surface.
    fn size(&self) -> Size;

    /// The current viewport.
    fn viewport(&self) -> ViewBox;

    /// Replace the viewport.
    fn set_viewport(&mut self, viewport: ViewBox);

    /// Import raw vector markup as a new child. Its bounding box is the markup's
    /// natural extent until [`Surface::fit_markup`] is called.
    fn import_markup(&mut self, markup: &str) -> Result<NodeId, SurfaceError>;

    /// Map the natural extent of imported markup onto `size`, filled with `fill`.
    fn fit_markup(
        &mut self,
        node: NodeId,
        natural: Bounds,
        size: Size,
        fill: Color,
    ) -> Result<(), SurfaceError>;

    /// Create a styled text node at the origin.
    fn create_text(&mut self, text: &TextSpec) -> NodeId;

    /// Rendered bounding box of a node (or group).
    fn bbox(&self, node: NodeId) -> Result<Bounds, SurfaceError>;

    /// Move a node (or group) so its bounding box starts at `(x, y)`.
    fn move_to(&mut self, node: NodeId, x: f64, y: f64) -> Result<(), SurfaceError>;

    /// Wrap existing children in a group that moves as one.
    fn group(&mut self, children: &[NodeId]) -> Result<NodeId, SurfaceError>;
}
