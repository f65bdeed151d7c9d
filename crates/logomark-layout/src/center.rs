//! Centering pass.

use glam::DVec2;
use logomark_core::{NodeId, Size, SurfaceError};
use tracing::debug;

use crate::bounds::Bounds;
use crate::surface::Surface;

/// Translation that puts the center of `group` on the center of the canvas.
pub fn centering_translation(canvas: Size, group: Bounds) -> DVec2 {
    let target = DVec2::new(canvas.width / 2.0, canvas.height / 2.0);
    target - group.center()
}

/// Move a group so its bounding box is centered on the surface.
///
/// Uses the declared surface size, not the viewport. Returns the translation
/// that was applied.
pub fn center_group<S: Surface>(surface: &mut S, group: NodeId) -> Result<DVec2, SurfaceError> {
    let bounds = surface.bbox(group)?;
    let delta = centering_translation(surface.size(), bounds);
    let target = bounds.position() + delta;
    surface.move_to(group, target.x, target.y)?;

    debug!(dx = delta.x, dy = delta.y, "centered group");
    Ok(delta)
}
