//! Viewport growth.
//!
//! When the composed container is larger than the current viewport, the viewport
//! grows on the overflowing axis so nothing is clipped. It never shrinks.

use logomark_core::{Size, ViewBox};
use tracing::debug;

use crate::surface::Surface;

/// Extra room added to an axis once it overflows.
pub const AUTOSCALE_MARGIN: f64 = 100.0;

/// Viewport that can hold `required`.
///
/// Each axis is checked on its own. An axis that overflows becomes
/// `required + AUTOSCALE_MARGIN`; one that fits keeps its extent. The origin is
/// reset to `(0, 0)` whenever this is applied.
pub fn autoscale_viewport(current: ViewBox, required: Size) -> ViewBox {
    let width = if required.width > current.width {
        required.width + AUTOSCALE_MARGIN
    } else {
        current.width
    };
    let height = if required.height > current.height {
        required.height + AUTOSCALE_MARGIN
    } else {
        current.height
    };
    ViewBox::new(0.0, 0.0, width, height)
}

/// Grow the surface viewport to fit a container of size `required`.
pub fn autoscale<S: Surface>(surface: &mut S, required: Size) -> ViewBox {
    let current = surface.viewport();
    let viewport = autoscale_viewport(current, required);

    if viewport.size() != current.size() {
        debug!(
            from = %current,
            to = %viewport,
            "viewport grown to fit container"
        );
    }
    surface.set_viewport(viewport);
    viewport
}
