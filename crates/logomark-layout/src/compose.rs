//! The full layout pass: measure, align, autoscale, center.

use glam::DVec2;
use logomark_core::{LayoutError, LogoProps, NodeId, Placement, Settings, ViewBox};
use tracing::{debug, warn};

use crate::align::{align, ContainerMetrics};
use crate::autoscale::autoscale;
use crate::center::center_group;
use crate::measure::measure_elements;
use crate::surface::Surface;

/// Parse an alignment mode, falling back to [`Placement::Stacked`].
///
/// An unknown mode is not an error; it is logged and laid out as `align-top`.
pub fn resolve_placement(mode: &str) -> Placement {
    match mode.parse::<Placement>() {
        Ok(placement) => placement,
        Err(err) => {
            warn!(mode, error = %err, "falling back to align-top");
            Placement::Stacked
        }
    }
}

/// Handles to the elements on the surface after layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedElements {
    pub logo: NodeId,
    pub title: NodeId,
    pub slogan: NodeId,
    /// Group wrapping the three elements
    pub group: NodeId,
}

/// Outcome of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition {
    /// Placement actually used, after fallback
    pub placement: Placement,
    pub metrics: ContainerMetrics,
    pub elements: PlacedElements,
    /// Viewport after autoscaling
    pub viewport: ViewBox,
    /// Translation applied by the centering pass
    pub translation: DVec2,
}

/// Lay out a logo composition on `surface`.
///
/// The surface is cleared first, so running this twice with the same inputs
/// produces the same geometry.
pub fn compose<S: Surface>(
    surface: &mut S,
    props: &LogoProps,
    settings: &Settings,
) -> Result<Composition, LayoutError> {
    surface.prepare(&props.container);
    let placement = resolve_placement(&props.container.align);

    let measurements = measure_elements(surface, props, settings)?;
    let arrangement = align(surface, placement, &measurements)?;
    let viewport = autoscale(surface, arrangement.metrics.size());

    let group = surface.group(&measurements.nodes())?;
    let translation = center_group(surface, group)?;

    debug!(
        placement = %placement,
        width = arrangement.metrics.width,
        height = arrangement.metrics.height,
        viewport = %viewport,
        "composed logo"
    );

    Ok(Composition {
        placement,
        metrics: arrangement.metrics,
        elements: PlacedElements {
            logo: measurements.logo.node,
            title: measurements.title.node,
            slogan: measurements.slogan.node,
            group,
        },
        viewport,
        translation,
    })
}
