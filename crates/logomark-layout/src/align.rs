//! Alignment strategies.
//!
//! One function covers all three placements. They share the container and text
//! column arithmetic and differ only in where each element's offset lands:
//!
//! - [`Placement::Stacked`]: logo, title and slogan stacked on a shared vertical axis.
//! - [`Placement::LeftAnchored`]: logo column first, text column after it.
//! - [`Placement::RightAnchored`]: text column first, logo column after it.
//!
//! All offsets are relative to the container's top-left corner at `(0, 0)`.

use glam::DVec2;
use logomark_core::{LayoutError, Placement, Size};
use tracing::debug;

use crate::bounds::Bounds;
use crate::measure::{ElementDimensions, Measurements};
use crate::surface::Surface;

/// Share of the gap between the rendered title height and its font size that
/// the slogan is pushed down by.
///
/// Rendered text boxes include the font's leading while the computed title
/// height is just the font size. Shifting the slogan by 30% of that difference
/// matched the rendered output of the fonts this was tuned against; it is not
/// derived from font metrics.
pub const LEADING_CORRECTION: f64 = 0.3;

/// Bounding box enclosing the three placed elements.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerMetrics {
    pub x: f64,
    pub y: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerMetrics {
    /// Metrics of a container anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            center_x: width / 2.0,
            center_y: height / 2.0,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

/// Top-left offset of each element inside the container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementOffsets {
    pub logo: DVec2,
    pub title: DVec2,
    pub slogan: DVec2,
}

/// What the strategies need to know about the measured elements.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutInput {
    pub logo: ElementDimensions,
    pub title: ElementDimensions,
    pub slogan: ElementDimensions,
    /// Height of the title's rendered box, used for the leading correction
    pub title_rendered_height: f64,
}

impl From<&Measurements> for LayoutInput {
    fn from(m: &Measurements) -> Self {
        Self {
            logo: m.logo.dims,
            title: m.title.dims,
            slogan: m.slogan.dims,
            title_rendered_height: m.title.rendered.height,
        }
    }
}

impl LayoutInput {
    /// Vertical nudge applied to the slogan.
    pub fn leading_correction(&self) -> f64 {
        LEADING_CORRECTION * (self.title_rendered_height - self.title.height)
    }
}

/// Result of running a strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrangement {
    pub placement: Placement,
    pub metrics: ContainerMetrics,
    pub offsets: ElementOffsets,
}

/// Title over slogan, as placed by the side-by-side strategies.
struct TextColumn {
    width: f64,
    height: f64,
}

impl TextColumn {
    fn new(input: &LayoutInput) -> Self {
        Self {
            width: input.title.width.max(input.slogan.width),
            height: input.title.height + input.slogan.height,
        }
    }

    fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    fn center_y(&self) -> f64 {
        self.height / 2.0
    }
}

/// Compute container metrics and element offsets for a placement.
pub fn arrange(placement: Placement, input: &LayoutInput) -> Arrangement {
    let LayoutInput {
        logo,
        title,
        slogan,
        ..
    } = *input;
    let leading = input.leading_correction();

    let (metrics, offsets) = match placement {
        Placement::Stacked => {
            let width = logo.width.max(title.width).max(slogan.width);
            let height = logo.height + title.height + slogan.height;
            let metrics = ContainerMetrics::from_size(width, height);
            let cx = metrics.center_x;

            let offsets = ElementOffsets {
                logo: DVec2::new(cx - logo.width / 2.0, 0.0),
                title: DVec2::new(cx - title.width / 2.0, logo.height),
                slogan: DVec2::new(
                    cx - slogan.width / 2.0,
                    logo.height + title.height + leading,
                ),
            };
            (metrics, offsets)
        }
        Placement::LeftAnchored | Placement::RightAnchored => {
            let column = TextColumn::new(input);
            let width = logo.width + column.width;
            let height = logo.height.max(column.height);
            let metrics = ContainerMetrics::from_size(width, height);
            let cy = metrics.center_y;

            let (logo_x, column_x) = if placement == Placement::LeftAnchored {
                (0.0, logo.width)
            } else {
                (column.width, 0.0)
            };
            let ctx = column.center_x();
            let cty = column.center_y();

            let offsets = ElementOffsets {
                logo: DVec2::new(logo_x, cy - logo.height / 2.0),
                title: DVec2::new(
                    column_x + ctx - title.width / 2.0,
                    cy - (cty - title.height / 2.0) - title.height / 2.0,
                ),
                slogan: DVec2::new(
                    column_x + ctx - slogan.width / 2.0,
                    cy + (cty - slogan.height / 2.0) - slogan.height / 2.0 + leading,
                ),
            };
            (metrics, offsets)
        }
    };

    Arrangement {
        placement,
        metrics,
        offsets,
    }
}

/// Run a strategy over measured elements and move them into place.
pub fn align<S: Surface>(
    surface: &mut S,
    placement: Placement,
    measurements: &Measurements,
) -> Result<Arrangement, LayoutError> {
    let arrangement = arrange(placement, &LayoutInput::from(measurements));
    let offsets = &arrangement.offsets;

    for (node, offset) in [
        (measurements.logo.node, offsets.logo),
        (measurements.title.node, offsets.title),
        (measurements.slogan.node, offsets.slogan),
    ] {
        surface.move_to(node, offset.x, offset.y)?;
    }

    debug!(
        placement = %placement,
        width = arrangement.metrics.width,
        height = arrangement.metrics.height,
        "aligned elements"
    );

    Ok(arrangement)
}
