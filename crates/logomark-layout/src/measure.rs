//! Measurement adapter.
//!
//! Adds each element to the surface, applies its styling and reads back the
//! rendered box. The resulting [`Measurements`] are all the alignment strategies
//! need to know about the surface.

use logomark_core::{ElementKind, LayoutError, LogoProps, NodeId, Settings, Size, TextSpec};
use tracing::debug;

use crate::bounds::Bounds;
use crate::surface::Surface;

/// Element size including its margins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementDimensions {
    pub width: f64,
    pub height: f64,
}

impl ElementDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One element after it has been added to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredElement {
    pub kind: ElementKind,
    /// Handle on the surface
    pub node: NodeId,
    /// Layout size: intrinsic size plus margins
    pub dims: ElementDimensions,
    /// Box the surface reports after styling
    pub rendered: Bounds,
}

/// The three measured elements of a composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub logo: MeasuredElement,
    pub title: MeasuredElement,
    pub slogan: MeasuredElement,
}

impl Measurements {
    pub fn nodes(&self) -> [NodeId; 3] {
        [self.logo.node, self.title.node, self.slogan.node]
    }
}

/// Add the logo, title and slogan to the surface and measure them.
pub fn measure_elements<S: Surface>(
    surface: &mut S,
    props: &LogoProps,
    settings: &Settings,
) -> Result<Measurements, LayoutError> {
    let logo = measure_logo(surface, props, settings)?;
    let title = measure_text_element(surface, ElementKind::Title, &props.title, settings)?;
    let slogan = measure_text_element(surface, ElementKind::Slogan, &props.slogan, settings)?;

    Ok(Measurements { logo, title, slogan })
}

fn measure_logo<S: Surface>(
    surface: &mut S,
    props: &LogoProps,
    settings: &Settings,
) -> Result<MeasuredElement, LayoutError> {
    let logo = &props.logo;
    // Markup errors are fatal and propagate as surface errors.
    let node = surface.import_markup(&logo.svg)?;

    let natural = rendered_bounds(surface, ElementKind::Logo, node)?;
    surface.fit_markup(node, natural, Size::new(logo.width, logo.height), logo.fill)?;
    let rendered = rendered_bounds(surface, ElementKind::Logo, node)?;

    let margins = settings.margins(ElementKind::Logo);
    let dims = ElementDimensions::new(
        margins.horizontal() + logo.width,
        margins.vertical() + logo.height,
    );

    debug!(
        natural_width = natural.width,
        natural_height = natural.height,
        width = dims.width,
        height = dims.height,
        "measured logo"
    );

    Ok(MeasuredElement {
        kind: ElementKind::Logo,
        node,
        dims,
        rendered,
    })
}

fn measure_text_element<S: Surface>(
    surface: &mut S,
    kind: ElementKind,
    spec: &TextSpec,
    settings: &Settings,
) -> Result<MeasuredElement, LayoutError> {
    let node = surface.create_text(spec);
    let rendered = rendered_bounds(surface, kind, node)?;

    // Height comes from the font size, width from what was actually rendered.
    let margins = settings.margins(kind);
    let dims = ElementDimensions::new(
        margins.horizontal() + rendered.width,
        margins.vertical() + spec.font_size,
    );

    debug!(
        element = %kind,
        rendered_width = rendered.width,
        rendered_height = rendered.height,
        width = dims.width,
        height = dims.height,
        "measured text"
    );

    Ok(MeasuredElement {
        kind,
        node,
        dims,
        rendered,
    })
}

fn rendered_bounds<S: Surface>(
    surface: &S,
    element: ElementKind,
    node: NodeId,
) -> Result<Bounds, LayoutError> {
    surface
        .bbox(node)
        .map_err(|e| LayoutError::MissingMeasurement {
            element,
            reason: e.to_string(),
        })
}
