//! Layout engine for Logomark compositions.
//!
//! A composition is a logo mark, a title and a slogan. Laying one out takes
//! four passes over a [`Surface`]:
//!
//! 1. [`measure_elements`] adds the elements and reads back their rendered boxes
//! 2. [`align`] places them according to a [`Placement`](logomark_core::Placement)
//! 3. [`autoscale`] grows the viewport until the container fits
//! 4. [`center_group`] centers the grouped elements on the surface
//!
//! [`compose`] runs all four.

pub mod align;
pub mod autoscale;
pub mod bounds;
pub mod center;
pub mod compose;
pub mod measure;
pub mod surface;
pub mod text;

#[cfg(test)]
mod mock;

pub use align::{
    align, arrange, Arrangement, ContainerMetrics, ElementOffsets, LayoutInput, LEADING_CORRECTION,
};
pub use autoscale::{autoscale, autoscale_viewport, AUTOSCALE_MARGIN};
pub use bounds::Bounds;
pub use center::{center_group, centering_translation};
pub use compose::{compose, resolve_placement, Composition, PlacedElements};
pub use measure::{measure_elements, ElementDimensions, MeasuredElement, Measurements};
pub use surface::Surface;
pub use text::{measure_text, TextMetrics, TextStyle};
