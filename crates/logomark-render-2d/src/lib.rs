//! 2D scene for Logomark compositions.
//!
//! [`Scene`] is an in-memory [`Surface`](logomark_layout::Surface): it keeps the
//! imported logo markup, styled text and groups, and answers bounding box
//! queries from parsed markup extents and heuristic text metrics. Exporters
//! walk the finished scene.

pub mod markup;
pub mod scene;

pub use markup::{parse_markup, ParsedMarkup};
pub use scene::{GroupNode, MarkupNode, Scene, SceneNode, TextNode};
