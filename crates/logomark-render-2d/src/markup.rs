//! Logo markup parsing.

use logomark_core::{Size, SurfaceError};
use logomark_layout::Bounds;
use tracing::trace;

/// Vector markup checked by the SVG parser.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMarkup {
    /// Source markup starting at the root `<svg>` element
    pub markup: String,
    /// Size of the markup's own canvas
    pub canvas: Size,
    /// Extent of the drawn content inside that canvas
    pub natural: Bounds,
}

/// Parse SVG markup and find the extent of what it draws.
///
/// Markup that draws nothing measurable reports its whole canvas.
pub fn parse_markup(markup: &str) -> Result<ParsedMarkup, SurfaceError> {
    let tree = usvg::Tree::from_str(markup, &usvg::Options::default()).map_err(|e| {
        SurfaceError::MalformedMarkup {
            reason: e.to_string(),
        }
    })?;

    let size = tree.size();
    let canvas = Size::new(size.width() as f64, size.height() as f64);

    let bbox = tree.root().abs_bounding_box();
    let natural = if bbox.width() > 0.0 && bbox.height() > 0.0 {
        Bounds::new(
            bbox.x() as f64,
            bbox.y() as f64,
            bbox.width() as f64,
            bbox.height() as f64,
        )
    } else {
        Bounds::new(0.0, 0.0, canvas.width, canvas.height)
    };

    trace!(
        canvas_width = canvas.width,
        canvas_height = canvas.height,
        natural_x = natural.x,
        natural_y = natural.y,
        "parsed logo markup"
    );

    Ok(ParsedMarkup {
        markup: strip_prolog(markup).to_string(),
        canvas,
        natural,
    })
}

/// Drop anything before the root element (XML declaration, doctype, comments).
fn strip_prolog(markup: &str) -> &str {
    match markup.find("<svg") {
        Some(start) => markup[start..].trim_end(),
        None => markup.trim(),
    }
}
