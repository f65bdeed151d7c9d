//! Axis-aligned bounding boxes.

use glam::DVec2;
use logomark_core::Size;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    /// Top-left corner
    pub x: f64,
    pub y: f64,
    /// Size of the box
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create bounds from position and size vectors.
    pub fn from_vecs(position: DVec2, size: DVec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Get position as a vector.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Get size as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Get the center X coordinate.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Get the center Y coordinate.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.center_x(), self.center_y())
    }

    /// Same size, moved so the top-left corner sits at `position`.
    pub fn moved_to(&self, position: DVec2) -> Bounds {
        Bounds::new(position.x, position.y, self.width, self.height)
    }

    /// Same size, shifted by `offset`.
    pub fn translated(&self, offset: DVec2) -> Bounds {
        self.moved_to(self.position() + offset)
    }

    /// Compute union (bounding box) with another bounds.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Bounds::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Bounding box of a set of boxes, `None` when empty.
    pub fn union_all<'a>(bounds: impl IntoIterator<Item = &'a Bounds>) -> Option<Bounds> {
        bounds
            .into_iter()
            .fold(None, |acc: Option<Bounds>, b| match acc {
                Some(acc) => Some(acc.union(b)),
                None => Some(*b),
            })
    }
}
